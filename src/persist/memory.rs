use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use log::{debug, warn};

use super::{EnumStore, StoredState};
use crate::core::Result;

type Row = serde_json::Map<String, serde_json::Value>;

/// In-memory [`EnumStore`] backend.
///
/// Serves as the reference implementation and as the test double for models
/// declared with write-through enum attributes.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<HashMap<String, HashMap<String, Row>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows currently held in `table`.
    pub fn row_count(&self, table: &str) -> Result<usize> {
        let tables = self.tables.read()?;
        Ok(tables.get(table).map(|rows| rows.len()).unwrap_or(0))
    }

    /// Reads a single stored field without going through the async contract.
    /// Test/inspection helper.
    pub fn field(&self, table: &str, id: &str, field: &str) -> Result<Option<serde_json::Value>> {
        let tables = self.tables.read()?;
        Ok(tables
            .get(table)
            .and_then(|rows| rows.get(id))
            .and_then(|row| row.get(field))
            .cloned())
    }
}

#[async_trait]
impl EnumStore for MemoryStore {
    async fn update_field(
        &self,
        table: &str,
        id: &str,
        field: &str,
        value: serde_json::Value,
    ) -> Result<()> {
        let mut tables = self.tables.write()?;
        let rows = tables.entry(table.to_string()).or_default();
        if !rows.contains_key(id) {
            warn!(
                "update_field on missing row '{}' in table '{}', creating it",
                id, table
            );
        }
        let row = rows.entry(id.to_string()).or_default();
        row.insert(field.to_string(), value);
        debug!("updated field '{}' of '{}' in table '{}'", field, id, table);
        Ok(())
    }

    async fn load_state(&self, table: &str, id: &str) -> Result<Option<StoredState>> {
        let tables = self.tables.read()?;
        let Some(row) = tables.get(table).and_then(|rows| rows.get(id)) else {
            return Ok(None);
        };

        Ok(Some(StoredState {
            table_name: table.to_string(),
            entity_id: id.to_string(),
            fields: serde_json::Value::Object(row.clone()),
        }))
    }

    async fn save_state(&self, table: &str, id: &str, fields: serde_json::Value) -> Result<()> {
        let row = match fields {
            serde_json::Value::Object(map) => map,
            other => {
                return Err(crate::core::EnumAttrError::StoreError(format!(
                    "Entity state must be a JSON object, got {}",
                    other
                )));
            }
        };

        let mut tables = self.tables.write()?;
        tables
            .entry(table.to_string())
            .or_default()
            .insert(id.to_string(), row);
        debug!("saved entity '{}' into table '{}'", id, table);
        Ok(())
    }
}
