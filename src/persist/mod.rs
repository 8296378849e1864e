//! Persistence seam for enum attributes.
//!
//! The store is treated as opaque: all the generated code needs from it is a
//! way to address an entity (`StoredEntity`), a write-through single-field
//! update, and a post-load hook point (`load_with_defaults`). Any backend that
//! can do those three things can carry enum attributes; [`MemoryStore`] is the
//! bundled reference implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use uuid::Uuid;

use crate::core::{EnumAttrError, Result};
use crate::model::EnumAttrModel;

mod memory;

pub use memory::MemoryStore;

/// Raw state of an entity as held by a store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredState {
    pub table_name: String,
    pub entity_id: String,
    pub fields: serde_json::Value,
}

impl StoredState {
    /// Returns the fields as a JSON object, or an error if they are not one.
    pub fn fields_object(&self) -> Result<&serde_json::Map<String, serde_json::Value>> {
        self.fields.as_object().ok_or_else(|| {
            EnumAttrError::StoreError("Stored fields must be a JSON object".to_string())
        })
    }

    /// Sets a single field in the JSON fields object.
    pub fn set_json_field(
        &mut self,
        name: impl Into<String>,
        value: serde_json::Value,
    ) -> Result<()> {
        let fields = self.fields.as_object_mut().ok_or_else(|| {
            EnumAttrError::StoreError("Stored fields must be a JSON object".to_string())
        })?;
        fields.insert(name.into(), value);
        Ok(())
    }
}

/// Capability trait for models whose enum attributes write through to a store.
///
/// Implemented by the caller, never inferred. A declaration opts into the
/// write-through surface with the `persisted` flag, and the compiler then
/// requires this trait on the declaring type.
pub trait StoredEntity {
    /// Table (or collection) holding this entity.
    fn store_table(&self) -> &str;
    /// Identity of this entity within its table.
    fn store_id(&self) -> &str;
}

/// Backend contract for write-through enum attributes.
#[async_trait]
pub trait EnumStore: Send + Sync {
    /// Writes a single field of an entity, immediately.
    async fn update_field(
        &self,
        table: &str,
        id: &str,
        field: &str,
        value: serde_json::Value,
    ) -> Result<()>;

    /// Loads the raw state of an entity, or `None` if it does not exist.
    async fn load_state(&self, table: &str, id: &str) -> Result<Option<StoredState>>;

    /// Stores the full field set of an entity, replacing any previous state.
    async fn save_state(&self, table: &str, id: &str, fields: serde_json::Value) -> Result<()>;
}

/// Loads an entity and applies its configured enum defaults afterwards.
///
/// This is the post-load hook point: fields already populated in the store are
/// left untouched, fields the store never saw get their declared default.
pub async fn load_with_defaults<T, S>(store: &S, table: &str, id: &str) -> Result<Option<T>>
where
    T: DeserializeOwned + EnumAttrModel,
    S: EnumStore + ?Sized,
{
    let Some(state) = store.load_state(table, id).await? else {
        return Ok(None);
    };

    log::debug!("loaded entity '{}' from table '{}'", id, table);

    let mut entity: T = serde_json::from_value(state.fields)
        .map_err(|err| serde_to_enum_error("deserialize stored entity", err))?;
    entity.apply_enum_defaults();
    Ok(Some(entity))
}

/// Like [`load_with_defaults`], but treats a missing row as an error.
pub async fn require_with_defaults<T, S>(store: &S, table: &str, id: &str) -> Result<T>
where
    T: DeserializeOwned + EnumAttrModel,
    S: EnumStore + ?Sized,
{
    load_with_defaults(store, table, id)
        .await?
        .ok_or_else(|| EnumAttrError::EntityNotFound(table.to_string(), id.to_string()))
}

/// Serializes an entity's full state into the store under its own identity.
pub async fn save_entity<T, S>(store: &S, entity: &T) -> Result<()>
where
    T: Serialize + StoredEntity,
    S: EnumStore + ?Sized,
{
    let fields = serde_json::to_value(entity)
        .map_err(|err| serde_to_enum_error("serialize entity state", err))?;
    store
        .save_state(entity.store_table(), entity.store_id(), fields)
        .await
}

pub fn new_entity_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn serde_to_enum_error(context: &str, err: serde_json::Error) -> EnumAttrError {
    EnumAttrError::SerializationError(format!("{}: {}", context, err))
}
