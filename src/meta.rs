use serde::{Deserialize, Serialize};

/// Shape of a declared value set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeclarationKind {
    /// Named entries (`name = value`), order-preserving, unique names.
    Mapping,
    /// Plain ordered values without names.
    List,
}

/// One entry of a declared value set.
///
/// Mapping entries carry their name; list entries do not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumEntryDescriptor {
    pub name: Option<String>,
    pub value: serde_json::Value,
}

/// Describes one enum attribute declared on a model type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumAttrDescriptor {
    pub field: String,
    pub plural: String,
    pub kind: DeclarationKind,
    pub entries: Vec<EnumEntryDescriptor>,
    /// Resolved default value, if one was configured.
    pub default: Option<serde_json::Value>,
    /// Whether the declaration carries the write-through persistence surface.
    pub write_through: bool,
}

impl EnumAttrDescriptor {
    /// Returns the entry names of a mapping declaration, in declared order.
    pub fn entry_names(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|entry| entry.name.as_deref())
            .collect()
    }

    /// Looks up the value mapped to `name`, if this is a mapping declaration.
    pub fn value_of(&self, name: &str) -> Option<&serde_json::Value> {
        self.entries
            .iter()
            .find(|entry| entry.name.as_deref() == Some(name))
            .map(|entry| &entry.value)
    }
}
