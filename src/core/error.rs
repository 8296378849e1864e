use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnumAttrError {
    #[error("Entity '{1}' not found in table '{0}'")]
    EntityNotFound(String, String),

    #[error("Store error: {0}")]
    StoreError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Lock error: {0}")]
    LockError(String),
}

pub type Result<T> = std::result::Result<T, EnumAttrError>;

impl<T> From<std::sync::PoisonError<T>> for EnumAttrError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        Self::LockError(err.to_string())
    }
}
