use thiserror::Error;

/// Failures reading or writing a storage slot
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is not available in this context")]
    Unavailable,
    #[error("storage access failed: {0}")]
    Access(String),
    #[error("stored value is malformed: {0}")]
    Malformed(serde_json::Error),
    #[error("value could not be serialized: {0}")]
    Serialize(serde_json::Error),
}
