use crate::model::validation::ValidationError;
use crate::storage::kv::StorageError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Error surfaced by store operations.
#[derive(Debug)]
pub enum StoreError {
    /// Input rejected; nothing was mutated.
    Validation(ValidationError),
    /// Read or write of the persisted blob failed.
    ///
    /// On append paths the record is still held in memory and the store
    /// reports unsaved changes.
    Storage(StorageError),
    /// In-memory collection could not be encoded.
    Serialization(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
            Self::Serialization(err) => write!(f, "failed to encode collection: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Storage(err) => Some(err),
            Self::Serialization(err) => Some(err),
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}

/// Persisted blob could not be decoded at load time.
///
/// Not returned as an error: the store starts empty and keeps this value
/// so callers can surface the condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeserializationError {
    pub key: String,
    pub message: String,
    /// Key the raw blob is copied to before it is first overwritten.
    pub backup_key: String,
}

impl Display for DeserializationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "malformed blob under `{}` (preserved as `{}`): {}",
            self.key, self.backup_key, self.message
        )
    }
}

impl Error for DeserializationError {}
