use crate::MetaDataError;
use std::sync::Arc;

/// Failure to load or save a metadata file
#[derive(Debug, Clone)]
pub enum PersistenceError {
    StringError(String),
    IoError(Arc<std::io::Error>),
    JsonError(Arc<serde_json::Error>),
    /// The file parsed but doesn't fit the schema
    MetaData(MetaDataError),
}

impl std::error::Error for PersistenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            PersistenceError::StringError(_) => None,
            PersistenceError::IoError(ref e) => Some(&**e),
            PersistenceError::JsonError(ref e) => Some(&**e),
            PersistenceError::MetaData(ref e) => Some(e),
        }
    }
}

impl core::fmt::Display for PersistenceError {
    fn fmt(
        &self,
        fmt: &mut core::fmt::Formatter,
    ) -> core::fmt::Result {
        match *self {
            PersistenceError::StringError(ref e) => e.fmt(fmt),
            PersistenceError::IoError(ref e) => e.fmt(fmt),
            PersistenceError::JsonError(ref e) => e.fmt(fmt),
            PersistenceError::MetaData(ref e) => e.fmt(fmt),
        }
    }
}

impl From<&str> for PersistenceError {
    fn from(str: &str) -> Self {
        PersistenceError::StringError(str.to_string())
    }
}

impl From<String> for PersistenceError {
    fn from(string: String) -> Self {
        PersistenceError::StringError(string)
    }
}

impl From<std::io::Error> for PersistenceError {
    fn from(error: std::io::Error) -> Self {
        PersistenceError::IoError(Arc::new(error))
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(error: serde_json::Error) -> Self {
        PersistenceError::JsonError(Arc::new(error))
    }
}

impl From<MetaDataError> for PersistenceError {
    fn from(error: MetaDataError) -> Self {
        PersistenceError::MetaData(error)
    }
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;
