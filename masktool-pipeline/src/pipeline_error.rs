use masktool_data::{MetaDataError, PersistenceError};
use std::path::PathBuf;
use std::process::ExitStatus;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum PipelineError {
    StringError(String),
    MetaDataError(MetaDataError),
    PersistenceError(PersistenceError),
    IoError(Arc<std::io::Error>),
    JsonError(Arc<serde_json::Error>),
    GlobError(Arc<globwalk::GlobError>),
    BinaryMissing(PathBuf),
    ProcessFailed { verb: String, status: ExitStatus },
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            PipelineError::StringError(_) => None,
            PipelineError::MetaDataError(ref e) => Some(e),
            PipelineError::PersistenceError(ref e) => Some(e),
            PipelineError::IoError(ref e) => Some(&**e),
            PipelineError::JsonError(ref e) => Some(&**e),
            PipelineError::GlobError(ref e) => Some(&**e),
            PipelineError::BinaryMissing(_) => None,
            PipelineError::ProcessFailed { .. } => None,
        }
    }
}

impl core::fmt::Display for PipelineError {
    fn fmt(
        &self,
        fmt: &mut core::fmt::Formatter,
    ) -> core::fmt::Result {
        match *self {
            PipelineError::StringError(ref e) => e.fmt(fmt),
            PipelineError::MetaDataError(ref e) => e.fmt(fmt),
            PipelineError::PersistenceError(ref e) => e.fmt(fmt),
            PipelineError::IoError(ref e) => e.fmt(fmt),
            PipelineError::JsonError(ref e) => e.fmt(fmt),
            PipelineError::GlobError(ref e) => e.fmt(fmt),
            PipelineError::BinaryMissing(ref path) => write!(fmt, "missing binary {:?}", path),
            PipelineError::ProcessFailed {
                ref verb,
                ref status,
            } => write!(fmt, "maskmaker {} failed with {}", verb, status),
        }
    }
}

impl From<&str> for PipelineError {
    fn from(str: &str) -> Self {
        PipelineError::StringError(str.to_string())
    }
}

impl From<String> for PipelineError {
    fn from(string: String) -> Self {
        PipelineError::StringError(string)
    }
}

impl From<MetaDataError> for PipelineError {
    fn from(error: MetaDataError) -> Self {
        PipelineError::MetaDataError(error)
    }
}

impl From<PersistenceError> for PipelineError {
    fn from(error: PersistenceError) -> Self {
        PipelineError::PersistenceError(error)
    }
}

impl From<std::io::Error> for PipelineError {
    fn from(error: std::io::Error) -> Self {
        PipelineError::IoError(Arc::new(error))
    }
}

impl From<serde_json::Error> for PipelineError {
    fn from(error: serde_json::Error) -> Self {
        PipelineError::JsonError(Arc::new(error))
    }
}

impl From<globwalk::GlobError> for PipelineError {
    fn from(error: globwalk::GlobError) -> Self {
        PipelineError::GlobError(Arc::new(error))
    }
}

pub type PipelineResult<T> = Result<T, PipelineError>;
