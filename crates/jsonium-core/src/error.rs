use std::path::PathBuf;
use thiserror::Error;

use crate::path::PathWriteError;

#[derive(Error, Debug)]
pub enum JsoniumError {
    // Accessor errors
    #[error("PATH_WRITE_ERROR: {0}")]
    PathWrite(#[from] PathWriteError),

    // Plan errors
    #[error("PLAN_INVALID: {0}")]
    PlanInvalid(String),

    #[error("STAGE_NOT_FOUND: stage '{name}' referenced by '{referenced_by}' is not defined before it")]
    StageNotFound { name: String, referenced_by: String },

    #[error("STAGE_DUPLICATE: stage '{0}' is defined more than once")]
    StageDuplicate(String),

    // Source errors
    #[error("SOURCE_INVALID: {field} of stage '{stage}': {reason}")]
    SourceInvalid {
        stage: String,
        field: String,
        reason: String,
    },

    #[error("SOURCE_LOAD_FAILED: failed to load '{path}': {reason}")]
    SourceLoadFailed { path: PathBuf, reason: String },

    // Config errors
    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParseError(String),

    // Serialization errors
    #[error("JSON_ERROR: {0}")]
    Json(#[from] serde_json::Error),

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<toml::de::Error> for JsoniumError {
    fn from(err: toml::de::Error) -> Self {
        JsoniumError::ConfigParseError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, JsoniumError>;
