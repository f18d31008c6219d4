use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlumberError {
    #[error("frontend manifest not found at: {path}")]
    ManifestNotFound { path: String },

    #[error("failed to parse frontend manifest '{path}': {message}")]
    ManifestParseError { path: String, message: String },

    #[error("fec config not found at: {path}")]
    ConfigNotFound { path: String },

    #[error("failed to parse fec config: {message} (near: {snippet})")]
    ConfigParseError { message: String, snippet: String },

    #[error("route invariant violated: {message}")]
    InvariantViolation { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

impl PlumberError {
    /// A missing source file is recoverable by falling back to the next
    /// source; everything else aborts the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PlumberError::ManifestNotFound { .. } | PlumberError::ConfigNotFound { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, PlumberError>;
