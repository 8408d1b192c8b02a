use thiserror::Error;

/// Result type for writer operations
pub type Result<T> = std::result::Result<T, WriterError>;

/// Errors that can occur while mapping or rendering APNs
#[derive(Error, Debug)]
pub enum WriterError {
    /// Index entry without settings
    #[error("No settings for carrier '{0}' listed in the index")]
    UnresolvedReference(String),

    /// Rendered text is not well-formed XML
    #[error("Malformed output document: {0}")]
    MalformedOutput(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl WriterError {
    /// Create a malformed output error
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedOutput(msg.into())
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
