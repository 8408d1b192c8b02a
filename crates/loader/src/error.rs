use std::path::PathBuf;

use thiserror::Error;

use crate::scanner::RecordKind;

pub type Result<T> = std::result::Result<T, LoaderError>;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to read {}: {source}", .path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory walk error: {0}")]
    WalkError(#[from] ignore::Error),

    #[error("Malformed {kind} record {}: {source}", .path.display())]
    DecodeError {
        path: PathBuf,
        kind: RecordKind,
        #[source]
        source: apns_protocol::DecodeError,
    },

    #[error(
        "Duplicate definition of carrier '{canonical_name}' in {} (first defined in {})",
        .path.display(),
        .first.display()
    )]
    DuplicateDefinition {
        canonical_name: String,
        path: PathBuf,
        first: PathBuf,
    },

    #[error("Invalid input path: {0}")]
    InvalidPath(String),
}
