//! Error model for decoding metadata documents.
//!
//! Projections themselves are total; only the JSON boundary can fail.

use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MetadataError>;

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl From<serde_json::Error> for MetadataError {
    /// Read failures surface as io errors, everything else as serialization errors.
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            MetadataError::Io(err.into())
        } else {
            MetadataError::Serialization(err.to_string())
        }
    }
}
