//! Error types for timer storage

use std::path::PathBuf;
use thiserror::Error;

/// Errors while reading or writing the timer store
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no configuration directory available on this system")]
    NoConfigDir,

    #[error("failed to read timer store {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode timer store {path}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode timer store")]
    Encode(#[source] serde_json::Error),

    #[error("failed to write timer store {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
