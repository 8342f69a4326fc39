//! Error types for dbstore-storage

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StorageError>;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Improperly configured: {0}")]
    ImproperlyConfigured(String),

    #[error("File does not exist: {0}")]
    NotFound(String),

    #[error("Not implemented: {0}")]
    NotImplemented(String),

    #[error("Unsupported open mode: {0}")]
    UnsupportedMode(String),

    #[error("Stored content for {name} is corrupt: {source}")]
    CorruptContent {
        name: String,
        #[source]
        source: base64::DecodeError,
    },

    #[error("Stored size for {name} is invalid: {size}")]
    InvalidSize { name: String, size: i64 },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
