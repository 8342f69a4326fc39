//! Storage contract shared by file storage backends

use std::io::Read;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::{ContentFile, Result, StorageError};

/// The only open mode supported by in-memory backends
pub const READ_BINARY: &str = "rb";

/// Operations a host application expects from any file storage backend
#[async_trait]
pub trait Storage: Send + Sync {
    /// Open a stored file. Returns `Ok(None)` when no file has that name.
    async fn open(&self, name: &str) -> Result<Option<ContentFile>> {
        self.open_with_mode(name, READ_BINARY).await
    }

    /// Open with an explicit mode; anything but `"rb"` is rejected
    async fn open_with_mode(&self, name: &str, mode: &str) -> Result<Option<ContentFile>>;

    /// Store everything `content` yields under `name`, replacing any existing
    /// file. Returns the name the file was stored under.
    async fn save(&self, name: &str, content: &mut (dyn Read + Send)) -> Result<String>;

    async fn exists(&self, name: &str) -> Result<bool>;

    /// Remove a file. Removing a missing file is not an error.
    async fn delete(&self, name: &str) -> Result<()>;

    /// Size in bytes; [`StorageError::NotFound`] if no file has that name
    async fn size(&self, name: &str) -> Result<u64>;

    /// Names of all stored files, in ascending order
    async fn list(&self) -> Result<Vec<String>>;

    fn url(&self, name: &str) -> String;

    /// Local filesystem path of a file, for backends that have one
    fn path(&self, name: &str) -> Result<PathBuf> {
        Err(StorageError::NotImplemented(format!(
            "this backend has no filesystem path for {}",
            name
        )))
    }
}

/// Normalize path separators in a file name to `/`
pub fn normalize_name(name: &str) -> String {
    name.replace('\\', "/")
}
