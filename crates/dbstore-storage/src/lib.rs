//! Storage layer for dbstore
//!
//! This crate provides:
//! - The `Storage` contract for pluggable file backends
//! - `DatabaseStorage`, which keeps file content in a SQLite table
//! - Options validation and the reference table schema

pub mod backend;
pub mod codec;
pub mod db;
pub mod error;
pub mod file;
pub mod options;
pub mod schema;
pub mod sql;

pub use backend::{Storage, normalize_name};
pub use db::DatabaseStorage;
pub use error::{Result, StorageError};
pub use file::ContentFile;
pub use options::StorageOptions;
