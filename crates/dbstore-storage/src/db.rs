//! File storage backed by a single SQLite table

use std::collections::BTreeMap;
use std::io::Read;

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use crate::backend::{READ_BINARY, Storage, normalize_name};
use crate::sql::Statements;
use crate::{ContentFile, Result, StorageError, StorageOptions, codec};

/// Stores each file as one `(name, data, size)` row.
///
/// The pool is owned by the caller and every operation runs as a single
/// statement. `save` is an `INSERT ... ON CONFLICT DO UPDATE` inside its own
/// transaction, so its first statement takes the write lock and concurrent
/// saves on a multi-connection pool wait on SQLite's busy timeout instead of
/// failing on a read-to-write lock upgrade. The name column must carry a
/// primary key or unique constraint.
#[derive(Debug, Clone)]
pub struct DatabaseStorage {
    pool: SqlitePool,
    options: StorageOptions,
    statements: Statements,
}

impl DatabaseStorage {
    pub fn new(pool: SqlitePool, options: StorageOptions) -> Result<Self> {
        let identifiers = [
            ("table", &options.table),
            ("name_column", &options.name_column),
            ("data_column", &options.data_column),
            ("size_column", &options.size_column),
        ];
        if let Some((key, _)) = identifiers.iter().find(|(_, value)| value.is_empty()) {
            return Err(StorageError::ImproperlyConfigured(format!(
                "option '{}' must not be empty",
                key
            )));
        }

        let statements = Statements::new(&options);
        Ok(Self {
            pool,
            options,
            statements,
        })
    }

    /// Validate a raw option map and build the storage from it
    pub fn from_map(pool: SqlitePool, options: &BTreeMap<String, String>) -> Result<Self> {
        Self::new(pool, StorageOptions::from_map(options)?)
    }

    pub fn options(&self) -> &StorageOptions {
        &self.options
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the file table if it does not exist yet
    pub async fn ensure_table(&self) -> Result<()> {
        crate::schema::create_table(&self.pool, &self.options).await
    }
}

#[async_trait]
impl Storage for DatabaseStorage {
    async fn open_with_mode(&self, name: &str, mode: &str) -> Result<Option<ContentFile>> {
        if mode != READ_BINARY {
            return Err(StorageError::UnsupportedMode(mode.to_string()));
        }
        let name = normalize_name(name);

        let row: Option<String> = sqlx::query_scalar(&self.statements.select_data)
            .bind(&name)
            .fetch_optional(&self.pool)
            .await?;

        let Some(encoded) = row else {
            debug!(file = %name, "file not found");
            return Ok(None);
        };

        let bytes = codec::decode(&encoded).map_err(|source| StorageError::CorruptContent {
            name: name.clone(),
            source,
        })?;
        debug!(file = %name, size = bytes.len(), "opened file");

        Ok(Some(ContentFile::from_bytes(name, bytes)))
    }

    async fn save(&self, name: &str, content: &mut (dyn Read + Send)) -> Result<String> {
        let name = normalize_name(name);

        let mut bytes = Vec::new();
        content.read_to_end(&mut bytes)?;
        let size = bytes.len() as i64;
        let encoded = codec::encode(&bytes);

        let mut tx = self.pool.begin().await?;
        sqlx::query(&self.statements.upsert)
            .bind(&name)
            .bind(&encoded)
            .bind(size)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        debug!(file = %name, size, "saved file");

        Ok(name)
    }

    async fn exists(&self, name: &str) -> Result<bool> {
        let row = sqlx::query(&self.statements.select_exists)
            .bind(normalize_name(name))
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.is_some())
    }

    async fn delete(&self, name: &str) -> Result<()> {
        let name = normalize_name(name);
        let result = sqlx::query(&self.statements.delete)
            .bind(&name)
            .execute(&self.pool)
            .await?;
        debug!(file = %name, deleted = result.rows_affected(), "deleted file");

        Ok(())
    }

    async fn size(&self, name: &str) -> Result<u64> {
        let name = normalize_name(name);
        let size: Option<i64> = sqlx::query_scalar(&self.statements.select_size)
            .bind(&name)
            .fetch_optional(&self.pool)
            .await?;

        let size = size.ok_or_else(|| StorageError::NotFound(name.clone()))?;
        u64::try_from(size).map_err(|_| StorageError::InvalidSize { name, size })
    }

    async fn list(&self) -> Result<Vec<String>> {
        let names: Vec<String> = sqlx::query_scalar(&self.statements.select_names)
            .fetch_all(&self.pool)
            .await?;

        Ok(names)
    }

    fn url(&self, name: &str) -> String {
        format!("{}{}", self.options.base_url, normalize_name(name))
    }
}
