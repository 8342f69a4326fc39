pub mod file;
pub mod init;

use anyhow::{Context, Result};
use dbstore_config::Config;
use dbstore_storage::DatabaseStorage;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

/// Open the configured database and build the storage on top of it
pub async fn connect(config: &Config) -> Result<DatabaseStorage> {
    let options = config.storage_options()?;

    let connect_options = SqliteConnectOptions::from_str(&config.database.url)
        .with_context(|| format!("Invalid database url: {}", config.database.url))?
        .create_if_missing(true);

    if let Some(parent) = connect_options.get_filename().parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect_with(connect_options)
        .await
        .with_context(|| format!("Failed to open database {}", config.database.url))?;

    Ok(DatabaseStorage::new(pool, options)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dbstore_storage::Storage;

    #[tokio::test]
    async fn test_connect_creates_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("data").join("files.db");

        let mut config = Config::default();
        config.database.url = format!("sqlite://{}", db_path.display());

        let storage = connect(&config).await.unwrap();
        storage.ensure_table().await.unwrap();
        storage.save("hello.txt", &mut &b"hi"[..]).await.unwrap();

        assert!(db_path.exists());
        assert_eq!(storage.size("hello.txt").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_connect_rejects_bad_storage_options() {
        let mut config = Config::default();
        config.database.url = "sqlite::memory:".to_string();
        config.storage.insert("unknown".to_string(), String::new());

        assert!(connect(&config).await.is_err());
    }
}
