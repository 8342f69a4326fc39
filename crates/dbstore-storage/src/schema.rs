//! Reference schema for the file table

use sqlx::SqlitePool;
use tracing::info;

use crate::sql::Statements;
use crate::{Result, StorageOptions};

pub fn create_table_sql(options: &StorageOptions) -> String {
    Statements::new(options).create_table
}

/// Create the file table, leaving an existing table untouched
pub async fn create_table(pool: &SqlitePool, options: &StorageOptions) -> Result<()> {
    sqlx::query(&create_table_sql(options)).execute(pool).await?;
    info!(table = %options.table, "file table ready");
    Ok(())
}
