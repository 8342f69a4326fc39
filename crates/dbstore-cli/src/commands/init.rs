use anyhow::Result;
use dbstore_storage::DatabaseStorage;

pub async fn handle(storage: &DatabaseStorage) -> Result<()> {
    storage.ensure_table().await?;

    let options = storage.options();
    println!("✓ Table ready: {}", options.table);
    println!(
        "  Columns: {}, {}, {}",
        options.name_column, options.data_column, options.size_column
    );

    Ok(())
}
