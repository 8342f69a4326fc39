use anyhow::{Context, Result};
use dbstore_storage::{DatabaseStorage, Storage};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

pub async fn put(storage: &DatabaseStorage, name: String, file: Option<PathBuf>) -> Result<()> {
    let content = read_input(file.as_deref())?;
    let stored = storage.save(&name, &mut content.as_slice()).await?;

    println!("✓ Stored: {}", stored);
    println!("  Size: {} bytes", content.len());

    Ok(())
}

pub async fn get(storage: &DatabaseStorage, name: String, output: Option<PathBuf>) -> Result<()> {
    let Some(file) = storage.open(&name).await? else {
        anyhow::bail!("File not found: {}", name);
    };

    match output {
        Some(path) => std::fs::write(&path, file.as_bytes())
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(file.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

pub async fn exists(storage: &DatabaseStorage, name: String) -> Result<()> {
    println!("{}", storage.exists(&name).await?);
    Ok(())
}

pub async fn remove(storage: &DatabaseStorage, name: String) -> Result<()> {
    storage.delete(&name).await?;
    println!("✓ Removed: {}", name);
    Ok(())
}

pub async fn size(storage: &DatabaseStorage, name: String) -> Result<()> {
    println!("{}", storage.size(&name).await?);
    Ok(())
}

pub fn url(storage: &DatabaseStorage, name: String) -> Result<()> {
    println!("{}", storage.url(&name));
    Ok(())
}

pub async fn list(storage: &DatabaseStorage, long: bool) -> Result<()> {
    let names = storage.list().await?;

    if names.is_empty() {
        println!("No files stored.");
        return Ok(());
    }

    for name in names {
        if long {
            let size = storage.size(&name).await?;
            println!("{:>12}  {}", size, name);
        } else {
            println!("{}", name);
        }
    }

    Ok(())
}

/// Read the whole input from a file, or from stdin when no path is given
fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            let mut content = Vec::new();
            std::io::stdin().lock().read_to_end(&mut content)?;
            Ok(content)
        }
    }
}
