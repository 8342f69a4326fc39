use dbstore_storage::StorageOptions;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Configuration for dbstore (~/.config/dbstore/config.toml)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Raw storage options, validated by [`Config::storage_options`]
    #[serde(default = "default_storage")]
    pub storage: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_url")]
    pub url: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            storage: default_storage(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            max_connections: default_max_connections(),
        }
    }
}

fn default_url() -> String {
    let path = project_dirs()
        .map(|dirs| dirs.data_dir().join("files.db"))
        .unwrap_or_else(|| PathBuf::from("files.db"));
    format!("sqlite://{}", path.display())
}

fn default_max_connections() -> u32 {
    5
}

fn default_storage() -> BTreeMap<String, String> {
    BTreeMap::from([("table".to_string(), "files".to_string())])
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "dbstore", "dbstore")
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        Self::load_or_create(&Self::config_path())
    }

    /// Load config from `path`, writing the defaults there if it is missing
    pub fn load_or_create(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            let config = Config::default();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = toml::to_string_pretty(&config)?;
            std::fs::write(path, content)?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = project_dirs() {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.dbstore/config.toml")
        }
    }

    /// Validated options for the `[storage]` table
    pub fn storage_options(&self) -> anyhow::Result<StorageOptions> {
        Ok(StorageOptions::from_map(&self.storage)?)
    }
}
