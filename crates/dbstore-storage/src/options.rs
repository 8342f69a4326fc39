//! Table and URL options for [`DatabaseStorage`](crate::DatabaseStorage)

use std::collections::BTreeMap;

use crate::{Result, StorageError};

const REQUIRED_KEYS: &[&str] = &["table"];
const OPTIONAL_KEYS: &[&str] = &["name_column", "data_column", "size_column", "base_url"];

pub const DEFAULT_NAME_COLUMN: &str = "filename";
pub const DEFAULT_DATA_COLUMN: &str = "data";
pub const DEFAULT_SIZE_COLUMN: &str = "size";

/// Where file rows live and how their URLs are built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageOptions {
    pub table: String,
    pub name_column: String,
    pub data_column: String,
    pub size_column: String,
    pub base_url: String,
}

impl StorageOptions {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            name_column: DEFAULT_NAME_COLUMN.to_string(),
            data_column: DEFAULT_DATA_COLUMN.to_string(),
            size_column: DEFAULT_SIZE_COLUMN.to_string(),
            base_url: String::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_columns(
        mut self,
        name_column: impl Into<String>,
        data_column: impl Into<String>,
        size_column: impl Into<String>,
    ) -> Self {
        self.name_column = name_column.into();
        self.data_column = data_column.into();
        self.size_column = size_column.into();
        self
    }

    /// Build options from a key/value map.
    ///
    /// Only `table`, `name_column`, `data_column`, `size_column` and
    /// `base_url` are recognized. A missing `table` or any other key is an
    /// [`StorageError::ImproperlyConfigured`] error.
    pub fn from_map(options: &BTreeMap<String, String>) -> Result<Self> {
        for key in REQUIRED_KEYS {
            match options.get(*key) {
                Some(value) if !value.is_empty() => {}
                _ => {
                    return Err(StorageError::ImproperlyConfigured(format!(
                        "missing required option '{}'",
                        key
                    )));
                }
            }
        }

        if let Some(unknown) = options
            .keys()
            .find(|key| !REQUIRED_KEYS.contains(&key.as_str()) && !OPTIONAL_KEYS.contains(&key.as_str()))
        {
            return Err(StorageError::ImproperlyConfigured(format!(
                "unrecognized option '{}'",
                unknown
            )));
        }

        let get = |key: &str, default: &str| {
            options
                .get(key)
                .cloned()
                .unwrap_or_else(|| default.to_string())
        };

        Ok(Self {
            table: get("table", ""),
            name_column: get("name_column", DEFAULT_NAME_COLUMN),
            data_column: get("data_column", DEFAULT_DATA_COLUMN),
            size_column: get("size_column", DEFAULT_SIZE_COLUMN),
            base_url: get("base_url", ""),
        })
    }
}

impl TryFrom<&BTreeMap<String, String>> for StorageOptions {
    type Error = StorageError;

    fn try_from(options: &BTreeMap<String, String>) -> Result<Self> {
        Self::from_map(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_missing_options() {
        let err = StorageOptions::from_map(&BTreeMap::new()).unwrap_err();
        assert!(matches!(err, StorageError::ImproperlyConfigured(_)));
    }

    #[test]
    fn test_empty_table_is_missing() {
        let err = StorageOptions::from_map(&map(&[("table", "")])).unwrap_err();
        assert!(matches!(err, StorageError::ImproperlyConfigured(_)));
    }

    #[test]
    fn test_unknown_option() {
        let err = StorageOptions::from_map(&map(&[("unknown", "")])).unwrap_err();
        assert!(matches!(err, StorageError::ImproperlyConfigured(_)));

        let err = StorageOptions::from_map(&map(&[("table", "files"), ("unknown", "")])).unwrap_err();
        match err {
            StorageError::ImproperlyConfigured(msg) => assert!(msg.contains("unknown")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_default_options() {
        let options =
            StorageOptions::from_map(&map(&[("table", "files"), ("base_url", "base_url/")])).unwrap();
        assert_eq!(options.table, "files");
        assert_eq!(options.name_column, "filename");
        assert_eq!(options.data_column, "data");
        assert_eq!(options.size_column, "size");
        assert_eq!(options.base_url, "base_url/");
    }

    #[test]
    fn test_custom_columns() {
        let options = StorageOptions::from_map(&map(&[
            ("table", "blobs"),
            ("name_column", "path"),
            ("data_column", "body"),
            ("size_column", "length"),
        ]))
        .unwrap();
        assert_eq!(
            options,
            StorageOptions::new("blobs").with_columns("path", "body", "length")
        );
        assert_eq!(options.base_url, "");
    }
}
