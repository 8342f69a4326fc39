//! SQL statements for the file table
//!
//! Templates use `%s` for bind parameters and `{table}`/`{name}`/`{data}`/`{size}`
//! for identifiers. [`Statements::new`] renders them once per storage.

use crate::StorageOptions;

const SELECT_DATA: &str = "SELECT {data} FROM {table} WHERE {name} = %s";
const SELECT_SIZE: &str = "SELECT {size} FROM {table} WHERE {name} = %s";
const SELECT_EXISTS: &str = "SELECT 1 FROM {table} WHERE {name} = %s";
const SELECT_NAMES: &str = "SELECT {name} FROM {table} ORDER BY {name}";
const UPSERT: &str = "INSERT INTO {table} ({name}, {data}, {size}) VALUES (%s, %s, %s) \
    ON CONFLICT ({name}) DO UPDATE SET {data} = excluded.{data}, {size} = excluded.{size}";
const DELETE: &str = "DELETE FROM {table} WHERE {name} = %s";
const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS {table} (\
    {name} TEXT NOT NULL PRIMARY KEY, \
    {data} TEXT NOT NULL, \
    {size} INTEGER NOT NULL)";

/// Replace `%s` parameter markers with SQLite's `?`.
///
/// `%%` is an escaped literal `%`.
pub fn translate_placeholders(query: &str) -> String {
    let mut out = String::with_capacity(query.len());
    let mut chars = query.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '%' {
            match chars.peek() {
                Some('s') => {
                    chars.next();
                    out.push('?');
                    continue;
                }
                Some('%') => {
                    chars.next();
                    out.push('%');
                    continue;
                }
                _ => {}
            }
        }
        out.push(c);
    }

    out
}

/// Quote an identifier for SQLite, doubling embedded quotes
pub fn quote_identifier(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Rendered statements for one table/column configuration
#[derive(Debug, Clone)]
pub struct Statements {
    pub select_data: String,
    pub select_size: String,
    pub select_exists: String,
    pub select_names: String,
    pub upsert: String,
    pub delete: String,
    pub create_table: String,
}

impl Statements {
    pub fn new(options: &StorageOptions) -> Self {
        let identifiers = [
            ("{table}", quote_identifier(&options.table)),
            ("{name}", quote_identifier(&options.name_column)),
            ("{data}", quote_identifier(&options.data_column)),
            ("{size}", quote_identifier(&options.size_column)),
        ];
        let build = |template: &str| render(template, &identifiers);

        Self {
            select_data: build(SELECT_DATA),
            select_size: build(SELECT_SIZE),
            select_exists: build(SELECT_EXISTS),
            select_names: build(SELECT_NAMES),
            upsert: build(UPSERT),
            delete: build(DELETE),
            create_table: build(CREATE_TABLE),
        }
    }
}

/// Translate placeholders, then substitute identifier markers in one pass
/// over the template. Substituted text is never scanned again.
fn render(template: &str, identifiers: &[(&str, String)]) -> String {
    let template = translate_placeholders(template);
    let mut out = String::with_capacity(template.len());
    let mut rest = template.as_str();

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match identifiers.iter().find(|(marker, _)| tail.starts_with(*marker)) {
            Some((marker, quoted)) => {
                out.push_str(quoted);
                rest = &tail[marker.len()..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);

    out
}
