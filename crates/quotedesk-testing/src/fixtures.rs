//! Sample forms and pre-seeded storage.

use anyhow::Result;
use quotedesk_store::{KeyValueStore, SqliteStore, keys};
use std::path::Path;

/// Two requests in the shape the browser site wrote them: numeric fields as
/// strings, millisecond ids, ISO timestamps.
pub const LEGACY_QUOTES: &str = r#"[
  {"name":"Ravi","email":"ravi@gmail.com","phone":"9876543210","area_size":"1500","budget":"2500000","project_details":"Two floor house","service":"construction","id":1733824900000,"submittedAt":"2024-12-10T10:01:40.000Z","clientUser":"ravi","status":"pending"},
  {"name":"Anu","email":"anu@yahoo.com","phone":"9123456780","area_size":"600","budget":"400000","project_details":"Kitchen remodel","id":1733824800000,"submittedAt":"2024-12-10T10:00:00.000Z","clientUser":"anu","status":"completed"}
]"#;

/// `--field` arguments for a valid public quote form.
pub fn quote_fields(name: &str, email: &str, details: &str) -> Vec<String> {
    [
        format!("name={}", name),
        format!("email={}", email),
        "phone=(555) 123-4567".to_string(),
        "area_size=1200".to_string(),
        "budget=250000".to_string(),
        format!("project_details={}", details),
    ]
    .into_iter()
    .flat_map(|pair| ["--field".to_string(), pair])
    .collect()
}

/// Write a raw value under `key` in the database at `db_path`.
pub fn seed_raw(db_path: &Path, key: &str, value: &str) -> Result<()> {
    let store = SqliteStore::open(db_path)?;
    store.set(key, value)?;
    Ok(())
}

/// Seed the quote collection with [`LEGACY_QUOTES`].
pub fn seed_legacy_quotes(db_path: &Path) -> Result<()> {
    seed_raw(db_path, keys::QUOTE_REQUESTS, LEGACY_QUOTES)
}
