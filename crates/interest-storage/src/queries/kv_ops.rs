//! Raw kv_store statements.

use rusqlite::{params, Connection, OptionalExtension};

use interest_core::errors::{InterestResult, StorageError};

pub fn get_value(conn: &Connection, key: &str) -> InterestResult<Option<Vec<u8>>> {
    conn.query_row(
        "SELECT value FROM kv_store WHERE key = ?1",
        params![key],
        |row| row.get(0),
    )
    .optional()
    .map_err(|e| {
        StorageError::ReadFailed {
            key: key.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

pub fn put_value(conn: &Connection, key: &str, value: &[u8]) -> InterestResult<()> {
    conn.execute(
        "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET
             value = excluded.value,
             updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')",
        params![key, value],
    )
    .map_err(|e| StorageError::WriteFailed {
        key: key.to_string(),
        reason: e.to_string(),
    })?;
    Ok(())
}
