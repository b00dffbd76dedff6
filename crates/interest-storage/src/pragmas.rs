//! PRAGMA configuration applied to every SQLite connection.
//!
//! WAL mode, NORMAL sync, 5s busy_timeout.

use rusqlite::Connection;

use interest_core::errors::InterestResult;

use crate::to_storage_err;

pub fn apply_pragmas(conn: &Connection) -> InterestResult<()> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA cache_size = -8000;
        PRAGMA busy_timeout = 5000;
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Whether WAL journaling is active. In-memory databases report `memory`.
pub fn verify_wal_mode(conn: &Connection) -> InterestResult<bool> {
    let mode: String = conn
        .pragma_query_value(None, "journal_mode", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(mode.eq_ignore_ascii_case("wal"))
}
