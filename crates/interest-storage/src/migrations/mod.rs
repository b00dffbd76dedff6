//! Schema migrations tracked through `PRAGMA user_version`.

mod v001_kv_store;

use rusqlite::Connection;
use tracing::info;

use interest_core::errors::{InterestResult, StorageError};

use crate::to_storage_err;

type Migration = fn(&Connection) -> rusqlite::Result<()>;

const MIGRATIONS: &[(u32, Migration)] = &[(1, v001_kv_store::migrate)];

/// Latest schema version known to this build.
pub const LATEST_VERSION: u32 = 1;

pub fn current_version(conn: &Connection) -> InterestResult<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))
}

/// Apply every migration newer than the stored version, each in its own
/// transaction.
pub fn run_migrations(conn: &mut Connection) -> InterestResult<u32> {
    let mut version = current_version(conn)?;
    for (target, migrate) in MIGRATIONS {
        if *target <= version {
            continue;
        }
        let failed = |e: rusqlite::Error| StorageError::MigrationFailed {
            version: *target,
            reason: e.to_string(),
        };
        let tx = conn.transaction().map_err(failed)?;
        migrate(&tx).map_err(failed)?;
        tx.pragma_update(None, "user_version", target)
            .map_err(failed)?;
        tx.commit().map_err(failed)?;
        info!(version = target, "applied storage migration");
        version = *target;
    }
    Ok(version)
}
