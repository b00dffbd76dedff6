//! SqliteKeyValueStore: a single serialized connection with pragmas and
//! migrations applied at open.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use rusqlite::Connection;
use tracing::debug;

use interest_core::errors::{InterestError, InterestResult};
use interest_core::traits::IKeyValueStorage;

use crate::queries::kv_ops;
use crate::{migrations, pragmas, to_storage_err};

/// Durable key-value store backed by one SQLite database.
///
/// Writes are small and infrequent (one per feedback or pool operation), so
/// every call goes through one mutex-guarded connection.
pub struct SqliteKeyValueStore {
    conn: Mutex<Connection>,
    path: Option<PathBuf>,
}

impl SqliteKeyValueStore {
    /// Open (or create) a database file.
    pub fn open(path: &Path) -> InterestResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        Self::initialize(conn, Some(path.to_path_buf()))
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> InterestResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        Self::initialize(conn, None)
    }

    fn initialize(mut conn: Connection, path: Option<PathBuf>) -> InterestResult<Self> {
        pragmas::apply_pragmas(&conn)?;
        let version = migrations::run_migrations(&mut conn)?;
        debug!(path = ?path, schema_version = version, "kv store opened");
        Ok(Self {
            conn: Mutex::new(conn),
            path,
        })
    }

    /// Database file, or `None` for in-memory stores.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn schema_version(&self) -> InterestResult<u32> {
        self.with_conn(migrations::current_version)
    }

    pub fn is_wal(&self) -> InterestResult<bool> {
        self.with_conn(pragmas::verify_wal_mode)
    }

    fn with_conn<T>(&self, f: impl FnOnce(&Connection) -> InterestResult<T>) -> InterestResult<T> {
        let conn = self.conn.lock().map_err(|_| InterestError::LockPoisoned {
            component: "sqlite kv store".to_string(),
        })?;
        f(&conn)
    }
}

impl IKeyValueStorage for SqliteKeyValueStore {
    fn load(&self, key: &str) -> InterestResult<Option<Vec<u8>>> {
        self.with_conn(|conn| kv_ops::get_value(conn, key))
    }

    fn save(&self, key: &str, value: &[u8]) -> InterestResult<()> {
        self.with_conn(|conn| kv_ops::put_value(conn, key, value))
    }
}
