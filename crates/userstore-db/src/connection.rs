//! Connection providers.
//!
//! Every store operation asks its provider for a fresh connection and drops
//! it before returning. [`FileConnector`] opens a new SQLite connection per
//! call; [`crate::pool::PooledConnector`] hands out r2d2 pooled connections
//! instead.

use std::mem::ManuallyDrop;
use std::ops::Deref;
use std::path::{Path, PathBuf};

use rusqlite::Connection;
use userstore_common::{paths, Error, Result};

/// Source of scoped database connections.
///
/// The returned handle must release its connection when dropped.
pub trait ConnectionProvider: Send + Sync {
    type Conn: Deref<Target = Connection>;

    /// Open a connection, failing with [`Error::Connection`] if the storage
    /// target is unreachable or not a database.
    fn open(&self) -> Result<Self::Conn>;

    /// Human-readable description of the storage target, used in logs.
    fn target(&self) -> String;
}

/// Opens an independent connection to a fixed database file on every call.
#[derive(Debug, Clone)]
pub struct FileConnector {
    path: PathBuf,
}

impl FileConnector {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the database file this connector opens.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConnector {
    /// Connector for `database.db` next to the running executable.
    fn default() -> Self {
        Self::new(paths::default_db_path())
    }
}

impl ConnectionProvider for FileConnector {
    type Conn = ScopedConnection;

    fn open(&self) -> Result<ScopedConnection> {
        let conn = Connection::open(&self.path).map_err(|e| {
            Error::connection(format!(
                "Failed to open database at '{}': {e}",
                self.path.display()
            ))
        })?;

        // Opening is lazy; reading the header surfaces a corrupt or
        // non-database file here rather than at the first statement.
        conn.query_row("PRAGMA schema_version", [], |row| row.get::<_, i64>(0))
            .map_err(|e| {
                Error::connection(format!(
                    "Database at '{}' is not usable: {e}",
                    self.path.display()
                ))
            })?;

        tracing::trace!(path = %self.path.display(), "Opened connection");
        Ok(ScopedConnection {
            conn: ManuallyDrop::new(conn),
        })
    }

    fn target(&self) -> String {
        self.path.display().to_string()
    }
}

/// A connection that is closed when the handle is dropped.
///
/// Close failures are logged rather than lost.
#[derive(Debug)]
pub struct ScopedConnection {
    conn: ManuallyDrop<Connection>,
}

impl Deref for ScopedConnection {
    type Target = Connection;

    fn deref(&self) -> &Connection {
        &self.conn
    }
}

impl Drop for ScopedConnection {
    fn drop(&mut self) {
        // SAFETY: `conn` is never touched again after this.
        let conn = unsafe { ManuallyDrop::take(&mut self.conn) };
        if let Err((_, e)) = conn.close() {
            tracing::warn!(error = %e, "Failed to close database connection");
        }
    }
}
