//! Pooled connection provider backed by r2d2.
//!
//! The default [`crate::connection::FileConnector`] opens a connection per
//! operation. Hosts with more concurrent callers can swap in a
//! [`PooledConnector`]; the store code is the same either way.

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use std::path::Path;
use userstore_common::{Error, Result};

use crate::connection::ConnectionProvider;

/// Type alias for the database connection pool.
pub type DbPool = Pool<SqliteConnectionManager>;

/// Type alias for a pooled database connection.
pub type PooledConnection = r2d2::PooledConnection<SqliteConnectionManager>;

/// Default number of pooled connections.
pub const DEFAULT_POOL_SIZE: u32 = 4;

/// Connection provider handing out connections from an r2d2 pool.
#[derive(Clone)]
pub struct PooledConnector {
    pool: DbPool,
    target: String,
}

impl PooledConnector {
    /// Pool of connections to a database file on disk.
    ///
    /// Creates the SQLite file if it does not exist.
    pub fn file(db_path: &Path, max_size: u32) -> Result<Self> {
        let manager = SqliteConnectionManager::file(db_path);

        let pool = Pool::builder()
            .max_size(max_size)
            .build(manager)
            .map_err(|e| Error::connection(format!("Failed to create connection pool: {e}")))?;

        Ok(Self {
            pool,
            target: db_path.display().to_string(),
        })
    }

    /// Pool over an in-memory database (useful for tests).
    ///
    /// Each call creates a uniquely-named shared-cache in-memory database so
    /// that parallel tests do not interfere with each other, while all
    /// connections *within* a single pool still share state.
    pub fn in_memory() -> Result<Self> {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        let uri = format!("file:userstore_mem_{n}?mode=memory&cache=shared");

        let manager = SqliteConnectionManager::file(&uri);

        let pool = Pool::builder()
            .max_size(DEFAULT_POOL_SIZE)
            .build(manager)
            .map_err(|e| Error::connection(format!("Failed to create in-memory pool: {e}")))?;

        Ok(Self { pool, target: uri })
    }

    /// The underlying pool.
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

impl ConnectionProvider for PooledConnector {
    type Conn = PooledConnection;

    fn open(&self) -> Result<PooledConnection> {
        self.pool
            .get()
            .map_err(|e| Error::connection(format!("Failed to get connection from pool: {e}")))
    }

    fn target(&self) -> String {
        self.target.clone()
    }
}
