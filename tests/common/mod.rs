//! Shared test harness for integration tests.
//!
//! Provides [`TestHarness`] which points a [`UserStore`] at a fresh database
//! file in a temporary directory and creates the schema.

#![allow(dead_code)]

use std::path::PathBuf;

use tempfile::TempDir;
use userstore_db::{StoreConfig, User, UserFields, UserStore};

/// Test harness owning a temporary database directory and a store over it.
pub struct TestHarness {
    pub store: UserStore,
    pub db_path: PathBuf,
    _dir: TempDir,
}

impl TestHarness {
    /// Create a new harness with the schema already in place.
    pub fn new() -> Self {
        let harness = Self::without_schema();
        harness.store.ensure_schema();
        harness
    }

    /// Create a harness whose database has no `users` table yet.
    pub fn without_schema() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let db_path = dir.path().join("database.db");
        let store = UserStore::from_config(&StoreConfig::new(&db_path));
        Self {
            store,
            db_path,
            _dir: dir,
        }
    }

    /// Insert a user, panicking if the store does not return it.
    pub fn create_user(&self, fields: &UserFields) -> User {
        self.store
            .insert(fields)
            .found()
            .expect("insert should return the stored user")
    }

    /// Raw connection to the harness database, bypassing the store.
    pub fn raw_conn(&self) -> rusqlite::Connection {
        rusqlite::Connection::open(&self.db_path).expect("failed to open raw connection")
    }

    /// Row count read straight from SQLite.
    pub fn row_count(&self) -> i64 {
        self.raw_conn()
            .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
            .expect("count query failed")
    }
}

pub fn ana() -> UserFields {
    UserFields::new("Ana", "ana@x.com", "555", "1 Rd", "FI")
}

pub fn bo() -> UserFields {
    UserFields::new("Bo", "bo@y.org", "777", "2 St", "SE")
}
