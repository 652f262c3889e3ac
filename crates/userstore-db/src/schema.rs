//! Schema definition for the `users` table.
//!
//! There is exactly one table and no versioning: the statement is written
//! with `IF NOT EXISTS` so running it repeatedly is a no-op.

use rusqlite::Connection;
use userstore_common::{Error, Result};

/// Name of the one table this crate manages.
pub const USERS_TABLE: &str = "users";

/// `AUTOINCREMENT` keeps SQLite from handing out the id of a deleted
/// highest row again.
pub const CREATE_USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    user_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name    TEXT NOT NULL,
    email   TEXT NOT NULL,
    phone   TEXT NOT NULL,
    address TEXT NOT NULL,
    country TEXT NOT NULL
);
"#;

/// Create the `users` table if it does not exist yet and commit.
pub fn create_users_table(conn: &Connection) -> Result<()> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| Error::statement(e.to_string()))?;

    tx.execute_batch(CREATE_USERS_TABLE)
        .map_err(|e| Error::statement(format!("Failed to create users table: {e}")))?;

    tx.commit().map_err(|e| Error::statement(e.to_string()))
}

/// Check whether the `users` table exists.
pub fn users_table_exists(conn: &Connection) -> Result<bool> {
    conn.query_row(
        "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='table' AND name=?1",
        [USERS_TABLE],
        |row| row.get(0),
    )
    .map_err(|e| Error::statement(e.to_string()))
}
