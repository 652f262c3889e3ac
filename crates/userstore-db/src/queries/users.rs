//! User CRUD statements.
//!
//! These run a single statement against a connection the caller already
//! holds and propagate errors; transaction handling, logging and connection
//! scoping live in [`crate::store`].

use rusqlite::Connection;
use userstore_common::{Error, Result, UserId};

use crate::models::{User, UserFields, USER_COLUMNS};

/// Insert a new user and return the engine-assigned id.
pub fn insert_user(conn: &Connection, fields: &UserFields) -> Result<UserId> {
    conn.execute(
        "INSERT INTO users (name, email, phone, address, country)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        rusqlite::params![
            fields.name,
            fields.email,
            fields.phone,
            fields.address,
            fields.country,
        ],
    )
    .map_err(|e| Error::statement(e.to_string()))?;

    Ok(UserId::new(conn.last_insert_rowid()))
}

/// Get a user by primary key.
pub fn get_user_by_id(conn: &Connection, id: UserId) -> Result<Option<User>> {
    let result = conn.query_row(
        &format!("SELECT {USER_COLUMNS} FROM users WHERE user_id = ?1"),
        [id.get()],
        User::from_row,
    );
    match result {
        Ok(u) => Ok(Some(u)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::statement(e.to_string())),
    }
}

/// List all users in the engine's natural scan order.
pub fn list_users(conn: &Connection) -> Result<Vec<User>> {
    let mut stmt = conn
        .prepare(&format!("SELECT {USER_COLUMNS} FROM users"))
        .map_err(|e| Error::statement(e.to_string()))?;
    let rows = stmt
        .query_map([], User::from_row)
        .map_err(|e| Error::statement(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::statement(e.to_string()))?;
    Ok(rows)
}

/// Replace the five mutable columns of a user. Returns the number of rows
/// changed (0 when no row has this id).
pub fn update_user(conn: &Connection, id: UserId, fields: &UserFields) -> Result<usize> {
    conn.execute(
        "UPDATE users SET name = ?1, email = ?2, phone = ?3, address = ?4, country = ?5
         WHERE user_id = ?6",
        rusqlite::params![
            fields.name,
            fields.email,
            fields.phone,
            fields.address,
            fields.country,
            id.get(),
        ],
    )
    .map_err(|e| Error::statement(e.to_string()))
}

/// Delete a user by id. Returns the number of rows removed.
pub fn delete_user(conn: &Connection, id: UserId) -> Result<usize> {
    conn.execute("DELETE FROM users WHERE user_id = ?1", [id.get()])
        .map_err(|e| Error::statement(e.to_string()))
}
