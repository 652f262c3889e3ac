//! The user store: schema setup and CRUD on top of a connection provider.
//!
//! Every call opens its own connection, runs one statement (plus a re-read
//! for insert and update), commits or rolls back, and drops the connection
//! before returning. Nothing is cached between calls.
//!
//! Storage faults never escape as `Err` or panics. They are logged and come
//! back as [`Outcome::Failed`] / [`DeleteStatus::Failed`].

use rusqlite::Connection;
use userstore_common::{Error, Result, UserId};

use crate::config::StoreConfig;
use crate::connection::{ConnectionProvider, FileConnector};
use crate::models::{User, UserFields};
use crate::outcome::{DeleteStatus, Outcome};
use crate::queries::users;
use crate::schema;

/// CRUD access to the `users` table.
#[derive(Debug, Clone)]
pub struct UserStore<P = FileConnector> {
    provider: P,
}

impl UserStore<FileConnector> {
    /// Store opening a fresh connection per call to the configured file.
    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.connector())
    }
}

impl Default for UserStore<FileConnector> {
    fn default() -> Self {
        Self::new(FileConnector::default())
    }
}

impl<P: ConnectionProvider> UserStore<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Create the `users` table if it is missing.
    ///
    /// Best effort: a failure is logged and otherwise ignored. Use
    /// [`Self::schema_exists`] to confirm the table is there, or
    /// [`Self::try_ensure_schema`] to get the error.
    pub fn ensure_schema(&self) {
        match self.try_ensure_schema() {
            Ok(()) => tracing::info!(db = %self.provider.target(), "User table ready"),
            Err(e) => tracing::error!(
                db = %self.provider.target(),
                error = %e,
                "User table creation failed"
            ),
        }
    }

    /// Create the `users` table if it is missing, returning any error.
    pub fn try_ensure_schema(&self) -> Result<()> {
        let conn = self.provider.open()?;
        schema::create_users_table(&conn)
    }

    /// Whether the `users` table exists.
    pub fn schema_exists(&self) -> Result<bool> {
        let conn = self.provider.open()?;
        schema::users_table_exists(&conn)
    }

    /// Insert a user and return the row as stored.
    pub fn insert(&self, fields: &UserFields) -> Outcome<User> {
        let result = self.provider.open().and_then(|conn| {
            let id = in_transaction(&conn, |tx| users::insert_user(tx, fields))?;
            tracing::debug!(user_id = %id, "Inserted user");
            users::get_user_by_id(&conn, id)
        });
        report("insert", Outcome::from_lookup(result))
    }

    /// All users, in the engine's natural scan order.
    pub fn list_all(&self) -> Outcome<Vec<User>> {
        let result = self
            .provider
            .open()
            .and_then(|conn| users::list_users(&conn));
        report("list_all", Outcome::from(result))
    }

    /// Look up one user by id.
    pub fn get_by_id(&self, id: UserId) -> Outcome<User> {
        let result = self
            .provider
            .open()
            .and_then(|conn| users::get_user_by_id(&conn, id));
        report("get_by_id", Outcome::from_lookup(result))
    }

    /// Replace all mutable fields of user `id` and return the stored row.
    ///
    /// An unknown id is not an error: the update touches zero rows, is
    /// committed anyway, and the re-read reports [`Outcome::NotFound`]. No
    /// row is created.
    pub fn update(&self, id: UserId, fields: &UserFields) -> Outcome<User> {
        let result = self.provider.open().and_then(|conn| {
            let changed = in_transaction(&conn, |tx| users::update_user(tx, id, fields))?;
            tracing::debug!(user_id = %id, changed, "Updated user");
            users::get_user_by_id(&conn, id)
        });
        report("update", Outcome::from_lookup(result))
    }

    /// [`Self::update`] keyed by the record's own `user_id`.
    pub fn update_user(&self, user: &User) -> Outcome<User> {
        self.update(user.user_id, &user.fields())
    }

    /// Delete user `id`. Deleting an id that does not exist succeeds.
    pub fn delete(&self, id: UserId) -> DeleteStatus {
        let result = self
            .provider
            .open()
            .and_then(|conn| in_transaction(&conn, |tx| users::delete_user(tx, id)));

        match result {
            Ok(rows_affected) => {
                tracing::debug!(user_id = %id, rows_affected, "Deleted user");
                DeleteStatus::Deleted { rows_affected }
            }
            Err(e) => {
                tracing::error!(user_id = %id, error = %e, "delete failed");
                DeleteStatus::Failed(e)
            }
        }
    }
}

/// Run `op` in a transaction: commit if it succeeds, roll back if it fails.
fn in_transaction<T>(conn: &Connection, op: impl FnOnce(&Connection) -> Result<T>) -> Result<T> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| Error::statement(format!("Failed to begin transaction: {e}")))?;

    match op(&tx) {
        Ok(value) => {
            tx.commit()
                .map_err(|e| Error::statement(format!("Failed to commit: {e}")))?;
            Ok(value)
        }
        Err(e) => {
            if let Err(rollback_err) = tx.rollback() {
                tracing::warn!(error = %rollback_err, "Rollback failed");
            }
            Err(e)
        }
    }
}

fn report<T>(operation: &'static str, outcome: Outcome<T>) -> Outcome<T> {
    if let Outcome::Failed(e) = &outcome {
        tracing::error!(operation, error = %e, "User store operation failed");
    }
    outcome
}
