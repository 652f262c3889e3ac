//! Userstore-DB: SQLite persistence for user records.
//!
//! # Modules
//!
//! - `connection` - Per-call connection provider and the provider trait
//! - `pool` - r2d2-backed pooled provider
//! - `config` - Store configuration (database location)
//! - `schema` - The `users` table definition
//! - `models` - Rust models matching the table
//! - `queries` - Single-statement SQL operations
//! - `outcome` - Result types returned by the store
//! - `store` - [`UserStore`], the component callers use
//!
//! # Example
//!
//! ```no_run
//! use userstore_db::{StoreConfig, UserFields, UserStore};
//!
//! let store = UserStore::from_config(&StoreConfig::new("/var/lib/userstore/users.db"));
//! store.ensure_schema();
//!
//! let fields = UserFields::new("Ana", "ana@x.com", "555", "1 Rd", "FI");
//! if let Some(user) = store.insert(&fields).found() {
//!     println!("Created user {}", user.user_id);
//! }
//! ```

pub mod config;
pub mod connection;
pub mod models;
pub mod outcome;
pub mod pool;
pub mod queries;
pub mod schema;
pub mod store;

pub use config::StoreConfig;
pub use connection::{ConnectionProvider, FileConnector};
pub use models::{User, UserFields};
pub use outcome::{DeleteStatus, Outcome};
pub use pool::PooledConnector;
pub use store::UserStore;
