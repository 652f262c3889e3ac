//! Userstore-Common: Shared types, IDs, and utilities.
//!
//! - **Typed IDs**: [`UserId`], the engine-assigned primary key of a user row
//! - **Path Utilities**: self-relative default locations for the database and
//!   config file
//! - **Error Handling**: common error type and result alias
//!
//! # Examples
//!
//! ```
//! use userstore_common::{Error, Result, UserId};
//!
//! let id = UserId::new(1);
//!
//! fn example(id: UserId) -> Result<()> {
//!     Err(Error::not_found(format!("user {id}")))
//! }
//! assert!(example(id).is_err());
//! ```

pub mod error;
pub mod ids;
pub mod paths;

pub use error::{Error, Result};
pub use ids::*;
