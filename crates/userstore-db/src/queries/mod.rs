//! Database query modules.
//!
//! - users: single-statement user CRUD

pub mod users;
