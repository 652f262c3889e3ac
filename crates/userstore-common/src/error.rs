//! Common error types used throughout userstore.
//!
//! The variants follow the storage failure taxonomy: a connection could not
//! be opened, a statement failed to execute, or a row was logically absent.

/// Common error type for userstore.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The storage target could not be reached or opened.
    #[error("Connection error: {0}")]
    Connection(String),

    /// A SQL statement failed to prepare or execute (including constraint
    /// violations).
    #[error("Statement error: {0}")]
    Statement(String),

    /// The requested row was not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl Error {
    /// Create a new Connection error.
    pub fn connection<S: Into<String>>(msg: S) -> Self {
        Self::Connection(msg.into())
    }

    /// Create a new Statement error.
    pub fn statement<S: Into<String>>(msg: S) -> Self {
        Self::Statement(msg.into())
    }

    /// Create a new NotFound error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Self::NotFound(msg.into())
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
