//! Results of store operations.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use userstore_common::{Error, Result};

/// Result of a [`crate::store::UserStore`] call.
///
/// Store operations never return `Err` or panic on a storage fault. Instead
/// the fault is logged and reported as [`Outcome::Failed`], which keeps it
/// apart from a row that simply is not there ([`Outcome::NotFound`]).
#[derive(Debug)]
#[must_use]
pub enum Outcome<T> {
    Found(T),
    NotFound,
    Failed(Error),
}

impl<T> Outcome<T> {
    /// Collapse a lookup result: `Ok(None)` becomes `NotFound`.
    pub fn from_lookup(result: Result<Option<T>>) -> Self {
        match result {
            Ok(Some(value)) => Self::Found(value),
            Ok(None) => Self::NotFound,
            Err(e) => Self::Failed(e),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// The value if found. Not-found and failure both become `None`, which
    /// is the "empty result" callers of the record-shaped API expect.
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::NotFound | Self::Failed(_) => None,
        }
    }

    /// The error if the operation failed.
    pub fn error(&self) -> Option<&Error> {
        match self {
            Self::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Found(value) => Outcome::Found(f(value)),
            Self::NotFound => Outcome::NotFound,
            Self::Failed(e) => Outcome::Failed(e),
        }
    }

    /// Convert back into a `Result` so callers can use `?`.
    pub fn into_result(self) -> Result<Option<T>> {
        match self {
            Self::Found(value) => Ok(Some(value)),
            Self::NotFound => Ok(None),
            Self::Failed(e) => Err(e),
        }
    }
}

impl<T> From<Result<T>> for Outcome<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(value) => Self::Found(value),
            Err(e) => Self::Failed(e),
        }
    }
}

/// Status of a delete.
///
/// Deleting an id that matches no row is still `Deleted` (with zero rows
/// affected); only an execution error yields `Failed`. Serializes to the
/// `{"status": "..."}` record.
#[derive(Debug)]
#[must_use]
pub enum DeleteStatus {
    Deleted { rows_affected: usize },
    Failed(Error),
}

impl DeleteStatus {
    pub const DELETED_MESSAGE: &'static str = "User deleted successfully";
    pub const FAILED_MESSAGE: &'static str = "Cannot delete user";

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Deleted { .. })
    }

    /// Rows removed, or `None` if the delete failed.
    pub fn rows_affected(&self) -> Option<usize> {
        match self {
            Self::Deleted { rows_affected } => Some(*rows_affected),
            Self::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&Error> {
        match self {
            Self::Failed(e) => Some(e),
            Self::Deleted { .. } => None,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Deleted { .. } => Self::DELETED_MESSAGE,
            Self::Failed(_) => Self::FAILED_MESSAGE,
        }
    }
}

impl Serialize for DeleteStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut record = serializer.serialize_struct("DeleteStatus", 1)?;
        record.serialize_field("status", self.message())?;
        record.end()
    }
}
