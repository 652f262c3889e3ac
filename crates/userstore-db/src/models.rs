//! Rust models matching the `users` table.
//!
//! Both types serialize to the field-keyed record shape callers exchange
//! with the store: `User` carries `user_id` plus the five text columns,
//! `UserFields` only the five mutable columns.

use serde::{Deserialize, Serialize};
use userstore_common::UserId;

/// Column list shared by every `SELECT` on `users`; the order matches
/// [`User::from_row`].
pub(crate) const USER_COLUMNS: &str = "user_id, name, email, phone, address, country";

/// A stored user row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub country: String,
}

impl User {
    /// Build a `User` from a row selected with [`USER_COLUMNS`].
    pub fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            user_id: UserId::new(row.get(0)?),
            name: row.get(1)?,
            email: row.get(2)?,
            phone: row.get(3)?,
            address: row.get(4)?,
            country: row.get(5)?,
        })
    }

    /// The mutable part of this record.
    #[must_use]
    pub fn fields(&self) -> UserFields {
        UserFields {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            country: self.country.clone(),
        }
    }
}

/// The five replaceable columns of a user, used for insert and update.
///
/// No format or length checks happen here; validation is up to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub country: String,
}

impl UserFields {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            address: address.into(),
            country: country.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serializes_to_field_keyed_record() {
        let user = User {
            user_id: UserId::new(1),
            name: "Ana".into(),
            email: "ana@x.com".into(),
            phone: "555".into(),
            address: "1 Rd".into(),
            country: "FI".into(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "user_id": 1,
                "name": "Ana",
                "email": "ana@x.com",
                "phone": "555",
                "address": "1 Rd",
                "country": "FI",
            })
        );
    }

    #[test]
    fn fields_deserialize_without_user_id() {
        let fields: UserFields = serde_json::from_value(serde_json::json!({
            "name": "Bo",
            "email": "bo@y.org",
            "phone": "+358 40 1",
            "address": "2 St",
            "country": "SE",
        }))
        .unwrap();
        assert_eq!(fields, UserFields::new("Bo", "bo@y.org", "+358 40 1", "2 St", "SE"));
    }

    #[test]
    fn fields_drop_the_id() {
        let user = User {
            user_id: UserId::new(9),
            name: "n".into(),
            email: "e".into(),
            phone: "p".into(),
            address: "a".into(),
            country: "c".into(),
        };
        assert_eq!(user.fields(), UserFields::new("n", "e", "p", "a", "c"));
    }
}
