//! Store configuration.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use userstore_common::paths;

use crate::connection::FileConnector;

/// Where the store keeps its data.
///
/// Built explicitly and handed to [`crate::store::UserStore`] so tests and
/// embedding hosts can point it at any database. The default resolves to
/// `database.db` next to the running executable.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Path of the SQLite database file.
    pub db_path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: paths::default_db_path(),
        }
    }
}

impl StoreConfig {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// Make a relative `db_path` relative to `base` instead of the working
    /// directory.
    #[must_use]
    pub fn resolved_against(mut self, base: &Path) -> Self {
        self.db_path = paths::resolve_against(base, &self.db_path);
        self
    }

    /// Per-call connector for the configured database.
    pub fn connector(&self) -> FileConnector {
        FileConnector::new(&self.db_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_self_relative() {
        let config = StoreConfig::default();
        assert_eq!(config.db_path, paths::default_db_path());
        assert!(config.db_path.is_absolute());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: StoreConfig = toml::from_str("").unwrap();
        assert_eq!(config, StoreConfig::default());

        let config: StoreConfig = toml::from_str(r#"db_path = "data/users.db""#).unwrap();
        assert_eq!(config.db_path, PathBuf::from("data/users.db"));
    }

    #[test]
    fn test_resolved_against() {
        let config = StoreConfig::new("users.db").resolved_against(Path::new("/opt/app"));
        assert_eq!(config.db_path, PathBuf::from("/opt/app/users.db"));

        let config = StoreConfig::new("/var/lib/users.db").resolved_against(Path::new("/opt/app"));
        assert_eq!(config.db_path, PathBuf::from("/var/lib/users.db"));
    }

    #[test]
    fn test_connector_uses_db_path() {
        let config = StoreConfig::new("/tmp/x.db");
        assert_eq!(config.connector().path(), Path::new("/tmp/x.db"));
    }
}
