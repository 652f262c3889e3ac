//! Path utilities for locating the database and config files.
//!
//! All default locations are anchored at the directory of the running
//! executable, never the caller's working directory, so the same binary
//! always opens the same database no matter where it is launched from.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// File name of the default SQLite database.
pub const DB_FILE_NAME: &str = "database.db";

/// File name of the optional config file read from the install directory.
pub const CONFIG_FILE_NAME: &str = "userstore.toml";

static INSTALL_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Directory the running executable lives in.
///
/// Resolved once per process. Falls back to the crate's manifest directory
/// if the executable path cannot be determined.
///
/// # Examples
///
/// ```
/// use userstore_common::paths::install_dir;
///
/// assert!(install_dir().is_absolute());
/// assert_eq!(install_dir(), install_dir());
/// ```
pub fn install_dir() -> &'static Path {
    INSTALL_DIR.get_or_init(|| {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")))
    })
}

/// Default database location: `database.db` inside [`install_dir`].
///
/// # Examples
///
/// ```
/// use userstore_common::paths::default_db_path;
///
/// assert!(default_db_path().ends_with("database.db"));
/// ```
#[must_use]
pub fn default_db_path() -> PathBuf {
    install_dir().join(DB_FILE_NAME)
}

/// Default config file location inside [`install_dir`].
#[must_use]
pub fn default_config_path() -> PathBuf {
    install_dir().join(CONFIG_FILE_NAME)
}

/// Resolve `path` against `base` unless it is already absolute.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use userstore_common::paths::resolve_against;
///
/// let base = Path::new("/opt/userstore");
/// assert_eq!(resolve_against(base, Path::new("data/users.db")), Path::new("/opt/userstore/data/users.db"));
/// assert_eq!(resolve_against(base, Path::new("/var/users.db")), Path::new("/var/users.db"));
/// ```
#[must_use]
pub fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
