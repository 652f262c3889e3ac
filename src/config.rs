use anyhow::{Context, Result};
use std::path::Path;
use userstore_common::paths;
use userstore_db::StoreConfig;

/// Load configuration from a TOML file.
///
/// A relative `db_path` is taken relative to `base`.
pub fn load_config(path: &Path, base: &Path) -> Result<StoreConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: StoreConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    let config = config.resolved_against(base);
    validate_config(&config)?;

    Ok(config)
}

/// Load `userstore.toml` from the install directory, or the defaults if
/// there is none.
pub fn load_config_or_default() -> Result<StoreConfig> {
    let path = paths::default_config_path();
    if path.exists() {
        return load_config(&path, paths::install_dir());
    }

    Ok(StoreConfig::default())
}

fn validate_config(config: &StoreConfig) -> Result<()> {
    if config.db_path.as_os_str().is_empty() {
        anyhow::bail!("db_path cannot be empty");
    }
    if config.db_path.is_dir() {
        anyhow::bail!("db_path points at a directory: {:?}", config.db_path);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_load_config_resolves_relative_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("userstore.toml");
        std::fs::write(&path, r#"db_path = "data/users.db""#).unwrap();

        let config = load_config(&path, dir.path()).unwrap();
        assert_eq!(config.db_path, dir.path().join("data/users.db"));
    }

    #[test]
    fn test_load_config_keeps_absolute_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("userstore.toml");
        std::fs::write(&path, r#"db_path = "/var/lib/userstore/users.db""#).unwrap();

        let config = load_config(&path, dir.path()).unwrap();
        assert_eq!(config.db_path, PathBuf::from("/var/lib/userstore/users.db"));
    }

    #[test]
    fn test_empty_file_uses_default_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("userstore.toml");
        std::fs::write(&path, "").unwrap();

        let config = load_config(&path, dir.path()).unwrap();
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_rejects_empty_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("userstore.toml");
        std::fs::write(&path, r#"db_path = """#).unwrap();

        assert!(load_config(&path, dir.path()).is_err());
    }

    #[test]
    fn test_rejects_directory_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("userstore.toml");
        std::fs::write(&path, format!("db_path = {:?}", dir.path().to_string_lossy())).unwrap();

        assert!(load_config(&path, dir.path()).is_err());
    }

    #[test]
    fn test_directory_checked_under_base_not_cwd() {
        let base = tempfile::tempdir().unwrap();
        std::fs::create_dir(base.path().join("users_dir")).unwrap();
        let path = base.path().join("userstore.toml");
        std::fs::write(&path, r#"db_path = "users_dir""#).unwrap();
        assert!(load_config(&path, base.path()).is_err());

        // A name that is a directory only relative to the working directory
        // is a plain file path under `base`.
        let cwd_dir = tempfile::tempdir_in(".").unwrap();
        let name = cwd_dir.path().file_name().unwrap().to_string_lossy().into_owned();
        std::fs::write(&path, format!("db_path = {name:?}")).unwrap();
        let config = load_config(&path, base.path()).unwrap();
        assert_eq!(config.db_path, base.path().join(&name));
    }

    #[test]
    fn test_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("userstore.toml");
        std::fs::write(&path, "db_path = [").unwrap();

        let err = load_config(&path, dir.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(&dir.path().join("nope.toml"), dir.path()).is_err());
    }
}
