use std::fs;
use std::path::Path;

use crate::io::vault_io::{CONFIG_FILE, VaultError};
use crate::model::config::Config;

/// Read and parse a config file.
pub fn read_config(path: &Path) -> Result<Config, VaultError> {
    let text = fs::read_to_string(path).map_err(|e| VaultError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| VaultError::ConfigParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load the configuration for a vault.
///
/// An explicit path must exist. Otherwise `.ftags.toml` at the vault root is
/// used when present, and defaults when not.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<Config, VaultError> {
    if let Some(path) = explicit {
        return read_config(path);
    }
    let path = root.join(CONFIG_FILE);
    if path.is_file() {
        read_config(&path)
    } else {
        Ok(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_is_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path(), None).unwrap();
        assert_eq!(config.panel.path_width, 24);
    }

    #[test]
    fn test_vault_config_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "[panel]\npath_width = 10\n").unwrap();
        let config = load_config(tmp.path(), None).unwrap();
        assert_eq!(config.panel.path_width, 10);
    }

    #[test]
    fn test_explicit_config_wins() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "[panel]\npath_width = 10\n").unwrap();
        let other = tmp.path().join("other.toml");
        fs::write(&other, "[search]\nscheme = \"notes\"\n").unwrap();

        let config = load_config(tmp.path(), Some(&other)).unwrap();
        assert_eq!(config.search.scheme, "notes");
        assert_eq!(config.panel.path_width, 24);
    }

    #[test]
    fn test_explicit_config_missing_is_error() {
        let tmp = TempDir::new().unwrap();
        let err = load_config(tmp.path(), Some(&tmp.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, VaultError::ReadError { .. }));
    }

    #[test]
    fn test_bad_config_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "[panel\n").unwrap();
        let err = load_config(tmp.path(), None).unwrap_err();
        assert!(matches!(err, VaultError::ConfigParseError { .. }));
        assert!(err.to_string().contains(CONFIG_FILE));
    }
}
