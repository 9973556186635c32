//! Settings file parsing.
//!
//! A single TOML file at `<config_dir>/spice/config.toml` (overridable
//! via `--settings`). A missing file at the default location falls back
//! to defaults; a missing explicit path and a malformed file are errors.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use spice_core::prelude::*;
use spice_core::{CURRENT_USER_ID, CURRENT_USER_NAME};

/// Default simulated login delay, matching the original client's timer
const DEFAULT_LOGIN_DELAY_MS: u64 = 1000;

/// User-tunable settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Milliseconds between a valid login submission and entering the app
    pub login_delay_ms: u64,

    /// Id used to attribute our own chat messages
    pub current_user_id: String,

    /// Display name for the signed-in user
    pub current_user_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            login_delay_ms: DEFAULT_LOGIN_DELAY_MS,
            current_user_id: CURRENT_USER_ID.to_string(),
            current_user_name: CURRENT_USER_NAME.to_string(),
        }
    }
}

/// Where settings live unless overridden
pub fn default_settings_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("spice").join("config.toml")
}

/// Load settings.
///
/// With an explicit `path` the file must exist and parse. Without one,
/// the default location is tried and a missing file yields defaults.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(p) => {
            if !p.exists() {
                return Err(Error::ConfigNotFound {
                    path: p.to_path_buf(),
                });
            }
            read_settings_file(p)
        }
        None => {
            let p = default_settings_path();
            if !p.exists() {
                debug!(path = %p.display(), "no settings file, using defaults");
                return Ok(Settings::default());
            }
            read_settings_file(&p)
        }
    }
}

fn read_settings_file(path: &Path) -> Result<Settings> {
    let raw = std::fs::read_to_string(path)?;
    let settings: Settings = toml::from_str(&raw)
        .map_err(|e| Error::config_invalid(format!("{}: {}", path.display(), e)))?;
    info!(path = %path.display(), "loaded settings");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_full_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            r#"
login_delay_ms = 250
current_user_id = "me"
current_user_name = "Me"
"#,
        );

        let settings = load_settings(Some(&path)).unwrap();
        assert_eq!(settings.login_delay_ms, 250);
        assert_eq!(settings.current_user_id, "me");
        assert_eq!(settings.current_user_name, "Me");
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "login_delay_ms = 50\n");

        let settings = load_settings(Some(&path)).unwrap();
        assert_eq!(settings.login_delay_ms, 50);
        assert_eq!(settings.current_user_id, CURRENT_USER_ID);
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let err = load_settings(Some(&path)).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "login_delay_ms = \"soon\"\n");
        let err = load_settings(Some(&path)).unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_default_values() {
        let settings = Settings::default();
        assert_eq!(settings.login_delay_ms, 1000);
        assert_eq!(settings.current_user_id, "current-user");
        assert_eq!(settings.current_user_name, "You");
    }
}
