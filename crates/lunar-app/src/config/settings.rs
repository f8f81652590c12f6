//! Loading `config.toml` and layering environment overrides on top

use std::path::{Path, PathBuf};

use lunar_core::prelude::*;

use super::types::{Overrides, Settings};

pub const CONFIG_FILENAME: &str = "config.toml";
pub const ENV_URL: &str = "LUNAR_URL";
pub const ENV_API_KEY: &str = "LUNAR_API_KEY";

/// `{config_dir}/lunar/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("lunar").join(CONFIG_FILENAME))
}

/// Load settings: defaults < file < environment.
///
/// An explicit `path` must exist and parse. The default location is optional
/// and a broken file there only logs a warning.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    load_settings_with_env(path, |name| std::env::var(name).ok())
}

pub(crate) fn load_settings_with_env<F>(path: Option<&Path>, getenv: F) -> Result<Settings>
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = match path {
        Some(path) => read_required(path)?,
        None => default_config_path()
            .map(|p| read_optional(&p))
            .unwrap_or_default(),
    };

    settings.apply(&Overrides {
        base_url: getenv(ENV_URL),
        api_key: getenv(ENV_API_KEY),
    });

    Ok(settings.validated())
}

fn read_required(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Err(Error::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    let settings = toml::from_str(&content)
        .map_err(|e| Error::config_invalid(format!("{}: {}", path.display(), e)))?;
    debug!("Loaded settings from {:?}", path);
    Ok(settings)
}

fn read_optional(path: &Path) -> Settings {
    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Settings::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_explicit_file_is_loaded() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "[server]\nbase_url = \"http://api.internal:9000\"\n\n[ui]\npage_size = 10\n",
        );
        let settings = load_settings_with_env(Some(&path), no_env).unwrap();
        assert_eq!(settings.server.base_url, "http://api.internal:9000");
        assert_eq!(settings.ui.page_size, 10);
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = load_settings_with_env(Some(&dir.path().join("nope.toml")), no_env).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }

    #[test]
    fn test_explicit_invalid_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[ui\npage_size = ");
        let err = load_settings_with_env(Some(&path), no_env).unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));
    }

    #[test]
    fn test_optional_invalid_file_falls_back() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "not = [valid");
        assert_eq!(read_optional(&path), Settings::default());
    }

    #[test]
    fn test_env_overrides_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[server]\nbase_url = \"http://file\"\n");
        let settings = load_settings_with_env(Some(&path), |name| match name {
            ENV_URL => Some("http://env:1234/".to_string()),
            ENV_API_KEY => Some("env-key".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(settings.server.base_url, "http://env:1234");
        assert_eq!(settings.server.api_key.as_deref(), Some("env-key"));
    }

    #[test]
    #[serial]
    fn test_process_environment_is_read() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "");
        std::env::set_var(ENV_URL, "http://from-process-env");
        let settings = load_settings(Some(&path));
        std::env::remove_var(ENV_URL);
        assert_eq!(
            settings.unwrap().server.base_url,
            "http://from-process-env"
        );
    }
}
