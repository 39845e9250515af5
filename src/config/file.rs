//! Configuration file loading.

use crate::config::Config;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Load configuration from a TOML file.
///
/// Returns default config if the file does not exist.
pub fn load_config_file(path: &Path) -> Result<Config> {
    if !path.exists() {
        debug!("No config file at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|e| Error::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| Error::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load configuration from `explicit`, or the platform default path.
///
/// A missing default location falls back to built-in defaults; an explicit
/// path is always honored.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => load_config_file(path),
        None => super::config_file_path()
            .map_or_else(|_| Ok(Config::default()), |path| load_config_file(&path)),
    }
}

/// Save configuration to a TOML file.
pub fn save_config(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::ConfigWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    let contents = toml::to_string_pretty(config).map_err(|e| Error::ConfigSerialize { source: e })?;

    std::fs::write(path, contents).map_err(|e| Error::ConfigWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Save configuration to `explicit`, or the platform default path.
pub fn save_config_to(config: &Config, explicit: Option<&Path>) -> Result<PathBuf> {
    let path = super::resolve_config_path(explicit)?;
    save_config(config, &path)?;
    Ok(path)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::Units;
    use chrono::Weekday;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_load_nonexistent_file_returns_default() {
        let config = load_config_file(Path::new("/nonexistent/path/config.toml")).unwrap();
        assert!(config.schedule.path.is_none());
        assert_eq!(config.legend.len(), 7);
    }

    #[test]
    fn test_load_valid_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[schedule]
path = "/plans/marathon.json"
strength_days = ["Mon", "thursday"]

[forecast]
api_key = "abc123"
location = "Tampere"
units = "imperial"

[legend]
LL = "Long run"
"#
        )
        .unwrap();

        let config = load_config_file(file.path()).unwrap();
        assert_eq!(
            config.schedule.path,
            Some(PathBuf::from("/plans/marathon.json"))
        );
        assert_eq!(
            config.schedule.strength_days,
            vec![Weekday::Mon, Weekday::Thu]
        );
        assert_eq!(config.forecast.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.forecast.location, "Tampere");
        assert_eq!(config.forecast.units, Units::Imperial);
        assert!(config.forecast.enabled);
        // An explicit legend table replaces the defaults.
        assert_eq!(config.legend.len(), 1);
    }

    #[test]
    fn test_load_invalid_toml_returns_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "this is not valid toml {{{{").unwrap();

        let err = load_config_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.forecast.location = "Oulu".to_string();
        let saved = save_config_to(&config, Some(&path)).unwrap();
        assert_eq!(saved, path);

        let loaded = load_config(Some(&path)).unwrap();
        assert_eq!(loaded.forecast.location, "Oulu");
        assert_eq!(loaded.schedule.strength_days, vec![Weekday::Mon]);
    }
}
