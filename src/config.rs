//! Application configuration.

use crate::consts::cli_consts::simulated_auth::DEFAULT_DELAY_MS;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use std::{fs, path::Path, path::PathBuf};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Delay of the simulated authentication call, in milliseconds.
    pub simulated_delay_ms: u64,
    /// Whether the TUI paints a dark background.
    pub with_background_color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            simulated_delay_ms: DEFAULT_DELAY_MS,
            with_background_color: true,
        }
    }
}

impl Config {
    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// Fields missing from the file take their default values.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Loads the configuration at `path`, or the defaults if there is no file.
    pub fn load_or_default(path: &Path) -> Result<Self, std::io::Error> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Removes the configuration file, if present.
    pub fn clear(path: &Path) -> Result<(), std::io::Error> {
        match fs::remove_file(path) {
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}

/// Location of the config file: `~/.login-screen/config.json`.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home = home::home_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    Ok(home.join(".login-screen").join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    // Loading a saved configuration file should return the same configuration.
    fn test_load_recovers_saved_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = Config {
            simulated_delay_ms: 250,
            with_background_color: false,
        };
        config.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config, loaded_config);
    }

    #[test]
    // Saving a configuration should create directories if they don't exist.
    fn test_save_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nonexistent_dir").join("config.json");

        let result = Config::default().save(&path);

        assert!(result.is_ok(), "Failed to save config");
        assert!(
            path.parent().unwrap().exists(),
            "Parent directory does not exist"
        );
    }

    #[test]
    // Missing fields fall back to defaults.
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "simulated_delay_ms": 10 }"#).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.simulated_delay(), Duration::from_millis(10));
        assert!(loaded.with_background_color);
    }

    #[test]
    fn test_load_or_default_without_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let loaded = Config::load_or_default(&path).unwrap();
        assert_eq!(loaded, Config::default());
        assert_eq!(loaded.simulated_delay_ms, 1500);
    }

    #[test]
    // Loading an invalid JSON file should return an error.
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid_config.json");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        assert!(Config::load_from_file(&path).is_err());
        assert!(Config::load_or_default(&path).is_err());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        Config::default().save(&path).unwrap();

        Config::clear(&path).unwrap();
        assert!(!path.exists());
        Config::clear(&path).unwrap();
    }
}
