//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::{fs, path::Path};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the sensor data server, e.g. `http://10.0.0.164:5000`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl Config {
    /// Create Config with the given base URL.
    pub fn new(base_url: String) -> Self {
        Config {
            base_url: Some(base_url),
        }
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
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

    /// Removes the configuration file. A missing file is not an error.
    pub fn clear(path: &Path) -> Result<(), std::io::Error> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// Path of the config file: `~/.agri-dashboard/config.json`.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home_path = home::home_dir().ok_or(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "Home directory not found",
    ))?;
    Ok(home_path.join(".agri-dashboard").join("config.json"))
}

/// Picks the base URL: explicit flag first, then the config file, then the environment.
pub fn resolve_base_url(
    flag: Option<String>,
    config: Option<&Config>,
    environment: &crate::environment::Environment,
) -> String {
    flag.or_else(|| config.and_then(|c| c.base_url.clone()))
        .unwrap_or_else(|| environment.base_url())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    // Loading a saved configuration file should return the same configuration.
    fn test_load_recovers_saved_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = Config::new("http://10.0.0.164:5000".to_string());
        config.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config, loaded_config);
    }

    #[test]
    // Saving a configuration should create directories if they don't exist.
    fn test_save_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nonexistent_dir").join("config.json");

        let config = Config::new("http://localhost:5000".to_string());
        let result = config.save(&path);

        assert!(result.is_ok(), "Failed to save config");
        assert!(
            path.parent().unwrap().exists(),
            "Parent directory does not exist"
        );
    }

    #[test]
    // Loading an invalid JSON file should return an error.
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid_config.json");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        let result = Config::load_from_file(&path);
        assert!(result.is_err());
    }

    #[test]
    // An empty object is a valid config without a base URL.
    fn test_load_accepts_empty_object() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{}").unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    // Clearing removes the file and tolerates a file that is already gone.
    fn test_clear_is_idempotent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        Config::new("http://localhost:5000".to_string())
            .save(&path)
            .unwrap();

        Config::clear(&path).unwrap();
        assert!(!path.exists());
        Config::clear(&path).unwrap();
    }

    #[test]
    fn test_resolve_base_url_precedence() {
        let env = Environment::Local;
        let config = Config::new("http://from-config:5000".to_string());

        assert_eq!(
            resolve_base_url(Some("http://flag:1".to_string()), Some(&config), &env),
            "http://flag:1"
        );
        assert_eq!(
            resolve_base_url(None, Some(&config), &env),
            "http://from-config:5000"
        );
        assert_eq!(
            resolve_base_url(None, Some(&Config::default()), &env),
            "http://localhost:5000"
        );
        assert_eq!(resolve_base_url(None, None, &env), "http://localhost:5000");
    }
}
