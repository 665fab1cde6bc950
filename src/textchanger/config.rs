use crate::error::{Result, TextChangerError};
use crate::pipeline::ARROW;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Overrides the platform config directory when set.
pub const HOME_ENV: &str = "TEXTCHANGER_HOME";

pub const CONFIG_KEYS: &[&str] = &["separator", "seed"];

/// Configuration for textchanger, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextChangerConfig {
    /// Arrow placed between stages when describing a pipeline
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Seed for randomized converters; entropy is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_separator() -> String {
    ARROW.to_string()
}

impl Default for TextChangerConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            seed: None,
        }
    }
}

impl TextChangerConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: TextChangerConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "separator" => Some(self.separator.clone()),
            "seed" => Some(
                self.seed
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "none".to_string()),
            ),
            _ => None,
        }
    }

    /// Sets a key from its textual form. `seed` accepts `none` to unset.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "separator" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(TextChangerError::Config(
                        "separator cannot be empty".to_string(),
                    ));
                }
                self.separator = value.to_string();
            }
            "seed" => {
                self.seed = match value.trim() {
                    "none" | "" => None,
                    raw => Some(raw.parse().map_err(|_| {
                        TextChangerError::Config(format!("seed must be a number, got '{}'", raw))
                    })?),
                };
            }
            other => {
                return Err(TextChangerError::Config(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }
}

/// `$TEXTCHANGER_HOME` if set, else the platform config directory.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "textchanger", "textchanger")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| TextChangerError::Config("Could not determine config dir".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TextChangerConfig::default();
        assert_eq!(config.separator, "→");
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = TextChangerConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, TextChangerConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("nested");

        let mut config = TextChangerConfig::default();
        config.set("separator", "->").unwrap();
        config.set("seed", "42").unwrap();
        config.save(&dir).unwrap();

        let loaded = TextChangerConfig::load(&dir).unwrap();
        assert_eq!(loaded.separator, "->");
        assert_eq!(loaded.seed, Some(42));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), r#"{"seed": 7}"#).unwrap();

        let loaded = TextChangerConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.separator, "→");
        assert_eq!(loaded.seed, Some(7));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "{not json").unwrap();

        assert!(matches!(
            TextChangerConfig::load(temp_dir.path()),
            Err(TextChangerError::Serialization(_))
        ));
    }

    #[test]
    fn test_seed_can_be_unset() {
        let mut config = TextChangerConfig::default();
        config.set("seed", "9").unwrap();
        config.set("seed", "none").unwrap();
        assert_eq!(config.seed, None);
        assert_eq!(config.get("seed").as_deref(), Some("none"));
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = TextChangerConfig::default();
        assert!(config.set("seed", "abc").is_err());
        assert!(config.set("separator", "  ").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config, TextChangerConfig::default());
    }

    #[test]
    fn test_get_unknown_key() {
        assert_eq!(TextChangerConfig::default().get("nope"), None);
    }
}
