//! CLI configuration

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Get default config file path
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("quill")
        .join("config.toml")
}

/// Configuration for the CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Populate new stores with the demo accounts and posts
    pub seed_demo_data: bool,
    /// Listen address for `serve --http`
    pub http_addr: String,
    /// `pretty` or `json`
    pub output_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_demo_data: true,
            http_addr: "127.0.0.1:4000".to_string(),
            output_format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load the config file, falling back to defaults when it does not exist
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &["seed_demo_data", "http_addr", "output_format"]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "seed_demo_data" => Some(self.seed_demo_data.to_string()),
            "http_addr" => Some(self.http_addr.clone()),
            "output_format" => Some(self.output_format.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "seed_demo_data" => {
                self.seed_demo_data = value
                    .parse()
                    .with_context(|| format!("Expected true or false, got {:?}", value))?;
            }
            "http_addr" => self.http_addr = value.to_string(),
            "output_format" => match value {
                "pretty" | "json" => self.output_format = value.to_string(),
                _ => anyhow::bail!("Expected pretty or json, got {:?}", value),
            },
            _ => anyhow::bail!(
                "Unknown config key: {} (available keys: {})",
                key,
                Self::keys().join(", ")
            ),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set("seed_demo_data", "false").unwrap();
        config.set("http_addr", "0.0.0.0:9000").unwrap();
        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "output_format = \"json\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.output_format, "json");
        assert!(config.seed_demo_data);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(config.set("seed_demo_data", "maybe").is_err());
        assert!(config.set("output_format", "csv").is_err());
        assert!(config.set("colour", "blue").is_err());
        assert_eq!(config, Config::default());
    }
}
