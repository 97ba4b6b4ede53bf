//! Configuration management
//!
//! Handles config file loading/saving and API key resolution.
//! Config is stored at ~/.config/reelcap/config.toml

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// Public demo keys, used when nothing else is configured
const DEFAULT_OMDB_KEY: &str = "fecfc339";
const DEFAULT_TMDB_KEY: &str = "f8ba41067baa4af0ee72f4f26e60d955";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// OMDb API key
    pub omdb_api_key: Option<String>,
    /// TMDB API key
    pub tmdb_api_key: Option<String>,
}

impl Config {
    /// Get config file path (~/.config/reelcap/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("reelcap").join("config.toml"))
    }

    /// Load config from file, or return default if not found
    pub fn load() -> Self {
        Self::path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| toml::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path =
            Self::path().ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml = toml::to_string_pretty(self)?;
        std::fs::write(path, toml)?;
        Ok(())
    }

    /// Get OMDb API key with fallback chain:
    /// 1. Environment variable OMDB_API_KEY
    /// 2. Key from config file
    /// 3. Bundled demo key
    pub fn get_omdb_api_key(&self) -> String {
        if let Ok(key) = std::env::var("OMDB_API_KEY") {
            return key;
        }
        self.omdb_api_key
            .clone()
            .unwrap_or_else(|| DEFAULT_OMDB_KEY.to_string())
    }

    /// Get TMDB API key with fallback chain:
    /// 1. Environment variable TMDB_API_KEY
    /// 2. Key from config file
    /// 3. Bundled demo key
    pub fn get_tmdb_api_key(&self) -> String {
        if let Ok(key) = std::env::var("TMDB_API_KEY") {
            return key;
        }
        self.tmdb_api_key
            .clone()
            .unwrap_or_else(|| DEFAULT_TMDB_KEY.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.omdb_api_key.is_none());
        assert!(config.tmdb_api_key.is_none());
    }

    #[test]
    fn test_config_file_key_wins_over_default() {
        let config = Config {
            omdb_api_key: Some("my-own-key".to_string()),
            tmdb_api_key: None,
        };
        // Env vars are not set in the test runner for this name pattern,
        // so the configured key is used directly.
        if std::env::var("OMDB_API_KEY").is_err() {
            assert_eq!(config.get_omdb_api_key(), "my-own-key");
        }
    }

    #[test]
    fn test_bundled_defaults_are_nonempty() {
        let config = Config::default();
        if std::env::var("OMDB_API_KEY").is_err() {
            assert!(!config.get_omdb_api_key().is_empty());
        }
        if std::env::var("TMDB_API_KEY").is_err() {
            assert!(!config.get_tmdb_api_key().is_empty());
        }
    }

    #[test]
    fn test_config_roundtrips_through_toml() {
        let config = Config {
            omdb_api_key: Some("abc".to_string()),
            tmdb_api_key: Some("def".to_string()),
        };
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.omdb_api_key.as_deref(), Some("abc"));
        assert_eq!(parsed.tmdb_api_key.as_deref(), Some("def"));
    }
}
