//! Configuration file loading.
//!
//! ```toml
//! [ai]
//! model = "gemini-3-flash-preview"
//! timeout_secs = 20
//!
//! [tour]
//! start_scene = 2
//! ```
//!
//! The API key can live under `[ai]` but `API_KEY` / `GEMINI_API_KEY` in
//! the environment take precedence.

use std::path::{Path, PathBuf};

use carepath_ai::SummarizerSettings;
use carepath_core::DemoScene;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("tour.start_scene must be 1-6, got {0}")]
    StartScene(u8),
}

/// Result type alias for configuration loading.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TourSettings {
    /// Scene applied before a `play` script runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_scene: Option<u8>,
}

impl TourSettings {
    pub fn start_scene(&self) -> Result<Option<DemoScene>> {
        match self.start_scene {
            None => Ok(None),
            Some(number) => DemoScene::from_number(number)
                .map(Some)
                .ok_or(ConfigError::StartScene(number)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ai: SummarizerSettings,
    pub tour: TourSettings,
}

impl AppConfig {
    /// Parse configuration text; `path` is only used in error messages.
    pub fn parse(text: &str, path: &Path) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.tour.start_scene()?;
        Ok(config)
    }

    /// Load the file at `path`, or defaults when no path is given. The
    /// environment key is applied on top either way.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;
                Self::parse(&text, path)?
            }
            None => Self::default(),
        };
        Ok(config.with_env(|name| std::env::var(name).ok()))
    }

    #[must_use]
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        self.ai = self.ai.with_env_key(lookup);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<AppConfig> {
        AppConfig::parse(text, Path::new("carepath.toml"))
    }

    #[test]
    fn empty_file_is_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.ai.model, carepath_ai::DEFAULT_MODEL);
    }

    #[test]
    fn sections_are_read() {
        let config = parse(
            "[ai]\napi_key = \"file-key\"\ntimeout_secs = 5\n\n[tour]\nstart_scene = 3\n",
        )
        .unwrap();
        assert_eq!(config.ai.api_key(), Some("file-key"));
        assert_eq!(config.ai.timeout_secs, 5);
        assert_eq!(config.tour.start_scene().unwrap(), Some(DemoScene::Report));
    }

    #[test]
    fn env_key_overrides_file() {
        let config = parse("[ai]\napi_key = \"file-key\"\n")
            .unwrap()
            .with_env(|name| (name == "API_KEY").then(|| "env-key".to_string()));
        assert_eq!(config.ai.api_key(), Some("env-key"));
    }

    #[test]
    fn out_of_range_scene_is_rejected() {
        let err = parse("[tour]\nstart_scene = 9\n").unwrap_err();
        assert!(matches!(err, ConfigError::StartScene(9)));
    }

    #[test]
    fn malformed_toml_names_the_file() {
        let err = parse("[ai\n").unwrap_err();
        assert!(err.to_string().contains("carepath.toml"));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let err = AppConfig::load(Some(Path::new("/nonexistent/carepath.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
