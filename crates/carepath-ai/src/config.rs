//! Summarizer settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default generation model.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Default Generative Language API base URL.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variables consulted for the API key, in order.
pub const API_KEY_VARS: [&str; 2] = ["API_KEY", "GEMINI_API_KEY"];

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for the `[ai]` section of the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerSettings {
    /// API key; an empty string counts as absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Model name used in the generation URL.
    pub model: String,

    /// API base URL, without a trailing slash.
    pub endpoint: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for SummarizerSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl SummarizerSettings {
    /// Defaults plus the API key from the environment, if set.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_env_key(|name| std::env::var(name).ok())
    }

    /// Let a key from `lookup` override the configured one. The first
    /// non-empty variable in [`API_KEY_VARS`] wins.
    #[must_use]
    pub fn with_env_key(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let from_env = API_KEY_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .find(|value| !value.trim().is_empty());
        if from_env.is_some() {
            self.api_key = from_env;
        }
        self
    }

    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// The usable API key, if any.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn is_configured(&self) -> bool {
        self.api_key().is_some()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
