//! View configuration: icon sprite, page size and the results messages.
//!
//! Loaded from a JSON file where every field is optional, then optionally
//! overridden from `<PREFIX>_*` environment variables.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use vista_ui::IconSet;

pub const RESULTS_ERROR_MESSAGE: &str = "No recipes found from your search. Please try again!";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid value for {key}: {value:?}")]
    InvalidOverride { key: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewsConfig {
    pub icons_url: String,
    pub results_per_page: usize,
    pub results_error_message: String,
    pub results_default_message: String,
}

impl Default for ViewsConfig {
    fn default() -> Self {
        Self {
            icons_url: "icons.svg".into(),
            results_per_page: 10,
            results_error_message: RESULTS_ERROR_MESSAGE.into(),
            results_default_message: String::new(),
        }
    }
}

impl ViewsConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&raw)?;
        debug!(?path, "loaded views config");
        Ok(config)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Override fields from `<prefix>_ICONS_URL` and `<prefix>_RESULTS_PER_PAGE`.
    pub fn apply_env(&mut self, prefix: &str) -> Result<(), ConfigError> {
        self.apply_overrides(prefix, |key| std::env::var(key).ok())
    }

    pub fn apply_overrides<F>(&mut self, prefix: &str, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(&format!("{prefix}_ICONS_URL")) {
            self.icons_url = url;
        }

        let key = format!("{prefix}_RESULTS_PER_PAGE");
        if let Some(value) = lookup(&key) {
            self.results_per_page = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidOverride { key, value })?;
        }
        Ok(())
    }

    pub fn icons(&self) -> IconSet {
        IconSet::new(self.icons_url.clone())
    }
}
