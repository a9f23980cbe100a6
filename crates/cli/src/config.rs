//! Portal timing and path settings.

use class_notes_dashboard::debounce::DEFAULT_DEBOUNCE_MS;
use class_notes_dashboard::results::DEFAULT_SEARCH_DELAY_MS;
use class_notes_dashboard::toast::DEFAULT_TOAST_DURATION_MS;
use class_notes_dashboard::{Dashboard, SearchTiming};
use class_notes_doc_model::Catalog;
use class_notes_viewer_core::DEFAULT_SEGMENT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// Quiet period before a search runs
    pub debounce_ms: u64,
    /// Time the loading state stays up before results replace it
    pub search_delay_ms: u64,
    /// How long a toast stays up before it starts leaving
    pub toast_duration_ms: u64,
    /// Slides preloaded on each side of the current one
    pub preload_radius: u32,
    /// Path segment the site is published under
    pub base_segment: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            search_delay_ms: DEFAULT_SEARCH_DELAY_MS,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            preload_radius: 1,
            base_segment: DEFAULT_SEGMENT.to_owned(),
        }
    }
}

impl PortalConfig {
    /// Reads a JSON config file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Defaults with environment overrides applied.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Applies overrides from the environment.
    ///
    /// Environment variables:
    /// - `CLASS_NOTES_DEBOUNCE_MS`
    /// - `CLASS_NOTES_SEARCH_DELAY_MS`
    /// - `CLASS_NOTES_TOAST_MS`
    /// - `CLASS_NOTES_PRELOAD_RADIUS`
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Some(value) = env_number("CLASS_NOTES_DEBOUNCE_MS")? {
            self.debounce_ms = value;
        }

        if let Some(value) = env_number("CLASS_NOTES_SEARCH_DELAY_MS")? {
            self.search_delay_ms = value;
        }

        if let Some(value) = env_number("CLASS_NOTES_TOAST_MS")? {
            self.toast_duration_ms = value;
        }

        if let Some(value) = env_number::<u32>("CLASS_NOTES_PRELOAD_RADIUS")? {
            self.preload_radius = value;
        }

        Ok(())
    }

    pub fn search_timing(&self) -> SearchTiming {
        SearchTiming { debounce_ms: self.debounce_ms, search_delay_ms: self.search_delay_ms }
    }

    /// Dashboard over `catalog` using these timings.
    pub fn dashboard(&self, catalog: Catalog) -> Dashboard {
        Dashboard::new(catalog, self.search_timing(), self.toast_duration_ms)
    }
}

fn env_number<T: std::str::FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue(name.to_owned())),
        Err(_) => Ok(None),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid value for {0}")]
    InvalidValue(String),
}
