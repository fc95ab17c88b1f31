//! View cache configuration.

use crate::error::ViewCacheError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Page loaded into a view when its tab is released
pub const DEFAULT_BLANK_URL: &str = "about:blank";

/// Tunables for [`TabViewCache`](crate::TabViewCache).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewCacheConfig {
    /// Views built eagerly at init
    /// Default: 1
    pub prewarm_views: usize,

    /// URL used to wipe a view's content on release
    pub blank_url: String,

    /// Suspend views as soon as they are released
    /// Default: false, released views keep running until reused
    pub suspend_on_release: bool,
}

impl Default for ViewCacheConfig {
    fn default() -> Self {
        Self {
            prewarm_views: 1,
            blank_url: String::from(DEFAULT_BLANK_URL),
            suspend_on_release: false,
        }
    }
}

impl ViewCacheConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ViewCacheError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ViewCacheError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ViewCacheError> {
        let data = fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    /// Check the configuration for values the cache cannot work with.
    pub fn validate(&self) -> Result<(), ViewCacheError> {
        if self.blank_url.trim().is_empty() {
            return Err(ViewCacheError::Config("blank_url must not be empty".into()));
        }
        Ok(())
    }
}
