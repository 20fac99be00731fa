use crate::constants::DEFAULT_CONDITION_TYPES;
use serde::Deserialize;
use std::ops::Deref;
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level feed configuration shared across the tools.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeedConfigInner {
    pub catalog: CatalogConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct FeedConfig {
    #[serde(flatten, default)]
    inner: Arc<FeedConfigInner>,
}

impl Deref for FeedConfig {
    type Target = FeedConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

/// Allowed marketplace condition types.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub condition_types: Vec<String>,
}

/// Logging knobs consumed by the logger bootstrap.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level directive (e.g. `info`, `sfeed_product=trace`).
    pub level: String,
    /// Directory for rolling log files; console only when unset.
    pub path: Option<PathBuf>,
    pub json: bool,
    pub max_files: usize,
}

// --- Default ---

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            condition_types: DEFAULT_CONDITION_TYPES.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), path: None, json: false, max_files: 10 }
    }
}
