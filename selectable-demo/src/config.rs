//! Demo configuration loaded from an optional JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use selectable::dropdown::DEFAULT_MAX_VISIBLE;
use selectable::{OptionsError, SelectOption, Theme, validate_options};
use serde::Deserialize;
use thiserror::Error;

use crate::paths;

/// Config error type.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid options: {0}")]
    Options(#[from] OptionsError),
}

/// Everything the demo page can be configured with.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub options: Vec<SelectOption>,
    pub max_visible: usize,
    pub theme: Theme,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            options: default_options(),
            max_visible: DEFAULT_MAX_VISIBLE,
            theme: Theme::default(),
        }
    }
}

/// The options the demo page shows when nothing else is configured.
pub fn default_options() -> Vec<SelectOption> {
    ["First", "Second", "Third", "Fourth", "Fifth"]
        .into_iter()
        .zip(1..)
        .map(|(label, value)| SelectOption::new(label, value))
        .collect()
}

impl DemoConfig {
    /// Load from `path`, or from the default location when `path` is `None`.
    ///
    /// A missing default file yields the defaults. An explicit path must exist.
    pub fn load(path: Option<PathBuf>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::from_file(&path);
        }
        match paths::config_file() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => {
                log::info!("DemoConfig::load no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        log::info!("DemoConfig::from_file path={}", path.display());
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(text)?;
        validate_options(&config.options)?;
        if config.max_visible == 0 {
            log::warn!("DemoConfig max_visible=0, using 1");
            config.max_visible = 1;
        }
        Ok(config)
    }
}
