//! Drill settings
//!
//! Settings come from three places, highest priority first: command-line
//! flags, the TOML config file, built-in defaults. The config file lives at
//! `<config dir>/doji/config.toml` unless a path is given explicitly:
//!
//! ```toml
//! deck = "/home/me/japanese/verbs.doji"
//! seed = 42
//! show_banner = false
//! color = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::deck::DEFAULT_DECK_FILE;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config {path:?} could not be read: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config {path:?} is not valid TOML: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Contents of the config file; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub deck: Option<PathBuf>,
    pub seed: Option<u64>,
    pub show_banner: Option<bool>,
    pub color: Option<bool>,
}

impl FileConfig {
    /// Default location of the config file
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("doji").join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Load the file if it exists; a missing file yields the empty config.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        Self::load(path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded config from {:?}", path);
        Ok(config)
    }
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub deck: Option<PathBuf>,
    pub seed: Option<u64>,
    pub no_banner: bool,
    pub no_color: bool,
}

/// Fully resolved settings for a run
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub deck: PathBuf,
    /// `None` seeds from the clock
    pub seed: Option<u64>,
    pub show_banner: bool,
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            deck: PathBuf::from(DEFAULT_DECK_FILE),
            seed: None,
            show_banner: true,
            color: true,
        }
    }
}

impl Settings {
    pub fn resolve(file: FileConfig, overrides: &Overrides) -> Self {
        let defaults = Self::default();
        Self {
            deck: overrides.deck.clone().or(file.deck).unwrap_or(defaults.deck),
            seed: overrides.seed.or(file.seed),
            show_banner: !overrides.no_banner && file.show_banner.unwrap_or(defaults.show_banner),
            color: !overrides.no_color && file.color.unwrap_or(defaults.color),
        }
    }
}
