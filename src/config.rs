//! Persistent defaults for sort runs.
//!
//! Settings are read from a TOML file and merged with command-line flags; the
//! sorting core only ever sees the merged values.
//!
//! # Configuration File Format
//!
//! ```toml
//! [sort]
//! exclude = ["Thumbs.db", ".DS_Store"]
//! ignore_case = false
//! keep_going = false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Name of the per-directory configuration file.
pub const LOCAL_CONFIG_FILE: &str = ".declutter.toml";

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Invalid configuration in {}: {reason}", path.display())]
    Invalid { path: PathBuf, reason: String },

    #[error("IO error reading configuration {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeclutterConfig {
    #[serde(default)]
    pub sort: SortSettings,
}

/// Defaults for the `sort` command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SortSettings {
    /// Exact filenames to leave in place, merged with `--exclude`.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Match extensions regardless of case.
    #[serde(default)]
    pub ignore_case: bool,

    /// Continue past individual move failures.
    #[serde(default)]
    pub keep_going: bool,
}

impl DeclutterConfig {
    /// Load configuration, with fallback to defaults.
    ///
    /// Attempts to load configuration in the following order:
    /// 1. If `config_path` is provided, load from that file
    /// 2. Look for `.declutter.toml` in the current directory
    /// 3. Look for `~/.config/declutter/config.toml`
    /// 4. Fall back to default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if an explicitly provided file is missing, or if any
    /// file that is found cannot be read or parsed.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let home_config = std::env::var_os("HOME").map(|home| {
            PathBuf::from(home)
                .join(".config")
                .join("declutter")
                .join("config.toml")
        });
        let candidates: Vec<PathBuf> = std::iter::once(PathBuf::from(LOCAL_CONFIG_FILE))
            .chain(home_config)
            .collect();
        Self::load_with_candidates(config_path, &candidates)
    }

    /// Explicit path first, then the first candidate that exists.
    fn load_with_candidates(
        config_path: Option<&Path>,
        candidates: &[PathBuf],
    ) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            return Self::load_from_file(path);
        }

        match candidates.iter().find(|path| path.is_file()) {
            Some(path) => Self::load_from_file(path),
            None => {
                debug!("no configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|reason| ConfigError::Invalid {
            path: path.to_path_buf(),
            reason,
        })?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }
}
