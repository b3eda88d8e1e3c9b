use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that end a sort run.
#[derive(Debug, Error)]
pub enum SortError {
    #[error("Could not resolve working directory {}: {source}", path.display())]
    InvalidPath {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read directory {}: {source}", path.display())]
    DirectoryRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create directory {}: {source}", path.display())]
    DirectoryCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to move {} to {}: {source}", from.display(), to.display())]
    FileMove {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    #[error("{failed} file(s) could not be moved ({moved} moved)")]
    PartialFailure { failed: usize, moved: usize },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to render report: {0}")]
    Render(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SortError>;

impl SortError {
    /// Process exit status for this error. 2 is left to clap's usage errors.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidPath { .. } | Self::DirectoryRead { .. } => 3,
            Self::DirectoryCreate { .. } => 4,
            Self::FileMove { .. } => 5,
            Self::PartialFailure { .. } => 6,
            Self::Config(_) => 7,
            Self::Render(_) => 8,
        }
    }
}
