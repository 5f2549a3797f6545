//! Error types for the configuration and CLI surfaces.
//!
//! Formatting itself is total and never returns an error.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for vecfmt operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Whether the user can fix this by editing their input.
    pub fn is_user_fixable(&self) -> bool {
        match self {
            Self::Io { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            Self::Config { .. } => true,
        }
    }
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
