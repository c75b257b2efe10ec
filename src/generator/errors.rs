//! Generation error types.

use std::path::PathBuf;

use thiserror::Error;

/// Error raised while preparing or running a generation pass.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The host is not one of Linux, Mac or Win64. Generation cannot proceed.
    #[error("cmakegen does not support host platform `{platform}`")]
    UnsupportedPlatform { platform: String },

    #[error("unknown build configuration `{0}`")]
    UnknownConfiguration(String),

    #[error("invalid build model: {0}")]
    InvalidModel(String),

    #[error("failed to enumerate source files under {}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl GenerateError {
    /// Create an unsupported platform error.
    pub fn unsupported_platform(platform: impl Into<String>) -> Self {
        GenerateError::UnsupportedPlatform {
            platform: platform.into(),
        }
    }
}
