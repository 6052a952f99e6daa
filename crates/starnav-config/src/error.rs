//! Configuration error types.

use std::path::PathBuf;

/// Errors that can occur when loading or saving `starnav.ron`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file or its directory could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid RON for [`crate::Config`].
    #[error("malformed config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    /// The config could not be turned into RON.
    #[error("failed to serialize config: {0}")]
    Serialize(#[source] ron::Error),

    /// The platform has no per-user config directory.
    #[error("no config directory available on this platform")]
    NoConfigDir,
}
