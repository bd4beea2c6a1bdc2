//! Settings load and resolution errors.

use std::path::PathBuf;
use thiserror::Error;

/// Why a settings file could not be turned into pedal controls.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Settings file missing or unreadable
    #[error("cannot read settings file '{path}': {source}")]
    ReadFile {
        /// File that was asked for.
        path: PathBuf,
        /// I/O error from the read.
        #[source]
        source: std::io::Error,
    },

    /// Malformed TOML or an unknown key
    #[error("invalid settings TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Named preset is not in the factory bank
    #[error("no factory preset named '{0}'")]
    PresetNotFound(String),
}

impl ConfigError {
    /// [`ConfigError::ReadFile`] for `path`.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }
}
