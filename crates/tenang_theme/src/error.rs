//! Theme error types

use std::path::PathBuf;

use tenang_core::ColorError;
use thiserror::Error;

/// Errors raised while building or querying palettes
///
/// Everything except [`ThemeError::UnknownPaletteKey`] is a construction-time
/// failure: the registry is not built and nothing is served.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// A base color could not be parsed
    #[error("palette {key:?}: {source}")]
    InvalidColor {
        key: String,
        #[source]
        source: ColorError,
    },

    /// A palette every resolution depends on was not provided
    #[error("required palette {0:?} is missing")]
    MissingPalette(String),

    /// Two palettes were registered under the same key
    #[error("palette key {0:?} is defined more than once")]
    DuplicatePaletteKey(String),

    /// Lookup of a key the registry does not hold
    #[error("unknown palette key {0:?}")]
    UnknownPaletteKey(String),

    /// The process-wide registry was installed before
    #[error("a palette registry is already installed")]
    AlreadyInstalled,

    /// Palette configuration is not valid TOML for the expected schema
    #[error("invalid palette config: {0}")]
    Config(#[from] toml::de::Error),

    /// Palette configuration file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ThemeError {
    /// Whether callers are expected to recover with a default
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ThemeError::UnknownPaletteKey(_))
    }
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
