//! Error types for Promptdeck
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.
//! A selection that resolves to no item is not an error.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::CatalogLoadError;

/// Result type alias for Promptdeck operations
pub type DeckResult<T> = Result<T, DeckError>;

/// Main error type for Promptdeck operations
#[derive(Error, Debug)]
pub enum DeckError {
    /// Catalog could not be loaded
    #[error(transparent)]
    Catalog(#[from] CatalogLoadError),

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// No catalog configured anywhere
    #[error("no catalog configured\n  → Fix: pass --catalog <PATH>, set PROMPTDECK_CATALOG, or add [catalog] path to .promptdeck/config.toml")]
    NoCatalog,

    /// A category named on the command line does not exist in the tree
    #[error("unknown {level} category '{name}'")]
    UnknownCategory { level: &'static str, name: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
