//! CatalogSource port - abstraction for loading the catalog
//!
//! The catalog is supplied whole, once, by an external loader. The domain
//! never fetches, paginates or streams it.

use std::path::PathBuf;

use crate::domain::entities::{Catalog, CatalogError, CatalogItem};

/// Abstract catalog loader, implemented by the infrastructure layer.
pub trait CatalogSource {
    /// Load every item, in catalog order
    fn load(&self) -> Result<Vec<CatalogItem>, CatalogLoadError>;

    /// Load and wrap into a non-empty [`Catalog`]
    fn load_catalog(&self) -> Result<Catalog, CatalogLoadError> {
        let items = self.load()?;
        Ok(Catalog::new(items)?)
    }

    /// Human-readable origin for diagnostics
    fn describe(&self) -> String;
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    #[error("catalog file not found: {path}\n  → Fix: pass --catalog <PATH> or set [catalog] path in config.toml")]
    NotFound { path: PathBuf },

    #[error("unsupported catalog format '{extension}' for {path} (expected .toml, .json, .yaml or .yml)")]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("failed to parse catalog {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error(transparent)]
    Invalid(#[from] CatalogError),

    #[error("IO error reading catalog: {0}")]
    Io(#[from] std::io::Error),
}
