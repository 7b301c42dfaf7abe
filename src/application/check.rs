//! Check Use Case
//!
//! Loads a catalog and reports its data-contract issues. Issues never stop
//! browsing; this exists so catalog authors can find them.

use crate::domain::entities::CatalogIssue;
use crate::domain::ports::{CatalogLoadError, CatalogSource};

/// Result of the check operation
#[derive(Debug, Clone, Default)]
pub struct CheckResult {
    /// Where the catalog came from
    pub source: String,
    /// Number of items loaded
    pub items: usize,
    /// All issues found, in catalog order
    pub issues: Vec<CatalogIssue>,
}

impl CheckResult {
    /// No issues found
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Check Use Case
///
/// Runs [`Catalog::validate`](crate::domain::entities::Catalog::validate)
/// over whatever the source yields.
pub struct CheckUseCase<'a> {
    source: &'a dyn CatalogSource,
}

impl<'a> CheckUseCase<'a> {
    pub fn new(source: &'a dyn CatalogSource) -> Self {
        Self { source }
    }

    /// Execute the check operation
    pub fn execute(&self) -> Result<CheckResult, CatalogLoadError> {
        let catalog = self.source.load_catalog()?;
        let issues = catalog.validate();

        tracing::debug!(
            source = %self.source.describe(),
            items = catalog.len(),
            issues = issues.len(),
            "catalog check finished"
        );

        Ok(CheckResult {
            source: self.source.describe(),
            items: catalog.len(),
            issues,
        })
    }
}
