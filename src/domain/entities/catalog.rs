//! Catalog entity - the fixed, ordered list of items a session browses
//!
//! The catalog is never empty: the first item is the default selection
//! target when a browsing session starts.

use std::collections::HashMap;
use std::fmt;

use crate::domain::value_objects::Fingerprint;

use super::CatalogItem;

/// Errors constructing a catalog
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog is empty - at least one item is required")]
    Empty,
}

/// A data-contract defect found by [`Catalog::validate`].
///
/// Issues are reported, never repaired: tree building and resolution
/// still run over the items as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    /// Item has an empty `large_category`
    MissingLargeCategory { index: usize, id: String },
    /// Item has a `small_category` but no `medium_category`
    SmallWithoutMedium { index: usize, id: String },
    /// Two items share the same id
    DuplicateId {
        id: String,
        first: usize,
        second: usize,
    },
}

impl CatalogIssue {
    /// Stable machine-readable identifier
    pub fn code(&self) -> &'static str {
        match self {
            CatalogIssue::MissingLargeCategory { .. } => "missing-large-category",
            CatalogIssue::SmallWithoutMedium { .. } => "small-without-medium",
            CatalogIssue::DuplicateId { .. } => "duplicate-id",
        }
    }
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogIssue::MissingLargeCategory { index, id } => {
                write!(f, "item #{index} '{id}' has an empty large category")
            }
            CatalogIssue::SmallWithoutMedium { index, id } => write!(
                f,
                "item #{index} '{id}' has a small category but no medium category"
            ),
            CatalogIssue::DuplicateId { id, first, second } => {
                write!(f, "duplicate id '{id}' (items #{first} and #{second})")
            }
        }
    }
}

/// Immutable, non-empty, ordered catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    /// Items never change after construction, so this is hashed once
    fingerprint: Fingerprint,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }
        let fingerprint = fingerprint_of(&items);
        Ok(Self { items, fingerprint })
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// The default selection target
    pub fn first(&self) -> &CatalogItem {
        // Non-empty by construction.
        &self.items[0]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Fingerprint of everything the navigation tree and resolver look at.
    pub fn fingerprint(&self) -> Fingerprint {
        self.fingerprint
    }

    /// Report data-contract defects without rejecting the catalog.
    pub fn validate(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();
        let mut seen: HashMap<&str, usize> = HashMap::new();

        for (index, item) in self.items.iter().enumerate() {
            if item.large_category().trim().is_empty() {
                issues.push(CatalogIssue::MissingLargeCategory {
                    index,
                    id: item.id().to_string(),
                });
            }
            if item.small_category().is_some() && item.medium_category().is_none() {
                issues.push(CatalogIssue::SmallWithoutMedium {
                    index,
                    id: item.id().to_string(),
                });
            }
            if let Some(&first) = seen.get(item.id()) {
                issues.push(CatalogIssue::DuplicateId {
                    id: item.id().to_string(),
                    first,
                    second: index,
                });
            } else {
                seen.insert(item.id(), index);
            }
        }

        issues
    }
}

fn fingerprint_of(items: &[CatalogItem]) -> Fingerprint {
    let mut builder = Fingerprint::builder();
    for item in items {
        builder
            .field(item.id())
            .field(item.large_category())
            .optional(item.medium_category())
            .optional(item.small_category());
    }
    builder.finish()
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogItem;
    type IntoIter = std::slice::Iter<'a, CatalogItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
