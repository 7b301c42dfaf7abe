//! Memoized navigation tree
//!
//! The tree only depends on the catalog, so it is rebuilt only when the
//! catalog fingerprint changes. Selection changes never trigger a rebuild.

use crate::domain::entities::Catalog;
use crate::domain::value_objects::Fingerprint;

use super::tree_builder::{build_tree, NavigationTree};

#[derive(Debug, Default)]
pub struct TreeCache {
    cached: Option<(Fingerprint, NavigationTree)>,
    builds: usize,
}

impl TreeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the tree for `catalog`, building it on first use or after the
    /// catalog changed.
    ///
    /// A hit costs one fingerprint comparison; the catalog hashes itself
    /// when it is constructed.
    pub fn get_or_build(&mut self, catalog: &Catalog) -> &NavigationTree {
        let fingerprint = catalog.fingerprint();
        if !matches!(&self.cached, Some((built_from, _)) if *built_from == fingerprint) {
            self.cached = None;
        }

        let (_, tree) = self.cached.get_or_insert_with(|| {
            tracing::debug!(
                fingerprint = %fingerprint.short(),
                items = catalog.len(),
                "building navigation tree"
            );
            self.builds += 1;
            let tree = build_tree(catalog.items());
            (fingerprint, tree)
        });
        tree
    }

    /// Number of times the tree has been built
    pub fn builds(&self) -> usize {
        self.builds
    }
}
