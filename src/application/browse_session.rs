//! Browse session
//!
//! The one place a selection lives while the user navigates. The session
//! owns the catalog, the memoized tree and the current selection, and moves
//! between the intro view and the browse view.

use crate::domain::entities::{Catalog, CatalogItem};
use crate::domain::services::{
    initial_selection, resolve_with_match, NavigationTree, Resolved, TreeCache,
};
use crate::domain::value_objects::{SelectionEvent, SelectionState};

/// Which screen the session is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Intro,
    Browse,
}

#[derive(Debug)]
pub struct BrowseSession {
    catalog: Catalog,
    cache: TreeCache,
    selection: SelectionState,
    view: View,
}

impl BrowseSession {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            cache: TreeCache::new(),
            selection: SelectionState::default(),
            view: View::Intro,
        }
    }

    /// Switch to the browse view, starting from the first item's path.
    ///
    /// Every entry resets the selection.
    pub fn enter(&mut self) {
        self.selection = initial_selection(&self.catalog);
        self.view = View::Browse;
        tracing::debug!(selection = ?self.selection.breadcrumb(), "entered browse view");
    }

    /// Back to the intro view. The selection is kept until the next `enter`.
    pub fn leave(&mut self) {
        self.view = View::Intro;
        tracing::debug!("left browse view");
    }

    pub fn select(&mut self, event: SelectionEvent) {
        let previous = std::mem::take(&mut self.selection);
        self.selection = previous.apply(event);
    }

    pub fn tree(&mut self) -> &NavigationTree {
        self.cache.get_or_build(&self.catalog)
    }

    /// Item for the current selection, if any
    pub fn current(&self) -> Option<&CatalogItem> {
        self.resolved().map(|resolved| resolved.item)
    }

    pub fn resolved(&self) -> Option<Resolved<'_>> {
        resolve_with_match(self.catalog.items(), &self.selection)
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Number of tree builds so far
    pub fn tree_builds(&self) -> usize {
        self.cache.builds()
    }
}
