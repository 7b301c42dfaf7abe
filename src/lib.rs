//! Promptdeck - browse a categorized catalog of prompts
//!
//! A catalog is a flat, ordered list of items, each tagged with a category
//! path of up to three levels (large → medium → small). Promptdeck derives a
//! navigation tree from that list and resolves a partial selection to the
//! single item to display.
//!
//! ## Layers
//!
//! - `domain` - Catalog entities, selection values, tree building and resolution (no I/O)
//! - `application` - Browse session and catalog check
//! - `infrastructure` - Catalog file loading
//! - `config` - Layered configuration
//! - `presentation` - CLI definition and JSON payloads

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{BrowseSession, CheckResult, CheckUseCase, View};
pub use config::Config;
pub use domain::entities::{Catalog, CatalogIssue, CatalogItem, ResourceLink};
pub use domain::ports::{CatalogLoadError, CatalogSource};
pub use domain::services::{build_tree, initial_selection, resolve, NavigationTree, TreeCache};
pub use domain::value_objects::{SelectionEvent, SelectionState};
pub use error::{DeckError, DeckResult};
pub use infrastructure::{FsCatalogSource, InMemoryCatalogSource};
