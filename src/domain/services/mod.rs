//! Domain Services
//!
//! Pure business logic over the catalog. No I/O.

mod selection_resolver;
mod tree_builder;
mod tree_cache;

pub use selection_resolver::{initial_selection, resolve, resolve_with_match, MatchKind, Resolved};
pub use tree_builder::{build_tree, LargeNode, MediumNode, NavigationTree};
pub use tree_cache::TreeCache;
