//! Catalog Source Implementations
//!
//! Concrete implementations of the `CatalogSource` port.

mod fs;
mod memory;
mod record;

pub use fs::{CatalogFormat, FsCatalogSource};
pub use memory::InMemoryCatalogSource;
