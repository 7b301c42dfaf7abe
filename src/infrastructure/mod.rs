//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `catalog/` - Catalog sources (file-backed, in-memory)

pub mod catalog;

pub use catalog::{FsCatalogSource, InMemoryCatalogSource};
