//! Domain Entities
//!
//! - `CatalogItem` - One categorized prompt or resource
//! - `Catalog` - The non-empty, ordered item list a session browses

mod catalog;
mod catalog_item;

pub use catalog::{Catalog, CatalogError, CatalogIssue};
pub use catalog_item::{CatalogItem, ResourceLink};
