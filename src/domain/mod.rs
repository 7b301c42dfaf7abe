//! Domain Layer
//!
//! Catalog browsing logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Catalog and CatalogItem
//! - `value_objects/` - SelectionState, SelectionEvent, Fingerprint
//! - `services/` - Tree builder, tree cache, selection resolver
//! - `ports/` - Interface for the catalog data source

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
