//! In-memory catalog source
//!
//! Holds a pre-built item list, for embedding a fixed catalog in a binary
//! and for tests.

use crate::domain::entities::CatalogItem;
use crate::domain::ports::{CatalogLoadError, CatalogSource};

#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogSource {
    items: Vec<CatalogItem>,
}

impl InMemoryCatalogSource {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }
}

impl CatalogSource for InMemoryCatalogSource {
    fn load(&self) -> Result<Vec<CatalogItem>, CatalogLoadError> {
        Ok(self.items.clone())
    }

    fn describe(&self) -> String {
        format!("<in-memory: {} items>", self.items.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_items_in_order() {
        let source = InMemoryCatalogSource::new(vec![
            CatalogItem::new("b", "X"),
            CatalogItem::new("a", "Y"),
        ]);
        let catalog = source.load_catalog().unwrap();
        assert_eq!(catalog.first().id(), "b");
        assert_eq!(source.describe(), "<in-memory: 2 items>");
    }
}
