//! On-disk catalog records
//!
//! Field names accept both snake_case and the camelCase spelling used by
//! exported web catalogs (`largeCategory`, `mediumCategory`, ...).

use serde::Deserialize;

use crate::domain::entities::{CatalogItem, ResourceLink};

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct LinkRecord {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ItemRecord {
    pub id: String,

    #[serde(alias = "largeCategory")]
    pub large_category: String,

    #[serde(default, alias = "mediumCategory")]
    pub medium_category: Option<String>,

    #[serde(default, alias = "smallCategory")]
    pub small_category: Option<String>,

    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub prompt: String,

    #[serde(default)]
    pub links: Vec<LinkRecord>,
}

/// Table form: `{ items = [...] }` / `[[items]]`
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CatalogTable {
    #[serde(default)]
    pub items: Vec<ItemRecord>,
}

impl From<ItemRecord> for CatalogItem {
    fn from(record: ItemRecord) -> Self {
        let links = record
            .links
            .into_iter()
            .map(|link| ResourceLink::new(link.label, link.url))
            .collect();

        CatalogItem::new(record.id, record.large_category)
            .with_path(record.medium_category, record.small_category)
            .with_content(record.content)
            .with_prompt(record.prompt)
            .with_links(links)
    }
}
