//! Tree builder
//!
//! Derives the three-level navigation hierarchy (large → medium → [small])
//! from the flat catalog. Keys keep first-seen order at every level and
//! small categories are appended as encountered, duplicates included.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::domain::entities::CatalogItem;

/// A medium category and the small categories filed under it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediumNode {
    pub name: String,
    /// Append-only, in catalog order. Not deduplicated.
    pub smalls: Vec<String>,
}

impl MediumNode {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            smalls: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.smalls.is_empty()
    }
}

/// A large category and its medium categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LargeNode {
    pub name: String,
    pub mediums: Vec<MediumNode>,
}

impl LargeNode {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            mediums: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.mediums.is_empty()
    }

    pub fn medium(&self, name: &str) -> Option<&MediumNode> {
        self.mediums.iter().find(|m| m.name == name)
    }

    pub fn medium_names(&self) -> impl Iterator<Item = &str> {
        self.mediums.iter().map(|m| m.name.as_str())
    }
}

/// Ordered navigation hierarchy consumed by the UI
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationTree {
    larges: Vec<LargeNode>,
}

impl NavigationTree {
    pub fn larges(&self) -> &[LargeNode] {
        &self.larges
    }

    pub fn large(&self, name: &str) -> Option<&LargeNode> {
        self.larges.iter().find(|l| l.name == name)
    }

    pub fn medium(&self, large: &str, medium: &str) -> Option<&MediumNode> {
        self.large(large)?.medium(medium)
    }

    /// Small categories under `(large, medium)`, empty when either is unknown
    pub fn smalls(&self, large: &str, medium: &str) -> &[String] {
        self.medium(large, medium)
            .map(|m| m.smalls.as_slice())
            .unwrap_or(&[])
    }

    /// A tree holding only the large category `name`
    pub fn subtree(&self, name: &str) -> Option<NavigationTree> {
        let large = self.large(name)?.clone();
        Some(NavigationTree {
            larges: vec![large],
        })
    }

    pub fn large_names(&self) -> impl Iterator<Item = &str> {
        self.larges.iter().map(|l| l.name.as_str())
    }

    /// True when `name` is a known large category without medium categories
    pub fn is_leaf_large(&self, name: &str) -> bool {
        self.large(name).is_some_and(LargeNode::is_leaf)
    }

    pub fn is_empty(&self) -> bool {
        self.larges.is_empty()
    }

    pub fn len(&self) -> usize {
        self.larges.len()
    }
}

/// Build the navigation tree from catalog items.
///
/// Pure and deterministic for a given input order.
pub fn build_tree(items: &[CatalogItem]) -> NavigationTree {
    let mut larges: Vec<LargeNode> = Vec::new();
    let mut large_index: HashMap<&str, usize> = HashMap::new();
    let mut medium_index: HashMap<(&str, &str), usize> = HashMap::new();

    for item in items {
        let large = item.large_category();
        let li = *large_index.entry(large).or_insert_with(|| {
            larges.push(LargeNode::new(large));
            larges.len() - 1
        });

        let Some(medium) = item.medium_category() else {
            continue;
        };

        let mediums = &mut larges[li].mediums;
        let mi = *medium_index.entry((large, medium)).or_insert_with(|| {
            mediums.push(MediumNode::new(medium));
            mediums.len() - 1
        });

        if let Some(small) = item.small_category() {
            mediums[mi].smalls.push(small.to_string());
        }
    }

    NavigationTree { larges }
}

struct MediumMap<'a>(&'a [MediumNode]);

impl Serialize for MediumMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for medium in self.0 {
            map.serialize_entry(&medium.name, &medium.smalls)?;
        }
        map.end()
    }
}

/// Serializes as nested objects whose keys keep tree order:
/// `{ "large": { "medium": ["small", ...] } }`.
impl Serialize for NavigationTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.larges.len()))?;
        for large in &self.larges {
            map.serialize_entry(&large.name, &MediumMap(&large.mediums))?;
        }
        map.end()
    }
}
