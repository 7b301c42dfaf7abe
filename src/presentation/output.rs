//! JSON Output
//!
//! Serializable payloads for `--json`. Each command prints one document
//! tagged with an `event` field.
//!
//! Payloads borrow from the catalog and are serialized straight to the
//! writer so the tree keeps its first-seen key order.

use serde::Serialize;

use crate::application::CheckResult;
use crate::config::DisplayConfig;
use crate::domain::entities::CatalogItem;
use crate::domain::services::{NavigationTree, Resolved};
use crate::domain::value_objects::SelectionState;

/// `tree --json`
#[derive(Debug, Serialize)]
pub struct TreeOutput<'a> {
    pub event: &'static str,
    pub source: &'a str,
    pub items: usize,
    pub tree: &'a NavigationTree,
}

impl<'a> TreeOutput<'a> {
    pub fn new(source: &'a str, items: usize, tree: &'a NavigationTree) -> Self {
        Self {
            event: "tree",
            source,
            items,
            tree,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LinkOutput<'a> {
    pub label: &'a str,
    pub url: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ItemPayload<'a> {
    pub id: &'a str,
    pub large_category: &'a str,
    pub medium_category: Option<&'a str>,
    pub small_category: Option<&'a str>,
    pub content: &'a str,
    pub prompt: &'a str,
    pub resource: bool,
    pub links: Vec<LinkOutput<'a>>,
}

impl<'a> ItemPayload<'a> {
    fn new(item: &'a CatalogItem, display: &DisplayConfig) -> Self {
        Self {
            id: item.id(),
            large_category: item.large_category(),
            medium_category: item.medium_category(),
            small_category: item.small_category(),
            content: item.content(),
            prompt: item.prompt(),
            resource: display.is_resource_category(item.large_category()),
            links: item
                .links()
                .iter()
                .map(|link| LinkOutput {
                    label: &link.label,
                    url: &link.url,
                })
                .collect(),
        }
    }
}

/// `show --json`. `item` is null when the selection resolves to nothing.
#[derive(Debug, Serialize)]
pub struct ItemOutput<'a> {
    pub event: &'static str,
    pub breadcrumb: Vec<&'a str>,
    #[serde(rename = "match")]
    pub match_kind: Option<&'static str>,
    pub item: Option<ItemPayload<'a>>,
}

impl<'a> ItemOutput<'a> {
    pub fn new(
        selection: &'a SelectionState,
        resolved: Option<Resolved<'a>>,
        display: &DisplayConfig,
    ) -> Self {
        Self {
            event: "item",
            breadcrumb: selection.breadcrumb(),
            match_kind: resolved.map(|r| r.kind.as_str()),
            item: resolved.map(|r| ItemPayload::new(r.item, display)),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct IssueOutput {
    pub code: &'static str,
    pub message: String,
}

/// `check --json`
#[derive(Debug, Serialize)]
pub struct CheckOutput<'a> {
    pub event: &'static str,
    pub source: &'a str,
    pub items: usize,
    pub ok: bool,
    pub issues: Vec<IssueOutput>,
}

impl<'a> CheckOutput<'a> {
    pub fn new(result: &'a CheckResult) -> Self {
        Self {
            event: "check",
            source: &result.source,
            items: result.items,
            ok: result.is_clean(),
            issues: result
                .issues
                .iter()
                .map(|issue| IssueOutput {
                    code: issue.code(),
                    message: issue.to_string(),
                })
                .collect(),
        }
    }
}
