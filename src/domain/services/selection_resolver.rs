//! Selection resolver
//!
//! Maps a (large, medium, small) selection to the single item to display.
//!
//! Resolution runs two independent in-order scans:
//! 1. exact match on all three levels, where an unset level only matches
//!    an item that also lacks that level;
//! 2. failing that, the first item under the selected large category.
//!
//! No large selected, or an unknown large category, resolves to `None`.

use crate::domain::entities::{Catalog, CatalogItem};
use crate::domain::value_objects::SelectionState;

/// Which scan produced the resolved item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Fallback,
}

impl MatchKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchKind::Exact => "exact",
            MatchKind::Fallback => "fallback",
        }
    }
}

/// A resolved item together with how it was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<'a> {
    pub item: &'a CatalogItem,
    pub kind: MatchKind,
}

/// Resolve a selection to the item to display.
pub fn resolve<'a>(
    items: &'a [CatalogItem],
    selection: &SelectionState,
) -> Option<&'a CatalogItem> {
    resolve_with_match(items, selection).map(|resolved| resolved.item)
}

/// Like [`resolve`], also reporting whether the exact or fallback scan matched.
pub fn resolve_with_match<'a>(
    items: &'a [CatalogItem],
    selection: &SelectionState,
) -> Option<Resolved<'a>> {
    let large = selection.large()?;

    if let Some(item) = items.iter().find(|item| is_exact_match(item, selection)) {
        return Some(Resolved {
            item,
            kind: MatchKind::Exact,
        });
    }

    let item = items.iter().find(|item| item.large_category() == large)?;
    tracing::debug!(
        large,
        medium = selection.medium(),
        small = selection.small(),
        item = item.id(),
        "no exact match, falling back to first item in large category"
    );
    Some(Resolved {
        item,
        kind: MatchKind::Fallback,
    })
}

/// The selection a browsing session starts with: the first item's path.
pub fn initial_selection(catalog: &Catalog) -> SelectionState {
    SelectionState::from_item(catalog.first())
}

fn is_exact_match(item: &CatalogItem, selection: &SelectionState) -> bool {
    selection.large() == Some(item.large_category())
        && level_matches(item.medium_category(), selection.medium())
        && level_matches(item.small_category(), selection.small())
}

/// A set level must equal the item's; an unset level requires the item to lack it.
fn level_matches(item_level: Option<&str>, selected: Option<&str>) -> bool {
    match (item_level, selected) {
        (Some(have), Some(want)) => have == want,
        (None, None) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::SelectionEvent;

    fn item(id: &str, large: &str, medium: Option<&str>, small: Option<&str>) -> CatalogItem {
        CatalogItem::new(id, large).with_path(medium.map(String::from), small.map(String::from))
    }

    fn sel(large: &str, medium: Option<&str>, small: Option<&str>) -> SelectionState {
        SelectionState::new(large, medium, small)
    }

    fn resolved_id(items: &[CatalogItem], selection: &SelectionState) -> Option<String> {
        resolve(items, selection).map(|i| i.id().to_string())
    }

    #[test]
    fn exact_match_on_full_path() {
        let items = vec![
            item("b", "X", None, None),
            item("a", "X", Some("Y"), Some("Z")),
        ];
        let resolved = resolve_with_match(&items, &sel("X", Some("Y"), Some("Z"))).unwrap();
        assert_eq!(resolved.item.id(), "a");
        assert_eq!(resolved.kind, MatchKind::Exact);
    }

    #[test]
    fn large_only_selection_prefers_leaf_item() {
        let items = vec![
            item("a", "X", Some("Y"), Some("Z")),
            item("b", "X", None, None),
        ];
        let resolved = resolve_with_match(&items, &sel("X", None, None)).unwrap();
        assert_eq!(resolved.item.id(), "b");
        assert_eq!(resolved.kind, MatchKind::Exact);
    }

    #[test]
    fn fallback_to_first_item_in_large_category() {
        let items = vec![
            item("other", "W", None, None),
            item("a", "X", Some("Y"), Some("Z")),
        ];
        let resolved = resolve_with_match(&items, &sel("X", None, None)).unwrap();
        assert_eq!(resolved.item.id(), "a");
        assert_eq!(resolved.kind, MatchKind::Fallback);
    }

    #[test]
    fn medium_without_small_falls_back_when_only_deeper_items_exist() {
        let items = vec![
            item("a", "X", Some("Y"), Some("Z1")),
            item("b", "X", Some("Y"), Some("Z2")),
        ];
        let resolved = resolve_with_match(&items, &sel("X", Some("Y"), None)).unwrap();
        assert_eq!(resolved.item.id(), "a");
        assert_eq!(resolved.kind, MatchKind::Fallback);
    }

    #[test]
    fn medium_leaf_item_matches_exactly() {
        let items = vec![
            item("a", "X", Some("Y"), Some("Z1")),
            item("b", "X", Some("Y"), None),
        ];
        assert_eq!(
            resolved_id(&items, &sel("X", Some("Y"), None)).as_deref(),
            Some("b")
        );
    }

    #[test]
    fn empty_medium_counts_as_unset() {
        let items = vec![
            item("a", "X", Some("Y"), Some("Z")),
            item("b", "X", None, None),
        ];
        let literal = SelectionState {
            large: Some("X".to_string()),
            medium: Some(String::new()),
            small: None,
        };
        let replayed = SelectionState::default()
            .apply(SelectionEvent::SelectLarge("X".to_string()))
            .apply(SelectionEvent::SelectMedium(String::new()));

        for selection in [literal, replayed] {
            let resolved = resolve_with_match(&items, &selection).unwrap();
            assert_eq!(resolved.item.id(), "b");
            assert_eq!(resolved.kind, MatchKind::Exact);
        }
    }

    #[test]
    fn fallback_ignores_deeper_levels_even_if_later_item_is_closer() {
        // First item under X is a leaf; the medium "Y" exists but not "Q".
        let items = vec![
            item("leaf", "X", None, None),
            item("y", "X", Some("Y"), None),
        ];
        let resolved = resolve_with_match(&items, &sel("X", Some("Q"), None)).unwrap();
        assert_eq!(resolved.item.id(), "leaf");
        assert_eq!(resolved.kind, MatchKind::Fallback);
    }

    #[test]
    fn unknown_large_resolves_to_none() {
        let items = vec![item("a", "X", None, None)];
        assert!(resolve(&items, &sel("Nope", None, None)).is_none());
    }

    #[test]
    fn unset_large_resolves_to_none() {
        let items = vec![item("a", "X", None, None)];
        assert!(resolve(&items, &SelectionState::default()).is_none());
    }

    #[test]
    fn medium_set_without_large_resolves_to_none() {
        let items = vec![item("a", "X", Some("Y"), None)];
        let selection = SelectionState {
            large: None,
            medium: Some("Y".to_string()),
            small: None,
        };
        assert!(resolve(&items, &selection).is_none());
    }

    #[test]
    fn first_of_duplicate_paths_wins() {
        let items = vec![
            item("first", "X", Some("Y"), Some("Z")),
            item("second", "X", Some("Y"), Some("Z")),
        ];
        assert_eq!(
            resolved_id(&items, &sel("X", Some("Y"), Some("Z"))).as_deref(),
            Some("first")
        );
    }

    #[test]
    fn resolution_is_repeatable() {
        let items = vec![
            item("a", "X", Some("Y"), Some("Z")),
            item("b", "X", None, None),
        ];
        let selection = sel("X", Some("Y"), None);
        assert_eq!(
            resolve(&items, &selection).map(CatalogItem::id),
            resolve(&items, &selection).map(CatalogItem::id)
        );
    }

    #[test]
    fn initial_selection_resolves_to_first_item() {
        let catalog = Catalog::new(vec![
            item("a", "Intro", Some("Basics"), Some("Step1")),
            item("b", "Intro", Some("Basics"), Some("Step2")),
        ])
        .unwrap();

        let selection = initial_selection(&catalog);
        assert_eq!(selection, sel("Intro", Some("Basics"), Some("Step1")));

        let resolved = resolve_with_match(catalog.items(), &selection).unwrap();
        assert_eq!(resolved.item.id(), "a");
        assert_eq!(resolved.kind, MatchKind::Exact);
    }
}
