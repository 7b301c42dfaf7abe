//! Property tests for selection resolution.

use proptest::prelude::*;

use promptdeck::{initial_selection, resolve, Catalog, SelectionEvent, SelectionState};

use super::{category, item_path, items};

fn selection() -> impl Strategy<Value = SelectionState> {
    item_path().prop_map(|(large, medium, small)| {
        SelectionState::new(large, medium.as_deref(), small.as_deref())
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a resolved item always belongs to the selected large category,
    /// and one exists whenever the large category does.
    #[test]
    fn property_resolution_stays_in_large_category(items in items(), selection in selection()) {
        let large = selection.large().unwrap_or_default();
        let known = items.iter().any(|i| i.large_category() == large);

        match resolve(&items, &selection) {
            Some(item) => prop_assert_eq!(item.large_category(), large),
            None => prop_assert!(!known),
        }
    }

    /// PROPERTY: an exact match wins over any earlier item in the same category.
    #[test]
    fn property_exact_match_is_first_exact(items in items(), selection in selection()) {
        let exact = items.iter().find(|i| {
            Some(i.large_category()) == selection.large()
                && i.medium_category() == selection.medium()
                && i.small_category() == selection.small()
        });
        if let Some(expected) = exact {
            prop_assert_eq!(resolve(&items, &selection).map(|i| i.id()), Some(expected.id()));
        }
    }

    /// PROPERTY: the initial selection resolves to the first item.
    #[test]
    fn property_initial_selection_resolves_first_item(items in items()) {
        prop_assume!(!items.is_empty());
        let catalog = Catalog::new(items).unwrap();
        let selection = initial_selection(&catalog);

        prop_assert_eq!(
            resolve(catalog.items(), &selection).map(|i| i.id()),
            Some(catalog.first().id())
        );
    }

    /// PROPERTY: with no large category selected nothing resolves.
    #[test]
    fn property_empty_selection_resolves_nothing(items in items()) {
        prop_assert!(resolve(&items, &SelectionState::default()).is_none());
    }

    /// PROPERTY: selecting a large category clears deeper levels,
    /// whatever came before.
    #[test]
    fn property_select_large_resets_path(start in selection(), large in category()) {
        let next = start.apply(SelectionEvent::SelectLarge(large.clone()));
        prop_assert_eq!(next, SelectionState::new(large, None, None));
    }
}
