//! Property tests for the navigation tree.

use proptest::prelude::*;

use promptdeck::build_tree;

use super::items;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every item's large category appears exactly once, in first-seen order.
    #[test]
    fn property_large_keys_first_seen_order(items in items()) {
        let tree = build_tree(&items);

        let mut expected: Vec<&str> = Vec::new();
        for item in &items {
            if !expected.contains(&item.large_category()) {
                expected.push(item.large_category());
            }
        }

        prop_assert_eq!(tree.large_names().collect::<Vec<_>>(), expected);
    }

    /// PROPERTY: each medium node lists exactly its items' small categories, in order.
    #[test]
    fn property_smalls_are_appended_in_catalog_order(items in items()) {
        let tree = build_tree(&items);

        for large in tree.larges() {
            for medium in &large.mediums {
                let expected: Vec<String> = items
                    .iter()
                    .filter(|i| {
                        i.large_category() == large.name
                            && i.medium_category() == Some(medium.name.as_str())
                    })
                    .filter_map(|i| i.small_category().map(str::to_string))
                    .collect();
                prop_assert_eq!(&medium.smalls, &expected);
            }
        }
    }

    /// PROPERTY: every item's path can be found in the tree.
    #[test]
    fn property_every_item_path_is_reachable(items in items()) {
        let tree = build_tree(&items);

        for item in &items {
            let large = item.large_category();
            prop_assert!(tree.large(large).is_some());

            let Some(medium) = item.medium_category() else {
                continue;
            };
            prop_assert!(
                tree.medium(large, medium).is_some(),
                "missing medium {}/{}", large, medium
            );
            if let Some(small) = item.small_category() {
                prop_assert!(
                    tree.smalls(large, medium).iter().any(|s| s == small),
                    "missing small {}/{}/{}", large, medium, small
                );
            }
        }
    }

    /// PROPERTY: an item without a medium never creates one.
    #[test]
    fn property_leaf_items_add_no_mediums(items in items()) {
        let tree = build_tree(&items);

        for large in tree.larges() {
            let has_medium_item = items.iter().any(|i| {
                i.large_category() == large.name && i.medium_category().is_some()
            });
            prop_assert_eq!(large.is_leaf(), !has_medium_item);
        }
    }

    /// PROPERTY: building is deterministic.
    #[test]
    fn property_build_is_deterministic(items in items()) {
        prop_assert_eq!(build_tree(&items), build_tree(&items));
    }
}
