//! Selection value objects
//!
//! `SelectionState` is the (large, medium, small) tuple the user has picked.
//! It only changes through [`SelectionState::apply`], which clears every
//! level deeper than the one being set.

use crate::domain::entities::CatalogItem;

/// The current category selection. All fields start unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SelectionState {
    pub large: Option<String>,
    pub medium: Option<String>,
    pub small: Option<String>,
}

/// A discrete navigation action from the consumer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    /// Pick a large category; medium and small are cleared
    SelectLarge(String),
    /// Pick a medium category; small is cleared
    SelectMedium(String),
    /// Pick a small category
    SelectSmall(String),
    /// Reset to nothing selected
    Clear,
}

impl SelectionState {
    pub fn new(large: impl Into<String>, medium: Option<&str>, small: Option<&str>) -> Self {
        Self {
            large: level(large.into()),
            medium: medium.map(str::to_string).and_then(level),
            small: small.map(str::to_string).and_then(level),
        }
    }

    /// Selection pointing exactly at an item's category path.
    pub fn from_item(item: &CatalogItem) -> Self {
        Self::new(
            item.large_category(),
            item.medium_category(),
            item.small_category(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.large().is_none() && self.medium().is_none() && self.small().is_none()
    }

    pub fn large(&self) -> Option<&str> {
        self.large.as_deref().filter(|name| !name.is_empty())
    }

    pub fn medium(&self) -> Option<&str> {
        self.medium.as_deref().filter(|name| !name.is_empty())
    }

    pub fn small(&self) -> Option<&str> {
        self.small.as_deref().filter(|name| !name.is_empty())
    }

    /// Apply a navigation event, returning the next state.
    ///
    /// Selecting an empty name leaves that level unset.
    pub fn apply(self, event: SelectionEvent) -> Self {
        match event {
            SelectionEvent::SelectLarge(large) => Self {
                large: level(large),
                medium: None,
                small: None,
            },
            SelectionEvent::SelectMedium(medium) => Self {
                medium: level(medium),
                small: None,
                ..self
            },
            SelectionEvent::SelectSmall(small) => Self {
                small: level(small),
                ..self
            },
            SelectionEvent::Clear => Self::default(),
        }
    }

    /// The set levels, outermost first.
    pub fn breadcrumb(&self) -> Vec<&str> {
        [self.large(), self.medium(), self.small()]
            .into_iter()
            .flatten()
            .collect()
    }
}

/// An empty category name selects nothing
fn level(name: String) -> Option<String> {
    (!name.is_empty()).then_some(name)
}
