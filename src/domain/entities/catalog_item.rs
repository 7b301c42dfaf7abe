//! CatalogItem entity - one browsable entry of the prompt catalog
//!
//! Each item is tagged with a category path of up to three levels
//! (large → medium → small) and carries the text shown in the content pane.

/// A static resource location attached to an item (e.g. a workbook download).
///
/// Promptdeck only displays these; it never fetches them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLink {
    pub label: String,
    pub url: String,
}

impl ResourceLink {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// A catalog item.
///
/// Items are immutable once built. `small_category` is only meaningful when
/// `medium_category` is present; the builder does not enforce this, see
/// [`Catalog::validate`](super::Catalog::validate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    /// Unique identifier
    id: String,
    /// Top-level grouping key
    large_category: String,
    /// Second-level grouping key
    medium_category: Option<String>,
    /// Third-level grouping key
    small_category: Option<String>,
    /// Explanatory text (may be empty)
    content: String,
    /// Prompt text, the primary payload (may be empty)
    prompt: String,
    links: Vec<ResourceLink>,
}

impl CatalogItem {
    /// Create an item that lives directly under a large category.
    pub fn new(id: impl Into<String>, large_category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            large_category: large_category.into(),
            medium_category: None,
            small_category: None,
            content: String::new(),
            prompt: String::new(),
            links: Vec::new(),
        }
    }

    /// Builder: set the medium category.
    ///
    /// An empty string is treated as "no medium category".
    pub fn with_medium(mut self, medium: impl Into<String>) -> Self {
        self.medium_category = non_empty(medium.into());
        self
    }

    /// Builder: set the small category.
    ///
    /// An empty string is treated as "no small category".
    pub fn with_small(mut self, small: impl Into<String>) -> Self {
        self.small_category = non_empty(small.into());
        self
    }

    /// Builder: set medium and small from optional values
    pub fn with_path(mut self, medium: Option<String>, small: Option<String>) -> Self {
        self.medium_category = medium.and_then(non_empty);
        self.small_category = small.and_then(non_empty);
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_links(mut self, links: Vec<ResourceLink>) -> Self {
        self.links = links;
        self
    }

    // --- Getters ---

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn large_category(&self) -> &str {
        &self.large_category
    }

    pub fn medium_category(&self) -> Option<&str> {
        self.medium_category.as_deref()
    }

    pub fn small_category(&self) -> Option<&str> {
        self.small_category.as_deref()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn links(&self) -> &[ResourceLink] {
        &self.links
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
