//! TreeNode data structure.

use promptdeck::domain::value_objects::SelectionEvent;

/// A category in the menu; its depth is the length of `categories`
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub label: String,
    /// Category names from the large category down to this node
    pub categories: Vec<String>,
    pub children: Vec<TreeNode>,
    /// Only meaningful for nodes with children
    pub expanded: bool,
}

impl TreeNode {
    pub fn large(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            categories: vec![name],
            children: Vec::new(),
            expanded: false,
        }
    }

    /// Child node one level below `parent`
    pub fn child_of(parent: &TreeNode, name: impl Into<String>) -> Self {
        let name = name.into();
        let mut categories = parent.categories.clone();
        categories.push(name.clone());
        Self {
            label: name,
            categories,
            children: Vec::new(),
            expanded: false,
        }
    }

    pub fn add_child(&mut self, child: TreeNode) {
        self.children.push(child);
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn expand(&mut self) {
        if !self.is_leaf() {
            self.expanded = true;
        }
    }

    pub fn collapse(&mut self) {
        self.expanded = false;
    }

    /// Events that move a selection onto this node, outermost first.
    ///
    /// Selecting a nested node also selects its ancestors, so the result does
    /// not depend on what was selected before.
    pub fn selection_events(&self) -> Vec<SelectionEvent> {
        self.categories
            .iter()
            .enumerate()
            .map(|(depth, name)| match depth {
                0 => SelectionEvent::SelectLarge(name.clone()),
                1 => SelectionEvent::SelectMedium(name.clone()),
                _ => SelectionEvent::SelectSmall(name.clone()),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn medium() -> TreeNode {
        let large = TreeNode::large("Intro");
        TreeNode::child_of(&large, "Basics")
    }

    #[test]
    fn child_extends_parent_path() {
        let small = TreeNode::child_of(&medium(), "Step1");
        assert_eq!(small.categories, vec!["Intro", "Basics", "Step1"]);
        assert_eq!(small.label, "Step1");
    }

    #[test]
    fn expand_is_noop_on_leaf() {
        let mut leaf = TreeNode::large("Resources");
        leaf.expand();
        assert!(!leaf.expanded);
    }

    #[test]
    fn selection_events_select_ancestors_first() {
        let small = TreeNode::child_of(&medium(), "Step1");
        assert_eq!(
            small.selection_events(),
            vec![
                SelectionEvent::SelectLarge("Intro".to_string()),
                SelectionEvent::SelectMedium("Basics".to_string()),
                SelectionEvent::SelectSmall("Step1".to_string()),
            ]
        );
    }
}
