//! Cursor movement over the visible rows of the category tree.

use promptdeck::domain::value_objects::{SelectionEvent, SelectionState};

use super::node::TreeNode;
use super::render::{render_help_bar, render_tree_node};

/// One visible line of the menu
#[derive(Debug, Clone)]
pub struct Row {
    /// Child indices from the top level down to this node
    pub path: Vec<usize>,
    pub depth: usize,
    pub label: String,
    pub categories: Vec<String>,
    pub expanded: bool,
    pub has_children: bool,
}

impl Row {
    fn crumbs(&self) -> Vec<&str> {
        self.categories.iter().map(String::as_str).collect()
    }

    pub fn is_selected(&self, selection: &SelectionState) -> bool {
        selection.breadcrumb() == self.crumbs()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeAction {
    Up,
    Down,
    /// Open the node under the cursor and select it
    Expand,
    /// Close the node, or move to its parent when already closed
    Collapse,
    /// Back to the intro screen
    Home,
    Quit,
}

/// What the caller should do after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuResponse {
    /// Nothing beyond a redraw
    Continue,
    /// Apply these events to the selection, in order
    Select(Vec<SelectionEvent>),
    Home,
    Quit,
}

pub struct TreeMenu {
    nodes: Vec<TreeNode>,
    rows: Vec<Row>,
    cursor: usize,
}

impl TreeMenu {
    pub fn new(nodes: Vec<TreeNode>) -> Self {
        let rows = visible_rows(&nodes);
        Self {
            nodes,
            rows,
            cursor: 0,
        }
    }

    #[cfg(test)]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current_row(&self) -> Option<&Row> {
        self.rows.get(self.cursor)
    }

    pub fn handle_action(&mut self, action: TreeAction) -> MenuResponse {
        match action {
            TreeAction::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                MenuResponse::Continue
            }
            TreeAction::Down => {
                self.cursor = (self.cursor + 1).min(self.last_row());
                MenuResponse::Continue
            }
            TreeAction::Expand => self.expand_current(),
            TreeAction::Collapse => {
                self.collapse_current();
                MenuResponse::Continue
            }
            TreeAction::Home => MenuResponse::Home,
            TreeAction::Quit => MenuResponse::Quit,
        }
    }

    fn expand_current(&mut self) -> MenuResponse {
        let Some(path) = self.current_row().map(|row| row.path.clone()) else {
            return MenuResponse::Continue;
        };
        let Some(node) = node_mut(&mut self.nodes, &path) else {
            return MenuResponse::Continue;
        };
        node.expand();
        let events = node.selection_events();
        self.refresh();
        MenuResponse::Select(events)
    }

    fn collapse_current(&mut self) {
        let Some((path, expanded)) = self.current_row().map(|row| (row.path.clone(), row.expanded))
        else {
            return;
        };

        if expanded {
            if let Some(node) = node_mut(&mut self.nodes, &path) {
                node.collapse();
            }
            self.refresh();
        } else if let Some((_, parent)) = path.split_last().filter(|(_, p)| !p.is_empty()) {
            if let Some(index) = self.rows.iter().position(|row| row.path == parent) {
                self.cursor = index;
            }
        }
    }

    /// Open every node on the way to `selection` and put the cursor on the
    /// deepest one that exists.
    pub fn reveal(&mut self, selection: &SelectionState) {
        let mut level = self.nodes.as_mut_slice();
        for name in selection.breadcrumb() {
            let Some(node) = level.iter_mut().find(|node| node.label == name) else {
                break;
            };
            node.expand();
            level = node.children.as_mut_slice();
        }
        self.refresh();

        let crumbs = selection.breadcrumb();
        if let Some(index) = self
            .rows
            .iter()
            .rposition(|row| crumbs.starts_with(&row.crumbs()))
        {
            self.cursor = index;
        }
    }

    /// Visible rows, each cut to `width` columns
    pub fn render(
        &self,
        selection: &SelectionState,
        supports_unicode: bool,
        width: usize,
    ) -> String {
        self.rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let active = index == self.cursor;
                let selected = row.is_selected(selection);
                render_tree_node(row, active, selected, supports_unicode, width) + "\n"
            })
            .collect()
    }

    pub fn help_bar(&self, supports_unicode: bool) -> String {
        render_help_bar(supports_unicode)
    }

    fn refresh(&mut self) {
        self.rows = visible_rows(&self.nodes);
        self.cursor = self.cursor.min(self.last_row());
    }

    fn last_row(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }
}

/// Depth-first rows for every node whose ancestors are all expanded
fn visible_rows(nodes: &[TreeNode]) -> Vec<Row> {
    let mut rows = Vec::new();
    let mut pending: Vec<(&TreeNode, Vec<usize>)> = nodes
        .iter()
        .enumerate()
        .rev()
        .map(|(index, node)| (node, vec![index]))
        .collect();

    while let Some((node, path)) = pending.pop() {
        if node.expanded {
            for (index, child) in node.children.iter().enumerate().rev() {
                let mut child_path = path.clone();
                child_path.push(index);
                pending.push((child, child_path));
            }
        }
        rows.push(Row {
            depth: path.len() - 1,
            path,
            label: node.label.clone(),
            categories: node.categories.clone(),
            expanded: node.expanded,
            has_children: !node.is_leaf(),
        });
    }
    rows
}

fn node_mut<'a>(nodes: &'a mut [TreeNode], path: &[usize]) -> Option<&'a mut TreeNode> {
    let (first, rest) = path.split_first()?;
    rest.iter()
        .try_fold(nodes.get_mut(*first)?, |node, &index| node.children.get_mut(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Intro > Basics > {Step1, Step2}, plus a childless Resources
    fn sample() -> TreeMenu {
        let mut intro = TreeNode::large("Intro");
        let mut basics = TreeNode::child_of(&intro, "Basics");
        basics.add_child(TreeNode::child_of(&basics, "Step1"));
        basics.add_child(TreeNode::child_of(&basics, "Step2"));
        intro.add_child(basics);
        TreeMenu::new(vec![intro, TreeNode::large("Resources")])
    }

    fn labels(menu: &TreeMenu) -> Vec<&str> {
        menu.rows().iter().map(|row| row.label.as_str()).collect()
    }

    fn press(menu: &mut TreeMenu, actions: &[TreeAction]) -> MenuResponse {
        let mut last = MenuResponse::Continue;
        for action in actions {
            last = menu.handle_action(*action);
        }
        last
    }

    #[test]
    fn only_top_level_is_visible_at_first() {
        let menu = sample();
        assert_eq!(labels(&menu), ["Intro", "Resources"]);
        assert_eq!(menu.cursor(), 0);
    }

    #[test]
    fn cursor_is_clamped_at_both_ends() {
        let mut menu = sample();
        press(&mut menu, &[TreeAction::Up]);
        assert_eq!(menu.cursor(), 0);
        press(&mut menu, &[TreeAction::Down, TreeAction::Down, TreeAction::Down]);
        assert_eq!(menu.cursor(), 1);
    }

    #[test]
    fn expand_opens_and_selects() {
        let mut menu = sample();
        let response = press(&mut menu, &[TreeAction::Expand]);
        assert_eq!(
            response,
            MenuResponse::Select(vec![SelectionEvent::SelectLarge("Intro".to_string())])
        );
        assert_eq!(labels(&menu), ["Intro", "Basics", "Resources"]);
    }

    #[test]
    fn expanding_a_leaf_selects_without_new_rows() {
        let mut menu = sample();
        let response = press(&mut menu, &[TreeAction::Down, TreeAction::Expand]);
        assert_eq!(
            response,
            MenuResponse::Select(vec![SelectionEvent::SelectLarge("Resources".to_string())])
        );
        assert_eq!(menu.rows().len(), 2);
    }

    #[test]
    fn small_node_selects_whole_path() {
        use TreeAction::{Down, Expand};

        let mut menu = sample();
        let response = press(&mut menu, &[Expand, Down, Expand, Down, Down, Expand]);
        assert_eq!(
            response,
            MenuResponse::Select(vec![
                SelectionEvent::SelectLarge("Intro".to_string()),
                SelectionEvent::SelectMedium("Basics".to_string()),
                SelectionEvent::SelectSmall("Step2".to_string()),
            ])
        );
        assert_eq!(menu.rows()[menu.cursor()].depth, 2);
    }

    #[test]
    fn collapse_on_closed_node_moves_to_parent() {
        let mut menu = sample();
        press(&mut menu, &[TreeAction::Expand, TreeAction::Down]);
        assert_eq!(menu.current_row().map(|row| row.label.as_str()), Some("Basics"));

        press(&mut menu, &[TreeAction::Collapse]);
        assert_eq!(menu.current_row().map(|row| row.label.as_str()), Some("Intro"));

        press(&mut menu, &[TreeAction::Collapse]);
        assert_eq!(labels(&menu), ["Intro", "Resources"]);
    }

    #[test]
    fn collapse_keeps_cursor_in_range() {
        let mut menu = sample();
        press(&mut menu, &[TreeAction::Expand, TreeAction::Up, TreeAction::Collapse]);
        assert!(menu.cursor() < menu.rows().len());
    }

    #[test]
    fn reveal_opens_the_path() {
        let mut menu = sample();
        menu.reveal(&SelectionState::new("Intro", Some("Basics"), Some("Step2")));
        assert_eq!(labels(&menu), ["Intro", "Basics", "Step1", "Step2", "Resources"]);
        assert_eq!(menu.current_row().map(|row| row.label.as_str()), Some("Step2"));
    }

    #[test]
    fn reveal_stops_at_unknown_names() {
        let mut menu = sample();
        menu.reveal(&SelectionState::new("Nope", None, None));
        assert_eq!(labels(&menu), ["Intro", "Resources"]);
        assert_eq!(menu.cursor(), 0);

        menu.reveal(&SelectionState::new("Intro", Some("Nope"), None));
        assert_eq!(menu.current_row().map(|row| row.label.as_str()), Some("Intro"));
    }

    #[test]
    fn home_and_quit_pass_through() {
        let mut menu = sample();
        assert_eq!(menu.handle_action(TreeAction::Home), MenuResponse::Home);
        assert_eq!(menu.handle_action(TreeAction::Quit), MenuResponse::Quit);
    }
}
