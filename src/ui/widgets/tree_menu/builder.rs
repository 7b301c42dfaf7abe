//! Tree construction from the navigation tree.

use promptdeck::domain::services::NavigationTree;

use super::node::TreeNode;

/// Build menu nodes for every large category, in catalog order.
///
/// All nodes start collapsed.
pub fn build_menu_nodes(tree: &NavigationTree) -> Vec<TreeNode> {
    tree.larges()
        .iter()
        .map(|large| {
            let mut large_node = TreeNode::large(large.name.as_str());
            for medium in &large.mediums {
                let mut medium_node = TreeNode::child_of(&large_node, medium.name.as_str());
                for small in &medium.smalls {
                    let small_node = TreeNode::child_of(&medium_node, small.as_str());
                    medium_node.add_child(small_node);
                }
                large_node.add_child(medium_node);
            }
            large_node
        })
        .collect()
}
