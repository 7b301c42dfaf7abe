use promptdeck::domain::services::NavigationTree;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Render the whole navigation tree as indented text, in catalog order.
pub fn render_tree(tree: &NavigationTree, supports_color: bool, supports_unicode: bool) -> String {
    let arrow = Icon::Arrow.colored(supports_color, supports_unicode);
    let leaf = Icon::Leaf.colored(supports_color, supports_unicode);

    let mut out = String::new();
    for large in tree.larges() {
        out.push_str(&ColoredText::plain(large.name.as_str()).bold().render(supports_color));
        out.push('\n');
        for medium in &large.mediums {
            out.push_str(&format!("  {} {}\n", arrow, medium.name));
            for small in &medium.smalls {
                out.push_str(&format!("      {} {}\n", leaf, small));
            }
        }
    }
    out
}

pub fn render_tree_summary(tree: &NavigationTree, items: usize, supports_color: bool) -> String {
    let mediums: usize = tree.larges().iter().map(|l| l.mediums.len()).sum();
    ColoredText::dim(format!(
        "{} items in {} categories ({} subcategories)",
        items,
        tree.len(),
        mediums
    ))
    .render(supports_color)
}
