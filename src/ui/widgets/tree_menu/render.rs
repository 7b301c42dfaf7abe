//! Terminal rendering functions for tree menu.
//!
//! This module provides functions to render tree nodes and help text to
//! strings for terminal output.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ui::primitives::icon::Icon;
use crate::ui::theme::glyphs;

use super::menu::Row;

/// Render a single tree node to a string, cut to `width` columns
pub fn render_tree_node(
    node: &Row,
    is_active: bool,
    is_selected: bool,
    supports_unicode: bool,
    width: usize,
) -> String {
    let indent = "  ".repeat(node.depth);
    let cursor = if is_active { "> " } else { "  " };

    let expand_icon = match (node.has_children, node.expanded) {
        (true, true) => Icon::Expanded,
        (true, false) => Icon::Collapsed,
        (false, _) => Icon::Leaf,
    }
    .render(supports_unicode);

    let current = if is_selected {
        format!(" {}", Icon::Current.render(supports_unicode))
    } else {
        String::new()
    };

    let line = format!("{}{}{} {}{}", cursor, indent, expand_icon, node.label, current);
    truncate_to_width(&line, width, supports_unicode)
}

/// Cut `text` to at most `width` display columns, marking the cut.
pub fn truncate_to_width(text: &str, width: usize, supports_unicode: bool) -> String {
    if text.width() <= width {
        return text.to_string();
    }

    let ellipsis = glyphs::ELLIPSIS.pick(supports_unicode);
    let budget = width.saturating_sub(ellipsis.width());

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(ellipsis);
    out
}

/// Render the help bar showing keyboard shortcuts
pub fn render_help_bar(supports_unicode: bool) -> String {
    format!(
        "[{}] Move    [{}/Enter] Open    [{}] Close    [h] Home    [q] Quit",
        glyphs::KEY_MOVE.pick(supports_unicode),
        glyphs::KEY_OPEN.pick(supports_unicode),
        glyphs::KEY_CLOSE.pick(supports_unicode),
    )
}
