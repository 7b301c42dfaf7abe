//! Content pane: the item a selection resolves to.

use promptdeck::config::DisplayConfig;
use promptdeck::domain::services::{MatchKind, Resolved};
use promptdeck::domain::value_objects::SelectionState;

use crate::ui::blocks::header::Heading;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme::glyphs;

pub fn render_breadcrumb(selection: &SelectionState, supports_unicode: bool) -> String {
    let separator = glyphs::BREADCRUMB.pick(supports_unicode);
    let crumbs = selection.breadcrumb();
    if crumbs.is_empty() {
        "Select Category".to_string()
    } else {
        crumbs.join(separator)
    }
}

pub fn render_item(
    resolved: Option<Resolved<'_>>,
    selection: &SelectionState,
    display: &DisplayConfig,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let Some(resolved) = resolved else {
        let mut out = format!("{}\n\n", render_breadcrumb(selection, supports_unicode));
        let message = ColoredText::dim(display.empty_state_message.as_str());
        out.push_str(&message.render(supports_color));
        out.push('\n');
        return out;
    };

    let item = resolved.item;
    let is_resource = display.is_resource_category(item.large_category());

    let match_label = match resolved.kind {
        MatchKind::Fallback => "fallback (first item in category)",
        kind => kind.as_str(),
    };
    let mut out = Heading::new(Icon::Prompt, render_breadcrumb(selection, supports_unicode))
        .field("Item", item.id())
        .field("Match", match_label)
        .render(supports_color, supports_unicode);
    out.push('\n');

    out.push_str(&section_title("Content", supports_color));
    let content = if item.content().is_empty() {
        display.empty_content_placeholder.as_str()
    } else {
        item.content()
    };
    push_indented(&mut out, content);
    out.push('\n');

    if is_resource {
        out.push_str(&section_title("Links", supports_color));
        if item.links().is_empty() {
            out.push_str(&format!(
                "  {}\n",
                ColoredText::dim("No links.").render(supports_color)
            ));
        }
        for link in item.links() {
            out.push_str(&format!(
                "  {} {}: {}\n",
                Icon::Link.colored(supports_color, supports_unicode),
                link.label,
                link.url
            ));
        }
    } else {
        out.push_str(&section_title("Prompt", supports_color));
        push_indented(&mut out, item.prompt());
    }

    let hint = if is_resource {
        "Open the links above to download resources"
    } else {
        "Run `promptdeck show --raw` to copy this prompt"
    };
    out.push('\n');
    out.push_str(&ColoredText::dim(hint).render(supports_color));
    out.push('\n');
    out
}

fn section_title(title: &str, supports_color: bool) -> String {
    format!("{}\n", ColoredText::info(title).bold().render(supports_color))
}

fn push_indented(out: &mut String, text: &str) {
    for line in text.lines() {
        if line.is_empty() {
            out.push('\n');
        } else {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
    }
    if text.is_empty() {
        out.push('\n');
    }
}
