use crate::ui::blocks::header::Heading;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Landing screen shown before browsing starts
pub fn render_intro(
    source: &str,
    items: usize,
    categories: usize,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = Heading::new(Icon::Catalog, "Prompt Catalog")
        .field("Source", source)
        .field("Items", items)
        .field("Categories", categories)
        .render(supports_color, supports_unicode);
    out.push('\n');
    out.push_str("Browse prompts by category, read what each one does,\n");
    out.push_str("and copy the prompt text into your assistant.\n");
    out.push('\n');
    out.push_str(
        &ColoredText::info("[Enter] Start browsing    [q] Quit")
            .bold()
            .render(supports_color),
    );
    out.push('\n');
    out
}
