use crossterm::style::{Color, Stylize};

use crate::ui::theme::{colors, glyphs, Glyph};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
    Expanded,
    Collapsed,
    Leaf,
    Current,
    Catalog,
    Prompt,
    Link,
}

impl Icon {
    fn style(self) -> (Glyph, Color) {
        match self {
            Icon::Success => (glyphs::SUCCESS, colors::SUCCESS),
            Icon::Error => (glyphs::ERROR, colors::ERROR),
            Icon::Warning => (glyphs::WARNING, colors::WARNING),
            Icon::Current => (glyphs::CURRENT, colors::WARNING),
            Icon::Arrow => (glyphs::ARROW, colors::DIM),
            Icon::Expanded => (glyphs::EXPANDED, colors::DIM),
            Icon::Collapsed => (glyphs::COLLAPSED, colors::DIM),
            Icon::Leaf => (glyphs::LEAF, colors::DIM),
            Icon::Catalog => (glyphs::CATALOG, colors::INFO),
            Icon::Prompt => (glyphs::PROMPT, colors::INFO),
            Icon::Link => (glyphs::LINK, colors::INFO),
        }
    }

    pub fn render(self, supports_unicode: bool) -> &'static str {
        self.style().0.pick(supports_unicode)
    }

    pub fn colored(self, supports_color: bool, supports_unicode: bool) -> String {
        let (glyph, color) = self.style();
        let symbol = glyph.pick(supports_unicode);
        if supports_color {
            symbol.with(color).to_string()
        } else {
            symbol.to_string()
        }
    }
}
