//! Colors and symbols for the terminal UI. Everything drawn comes from here.

use crossterm::style::Color;

pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

/// A symbol and the text used when the terminal can't show it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub unicode: &'static str,
    pub ascii: &'static str,
}

impl Glyph {
    const fn new(unicode: &'static str, ascii: &'static str) -> Self {
        Self { unicode, ascii }
    }

    pub const fn pick(self, supports_unicode: bool) -> &'static str {
        if supports_unicode {
            self.unicode
        } else {
            self.ascii
        }
    }
}

pub mod glyphs {
    use super::Glyph;

    pub const SUCCESS: Glyph = Glyph::new("✓", "[OK]");
    pub const ERROR: Glyph = Glyph::new("✗", "[FAIL]");
    pub const WARNING: Glyph = Glyph::new("⚠", "[WARN]");
    pub const ARROW: Glyph = Glyph::new("↳", "->");

    // Tree nodes
    pub const EXPANDED: Glyph = Glyph::new("▼", "[v]");
    pub const COLLAPSED: Glyph = Glyph::new("▶", "[>]");
    pub const LEAF: Glyph = Glyph::new("•", "-");
    pub const CURRENT: Glyph = Glyph::new("●", "*");

    pub const CATALOG: Glyph = Glyph::new("📚", "[CATALOG]");
    pub const PROMPT: Glyph = Glyph::new("📋", "[PROMPT]");
    pub const LINK: Glyph = Glyph::new("🔗", "[LINK]");

    // Help bar keys
    pub const KEY_MOVE: Glyph = Glyph::new("↑↓", "Up/Down");
    pub const KEY_OPEN: Glyph = Glyph::new("→", "Right");
    pub const KEY_CLOSE: Glyph = Glyph::new("←", "Left");

    pub const ELLIPSIS: Glyph = Glyph::new("…", "...");
    pub const RULE: Glyph = Glyph::new("─", "-");
    pub const BREADCRUMB: Glyph = Glyph::new(" › ", " > ");
}
