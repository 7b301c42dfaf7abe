use crossterm::style::{Attribute, Color, ContentStyle};

use crate::ui::theme::colors;

/// Text with an optional theme color and weight, rendered on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    color: Option<Color>,
    bold: bool,
}

impl ColoredText {
    fn styled(text: impl Into<String>, color: Option<Color>) -> Self {
        Self {
            text: text.into(),
            color,
            bold: false,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, None)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::styled(text, Some(colors::SUCCESS))
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::styled(text, Some(colors::ERROR))
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::styled(text, Some(colors::INFO))
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::styled(text, Some(colors::DIM))
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn render(&self, supports_color: bool) -> String {
        if !supports_color || (self.color.is_none() && !self.bold) {
            return self.text.clone();
        }

        let mut style = ContentStyle::new();
        style.foreground_color = self.color;
        if self.bold {
            style.attributes.set(Attribute::Bold);
        }
        style.apply(self.text.as_str()).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_color_means_raw_text() {
        assert_eq!(ColoredText::success("ok").bold().render(false), "ok");
    }

    #[test]
    fn color_adds_escapes_around_text() {
        let rendered = ColoredText::error("no").render(true);
        assert!(rendered.starts_with("\u{1b}["), "{rendered:?}");
        assert!(rendered.contains("no"));
    }

    #[test]
    fn plain_stays_plain() {
        assert_eq!(ColoredText::plain("x").render(true), "x");
    }
}
