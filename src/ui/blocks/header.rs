//! Title line followed by a block of labelled fields.

use unicode_width::UnicodeWidthStr;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

const FIELD_INDENT: usize = 2;

/// ```text
/// [CATALOG] Prompt Catalog
///       Source: catalog.toml
///   Categories: 4
/// ```
#[derive(Debug, Clone)]
pub struct Heading {
    icon: Icon,
    title: String,
    fields: Vec<(&'static str, String)>,
}

impl Heading {
    pub fn new(icon: Icon, title: impl Into<String>) -> Self {
        Self {
            icon,
            title: title.into(),
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn field(mut self, label: &'static str, value: impl ToString) -> Self {
        self.fields.push((label, value.to_string()));
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let icon = self.icon.colored(supports_color, supports_unicode);
        let title = ColoredText::info(self.title.as_str())
            .bold()
            .render(supports_color);
        let mut out = format!("{icon} {title}\n");

        // Labels are right-aligned so the values line up
        let label_width = self
            .fields
            .iter()
            .map(|(label, _)| label.width())
            .max()
            .unwrap_or(0);

        for (label, value) in &self.fields {
            let pad = FIELD_INDENT + label_width - label.width();
            let label = ColoredText::dim(format!("{label}:")).render(supports_color);
            out.push_str(&" ".repeat(pad));
            out.push_str(&label);
            out.push(' ');
            out.push_str(value);
            out.push('\n');
        }
        out
    }
}
