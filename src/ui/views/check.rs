use promptdeck::application::CheckResult;

use crate::ui::blocks::header::Heading;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_check_header(source: &str, supports_color: bool, supports_unicode: bool) -> String {
    Heading::new(Icon::Catalog, "Catalog Check")
        .field("Source", source)
        .render(supports_color, supports_unicode)
}

pub fn render_check_report(
    result: &CheckResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();

    for issue in &result.issues {
        out.push_str(&format!(
            "  {} {} {}\n",
            Icon::Warning.colored(supports_color, supports_unicode),
            issue,
            ColoredText::dim(format!("[{}]", issue.code())).render(supports_color)
        ));
    }

    if !result.issues.is_empty() {
        out.push('\n');
    }

    let summary = if result.is_clean() {
        format!(
            "{} {}",
            Icon::Success.colored(supports_color, supports_unicode),
            ColoredText::success(format!("{} items, no issues", result.items))
                .bold()
                .render(supports_color)
        )
    } else {
        format!(
            "{} {}",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error(format!(
                "{} items, {} issue(s)",
                result.items,
                result.issues.len()
            ))
            .bold()
            .render(supports_color)
        )
    };
    out.push_str(&summary);
    out.push('\n');
    out
}
