//! Rendering decisions made once per run.

use crate::ui::terminal::TerminalCapabilities;
use promptdeck::config::{ColorMode, Config};
use promptdeck::presentation::ColorWhen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, cli_color: Option<ColorWhen>, config: &Config) -> Self {
        Self::from_caps(json, cli_color, config, TerminalCapabilities::detect())
    }

    /// `--color auto` defers to the config file, as does leaving it out.
    pub(crate) fn from_caps(
        json: bool,
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let mode = match cli_color {
            Some(ColorWhen::Always) => ColorMode::Always,
            Some(ColorWhen::Never) => ColorMode::Never,
            Some(ColorWhen::Auto) | None => config.output.color,
        };

        Self {
            json,
            caps,
            color: !json && color_enabled(mode, &caps),
            unicode: config.output.unicode && caps.supports_unicode,
        }
    }
}

fn color_enabled(mode: ColorMode, caps: &TerminalCapabilities) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => caps.supports_color && !caps.is_ci,
    }
}
