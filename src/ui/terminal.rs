//! Terminal capability detection.
//!
//! Capabilities are detected once at start-up. The decision logic takes the
//! observed stream state and an environment lookup as arguments, so tests never read
//! the real process environment.

use std::io;

use is_terminal::IsTerminal;

/// Variables whose presence means we run under CI
const CI_MARKERS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "BUILDKITE",
    "CIRCLECI",
    "JENKINS_HOME",
    "TEAMCITY_VERSION",
];

/// Locale variables in lookup order
const LOCALE_VARS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];

const FALLBACK_WIDTH: u16 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    /// stdout is a terminal
    pub is_tty: bool,
    /// stdin is a terminal, so key events can be read
    pub stdin_tty: bool,
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
    /// Columns, 80 when unknown
    pub width: u16,
}

/// What the process can observe about its streams
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Streams {
    pub stdout_tty: bool,
    pub stdin_tty: bool,
    pub width: Option<u16>,
}

impl TerminalCapabilities {
    pub fn detect() -> Self {
        let streams = Streams {
            stdout_tty: io::stdout().is_terminal(),
            stdin_tty: io::stdin().is_terminal(),
            width: crossterm::terminal::size().ok().map(|(columns, _)| columns),
        };
        Self::from_streams(streams, |key| std::env::var(key).ok())
    }

    pub(crate) fn from_streams(streams: Streams, env: impl Fn(&str) -> Option<String>) -> Self {
        let dumb = env("TERM").is_some_and(|term| term.eq_ignore_ascii_case("dumb"));
        let no_color = no_color_requested(&env);

        Self {
            is_tty: streams.stdout_tty,
            stdin_tty: streams.stdin_tty,
            supports_color: streams.stdout_tty && !dumb && !no_color,
            supports_unicode: !dumb && locale_is_utf8(&env).unwrap_or(true),
            is_ci: CI_MARKERS.iter().any(|key| env(key).is_some()),
            width: streams.width.unwrap_or(FALLBACK_WIDTH),
        }
    }

    /// The browse loop needs both ends on a terminal and a human at the keys.
    pub fn is_interactive(&self) -> bool {
        self.is_tty && self.stdin_tty && !self.is_ci
    }
}

/// Whether stderr can carry colored log lines
pub fn stderr_supports_color() -> bool {
    io::stderr().is_terminal() && !no_color_requested(|key| std::env::var(key).ok())
}

/// NO_COLOR counts only when set to a non-empty value
pub(crate) fn no_color_requested(env: impl Fn(&str) -> Option<String>) -> bool {
    env("NO_COLOR").is_some_and(|value| !value.is_empty())
}

/// `None` when no locale variable is set
fn locale_is_utf8(env: &impl Fn(&str) -> Option<String>) -> Option<bool> {
    let locale = LOCALE_VARS
        .iter()
        .find_map(|key| env(key).filter(|value| !value.is_empty()))?;
    let locale = locale.to_ascii_lowercase();
    Some(locale.contains("utf-8") || locale.contains("utf8"))
}
