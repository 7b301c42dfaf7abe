//! Tracing subscriber setup for the binary.
//!
//! Logs go to stderr so stdout stays clean for `--json` and `show --raw`.
//!
//! Filter priority (highest to lowest):
//! 1. `PROMPTDECK_LOG`
//! 2. `RUST_LOG`
//! 3. `-v` count (0 warn, 1 info, 2 debug, 3+ trace)

use tracing::Level;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Map the `-v` count to a default level.
pub fn level_for_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(verbose: u8, color: bool) {
    let filter = build_env_filter(verbose, |key| std::env::var(key).ok());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(color)
        .with_target(verbose >= 2)
        .without_time()
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn build_env_filter(verbose: u8, get_env: impl Fn(&str) -> Option<String>) -> EnvFilter {
    // Unparseable directives fall through to the next source
    for key in ["PROMPTDECK_LOG", "RUST_LOG"] {
        if let Some(directives) = get_env(key).filter(|d| !d.trim().is_empty()) {
            if let Ok(filter) = EnvFilter::try_new(&directives) {
                return filter;
            }
        }
    }

    EnvFilter::new(level_for_verbosity(verbose).as_str())
}
