//! Subcommand implementations
//!
//! Each command loads what it needs through [`CommandEnv`] and prints via
//! the `ui` renderers, or one JSON document with `--json`.

mod browse;
mod check;
mod env;
mod show;
mod tree;

pub use browse::cmd_browse;
pub use check::cmd_check;
pub use env::CommandEnv;
pub use show::{cmd_show, ShowArgs};
pub use tree::cmd_tree;
