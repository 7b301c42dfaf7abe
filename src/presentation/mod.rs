//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - The JSON payloads printed by `--json`
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `output` - Serializable command results

pub mod cli;
pub mod output;

pub use cli::{Cli, ColorWhen, Commands};
