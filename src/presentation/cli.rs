//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --catalog, --config) are inherited by all subcommands
//! - Without a subcommand the binary browses interactively on a TTY and prints the tree otherwise

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Promptdeck - browse a categorized catalog of prompts
#[derive(Parser, Debug)]
#[command(name = "promptdeck")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'promptdeck' without arguments to browse interactively.")]
pub struct Cli {
    /// Output format for scripts
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Catalog file (.toml, .json, .yaml); overrides config and PROMPTDECK_CATALOG
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Config file to use instead of the project/user config
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Print the category tree
    Tree {
        /// Only print this large category
        #[arg(long)]
        large: Option<String>,
    },

    /// Show the item a selection resolves to (default: the first item)
    Show {
        /// Large category
        #[arg(long)]
        large: Option<String>,

        /// Medium category
        #[arg(long, requires = "large")]
        medium: Option<String>,

        /// Small category
        #[arg(long, requires = "medium")]
        small: Option<String>,

        /// Print only the prompt text
        #[arg(long)]
        raw: bool,
    },

    /// Report catalog data problems (empty categories, duplicate ids)
    Check,

    /// Browse the catalog interactively
    Browse,
}
