//! Promptdeck CLI - browse a categorized catalog of prompts
//!
//! Usage: promptdeck [COMMAND]
//!
//! Commands:
//!   tree    Print the category tree
//!   show    Show the item a selection resolves to
//!   check   Report catalog data problems
//!   browse  Browse the catalog interactively

use anyhow::Result;
use clap::Parser;

mod commands;
mod logging;
mod ui;

use commands::{CommandEnv, ShowArgs};
use promptdeck::presentation::{Cli, ColorWhen, Commands};

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    let log_color = match cli.color {
        Some(ColorWhen::Always) => true,
        Some(ColorWhen::Never) => false,
        _ => ui::terminal::stderr_supports_color(),
    };
    logging::init(cli.verbose, log_color);

    let command = cli.command.take();
    let env = CommandEnv::from_cli(&cli)?;

    match command {
        Some(Commands::Tree { large }) => commands::cmd_tree(&env, large.as_deref()),
        Some(Commands::Show {
            large,
            medium,
            small,
            raw,
        }) => commands::cmd_show(
            &env,
            ShowArgs {
                large,
                medium,
                small,
                raw,
            },
        ),
        Some(Commands::Check) => commands::cmd_check(&env),
        Some(Commands::Browse) => commands::cmd_browse(&env),
        None => {
            if env.ui.caps.is_interactive() && !env.ui.json {
                commands::cmd_browse(&env)
            } else {
                commands::cmd_tree(&env, None)
            }
        }
    }
}
