use std::io::Write;

use anyhow::Result;
use promptdeck::application::CheckUseCase;
use promptdeck::presentation::output::CheckOutput;
use promptdeck::DeckError;

use super::CommandEnv;
use crate::ui::views::check::{render_check_header, render_check_report};

/// Exits with status 1 when the catalog has issues.
pub fn cmd_check(env: &CommandEnv) -> Result<()> {
    let ui = &env.ui;

    if !ui.json {
        print!("{}", render_check_header(&env.source_name(), ui.color, ui.unicode));
    }

    let use_case = CheckUseCase::new(&env.source);
    let result = use_case.execute().map_err(DeckError::from)?;

    if ui.json {
        crate::ui::json::emit(&CheckOutput::new(&result))?;
    } else {
        println!();
        print!("{}", render_check_report(&result, ui.color, ui.unicode));
    }

    if !result.is_clean() {
        std::io::stdout().flush()?;
        std::process::exit(1);
    }
    Ok(())
}
