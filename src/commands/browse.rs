use anyhow::Result;
use promptdeck::application::BrowseSession;

use super::CommandEnv;
use crate::ui::widgets::tree_menu::run_interactive;

pub fn cmd_browse(env: &CommandEnv) -> Result<()> {
    let catalog = env.load_catalog()?;
    if !env.ui.caps.is_interactive() {
        anyhow::bail!(
            "browse needs an interactive terminal; use `promptdeck tree` or `promptdeck show`"
        );
    }

    let mut session = BrowseSession::new(catalog);
    run_interactive(&mut session, &env.ui, &env.config.display, &env.source_name())?;
    Ok(())
}
