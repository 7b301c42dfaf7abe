use anyhow::Result;
use promptdeck::domain::services::build_tree;
use promptdeck::presentation::output::TreeOutput;
use promptdeck::DeckError;

use super::CommandEnv;
use crate::ui::views::tree::{render_tree, render_tree_summary};

pub fn cmd_tree(env: &CommandEnv, large: Option<&str>) -> Result<()> {
    let catalog = env.load_catalog()?;
    let full = build_tree(catalog.items());

    let tree = match large {
        Some(name) => full.subtree(name).ok_or_else(|| DeckError::UnknownCategory {
            level: "large",
            name: name.to_string(),
        })?,
        None => full,
    };

    let ui = &env.ui;
    if ui.json {
        let source = env.source_name();
        crate::ui::json::emit(&TreeOutput::new(&source, catalog.len(), &tree))?;
        return Ok(());
    }

    print!("{}", render_tree(&tree, ui.color, ui.unicode));
    if large.is_none() {
        println!();
        println!("{}", render_tree_summary(&tree, catalog.len(), ui.color));
    }
    Ok(())
}
