use anyhow::Result;
use promptdeck::domain::services::{initial_selection, resolve_with_match};
use promptdeck::domain::value_objects::{SelectionEvent, SelectionState};
use promptdeck::presentation::output::ItemOutput;

use super::CommandEnv;
use crate::ui::views::item::render_item;

pub struct ShowArgs {
    pub large: Option<String>,
    pub medium: Option<String>,
    pub small: Option<String>,
    pub raw: bool,
}

pub fn cmd_show(env: &CommandEnv, args: ShowArgs) -> Result<()> {
    let catalog = env.load_catalog()?;
    let selection = match args.large {
        None => initial_selection(&catalog),
        Some(large) => selection_from_flags(large, args.medium, args.small),
    };
    let resolved = resolve_with_match(catalog.items(), &selection);
    let ui = &env.ui;
    let display = &env.config.display;

    if ui.json {
        crate::ui::json::emit(&ItemOutput::new(&selection, resolved, display))?;
        return Ok(());
    }

    if args.raw {
        // stdout carries only the prompt so it can be piped
        match resolved {
            Some(resolved) => println!("{}", resolved.item.prompt()),
            None => eprintln!("{}", display.empty_state_message),
        }
        return Ok(());
    }

    print!("{}", render_item(resolved, &selection, display, ui.color, ui.unicode));
    Ok(())
}

/// Replay the flags as menu events so partial paths clear deeper levels.
fn selection_from_flags(
    large: String,
    medium: Option<String>,
    small: Option<String>,
) -> SelectionState {
    let events = std::iter::once(SelectionEvent::SelectLarge(large))
        .chain(medium.map(SelectionEvent::SelectMedium))
        .chain(small.map(SelectionEvent::SelectSmall));
    events.fold(SelectionState::default(), SelectionState::apply)
}
