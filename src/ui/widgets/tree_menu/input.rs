//! Keyboard input handling and interactive loop.
//!
//! This module provides functions for mapping keyboard events to tree actions
//! and running the interactive terminal loop.

use std::io::{self, Write};

use crossterm::event::KeyEvent;
use promptdeck::application::{BrowseSession, View};
use promptdeck::config::DisplayConfig;

use crate::ui::context::UiContext;
use crate::ui::theme::glyphs;
use crate::ui::views::{intro::render_intro, item::render_item};

use super::builder::build_menu_nodes;
use super::menu::{MenuResponse, TreeAction, TreeMenu};

/// Convert a keyboard event to a TreeAction
pub fn key_to_action(key: KeyEvent) -> Option<TreeAction> {
    use crossterm::event::KeyCode;

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(TreeAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(TreeAction::Down),
        KeyCode::Right | KeyCode::Enter | KeyCode::Char('l') => Some(TreeAction::Expand),
        KeyCode::Left | KeyCode::Backspace => Some(TreeAction::Collapse),
        KeyCode::Char('h') | KeyCode::Home => Some(TreeAction::Home),
        KeyCode::Char('q') | KeyCode::Esc => Some(TreeAction::Quit),
        _ => None,
    }
}

/// Apply one action to the session and menu.
///
/// Returns `false` when the user asked to quit.
pub fn dispatch(session: &mut BrowseSession, menu: &mut TreeMenu, action: TreeAction) -> bool {
    if session.view() == View::Intro {
        return match action {
            TreeAction::Quit => false,
            TreeAction::Expand => {
                session.enter();
                menu.reveal(session.selection());
                true
            }
            _ => true,
        };
    }

    match menu.handle_action(action) {
        MenuResponse::Continue => {}
        MenuResponse::Select(events) => {
            for event in events {
                session.select(event);
            }
        }
        MenuResponse::Home => session.leave(),
        MenuResponse::Quit => return false,
    }
    true
}

/// Render the full screen for the session's current view
pub fn render_screen(
    session: &mut BrowseSession,
    menu: &TreeMenu,
    ui: &UiContext,
    display: &DisplayConfig,
    source: &str,
) -> String {
    if session.view() == View::Intro {
        let items = session.catalog().len();
        let categories = session.tree().len();
        return render_intro(source, items, categories, ui.color, ui.unicode);
    }

    let width = usize::from(ui.caps.width);
    let rule = glyphs::RULE.pick(ui.unicode);

    let mut out = menu.render(session.selection(), ui.unicode, width);
    out.push_str(&rule.repeat(width.min(72)));
    out.push('\n');
    out.push_str(&render_item(
        session.resolved(),
        session.selection(),
        display,
        ui.color,
        ui.unicode,
    ));
    out.push_str(&rule.repeat(width.min(72)));
    out.push('\n');
    out.push_str(&menu.help_bar(ui.unicode));
    out.push('\n');
    out
}

/// Run the browse session interactively until the user quits
pub fn run_interactive(
    session: &mut BrowseSession,
    ui: &UiContext,
    display: &DisplayConfig,
    source: &str,
) -> io::Result<()> {
    use crossterm::{cursor, execute, terminal};

    let mut menu = TreeMenu::new(build_menu_nodes(session.tree()));

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, cursor::Hide)?;

    let result = event_loop(&mut stdout, session, &mut menu, ui, display, source);

    // Restore terminal even when the loop failed
    let restored = execute!(
        stdout,
        cursor::Show,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )
    .and_then(|()| terminal::disable_raw_mode());

    result.and(restored)
}

fn event_loop(
    stdout: &mut io::Stdout,
    session: &mut BrowseSession,
    menu: &mut TreeMenu,
    ui: &UiContext,
    display: &DisplayConfig,
    source: &str,
) -> io::Result<()> {
    use crossterm::{
        cursor,
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{self, ClearType},
    };

    loop {
        execute!(stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        let screen = render_screen(session, menu, ui, display, source);
        for line in screen.lines() {
            write!(stdout, "{}\r\n", line)?;
        }
        stdout.flush()?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if let Some(action) = key_to_action(key) {
            if !dispatch(session, menu, action) {
                tracing::debug!("browse session closed");
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::terminal::TerminalCapabilities;
    use crossterm::event::{KeyCode, KeyModifiers};
    use promptdeck::domain::entities::{Catalog, CatalogItem};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn session() -> (BrowseSession, TreeMenu) {
        let catalog = Catalog::new(vec![
            CatalogItem::new("1", "Intro")
                .with_medium("Basics")
                .with_small("Step1")
                .with_prompt("first prompt"),
            CatalogItem::new("2", "Intro")
                .with_medium("Basics")
                .with_small("Step2")
                .with_prompt("second prompt"),
            CatalogItem::new("3", "Resources").with_content("Workbook"),
        ])
        .unwrap();
        let mut session = BrowseSession::new(catalog);
        let menu = TreeMenu::new(build_menu_nodes(session.tree()));
        (session, menu)
    }

    fn ui() -> UiContext {
        UiContext {
            json: false,
            caps: TerminalCapabilities {
                is_tty: true,
                stdin_tty: true,
                supports_color: false,
                supports_unicode: false,
                is_ci: false,
                width: 60,
            },
            color: false,
            unicode: false,
        }
    }

    #[test]
    fn key_to_action_arrow_keys() {
        assert_eq!(key_to_action(key(KeyCode::Up)), Some(TreeAction::Up));
        assert_eq!(key_to_action(key(KeyCode::Down)), Some(TreeAction::Down));
        assert_eq!(key_to_action(key(KeyCode::Left)), Some(TreeAction::Collapse));
        assert_eq!(key_to_action(key(KeyCode::Right)), Some(TreeAction::Expand));
        assert_eq!(key_to_action(key(KeyCode::Enter)), Some(TreeAction::Expand));
    }

    #[test]
    fn key_to_action_home_and_quit() {
        assert_eq!(key_to_action(key(KeyCode::Char('h'))), Some(TreeAction::Home));
        assert_eq!(key_to_action(key(KeyCode::Char('q'))), Some(TreeAction::Quit));
        assert_eq!(key_to_action(key(KeyCode::Esc)), Some(TreeAction::Quit));
    }

    #[test]
    fn key_to_action_unknown_key() {
        assert_eq!(key_to_action(key(KeyCode::Char('z'))), None);
        assert_eq!(key_to_action(key(KeyCode::F(1))), None);
    }

    #[test]
    fn intro_ignores_navigation_until_enter() {
        let (mut session, mut menu) = session();
        assert!(dispatch(&mut session, &mut menu, TreeAction::Down));
        assert_eq!(session.view(), View::Intro);

        assert!(dispatch(&mut session, &mut menu, TreeAction::Expand));
        assert_eq!(session.view(), View::Browse);
        assert_eq!(session.current().map(|i| i.id()), Some("1"));
        // The initial selection is revealed in the menu
        assert_eq!(menu.current_row().map(|row| row.label.as_str()), Some("Step1"));
    }

    #[test]
    fn browsing_updates_selection() {
        let (mut session, mut menu) = session();
        dispatch(&mut session, &mut menu, TreeAction::Expand);
        dispatch(&mut session, &mut menu, TreeAction::Down);
        dispatch(&mut session, &mut menu, TreeAction::Expand);
        assert_eq!(session.current().map(|i| i.id()), Some("2"));

        dispatch(&mut session, &mut menu, TreeAction::Down);
        dispatch(&mut session, &mut menu, TreeAction::Expand);
        assert_eq!(session.current().map(|i| i.id()), Some("3"));
    }

    #[test]
    fn home_returns_to_intro_and_quit_stops() {
        let (mut session, mut menu) = session();
        dispatch(&mut session, &mut menu, TreeAction::Expand);
        assert!(dispatch(&mut session, &mut menu, TreeAction::Home));
        assert_eq!(session.view(), View::Intro);
        assert!(!dispatch(&mut session, &mut menu, TreeAction::Quit));
    }

    #[test]
    fn render_screen_for_each_view() {
        let (mut session, mut menu) = session();
        let display = DisplayConfig::default();

        let intro = render_screen(&mut session, &menu, &ui(), &display, "catalog.toml");
        assert!(intro.contains("[Enter] Start browsing"));

        dispatch(&mut session, &mut menu, TreeAction::Expand);
        let browse = render_screen(&mut session, &menu, &ui(), &display, "catalog.toml");
        assert!(browse.contains("> "), "{browse}");
        assert!(browse.contains("  first prompt"), "{browse}");
        assert!(browse.contains("[h] Home"));
        assert!(browse.contains("[Up/Down] Move"), "{browse}");
        assert!(browse.is_ascii(), "{browse}");
    }
}
