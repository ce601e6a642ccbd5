mod explorer;
mod mouse;
mod tags;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Pane};

pub use mouse::{activation_for, handle_mouse};

/// Handle a key event
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Help overlay intercepts all input
    if app.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            app.show_help = false;
            app.needs_redraw = true;
        }
        return;
    }

    match (key.modifiers, key.code) {
        (_, KeyCode::Char('q')) | (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            app.should_quit = true;
            return;
        }
        (_, KeyCode::Char('?')) => {
            app.show_help = true;
            app.needs_redraw = true;
            return;
        }
        (_, KeyCode::Tab) | (_, KeyCode::BackTab) => {
            let next = match app.pane {
                Pane::Explorer if app.panel.is_some() => Pane::Tags,
                _ => Pane::Explorer,
            };
            app.set_pane(next);
            return;
        }
        (_, KeyCode::Char('t')) => {
            app.reveal_panel();
            return;
        }
        (_, KeyCode::Char('x')) => {
            app.close_panel();
            return;
        }
        _ => {}
    }

    match app.pane {
        Pane::Explorer => explorer::handle_explorer_key(app, key),
        Pane::Tags => tags::handle_tags_key(app, key),
    }
}
