use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::App;

pub(super) fn handle_explorer_key(app: &mut App, key: KeyEvent) {
    let len = app.vault.len();
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => {
            if app.explorer_cursor + 1 < len {
                app.explorer_cursor += 1;
                app.needs_redraw = true;
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            if app.explorer_cursor > 0 {
                app.explorer_cursor -= 1;
                app.needs_redraw = true;
            }
        }
        KeyCode::Char('g') | KeyCode::Home => {
            app.explorer_cursor = 0;
            app.needs_redraw = true;
        }
        KeyCode::Char('G') | KeyCode::End => {
            app.explorer_cursor = len.saturating_sub(1);
            app.needs_redraw = true;
        }
        KeyCode::Enter | KeyCode::Char('o') => app.open_note_at_cursor(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::app_with_notes;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        handle_explorer_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut app = app_with_notes(&[("a.md", ""), ("b.md", "")]);
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.explorer_cursor, 0);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.explorer_cursor, 1);
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.explorer_cursor, 0);
        press(&mut app, KeyCode::Char('G'));
        assert_eq!(app.explorer_cursor, 1);
    }

    #[test]
    fn test_enter_on_empty_vault_does_nothing() {
        let mut app = app_with_notes(&[]);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.panel_view().unwrap().document, None);
        assert_eq!(app.status, None);
    }
}
