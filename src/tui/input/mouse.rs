use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::panel::{Activation, Interaction};
use crate::tui::app::{App, HitTarget, Pane};

/// Ctrl, Alt or Super held during a click asks for a host search
pub fn activation_for(modifiers: KeyModifiers) -> Activation {
    if modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) {
        Activation::Modified
    } else {
        Activation::Plain
    }
}

/// Handle a mouse press against the regions recorded by the last render
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.show_help || mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let Some(target) = app.hit_test(mouse.column, mouse.row).cloned() else {
        return;
    };

    match target {
        HitTarget::Note(index) => {
            app.set_pane(Pane::Explorer);
            app.explorer_cursor = index;
            app.open_note_at_cursor();
        }
        HitTarget::Chip(tag) => {
            app.set_pane(Pane::Tags);
            if let Some(view) = app.panel_view()
                && let Some(pos) = view.chips.iter().position(|c| c.tag == tag)
            {
                app.chip_cursor = pos;
            }
            app.interact(Interaction::Tag {
                tag,
                activation: activation_for(mouse.modifiers),
            });
        }
        HitTarget::File(doc) => {
            app.set_pane(Pane::Tags);
            app.status = Some(format!("opened {}", doc.path));
            app.interact(Interaction::OpenFile(doc));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::app_with_notes;
    use ratatui::layout::Rect;

    fn click(app: &mut App, column: u16, row: u16, modifiers: KeyModifiers) {
        handle_mouse(
            app,
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                modifiers,
            },
        );
    }

    #[test]
    fn test_activation_for_modifiers() {
        assert_eq!(activation_for(KeyModifiers::NONE), Activation::Plain);
        assert_eq!(activation_for(KeyModifiers::SHIFT), Activation::Plain);
        assert_eq!(activation_for(KeyModifiers::CONTROL), Activation::Modified);
        assert_eq!(activation_for(KeyModifiers::ALT), Activation::Modified);
        assert_eq!(activation_for(KeyModifiers::SUPER), Activation::Modified);
    }

    #[test]
    fn test_click_on_chip() {
        let mut app = app_with_notes(&[("a.md", "#alpha")]);
        app.open_note_at_cursor();
        app.hits = vec![(Rect::new(10, 2, 6, 1), HitTarget::Chip("#alpha".into()))];

        click(&mut app, 12, 2, KeyModifiers::CONTROL);
        assert_eq!(app.panel.as_ref().unwrap().state().selected_tag(), None);
        assert_eq!(app.search.last_uri(), Some("obsidian://search?query=tag:alpha"));

        click(&mut app, 12, 2, KeyModifiers::NONE);
        assert_eq!(
            app.panel.as_ref().unwrap().state().selected_tag(),
            Some("#alpha")
        );
        assert_eq!(app.pane, Pane::Tags);
    }

    #[test]
    fn test_click_outside_any_target() {
        let mut app = app_with_notes(&[("a.md", "#alpha")]);
        app.hits = vec![(Rect::new(0, 0, 5, 1), HitTarget::Note(0))];
        click(&mut app, 7, 0, KeyModifiers::NONE);
        assert_eq!(app.panel_view().unwrap().document, None);
        click(&mut app, 2, 0, KeyModifiers::NONE);
        assert_eq!(app.panel_view().unwrap().document.as_deref(), Some("a.md"));
    }
}
