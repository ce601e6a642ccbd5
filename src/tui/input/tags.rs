use crossterm::event::{KeyCode, KeyEvent};

use crate::panel::{Activation, Interaction};
use crate::tui::app::{App, TagsRegion};

pub(super) fn handle_tags_key(app: &mut App, key: KeyEvent) {
    let Some(view) = app.panel_view() else {
        return;
    };
    let file_count = view.files.as_ref().map_or(0, |f| f.files.len());

    if key.code == KeyCode::Esc {
        app.region = TagsRegion::Chips;
        app.interact(Interaction::ClearSelection);
        return;
    }

    match app.region {
        TagsRegion::Chips => match key.code {
            KeyCode::Right | KeyCode::Char('l') => {
                if app.chip_cursor + 1 < view.chips.len() {
                    app.chip_cursor += 1;
                    app.needs_redraw = true;
                }
            }
            KeyCode::Left | KeyCode::Char('h') => {
                if app.chip_cursor > 0 {
                    app.chip_cursor -= 1;
                    app.needs_redraw = true;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('s') => {
                let Some(chip) = view.chips.get(app.chip_cursor) else {
                    return;
                };
                let activation = if key.code == KeyCode::Char('s') {
                    Activation::Modified
                } else {
                    Activation::Plain
                };
                app.interact(Interaction::Tag {
                    tag: chip.tag.clone(),
                    activation,
                });
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if file_count > 0 {
                    app.region = TagsRegion::Files;
                    app.file_cursor = 0;
                    app.needs_redraw = true;
                }
            }
            _ => {}
        },
        TagsRegion::Files => match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                if app.file_cursor + 1 < file_count {
                    app.file_cursor += 1;
                    app.needs_redraw = true;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if app.file_cursor == 0 {
                    app.region = TagsRegion::Chips;
                } else {
                    app.file_cursor -= 1;
                }
                app.needs_redraw = true;
            }
            KeyCode::Enter | KeyCode::Char('o') => {
                let entry = view
                    .files
                    .as_ref()
                    .and_then(|f| f.files.get(app.file_cursor));
                if let Some(entry) = entry {
                    app.status = Some(format!("opened {}", entry.doc.path));
                    app.interact(Interaction::OpenFile(entry.doc.clone()));
                }
            }
            _ => {}
        },
    }
}
