use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::host::FocusManager;
use crate::tui::app::{App, HitTarget, Pane};
use crate::util::unicode::{pad_to_width, truncate_to_width};

/// Render the note explorer: a header row, then one row per note.
pub fn render_explorer(frame: &mut Frame, app: &mut App, area: Rect) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    let bg = app.theme.background;
    let focused = app.pane == Pane::Explorer;
    let notes = app.notes();
    let active = app.vault.active_document();

    let title_style = if focused {
        Style::default()
            .fg(app.theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.text).bg(bg)
    };
    let mut lines = vec![Line::from(Span::styled(
        format!(" Notes ({})", notes.len()),
        title_style,
    ))];

    // Keep the cursor on screen
    let visible = area.height.saturating_sub(1) as usize;
    if app.explorer_cursor < app.explorer_scroll {
        app.explorer_scroll = app.explorer_cursor;
    } else if visible > 0 && app.explorer_cursor >= app.explorer_scroll + visible {
        app.explorer_scroll = app.explorer_cursor + 1 - visible;
    }

    let width = area.width as usize;
    for (row, (index, doc)) in notes
        .iter()
        .enumerate()
        .skip(app.explorer_scroll)
        .take(visible)
        .enumerate()
    {
        let is_cursor = index == app.explorer_cursor;
        let is_active = active.as_ref() == Some(doc);
        let marker = if is_active { " \u{25CF} " } else { "   " };
        let text = format!("{}{}", marker, doc.path);
        let text = pad_to_width(&truncate_to_width(&text, width), width);

        let mut style = Style::default().fg(app.theme.text).bg(bg);
        if is_active {
            style = style.fg(app.theme.text_bright);
        }
        if is_cursor && focused {
            style = style.bg(app.theme.selection_bg);
        }
        lines.push(Line::from(Span::styled(text, style)));

        let y = area.y + 1 + row as u16;
        app.hits
            .push((Rect::new(area.x, y, area.width, 1), HitTarget::Note(index)));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
