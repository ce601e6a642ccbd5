use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::panel::{DISPLAY_NAME, PanelView};
use crate::tui::app::{App, HitTarget, Pane, TagsRegion};
use crate::util::unicode::{display_width, pad_to_width, truncate_to_width};

/// Cells between two chips on the same row
const CHIP_GAP: usize = 2;

/// Place chips of the given widths left to right, wrapping to a new row when
/// the next chip would overflow `width`. Returns `(row, column)` per chip.
pub fn layout_chips(widths: &[usize], width: usize) -> Vec<(usize, usize)> {
    let mut positions = Vec::with_capacity(widths.len());
    let (mut row, mut col) = (0, 0);
    for &w in widths {
        if col > 0 && col + w > width {
            row += 1;
            col = 0;
        }
        positions.push((row, col));
        col += w + CHIP_GAP;
    }
    positions
}

/// Render the tag panel: header, chip rows, and the selected tag's files.
pub fn render_tag_panel(frame: &mut Frame, app: &mut App, area: Rect) {
    if area.height == 0 || area.width < 2 {
        return;
    }
    let bg = app.theme.background;
    let focused = app.pane == Pane::Tags;
    let inner_x = area.x + 1;
    let inner_w = (area.width - 1) as usize;
    let bottom = area.y + area.height;

    let title_style = if focused {
        Style::default()
            .fg(app.theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.text).bg(bg)
    };
    let dim = Style::default().fg(app.theme.dim).bg(bg);
    put(frame, inner_x, area.y, inner_w, bottom, DISPLAY_NAME, title_style);

    let Some(view) = app.panel_view() else {
        put(
            frame,
            inner_x,
            area.y + 1,
            inner_w,
            bottom,
            "Panel closed. Press t to open it.",
            dim,
        );
        return;
    };

    let header = view.document.as_deref().unwrap_or("No active note");
    put(frame, inner_x, area.y + 1, inner_w, bottom, header, dim);

    let chips_top = area.y + 3;
    let chip_rows = render_chips(frame, app, &view, inner_x, chips_top, inner_w, bottom);

    if let Some(list) = &view.files {
        let mut y = chips_top + chip_rows as u16 + 1;
        let summary_style = Style::default().fg(app.theme.text_bright).bg(bg);
        put(frame, inner_x, y, inner_w, bottom, &list.summary(), summary_style);
        y += 1;

        let in_files = focused && app.region == TagsRegion::Files;
        let visible = bottom.saturating_sub(y) as usize;
        let offset = if in_files && visible > 0 && app.file_cursor >= visible {
            app.file_cursor + 1 - visible
        } else {
            0
        };

        for (index, entry) in list.files.iter().enumerate().skip(offset).take(visible) {
            let is_cursor = in_files && index == app.file_cursor;
            let marker = if is_cursor { " \u{25B8} " } else { "   " };
            let mut style = Style::default().fg(app.theme.text).bg(bg);
            if is_cursor {
                style = style.bg(app.theme.selection_bg);
            }
            let text = pad_to_width(&format!("{}{}", marker, entry.label), inner_w);
            put(frame, inner_x, y, inner_w, bottom, &text, style);
            app.hits.push((
                Rect::new(inner_x, y, inner_w as u16, 1),
                HitTarget::File(entry.doc.clone()),
            ));
            y += 1;
        }
    } else if view.document.is_some() && view.chips.is_empty() {
        put(frame, inner_x, chips_top, inner_w, bottom, "No tags", dim);
    }
}

/// Draw the chips and record their hit regions. Returns the rows used.
fn render_chips(
    frame: &mut Frame,
    app: &mut App,
    view: &PanelView,
    x: u16,
    top: u16,
    width: usize,
    bottom: u16,
) -> usize {
    if view.chips.is_empty() {
        return 0;
    }
    let texts: Vec<String> = view
        .chips
        .iter()
        .map(|c| truncate_to_width(&format!("#{}", c.label), width))
        .collect();
    let widths: Vec<usize> = texts.iter().map(|t| display_width(t)).collect();
    let positions = layout_chips(&widths, width);
    let cursor_on_chips = app.pane == Pane::Tags && app.region == TagsRegion::Chips;

    for (i, chip) in view.chips.iter().enumerate() {
        let (row, col) = positions[i];
        let y = top + row as u16;
        if y >= bottom {
            break;
        }
        let mut style = Style::default()
            .fg(app.theme.tag_color(&chip.tag))
            .bg(app.theme.background);
        if chip.selected {
            style = style
                .bg(app.theme.chip_selected_bg)
                .add_modifier(Modifier::BOLD);
        }
        if cursor_on_chips && i == app.chip_cursor {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        let chip_x = x + col as u16;
        put(frame, chip_x, y, widths[i], bottom, &texts[i], style);
        app.hits.push((
            Rect::new(chip_x, y, widths[i] as u16, 1),
            HitTarget::Chip(chip.tag.clone()),
        ));
    }

    positions.last().map_or(0, |(row, _)| row + 1)
}

/// Draw one line of text at (`x`, `y`) if it is above `bottom`.
fn put(frame: &mut Frame, x: u16, y: u16, width: usize, bottom: u16, text: &str, style: Style) {
    if y >= bottom || width == 0 {
        return;
    }
    let text = truncate_to_width(text, width);
    let area = Rect::new(x, y, display_width(&text) as u16, 1);
    frame.render_widget(Paragraph::new(Line::from(Span::styled(text, style))), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::Interaction;
    use crate::tui::render::test_helpers::*;
    use pretty_assertions::assert_eq;

    fn render_panel(app: &mut App, w: u16, h: u16) -> String {
        render_to_string(w, h, |frame, area| {
            render_tag_panel(frame, app, area);
        })
    }

    #[test]
    fn test_layout_chips_wraps() {
        // "#alpha"=6, "#beta"=5, "#gamma"=6 in 14 cells
        assert_eq!(
            layout_chips(&[6, 5, 6], 14),
            vec![(0, 0), (0, 8), (1, 0)]
        );
        // A chip wider than the row still gets its own row
        assert_eq!(layout_chips(&[20, 3], 10), vec![(0, 0), (1, 0)]);
        assert!(layout_chips(&[], 10).is_empty());
    }

    #[test]
    fn test_no_active_note() {
        let mut app = app_with_notes(&[("a.md", "#alpha")]);
        assert_eq!(
            render_panel(&mut app, 40, 8),
            " Current file tags\n No active note"
        );
    }

    #[test]
    fn test_untagged_note() {
        let mut app = app_with_notes(&[("plain.md", "just text")]);
        app.open_note_at_cursor();
        assert_eq!(
            render_panel(&mut app, 40, 8),
            " Current file tags\n plain.md\n\n No tags"
        );
    }

    #[test]
    fn test_selected_tag_lists_files() {
        let mut app = app_with_notes(&[("a.md", "#alpha #beta"), ("notes/b.md", "#beta")]);
        app.open_note_at_cursor();
        app.interact(Interaction::Tag {
            tag: "#beta".into(),
            activation: crate::panel::Activation::Plain,
        });
        assert_eq!(
            render_panel(&mut app, 40, 10),
            " Current file tags\n a.md\n\n #alpha  #beta\n\n #beta is in 2 file(s).\n    notes/b.md\n    a.md"
        );
    }

    #[test]
    fn test_long_paths_are_shortened() {
        let mut app = app_with_notes(&[
            ("projects/2024/quarterly/review.md", "#review"),
            ("r.md", "#review"),
        ]);
        app.explorer_cursor = 1;
        app.open_note_at_cursor();
        app.interact(Interaction::Tag {
            tag: "#review".into(),
            activation: crate::panel::Activation::Plain,
        });
        let output = render_panel(&mut app, 40, 10);
        assert!(output.contains("    ...2024/quarterly/review.md"));
        assert!(output.contains("    r.md"));
    }

    #[test]
    fn test_closed_panel() {
        let mut app = app_with_notes(&[]);
        app.close_panel();
        assert_eq!(
            render_panel(&mut app, 40, 4),
            " Current file tags\n Panel closed. Press t to open it."
        );
    }
}
