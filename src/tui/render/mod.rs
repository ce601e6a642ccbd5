pub mod explorer;
pub mod help_overlay;
pub mod status_row;
pub mod tag_panel;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use super::app::App;

/// Main render function: dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    app.hits.clear();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (1 row) | content | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(1),    // content area
            Constraint::Length(1), // status row
        ])
        .split(area);

    render_header(frame, app, chunks[0]);

    // Content: explorer | separator | tag panel
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(chunks[1]);

    explorer::render_explorer(frame, app, columns[0]);
    render_separator(frame, app, columns[1]);
    tag_panel::render_tag_panel(frame, app, columns[2]);

    status_row::render_status_row(frame, app, chunks[2]);

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let vault_name = app
        .root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| app.root.display().to_string());
    let line = Line::from(vec![
        Span::styled(" # ", Style::default().fg(app.theme.highlight).bg(bg)),
        Span::styled(
            "ftags",
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", vault_name), Style::default().fg(app.theme.dim).bg(bg)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_separator(frame: &mut Frame, app: &App, area: Rect) {
    let style = Style::default().fg(app.theme.border).bg(app.theme.background);
    let lines: Vec<Line> = (0..area.height)
        .map(|_| Line::from(Span::styled("\u{2502}", style)))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
    use super::test_helpers::*;
    use super::*;
    use crate::tui::app::HitTarget;

    #[test]
    fn test_full_screen_layout() {
        let mut app = app_with_notes(&[("a.md", "#alpha #beta"), ("b.md", "#beta")]);
        app.open_note_at_cursor();
        let output = render_to_string(TERM_W, TERM_H, |frame, _area| {
            render(frame, &mut app);
        });
        let first = output.lines().next().unwrap();
        assert_eq!(first, " # ftags  test-vault");
        assert!(output.contains("Notes (2)"));
        assert!(output.contains("Current file tags"));
        assert!(output.contains("#alpha  #beta"));
        assert!(output.contains("opened a.md"));
    }

    #[test]
    fn test_render_records_hit_regions() {
        let mut app = app_with_notes(&[("a.md", "#alpha"), ("b.md", "")]);
        app.open_note_at_cursor();
        render_to_string(TERM_W, TERM_H, |frame, _area| {
            render(frame, &mut app);
        });
        assert!(app.hits.iter().any(|(_, t)| *t == HitTarget::Note(1)));
        assert!(
            app.hits
                .iter()
                .any(|(_, t)| *t == HitTarget::Chip("#alpha".into()))
        );
    }

    #[test]
    fn test_help_overlay_on_top() {
        let mut app = app_with_notes(&[]);
        app.show_help = true;
        let output = render_to_string(TERM_W, TERM_H, |frame, _area| {
            render(frame, &mut app);
        });
        assert!(output.contains("Key Bindings"));
    }
}
