use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Pane};
use crate::util::unicode::{display_width, truncate_to_width};

/// Render the status row (bottom of screen): the last message or key hints
/// on the left, the note count on the right.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let (left, left_style) = match &app.status {
        Some(msg) => (
            format!(" {}", msg),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ),
        None => {
            let hint = match (app.pane, app.panel.is_some()) {
                (Pane::Explorer, true) => " Enter open  Tab tags  ? help  q quit",
                (Pane::Explorer, false) => " Enter open  t tags  ? help  q quit",
                (Pane::Tags, _) => " Enter select  s search  o open  Esc clear  ? help",
            };
            (hint.to_string(), Style::default().fg(app.theme.dim).bg(bg))
        }
    };
    let right = format!("{} notes ", app.vault.len());

    let right_width = display_width(&right);
    let left = truncate_to_width(&left, width.saturating_sub(right_width + 1));
    let left_width = display_width(&left);

    let mut spans = vec![Span::styled(left, left_style)];
    if left_width + right_width < width {
        let padding = width - left_width - right_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            right,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_hints_and_count() {
        let app = app_with_notes(&[("a.md", ""), ("b.md", "")]);
        let output = render_to_string(50, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert_eq!(
            output,
            " Enter open  Tab tags  ? help  q quit     2 notes"
        );
    }

    #[test]
    fn test_message_is_truncated_before_count() {
        let mut app = app_with_notes(&[("a.md", "")]);
        app.status = Some("search: obsidian://search?query=tag:a-very-long-tag".into());
        let output = render_to_string(30, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert!(output.ends_with(" 1 notes"));
        assert!(output.starts_with(" search: obs"));
        assert!(output.contains('\u{2026}'));
    }
}
