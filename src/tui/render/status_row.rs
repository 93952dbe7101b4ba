use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen): a transient message if one is
/// pending, otherwise key hints for the current mode.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = if let Some(message) = &app.status_message {
        Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(app.theme.accent).bg(bg),
        ))
    } else {
        let hints = match app.mode {
            Mode::Navigate => " a add  e edit  space toggle  d delete  D dark  q quit",
            Mode::Input if app.form.is_editing() => " Enter save  Esc cancel",
            Mode::Input => " Enter add  Esc done",
        };
        let mut spans = vec![Span::styled(
            hints,
            Style::default().fg(app.theme.dim).bg(bg),
        )];
        let content_width = hints.chars().count();
        if content_width < width {
            spans.push(Span::styled(
                " ".repeat(width - content_width),
                Style::default().bg(bg),
            ));
        }
        Line::from(spans)
    };

    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}
