use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode::truncate_to_width;

/// Render the task list: one row per task with its checkbox and text.
/// Completed tasks are struck through and dimmed.
pub fn render_list(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;

    if app.tasks.is_empty() {
        let empty =
            Paragraph::new(" No tasks yet!").style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let visible_height = area.height as usize;
    let width = area.width as usize;
    // The list cursor is only meaningful while the list has focus.
    let cursor = (app.mode == Mode::Navigate).then_some(app.cursor);

    let mut lines: Vec<Line> = Vec::new();
    for (i, task) in app
        .tasks
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(visible_height)
    {
        let is_cursor = cursor == Some(i);
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };

        let checkbox = if task.completed { " [x] " } else { " [ ] " };
        let checkbox_style = if task.completed {
            Style::default().fg(app.theme.green).bg(row_bg)
        } else {
            Style::default().fg(app.theme.dim).bg(row_bg)
        };

        let mut text_style = if task.completed {
            Style::default()
                .fg(app.theme.dim)
                .bg(row_bg)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(app.theme.text).bg(row_bg)
        };
        if is_cursor && !task.completed {
            text_style = text_style.fg(app.theme.text_bright);
        }

        let text = truncate_to_width(&task.text, width.saturating_sub(6));
        let mut spans = vec![
            Span::styled(checkbox, checkbox_style),
            Span::styled(text, text_style),
        ];

        // Pad the cursor row to full width
        if is_cursor {
            let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
            if content_width < width {
                spans.push(Span::styled(
                    " ".repeat(width - content_width),
                    Style::default().bg(row_bg),
                ));
            }
        }

        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
