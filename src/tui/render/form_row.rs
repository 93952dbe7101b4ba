use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_segmentation::UnicodeSegmentation;

use crate::tui::app::{App, Mode};

/// Render the task-entry form. The border title doubles as the submit label
/// and toggles between Add and Edit with the form's mode.
pub fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let focused = app.mode == Mode::Input;

    let title = if app.form.is_editing() {
        " Edit task "
    } else {
        " Add task "
    };
    let border_fg = if focused {
        app.theme.accent
    } else {
        app.theme.dim
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border_fg).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.form.buffer.is_empty() && !focused {
        let placeholder = Paragraph::new(" enter a task")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(placeholder, inner);
        return;
    }

    let line = Line::from(buffer_spans(app, focused));
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), inner);
}

/// Build styled spans for the buffer: selection highlighted, cursor shown as
/// a reversed cell (or a bar at the end of the line) while focused.
fn buffer_spans<'a>(app: &App, focused: bool) -> Vec<Span<'a>> {
    let bg = app.theme.background;
    let form = &app.form;
    let selection = form.selection_range();

    let base = Style::default().fg(app.theme.text_bright).bg(bg);
    let selected = Style::default()
        .fg(app.theme.text_bright)
        .bg(app.theme.selection_bg);

    let mut spans: Vec<Span> = vec![Span::styled(" ", Style::default().bg(bg))];
    for (offset, grapheme) in form.buffer.grapheme_indices(true) {
        let in_selection = selection
            .as_ref()
            .is_some_and(|r| offset >= r.start && offset < r.end);
        let mut style = if in_selection { selected } else { base };
        if focused && offset == form.cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        spans.push(Span::styled(grapheme.to_string(), style));
    }
    if focused && form.cursor >= form.buffer.len() {
        spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(app.theme.accent).bg(bg),
        ));
    }
    spans
}
