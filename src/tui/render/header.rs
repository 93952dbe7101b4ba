use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge, Paragraph};

use crate::tui::app::App;

/// Render the title row.
pub fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let line = Line::from(vec![
        Span::styled(
            " [\u{2713}] tick",
            Style::default()
                .fg(app.theme.accent)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  your list, one key away",
            Style::default().fg(app.theme.dim).bg(bg),
        ),
    ]);
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}

/// Render the progress row: "N / M" plus a gauge. Omitted entirely while the
/// list is empty — an empty list shows no indicator, not 0%.
pub fn render_progress(frame: &mut Frame, app: &App, area: Rect) {
    let Some((completed, total)) = app.progress() else {
        return;
    };

    let gauge = Gauge::default()
        .ratio(completed as f64 / total as f64)
        .label(format!("{completed} / {total}"))
        .gauge_style(Style::default().fg(app.theme.green).bg(app.theme.selection_bg))
        .style(Style::default().bg(app.theme.background));

    // Inset one column on each side to line up with the form border.
    let inner = Rect {
        x: area.x + 1,
        width: area.width.saturating_sub(2),
        ..area
    };
    frame.render_widget(gauge, inner);
}
