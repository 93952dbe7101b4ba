pub mod form_row;
pub mod header;
pub mod list_view;
pub mod status_row;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function — dispatches to sub-renderers.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: title | progress | form (3 rows) | list | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(1), // progress (blank when list is empty)
            Constraint::Length(3), // task form
            Constraint::Min(1),    // task list
            Constraint::Length(1), // status row
        ])
        .split(area);

    app.ensure_cursor_visible(chunks[3].height as usize);

    header::render_title(frame, app, chunks[0]);
    header::render_progress(frame, app, chunks[1]);
    form_row::render_form(frame, app, chunks[2]);
    list_view::render_list(frame, app, chunks[3]);
    status_row::render_status_row(frame, app, chunks[4]);
}
