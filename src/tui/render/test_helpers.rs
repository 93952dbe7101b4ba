use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::tui::app::App;
use crate::tui::render;

pub const TERM_W: u16 = 80;

/// Render the whole app into an in-memory buffer and return plain text (no
/// styles).
pub fn render_app_to_string(app: &mut App, w: u16, h: u16) -> String {
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| render::render(frame, app)).unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Build an App over a throwaway data directory with the given tasks.
pub fn app_with_tasks(texts: &[&str]) -> App {
    let data_dir = tempfile::TempDir::new().unwrap().keep();
    let mut app = App::new(data_dir, Vec::new(), false);
    for text in texts {
        assert!(app.create_task(text));
    }
    app
}
