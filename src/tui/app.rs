use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::recovery::log_recovery;
use crate::io::store_io::{load_tasks, save_tasks};
use crate::model::task::{Task, TaskId};
use crate::ops::list_ops;

use super::form::FormState;
use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode: list navigation, or typing in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Input,
}

/// Main application state. Owns the task list and routes every mutation
/// through the pure list operations, writing the result through to the store
/// on each change.
pub struct App {
    pub data_dir: PathBuf,
    pub tasks: Vec<Task>,
    pub mode: Mode,
    pub form: FormState,
    /// List cursor (index into `tasks`).
    pub cursor: usize,
    /// First visible list row.
    pub scroll_offset: usize,
    pub dark_mode: bool,
    pub theme: Theme,
    pub should_quit: bool,
    /// Transient message shown in the status row.
    pub status_message: Option<String>,
}

impl App {
    /// Build the app around an already-hydrated task list.
    pub fn new(data_dir: PathBuf, tasks: Vec<Task>, dark_mode: bool) -> Self {
        App {
            data_dir,
            tasks,
            mode: Mode::Navigate,
            form: FormState::default(),
            cursor: 0,
            scroll_offset: 0,
            dark_mode,
            theme: Theme::for_mode(dark_mode),
            should_quit: false,
            status_message: None,
        }
    }

    /// The id of the task under the list cursor, if any.
    pub fn cursor_task_id(&self) -> Option<TaskId> {
        self.tasks.get(self.cursor).map(|t| t.id)
    }

    /// `(completed, total)` when at least one task exists; None for an empty
    /// list (the progress indicator is omitted, not shown as 0%).
    pub fn progress(&self) -> Option<(usize, usize)> {
        if self.tasks.is_empty() {
            return None;
        }
        Some((list_ops::completed_count(&self.tasks), self.tasks.len()))
    }

    /// Append a new task. Returns true if the list changed.
    pub fn create_task(&mut self, text: &str) -> bool {
        let Some(next) = list_ops::create(&self.tasks, text) else {
            return false;
        };
        self.tasks = next;
        self.persist();
        true
    }

    /// Flip completion on a task. Returns true if the list changed.
    pub fn toggle_task(&mut self, id: TaskId) -> bool {
        let Some(next) = list_ops::toggle(&self.tasks, id) else {
            return false;
        };
        self.tasks = next;
        self.persist();
        true
    }

    /// Replace a task's text. Returns true if the list changed.
    pub fn edit_task(&mut self, id: TaskId, new_text: &str) -> bool {
        let Some(next) = list_ops::edit(&self.tasks, id, new_text) else {
            return false;
        };
        self.tasks = next;
        self.persist();
        true
    }

    /// Delete a task. If the form is currently editing that task, the form
    /// reverts to create mode and focus returns to the list. Returns true if
    /// the list changed.
    pub fn delete_task(&mut self, id: TaskId) -> bool {
        let Some(next) = list_ops::delete(&self.tasks, id) else {
            return false;
        };
        self.tasks = next;
        if self.form.invalidate_target(id) {
            self.mode = Mode::Navigate;
        }
        self.clamp_cursor();
        self.persist();
        true
    }

    /// Swap the dark/light palette. Presentation only.
    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        self.theme = Theme::for_mode(self.dark_mode);
    }

    /// Write the full list through to the store. A failed save is logged and
    /// surfaced in the status row; it never aborts the session.
    fn persist(&mut self) {
        if let Err(e) = save_tasks(&self.data_dir, &self.tasks) {
            log_recovery(&self.data_dir, "store", &format!("save failed: {e}"));
            self.status_message = Some("could not save tasks (see .recovery.log)".to_string());
        }
    }

    fn clamp_cursor(&mut self) {
        if self.cursor >= self.tasks.len() {
            self.cursor = self.tasks.len().saturating_sub(1);
        }
    }

    /// Keep the cursor row inside the visible window of `height` rows.
    pub fn ensure_cursor_visible(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + height {
            self.scroll_offset = self.cursor + 1 - height;
        }
    }
}

/// Run the TUI application.
pub fn run(data_dir: &Path, dark_mode: bool) -> Result<(), Box<dyn std::error::Error>> {
    // Hydrate exactly once, before any mutation can occur.
    let tasks = load_tasks(data_dir);
    let mut app = App::new(data_dir.to_path_buf(), tasks, dark_mode);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::store_io::{load_tasks, store_path};
    use tempfile::TempDir;

    fn app_with(texts: &[&str]) -> (TempDir, App) {
        let dir = TempDir::new().unwrap();
        let mut app = App::new(dir.path().to_path_buf(), Vec::new(), false);
        for text in texts {
            assert!(app.create_task(text));
        }
        (dir, app)
    }

    #[test]
    fn mutations_write_through_to_store() {
        let (dir, mut app) = app_with(&["buy milk"]);
        let id = app.tasks[0].id;

        app.toggle_task(id);
        let stored = load_tasks(dir.path());
        assert!(stored[0].completed);

        app.edit_task(id, "buy oat milk");
        let stored = load_tasks(dir.path());
        assert_eq!(stored[0].text, "buy oat milk");
    }

    #[test]
    fn deleting_last_task_persists_empty_list() {
        let (dir, mut app) = app_with(&["only task"]);
        let id = app.tasks[0].id;

        assert!(app.delete_task(id));
        assert!(app.tasks.is_empty());
        // The stored copy must not go stale on the non-empty → empty
        // transition.
        assert!(store_path(dir.path()).exists());
        assert!(load_tasks(dir.path()).is_empty());
    }

    #[test]
    fn deleting_edited_task_clears_the_form() {
        let (_dir, mut app) = app_with(&["task a", "task b"]);
        let a = app.tasks[0].id;

        app.mode = Mode::Input;
        app.form.begin_edit(a, "task a");
        app.form.insert_char('!');

        assert!(app.delete_task(a));
        assert_eq!(app.mode, Mode::Navigate);
        assert!(!app.form.is_editing());
        assert_eq!(app.form.buffer, "");
    }

    #[test]
    fn deleting_other_task_keeps_the_edit() {
        let (_dir, mut app) = app_with(&["task a", "task b"]);
        let a = app.tasks[0].id;
        let b = app.tasks[1].id;

        app.mode = Mode::Input;
        app.form.begin_edit(a, "task a");

        assert!(app.delete_task(b));
        assert_eq!(app.mode, Mode::Input);
        assert_eq!(app.form.edit_target, Some(a));
        assert_eq!(app.form.buffer, "task a");
    }

    #[test]
    fn progress_is_omitted_for_empty_list() {
        let (_dir, mut app) = app_with(&[]);
        assert_eq!(app.progress(), None);

        app.create_task("buy milk");
        assert_eq!(app.progress(), Some((0, 1)));
        let id = app.tasks[0].id;
        app.toggle_task(id);
        assert_eq!(app.progress(), Some((1, 1)));
    }

    #[test]
    fn delete_clamps_the_list_cursor() {
        let (_dir, mut app) = app_with(&["a", "b", "c"]);
        app.cursor = 2;
        let last = app.tasks[2].id;
        app.delete_task(last);
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn mutations_on_unknown_ids_are_noops() {
        let (_dir, mut app) = app_with(&["a"]);
        let ghost = TaskId::new();
        assert!(!app.toggle_task(ghost));
        assert!(!app.edit_task(ghost, "text"));
        assert!(!app.delete_task(ghost));
        assert_eq!(app.tasks.len(), 1);
    }

    #[test]
    fn dark_mode_toggle_does_not_touch_tasks() {
        let (dir, mut app) = app_with(&["a"]);
        let before = app.tasks.clone();
        let stored_before = load_tasks(dir.path());

        app.toggle_dark_mode();
        assert!(app.dark_mode);
        assert_eq!(app.tasks, before);
        assert_eq!(load_tasks(dir.path()), stored_before);
    }
}
