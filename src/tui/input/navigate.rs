use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

/// Handle a key in navigate mode (focus on the task list).
pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,

        // List navigation
        KeyCode::Char('j') | KeyCode::Down => {
            if app.cursor + 1 < app.tasks.len() {
                app.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.cursor = app.tasks.len().saturating_sub(1);
        }

        // Row actions on the task under the cursor
        KeyCode::Char(' ') | KeyCode::Char('x') => {
            if let Some(id) = app.cursor_task_id() {
                app.toggle_task(id);
            }
        }
        KeyCode::Char('e') | KeyCode::Enter => enter_edit_mode(app),
        KeyCode::Char('d') => {
            if let Some(id) = app.cursor_task_id() {
                app.delete_task(id);
            }
        }

        // New task: focus the form in create mode
        KeyCode::Char('a') | KeyCode::Char('i') => {
            app.form.reset();
            app.mode = Mode::Input;
        }

        KeyCode::Char('D') => app.toggle_dark_mode(),

        _ => {}
    }
}

/// Move focus into the form, pre-populated with the cursor task's text and
/// fully selected for quick overwrite.
fn enter_edit_mode(app: &mut App) {
    let Some(task) = app.tasks.get(app.cursor) else {
        return;
    };
    let (id, text) = (task.id, task.text.clone());
    app.form.begin_edit(id, &text);
    app.mode = Mode::Input;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::input::handle_key;
    use tempfile::TempDir;

    fn key(c: char) -> KeyEvent {
        KeyEvent::from(KeyCode::Char(c))
    }

    fn app_with(texts: &[&str]) -> (TempDir, App) {
        let dir = TempDir::new().unwrap();
        let mut app = App::new(dir.path().to_path_buf(), Vec::new(), false);
        for text in texts {
            app.create_task(text);
        }
        (dir, app)
    }

    #[test]
    fn space_toggles_cursor_task() {
        let (_dir, mut app) = app_with(&["a", "b"]);
        handle_key(&mut app, key('j'));
        handle_key(&mut app, key(' '));
        assert!(!app.tasks[0].completed);
        assert!(app.tasks[1].completed);

        handle_key(&mut app, key(' '));
        assert!(!app.tasks[1].completed);
    }

    #[test]
    fn edit_key_enters_form_with_selection() {
        let (_dir, mut app) = app_with(&["buy milk"]);
        handle_key(&mut app, key('e'));

        assert_eq!(app.mode, Mode::Input);
        assert_eq!(app.form.edit_target, Some(app.tasks[0].id));
        assert_eq!(app.form.buffer, "buy milk");
        assert!(app.form.selection_range().is_some());
    }

    #[test]
    fn add_key_enters_empty_create_form() {
        let (_dir, mut app) = app_with(&["existing"]);
        handle_key(&mut app, key('a'));

        assert_eq!(app.mode, Mode::Input);
        assert!(!app.form.is_editing());
        assert_eq!(app.form.buffer, "");
    }

    #[test]
    fn delete_key_removes_cursor_task() {
        let (_dir, mut app) = app_with(&["a", "b"]);
        handle_key(&mut app, key('d'));
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks[0].text, "b");
    }

    #[test]
    fn keys_on_empty_list_are_noops() {
        let (_dir, mut app) = app_with(&[]);
        handle_key(&mut app, key(' '));
        handle_key(&mut app, key('d'));
        handle_key(&mut app, key('e'));
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.tasks.is_empty());
    }

    #[test]
    fn dark_mode_key_flips_preference() {
        let (_dir, mut app) = app_with(&[]);
        assert!(!app.dark_mode);
        handle_key(&mut app, key('D'));
        assert!(app.dark_mode);
        handle_key(&mut app, key('D'));
        assert!(!app.dark_mode);
    }
}
