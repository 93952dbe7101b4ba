use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

/// Handle a key while the form has focus.
pub(super) fn handle_form(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => app.should_quit = true,
            KeyCode::Char('a') => app.form.move_home(),
            KeyCode::Char('e') => app.form.move_end(),
            KeyCode::Char('u') => app.form.clear_line(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => {
            // Cancel: drop any edit target and return focus to the list.
            app.form.reset();
            app.mode = Mode::Navigate;
        }
        KeyCode::Enter => submit(app),
        KeyCode::Char(c) => app.form.insert_char(c),
        KeyCode::Backspace => app.form.backspace(),
        KeyCode::Delete => app.form.delete_forward(),
        KeyCode::Left => app.form.move_left(),
        KeyCode::Right => app.form.move_right(),
        KeyCode::Home => app.form.move_home(),
        KeyCode::End => app.form.move_end(),
        _ => {}
    }
}

/// Submit the form. Blank text is rejected in both modes: no state change,
/// field unchanged.
fn submit(app: &mut App) {
    if app.form.buffer.trim().is_empty() {
        return;
    }

    match app.form.edit_target {
        Some(id) => {
            // Edit mode: replace the target's text, then exit to create mode.
            // A vanished target id is a no-op, never fatal.
            let text = app.form.buffer.clone();
            app.edit_task(id, &text);
            app.form.reset();
            app.mode = Mode::Navigate;
        }
        None => {
            // Create mode: append, clear the field, keep focus so several
            // tasks can be entered in sequence.
            let text = app.form.buffer.clone();
            if app.create_task(&text) {
                app.form.reset();
                app.cursor = app.tasks.len() - 1;
            }
        }
    }
}
