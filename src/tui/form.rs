//! State for the shared task-entry form.
//!
//! The form has two modes. With no edit target, submitting appends a new
//! task (create mode). With an edit target, the buffer starts as the target
//! task's current text with everything selected, and submitting replaces
//! that task's text (edit mode). Blank submissions are rejected in both
//! modes without touching the buffer.

use std::ops::Range;

use crate::model::task::TaskId;
use crate::util::unicode::{next_grapheme_boundary, prev_grapheme_boundary};

#[derive(Debug, Clone, Default)]
pub struct FormState {
    /// Text being typed.
    pub buffer: String,
    /// Cursor position as a byte offset into `buffer`.
    pub cursor: usize,
    /// Selection anchor (byte offset). Selection spans anchor..cursor in
    /// either direction; None means no selection.
    pub selection_anchor: Option<usize>,
    /// Task being edited, or None in create mode.
    pub edit_target: Option<TaskId>,
}

impl FormState {
    pub fn is_editing(&self) -> bool {
        self.edit_target.is_some()
    }

    /// Enter edit mode for a task: pre-populate the buffer with its current
    /// text and select all of it for quick overwrite.
    pub fn begin_edit(&mut self, id: TaskId, text: &str) {
        self.buffer = text.to_string();
        self.cursor = self.buffer.len();
        self.selection_anchor = if self.buffer.is_empty() { None } else { Some(0) };
        self.edit_target = Some(id);
    }

    /// Reset to an empty create-mode form.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
        self.selection_anchor = None;
        self.edit_target = None;
    }

    /// Drop the edit target (and any in-progress text) if it matches `id`.
    /// Returns true if the form was cleared.
    pub fn invalidate_target(&mut self, id: TaskId) -> bool {
        if self.edit_target == Some(id) {
            self.reset();
            true
        } else {
            false
        }
    }

    /// The selected byte range, normalized, if a non-empty selection exists.
    pub fn selection_range(&self) -> Option<Range<usize>> {
        let anchor = self.selection_anchor?;
        if anchor == self.cursor {
            return None;
        }
        let (start, end) = if anchor < self.cursor {
            (anchor, self.cursor)
        } else {
            (self.cursor, anchor)
        };
        Some(start..end)
    }

    /// Remove the selected text, if any. Returns true if something was
    /// deleted.
    fn delete_selection(&mut self) -> bool {
        let Some(range) = self.selection_range() else {
            self.selection_anchor = None;
            return false;
        };
        self.cursor = range.start;
        self.buffer.replace_range(range, "");
        self.selection_anchor = None;
        true
    }

    /// Insert a character at the cursor, replacing the selection if present.
    pub fn insert_char(&mut self, c: char) {
        self.delete_selection();
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete backwards: the selection if present, otherwise one grapheme.
    pub fn backspace(&mut self) {
        if self.delete_selection() {
            return;
        }
        if let Some(prev) = prev_grapheme_boundary(&self.buffer, self.cursor) {
            self.buffer.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    /// Delete forwards: the selection if present, otherwise one grapheme.
    pub fn delete_forward(&mut self) {
        if self.delete_selection() {
            return;
        }
        if let Some(next) = next_grapheme_boundary(&self.buffer, self.cursor) {
            self.buffer.replace_range(self.cursor..next, "");
        }
    }

    pub fn move_left(&mut self) {
        // Arrow keys collapse the selection to its edge first.
        if let Some(range) = self.selection_range() {
            self.cursor = range.start;
        } else if let Some(prev) = prev_grapheme_boundary(&self.buffer, self.cursor) {
            self.cursor = prev;
        }
        self.selection_anchor = None;
    }

    pub fn move_right(&mut self) {
        if let Some(range) = self.selection_range() {
            self.cursor = range.end;
        } else if let Some(next) = next_grapheme_boundary(&self.buffer, self.cursor) {
            self.cursor = next;
        }
        self.selection_anchor = None;
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
        self.selection_anchor = None;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
        self.selection_anchor = None;
    }

    /// Clear the buffer (Ctrl-U), keeping the current mode.
    pub fn clear_line(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
        self.selection_anchor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_edit_selects_all() {
        let mut form = FormState::default();
        let id = TaskId::new();
        form.begin_edit(id, "buy milk");

        assert!(form.is_editing());
        assert_eq!(form.buffer, "buy milk");
        assert_eq!(form.selection_range(), Some(0..8));
    }

    #[test]
    fn typing_over_selection_replaces_text() {
        let mut form = FormState::default();
        form.begin_edit(TaskId::new(), "buy milk");
        form.insert_char('n');
        form.insert_char('o');

        assert_eq!(form.buffer, "no");
        assert_eq!(form.cursor, 2);
        assert!(form.selection_range().is_none());
    }

    #[test]
    fn backspace_deletes_selection_then_graphemes() {
        let mut form = FormState::default();
        form.begin_edit(TaskId::new(), "ab");
        form.backspace();
        assert_eq!(form.buffer, "");

        form.insert_char('x');
        form.insert_char('é');
        form.backspace();
        assert_eq!(form.buffer, "x");
        assert_eq!(form.cursor, 1);
    }

    #[test]
    fn arrows_collapse_selection_to_edges() {
        let mut form = FormState::default();
        form.begin_edit(TaskId::new(), "abc");
        form.move_left();
        assert_eq!(form.cursor, 0);
        assert!(form.selection_range().is_none());

        form.begin_edit(TaskId::new(), "abc");
        form.move_right();
        assert_eq!(form.cursor, 3);
    }

    #[test]
    fn invalidate_target_clears_only_matching_edit() {
        let mut form = FormState::default();
        let a = TaskId::new();
        let b = TaskId::new();
        form.begin_edit(a, "task a");

        assert!(!form.invalidate_target(b));
        assert!(form.is_editing());

        assert!(form.invalidate_target(a));
        assert!(!form.is_editing());
        assert_eq!(form.buffer, "");
    }

    #[test]
    fn reset_returns_to_create_mode() {
        let mut form = FormState::default();
        form.begin_edit(TaskId::new(), "text");
        form.reset();
        assert!(!form.is_editing());
        assert_eq!(form.buffer, "");
        assert_eq!(form.cursor, 0);
    }
}
