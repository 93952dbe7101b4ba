//! Pure operations over the task list.
//!
//! Each operation takes the current list by reference and returns the
//! replacement list, or `None` when nothing changed. The input list is never
//! mutated, so callers can use the return value as the persistence trigger.

use crate::model::task::{Task, TaskId};

/// Append a new task with the trimmed text. `None` if the text is blank.
pub fn create(tasks: &[Task], text: &str) -> Option<Vec<Task>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let mut next = tasks.to_vec();
    next.push(Task::new(text));
    Some(next)
}

/// Flip the completion state of the matching task. `None` if not found.
pub fn toggle(tasks: &[Task], id: TaskId) -> Option<Vec<Task>> {
    tasks.iter().position(|t| t.id == id).map(|idx| {
        let mut next = tasks.to_vec();
        next[idx].completed = !next[idx].completed;
        next
    })
}

/// Replace the text of the matching task with the trimmed new text.
/// `None` if the text is blank or the task is not found.
pub fn edit(tasks: &[Task], id: TaskId, new_text: &str) -> Option<Vec<Task>> {
    let new_text = new_text.trim();
    if new_text.is_empty() {
        return None;
    }
    tasks.iter().position(|t| t.id == id).map(|idx| {
        let mut next = tasks.to_vec();
        next[idx].text = new_text.to_string();
        next
    })
}

/// Remove the matching task, preserving the order of the rest.
/// `None` if not found.
pub fn delete(tasks: &[Task], id: TaskId) -> Option<Vec<Task>> {
    if !tasks.iter().any(|t| t.id == id) {
        return None;
    }
    Some(tasks.iter().filter(|t| t.id != id).cloned().collect())
}

/// Count of completed tasks.
pub fn completed_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|t| t.completed).count()
}
