use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque task identifier. Assigned at creation, immutable, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Generate a fresh identifier.
    pub fn new() -> Self {
        TaskId(Uuid::new_v4())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        TaskId::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// User-supplied label. Never empty after a successful create or edit.
    pub text: String,
    /// Completion state, false at creation.
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create a new incomplete task with a fresh id.
    pub fn new(text: impl Into<String>) -> Self {
        Task {
            id: TaskId::new(),
            text: text.into(),
            completed: false,
        }
    }
}
