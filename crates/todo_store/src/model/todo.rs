//! Todo domain model.
//!
//! # Responsibility
//! - Define the record shape stored inside `{ "todos": [...] }`.
//! - Provide creation and patch-merge helpers.
//!
//! # Invariants
//! - `id` is unique across one store and never reused.
//! - `date` is set once at creation (ISO-8601, UTC, millisecond precision).
//! - `done` starts as `false`.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a todo.
///
/// Kept as a string so files written by other tools still load; new ids are
/// always UUID v4.
pub type TodoId = String;

/// One task record as persisted on disk.
///
/// Field order matches the persisted JSON order: `id, date, content, done`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    /// ISO-8601 creation timestamp, e.g. `2026-10-18T09:30:00.000Z`.
    pub date: String,
    pub content: String,
    /// Records written without the flag load as not done.
    #[serde(default)]
    pub done: bool,
}

impl Todo {
    /// Creates a todo with a fresh UUID v4 and the current UTC timestamp.
    pub fn new(content: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), now_iso8601(), content)
    }

    /// Creates a todo with caller-provided identity and timestamp.
    pub fn with_id(
        id: impl Into<TodoId>,
        date: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            content: content.into(),
            done: false,
        }
    }

    /// Merges the set fields of `patch` into this record.
    pub fn apply(&mut self, patch: &TodoPatch) {
        if let Some(content) = &patch.content {
            self.content = content.clone();
        }
        if let Some(done) = patch.done {
            self.done = done;
        }
    }

    /// Returns a copy with `done` negated.
    pub fn toggled(&self) -> Self {
        Self {
            done: !self.done,
            ..self.clone()
        }
    }
}

/// Partial update for an existing todo.
///
/// `None` fields are left untouched. Identity and creation time are not
/// patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub content: Option<String>,
    pub done: Option<bool>,
}

impl TodoPatch {
    /// Patch that replaces only `content`.
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// Patch that sets only `done`.
    pub fn done(done: bool) -> Self {
        Self {
            done: Some(done),
            ..Self::default()
        }
    }

    /// Returns whether the patch carries no field.
    pub fn is_empty(&self) -> bool {
        self.content.is_none() && self.done.is_none()
    }
}

fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
