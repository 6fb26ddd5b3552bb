//! Classification of raw store file content.
//!
//! # Responsibility
//! - Turn file text into an explicit `Empty | Loaded | Malformed` value.
//! - Encode a collection into the persisted document shape.
//!
//! # Invariants
//! - Classification is pure; it never touches the file system.
//! - A document without a `todos` field (or with `null`) is `Empty`.

use crate::model::todo::Todo;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What the backing file currently holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreSnapshot {
    /// Missing file, blank text, or a document without `todos`.
    Empty,
    /// A well-formed collection in persisted order.
    Loaded(Vec<Todo>),
    /// Content that is not a valid store document; carries the parse error.
    Malformed(String),
}

impl StoreSnapshot {
    /// Collapses the snapshot into a collection.
    ///
    /// Malformed content is treated as an empty collection. Callers that
    /// care about the distinction should match on the snapshot instead.
    pub fn into_todos(self) -> Vec<Todo> {
        match self {
            Self::Loaded(todos) => todos,
            Self::Empty | Self::Malformed(_) => Vec::new(),
        }
    }

    /// Short label used in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Loaded(_) => "loaded",
            Self::Malformed(_) => "malformed",
        }
    }
}

#[derive(Deserialize)]
struct StoreDocument {
    todos: Option<Vec<Todo>>,
}

#[derive(Serialize)]
struct StoreDocumentRef<'a> {
    todos: &'a [Todo],
}

/// Classifies raw file text.
///
/// Only a top-level JSON object can be `Loaded` or `Empty`; arrays and
/// scalars are `Malformed`.
pub fn classify_content(text: &str) -> StoreSnapshot {
    if text.trim().is_empty() {
        return StoreSnapshot::Empty;
    }

    let value = match serde_json::from_str::<Value>(text) {
        Ok(value @ Value::Object(_)) => value,
        Ok(_) => {
            return StoreSnapshot::Malformed("expected a JSON object at top level".to_string())
        }
        Err(err) => return StoreSnapshot::Malformed(err.to_string()),
    };

    match serde_json::from_value::<StoreDocument>(value) {
        Ok(StoreDocument { todos: Some(todos) }) => StoreSnapshot::Loaded(todos),
        Ok(StoreDocument { todos: None }) => StoreSnapshot::Empty,
        Err(err) => StoreSnapshot::Malformed(err.to_string()),
    }
}

/// Encodes `todos` as the pretty-printed persisted document.
pub fn encode_todos(todos: &[Todo]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&StoreDocumentRef { todos })
}

#[cfg(test)]
mod tests {
    use super::{classify_content, encode_todos, StoreSnapshot};
    use crate::model::todo::Todo;

    #[test]
    fn blank_text_is_empty() {
        assert_eq!(classify_content(""), StoreSnapshot::Empty);
        assert_eq!(classify_content("  \n"), StoreSnapshot::Empty);
    }

    #[test]
    fn document_without_todos_is_empty() {
        assert_eq!(classify_content("{}"), StoreSnapshot::Empty);
        assert_eq!(classify_content(r#"{"todos": null}"#), StoreSnapshot::Empty);
        assert_eq!(classify_content(r#"{"other": 1}"#), StoreSnapshot::Empty);
    }

    #[test]
    fn invalid_json_is_malformed() {
        let snapshot = classify_content("{ not json");
        assert_eq!(snapshot.kind(), "malformed");
        assert!(snapshot.into_todos().is_empty());
    }

    #[test]
    fn todo_missing_required_field_is_malformed() {
        let snapshot = classify_content(r#"{"todos": [{"id": "a", "content": "x"}]}"#);
        assert!(matches!(snapshot, StoreSnapshot::Malformed(_)));
    }

    #[test]
    fn top_level_array_is_malformed() {
        let text = r#"[[{"id": "x", "date": "2026-01-01T00:00:00.000Z", "content": "c", "done": false}]]"#;
        assert!(matches!(classify_content(text), StoreSnapshot::Malformed(_)));
        assert!(matches!(classify_content("42"), StoreSnapshot::Malformed(_)));
    }

    #[test]
    fn todo_missing_done_defaults_to_pending() {
        let text = r#"{"todos": [{"id": "b", "date": "2026-01-01T00:00:00.000Z", "content": "x"}]}"#;
        let todos = classify_content(text).into_todos();
        assert_eq!(todos.len(), 1);
        assert!(!todos[0].done);
    }

    #[test]
    fn valid_document_is_loaded_in_order() {
        let text = r#"{
  "todos": [
    {"id": "a", "date": "2026-01-01T00:00:00.000Z", "content": "first", "done": false},
    {"id": "b", "date": "2026-01-02T00:00:00.000Z", "content": "second", "done": true}
  ]
}"#;
        let todos = classify_content(text).into_todos();
        let ids: Vec<&str> = todos.iter().map(|todo| todo.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert!(todos[1].done);
    }

    #[test]
    fn encode_uses_two_space_indent_and_field_order() {
        let todo = Todo::with_id("a", "2026-01-01T00:00:00.000Z", "first");
        let text = encode_todos(&[todo]).unwrap();
        let expected = r#"{
  "todos": [
    {
      "id": "a",
      "date": "2026-01-01T00:00:00.000Z",
      "content": "first",
      "done": false
    }
  ]
}"#;
        assert_eq!(text, expected);
    }

    #[test]
    fn encode_empty_collection() {
        assert_eq!(encode_todos(&[]).unwrap(), "{\n  \"todos\": []\n}");
    }
}
