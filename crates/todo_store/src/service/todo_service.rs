//! Todo use-case service.
//!
//! # Responsibility
//! - Provide create/read/update/toggle/delete/clear over a repository.
//! - Generate identity and creation time for new todos.
//!
//! # Invariants
//! - Every mutation loads the full collection and saves the full collection.
//! - Lookups by id write nothing when no todo matches.
//! - No locking: concurrent writers race with last-writer-wins.

use crate::model::todo::{Todo, TodoPatch};
use crate::repo::todo_repo::{JsonFileTodoRepository, RepoError, RepoResult, TodoRepository};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// The file-backed todo store.
pub type TodoStore = TodoService<JsonFileTodoRepository>;

/// Use-case service for todo operations.
pub struct TodoService<R: TodoRepository> {
    repo: R,
}

impl TodoService<JsonFileTodoRepository> {
    /// Opens a store backed by the JSON file at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(JsonFileTodoRepository::new(path))
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        self.repo.path()
    }
}

impl<R: TodoRepository> TodoService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns all stored todos in persisted order.
    ///
    /// Empty or malformed content yields an empty list.
    pub fn read(&self) -> RepoResult<Vec<Todo>> {
        self.repo.load_todos()
    }

    /// Appends a new todo with `done = false` and returns it.
    pub fn create(&self, content: impl Into<String>) -> RepoResult<Todo> {
        let todo = Todo::new(content);
        let mut todos = self.repo.load_todos()?;
        todos.push(todo.clone());
        self.repo.save_todos(&todos)?;

        info!(
            "event=todo_create module=service status=ok id={} count={}",
            todo.id,
            todos.len()
        );
        Ok(todo)
    }

    /// Merges `patch` into the todo with `id` and returns the updated record.
    ///
    /// # Errors
    /// - `RepoError::NotFound` when no todo has `id`; the file is not written.
    ///
    /// An empty patch returns the stored record without writing.
    pub fn update(&self, id: &str, patch: &TodoPatch) -> RepoResult<Todo> {
        let mut todos = self.repo.load_todos()?;
        let Some(todo) = todos.iter_mut().find(|todo| todo.id == id) else {
            return Err(not_found("todo_update", id));
        };
        if patch.is_empty() {
            debug!(
                "event=todo_update module=service status=skipped reason=empty_patch id={}",
                id
            );
            return Ok(todo.clone());
        }
        todo.apply(patch);
        let updated = todo.clone();

        self.repo.save_todos(&todos)?;
        info!(
            "event=todo_update module=service status=ok id={} content_changed={} done_changed={}",
            id,
            patch.content.is_some(),
            patch.done.is_some()
        );
        Ok(updated)
    }

    /// Replaces only the content of the todo with `id`.
    pub fn update_content_by_id(&self, id: &str, content: impl Into<String>) -> RepoResult<Todo> {
        self.update(id, &TodoPatch::content(content))
    }

    /// Flips `done` on the todo with `id` and returns the updated record.
    ///
    /// # Errors
    /// - `RepoError::NotFound` when no todo has `id`; the file is not written.
    pub fn update_status_by_id(&self, id: &str) -> RepoResult<Todo> {
        let mut todos = self.repo.load_todos()?;
        let Some(todo) = todos.iter_mut().find(|todo| todo.id == id) else {
            return Err(not_found("todo_toggle", id));
        };
        *todo = todo.toggled();
        let updated = todo.clone();

        self.repo.save_todos(&todos)?;
        info!(
            "event=todo_toggle module=service status=ok id={} done={}",
            id, updated.done
        );
        Ok(updated)
    }

    /// Removes every todo with `id`. A missing id still rewrites the file.
    pub fn delete_by_id(&self, id: &str) -> RepoResult<()> {
        let mut todos = self.repo.load_todos()?;
        let before = todos.len();
        todos.retain(|todo| todo.id != id);
        self.repo.save_todos(&todos)?;

        info!(
            "event=todo_delete module=service status=ok id={} removed={}",
            id,
            before - todos.len()
        );
        Ok(())
    }

    /// Discards all stored todos by blanking the backing file.
    pub fn clear_database(&self) -> RepoResult<()> {
        self.repo.clear()?;
        info!("event=store_clear module=service status=ok");
        Ok(())
    }
}

fn not_found(event: &str, id: &str) -> RepoError {
    warn!(
        "event={} module=service status=error error_code=not_found id={}",
        event, id
    );
    RepoError::NotFound(id.to_string())
}
