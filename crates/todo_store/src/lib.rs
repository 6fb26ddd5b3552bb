//! File-backed persistence for a todo list.
//! Todos live in one JSON document that is rewritten on every mutation.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{DbError, DbResult, StoreSnapshot};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::todo::{Todo, TodoId, TodoPatch};
pub use repo::todo_repo::{JsonFileTodoRepository, RepoError, RepoResult, TodoRepository};
pub use service::todo_service::{TodoService, TodoStore};

/// Returns the store crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
