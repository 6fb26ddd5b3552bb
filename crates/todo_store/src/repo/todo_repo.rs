//! Todo repository contract and JSON file implementation.
//!
//! # Responsibility
//! - Load and persist the complete todo collection.
//! - Own the "malformed content reads as empty" policy.
//!
//! # Invariants
//! - `load_todos` never writes.
//! - `save_todos` and `clear` replace the whole backing file.

use crate::db::{self, DbError, StoreSnapshot};
use crate::model::todo::{Todo, TodoId};
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for todo persistence and lookup operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// No stored todo has the requested id.
    NotFound(TodoId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "todo not found: {id}; please provide a valid ID"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

/// Repository interface for whole-collection persistence.
pub trait TodoRepository {
    /// Returns the raw classification of stored content.
    fn snapshot(&self) -> RepoResult<StoreSnapshot>;
    /// Replaces the stored collection.
    fn save_todos(&self, todos: &[Todo]) -> RepoResult<()>;
    /// Erases all stored content.
    fn clear(&self) -> RepoResult<()>;

    /// Returns the stored collection, treating malformed content as empty.
    fn load_todos(&self) -> RepoResult<Vec<Todo>> {
        let snapshot = self.snapshot()?;
        if let StoreSnapshot::Malformed(reason) = &snapshot {
            warn!(
                "event=todos_load module=repo status=degraded fallback=empty reason={}",
                reason
            );
        }
        Ok(snapshot.into_todos())
    }
}

/// Repository backed by one JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileTodoRepository {
    path: PathBuf,
}

impl JsonFileTodoRepository {
    /// Creates a repository for `path`. The file is not touched until the
    /// first operation; a missing file reads as an empty collection.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TodoRepository for JsonFileTodoRepository {
    fn snapshot(&self) -> RepoResult<StoreSnapshot> {
        Ok(db::read_snapshot(&self.path)?)
    }

    fn save_todos(&self, todos: &[Todo]) -> RepoResult<()> {
        Ok(db::write_todos(&self.path, todos)?)
    }

    fn clear(&self) -> RepoResult<()> {
        Ok(db::clear_file(&self.path)?)
    }
}

impl<R: TodoRepository + ?Sized> TodoRepository for &R {
    fn snapshot(&self) -> RepoResult<StoreSnapshot> {
        (**self).snapshot()
    }

    fn save_todos(&self, todos: &[Todo]) -> RepoResult<()> {
        (**self).save_todos(todos)
    }

    fn clear(&self) -> RepoResult<()> {
        (**self).clear()
    }
}
