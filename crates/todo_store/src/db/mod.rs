//! Flat-file storage for the todo collection.
//!
//! # Responsibility
//! - Read the backing file and classify its content as a `StoreSnapshot`.
//! - Rewrite the whole file with a pretty-printed collection, or blank it.
//!
//! # Invariants
//! - Every write replaces the entire file; there is no partial or append I/O.
//! - Reading never mutates the file.
//! - The persisted shape is `{ "todos": [...] }` with 2-space indentation.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod file;
mod snapshot;

pub use file::{clear_file, read_snapshot, write_todos};
pub use snapshot::{classify_content, encode_todos, StoreSnapshot};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Encode(serde_json::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "store file `{}` I/O failed: {source}", path.display())
            }
            Self::Encode(err) => write!(f, "failed to encode todo collection: {err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for DbError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}
