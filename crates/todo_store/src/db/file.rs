//! Whole-file read/write primitives for the store path.
//!
//! # Responsibility
//! - Read the backing file into a `StoreSnapshot`.
//! - Overwrite the backing file with an encoded collection or an empty string.
//!
//! # Invariants
//! - A missing file reads as `StoreSnapshot::Empty`; other I/O errors propagate.
//! - Log events carry counts and durations only, never todo content.

use super::snapshot::{classify_content, encode_todos, StoreSnapshot};
use super::{DbError, DbResult};
use crate::model::todo::Todo;
use log::{debug, error};
use std::io::ErrorKind;
use std::path::Path;
use std::time::Instant;

/// Reads and classifies the backing file.
///
/// # Side effects
/// - Emits `store_read` events with the snapshot kind.
pub fn read_snapshot(path: &Path) -> DbResult<StoreSnapshot> {
    let started_at = Instant::now();

    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(
                "event=store_read module=db status=ok snapshot=missing duration_ms={}",
                started_at.elapsed().as_millis()
            );
            return Ok(StoreSnapshot::Empty);
        }
        Err(err) => {
            error!(
                "event=store_read module=db status=error error_code=read_failed error={}",
                err
            );
            return Err(io_error(path, err));
        }
    };

    let snapshot = classify_content(&text);
    debug!(
        "event=store_read module=db status=ok snapshot={} bytes={} duration_ms={}",
        snapshot.kind(),
        text.len(),
        started_at.elapsed().as_millis()
    );

    Ok(snapshot)
}

/// Overwrites the backing file with the pretty-printed collection.
pub fn write_todos(path: &Path, todos: &[Todo]) -> DbResult<()> {
    let started_at = Instant::now();
    let text = encode_todos(todos)?;
    write_text(path, &text)?;
    debug!(
        "event=store_write module=db status=ok count={} bytes={} duration_ms={}",
        todos.len(),
        text.len(),
        started_at.elapsed().as_millis()
    );
    Ok(())
}

/// Overwrites the backing file with an empty string.
pub fn clear_file(path: &Path) -> DbResult<()> {
    write_text(path, "")?;
    debug!("event=store_clear module=db status=ok");
    Ok(())
}

fn write_text(path: &Path, text: &str) -> DbResult<()> {
    std::fs::write(path, text).map_err(|err| {
        error!(
            "event=store_write module=db status=error error_code=write_failed error={}",
            err
        );
        io_error(path, err)
    })
}

fn io_error(path: &Path, source: std::io::Error) -> DbError {
    DbError::Io {
        path: path.to_path_buf(),
        source,
    }
}
