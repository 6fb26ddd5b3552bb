//! Repository layer over the backing store file.
//!
//! # Responsibility
//! - Define the load/save contract used by the todo service.
//! - Isolate file format details from service orchestration.
//!
//! # Invariants
//! - Malformed stored content loads as an empty collection.
//! - Repository APIs return semantic errors (`NotFound`) in addition to
//!   storage transport errors.

pub mod todo_repo;
