//! Domain model for stored todo records.
//!
//! # Responsibility
//! - Define the canonical record persisted in the backing file.
//! - Define the partial-update shape accepted by the store.
//!
//! # Invariants
//! - Every todo is identified by a stable `TodoId`.
//! - `id` and `date` never change after creation.

pub mod todo;
