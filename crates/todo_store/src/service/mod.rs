//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate the read-modify-write cycle into todo operations.
//! - Keep host programs decoupled from the file format.

pub mod todo_service;
