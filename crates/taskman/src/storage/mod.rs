//! Storage backend implementations.
//!
//! Concrete implementations of the repository trait defined in
//! `taskman_core::storage`. SQLite is the only backend; tests use its
//! in-memory mode.

pub mod sqlite;

pub use sqlite::SqliteTaskRepository;
