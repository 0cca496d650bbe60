//! SQLite storage backend implementation.
//!
//! Uses `rusqlite` for synchronous operations and `tokio-rusqlite` for
//! async wrapping: one dedicated thread owns the connection and operations
//! are serialized through it.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteTaskRepository;
