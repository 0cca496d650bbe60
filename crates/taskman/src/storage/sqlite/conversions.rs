//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without database access.

use chrono::{DateTime, NaiveDateTime, Utc};
use rusqlite::Row;

use taskman_core::task::{Task, DEFAULT_STATUS};

/// Convert a SQLite row to a Task.
///
/// Expected columns: id, title, description, status, created_at
///
/// `description` and `status` are nullable columns; NULLs collapse to the
/// documented defaults so the JSON representation never carries null.
pub fn row_to_task(row: &Row) -> rusqlite::Result<Task> {
    let id: i64 = row.get(0)?;
    let title: String = row.get(1)?;
    let description: Option<String> = row.get(2)?;
    let status: Option<String> = row.get(3)?;
    let created_at: String = row.get(4)?;

    Ok(Task {
        id,
        title,
        description: description.unwrap_or_default(),
        status: status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
        created_at: parse_datetime(&created_at)?,
    })
}

/// Parse a datetime in SQLite CURRENT_TIMESTAMP format (YYYY-MM-DD HH:MM:SS, UTC).
fn parse_datetime(s: &str) -> rusqlite::Result<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|dt| dt.and_utc())
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })
}
