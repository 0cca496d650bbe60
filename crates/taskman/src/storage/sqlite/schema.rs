//! SQLite schema definitions and SQL query constants.
//!
//! All SQL statements used by the SQLite repository live here, following
//! the Functional Core pattern - pure data, no I/O.

/// SQL statement to create the tasks table.
///
/// Idempotent: safe to run on every process start.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT,
    status TEXT DEFAULT 'pending',
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);
"#;

pub const INSERT_TASK: &str = r#"
INSERT INTO tasks (title, description, status)
VALUES (?1, ?2, ?3)
"#;

pub const SELECT_TASK_BY_ID: &str = r#"
SELECT id, title, description, status, created_at
FROM tasks
WHERE id = ?1
"#;

/// Most recent first. `id` breaks ties within the one-second resolution
/// of CURRENT_TIMESTAMP.
pub const SELECT_ALL_TASKS: &str = r#"
SELECT id, title, description, status, created_at
FROM tasks
ORDER BY created_at DESC, id DESC
"#;

pub const UPDATE_TASK: &str = r#"
UPDATE tasks
SET title = ?2, description = ?3, status = ?4
WHERE id = ?1
"#;

pub const DELETE_TASK: &str = r#"
DELETE FROM tasks
WHERE id = ?1
"#;
