//! SQLite repository implementation.
//!
//! Implements the `TaskRepository` trait from `taskman_core::storage` using
//! SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use taskman_core::storage::{RepositoryError, Result, TaskRepository};
use taskman_core::task::{Task, TaskDraft};

use super::conversions::row_to_task;
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based task repository.
///
/// One dedicated thread owns the rusqlite handle; operations are serialized
/// through it and every statement autocommits before the call returns.
pub struct SqliteTaskRepository {
    conn: Connection,
}

impl SqliteTaskRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist. The tasks
    /// table is created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let path = path.to_string();
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema. Idempotent.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl TaskRepository for SqliteTaskRepository {
    async fn list_tasks(&self) -> Result<Vec<Task>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_ALL_TASKS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_task).map_err(wrap_err)?;

                let mut tasks = Vec::new();
                for row_result in rows {
                    tasks.push(row_result.map_err(wrap_err)?);
                }
                Ok(tasks)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn get_task(&self, id: i64) -> Result<Option<Task>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_TASK_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([id], row_to_task) {
                    Ok(task) => Ok(Some(task)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn create_task(&self, draft: TaskDraft) -> Result<Task> {
        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_TASK,
                    rusqlite::params![draft.title, draft.description, draft.status],
                )
                .map_err(wrap_err)?;

                // Re-read the row so the caller gets the generated id and
                // created_at exactly as persisted.
                let id = conn.last_insert_rowid();
                conn.query_row(schema::SELECT_TASK_BY_ID, [id], row_to_task)
                    .map_err(wrap_err)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn update_task(&self, task: &Task) -> Result<()> {
        let id = task.id;
        let title = task.title.clone();
        let description = task.description.clone();
        let status = task.status.clone();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_TASK,
                        rusqlite::params![id, title, description, status],
                    )
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, id))
    }

    async fn delete_task(&self, id: i64) -> Result<()> {
        self.conn
            .call(move |conn| {
                let rows = conn.execute(schema::DELETE_TASK, [id]).map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, id))
    }
}
