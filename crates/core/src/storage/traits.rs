use async_trait::async_trait;

use crate::task::{Task, TaskDraft};

use super::Result;

/// Repository for task operations.
///
/// Implementations own the connection lifecycle and guarantee the `tasks`
/// table exists before any operation runs. Every mutating operation is
/// committed before it returns.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Gets all tasks ordered by creation time, most recent first.
    ///
    /// An empty store yields an empty vector, not an error.
    async fn list_tasks(&self) -> Result<Vec<Task>>;

    /// Gets a task by its ID.
    async fn get_task(&self, id: i64) -> Result<Option<Task>>;

    /// Inserts a new task and returns the fully populated record,
    /// including the generated `id` and `created_at`.
    async fn create_task(&self, draft: TaskDraft) -> Result<Task>;

    /// Overwrites the mutable fields of an existing task.
    ///
    /// Returns `NotFound` (and performs no write) if the ID is absent.
    async fn update_task(&self, task: &Task) -> Result<()>;

    /// Deletes a task by its ID.
    ///
    /// Returns `NotFound` (and performs no write) if the ID is absent.
    async fn delete_task(&self, id: i64) -> Result<()>;
}
