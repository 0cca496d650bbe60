use serde::Deserialize;

use taskman_core::task::{Task, TaskDraft};

/// Request payload for creating a new task.
///
/// `title` is optional at the serde level so an absent field reaches the
/// handler as `None` and produces the domain-level 400 instead of a
/// deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CreateTask {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl CreateTask {
    /// Converts the request into an insert draft with defaults applied.
    ///
    /// Returns `None` when the title is absent or empty. This is a presence
    /// check only; whitespace-only titles are accepted.
    pub fn into_draft(self) -> Option<TaskDraft> {
        let title = self.title.filter(|t| !t.is_empty())?;

        let mut draft = TaskDraft::new(title);
        if let Some(description) = self.description {
            draft = draft.with_description(description);
        }
        if let Some(status) = self.status {
            draft = draft.with_status(status);
        }
        Some(draft)
    }
}

/// Request payload for updating a task.
///
/// Every field is optional; fields left out of the request retain the value
/// already persisted. The patch is applied against the fetched record, so
/// the title is not re-validated on update.
#[derive(Debug, Deserialize)]
pub struct UpdateTask {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl UpdateTask {
    /// Applies the patch to an existing task.
    pub fn apply_to(self, task: &mut Task) {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(description) = self.description {
            task.description = description;
        }
        if let Some(status) = self.status {
            task.status = status;
        }
    }
}
