use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status assigned to a task when none is supplied.
pub const DEFAULT_STATUS: &str = "pending";

/// A persisted task record.
///
/// `id` and `created_at` are assigned by the store at insert time and never
/// change afterwards. `status` is a free-form string — the service does not
/// enforce an enum of allowed values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a new task, with defaults already applied.
///
/// `description` defaults to the empty string and `status` to
/// [`DEFAULT_STATUS`]. The caller is responsible for rejecting an empty
/// title before constructing a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub status: String,
}

impl TaskDraft {
    /// Creates a draft with the given title and default description/status.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            status: DEFAULT_STATUS.to_string(),
        }
    }

    /// Sets the description for this draft.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the status for this draft.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }
}
