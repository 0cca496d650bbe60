//! Shared application state.
//!
//! The state is cloned for each request handler. The only shared resource
//! is the task repository trait object; handlers themselves are stateless
//! across requests.

use std::sync::Arc;

use taskman_core::storage::TaskRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Task repository backing the CRUD handlers.
    pub task_repo: Arc<dyn TaskRepository>,
}

impl AppState {
    /// Creates a new AppState over the given repository.
    pub fn new(task_repo: Arc<dyn TaskRepository>) -> Self {
        Self { task_repo }
    }
}
