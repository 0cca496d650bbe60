mod types;

pub use types::{Task, TaskDraft, DEFAULT_STATUS};
