mod task;

pub use task::{CreateTask, UpdateTask};
