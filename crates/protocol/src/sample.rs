//! Starter tasks shown on a fresh board.
//!
//! # Examples
//!
//! ```
//! use todo_protocol::TaskStatus;
//! use todo_protocol::sample::sample_store;
//!
//! let store = sample_store();
//! let groups = store.group_by_status();
//! assert_eq!(groups.len(TaskStatus::ToDo), 1);
//! assert_eq!(groups.len(TaskStatus::Doing), 1);
//! assert_eq!(groups.len(TaskStatus::Done), 1);
//! ```

use crate::payload::TaskPayload;
use crate::store::TaskStore;
use crate::task::{Task, TaskStatus};

/// Builds one starter task.
fn sample(title: &str, description: &str, status: TaskStatus) -> Task {
    Task::new(TaskPayload::normalized(title, description, status))
}

/// Returns a store seeded with one task per column.
#[must_use]
pub fn sample_store() -> TaskStore {
    TaskStore::from_tasks(vec![
        sample("Sample Task", "Description Sample Task", TaskStatus::ToDo),
        sample("Another Task", "Description Another Task", TaskStatus::Doing),
        sample("Completed Task", "Description Completed Task", TaskStatus::Done),
    ])
}
