//! Task-related types for the to-do board.
//!
//! This module defines the task identifier, the closed set of statuses a
//! task can be in, and the task record itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::payload::TaskPayload;

/// Unique identifier for a task.
///
/// Uses UUID v4, assigned once at creation and never changed.
pub type TaskId = uuid::Uuid;

/// The status of a task, which is also the board column it lives in.
///
/// The order of the variants is the order of the columns on the board and
/// the order [`TaskStatus::next`] cycles through.
///
/// # Examples
///
/// ```
/// use todo_protocol::TaskStatus;
///
/// let status = TaskStatus::Doing;
/// assert_eq!(status.display_name(), "Doing");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not started yet.
    #[default]
    ToDo,
    /// Being worked on.
    Doing,
    /// Finished.
    Done,
}

impl TaskStatus {
    /// Returns all statuses in column order.
    ///
    /// # Examples
    ///
    /// ```
    /// use todo_protocol::TaskStatus;
    ///
    /// let all = TaskStatus::all();
    /// assert_eq!(all.len(), 3);
    /// assert_eq!(all[0], TaskStatus::ToDo);
    /// ```
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::ToDo, Self::Doing, Self::Done]
    }

    /// Returns the human-readable column name.
    ///
    /// # Examples
    ///
    /// ```
    /// use todo_protocol::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::ToDo.display_name(), "To Do");
    /// assert_eq!(TaskStatus::Done.display_name(), "Done");
    /// ```
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::Doing => "Doing",
            Self::Done => "Done",
        }
    }

    /// Returns the zero-based column index of this status.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::ToDo => 0,
            Self::Doing => 1,
            Self::Done => 2,
        }
    }

    /// Returns the status at the given column index, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use todo_protocol::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::from_index(1), Some(TaskStatus::Doing));
    /// assert_eq!(TaskStatus::from_index(3), None);
    /// ```
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::ToDo),
            1 => Some(Self::Doing),
            2 => Some(Self::Done),
            _ => None,
        }
    }

    /// Returns the status a task advances to, wrapping from `Done` back to
    /// `ToDo`.
    ///
    /// # Examples
    ///
    /// ```
    /// use todo_protocol::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::ToDo.next(), TaskStatus::Doing);
    /// assert_eq!(TaskStatus::Doing.next(), TaskStatus::Done);
    /// assert_eq!(TaskStatus::Done.next(), TaskStatus::ToDo);
    /// ```
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::ToDo => Self::Doing,
            Self::Doing => Self::Done,
            Self::Done => Self::ToDo,
        }
    }

    /// Returns the status of the column to the left, if any.
    #[must_use]
    pub const fn left(self) -> Option<Self> {
        match self {
            Self::ToDo => None,
            Self::Doing => Some(Self::ToDo),
            Self::Done => Some(Self::Doing),
        }
    }

    /// Returns the status of the column to the right, if any.
    #[must_use]
    pub const fn right(self) -> Option<Self> {
        match self {
            Self::ToDo => Some(Self::Doing),
            Self::Doing => Some(Self::Done),
            Self::Done => None,
        }
    }

    /// Returns `true` for the `Done` status.
    #[must_use]
    pub const fn is_done(self) -> bool {
        matches!(self, Self::Done)
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A task on the board.
///
/// Whether a task is completed is not stored: it is always derived from
/// its status, see [`Task::is_completed`].
///
/// # Examples
///
/// ```
/// use todo_protocol::{Task, TaskPayload, TaskStatus};
///
/// let task = Task::new(TaskPayload::normalized("Write docs", "", TaskStatus::Done));
/// assert!(task.is_completed());
/// assert!(task.description.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier for this task.
    pub id: TaskId,
    /// Short summary of the task.
    pub title: String,
    /// Optional details; never an empty string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Column the task currently belongs to.
    pub status: TaskStatus,
    /// When this task was created.
    pub created_at: DateTime<Utc>,
    /// When this task was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a task with a fresh identifier from a form payload.
    #[must_use]
    pub fn new(payload: TaskPayload) -> Self {
        Self::with_id(TaskId::new_v4(), payload)
    }

    /// Creates a task with a specific identifier.
    ///
    /// Useful for tests that need a stable id.
    #[must_use]
    pub fn with_id(id: TaskId, payload: TaskPayload) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: payload.title,
            description: payload.description,
            status: payload.status,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns `true` when the task is in the `Done` column.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.status.is_done()
    }

    /// Replaces the editable fields with those of `payload`.
    ///
    /// The identifier and creation time are preserved.
    pub fn apply(&mut self, payload: TaskPayload) {
        self.title = payload.title;
        self.description = payload.description;
        self.status = payload.status;
        self.updated_at = Utc::now();
    }

    /// Moves the task to `status`.
    pub fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Returns the editable fields as a payload, e.g. to seed an edit form.
    #[must_use]
    pub fn to_payload(&self) -> TaskPayload {
        TaskPayload {
            title: self.title.clone(),
            description: self.description.clone(),
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(title: &str, status: TaskStatus) -> TaskPayload {
        TaskPayload::normalized(title, "", status)
    }

    #[test]
    fn status_default_is_to_do() {
        assert_eq!(TaskStatus::default(), TaskStatus::ToDo);
    }

    #[test]
    fn status_index_roundtrip() {
        for status in TaskStatus::all() {
            assert_eq!(TaskStatus::from_index(status.index()), Some(status));
        }
    }

    #[test]
    fn status_neighbours() {
        assert_eq!(TaskStatus::ToDo.left(), None);
        assert_eq!(TaskStatus::ToDo.right(), Some(TaskStatus::Doing));
        assert_eq!(TaskStatus::Done.left(), Some(TaskStatus::Doing));
        assert_eq!(TaskStatus::Done.right(), None);
    }

    #[test]
    fn status_display_names_join() {
        let names = TaskStatus::all().map(TaskStatus::display_name).join(" • ");
        insta::assert_snapshot!(names, @"To Do • Doing • Done");
    }

    #[test]
    fn status_json_format() {
        let json = serde_json::to_string(&TaskStatus::ToDo).expect("serialize");
        assert_eq!(json, r#""to_do""#);
    }

    #[test]
    fn completed_follows_status() {
        let mut task = Task::new(payload("Task", TaskStatus::ToDo));
        assert!(!task.is_completed());

        task.set_status(TaskStatus::Done);
        assert!(task.is_completed());

        task.set_status(TaskStatus::Doing);
        assert!(!task.is_completed());
    }

    #[test]
    fn apply_preserves_identity() {
        let id = TaskId::new_v4();
        let mut task = Task::with_id(id, payload("Before", TaskStatus::ToDo));
        let created_at = task.created_at;

        task.apply(TaskPayload::normalized("After", "details", TaskStatus::Done));

        assert_eq!(task.id, id);
        assert_eq!(task.created_at, created_at);
        assert_eq!(task.title, "After");
        assert_eq!(task.description.as_deref(), Some("details"));
        assert!(task.is_completed());
    }

    #[test]
    fn set_status_updates_timestamp() {
        let mut task = Task::new(payload("Task", TaskStatus::ToDo));
        let original_updated = task.updated_at;

        std::thread::sleep(std::time::Duration::from_millis(10));
        task.set_status(TaskStatus::Doing);

        assert!(task.updated_at > original_updated);
    }

    #[test]
    fn absent_description_is_not_serialized() {
        let task = Task::new(payload("Task", TaskStatus::ToDo));
        let json = serde_json::to_string(&task).expect("serialize");
        assert!(!json.contains("description"));
    }
}
