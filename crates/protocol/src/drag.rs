//! Drag-and-drop transfer data.
//!
//! A drag carries one thing: the plain-text identifier of the task being
//! dragged. The receiving column parses it back and must check that the
//! task still exists before acting on it.

use std::str::FromStr;

use crate::error::{ProtocolError, Result};
use crate::task::TaskId;

/// The plain-text payload stored when a card starts being dragged.
///
/// # Examples
///
/// ```
/// use todo_protocol::{DragPayload, TaskId};
///
/// let id = TaskId::new_v4();
/// let payload = DragPayload::from_task(id);
/// assert_eq!(payload.task_id().unwrap(), id);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload(String);

impl DragPayload {
    /// Wraps arbitrary text, as received from a drop.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Creates the payload for dragging the given task.
    #[must_use]
    pub fn from_task(id: TaskId) -> Self {
        Self(id.to_string())
    }

    /// Returns the raw text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the payload back into a task identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::InvalidDragPayload`] if the text is not a
    /// task identifier.
    pub fn task_id(&self) -> Result<TaskId> {
        TaskId::from_str(self.0.trim()).map_err(|source| ProtocolError::InvalidDragPayload {
            payload: self.0.clone(),
            source,
        })
    }
}
