//! Form payloads and title validation.
//!
//! A [`TaskPayload`] is what the create/edit form hands back to the task
//! store once it has been validated and normalized.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::task::TaskStatus;

/// Minimum number of characters in a trimmed title.
pub const MIN_TITLE_CHARS: usize = 3;

/// The editable fields of a task.
///
/// Payloads built with [`TaskPayload::normalized`] have a trimmed title and
/// a description that is either `None` or non-blank.
///
/// # Examples
///
/// ```
/// use todo_protocol::{TaskPayload, TaskStatus};
///
/// let payload = TaskPayload::normalized("  Buy milk ", "   ", TaskStatus::ToDo);
/// assert_eq!(payload.title, "Buy milk");
/// assert_eq!(payload.description, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPayload {
    /// Task title.
    pub title: String,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Target column.
    pub status: TaskStatus,
}

impl TaskPayload {
    /// Builds a payload from raw form input, trimming both text fields.
    ///
    /// A description that is empty after trimming becomes `None`.
    #[must_use]
    pub fn normalized(title: &str, description: &str, status: TaskStatus) -> Self {
        let description = description.trim();
        Self {
            title: title.trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            status,
        }
    }
}

/// Checks the title rule: non-empty and at least [`MIN_TITLE_CHARS`]
/// characters once trimmed.
///
/// # Errors
///
/// Returns [`ValidationError::TitleRequired`] for a blank title and
/// [`ValidationError::TitleTooShort`] for one that is too short.
///
/// # Examples
///
/// ```
/// use todo_protocol::{ValidationError, validate_title};
///
/// assert_eq!(validate_title("  "), Err(ValidationError::TitleRequired));
/// assert_eq!(validate_title("ab"), Err(ValidationError::TitleTooShort));
/// assert!(validate_title(" abc ").is_ok());
/// ```
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        Err(ValidationError::TitleRequired)
    } else if trimmed.chars().count() < MIN_TITLE_CHARS {
        Err(ValidationError::TitleTooShort)
    } else {
        Ok(())
    }
}
