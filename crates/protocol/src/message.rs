//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the application state.

use serde::{Deserialize, Serialize};

/// Messages that represent user actions in the TUI.
///
/// These messages are produced by the input handler and consumed by
/// the application's `update` function.
///
/// # Examples
///
/// ```
/// use todo_protocol::Message;
///
/// let msg = Message::NavigateRight;
/// assert!(msg.is_navigation());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Move selection to the column on the left.
    NavigateLeft,
    /// Move selection to the column on the right.
    NavigateRight,
    /// Move selection up within the current column.
    NavigateUp,
    /// Move selection down within the current column.
    NavigateDown,
    /// Open the form in create mode for the focused column.
    AddTask,
    /// Open the form in edit mode for the selected card.
    EditTask,
    /// Delete the selected card.
    DeleteTask,
    /// Advance the selected card to its next status.
    AdvanceStatus,
    /// Pick up the selected card for a keyboard drag.
    GrabTask,
    /// Drop the card being dragged onto the hovered column.
    DropTask,
    /// Escape: cancel a drag, dismiss help or clear selection (contextual).
    Escape,
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,
    /// Left mouse button pressed at (column, row).
    MouseDown {
        /// Column (x coordinate).
        column: u16,
        /// Row (y coordinate).
        row: u16,
    },
    /// Mouse moved with the left button held.
    MouseDrag {
        /// Column (x coordinate).
        column: u16,
        /// Row (y coordinate).
        row: u16,
    },
    /// Left mouse button released at (column, row).
    MouseUp {
        /// Column (x coordinate).
        column: u16,
        /// Row (y coordinate).
        row: u16,
    },
    /// Time passed; lets pending transitions fire.
    Tick,

    // --- Form messages ---
    /// Type a character into the focused field.
    FormInput {
        /// The character typed.
        ch: char,
    },
    /// Delete the character before the cursor.
    FormBackspace,
    /// Delete the character under the cursor.
    FormDelete,
    /// Move the cursor left, or pick the previous status.
    FormCursorLeft,
    /// Move the cursor right, or pick the next status.
    FormCursorRight,
    /// Focus the next field.
    FormNextField,
    /// Focus the previous field.
    FormPrevField,
    /// Enter pressed; its meaning depends on the focused field.
    FormEnter,
    /// Submit the form from any field.
    FormSubmit,
    /// Close the form without submitting.
    FormCancel,
}

impl Message {
    /// Returns `true` if this message is a navigation action.
    ///
    /// # Examples
    ///
    /// ```
    /// use todo_protocol::Message;
    ///
    /// assert!(Message::NavigateLeft.is_navigation());
    /// assert!(!Message::AddTask.is_navigation());
    /// ```
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::NavigateLeft | Self::NavigateRight | Self::NavigateUp | Self::NavigateDown
        )
    }

    /// Returns `true` if this message should terminate the application.
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }

    /// Returns `true` if this message is addressed to the form modal.
    ///
    /// # Examples
    ///
    /// ```
    /// use todo_protocol::Message;
    ///
    /// assert!(Message::FormSubmit.is_form());
    /// assert!(Message::FormInput { ch: 'a' }.is_form());
    /// assert!(!Message::Escape.is_form());
    /// ```
    #[must_use]
    pub fn is_form(&self) -> bool {
        matches!(
            self,
            Self::FormInput { .. }
                | Self::FormBackspace
                | Self::FormDelete
                | Self::FormCursorLeft
                | Self::FormCursorRight
                | Self::FormNextField
                | Self::FormPrevField
                | Self::FormEnter
                | Self::FormSubmit
                | Self::FormCancel
        )
    }

    /// Returns `true` for mouse messages.
    #[must_use]
    pub fn is_mouse(&self) -> bool {
        matches!(
            self,
            Self::MouseDown { .. } | Self::MouseDrag { .. } | Self::MouseUp { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_navigation_detection() {
        assert!(Message::NavigateLeft.is_navigation());
        assert!(Message::NavigateRight.is_navigation());
        assert!(Message::NavigateUp.is_navigation());
        assert!(Message::NavigateDown.is_navigation());
        assert!(!Message::GrabTask.is_navigation());
        assert!(!Message::Quit.is_navigation());
    }

    #[test]
    fn message_terminating_detection() {
        assert!(Message::Quit.is_terminating());
        assert!(!Message::Escape.is_terminating());
        assert!(!Message::FormCancel.is_terminating());
    }

    #[test]
    fn message_form_detection() {
        assert!(Message::FormBackspace.is_form());
        assert!(Message::FormEnter.is_form());
        assert!(Message::FormCancel.is_form());
        assert!(!Message::AddTask.is_form());
        assert!(!Message::Tick.is_form());
    }

    #[test]
    fn message_mouse_detection() {
        assert!(Message::MouseDown { column: 1, row: 2 }.is_mouse());
        assert!(Message::MouseUp { column: 1, row: 2 }.is_mouse());
        assert!(!Message::DropTask.is_mouse());
    }

    #[test]
    fn message_json_format() {
        let json = serde_json::to_string(&Message::AdvanceStatus).expect("serialize");
        assert_eq!(json, r#""advance_status""#);

        let json = serde_json::to_string(&Message::MouseDown { column: 3, row: 4 })
            .expect("serialize");
        assert_eq!(json, r#"{"mouse_down":{"column":3,"row":4}}"#);
    }
}
