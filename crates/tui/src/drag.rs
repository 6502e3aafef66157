//! Drag-and-drop state for moving cards between columns.
//!
//! A drag carries the card id as a plain-text [`DragPayload`], the same
//! way a browser drag would. It can be driven by the mouse (press on a
//! card, move, release over a column) or by the keyboard (grab, pick a
//! column, drop).
//!
//! A mouse press alone is not a drag: the drag only becomes active once
//! the pointer moves, so clicking a card just selects it.

use todo_protocol::{DragPayload, TaskId, TaskStatus};

/// What started a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragSource {
    /// Left mouse button held on a card.
    Pointer,
    /// Card grabbed with the keyboard.
    Keyboard,
}

/// An in-progress drag.
///
/// # Examples
///
/// ```
/// use todo_protocol::{TaskId, TaskStatus};
/// use todo_tui::drag::DragState;
///
/// let id = TaskId::new_v4();
/// let mut drag = DragState::keyboard(id, TaskStatus::ToDo);
/// drag.hover_right();
///
/// let (payload, target) = drag.finish().expect("hovering a column");
/// assert_eq!(payload.task_id().unwrap(), id);
/// assert_eq!(target, TaskStatus::Doing);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragState {
    payload: DragPayload,
    origin: TaskStatus,
    hover: Option<TaskStatus>,
    source: DragSource,
    active: bool,
}

impl DragState {
    /// Arms a pointer drag from a card in the `origin` column.
    ///
    /// The drag stays inactive until [`DragState::drag_over`] is called.
    #[must_use]
    pub fn pointer(id: TaskId, origin: TaskStatus) -> Self {
        Self {
            payload: DragPayload::from_task(id),
            origin,
            hover: None,
            source: DragSource::Pointer,
            active: false,
        }
    }

    /// Grabs a card with the keyboard, hovering its own column.
    #[must_use]
    pub fn keyboard(id: TaskId, origin: TaskStatus) -> Self {
        Self {
            payload: DragPayload::from_task(id),
            origin,
            hover: Some(origin),
            source: DragSource::Keyboard,
            active: true,
        }
    }

    /// Returns the transfer payload.
    #[must_use]
    pub fn payload(&self) -> &DragPayload {
        &self.payload
    }

    /// Returns the column the card was picked up from.
    #[must_use]
    pub fn origin(&self) -> TaskStatus {
        self.origin
    }

    /// Returns what started this drag.
    #[must_use]
    pub fn source(&self) -> DragSource {
        self.source
    }

    /// Returns `true` once the drag is under way.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the column to highlight as drop target, if any.
    #[must_use]
    pub fn drop_target(&self) -> Option<TaskStatus> {
        self.hover.filter(|_| self.active)
    }

    /// Moves the pointer over `status`, or off every column with `None`.
    ///
    /// Leaving all columns clears the highlight.
    pub fn drag_over(&mut self, status: Option<TaskStatus>) {
        self.active = true;
        self.hover = status;
    }

    /// Hovers the column to the left, if there is one.
    pub fn hover_left(&mut self) {
        let current = self.hover.unwrap_or(self.origin);
        self.hover = Some(current.left().unwrap_or(current));
    }

    /// Hovers the column to the right, if there is one.
    pub fn hover_right(&mut self) {
        let current = self.hover.unwrap_or(self.origin);
        self.hover = Some(current.right().unwrap_or(current));
    }

    /// Ends the drag, returning the payload and the column it dropped on.
    ///
    /// Returns `None` if the drag never became active or was released
    /// outside every column.
    #[must_use]
    pub fn finish(self) -> Option<(DragPayload, TaskStatus)> {
        let target = self.drop_target()?;
        Some((self.payload, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_drag_starts_inactive() {
        let drag = DragState::pointer(TaskId::new_v4(), TaskStatus::Doing);
        assert!(!drag.is_active());
        assert_eq!(drag.drop_target(), None);
        assert_eq!(drag.source(), DragSource::Pointer);
        assert!(drag.finish().is_none());
    }

    #[test]
    fn pointer_drag_drops_on_hovered_column() {
        let id = TaskId::new_v4();
        let mut drag = DragState::pointer(id, TaskStatus::ToDo);

        drag.drag_over(Some(TaskStatus::Done));
        assert!(drag.is_active());
        assert_eq!(drag.drop_target(), Some(TaskStatus::Done));

        let (payload, target) = drag.finish().expect("dropped on a column");
        assert_eq!(payload.as_str(), id.to_string());
        assert_eq!(target, TaskStatus::Done);
    }

    #[test]
    fn leaving_columns_clears_highlight() {
        let mut drag = DragState::pointer(TaskId::new_v4(), TaskStatus::ToDo);
        drag.drag_over(Some(TaskStatus::Doing));
        drag.drag_over(None);

        assert!(drag.is_active());
        assert_eq!(drag.drop_target(), None);
        assert!(drag.finish().is_none());
    }

    #[test]
    fn keyboard_grab_hovers_origin() {
        let drag = DragState::keyboard(TaskId::new_v4(), TaskStatus::Doing);
        assert_eq!(drag.drop_target(), Some(TaskStatus::Doing));
        assert_eq!(drag.origin(), TaskStatus::Doing);
    }

    #[test]
    fn keyboard_hover_stops_at_edges() {
        let mut drag = DragState::keyboard(TaskId::new_v4(), TaskStatus::Doing);

        drag.hover_left();
        drag.hover_left();
        assert_eq!(drag.drop_target(), Some(TaskStatus::ToDo));

        drag.hover_right();
        drag.hover_right();
        drag.hover_right();
        assert_eq!(drag.drop_target(), Some(TaskStatus::Done));
    }
}
