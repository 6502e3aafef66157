//! Kanban board rendering widget.
//!
//! This module renders the three status columns side by side, using the
//! same [`BoardGeometry`] the app uses for mouse hit-testing.

use ratatui::{buffer::Buffer, layout::Rect};
use todo_protocol::{StatusGroups, TaskId, TaskStatus};

use super::column::{ColumnView, edge_color, render_column};
use crate::layout::{BoardGeometry, ColumnPosition};

/// Selection and drag state the board is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardView {
    /// The focused column.
    pub focused: TaskStatus,
    /// Selected row in the focused column.
    pub selected_row: Option<usize>,
    /// Column currently hovered by a drag.
    pub drop_target: Option<TaskStatus>,
    /// Task being dragged.
    pub dragging: Option<TaskId>,
}

impl BoardView {
    /// A board focused on `focused` with no drag in progress.
    #[must_use]
    pub fn new(focused: TaskStatus, selected_row: Option<usize>) -> Self {
        Self {
            focused,
            selected_row,
            drop_target: None,
            dragging: None,
        }
    }
}

/// Renders the complete board to the buffer.
///
/// # Layout
///
/// ```text
/// ╭─To Do (1)────┬─Doing (1)────┬─Done (1)─────╮
/// │[+ Add]       │[+ Add]       │[+ Add]       │
/// │ cards...     │ cards...     │ cards...     │
/// ╰──────────────┴──────────────┴──────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use todo_protocol::{TaskStatus, sample::sample_store};
/// use todo_tui::widgets::{BoardView, render_board};
///
/// let store = sample_store();
/// let area = Rect::new(0, 0, 90, 20);
/// let mut buf = Buffer::empty(area);
///
/// let view = BoardView::new(TaskStatus::ToDo, Some(0));
/// render_board(&store.group_by_status(), &view, area, &mut buf);
/// ```
pub fn render_board(groups: &StatusGroups<'_>, view: &BoardView, area: Rect, buf: &mut Buffer) {
    let geometry = BoardGeometry::new(area);
    let mut left_edge = None;

    for status in TaskStatus::all() {
        let is_focused = view.focused == status;
        let is_drop_target = view.drop_target == Some(status);
        let tasks: Vec<_> = groups.column(status).collect();
        let dragging = view
            .dragging
            .filter(|id| tasks.iter().any(|task| task.id == *id));

        let column = ColumnView {
            status,
            tasks,
            position: ColumnPosition::of(status.index(), TaskStatus::all().len()),
            is_focused,
            selected: if is_focused { view.selected_row } else { None },
            is_drop_target,
            left_edge,
            dragging,
        };
        render_column(&column, geometry.column(status).area, buf);

        left_edge = edge_color(is_focused, is_drop_target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::column::DROP_TARGET_COLOR;
    use crate::test_utils::buffer_to_string;
    use todo_protocol::{TaskPayload, TaskStore};

    #[test]
    fn render_empty_board() {
        let store = TaskStore::new();
        let area = Rect::new(0, 0, 90, 20);
        let mut buf = Buffer::empty(area);

        render_board(
            &store.group_by_status(),
            &BoardView::new(TaskStatus::ToDo, None),
            area,
            &mut buf,
        );

        let content = buffer_to_string(&buf);
        assert!(content.contains("To Do (0)"));
        assert!(content.contains("Doing (0)"));
        assert!(content.contains("Done (0)"));
        assert_eq!(content.matches("No tasks").count(), 3);
    }

    #[test]
    fn render_board_groups_tasks_by_status() {
        let mut store = TaskStore::new();
        store.create(TaskPayload::normalized("First", "", TaskStatus::ToDo));
        store.create(TaskPayload::normalized("Second", "", TaskStatus::ToDo));
        store.create(TaskPayload::normalized("Third", "", TaskStatus::Done));

        let area = Rect::new(0, 0, 90, 20);
        let mut buf = Buffer::empty(area);
        render_board(
            &store.group_by_status(),
            &BoardView::new(TaskStatus::ToDo, Some(0)),
            area,
            &mut buf,
        );

        let content = buffer_to_string(&buf);
        assert!(content.contains("To Do (2)"));
        assert!(content.contains("Doing (0)"));
        assert!(content.contains("Done (1)"));
        assert!(content.contains("Third"));
    }

    #[test]
    fn drop_target_column_is_highlighted() {
        let store = TaskStore::new();
        let area = Rect::new(0, 0, 90, 20);
        let mut buf = Buffer::empty(area);
        let view = BoardView {
            drop_target: Some(TaskStatus::Done),
            ..BoardView::new(TaskStatus::ToDo, None)
        };

        render_board(&store.group_by_status(), &view, area, &mut buf);

        // Done starts at x = 60; its top border picks up the highlight.
        let cell = buf.cell((85, 0)).expect("cell should exist");
        assert_eq!(cell.fg, DROP_TARGET_COLOR);
    }

    #[test]
    fn render_board_narrow_terminal() {
        let store = TaskStore::new();
        let area = Rect::new(0, 0, 30, 10);
        let mut buf = Buffer::empty(area);

        // Should not panic with small area
        render_board(
            &store.group_by_status(),
            &BoardView::new(TaskStatus::Doing, None),
            area,
            &mut buf,
        );
    }
}
