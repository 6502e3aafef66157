//! Column rendering widget.
//!
//! A column shows one status: a header with the status name and card
//! count, an add-task trigger, and the cards below it.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};
use todo_protocol::{Task, TaskId, TaskStatus};

use super::task_card::{CardHighlight, render_task_card};
use crate::layout::{ColumnLayout, ColumnPosition, calculate_scroll_offset};

/// Border set for the first column: rounded on the left, open on the right.
const BORDER_SET_FIRST: border::Set = border::Set {
    top_left: "╭",
    top_right: "─",
    bottom_left: "╰",
    bottom_right: "─",
    vertical_left: "│",
    vertical_right: " ",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Border set for middle columns: T-connectors on the shared left edge.
const BORDER_SET_MIDDLE: border::Set = border::Set {
    top_left: "┬",
    top_right: "─",
    bottom_left: "┴",
    bottom_right: "─",
    vertical_left: "│",
    vertical_right: " ",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Border set for the last column: T-connectors on the left, rounded on the right.
const BORDER_SET_LAST: border::Set = border::Set {
    top_left: "┬",
    top_right: "╮",
    bottom_left: "┴",
    bottom_right: "╯",
    vertical_left: "│",
    vertical_right: "│",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Label of the add-task trigger.
pub const ADD_TASK_LABEL: &str = "[+ Add]";

/// Border color of a column hovered by a drag.
pub const DROP_TARGET_COLOR: Color = Color::Yellow;

/// Border color of the focused column.
pub const FOCUS_COLOR: Color = Color::Cyan;

/// Everything needed to draw one column.
#[derive(Debug, Clone)]
pub struct ColumnView<'a> {
    /// Status shown by this column.
    pub status: TaskStatus,
    /// The column's tasks, in display order.
    pub tasks: Vec<&'a Task>,
    /// Position in the horizontal layout.
    pub position: ColumnPosition,
    /// Whether this column has keyboard focus.
    pub is_focused: bool,
    /// Selected row, only meaningful when focused.
    pub selected: Option<usize>,
    /// Whether a drag is hovering over this column.
    pub is_drop_target: bool,
    /// Color for the shared left edge when the previous column is highlighted.
    pub left_edge: Option<Color>,
    /// Task currently being dragged, if it is in this column.
    pub dragging: Option<TaskId>,
}

impl ColumnView<'_> {
    /// Border color for this column, or `None` for the default.
    fn highlight(&self) -> Option<Color> {
        edge_color(self.is_focused, self.is_drop_target)
    }
}

/// Returns the color a column's right edge should take, which is the left
/// edge of the next column.
#[must_use]
pub fn edge_color(is_focused: bool, is_drop_target: bool) -> Option<Color> {
    if is_drop_target {
        Some(DROP_TARGET_COLOR)
    } else if is_focused {
        Some(FOCUS_COLOR)
    } else {
        None
    }
}

/// Renders a single column to the buffer.
///
/// # Layout
///
/// ```text
/// ╭─To Do (2)──────────
/// │[+ Add]
/// │┌──────────────────┐
/// ││Task 1            │
/// ││                  │
/// │└────[→]─[e]─[x]───┘
/// ╰────────────────────
/// ```
///
/// Empty columns show a "No tasks" placeholder under the add trigger.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use todo_protocol::TaskStatus;
/// use todo_tui::layout::ColumnPosition;
/// use todo_tui::widgets::{ColumnView, render_column};
///
/// let view = ColumnView {
///     status: TaskStatus::ToDo,
///     tasks: Vec::new(),
///     position: ColumnPosition::First,
///     is_focused: true,
///     selected: None,
///     is_drop_target: false,
///     left_edge: None,
///     dragging: None,
/// };
///
/// let area = Rect::new(0, 0, 30, 15);
/// let mut buf = Buffer::empty(area);
/// render_column(&view, area, &mut buf);
/// ```
pub fn render_column(view: &ColumnView<'_>, area: Rect, buf: &mut Buffer) {
    let highlight = view.highlight();
    let border_style = Style::default().fg(highlight.unwrap_or(Color::DarkGray));
    let title_style = match highlight {
        Some(color) => Style::default().fg(color).add_modifier(Modifier::BOLD),
        None => Style::default().fg(Color::White),
    };

    let title = format!("{} ({})", view.status.display_name(), view.tasks.len());
    let border_set = match view.position {
        ColumnPosition::First => BORDER_SET_FIRST,
        ColumnPosition::Middle => BORDER_SET_MIDDLE,
        ColumnPosition::Last => BORDER_SET_LAST,
    };

    let block = Block::default()
        .title(Span::styled(title, title_style))
        .borders(view.position.borders())
        .border_set(border_set)
        .border_style(border_style);
    block.render(area, buf);

    // The left edge is shared with the previous column, which may be the
    // highlighted one.
    if highlight.is_none()
        && let Some(color) = view.left_edge
        && area.width > 0
    {
        let edge_style = Style::default().fg(color);
        for y in area.y..area.bottom() {
            if let Some(cell) = buf.cell_mut((area.x, y)) {
                cell.set_style(edge_style);
            }
        }
    }

    let layout = ColumnLayout::new(area, view.position);
    render_add_trigger(view.is_focused, layout.add_row, buf);

    if view.tasks.is_empty() {
        render_empty_placeholder(layout.cards, buf);
        return;
    }

    let visible = layout.visible_cards();
    let offset = calculate_scroll_offset(view.selected, view.tasks.len(), visible);

    for slot in 0..visible {
        let row = offset + slot;
        let (Some(task), Some(card_area)) = (view.tasks.get(row), layout.card_slot(slot)) else {
            break;
        };
        let highlight = CardHighlight {
            selected: view.is_focused && view.selected == Some(row),
            dragging: view.dragging == Some(task.id),
        };
        render_task_card(task, highlight, card_area, buf);
    }
}

fn render_add_trigger(is_focused: bool, area: Rect, buf: &mut Buffer) {
    let style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Paragraph::new(Line::from(Span::styled(ADD_TASK_LABEL, style))).render(area, buf);
}

/// Renders a placeholder message for empty columns.
fn render_empty_placeholder(area: Rect, buf: &mut Buffer) {
    let placeholder = Paragraph::new(Line::from(Span::styled(
        "No tasks",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )));

    placeholder.render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use todo_protocol::TaskPayload;

    fn tasks(titles: &[&str], status: TaskStatus) -> Vec<Task> {
        titles
            .iter()
            .map(|title| Task::new(TaskPayload::normalized(title, "", status)))
            .collect()
    }

    fn view<'a>(status: TaskStatus, tasks: &'a [Task]) -> ColumnView<'a> {
        ColumnView {
            status,
            tasks: tasks.iter().collect(),
            position: ColumnPosition::First,
            is_focused: false,
            selected: None,
            is_drop_target: false,
            left_edge: None,
            dragging: None,
        }
    }

    #[test]
    fn render_empty_column() {
        let view = view(TaskStatus::ToDo, &[]);
        let area = Rect::new(0, 0, 20, 15);
        let mut buf = Buffer::empty(area);

        render_column(&view, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("To Do (0)"));
        assert!(content.contains(ADD_TASK_LABEL));
        assert!(content.contains("No tasks"));
    }

    #[test]
    fn render_column_with_tasks() {
        let tasks = tasks(&["Task 1", "Task 2"], TaskStatus::Doing);
        let mut view = view(TaskStatus::Doing, &tasks);
        view.position = ColumnPosition::Middle;
        view.is_focused = true;
        view.selected = Some(0);

        let area = Rect::new(0, 0, 25, 15);
        let mut buf = Buffer::empty(area);
        render_column(&view, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Doing (2)"));
        assert!(content.contains("Task 1"));
        assert!(content.contains("Task 2"));
        assert!(!content.contains("No tasks"));
    }

    #[test]
    fn scrolled_column_keeps_selection_visible() {
        let titles: Vec<String> = (0..6).map(|i| format!("Card {i}")).collect();
        let titles: Vec<&str> = titles.iter().map(String::as_str).collect();
        let tasks = tasks(&titles, TaskStatus::ToDo);
        let mut view = view(TaskStatus::ToDo, &tasks);
        view.is_focused = true;
        view.selected = Some(5);

        // Two rows of borders, one add row, two cards.
        let area = Rect::new(0, 0, 24, 11);
        let mut buf = Buffer::empty(area);
        render_column(&view, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Card 5"));
        assert!(!content.contains("Card 0"));
    }

    #[test]
    fn drop_target_border_is_yellow() {
        let mut view = view(TaskStatus::Done, &[]);
        view.is_drop_target = true;
        view.is_focused = true;

        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        render_column(&view, area, &mut buf);

        let corner = buf.cell((0, 0)).expect("cell should exist");
        assert_eq!(corner.fg, DROP_TARGET_COLOR);
    }

    #[test]
    fn left_edge_takes_neighbour_highlight() {
        let mut view = view(TaskStatus::Doing, &[]);
        view.position = ColumnPosition::Middle;
        view.left_edge = Some(FOCUS_COLOR);

        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        render_column(&view, area, &mut buf);

        let edge = buf.cell((0, 5)).expect("cell should exist");
        assert_eq!(edge.fg, FOCUS_COLOR);
        let top = buf.cell((15, 0)).expect("cell should exist");
        assert_eq!(top.fg, Color::DarkGray);
    }

    #[test]
    fn edge_color_prefers_drop_target() {
        assert_eq!(edge_color(true, true), Some(DROP_TARGET_COLOR));
        assert_eq!(edge_color(true, false), Some(FOCUS_COLOR));
        assert_eq!(edge_color(false, false), None);
    }
}
