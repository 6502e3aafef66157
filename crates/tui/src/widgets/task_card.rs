//! Task card rendering widget.
//!
//! A card shows the task title, the first line of its description, and
//! the action buttons on its bottom border. The border color follows the
//! task's status.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use todo_protocol::{Task, TaskStatus};

use crate::layout::{CardAction, card_action_areas};

/// Returns the color associated with a task status.
///
/// # Examples
///
/// ```
/// use ratatui::style::Color;
/// use todo_protocol::TaskStatus;
/// use todo_tui::widgets::status_color;
///
/// assert_eq!(status_color(TaskStatus::ToDo), Color::Gray);
/// assert_eq!(status_color(TaskStatus::Doing), Color::LightBlue);
/// assert_eq!(status_color(TaskStatus::Done), Color::Green);
/// ```
#[must_use]
pub const fn status_color(status: TaskStatus) -> Color {
    match status {
        TaskStatus::ToDo => Color::Gray,
        TaskStatus::Doing => Color::LightBlue,
        TaskStatus::Done => Color::Green,
    }
}

/// Brighter variant of [`status_color`] for the selected card.
const fn status_color_bright(status: TaskStatus) -> Color {
    match status {
        TaskStatus::ToDo => Color::White,
        TaskStatus::Doing => Color::LightCyan,
        TaskStatus::Done => Color::LightGreen,
    }
}

/// How a card is drawn relative to the rest of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardHighlight {
    /// The card is the selected one in the focused column.
    pub selected: bool,
    /// The card is being dragged.
    pub dragging: bool,
}

/// Renders a task card to the buffer.
///
/// # Layout
///
/// ```text
/// ┌──────────────────────┐
/// │Write release notes   │
/// │Summarize the changes │
/// └──────────[→]─[e]─[x]─┘
/// ```
///
/// Completed tasks are muted with a crossed-out title. The description row
/// stays blank when the task has none.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use todo_protocol::{Task, TaskPayload, TaskStatus};
/// use todo_tui::widgets::{CardHighlight, render_task_card};
///
/// let task = Task::new(TaskPayload::normalized("Write docs", "", TaskStatus::ToDo));
/// let area = Rect::new(0, 0, 24, 4);
/// let mut buf = Buffer::empty(area);
///
/// render_task_card(&task, CardHighlight::default(), area, &mut buf);
/// ```
pub fn render_task_card(task: &Task, highlight: CardHighlight, area: Rect, buf: &mut Buffer) {
    if area.width < 4 || area.height < 3 {
        return;
    }

    let completed = task.is_completed();
    let border_color = if highlight.dragging {
        Color::Yellow
    } else if highlight.selected {
        status_color_bright(task.status)
    } else {
        status_color(task.status)
    };

    let mut title_style = if completed {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(Color::White)
    };
    if highlight.selected {
        title_style = title_style.add_modifier(Modifier::BOLD);
    }
    let desc_style = Style::default().fg(Color::DarkGray);

    let inner_width = usize::from(area.width.saturating_sub(2));
    let description = task
        .description
        .as_deref()
        .and_then(|text| text.lines().next())
        .map(|line| truncate_string(line, inner_width))
        .unwrap_or_default();

    let content = vec![
        Line::from(Span::styled(
            truncate_string(&task.title, inner_width),
            title_style,
        )),
        Line::from(Span::styled(description, desc_style)),
    ];

    let mut border_style = Style::default().fg(border_color);
    if highlight.dragging {
        border_style = border_style.add_modifier(Modifier::BOLD);
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    Paragraph::new(content).block(block).render(area, buf);
    render_actions(completed, highlight.selected, area, buf);
}

/// Draws the action buttons over the bottom border.
fn render_actions(completed: bool, selected: bool, area: Rect, buf: &mut Buffer) {
    let Some(actions) = card_action_areas(area) else {
        return;
    };

    for (action, rect) in actions {
        let color = match action {
            CardAction::Advance if completed => Color::Green,
            CardAction::Delete if selected => Color::LightRed,
            _ if selected => Color::White,
            _ => Color::DarkGray,
        };
        buf.set_string(
            rect.x,
            rect.y,
            action.label(completed),
            Style::default().fg(color),
        );
    }
}

/// Truncates a string to fit within a given width, adding ellipsis if needed.
fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width > 3 {
        let truncated: String = s.chars().take(max_width - 3).collect();
        format!("{truncated}...")
    } else {
        s.chars().take(max_width).collect()
    }
}
