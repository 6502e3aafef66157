//! Header and footer around the board.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::event::InputMode;

/// Application name shown in the header.
pub const APP_TITLE: &str = "✓ Todo App";

/// Tagline under the application name.
pub const APP_SUBTITLE: &str = "Organize your tasks with focus and clarity.";

/// Right-hand side of the header.
pub const BOARD_SUMMARY: &str = "Kanban • To Do • Doing • Done";

/// Right-hand side of the footer.
pub const COPYRIGHT: &str = "© 2026 Todo App";

/// Renders the header bar.
///
/// ```text
/// ╭──────────────────────────────────────────────────────────────╮
/// │✓ Todo App                      Kanban • To Do • Doing • Done │
/// │Organize your tasks with focus and clarity.                   │
/// ╰──────────────────────────────────────────────────────────────╯
/// ```
pub fn render_header(area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    block.render(area, buf);

    let [top, bottom] = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(inner);

    Paragraph::new(Span::styled(
        APP_TITLE,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
    .render(top, buf);

    let summary = Line::from(Span::styled(
        BOARD_SUMMARY,
        Style::default().fg(Color::DarkGray),
    ))
    .right_aligned();
    // Only when it fits beside the title.
    if top.width as usize > BOARD_SUMMARY.chars().count() + APP_TITLE.chars().count() {
        summary.render(top, buf);
    }

    Paragraph::new(Span::styled(APP_SUBTITLE, Style::default().fg(Color::Gray)))
        .render(bottom, buf);
}

/// Key hints for the given input mode.
fn hints(mode: InputMode) -> &'static [(&'static str, &'static str)] {
    match mode {
        InputMode::Board => &[
            ("←→↑↓", "Navigate"),
            ("a", "Add"),
            ("e", "Edit"),
            ("Enter", "Advance"),
            ("m", "Move"),
            ("x", "Delete"),
            ("?", "Help"),
            ("Ctrl+C", "Quit"),
        ],
        InputMode::Dragging => &[
            ("←→", "Choose column"),
            ("Enter", "Drop"),
            ("Esc", "Cancel"),
        ],
        InputMode::Form => &[
            ("Tab", "Next field"),
            ("Ctrl+S", "Save"),
            ("Esc", "Cancel"),
        ],
    }
}

/// Renders the single-row footer: key hints on the left, copyright on the right.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use todo_tui::event::InputMode;
/// use todo_tui::widgets::render_footer;
///
/// let area = Rect::new(0, 0, 100, 1);
/// let mut buf = Buffer::empty(area);
///
/// render_footer(InputMode::Board, area, &mut buf);
/// ```
pub fn render_footer(mode: InputMode, area: Rect, buf: &mut Buffer) {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::White);

    let spans: Vec<Span<'_>> = hints(mode)
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(*key, key_style),
                Span::styled(format!(" {action}  "), text_style),
            ]
        })
        .collect();

    let copyright_width = u16::try_from(COPYRIGHT.chars().count()).unwrap_or(u16::MAX);
    let [left, right] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(copyright_width)]).areas(area);

    Paragraph::new(Line::from(spans)).render(left, buf);
    Paragraph::new(Span::styled(COPYRIGHT, Style::default().fg(Color::DarkGray)))
        .render(right, buf);
}
