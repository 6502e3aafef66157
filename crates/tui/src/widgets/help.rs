//! Help overlay widget.
//!
//! This module provides the help overlay that lists the keybindings
//! when the user presses `?`.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::layout::centered_rect;

/// The width of the help overlay panel.
const HELP_WIDTH: u16 = 40;

/// Keybindings, grouped by section.
const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Board",
        &[
            ("← →", "Switch column"),
            ("↑ ↓", "Select card"),
            ("Esc", "Clear selection"),
        ],
    ),
    (
        "Tasks",
        &[
            ("a", "Add to column"),
            ("e", "Edit task"),
            ("Enter", "Advance status"),
            ("m", "Move (← → then Enter)"),
            ("x", "Delete task"),
            ("Mouse", "Click buttons, drag cards"),
        ],
    ),
    (
        "Form",
        &[
            ("Tab", "Next field"),
            ("Ctrl+S", "Save"),
            ("Esc", "Cancel"),
        ],
    ),
    ("General", &[("?", "Toggle help"), ("Ctrl+C", "Quit")]),
];

/// Renders a centered help overlay listing all keybindings.
///
/// The area behind the popup is cleared first so the board does not show
/// through.
///
/// # Layout
///
/// ```text
/// ╭ Help ────────────────────────────────╮
/// │                                      │
/// │  Board                               │
/// │  ← →       Switch column             │
/// │  ...                                 │
/// │                                      │
/// │  Press any key to close              │
/// ╰──────────────────────────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use todo_tui::widgets::render_help_overlay;
///
/// let area = Rect::new(0, 0, 80, 30);
/// let mut buf = Buffer::empty(area);
///
/// render_help_overlay(area, &mut buf);
/// ```
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let lines = build_help_lines();
    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    let popup_area = centered_rect(HELP_WIDTH, height, area);

    Clear.render(popup_area, buf);

    let help_block = Block::default()
        .title(Span::styled(
            " Help ",
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightYellow));

    Paragraph::new(lines)
        .block(help_block)
        .alignment(Alignment::Left)
        .render(popup_area, buf);
}

/// Builds the lines of help content.
fn build_help_lines() -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Green);
    let text_style = Style::default().fg(Color::White);
    let hint_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    let mut lines = Vec::new();
    for (section, bindings) in SECTIONS {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(format!("  {section}"), header_style)));
        for (key, action) in *bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<10}"), key_style),
                Span::styled(*action, text_style),
            ]));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  Press any key to close", hint_style)));
    lines
}
