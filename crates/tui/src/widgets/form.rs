//! Task form modal widget.
//!
//! Draws a [`FormModal`] over the board. Element positions come from
//! [`FormGeometry`] so mouse presses hit what is drawn.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};
use todo_protocol::TaskStatus;

use super::task_card::status_color;
use crate::form::{FormField, FormModal, TextInput};
use crate::layout::FormGeometry;

/// Hint under the status options.
pub const STATUS_HINT: &str = "Tip: choose which column the task goes into.";

/// Renders the form over `area`, dimming everything behind it.
///
/// Nothing is drawn while the form is closed. During the open and close
/// transitions the popup itself is dimmed and shows no cursor.
///
/// # Examples
///
/// ```
/// use std::time::Instant;
///
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use todo_config::TransitionConfig;
/// use todo_protocol::TaskStatus;
/// use todo_tui::form::{FormModal, FormProps};
/// use todo_tui::widgets::render_form_modal;
///
/// let now = Instant::now();
/// let mut form = FormModal::new(TransitionConfig::instant());
/// form.sync(&FormProps::create(TaskStatus::ToDo), now);
/// form.tick(now);
///
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
/// render_form_modal(&form, area, &mut buf);
/// ```
pub fn render_form_modal(form: &FormModal, area: Rect, buf: &mut Buffer) {
    if !form.is_mounted() {
        return;
    }

    buf.set_style(area, Style::default().add_modifier(Modifier::DIM));

    let geometry = FormGeometry::new(area);
    Clear.render(geometry.popup, buf);

    let visible = form.is_visible();
    let accent = if visible { Color::Cyan } else { Color::DarkGray };
    let mode = form.mode();

    Block::default()
        .title(Span::styled(
            format!(" {} ", mode.heading()),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent))
        .render(geometry.popup, buf);

    let label_style = Style::default().fg(Color::White);
    let muted = Style::default().fg(Color::Gray);

    render_text(mode.subtitle(), muted, geometry.subtitle, buf);
    render_text("Title *", label_style, geometry.title_label, buf);
    render_single_line(
        form.title(),
        visible && form.focus() == FormField::Title,
        geometry.title,
        buf,
    );
    if let Some(error) = form.error() {
        render_text(
            &error.to_string(),
            Style::default().fg(Color::LightRed),
            geometry.error,
            buf,
        );
    }

    render_text("Description (optional)", label_style, geometry.description_label, buf);
    render_multi_line(
        form.description(),
        visible && form.focus() == FormField::Description,
        geometry.description,
        buf,
    );

    render_text("Status", label_style, geometry.status_label, buf);
    for status in TaskStatus::all() {
        render_status_option(
            status,
            form.status() == status,
            visible && form.focus() == FormField::Status,
            geometry.status_options[status.index()],
            buf,
        );
    }
    render_text(
        STATUS_HINT,
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
        geometry.hint,
        buf,
    );

    render_button(
        "[ Cancel ]",
        visible && form.focus() == FormField::Cancel,
        Color::Gray,
        geometry.cancel,
        buf,
    );
    render_button(
        &format!("[ {} ]", mode.submit_label()),
        visible && form.focus() == FormField::Submit,
        Color::Cyan,
        geometry.submit,
        buf,
    );

    if !visible {
        buf.set_style(geometry.popup, Style::default().add_modifier(Modifier::DIM));
    }
}

fn render_text(text: &str, style: Style, area: Rect, buf: &mut Buffer) {
    Paragraph::new(Line::from(Span::styled(text, style))).render(area, buf);
}

fn input_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Gray)
    }
}

/// Number of leading chars to hide so column `col` stays inside `width`.
fn horizontal_skip(col: usize, width: u16) -> usize {
    col.saturating_sub(usize::from(width.saturating_sub(1)))
}

fn render_single_line(input: &TextInput, focused: bool, area: Rect, buf: &mut Buffer) {
    if area.is_empty() {
        return;
    }
    let style = input_style(focused);
    buf.set_style(area, style);

    let (_, col) = input.cursor_line_col();
    let skip = horizontal_skip(col, area.width);
    let shown: String = input
        .value()
        .chars()
        .skip(skip)
        .take(usize::from(area.width))
        .collect();
    buf.set_stringn(area.x, area.y, shown, usize::from(area.width), style);

    if focused {
        place_cursor(area, col - skip, 0, buf);
    }
}

fn render_multi_line(input: &TextInput, focused: bool, area: Rect, buf: &mut Buffer) {
    if area.is_empty() {
        return;
    }
    let style = input_style(focused);
    buf.set_style(area, style);

    let (line, col) = input.cursor_line_col();
    let first = line.saturating_sub(usize::from(area.height - 1));
    let skip = horizontal_skip(col, area.width);

    for (row, text) in input
        .value()
        .split('\n')
        .skip(first)
        .take(usize::from(area.height))
        .enumerate()
    {
        let shown: String = text.chars().skip(skip).collect();
        let y = area.y + u16::try_from(row).unwrap_or(u16::MAX);
        buf.set_stringn(area.x, y, shown, usize::from(area.width), style);
    }

    if focused {
        place_cursor(area, col - skip, line - first, buf);
    }
}

/// Draws the cursor as a reversed cell.
fn place_cursor(area: Rect, col: usize, row: usize, buf: &mut Buffer) {
    let (Ok(dx), Ok(dy)) = (u16::try_from(col), u16::try_from(row)) else {
        return;
    };
    if dx >= area.width || dy >= area.height {
        return;
    }
    if let Some(cell) = buf.cell_mut((area.x + dx, area.y + dy)) {
        cell.set_style(Style::default().add_modifier(Modifier::REVERSED));
    }
}

fn render_status_option(
    status: TaskStatus,
    selected: bool,
    focused: bool,
    area: Rect,
    buf: &mut Buffer,
) {
    let marker = if selected { "(•)" } else { "( )" };
    let mut style = Style::default().fg(status_color(status));
    if selected {
        style = style.add_modifier(Modifier::BOLD);
        if focused {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
    }
    render_text(&format!("{marker} {}", status.display_name()), style, area, buf);
}

fn render_button(label: &str, focused: bool, color: Color, area: Rect, buf: &mut Buffer) {
    let style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color)
    };
    Paragraph::new(Line::from(Span::styled(label, style)))
        .right_aligned()
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;
    use crate::form::FormProps;
    use crate::test_utils::buffer_to_string;
    use todo_config::TransitionConfig;
    use todo_protocol::{Message, Task, TaskPayload};

    fn visible_form(props: &FormProps) -> FormModal {
        let now = Instant::now();
        let mut form = FormModal::new(TransitionConfig::instant());
        form.sync(props, now);
        form.tick(now);
        form
    }

    fn render(form: &FormModal) -> (Buffer, String) {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        render_form_modal(form, area, &mut buf);
        let content = buffer_to_string(&buf);
        (buf, content)
    }

    #[test]
    fn closed_form_draws_nothing() {
        let form = FormModal::new(TransitionConfig::default());
        let (_, content) = render(&form);
        assert!(content.trim().is_empty());
    }

    #[test]
    fn create_form_shows_labels_and_buttons() {
        let form = visible_form(&FormProps::create(TaskStatus::Doing));
        let (_, content) = render(&form);

        assert!(content.contains("New task"));
        assert!(content.contains("Fill in the details and add it to your board."));
        assert!(content.contains("Title *"));
        assert!(content.contains("Description (optional)"));
        assert!(content.contains("(•) Doing"));
        assert!(content.contains("( ) To Do"));
        assert!(content.contains(STATUS_HINT));
        assert!(content.contains("[ Cancel ]"));
        assert!(content.contains("[ Create task ]"));
    }

    #[test]
    fn edit_form_is_prefilled() {
        let task = Task::new(TaskPayload::normalized("Pay rent", "Before Friday", TaskStatus::Done));
        let form = visible_form(&FormProps::edit(&task));
        let (_, content) = render(&form);

        assert!(content.contains("Edit task"));
        assert!(content.contains("Pay rent"));
        assert!(content.contains("Before Friday"));
        assert!(content.contains("(•) Done"));
        assert!(content.contains("[ Save changes ]"));
    }

    #[test]
    fn error_shown_only_once_touched() {
        let mut form = visible_form(&FormProps::create(TaskStatus::ToDo));
        let (_, content) = render(&form);
        assert!(!content.contains("Title is required."));

        form.handle(&Message::FormSubmit);
        let (_, content) = render(&form);
        assert!(content.contains("Title is required."));

        for ch in "ab".chars() {
            form.handle(&Message::FormInput { ch });
        }
        let (_, content) = render(&form);
        assert!(content.contains("Use at least 3 characters."));
    }

    #[test]
    fn typing_alone_shows_no_error() {
        let mut form = visible_form(&FormProps::create(TaskStatus::ToDo));
        form.handle(&Message::FormInput { ch: 'a' });
        let (_, content) = render(&form);
        assert!(!content.contains("Use at least 3 characters."));

        form.handle(&Message::FormSubmit);
        let (_, content) = render(&form);
        assert!(content.contains("Use at least 3 characters."));
    }

    #[test]
    fn cursor_drawn_in_focused_title() {
        let mut form = visible_form(&FormProps::create(TaskStatus::ToDo));
        form.handle(&Message::FormInput { ch: 'a' });
        let (buf, _) = render(&form);

        // Title input starts at (12, 7); the cursor sits after "a".
        let cell = buf.cell((13, 7)).expect("cell should exist");
        assert!(cell.modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn description_lines_render_separately() {
        let mut form = visible_form(&FormProps::create(TaskStatus::ToDo));
        form.handle(&Message::FormNextField);
        for ch in "one".chars() {
            form.handle(&Message::FormInput { ch });
        }
        form.handle(&Message::FormEnter);
        for ch in "two".chars() {
            form.handle(&Message::FormInput { ch });
        }
        let (_, content) = render(&form);

        let lines: Vec<&str> = content.lines().collect();
        assert!(lines[10].contains("one"));
        assert!(lines[11].contains("two"));
    }

    #[test]
    fn opening_form_is_dimmed() {
        let now = Instant::now();
        let mut form = FormModal::new(TransitionConfig::default());
        form.sync(&FormProps::create(TaskStatus::ToDo), now);

        let (buf, content) = render(&form);
        assert!(content.contains("New task"));
        let cell = buf.cell((40, 4)).expect("cell should exist");
        assert!(cell.modifier.contains(Modifier::DIM));
    }
}
