//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages. Keys mean different things depending on what
//! has the input, see [`InputMode`].

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use todo_protocol::Message;

/// Longest time the run loop waits for an event before redrawing.
pub const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Which component keyboard input goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Board navigation and card actions.
    #[default]
    Board,
    /// A card is grabbed and being moved with the keyboard.
    Dragging,
    /// The task form is open.
    Form,
}

/// Polls for a terminal event, waiting at most `timeout`.
///
/// Returns `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts an event (keyboard or mouse) to an application message.
///
/// Key releases and repeats reported by some terminals are ignored.
#[must_use]
pub fn event_to_message(event: &Event, mode: InputMode) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => match mode {
            InputMode::Board => key_to_message(*key),
            InputMode::Dragging => key_to_drag_message(*key),
            InputMode::Form => key_to_form_message(*key),
        },
        Event::Mouse(mouse) => mouse_to_message(mouse),
        _ => None,
    }
}

/// Converts a mouse event to an application message.
///
/// Only the left button is handled: press, drag and release.
#[must_use]
fn mouse_to_message(mouse: &MouseEvent) -> Option<Message> {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Message::MouseDown { column, row }),
        MouseEventKind::Drag(MouseButton::Left) => Some(Message::MouseDrag { column, row }),
        MouseEventKind::Up(MouseButton::Left) => Some(Message::MouseUp { column, row }),
        _ => None,
    }
}

fn is_ctrl(key: &KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(ch)
}

/// Converts a key event on the board to an application message.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Esc` | Escape (clear selection) |
/// | `←` `→` `↑` `↓` | Navigate |
/// | `a` | Add a task to the focused column |
/// | `e` | Edit the selected task |
/// | `x` or `Delete` | Delete the selected task |
/// | `Enter` or `Space` | Advance the selected task's status |
/// | `m` | Grab the selected task to move it |
/// | `?` | Toggle help |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    if is_ctrl(&key, 'c') {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Esc => Some(Message::Escape),

        KeyCode::Left => Some(Message::NavigateLeft),
        KeyCode::Right => Some(Message::NavigateRight),
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),

        KeyCode::Char('a') => Some(Message::AddTask),
        KeyCode::Char('e') => Some(Message::EditTask),
        KeyCode::Char('x') | KeyCode::Delete => Some(Message::DeleteTask),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Message::AdvanceStatus),
        KeyCode::Char('m') => Some(Message::GrabTask),
        KeyCode::Char('?') => Some(Message::ToggleHelp),

        _ => None,
    }
}

/// Converts a key event while a card is grabbed.
///
/// # Key Bindings (Dragging)
///
/// | Key | Action |
/// |-----|--------|
/// | `←` `→` | Hover the neighbouring column |
/// | `Enter`, `Space` or `m` | Drop |
/// | `Esc` | Cancel the move |
#[must_use]
pub fn key_to_drag_message(key: KeyEvent) -> Option<Message> {
    if is_ctrl(&key, 'c') {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Left => Some(Message::NavigateLeft),
        KeyCode::Right => Some(Message::NavigateRight),
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('m') => Some(Message::DropTask),
        KeyCode::Esc => Some(Message::Escape),
        _ => None,
    }
}

/// Converts a key event while the task form is open.
///
/// # Key Bindings (Form)
///
/// | Key | Action |
/// |-----|--------|
/// | `Tab` / `Shift+Tab` | Next / previous field |
/// | `Enter` | Depends on the field (newline in the description) |
/// | `Ctrl+S` | Submit from any field |
/// | `Esc` | Cancel |
/// | `←` `→` | Move the cursor, or change the status |
/// | `Backspace` / `Delete` | Delete before / under the cursor |
/// | Any char | Input |
#[must_use]
pub fn key_to_form_message(key: KeyEvent) -> Option<Message> {
    if is_ctrl(&key, 'c') {
        return Some(Message::Quit);
    }
    if is_ctrl(&key, 's') {
        return Some(Message::FormSubmit);
    }

    match key.code {
        KeyCode::Esc => Some(Message::FormCancel),
        KeyCode::Tab => Some(Message::FormNextField),
        KeyCode::BackTab => Some(Message::FormPrevField),
        KeyCode::Enter => Some(Message::FormEnter),
        KeyCode::Backspace => Some(Message::FormBackspace),
        KeyCode::Delete => Some(Message::FormDelete),
        KeyCode::Left => Some(Message::FormCursorLeft),
        KeyCode::Right => Some(Message::FormCursorRight),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Message::FormInput { ch })
        }
        _ => None,
    }
}
