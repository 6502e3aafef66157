//! Task form modal state.
//!
//! The form is controlled by the [`App`](crate::App): the app owns the
//! [`FormProps`] (open or not, create or edit, seed values) and hands them
//! to [`FormModal::sync`] whenever they change. The modal owns everything
//! that only lives for one open session: field values, focus, the
//! `touched` flag, and its open/close transition.
//!
//! # Phases
//!
//! ```text
//! Closed ──open──▶ Opening ──enter delay──▶ Visible
//!   ▲                                          │
//!   └──exit delay── Closing ◀──────close───────┘
//! ```
//!
//! Each timed phase stores its own deadline, so re-syncing into another
//! phase drops the pending one. [`FormModal::tick`] fires only the current
//! deadline. Input is accepted only while [`FormPhase::Visible`].

use std::time::{Duration, Instant};

use todo_config::TransitionConfig;
use todo_protocol::{Message, Task, TaskId, TaskPayload, TaskStatus, ValidationError, validate_title};
use tracing::debug;

/// Whether the form creates a new task or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    /// Submitting creates a task.
    #[default]
    Create,
    /// Submitting updates the task with this id.
    Edit(TaskId),
}

impl FormMode {
    /// Returns the popup heading.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Create => "New task",
            Self::Edit(_) => "Edit task",
        }
    }

    /// Returns the line shown under the heading.
    #[must_use]
    pub const fn subtitle(self) -> &'static str {
        match self {
            Self::Create => "Fill in the details and add it to your board.",
            Self::Edit(_) => "Update the task details.",
        }
    }

    /// Returns the submit button label.
    #[must_use]
    pub const fn submit_label(self) -> &'static str {
        match self {
            Self::Create => "Create task",
            Self::Edit(_) => "Save changes",
        }
    }
}

/// Inputs the app passes to the form.
///
/// # Examples
///
/// ```
/// use todo_protocol::TaskStatus;
/// use todo_tui::form::{FormMode, FormProps};
///
/// let props = FormProps::create(TaskStatus::Doing);
/// assert!(props.open);
/// assert_eq!(props.mode, FormMode::Create);
///
/// let closed = props.closed();
/// assert!(!closed.open);
/// assert_eq!(closed.default_status, TaskStatus::Doing);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormProps {
    /// Whether the form should be shown.
    pub open: bool,
    /// Create or edit.
    pub mode: FormMode,
    /// Status preselected when `initial_values` carries none.
    pub default_status: TaskStatus,
    /// Values the fields start with in edit mode.
    pub initial_values: Option<TaskPayload>,
}

impl FormProps {
    /// Props for creating a task in the `status` column.
    #[must_use]
    pub fn create(status: TaskStatus) -> Self {
        Self {
            open: true,
            mode: FormMode::Create,
            default_status: status,
            initial_values: None,
        }
    }

    /// Props for editing `task`, seeded with its current values.
    #[must_use]
    pub fn edit(task: &Task) -> Self {
        Self {
            open: true,
            mode: FormMode::Edit(task.id),
            default_status: task.status,
            initial_values: Some(task.to_payload()),
        }
    }

    /// Returns the same props with `open` cleared.
    #[must_use]
    pub fn closed(self) -> Self {
        Self {
            open: false,
            ..self
        }
    }
}

/// Transition phase of the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    /// Not rendered.
    #[default]
    Closed,
    /// Rendered, fading in; becomes visible at the deadline.
    Opening {
        /// When the form becomes interactive.
        visible_at: Instant,
    },
    /// Rendered and accepting input.
    Visible,
    /// Rendered, fading out; unmounts at the deadline.
    Closing {
        /// When the form stops rendering.
        closed_at: Instant,
    },
}

/// A focusable element of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    /// Single-line title input.
    #[default]
    Title,
    /// Multi-line description input.
    Description,
    /// Status selector.
    Status,
    /// Cancel button.
    Cancel,
    /// Submit button.
    Submit,
}

impl FormField {
    const ORDER: [Self; 5] = [
        Self::Title,
        Self::Description,
        Self::Status,
        Self::Cancel,
        Self::Submit,
    ];

    fn position(self) -> usize {
        Self::ORDER
            .iter()
            .position(|field| *field == self)
            .unwrap_or_default()
    }

    /// Returns the next field in tab order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    /// Returns the previous field in tab order, wrapping around.
    #[must_use]
    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Returns `true` for the text inputs.
    #[must_use]
    pub const fn is_text(self) -> bool {
        matches!(self, Self::Title | Self::Description)
    }
}

/// What the app should do after the form handled an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    /// Nothing for the app to do.
    Stay,
    /// A valid payload was submitted; the app applies it and closes the form.
    Submitted(TaskPayload),
    /// The user asked to close the form without submitting.
    Cancelled,
}

/// An editable string with a cursor.
///
/// The cursor is a byte offset that always sits on a char boundary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    /// Creates an input holding `value` with the cursor at the end.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.len();
        Self { value, cursor }
    }

    /// Returns the current text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the cursor byte offset.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Inserts a character at the cursor.
    pub fn insert(&mut self, ch: char) {
        self.value.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Deletes the character before the cursor.
    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.value.remove(prev);
            self.cursor = prev;
        }
    }

    /// Deletes the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
        }
    }

    /// Moves the cursor one character to the left.
    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    /// Moves the cursor one character to the right.
    pub fn move_right(&mut self) {
        if let Some(ch) = self.value[self.cursor..].chars().next() {
            self.cursor += ch.len_utf8();
        }
    }

    /// Returns the cursor as a zero-based (line, column) pair, in chars.
    #[must_use]
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let before = &self.value[..self.cursor];
        let line = before.matches('\n').count();
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        (line, before[line_start..].chars().count())
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.value[..self.cursor].char_indices().last().map(|(i, _)| i)
    }
}

/// State of the task form modal.
#[derive(Debug, Clone)]
pub struct FormModal {
    phase: FormPhase,
    props: FormProps,
    enter_delay: Duration,
    exit_delay: Duration,
    title: TextInput,
    description: TextInput,
    status: TaskStatus,
    focus: FormField,
    touched: bool,
}

impl FormModal {
    /// Creates a closed form using the given transition delays.
    ///
    /// [`TransitionConfig`] is `Copy`, so callers hand over
    /// `config.transitions` and keep their `Config`.
    #[must_use]
    pub fn new(transitions: TransitionConfig) -> Self {
        Self {
            phase: FormPhase::Closed,
            props: FormProps::default(),
            enter_delay: transitions.enter(),
            exit_delay: transitions.exit(),
            title: TextInput::default(),
            description: TextInput::default(),
            status: TaskStatus::default(),
            focus: FormField::default(),
            touched: false,
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Returns `true` while the form is rendered (any phase but `Closed`).
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.phase != FormPhase::Closed
    }

    /// Returns `true` while the form accepts input.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.phase == FormPhase::Visible
    }

    /// Returns the mode of the current session.
    #[must_use]
    pub fn mode(&self) -> FormMode {
        self.props.mode
    }

    /// Returns the title input.
    #[must_use]
    pub fn title(&self) -> &TextInput {
        &self.title
    }

    /// Returns the description input.
    #[must_use]
    pub fn description(&self) -> &TextInput {
        &self.description
    }

    /// Returns the selected status.
    #[must_use]
    pub fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the focused field.
    #[must_use]
    pub fn focus(&self) -> FormField {
        self.focus
    }

    /// Returns whether validation messages are shown.
    ///
    /// Only a submit attempt sets this; typing never does.
    #[must_use]
    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// Returns the title error to display, if any.
    ///
    /// Always `None` until the form is touched.
    #[must_use]
    pub fn error(&self) -> Option<ValidationError> {
        if self.touched {
            validate_title(self.title.value()).err()
        } else {
            None
        }
    }

    /// Returns the pending transition deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.phase {
            FormPhase::Opening { visible_at } => Some(visible_at),
            FormPhase::Closing { closed_at } => Some(closed_at),
            FormPhase::Closed | FormPhase::Visible => None,
        }
    }

    /// Applies new props from the app.
    ///
    /// Unchanged props are ignored. Opening props reseed every field and
    /// restart the entry transition; closing props start the exit
    /// transition if the form is open.
    pub fn sync(&mut self, props: &FormProps, now: Instant) {
        if *props == self.props {
            return;
        }
        self.props = props.clone();

        if props.open {
            self.seed();
            self.phase = FormPhase::Opening {
                visible_at: now + self.enter_delay,
            };
            debug!(mode = ?props.mode, "form opening");
        } else if matches!(self.phase, FormPhase::Opening { .. } | FormPhase::Visible) {
            self.phase = FormPhase::Closing {
                closed_at: now + self.exit_delay,
            };
            debug!("form closing");
        }
    }

    /// Fires the pending transition if its deadline has passed.
    ///
    /// Returns `true` if the phase changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.phase {
            FormPhase::Opening { visible_at } if now >= visible_at => {
                self.phase = FormPhase::Visible;
                self.focus = FormField::Title;
                true
            }
            FormPhase::Closing { closed_at } if now >= closed_at => {
                self.phase = FormPhase::Closed;
                self.touched = false;
                debug!("form closed");
                true
            }
            _ => false,
        }
    }

    /// Handles a form message.
    ///
    /// Messages are ignored unless the form is visible.
    pub fn handle(&mut self, msg: &Message) -> FormOutcome {
        if !self.is_visible() {
            return FormOutcome::Stay;
        }

        match msg {
            Message::FormInput { ch } => self.edit_text(|input| input.insert(*ch)),
            Message::FormBackspace => self.edit_text(TextInput::backspace),
            Message::FormDelete => self.edit_text(TextInput::delete),
            Message::FormCursorLeft => self.move_left(),
            Message::FormCursorRight => self.move_right(),
            Message::FormNextField => self.focus = self.focus.next(),
            Message::FormPrevField => self.focus = self.focus.prev(),
            Message::FormEnter => return self.enter(),
            Message::FormSubmit => return self.submit(),
            Message::FormCancel | Message::Escape => return self.cancel(),
            _ => {}
        }
        FormOutcome::Stay
    }

    /// Moves focus to `field`.
    pub fn focus_field(&mut self, field: FormField) {
        if self.is_visible() {
            self.focus = field;
        }
    }

    /// Selects `status` and focuses the status selector.
    pub fn select_status(&mut self, status: TaskStatus) {
        if self.is_visible() {
            self.status = status;
            self.focus = FormField::Status;
        }
    }

    /// Attempts to submit.
    ///
    /// Marks the form touched. Returns the normalized payload when the
    /// title is valid, otherwise focuses the title and stays open.
    pub fn submit(&mut self) -> FormOutcome {
        if !self.is_visible() {
            return FormOutcome::Stay;
        }
        self.touched = true;

        match validate_title(self.title.value()) {
            Ok(()) => FormOutcome::Submitted(TaskPayload::normalized(
                self.title.value(),
                self.description.value(),
                self.status,
            )),
            Err(err) => {
                debug!(%err, "form submission rejected");
                self.focus = FormField::Title;
                FormOutcome::Stay
            }
        }
    }

    /// Requests closing without a payload. Resets `touched`.
    pub fn cancel(&mut self) -> FormOutcome {
        if !self.is_visible() {
            return FormOutcome::Stay;
        }
        self.touched = false;
        FormOutcome::Cancelled
    }

    fn seed(&mut self) {
        let initial = self.props.initial_values.as_ref();
        self.title = TextInput::new(initial.map_or("", |v| v.title.as_str()));
        self.description =
            TextInput::new(initial.and_then(|v| v.description.as_deref()).unwrap_or_default());
        self.status = initial.map_or(self.props.default_status, |v| v.status);
        self.focus = FormField::Title;
        self.touched = false;
    }

    fn edit_text(&mut self, edit: impl FnOnce(&mut TextInput)) {
        match self.focus {
            FormField::Title => edit(&mut self.title),
            FormField::Description => edit(&mut self.description),
            FormField::Status | FormField::Cancel | FormField::Submit => {}
        }
    }

    fn move_left(&mut self) {
        match self.focus {
            FormField::Title => self.title.move_left(),
            FormField::Description => self.description.move_left(),
            FormField::Status => self.status = self.status.left().unwrap_or(self.status),
            FormField::Submit => self.focus = FormField::Cancel,
            FormField::Cancel => {}
        }
    }

    fn move_right(&mut self) {
        match self.focus {
            FormField::Title => self.title.move_right(),
            FormField::Description => self.description.move_right(),
            FormField::Status => self.status = self.status.right().unwrap_or(self.status),
            FormField::Cancel => self.focus = FormField::Submit,
            FormField::Submit => {}
        }
    }

    fn enter(&mut self) -> FormOutcome {
        match self.focus {
            FormField::Description => {
                self.description.insert('\n');
                FormOutcome::Stay
            }
            FormField::Cancel => self.cancel(),
            FormField::Title | FormField::Status | FormField::Submit => self.submit(),
        }
    }
}
