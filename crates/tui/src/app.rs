//! Main application struct and run loop.
//!
//! This module provides the `App` struct, the root of the board. It owns the
//! task store (through [`AppState`]), the form modal and any drag in progress,
//! and it is the only place where store mutations happen.

use std::time::{Duration, Instant};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Wrap},
};
use todo_config::Config;
use todo_protocol::{DragPayload, Message, TaskId, TaskStatus, TaskStore};
use tracing::{debug, info, warn};

use crate::{
    AppState,
    drag::{DragSource, DragState},
    event::{InputMode, POLL_TIMEOUT, event_to_message, poll_event},
    form::{FormMode, FormModal, FormOutcome, FormProps},
    layout::{
        BoardGeometry, BoardHit, CardAction, FOOTER_HEIGHT, FormGeometry, FormHit, HEADER_HEIGHT,
        MIN_HEIGHT, MIN_HEIGHT_WITH_HEADER, MIN_WIDTH,
    },
    terminal::AppTerminal,
    widgets::{
        BoardView, render_board, render_footer, render_form_modal, render_header,
        render_help_overlay,
    },
};

/// Screen regions: optional header, board, footer.
fn regions(area: Rect, show_header: bool) -> (Option<Rect>, Rect, Rect) {
    let header_height = if show_header { HEADER_HEIGHT } else { 0 };
    let [header, board, footer] = Layout::vertical([
        Constraint::Length(header_height),
        Constraint::Min(0),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(area);
    (show_header.then_some(header), board, footer)
}

/// The main application struct.
///
/// Manages the application state and provides the main event loop.
#[derive(Debug)]
pub struct App {
    state: AppState,
    should_quit: bool,
    /// Last known terminal area, used for click hit-testing.
    last_area: Rect,
    /// Whether the header was shown in the last render (affects click hit-testing).
    header_visible: bool,
    /// The task form modal.
    form: FormModal,
    /// Props last handed to the form.
    form_props: FormProps,
    /// Card being dragged, if any.
    drag: Option<DragState>,
    /// The application configuration.
    config: Config,
}

impl App {
    /// Creates a new application over `store`.
    ///
    /// # Examples
    ///
    /// ```
    /// use todo_config::Config;
    /// use todo_protocol::TaskStore;
    /// use todo_tui::App;
    ///
    /// let app = App::new(TaskStore::new(), Config::default());
    /// assert!(app.state().store.is_empty());
    /// ```
    #[must_use]
    pub fn new(store: TaskStore, config: Config) -> Self {
        Self {
            state: AppState::new(store),
            should_quit: false,
            last_area: Rect::default(),
            header_visible: true,
            form: FormModal::new(config.transitions),
            form_props: FormProps::default(),
            drag: None,
            config,
        }
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns a reference to the application configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the task form.
    #[must_use]
    pub fn form(&self) -> &FormModal {
        &self.form
    }

    /// Returns the drag in progress, if any.
    #[must_use]
    pub fn drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Returns whether the app has been asked to quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns which component keyboard input currently goes to.
    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        if self.form.is_mounted() {
            InputMode::Form
        } else if self
            .drag
            .as_ref()
            .is_some_and(|drag| drag.source() == DragSource::Keyboard)
        {
            InputMode::Dragging
        } else {
            InputMode::Board
        }
    }

    /// Returns how long the run loop may wait for input.
    ///
    /// Shortened to the form's pending transition so it fires on time.
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.form
            .next_deadline()
            .map_or(POLL_TIMEOUT, |deadline| {
                deadline.saturating_duration_since(now).min(POLL_TIMEOUT)
            })
    }

    /// Updates the application state based on a message.
    ///
    /// While the form is shown it receives every message except `Quit` and
    /// `Tick`. When the help overlay is visible, any other message dismisses
    /// it instead of its normal action.
    pub fn update(&mut self, msg: Message) {
        self.update_at(msg, Instant::now());
    }

    /// Like [`App::update`], with an explicit clock for the form transitions.
    pub fn update_at(&mut self, msg: Message, now: Instant) {
        match msg {
            Message::Quit => {
                self.should_quit = true;
                return;
            }
            Message::Tick => {
                self.form.tick(now);
                return;
            }
            _ => {}
        }

        if self.form.is_mounted() {
            self.update_form(&msg, now);
            return;
        }

        // When help is visible, most keys should dismiss it
        if self.state.help_visible {
            match msg {
                Message::ToggleHelp | Message::Escape => self.state.toggle_help(),
                _ => {
                    let _ = self.state.dismiss_help();
                }
            }
            return;
        }

        if self.drag.is_some() && self.update_drag(&msg) {
            return;
        }

        match msg {
            Message::Escape => self.state.clear_selection(),
            Message::NavigateLeft => self.state.navigate_left(),
            Message::NavigateRight => self.state.navigate_right(),
            Message::NavigateUp => self.state.navigate_up(),
            Message::NavigateDown => self.state.navigate_down(),
            Message::ToggleHelp => self.state.toggle_help(),
            Message::AddTask => {
                self.open_form(FormProps::create(self.state.selected_column), now);
            }
            Message::EditTask => {
                if let Some(id) = self.state.selected_task_id() {
                    self.edit_task(id, now);
                }
            }
            Message::DeleteTask => {
                if let Some(id) = self.state.selected_task_id() {
                    self.delete_task(id);
                }
            }
            Message::AdvanceStatus => {
                if let Some(id) = self.state.selected_task_id() {
                    self.advance_task(id);
                }
            }
            Message::GrabTask => {
                if let Some(id) = self.state.selected_task_id() {
                    debug!(%id, "grabbed task");
                    self.drag = Some(DragState::keyboard(id, self.state.selected_column));
                }
            }
            Message::MouseDown { column, row } => self.press_board(column, row, now),
            _ => {}
        }
    }

    /// Routes a message to the drag in progress.
    ///
    /// Returns `true` if the message was consumed.
    fn update_drag(&mut self, msg: &Message) -> bool {
        let board = BoardGeometry::new(self.board_area());
        let Some(drag) = self.drag.as_mut() else {
            return false;
        };

        match (drag.source(), msg) {
            (_, Message::Escape) => {
                debug!("drag cancelled");
                self.drag = None;
            }
            (DragSource::Keyboard, Message::NavigateLeft) => drag.hover_left(),
            (DragSource::Keyboard, Message::NavigateRight) => drag.hover_right(),
            (DragSource::Keyboard, Message::DropTask) => self.finish_drag(),
            (DragSource::Pointer, Message::MouseDrag { column, row }) => {
                drag.drag_over(board.status_at(*column, *row));
            }
            (DragSource::Pointer, Message::MouseUp { .. }) => self.finish_drag(),
            // A pointer drag ends with the button; anything else drops it.
            (DragSource::Pointer, _) => {
                self.drag = None;
                return false;
            }
            (DragSource::Keyboard, _) => {}
        }
        true
    }

    fn finish_drag(&mut self) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        if let Some((payload, target)) = drag.finish() {
            self.drop_payload(&payload, target);
        }
    }

    /// Applies a drop of `payload` onto the `target` column.
    ///
    /// Malformed payloads and tasks that no longer exist are logged and
    /// ignored.
    fn drop_payload(&mut self, payload: &DragPayload, target: TaskStatus) {
        match payload.task_id() {
            Ok(id) if self.state.store.contains(id) => {
                self.state.store.move_task(id, target);
                info!(%id, status = %target, "moved task");
                self.state.select_task(id);
            }
            Ok(id) => warn!(%id, "dropped task no longer exists"),
            Err(err) => warn!(%err, "ignoring drag payload"),
        }
    }

    fn press_board(&mut self, column: u16, row: u16, now: Instant) {
        let geometry = BoardGeometry::new(self.board_area());
        let (hit, task_id) = {
            let groups = self.state.store.group_by_status();
            let hit = geometry.hit(
                &groups,
                self.state.selected_column,
                self.state.selected_row,
                column,
                row,
            );
            let task_id = match hit {
                Some(BoardHit::Card { status, row, .. }) => groups.get(status, row).map(|t| t.id),
                _ => None,
            };
            (hit, task_id)
        };

        match hit {
            Some(BoardHit::AddTask(status)) => {
                self.state.select_column(status);
                self.open_form(FormProps::create(status), now);
            }
            Some(BoardHit::Card { status, row, action }) => {
                let Some(id) = task_id else {
                    return;
                };
                self.state.select(status, row);
                match action {
                    Some(CardAction::Advance) => self.advance_task(id),
                    Some(CardAction::Edit) => self.edit_task(id, now),
                    Some(CardAction::Delete) => self.delete_task(id),
                    None => self.drag = Some(DragState::pointer(id, status)),
                }
            }
            Some(BoardHit::Column(status)) => self.state.select_column(status),
            None => {}
        }
    }

    fn advance_task(&mut self, id: TaskId) {
        match self.state.store.advance_status(id) {
            Some(status) => {
                info!(%id, %status, "advanced task");
                self.state.clamp_selection();
            }
            None => debug!(%id, "advance ignored, task not found"),
        }
    }

    fn delete_task(&mut self, id: TaskId) {
        match self.state.store.delete(id) {
            Some(task) => {
                info!(%id, title = %task.title, "deleted task");
                self.state.clamp_selection();
            }
            None => debug!(%id, "delete ignored, task not found"),
        }
    }

    fn edit_task(&mut self, id: TaskId, now: Instant) {
        let Some(props) = self.state.store.get(id).map(FormProps::edit) else {
            debug!(%id, "edit ignored, task not found");
            return;
        };
        self.open_form(props, now);
    }

    fn open_form(&mut self, props: FormProps, now: Instant) {
        self.drag = None;
        self.form_props = props;
        self.form.sync(&self.form_props, now);
    }

    fn close_form(&mut self, now: Instant) {
        self.form_props = std::mem::take(&mut self.form_props).closed();
        self.form.sync(&self.form_props, now);
    }

    fn update_form(&mut self, msg: &Message, now: Instant) {
        let outcome = match msg {
            Message::MouseDown { column, row } => self.press_form(*column, *row),
            Message::MouseDrag { .. } | Message::MouseUp { .. } => FormOutcome::Stay,
            _ => self.form.handle(msg),
        };

        match outcome {
            FormOutcome::Stay => {}
            FormOutcome::Cancelled => self.close_form(now),
            FormOutcome::Submitted(payload) => {
                let id = match self.form.mode() {
                    FormMode::Create => {
                        let id = self.state.store.create(payload);
                        info!(%id, "created task");
                        id
                    }
                    FormMode::Edit(id) => {
                        if self.state.store.update(id, payload) {
                            info!(%id, "updated task");
                        } else {
                            debug!(%id, "update ignored, task not found");
                        }
                        id
                    }
                };
                self.state.select_task(id);
                self.close_form(now);
            }
        }
    }

    fn press_form(&mut self, column: u16, row: u16) -> FormOutcome {
        if !self.form.is_visible() {
            return FormOutcome::Stay;
        }
        match FormGeometry::new(self.last_area).hit(column, row) {
            FormHit::Backdrop | FormHit::Cancel => self.form.cancel(),
            FormHit::Submit => self.form.submit(),
            FormHit::Field(field) => {
                self.form.focus_field(field);
                FormOutcome::Stay
            }
            FormHit::StatusOption(status) => {
                self.form.select_status(status);
                FormOutcome::Stay
            }
            FormHit::Inside => FormOutcome::Stay,
        }
    }

    /// Board area of the last render.
    fn board_area(&self) -> Rect {
        regions(self.last_area, self.header_visible).1
    }

    /// Renders the application UI to the given frame.
    ///
    /// Implements graceful degradation for small terminal sizes:
    /// - Below the minimum dimensions, shows a "terminal too small" message.
    /// - Below `MIN_HEIGHT_WITH_HEADER`, hides the header to reclaim space.
    /// - Otherwise, renders normally with header.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.last_area = area;

        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            self.header_visible = false;
            Self::render_terminal_too_small(frame, area);
            return;
        }

        let show_header = area.height >= MIN_HEIGHT_WITH_HEADER;
        self.header_visible = show_header;
        let (header, board, footer) = regions(area, show_header);
        let mode = self.input_mode();

        let active_drag = self.drag.as_ref().filter(|drag| drag.is_active());
        let view = BoardView {
            focused: self.state.selected_column,
            selected_row: self.state.selected_row,
            drop_target: active_drag.and_then(DragState::drop_target),
            dragging: active_drag.and_then(|drag| drag.payload().task_id().ok()),
        };

        let buf = frame.buffer_mut();
        if let Some(header) = header {
            render_header(header, buf);
        }
        render_board(&self.state.store.group_by_status(), &view, board, buf);
        render_footer(mode, footer, buf);
        render_form_modal(&self.form, area, buf);

        if self.state.help_visible {
            render_help_overlay(area, buf);
        }
    }

    /// Renders a message indicating the terminal is too small.
    fn render_terminal_too_small(frame: &mut Frame, area: Rect) {
        let message = format!(
            "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );

        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });

        // Center the message vertically
        let vertical_offset = area.height.saturating_sub(2) / 2;
        let centered_area = Rect {
            x: area.x,
            y: area.y + vertical_offset,
            width: area.width,
            height: area.height.saturating_sub(vertical_offset),
        };

        frame.render_widget(paragraph, centered_area);
    }

    /// Runs the main application loop.
    ///
    /// Draws, waits for input (at most until the form's next transition),
    /// updates, then ticks the form. Returns when the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use todo_config::Config;
    /// use todo_protocol::TaskStore;
    /// use todo_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(TaskStore::new(), Config::default());
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        info!(tasks = self.state.store.len(), "board started");

        loop {
            terminal.draw(|frame| self.view(frame))?;

            let timeout = self.poll_timeout(Instant::now());
            if let Some(event) = poll_event(timeout)?
                && let Some(msg) = event_to_message(&event, self.input_mode())
            {
                self.update(msg);
            }
            self.update(Message::Tick);

            if self.should_quit {
                break;
            }
        }

        info!("board closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormField;
    use crate::test_utils::buffer_to_string;
    use ratatui::{Terminal, backend::TestBackend};
    use todo_config::TransitionConfig;
    use todo_protocol::{TaskPayload, sample::sample_store};

    /// App with zero-length transitions, rendered once at 90×24.
    fn app_with(tasks: &[(&str, TaskStatus)]) -> App {
        let mut store = TaskStore::new();
        for (title, status) in tasks.iter().rev() {
            store.create(TaskPayload::normalized(title, "", *status));
        }
        let config = Config {
            transitions: TransitionConfig::instant(),
            ..Config::default()
        };
        let mut app = App::new(store, config);
        render(&mut app, 90, 24);
        app
    }

    fn render(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| app.view(frame)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    /// Sends a message and lets any zero-length transition fire.
    fn send(app: &mut App, msg: Message) {
        let now = Instant::now();
        app.update_at(msg, now);
        app.update_at(Message::Tick, now);
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            send(app, Message::FormInput { ch });
        }
    }

    fn titles(app: &App, status: TaskStatus) -> Vec<String> {
        app.state
            .store
            .group_by_status()
            .column(status)
            .map(|t| t.title.clone())
            .collect()
    }

    #[test]
    fn app_new_starts_on_first_column() {
        let app = App::new(sample_store(), Config::default());

        assert!(!app.should_quit());
        assert_eq!(app.state.selected_column, TaskStatus::ToDo);
        assert_eq!(app.input_mode(), InputMode::Board);
    }

    #[test]
    fn app_quit_message_sets_should_quit() {
        let mut app = app_with(&[]);
        app.update(Message::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn app_navigation_updates_state() {
        let mut app = app_with(&[]);

        app.update(Message::NavigateRight);
        assert_eq!(app.state.selected_column, TaskStatus::Doing);

        app.update(Message::NavigateLeft);
        assert_eq!(app.state.selected_column, TaskStatus::ToDo);
    }

    #[test]
    fn app_help_dismisses_on_any_key() {
        let mut app = app_with(&[]);

        app.update(Message::ToggleHelp);
        assert!(app.state.help_visible);

        // Navigation is swallowed by the dismissal
        app.update(Message::NavigateRight);
        assert!(!app.state.help_visible);
        assert_eq!(app.state.selected_column, TaskStatus::ToDo);

        app.update(Message::ToggleHelp);
        app.update(Message::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn app_escape_clears_selection() {
        let mut app = app_with(&[("Task 1", TaskStatus::ToDo)]);
        app.update(Message::NavigateDown);
        assert!(app.state.selected_task().is_some());

        app.update(Message::Escape);
        assert!(app.state.selected_task().is_none());
        assert!(!app.should_quit());
    }

    #[test]
    fn create_form_rejects_short_title() {
        let mut app = app_with(&[]);
        send(&mut app, Message::NavigateRight);
        send(&mut app, Message::AddTask);
        assert!(app.form.is_visible());
        assert_eq!(app.form.status(), TaskStatus::Doing);
        assert_eq!(app.input_mode(), InputMode::Form);

        type_text(&mut app, "ab");
        send(&mut app, Message::FormSubmit);
        assert!(app.form.is_visible());
        assert!(app.state.store.is_empty());
        assert!(app.form.error().is_some());

        type_text(&mut app, "c");
        send(&mut app, Message::FormSubmit);
        assert!(!app.form.is_mounted());
        assert_eq!(titles(&app, TaskStatus::Doing), vec!["abc"]);

        let task = app.state.selected_task().expect("new task selected");
        assert_eq!(task.title, "abc");
        assert!(task.description.is_none());
        assert!(!task.is_completed());
    }

    #[test]
    fn edit_form_prefills_and_updates_in_place() {
        let mut app = app_with(&[("Xyz", TaskStatus::Doing)]);
        let id = app.state.store.iter().next().map(|t| t.id).unwrap();
        app.state.select(TaskStatus::Doing, 0);

        send(&mut app, Message::EditTask);
        assert_eq!(app.form.mode(), FormMode::Edit(id));
        assert_eq!(app.form.title().value(), "Xyz");
        assert_eq!(app.form.status(), TaskStatus::Doing);

        send(&mut app, Message::FormEnter);
        assert!(!app.form.is_mounted());

        let task = app.state.store.get(id).unwrap();
        assert_eq!(task.title, "Xyz");
        assert_eq!(task.status, TaskStatus::Doing);
        assert_eq!(app.state.store.len(), 1);
    }

    #[test]
    fn edit_form_enforces_title_rule() {
        let mut app = app_with(&[("X", TaskStatus::Doing)]);
        app.state.select(TaskStatus::Doing, 0);

        send(&mut app, Message::EditTask);
        send(&mut app, Message::FormSubmit);
        assert!(app.form.is_visible());
        assert!(app.form.is_touched());
    }

    #[test]
    fn cancel_closes_without_changes() {
        let mut app = app_with(&[]);
        send(&mut app, Message::AddTask);
        type_text(&mut app, "Draft");

        send(&mut app, Message::FormCancel);
        assert!(!app.form.is_mounted());
        assert!(app.state.store.is_empty());
        assert!(!app.form.is_touched());
    }

    #[test]
    fn form_closes_after_exit_delay() {
        let mut app = App::new(TaskStore::new(), Config::default());
        let now = Instant::now();

        app.update_at(Message::AddTask, now);
        assert!(!app.form.is_visible());
        app.update_at(Message::Tick, now + Duration::from_millis(20));
        assert!(app.form.is_visible());

        app.update_at(Message::FormCancel, now + Duration::from_millis(30));
        assert!(app.form.is_mounted());
        assert_eq!(
            app.poll_timeout(now + Duration::from_millis(130)),
            Duration::from_millis(80)
        );

        app.update_at(Message::Tick, now + Duration::from_millis(210));
        assert!(!app.form.is_mounted());
        assert_eq!(app.poll_timeout(now), POLL_TIMEOUT);
    }

    #[test]
    fn board_keys_ignored_while_form_open() {
        let mut app = app_with(&[("Task 1", TaskStatus::ToDo)]);
        send(&mut app, Message::AddTask);

        send(&mut app, Message::DeleteTask);
        send(&mut app, Message::NavigateRight);
        assert_eq!(app.state.store.len(), 1);
        assert_eq!(app.state.selected_column, TaskStatus::ToDo);
    }

    #[test]
    fn advance_and_delete_selected_task() {
        let mut app = app_with(&[("Task 1", TaskStatus::ToDo), ("Task 2", TaskStatus::ToDo)]);
        app.update(Message::NavigateDown);

        app.update(Message::AdvanceStatus);
        assert_eq!(titles(&app, TaskStatus::Doing), vec!["Task 1"]);
        assert_eq!(app.state.selected_row, Some(0));

        app.update(Message::DeleteTask);
        assert_eq!(app.state.store.len(), 1);
        assert!(titles(&app, TaskStatus::ToDo).is_empty());
        assert_eq!(app.state.selected_row, None);
    }

    #[test]
    fn keyboard_drag_moves_task() {
        let mut app = app_with(&[("Task 1", TaskStatus::ToDo)]);
        app.update(Message::NavigateDown);

        app.update(Message::GrabTask);
        assert_eq!(app.input_mode(), InputMode::Dragging);

        app.update(Message::NavigateRight);
        app.update(Message::NavigateRight);
        assert_eq!(
            app.drag().and_then(DragState::drop_target),
            Some(TaskStatus::Done)
        );

        app.update(Message::DropTask);
        assert!(app.drag().is_none());
        assert_eq!(titles(&app, TaskStatus::Done), vec!["Task 1"]);
        assert_eq!(app.state.selected_column, TaskStatus::Done);
        assert!(app.state.selected_task().unwrap().is_completed());
    }

    #[test]
    fn keyboard_drag_escape_cancels() {
        let mut app = app_with(&[("Task 1", TaskStatus::ToDo)]);
        app.update(Message::NavigateDown);
        app.update(Message::GrabTask);
        app.update(Message::NavigateRight);

        app.update(Message::Escape);
        assert!(app.drag().is_none());
        assert_eq!(titles(&app, TaskStatus::ToDo), vec!["Task 1"]);
        // The escape only cancelled the drag
        assert!(app.state.selected_task().is_some());
    }

    #[test]
    fn drop_of_stale_task_is_ignored() {
        let mut app = app_with(&[("Task 1", TaskStatus::ToDo)]);
        app.update(Message::NavigateDown);
        app.update(Message::GrabTask);
        let id = app.state.selected_task_id().unwrap();

        app.state.store.delete(id);
        app.update(Message::NavigateRight);
        app.update(Message::DropTask);

        assert!(app.state.store.is_empty());
        assert!(app.drag().is_none());
    }

    #[test]
    fn malformed_payload_is_ignored() {
        let mut app = app_with(&[("Task 1", TaskStatus::ToDo)]);
        app.drop_payload(&DragPayload::new("not-a-task"), TaskStatus::Done);
        assert_eq!(titles(&app, TaskStatus::ToDo), vec!["Task 1"]);
    }

    // --- Mouse ---
    //
    // At 90×24 the header takes rows 0-3 and the board starts at row 4:
    // add row at y = 5, first card at y = 6..10 with its buttons on y = 9.

    #[test]
    fn click_add_row_opens_create_form_for_column() {
        let mut app = app_with(&[]);

        send(&mut app, Message::MouseDown { column: 65, row: 5 });
        assert!(app.form.is_visible());
        assert_eq!(app.form.mode(), FormMode::Create);
        assert_eq!(app.form.status(), TaskStatus::Done);
    }

    #[test]
    fn click_card_buttons() {
        let mut app = app_with(&[("Task 1", TaskStatus::ToDo), ("Task 2", TaskStatus::ToDo)]);

        // Delete button of the first card: x = 25..28
        app.update(Message::MouseDown { column: 26, row: 9 });
        assert_eq!(titles(&app, TaskStatus::ToDo), vec!["Task 2"]);

        // Advance button: x = 17..20
        app.update(Message::MouseDown { column: 18, row: 9 });
        assert_eq!(titles(&app, TaskStatus::Doing), vec!["Task 2"]);

        // Edit button of the card now in Doing: x = 51..54
        send(&mut app, Message::MouseDown { column: 52, row: 9 });
        assert!(app.form.is_visible());
        assert_eq!(app.form.title().value(), "Task 2");
    }

    #[test]
    fn pointer_drag_moves_task_between_columns() {
        let mut app = app_with(&[("Task 1", TaskStatus::ToDo)]);

        app.update(Message::MouseDown { column: 5, row: 7 });
        assert!(app.drag().is_some_and(|d| !d.is_active()));
        assert_eq!(app.state.selected_row, Some(0));

        app.update(Message::MouseDrag { column: 40, row: 12 });
        assert_eq!(
            app.drag().and_then(DragState::drop_target),
            Some(TaskStatus::Doing)
        );

        app.update(Message::MouseUp { column: 40, row: 12 });
        assert!(app.drag().is_none());
        assert_eq!(titles(&app, TaskStatus::Doing), vec!["Task 1"]);
    }

    #[test]
    fn click_without_drag_only_selects() {
        let mut app = app_with(&[("Task 1", TaskStatus::ToDo)]);

        app.update(Message::MouseDown { column: 5, row: 7 });
        app.update(Message::MouseUp { column: 5, row: 7 });

        assert!(app.drag().is_none());
        assert_eq!(titles(&app, TaskStatus::ToDo), vec!["Task 1"]);
        assert_eq!(app.state.selected_row, Some(0));
    }

    #[test]
    fn drag_released_outside_columns_is_ignored() {
        let mut app = app_with(&[("Task 1", TaskStatus::ToDo)]);

        app.update(Message::MouseDown { column: 5, row: 7 });
        app.update(Message::MouseDrag { column: 40, row: 1 });
        assert_eq!(app.drag().and_then(DragState::drop_target), None);

        app.update(Message::MouseUp { column: 40, row: 1 });
        assert_eq!(titles(&app, TaskStatus::ToDo), vec!["Task 1"]);
    }

    #[test]
    fn form_mouse_interaction() {
        let mut app = app_with(&[]);
        send(&mut app, Message::AddTask);

        // At 90×24 the popup spans x = 16..74, y = 4..19.
        let geometry = FormGeometry::new(Rect::new(0, 0, 90, 24));
        let done = geometry.status_options[TaskStatus::Done.index()];
        send(&mut app, Message::MouseDown { column: done.x, row: done.y });
        assert_eq!(app.form.status(), TaskStatus::Done);
        assert_eq!(app.form.focus(), FormField::Status);

        send(&mut app, Message::MouseDown { column: geometry.title.x, row: geometry.title.y });
        assert_eq!(app.form.focus(), FormField::Title);
        type_text(&mut app, "Click me");

        send(&mut app, Message::MouseDown { column: geometry.submit.x, row: geometry.submit.y });
        assert!(!app.form.is_mounted());
        assert_eq!(titles(&app, TaskStatus::Done), vec!["Click me"]);
    }

    #[test]
    fn backdrop_click_cancels_form() {
        let mut app = app_with(&[]);
        send(&mut app, Message::AddTask);

        send(&mut app, Message::MouseDown { column: 0, row: 0 });
        assert!(!app.form.is_mounted());
        assert!(app.state.store.is_empty());
    }

    // --- Rendering ---

    #[test]
    fn app_view_shows_too_small_message() {
        let mut app = app_with(&[]);

        let content = render(&mut app, 80, 10);
        assert!(!app.header_visible);
        assert!(content.contains("Terminal too small"));

        let content = render(&mut app, 40, 24);
        assert!(content.contains("Terminal too small"));
    }

    #[test]
    fn app_view_hides_header_in_compact_mode() {
        let mut app = app_with(&[]);

        let content = render(&mut app, 80, MIN_HEIGHT);
        assert!(!app.header_visible);
        assert!(content.contains("To Do (0)"));
        assert!(!content.contains("✓ Todo App"));
    }

    #[test]
    fn app_view_shows_header_and_footer() {
        let mut app = App::new(sample_store(), Config::default());

        let content = render(&mut app, 90, 24);
        assert!(app.header_visible);
        assert!(content.contains("✓ Todo App"));
        assert!(content.contains("Sample Task"));
        assert!(content.contains("© 2026 Todo App"));
    }

    #[test]
    fn app_view_renders_form_and_help() {
        let mut app = app_with(&[]);
        send(&mut app, Message::AddTask);
        let content = render(&mut app, 90, 24);
        assert!(content.contains("New task"));

        send(&mut app, Message::FormCancel);
        app.update(Message::ToggleHelp);
        let content = render(&mut app, 90, 30);
        assert!(content.contains("Press any key to close"));
    }
}
