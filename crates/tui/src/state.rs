//! Application state management.
//!
//! This module defines the board-level state of the TUI: the task store,
//! which column and card are selected, and whether help is shown.
//!
//! Selection is positional (a column plus a row within it) and is checked
//! against the store's status grouping every time it is used, so a stale
//! row can never reach a task that is not there.

use todo_protocol::{Task, TaskId, TaskStatus, TaskStore};

/// The application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// All tasks on the board.
    pub store: TaskStore,
    /// The focused column.
    pub selected_column: TaskStatus,
    /// Index of the selected card within the focused column, if any.
    pub selected_row: Option<usize>,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
}

/// Returns the status `offset` columns away from `status`, wrapping around.
fn wrapped(status: TaskStatus, offset: usize) -> TaskStatus {
    let all = TaskStatus::all();
    all[(status.index() + offset) % all.len()]
}

impl AppState {
    /// Creates a new state focused on the first column with nothing selected.
    ///
    /// # Examples
    ///
    /// ```
    /// use todo_protocol::{TaskStatus, TaskStore};
    /// use todo_tui::AppState;
    ///
    /// let state = AppState::new(TaskStore::new());
    /// assert_eq!(state.selected_column, TaskStatus::ToDo);
    /// assert!(state.selected_row.is_none());
    /// ```
    #[must_use]
    pub fn new(store: TaskStore) -> Self {
        Self {
            store,
            selected_column: TaskStatus::ToDo,
            selected_row: None,
            help_visible: false,
        }
    }

    /// Toggles the help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Dismisses the help overlay if it is visible.
    ///
    /// Returns `true` if help was visible and has been dismissed.
    #[must_use]
    pub fn dismiss_help(&mut self) -> bool {
        std::mem::replace(&mut self.help_visible, false)
    }

    /// Returns the number of cards in the focused column.
    #[must_use]
    pub fn column_len(&self) -> usize {
        self.store.group_by_status().len(self.selected_column)
    }

    /// Moves the column selection to the left, wrapping around.
    pub fn navigate_left(&mut self) {
        let count = TaskStatus::all().len();
        self.selected_column = wrapped(self.selected_column, count - 1);
        self.clamp_selection();
    }

    /// Moves the column selection to the right, wrapping around.
    pub fn navigate_right(&mut self) {
        self.selected_column = wrapped(self.selected_column, 1);
        self.clamp_selection();
    }

    /// Moves the card selection up, wrapping to the bottom.
    pub fn navigate_up(&mut self) {
        let len = self.column_len();
        if len == 0 {
            self.selected_row = None;
            return;
        }

        self.selected_row = Some(match self.selected_row {
            Some(row) if row > 0 => row - 1,
            Some(_) => len - 1,
            None => 0,
        });
    }

    /// Moves the card selection down, wrapping to the top.
    pub fn navigate_down(&mut self) {
        let len = self.column_len();
        if len == 0 {
            self.selected_row = None;
            return;
        }

        self.selected_row = Some(match self.selected_row {
            Some(row) if row + 1 < len => row + 1,
            Some(_) | None => 0,
        });
    }

    /// Returns the selected task, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use todo_protocol::{TaskPayload, TaskStatus, TaskStore};
    /// use todo_tui::AppState;
    ///
    /// let mut store = TaskStore::new();
    /// store.create(TaskPayload::normalized("Task 1", "", TaskStatus::ToDo));
    ///
    /// let mut state = AppState::new(store);
    /// assert!(state.selected_task().is_none());
    ///
    /// state.navigate_down();
    /// assert_eq!(state.selected_task().unwrap().title, "Task 1");
    /// ```
    #[must_use]
    pub fn selected_task(&self) -> Option<&Task> {
        let row = self.selected_row?;
        self.store.group_by_status().get(self.selected_column, row)
    }

    /// Returns the id of the selected task, if any.
    #[must_use]
    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.selected_task().map(|task| task.id)
    }

    /// Focuses `status` without selecting a card.
    pub fn select_column(&mut self, status: TaskStatus) {
        self.selected_column = status;
        self.selected_row = None;
    }

    /// Selects the card at `row` in the `status` column.
    pub fn select(&mut self, status: TaskStatus, row: usize) {
        self.selected_column = status;
        self.selected_row = Some(row);
        self.clamp_selection();
    }

    /// Selects the card of task `id`, wherever it now lives.
    ///
    /// Returns `false` if the task is not on the board.
    pub fn select_task(&mut self, id: TaskId) -> bool {
        match self.store.group_by_status().row_of(id) {
            Some((status, row)) => {
                self.selected_column = status;
                self.selected_row = Some(row);
                true
            }
            None => false,
        }
    }

    /// Clears the current card selection.
    pub fn clear_selection(&mut self) {
        self.selected_row = None;
    }

    /// Ensures the card selection is valid for the focused column.
    ///
    /// Call after anything that removes cards from a column.
    pub fn clamp_selection(&mut self) {
        let len = self.column_len();
        if len == 0 {
            self.selected_row = None;
        } else if let Some(row) = self.selected_row
            && row >= len
        {
            self.selected_row = Some(len - 1);
        }
    }
}
