//! Widget components for the todo-board TUI.
//!
//! Each widget is a plain function that renders state into a buffer, which
//! keeps them easy to test and compose.
//!
//! # Modules
//!
//! - [`board`]: The three status columns side by side
//! - [`column`]: One status column with its add trigger and cards
//! - [`task_card`]: A task card with its action buttons
//! - [`form`]: The create/edit task form modal
//! - [`shell`]: Header and footer
//! - [`help`]: Keybinding overlay
//!
//! # Color Coding
//!
//! Card borders follow the task's [`TaskStatus`](todo_protocol::TaskStatus):
//!
//! | Status | Color |
//! |--------|-------|
//! | `ToDo` | Gray (`Color::Gray`) |
//! | `Doing` | Sky (`Color::LightBlue`) |
//! | `Done` | Green (`Color::Green`) |
//!
//! The focused column is cyan; a column hovered by a drag is yellow.
//!
//! # Example
//!
//! ```
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//! use todo_protocol::{TaskPayload, TaskStatus, TaskStore};
//! use todo_tui::widgets::{self, BoardView};
//!
//! let mut store = TaskStore::new();
//! store.create(TaskPayload::normalized("Example", "A sample task", TaskStatus::ToDo));
//!
//! let area = Rect::new(0, 0, 90, 24);
//! let mut buf = Buffer::empty(area);
//!
//! let view = BoardView::new(TaskStatus::ToDo, Some(0));
//! widgets::render_board(&store.group_by_status(), &view, area, &mut buf);
//! ```

pub mod board;
pub mod column;
pub mod form;
pub mod help;
pub mod shell;
pub mod task_card;

// Re-export primary rendering functions for convenience
pub use board::{BoardView, render_board};
pub use column::{ColumnView, render_column};
pub use form::render_form_modal;
pub use help::render_help_overlay;
pub use shell::{render_footer, render_header};
pub use task_card::{CardHighlight, render_task_card, status_color};
