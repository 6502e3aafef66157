//! Shared protocol types for the todo-board application.
//!
//! This crate defines the core types used across all todo-board
//! components: tasks and their statuses, the in-memory task store, form
//! payloads and their validation, drag payloads, and TUI messages.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`task`]: Task identifiers, statuses, and the `Task` struct
//! - [`store`]: The `TaskStore` and its status grouping
//! - [`payload`]: Form payloads and title validation
//! - [`drag`]: Plain-text drag-and-drop payloads
//! - [`message`]: TUI event messages
//! - [`sample`]: Starter tasks
//! - [`error`]: Error types
//!
//! # Examples
//!
//! ```
//! use todo_protocol::{TaskPayload, TaskStatus, TaskStore, validate_title};
//!
//! let mut store = TaskStore::new();
//!
//! let title = "Write release notes";
//! validate_title(title).unwrap();
//! let id = store.create(TaskPayload::normalized(title, "", TaskStatus::ToDo));
//!
//! store.advance_status(id);
//! assert_eq!(store.get(id).unwrap().status, TaskStatus::Doing);
//! ```

pub mod drag;
pub mod error;
pub mod message;
pub mod payload;
pub mod sample;
pub mod store;
pub mod task;

// Re-export primary types at crate root for convenience
pub use drag::DragPayload;
pub use error::{ProtocolError, Result, ValidationError};
pub use message::Message;
pub use payload::{MIN_TITLE_CHARS, TaskPayload, validate_title};
pub use store::{StatusGroups, TaskStore};
pub use task::{Task, TaskId, TaskStatus};
