//! Terminal UI for the todo board.
//!
//! This crate provides a Ratatui-based kanban board: three status columns,
//! task cards with action buttons, drag-and-drop between columns and a
//! modal form for creating and editing tasks.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main application struct and run loop
//! - [`state`]: Board state and selection
//! - [`form`]: Task form state machine and validation
//! - [`drag`]: Drag-and-drop of cards between columns
//! - [`layout`]: Geometry shared by rendering and mouse hit-testing
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event handling and key mappings
//! - [`widgets`]: Rendering
//!
//! # Example
//!
//! ```no_run
//! use todo_config::Config;
//! use todo_protocol::sample::sample_store;
//! use todo_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let mut app = App::new(sample_store(), Config::default());
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod drag;
pub mod event;
pub mod form;
pub mod layout;
pub mod state;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use state::AppState;
