//! Configuration management for the todo-board application.
//!
//! This crate finds, reads, validates and writes the board's configuration
//! file. Tasks themselves are never persisted; the file only tunes how
//! the board behaves.
//!
//! # Overview
//!
//! - [`config`]: The [`Config`] struct and loading logic
//! - [`transitions`]: Form modal open/close delays
//! - [`logging`]: Log file and level
//! - [`persistence`]: Config file discovery, reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # File Locations
//!
//! The first existing file wins:
//!
//! 1. Local config (`./todo-board.json5` or `./todo-board.json`)
//! 2. User config (`~/.config/todo-board/config.json5` or `config.json`)
//! 3. Built-in defaults
//!
//! # Format
//!
//! ```json5
//! {
//!   // start with an empty board
//!   seed_sample_tasks: false,
//!   transitions: { enter_ms: 20, exit_ms: 180 },
//!   logging: { file: "/tmp/todo-board.log", level: "debug" },
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use todo_config::Config;
//!
//! # async fn example() -> todo_config::Result<()> {
//! let config = Config::load().await?;
//! if config.seed_sample_tasks {
//!     println!("starting with sample tasks");
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod persistence;
pub mod transitions;

pub use config::Config;
pub use error::{ConfigError, Result};
pub use logging::LoggingConfig;
pub use transitions::TransitionConfig;
