//! todo-board - A terminal kanban board for to-do tasks.
//!
//! This is the main binary that launches the TUI application.

mod logging;

use anyhow::Context;
use todo_config::Config;
use todo_protocol::{TaskStore, sample::sample_store};
use todo_tui::{App, terminal};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().await.context("failed to load configuration")?;
    logging::init(&config.logging)?;
    info!(?config, "configuration loaded");

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();

    // Setup terminal
    let mut terminal = terminal::setup_terminal()?;

    let store = if config.seed_sample_tasks {
        sample_store()
    } else {
        TaskStore::new()
    };
    let mut app = App::new(store, config);

    // Run the main loop
    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    result
}
