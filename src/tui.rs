//! Terminal UI
//!
//! Single-threaded loop: advance animations, draw, then either run one step
//! of a pending fetch or wait briefly for input.

pub mod app;
pub mod event;
pub mod theme;
mod ui;

use std::time::Instant;

use anyhow::{Context, Result};
use ratatui::DefaultTerminal;
use tracing::info;

use self::app::{App, Tab};
use crate::catalog::{CatalogSource, TmdbClient};
use crate::config::ReelConfig;

/// Run the TUI until the user quits
pub fn run(config: &ReelConfig) -> Result<()> {
    // Fail before touching the terminal so the message stays readable
    let client = TmdbClient::from_config(config).context("Cannot start the browser")?;

    let mut app = App::new(config);
    app.schedule_tab_load(Tab::Movies);

    info!(base_url = client.base_url(), "starting tui");

    let mut terminal = ratatui::init();
    let result = run_loop(&mut terminal, &mut app, &client);
    ratatui::restore();

    info!("tui exited");
    result
}

fn run_loop(terminal: &mut DefaultTerminal, app: &mut App, catalog: &dyn CatalogSource) -> Result<()> {
    while app.running {
        let now = Instant::now();
        app.tick(now);

        terminal
            .draw(|frame| ui::render(frame, app, now))
            .context("Failed to draw frame")?;

        // Fetch between frames so the loading popup stays current
        if app.has_background_op() {
            app.execute_background_step(catalog);
            continue;
        }

        event::handle_events(app)?;
    }
    Ok(())
}
