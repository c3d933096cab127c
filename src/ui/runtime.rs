use std::io;
use std::time::Duration;

use tracing::info;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::forms::current_year;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Runs the shell until the user quits.
pub fn run(config: &Config, catalog: Catalog) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let mut app = App::new(catalog, &config.ui, current_year());
    let mut events = EventHandler::new(tick_rate);
    info!(screen = %app.route(), "shell started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next()? {
            AppEvent::Key(key) => handle_key(&mut app, key),
            AppEvent::Tick => app.on_tick(),
            AppEvent::Resize => {}
        }
    }

    info!("shell stopped");
    drop(guard);
    Ok(())
}
