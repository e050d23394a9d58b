use std::io::{self, Stdout, Write};
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};

use folio_core::{AppConfig, Portfolio};
use folio_tui::{
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    keymap::Keymap,
    scroll::ScrollConfigExt,
    ui, App, AppCommand,
};

pub fn run(config: AppConfig) -> Result<()> {
    let keymap = Keymap::from_config(&config.keymap);
    let event_handler = EventHandler::new(
        config.ui.tick_rate_ms,
        config.ui.scroll.frame_interval(),
    );

    let portfolio = Portfolio::builtin();
    portfolio.validate()?;
    let mut app = App::new(config, portfolio, Instant::now());

    enable_raw_mode()?;
    let mut terminal = match setup_terminal() {
        Ok(terminal) => terminal,
        Err(e) => {
            restore_terminal(&mut io::stdout());
            return Err(e);
        }
    };

    info!("Page opened");
    let result = main_loop(&mut terminal, &mut app, &keymap, &event_handler);

    // Restore terminal, also when the loop failed
    restore_terminal(terminal.backend_mut());
    info!("Page closed");

    result
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("Folio"))?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Leave raw mode and the alternate screen; every step runs even if an earlier one fails
fn restore_terminal<W: Write>(out: &mut W) {
    if let Err(e) = disable_raw_mode() {
        warn!("Failed to disable raw mode: {}", e);
    }
    if let Err(e) = execute!(out, LeaveAlternateScreen, Show) {
        warn!("Failed to leave alternate screen: {}", e);
    }
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    keymap: &Keymap,
    events: &EventHandler,
) -> Result<()> {
    loop {
        let now = Instant::now();
        terminal.draw(|frame| ui::draw(frame, app, now))?;

        // Poll faster while something is moving
        let animating = app.is_animating(Instant::now());
        if let Some(AppEvent::Key(key)) = events.next(animating)? {
            let action = handle_key_event(key, app, keymap);
            if let Some(command) = app.handle_action(action, Instant::now()) {
                execute_command(app, command);
            }
        }
        // Resize and tick only need the redraw at the top of the loop

        if app.should_quit {
            return Ok(());
        }
    }
}

fn execute_command(app: &mut App, command: AppCommand) {
    match command {
        AppCommand::OpenUrl(url) => {
            info!("Opening {}", url);
            if let Err(e) = open::that(url.as_str()) {
                warn!("Failed to open {}: {}", url, e);
                app.set_status(format!("Failed to open browser: {}", e));
            }
        }
    }
}
