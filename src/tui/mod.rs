//! # Terminal User Interface Module
//!
//! This module runs the game in the terminal using Ratatui over crossterm.
//!
//! ## Key Components
//! - **Terminal Management**: Initialization and cleanup of raw terminal mode
//! - **Event Loop**: Poll for input, dispatch one event, redraw
//! - **Input Processing**: Translation of crossterm events into component events
//!
//! All state changes happen synchronously inside a single event dispatch,
//! so no two updates can interleave.

use crate::app::App;
use crate::components::manager::ComponentManager;
use crate::components::ui::RootComponent;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{io, time::Duration};
use tracing::{debug, info, warn};

pub mod input;

/// Main entry point for the terminal user interface
///
/// Initializes the terminal, runs the event loop until the user quits, and
/// restores the terminal even if the loop failed.
///
/// # Arguments
/// * `app` - Mutable reference to the application state
///
/// # Errors
/// Returns an error if terminal initialization, drawing, event handling, or cleanup fails
pub fn run(app: &mut App) -> io::Result<()> {
    let mut terminal = init_terminal()?;
    let mut manager = ComponentManager::new();
    manager.set_root_component(Box::new(RootComponent::from_app(app)));

    info!("terminal UI started");
    let result = run_loop(&mut terminal, &mut manager, app);
    let restored = restore_terminal(&mut terminal);
    info!("terminal UI stopped");

    result.and(restored)
}

/// Draws, waits up to one tick for input, and dispatches it, until quit
fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    manager: &mut ComponentManager,
    app: &mut App,
) -> io::Result<()> {
    let tick = Duration::from_millis(app.config.tick_ms);

    loop {
        if app.should_quit {
            return Ok(());
        }

        draw(terminal, manager, app)?;

        if event::poll(tick)? {
            if let Some(input) = input::translate(event::read()?) {
                debug!(?input, "dispatching input");
                input::dispatch(manager, app, input)?;
            }
        }
    }
}

/// Renders one frame through the component manager
pub fn draw<B: Backend>(
    terminal: &mut Terminal<B>,
    manager: &mut ComponentManager,
    app: &App,
) -> io::Result<()> {
    let mut rendered = Ok(());
    terminal.draw(|frame| {
        let area = frame.size();
        rendered = manager.render(frame, area, app);
    })?;
    rendered.map_err(io::Error::from)
}

/// Initializes the terminal for raw mode operation
///
/// Enables raw mode, switches to the alternate screen, enables mouse capture,
/// and hides the cursor. Raw mode is switched back off if any later step fails.
fn init_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    enter_screen().map_err(|err| {
        if let Err(cleanup) = disable_raw_mode() {
            warn!(%cleanup, "could not leave raw mode after failed setup");
        }
        err
    })
}

fn enter_screen() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        crossterm::cursor::Hide
    )?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Restores the terminal to normal operation mode
///
/// Every step runs even when an earlier one fails; the first failure is returned.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    first_error([
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            crossterm::cursor::Show
        ),
        disable_raw_mode(),
        terminal.show_cursor(),
    ])
}

/// Returns the first error among already completed steps
fn first_error(steps: impl IntoIterator<Item = io::Result<()>>) -> io::Result<()> {
    let mut first = Ok(());
    for step in steps {
        if let Err(err) = step {
            warn!(%err, "terminal cleanup step failed");
            if first.is_ok() {
                first = Err(err);
            }
        }
    }
    first
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_error_keeps_earliest_failure() {
        let result = first_error([
            Ok(()),
            Err(io::Error::new(io::ErrorKind::Other, "raw mode")),
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "cursor")),
        ]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
        assert_eq!(err.to_string(), "raw mode");
    }

    #[test]
    fn test_first_error_consumes_every_step() {
        let mut ran = Vec::new();
        let steps = (0..3).map(|i| {
            ran.push(i);
            if i == 0 {
                Err(io::Error::new(io::ErrorKind::Other, "alternate screen"))
            } else {
                Ok(())
            }
        });
        assert!(first_error(steps).is_err());
        assert_eq!(ran, vec![0, 1, 2]);
    }

    #[test]
    fn test_first_error_all_ok() {
        assert!(first_error([Ok(()), Ok(())]).is_ok());
    }
}
