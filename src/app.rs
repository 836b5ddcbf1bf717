//! # Application State
//!
//! This module defines `App`, the single owner of authoritative game state.
//! Components read from it while rendering and call its commands while
//! handling events; nothing else mutates the history or the move pointer.

use tracing::{info, warn};

use crate::games::history::GameHistory;
use crate::games::tictactoe::{GameStatus, Squares};

/// Runtime options chosen on the command line
#[derive(Debug, Clone)]
pub struct Config {
    /// Show the move list newest-first when the game starts
    pub descending: bool,
    /// How long the event loop waits for input before redrawing, in milliseconds
    pub tick_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            descending: false,
            tick_ms: 100,
        }
    }
}

/// Main application state
pub struct App {
    history: GameHistory,
    pub config: Config,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            history: GameHistory::new(),
            config,
            should_quit: false,
        }
    }

    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// The snapshot currently on the board
    pub fn current_squares(&self) -> &Squares {
        self.history.current_squares()
    }

    pub fn x_is_next(&self) -> bool {
        self.history.x_is_next()
    }

    pub fn status(&self) -> GameStatus {
        self.history.status()
    }

    /// Commits `next` as the move following the viewed snapshot
    pub fn commit_move(&mut self, next: Squares) {
        let branched = self.history.current_move() < self.history.latest_move();
        self.history.commit(next);
        info!(
            move_number = self.history.current_move(),
            branched,
            status = %self.history.status(),
            "move committed"
        );
    }

    /// Travels to an earlier or later snapshot. Out-of-range targets are ignored.
    pub fn jump_to(&mut self, move_number: usize) {
        if self.history.jump_to(move_number) {
            info!(move_number, "jumped to move");
        } else {
            warn!(
                move_number,
                len = self.history.len(),
                "ignoring jump outside history"
            );
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Mark;

    #[test]
    fn test_commit_and_jump() {
        let mut app = App::default();
        let next = app.current_squares().with_mark(0, Mark::X);
        app.commit_move(next);
        assert_eq!(app.history().current_move(), 1);
        assert!(!app.x_is_next());

        app.jump_to(0);
        assert_eq!(app.history().current_move(), 0);
        assert_eq!(app.history().len(), 2);
    }

    #[test]
    fn test_bad_jump_is_a_no_op() {
        let mut app = App::default();
        app.jump_to(5);
        assert_eq!(app.history().current_move(), 0);
        assert_eq!(app.status().to_string(), "Next player: X");
    }
}
