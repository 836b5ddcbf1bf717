//! # Tic-Tac-Toe with Time Travel
//!
//! A 3x3 tic-tac-toe game for two players at one terminal, with win
//! highlighting and a move list that can jump back to any earlier position.
//!
//! ## Layout
//! - [`games`]: pure rules and the move history
//! - [`app`]: the owner of the authoritative state
//! - [`components`]: the widget tree (board, cells, history panel)
//! - [`tui`]: terminal setup and the event loop
//! - [`logging`]: file-based `tracing` output

pub mod app;
pub mod components;
pub mod games;
pub mod logging;
pub mod tui;

pub use app::{App, Config};
pub use games::history::{GameHistory, HistoryEntry};
pub use games::tictactoe::{GameStatus, Mark, Squares};
