//! # Game Logic Module
//!
//! Pure game rules with no terminal or rendering concerns.
//!
//! ## Contents
//! - **Tic-tac-toe**: marks, board snapshots, win/draw evaluation and status text
//! - **History**: the sequence of snapshots and the pointer into it, with
//!   the commit/jump commands that are the only way to change either
//!
//! Everything the UI shows (whose turn, the status line, the win line, the
//! move labels) is derived from a `GameHistory` on demand and never stored.

pub mod history;
pub mod tictactoe;
