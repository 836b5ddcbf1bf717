//! # Tic-Tac-Toe with Time Travel
//!
//! Entry point for the terminal game. Two players share the board; click a
//! cell to play, click a move in the history to travel back to it.
//!
//! ## Usage
//! `cargo run --release -- --log-file play.log --log-level debug`

use clap::Parser;
use std::io;
use std::path::PathBuf;

use tictactoe::{logging, tui, App, Config};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Show the move list newest-first
    #[clap(short, long, action = clap::ArgAction::SetTrue)]
    descending: bool,

    /// Append logs to this file; without it nothing is logged
    #[clap(long)]
    log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[clap(long, default_value = "info")]
    log_level: String,

    /// Input poll interval in milliseconds
    #[clap(short, long, default_value_t = 100)]
    tick_ms: u64,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            descending: self.descending,
            tick_ms: self.tick_ms.max(1),
        }
    }
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    logging::init(args.log_file.as_deref(), &args.log_level)?;

    let mut app = App::new(args.config());
    tui::run(&mut app)
}
