//! # Tic-Tac-Toe Game Implementation
//!
//! This module implements the board of a classic 3x3 tic-tac-toe game.
//!
//! ## Rules
//! - X always moves first, then players alternate
//! - A mark may only be placed on an empty cell
//! - Three identical marks in a row, column or diagonal win
//! - A full board with no such line is a draw
//!
//! A `Squares` value is one immutable snapshot; placing a mark produces a new
//! snapshot rather than editing the old one, so history can keep every state.

use std::fmt;
use std::str::FromStr;

use tictactoe_shared::{CELLS, SIZE};

/// One of the two players' marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The mark that moves when `x_is_next` says so
    pub fn for_turn(x_is_next: bool) -> Self {
        if x_is_next {
            Mark::X
        } else {
            Mark::O
        }
    }

    fn encode(cell: Option<Mark>) -> u8 {
        match cell {
            None => 0,
            Some(Mark::X) => 1,
            Some(Mark::O) => 2,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// The three cell indices of a completed row, column or diagonal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinLine(pub [usize; 3]);

impl WinLine {
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

/// 1-based board coordinates of a cell, column first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveLocation {
    pub col: usize,
    pub row: usize,
}

impl MoveLocation {
    pub fn from_index(index: usize) -> Self {
        let (col, row) = tictactoe_shared::index_to_col_row(index);
        Self { col, row }
    }
}

impl fmt::Display for MoveLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.col, self.row)
    }
}

/// Status line shown above the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Winner(Mark),
    Draw,
    NextPlayer(Mark),
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Winner(mark) => write!(f, "Winner: {}", mark),
            GameStatus::Draw => write!(f, "Draw!"),
            GameStatus::NextPlayer(mark) => write!(f, "Next player: {}", mark),
        }
    }
}

/// A snapshot of the 9 board cells in row-major order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Squares([Option<Mark>; CELLS]);

impl Squares {
    /// The empty starting board
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.0.get(index).copied().flatten()
    }

    pub fn cells(&self) -> &[Option<Mark>; CELLS] {
        &self.0
    }

    /// Returns a copy of this snapshot with `mark` placed at `index`.
    ///
    /// Does not check legality; see `play` in the board component for the rules.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Self {
        let mut next = *self;
        if let Some(cell) = next.0.get_mut(index) {
            *cell = Some(mark);
        }
        next
    }

    /// Returns the first completed line, checking rows, then columns, then diagonals
    pub fn winning_line(&self) -> Option<WinLine> {
        tictactoe_shared::winning_line(&self.encoded()).map(WinLine)
    }

    /// Returns the mark that owns the winning line, if any
    pub fn winner(&self) -> Option<Mark> {
        self.winning_line().and_then(|line| self.get(line.0[0]))
    }

    pub fn is_filled(&self) -> bool {
        tictactoe_shared::is_filled(&self.encoded())
    }

    /// Derives the status line for this snapshot
    ///
    /// # Arguments
    /// * `x_is_next` - Whose turn it is, used only while the game is still open
    pub fn status(&self, x_is_next: bool) -> GameStatus {
        if let Some(mark) = self.winner() {
            GameStatus::Winner(mark)
        } else if self.is_filled() {
            GameStatus::Draw
        } else {
            GameStatus::NextPlayer(Mark::for_turn(x_is_next))
        }
    }

    /// Index of the first cell that differs between `self` and `next`
    pub fn changed_index(&self, next: &Squares) -> Option<usize> {
        self.0.iter().zip(next.0.iter()).position(|(a, b)| a != b)
    }

    fn encoded(&self) -> [u8; CELLS] {
        let mut cells = [0u8; CELLS];
        for (slot, cell) in cells.iter_mut().zip(self.0.iter()) {
            *slot = Mark::encode(*cell);
        }
        cells
    }
}

impl fmt::Display for Squares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..SIZE {
            for c in 0..SIZE {
                let symbol = match self.0[r * SIZE + c] {
                    Some(Mark::X) => "X",
                    Some(Mark::O) => "O",
                    None => ".",
                };
                write!(f, "{}", symbol)?;
            }
            if r + 1 < SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Squares {
    type Err = String;

    /// Parses a board from 9 cell characters, ignoring whitespace
    ///
    /// `X` and `O` (either case) are marks; `.`, `-` and `_` are empty cells.
    ///
    /// # Examples
    /// ```
    /// use std::str::FromStr;
    /// use tictactoe::games::tictactoe::{Mark, Squares};
    /// let board = Squares::from_str("XO. ... ..X").unwrap();
    /// assert_eq!(board.get(1), Some(Mark::O));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; CELLS];
        let mut count = 0;
        for ch in s.chars().filter(|c| !c.is_whitespace()) {
            if count == CELLS {
                return Err(format!("expected {} cells, found more", CELLS));
            }
            cells[count] = match ch {
                'X' | 'x' => Some(Mark::X),
                'O' | 'o' => Some(Mark::O),
                '.' | '-' | '_' => None,
                other => return Err(format!("invalid cell character '{}'", other)),
            };
            count += 1;
        }
        if count != CELLS {
            return Err(format!("expected {} cells, found {}", CELLS, count));
        }
        Ok(Squares(cells))
    }
}
