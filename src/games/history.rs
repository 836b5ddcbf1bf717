//! Move history with time travel.
//!
//! `GameHistory` owns the two pieces of authoritative state: every snapshot
//! played so far and the index of the one being viewed. Playing from an
//! earlier point discards the moves after it.

use std::fmt;

use super::tictactoe::{GameStatus, Mark, MoveLocation, Squares};

/// What a single move did: which mark went where
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveSummary {
    pub mark: Mark,
    pub location: MoveLocation,
}

/// One row of the history list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Index into the history; 0 is the game start
    pub move_number: usize,
    /// `None` for the game start, or if the snapshots did not differ
    pub summary: Option<MoveSummary>,
    /// True for the snapshot currently being viewed
    pub is_current: bool,
}

impl HistoryEntry {
    /// Whether clicking this entry should travel to it
    pub fn is_jump_target(&self) -> bool {
        !self.is_current
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_current {
            return write!(f, "You are at move #{}", self.move_number);
        }
        if self.move_number == 0 {
            return write!(f, "Go to game start");
        }
        match self.summary {
            Some(summary) => write!(
                f,
                "Go to move #{}: {} at {}",
                self.move_number, summary.mark, summary.location
            ),
            None => write!(f, "Go to move #{}", self.move_number),
        }
    }
}

/// The full list of board snapshots plus the viewed position
#[derive(Debug, Clone)]
pub struct GameHistory {
    snapshots: Vec<Squares>,
    current_move: usize,
}

impl GameHistory {
    /// Creates a history holding only the empty board
    pub fn new() -> Self {
        Self {
            snapshots: vec![Squares::empty()],
            current_move: 0,
        }
    }

    /// Records `next` as the move after the viewed snapshot.
    ///
    /// Any snapshots after the current pointer are dropped first, so playing
    /// while looking at the past starts a new branch.
    pub fn commit(&mut self, next: Squares) {
        self.snapshots.truncate(self.current_move + 1);
        self.snapshots.push(next);
        self.current_move = self.snapshots.len() - 1;
    }

    /// Moves the pointer to `index` without touching the snapshots.
    ///
    /// Returns false and leaves the pointer alone if `index` is out of range.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.snapshots.len() {
            return false;
        }
        self.current_move = index;
        true
    }

    pub fn current_move(&self) -> usize {
        self.current_move
    }

    pub fn current_squares(&self) -> &Squares {
        &self.snapshots[self.current_move]
    }

    /// X moves on even pointers
    pub fn x_is_next(&self) -> bool {
        self.current_move % 2 == 0
    }

    pub fn status(&self) -> GameStatus {
        self.current_squares().status(self.x_is_next())
    }

    pub fn snapshots(&self) -> &[Squares] {
        &self.snapshots
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn latest_move(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// Describes the move that produced snapshot `move_number`.
    ///
    /// The mark is read from the changed cell itself rather than inferred
    /// from the index parity.
    pub fn summary(&self, move_number: usize) -> Option<MoveSummary> {
        if move_number == 0 {
            return None;
        }
        let prev = self.snapshots.get(move_number - 1)?;
        let next = self.snapshots.get(move_number)?;
        let index = prev.changed_index(next)?;
        let mark = next.get(index)?;
        Some(MoveSummary {
            mark,
            location: MoveLocation::from_index(index),
        })
    }

    /// Builds the history list in ascending or descending move order
    pub fn entries(&self, ascending: bool) -> Vec<HistoryEntry> {
        let mut entries: Vec<HistoryEntry> = (0..self.snapshots.len())
            .map(|move_number| HistoryEntry {
                move_number,
                summary: self.summary(move_number),
                is_current: move_number == self.current_move,
            })
            .collect();
        if !ascending {
            entries.reverse();
        }
        entries
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Plays the given cells in order, alternating X and O
    fn play_all(cells: &[usize]) -> GameHistory {
        let mut history = GameHistory::new();
        for &cell in cells {
            let mark = Mark::for_turn(history.x_is_next());
            let next = history.current_squares().with_mark(cell, mark);
            history.commit(next);
        }
        history
    }

    #[test]
    fn test_new_history() {
        let history = GameHistory::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.current_move(), 0);
        assert!(history.x_is_next());
        assert_eq!(*history.current_squares(), Squares::empty());
        assert_eq!(history.status().to_string(), "Next player: X");
    }

    #[test]
    fn test_commit_appends_and_advances() {
        let history = play_all(&[4, 0]);
        assert_eq!(history.len(), 3);
        assert_eq!(history.current_move(), 2);
        assert!(history.x_is_next());
        assert_eq!(history.current_squares().get(4), Some(Mark::X));
        assert_eq!(history.current_squares().get(0), Some(Mark::O));
    }

    #[test]
    fn test_jump_keeps_snapshots() {
        let mut history = play_all(&[0, 1, 2, 3]);
        assert!(history.jump_to(1));
        assert_eq!(history.len(), 5);
        assert_eq!(history.current_move(), 1);
        assert!(!history.x_is_next());
        assert_eq!(history.status().to_string(), "Next player: O");
    }

    #[test]
    fn test_branching_truncates_future() {
        let mut history = play_all(&[0, 1, 2, 3]);
        assert_eq!(history.len(), 5);
        assert_eq!(history.current_move(), 4);

        assert!(history.jump_to(2));
        let next = history.current_squares().with_mark(8, Mark::X);
        history.commit(next);

        assert_eq!(history.len(), 4);
        assert_eq!(history.current_move(), 3);
        assert_eq!(history.current_squares().get(2), None);
        assert_eq!(history.current_squares().get(8), Some(Mark::X));
    }

    #[test]
    fn test_out_of_range_jump_is_rejected() {
        let mut history = play_all(&[0, 1]);
        assert!(!history.jump_to(3));
        assert!(!history.jump_to(usize::MAX));
        assert_eq!(history.current_move(), 2);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_entry_labels() {
        let mut history = play_all(&[4, 0, 8]);
        history.jump_to(1);
        let labels: Vec<String> = history.entries(true).iter().map(|e| e.to_string()).collect();
        assert_eq!(
            labels,
            vec![
                "Go to game start",
                "You are at move #1",
                "Go to move #2: O at (1,1)",
                "Go to move #3: X at (3,3)",
            ]
        );
    }

    #[test]
    fn test_summary_mark_follows_parity_under_normal_play() {
        let history = play_all(&[0, 1, 2, 3, 4]);
        for n in 1..history.len() {
            let expected = if n % 2 == 0 { Mark::O } else { Mark::X };
            assert_eq!(history.summary(n).unwrap().mark, expected);
        }
        assert_eq!(history.summary(0), None);
        assert_eq!(history.summary(99), None);
    }

    #[test]
    fn test_summary_reads_changed_cell() {
        // O placed first: the label trusts the board, not the index
        let mut history = GameHistory::new();
        history.commit(Squares::empty().with_mark(4, Mark::O));
        let summary = history.summary(1).unwrap();
        assert_eq!(summary.mark, Mark::O);
        assert_eq!(summary.location.to_string(), "(2,2)");
    }

    #[test]
    fn test_unchanged_snapshot_has_plain_label() {
        let mut history = GameHistory::new();
        history.commit(Squares::empty());
        history.jump_to(0);
        let entries = history.entries(true);
        assert_eq!(entries[1].summary, None);
        assert_eq!(entries[1].to_string(), "Go to move #1");
    }

    #[test]
    fn test_descending_entries_reverse_only_order() {
        let history = play_all(&[0, 4]);
        let ascending = history.entries(true);
        let mut descending = history.entries(false);
        assert_eq!(descending[0].move_number, 2);
        assert!(descending[0].is_current);
        descending.reverse();
        assert_eq!(ascending, descending);
        assert!(!ascending[2].is_jump_target());
        assert!(ascending[0].is_jump_target());
    }
}
