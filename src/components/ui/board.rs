//! Board component: status line plus the 3x3 grid of cells.
//!
//! The board keeps no game state of its own. Each render copies the current
//! snapshot into its cells and tags the winning line; each accepted click is
//! turned into a new snapshot and handed to `App::commit_move`.

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tictactoe_shared::{CELLS, SIZE};
use tracing::debug;

use crate::app::App;
use crate::components::core::{Component, ComponentId, ComponentResult, EventResult};
use crate::components::events::{ComponentEvent, InputEvent};
use crate::components::ui::{BoardCellComponent, UITheme};
use crate::games::tictactoe::{Mark, Squares};

/// Width of one cell including its border
pub const CELL_WIDTH: u16 = 5;
/// Height of one cell including its border
pub const CELL_HEIGHT: u16 = 3;

/// Produces the snapshot that results from clicking `index`.
///
/// Returns `None` when the click must be ignored: the cell is already marked,
/// the board already has a winning line, or the index is off the board.
pub fn play(squares: &Squares, index: usize, x_is_next: bool) -> Option<Squares> {
    if index >= CELLS || squares.get(index).is_some() || squares.winning_line().is_some() {
        return None;
    }
    Some(squares.with_mark(index, Mark::for_turn(x_is_next)))
}

/// Renders the status text and the grid, and turns cell clicks into moves
pub struct BoardComponent {
    id: ComponentId,
    cells: Vec<BoardCellComponent>,
    theme: UITheme,
}

impl BoardComponent {
    pub fn new() -> Self {
        Self {
            id: ComponentId::new(),
            cells: (0..CELLS).map(BoardCellComponent::new).collect(),
            theme: UITheme::default(),
        }
    }

    pub fn cell(&self, index: usize) -> Option<&BoardCellComponent> {
        self.cells.get(index)
    }

    /// Copies the viewed snapshot and win line into the cells
    fn sync_cells(&mut self, app: &App) {
        let squares = app.current_squares();
        let win_line = squares.winning_line();
        for cell in &mut self.cells {
            let index = cell.index();
            cell.set_cell_value(squares.get(index));
            cell.set_winning(win_line.map_or(false, |line| line.contains(index)));
        }
    }

    /// Applies a click on `index` to the live snapshot, or ignores it
    fn click_cell(&self, index: usize, app: &mut App) {
        match play(app.current_squares(), index, app.x_is_next()) {
            Some(next) => app.commit_move(next),
            None => debug!(index, "ignoring click on board"),
        }
    }

    /// Splits the grid area into one rectangle per cell, row-major
    fn cell_areas(grid: Rect) -> Vec<Rect> {
        rows_or_columns(grid, Direction::Vertical, CELL_HEIGHT)
            .into_iter()
            .flat_map(|row| rows_or_columns(row, Direction::Horizontal, CELL_WIDTH))
            .collect()
    }
}

/// Cuts `area` into `SIZE` fixed-size strips; leftover space stays unused
fn rows_or_columns(area: Rect, direction: Direction, length: u16) -> Vec<Rect> {
    let mut constraints = vec![Constraint::Length(length); SIZE];
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(direction)
        .constraints(constraints)
        .split(area);
    chunks[..SIZE].to_vec()
}

impl Component for BoardComponent {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &App) -> ComponentResult<()> {
        self.sync_cells(app);

        let block = Block::default()
            .title("Tic-Tac-Toe")
            .borders(Borders::ALL)
            .border_style(self.theme.border_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(CELL_HEIGHT * SIZE as u16),
                Constraint::Min(0),
            ])
            .split(inner);

        let status = app.status();
        let status_line = Paragraph::new(Span::styled(status.to_string(), self.theme.status_style(status)));
        frame.render_widget(status_line, chunks[0]);

        for (cell, cell_area) in self.cells.iter_mut().zip(Self::cell_areas(chunks[2])) {
            cell.render(frame, cell_area, app)?;
        }

        Ok(())
    }

    fn handle_event(&mut self, event: &ComponentEvent, app: &mut App) -> EventResult {
        match event {
            ComponentEvent::Input(InputEvent::KeyPress(KeyCode::Char(c))) => match c.to_digit(10) {
                Some(digit @ 1..=9) => {
                    self.click_cell(digit as usize - 1, app);
                    Ok(true)
                }
                _ => Ok(false),
            },
            ComponentEvent::Input(InputEvent::MouseClick { .. }) => {
                let mut clicked = None;
                for cell in &mut self.cells {
                    if cell.handle_event(event, app)? {
                        clicked = Some(cell.index());
                        break;
                    }
                }
                match clicked {
                    Some(index) => {
                        self.click_cell(index, app);
                        Ok(true)
                    }
                    None => Ok(false),
                }
            }
            _ => Ok(false),
        }
    }

    fn children(&self) -> Vec<&dyn Component> {
        self.cells.iter().map(|c| c as &dyn Component).collect()
    }

    crate::impl_component_base!(BoardComponent);
}

impl Default for BoardComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_play_places_turn_mark() {
        let squares = Squares::empty();
        let next = play(&squares, 4, true).unwrap();
        assert_eq!(next.get(4), Some(Mark::X));
        let next = play(&next, 0, false).unwrap();
        assert_eq!(next.get(0), Some(Mark::O));
    }

    #[test]
    fn test_play_ignores_marked_cell() {
        let squares = Squares::from_str("X........").unwrap();
        assert_eq!(play(&squares, 0, false), None);
    }

    #[test]
    fn test_play_ignores_clicks_after_win() {
        let squares = Squares::from_str("XXX OO. ...").unwrap();
        for index in 0..CELLS {
            assert_eq!(play(&squares, index, false), None);
        }
    }

    #[test]
    fn test_play_ignores_off_board_index() {
        assert_eq!(play(&Squares::empty(), CELLS, true), None);
    }

    #[test]
    fn test_cell_areas_are_row_major() {
        let areas = BoardComponent::cell_areas(Rect::new(10, 20, 15, 9));
        assert_eq!(areas.len(), CELLS);
        assert_eq!(areas[0], Rect::new(10, 20, 5, 3));
        assert_eq!(areas[2], Rect::new(20, 20, 5, 3));
        assert_eq!(areas[3], Rect::new(10, 23, 5, 3));
        assert_eq!(areas[8], Rect::new(20, 26, 5, 3));
    }
}
