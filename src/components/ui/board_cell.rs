//! Board cell component: one clickable square of the 3x3 grid.

use ratatui::{
    layout::{Alignment, Rect},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::components::core::{area_contains, Component, ComponentId, ComponentResult, EventResult};
use crate::components::events::ComponentEvent;
use crate::components::ui::UITheme;
use crate::games::tictactoe::Mark;

/// Renders one board position and reports clicks that land on it.
///
/// The cell never changes the game itself; a consumed click tells the
/// owning board which index was pressed.
pub struct BoardCellComponent {
    id: ComponentId,
    index: usize,
    area: Option<Rect>,
    cell_value: Option<Mark>,
    is_winning: bool,
    theme: UITheme,
}

impl BoardCellComponent {
    pub fn new(index: usize) -> Self {
        Self {
            id: ComponentId::new(),
            index,
            area: None,
            cell_value: None,
            is_winning: false,
            theme: UITheme::default(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn set_cell_value(&mut self, value: Option<Mark>) {
        self.cell_value = value;
    }

    /// Marks the cell as part of the winning line
    pub fn set_winning(&mut self, is_winning: bool) {
        self.is_winning = is_winning;
    }

    pub fn is_winning(&self) -> bool {
        self.is_winning
    }

    /// Where the cell was last drawn
    pub fn area(&self) -> Option<Rect> {
        self.area
    }

    fn symbol(&self) -> &'static str {
        match self.cell_value {
            Some(Mark::X) => "X",
            Some(Mark::O) => "O",
            None => " ",
        }
    }
}

impl Component for BoardCellComponent {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, _app: &App) -> ComponentResult<()> {
        self.area = Some(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cell_border_style(self.is_winning));
        let style = self.theme.cell_style(self.cell_value, self.is_winning);
        let mut paragraph = Paragraph::new(Span::styled(self.symbol(), style))
            .alignment(Alignment::Center)
            .block(block);
        if self.is_winning {
            paragraph = paragraph.style(style);
        }
        frame.render_widget(paragraph, area);

        Ok(())
    }

    fn handle_event(&mut self, event: &ComponentEvent, _app: &mut App) -> EventResult {
        let ComponentEvent::Input(input) = event;
        match (input.left_click(), self.area) {
            (Some((x, y)), Some(area)) => Ok(area_contains(area, x, y)),
            _ => Ok(false),
        }
    }

    crate::impl_component_base!(BoardCellComponent);
}
