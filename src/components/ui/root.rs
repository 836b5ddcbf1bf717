//! Root component implementation.

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Span,
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::components::core::{Component, ComponentId, ComponentResult, EventResult};
use crate::components::events::{ComponentEvent, InputEvent};
use crate::components::ui::{BoardComponent, MoveHistoryComponent, UITheme};

/// Width of the board panel: three cells plus the panel border and some air
const BOARD_PANEL_WIDTH: u16 = 24;

const KEY_HINTS: &str = "click a cell or 1-9 to play | click a move to travel | s: order | Home/End | q: quit";

/// The top-level container: board on the left, move list on the right
pub struct RootComponent {
    id: ComponentId,
    board: BoardComponent,
    history: MoveHistoryComponent,
    theme: UITheme,
}

impl RootComponent {
    pub fn new(ascending: bool) -> Self {
        Self {
            id: ComponentId::new(),
            board: BoardComponent::new(),
            history: MoveHistoryComponent::new(ascending),
            theme: UITheme::default(),
        }
    }

    /// Builds the root with the initial order taken from the app config
    pub fn from_app(app: &App) -> Self {
        Self::new(!app.config.descending)
    }

    pub fn board(&self) -> &BoardComponent {
        &self.board
    }

    pub fn history_panel(&self) -> &MoveHistoryComponent {
        &self.history
    }
}

impl Component for RootComponent {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &App) -> ComponentResult<()> {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        let panels = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(BOARD_PANEL_WIDTH), Constraint::Min(0)])
            .split(rows[0]);

        self.board.render(frame, panels[0], app)?;
        self.history.render(frame, panels[1], app)?;

        frame.render_widget(Paragraph::new(Span::styled(KEY_HINTS, self.theme.hint_style())), rows[1]);
        Ok(())
    }

    fn handle_event(&mut self, event: &ComponentEvent, app: &mut App) -> EventResult {
        match event {
            ComponentEvent::Input(InputEvent::KeyPress(KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)) => {
                app.quit();
                Ok(true)
            }
            ComponentEvent::Input(InputEvent::Resize { .. }) => Ok(false), // layout is recomputed on the next draw
            _ => {
                if self.board.handle_event(event, app)? {
                    return Ok(true);
                }
                self.history.handle_event(event, app)
            }
        }
    }

    fn children(&self) -> Vec<&dyn Component> {
        vec![&self.board as &dyn Component, &self.history]
    }

    crate::impl_component_base!(RootComponent);
}

impl Default for RootComponent {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_children() {
        let root = RootComponent::default();
        assert_eq!(root.children().len(), 2);
        assert_eq!(root.board().children().len(), 9);
    }

    #[test]
    fn test_quit_keys() {
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let mut app = App::default();
            let mut root = RootComponent::default();
            assert!(root.handle_event(&ComponentEvent::key(code), &mut app).unwrap());
            assert!(app.should_quit);
        }
    }

    #[test]
    fn test_digit_keys_play_row_major() {
        let mut app = App::default();
        let mut root = RootComponent::default();
        root.handle_event(&ComponentEvent::key(KeyCode::Char('9')), &mut app).unwrap();
        root.handle_event(&ComponentEvent::key(KeyCode::Char('1')), &mut app).unwrap();
        assert_eq!(app.current_squares().get(8), Some(crate::games::tictactoe::Mark::X));
        assert_eq!(app.current_squares().get(0), Some(crate::games::tictactoe::Mark::O));

        // '0' is not a cell
        assert!(!root.handle_event(&ComponentEvent::key(KeyCode::Char('0')), &mut app).unwrap());
        assert_eq!(app.history().len(), 3);
    }

    #[test]
    fn test_resize_is_not_consumed() {
        let mut app = App::default();
        let mut root = RootComponent::from_app(&app);
        let event = ComponentEvent::Input(InputEvent::Resize { width: 80, height: 24 });
        assert!(!root.handle_event(&event, &mut app).unwrap());
    }
}
