//! Event system for component communication.

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};

/// Input events that can be sent to components
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    KeyPress(KeyCode),
    MouseClick { x: u16, y: u16, button: u8 },
    MouseScroll { x: u16, y: u16, up: bool },
    Resize { width: u16, height: u16 },
}

impl InputEvent {
    /// Translates a crossterm mouse event; only button presses and the wheel are kept
    pub fn from_mouse(mouse: MouseEvent) -> Option<Self> {
        let button = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => 0,
            MouseEventKind::Down(MouseButton::Right) => 1,
            MouseEventKind::Down(MouseButton::Middle) => 2,
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                return Some(InputEvent::MouseScroll {
                    x: mouse.column,
                    y: mouse.row,
                    up: mouse.kind == MouseEventKind::ScrollUp,
                });
            }
            _ => return None,
        };
        Some(InputEvent::MouseClick {
            x: mouse.column,
            y: mouse.row,
            button,
        })
    }

    /// Returns the position of a left click, if this is one
    pub fn left_click(&self) -> Option<(u16, u16)> {
        match self {
            InputEvent::MouseClick { x, y, button: 0 } => Some((*x, *y)),
            _ => None,
        }
    }
}

/// Main event type for the component system
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentEvent {
    /// Input events (keyboard, mouse, etc.)
    Input(InputEvent),
}

impl ComponentEvent {
    pub fn key(code: KeyCode) -> Self {
        ComponentEvent::Input(InputEvent::KeyPress(code))
    }

    pub fn left_click(x: u16, y: u16) -> Self {
        ComponentEvent::Input(InputEvent::MouseClick { x, y, button: 0 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 7,
            row: 3,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_left_press_becomes_click() {
        let event = InputEvent::from_mouse(mouse(MouseEventKind::Down(MouseButton::Left)));
        assert_eq!(event, Some(InputEvent::MouseClick { x: 7, y: 3, button: 0 }));
        assert_eq!(event.unwrap().left_click(), Some((7, 3)));
    }

    #[test]
    fn test_release_and_moves_are_dropped() {
        assert_eq!(InputEvent::from_mouse(mouse(MouseEventKind::Up(MouseButton::Left))), None);
        assert_eq!(InputEvent::from_mouse(mouse(MouseEventKind::Moved)), None);
    }

    #[test]
    fn test_wheel_keeps_direction() {
        let up = InputEvent::from_mouse(mouse(MouseEventKind::ScrollUp));
        assert_eq!(up, Some(InputEvent::MouseScroll { x: 7, y: 3, up: true }));
        let down = InputEvent::from_mouse(mouse(MouseEventKind::ScrollDown)).unwrap();
        assert_eq!(down, InputEvent::MouseScroll { x: 7, y: 3, up: false });
        assert_eq!(down.left_click(), None);
    }

    #[test]
    fn test_right_click_is_not_left_click() {
        let event = InputEvent::from_mouse(mouse(MouseEventKind::Down(MouseButton::Right))).unwrap();
        assert_eq!(event.left_click(), None);
    }
}
