//! # Input Handling Module
//!
//! Translates raw crossterm events into component events and routes them
//! through the component manager.

use crossterm::event::{Event, KeyEventKind};
use std::io;

use crate::app::App;
use crate::components::events::{ComponentEvent, InputEvent};
use crate::components::manager::ComponentManager;

/// Converts a crossterm event into an input event
///
/// Key releases, mouse motion and focus changes are dropped.
pub fn translate(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(InputEvent::KeyPress(key.code)),
        Event::Mouse(mouse) => InputEvent::from_mouse(mouse),
        Event::Resize(width, height) => Some(InputEvent::Resize { width, height }),
        _ => None,
    }
}

/// Sends one input event to the component tree
///
/// # Returns
/// Whether any component consumed the event
pub fn dispatch(manager: &mut ComponentManager, app: &mut App, input: InputEvent) -> io::Result<bool> {
    let event = ComponentEvent::Input(input);
    Ok(manager.handle_event(&event, app)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ui::RootComponent;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_translate_key_press_only() {
        assert_eq!(
            translate(key(KeyCode::Char('q'), KeyEventKind::Press)),
            Some(InputEvent::KeyPress(KeyCode::Char('q')))
        );
        assert_eq!(translate(key(KeyCode::Char('q'), KeyEventKind::Release)), None);
    }

    #[test]
    fn test_translate_mouse_and_resize() {
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(translate(click), Some(InputEvent::MouseClick { x: 3, y: 4, button: 0 }));
        assert_eq!(
            translate(Event::Resize(80, 24)),
            Some(InputEvent::Resize { width: 80, height: 24 })
        );
        assert_eq!(translate(Event::FocusGained), None);
    }

    #[test]
    fn test_dispatch_routes_to_root() {
        let mut app = App::default();
        let mut manager = ComponentManager::new();
        manager.set_root_component(Box::new(RootComponent::default()));

        assert!(dispatch(&mut manager, &mut app, InputEvent::KeyPress(KeyCode::Char('5'))).unwrap());
        assert_eq!(app.history().current_move(), 1);

        assert!(dispatch(&mut manager, &mut app, InputEvent::KeyPress(KeyCode::Esc)).unwrap());
        assert!(app.should_quit);
    }
}
