//! Core component definitions and traits.

use std::any::Any;
use std::fmt;
use std::io;

use ratatui::{layout::Rect, Frame};

use crate::app::App;
use crate::components::events::ComponentEvent;

/// Unique identifier for components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentId(pub u64);

impl ComponentId {
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        ComponentId(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ComponentId {
    fn default() -> Self {
        Self::new()
    }
}

/// Failures raised while rendering or handling events
#[derive(Debug)]
pub enum ComponentError {
    /// Terminal I/O failed underneath the component
    Io(io::Error),
}

impl fmt::Display for ComponentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentError::Io(err) => write!(f, "terminal I/O failed: {}", err),
        }
    }
}

impl std::error::Error for ComponentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ComponentError::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for ComponentError {
    fn from(err: io::Error) -> Self {
        ComponentError::Io(err)
    }
}

impl From<ComponentError> for io::Error {
    fn from(err: ComponentError) -> Self {
        match err {
            ComponentError::Io(err) => err,
        }
    }
}

pub type ComponentResult<T> = Result<T, ComponentError>;

/// `Ok(true)` when the event was consumed
pub type EventResult = ComponentResult<bool>;

/// Core trait that all components must implement
pub trait Component: Any {
    /// Get the unique ID of this component
    fn id(&self) -> ComponentId;

    /// Get the type name of this component
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Render the component to the frame, remembering where it was drawn
    fn render(&mut self, frame: &mut Frame, area: Rect, app: &App) -> ComponentResult<()>;

    /// Handle component-specific events
    fn handle_event(&mut self, _event: &ComponentEvent, _app: &mut App) -> EventResult {
        Ok(false) // Default: don't consume events
    }

    /// Get child components
    fn children(&self) -> Vec<&dyn Component> {
        Vec::new() // Default: no children
    }

    /// Get component as Any for downcasting
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Returns true if the terminal position lies inside `area`
pub fn area_contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x.saturating_add(area.width) && y >= area.y && y < area.y.saturating_add(area.height)
}

/// Macro to help implement Component trait
#[macro_export]
macro_rules! impl_component_base {
    ($type:ty) => {
        fn as_any(&self) -> &dyn std::any::Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
            self
        }

        fn type_name(&self) -> &'static str {
            std::any::type_name::<$type>()
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(ComponentId::new(), ComponentId::new());
    }

    #[test]
    fn test_area_contains() {
        let area = Rect::new(2, 3, 4, 2);
        assert!(area_contains(area, 2, 3));
        assert!(area_contains(area, 5, 4));
        assert!(!area_contains(area, 6, 4));
        assert!(!area_contains(area, 2, 5));
        assert!(!area_contains(area, 1, 3));
    }

    #[test]
    fn test_error_converts_to_io() {
        let err = ComponentError::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert!(err.to_string().contains("closed"));
        assert!(std::error::Error::source(&err).is_some());

        let err: io::Error = err.into();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
