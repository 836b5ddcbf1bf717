//! Component manager for handling component lifecycle and events.

use std::collections::HashMap;

use ratatui::{layout::Rect, Frame};

use crate::app::App;
use crate::components::core::{Component, ComponentId, ComponentResult};
use crate::components::events::ComponentEvent;

/// Manages the lifecycle and event routing for components
pub struct ComponentManager {
    components: HashMap<ComponentId, Box<dyn Component>>,
    root_component: Option<ComponentId>,
}

impl ComponentManager {
    /// Create a new component manager
    pub fn new() -> Self {
        Self {
            components: HashMap::new(),
            root_component: None,
        }
    }

    fn register_component(&mut self, component: Box<dyn Component>) -> ComponentId {
        let id = component.id();
        self.components.insert(id, component);
        id
    }

    /// Set the root component
    pub fn set_root_component(&mut self, component: Box<dyn Component>) -> ComponentId {
        let id = self.register_component(component);
        self.root_component = Some(id);
        id
    }

    /// Get a component by ID
    pub fn get_component(&self, id: ComponentId) -> Option<&dyn Component> {
        self.components.get(&id).map(|c| c.as_ref())
    }

    /// Downcast a registered component to its concrete type
    pub fn get_as<T: Component>(&self, id: ComponentId) -> Option<&T> {
        self.get_component(id).and_then(|c| c.as_any().downcast_ref::<T>())
    }

    fn send_event_to_component(
        &mut self,
        id: ComponentId,
        event: &ComponentEvent,
        app: &mut App,
    ) -> ComponentResult<bool> {
        match self.components.get_mut(&id) {
            Some(component) => component.handle_event(event, app),
            None => Ok(false),
        }
    }

    /// Offer an event to the root; it delegates down the tree
    pub fn handle_event(&mut self, event: &ComponentEvent, app: &mut App) -> ComponentResult<bool> {
        match self.root_component {
            Some(root_id) => self.send_event_to_component(root_id, event, app),
            None => Ok(false),
        }
    }

    /// Render starting from the root
    pub fn render(&mut self, frame: &mut Frame, area: Rect, app: &App) -> ComponentResult<()> {
        if let Some(root_id) = self.root_component {
            if let Some(root_component) = self.components.get_mut(&root_id) {
                root_component.render(frame, area, app)?;
            }
        }
        Ok(())
    }
}

impl Default for ComponentManager {
    fn default() -> Self {
        Self::new()
    }
}
