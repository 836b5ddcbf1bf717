//! Move history component that lists every snapshot as a time-travel target.

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};
use tracing::debug;

use crate::app::App;
use crate::components::core::{area_contains, Component, ComponentId, ComponentResult, EventResult};
use crate::components::events::{ComponentEvent, InputEvent};
use crate::components::ui::UITheme;

/// Height of the order toggle button including its border
const TOGGLE_HEIGHT: u16 = 3;

/// Rows moved per mouse wheel notch
const WHEEL_STEP: usize = 3;

/// Component that displays the move history and the sort-order toggle.
///
/// The sort order and the scroll position are the only state it owns;
/// entries are rebuilt from the app's history on every render. When the
/// list is taller than the panel it scrolls, and the current entry is
/// brought into view whenever the current move or the order changes.
pub struct MoveHistoryComponent {
    id: ComponentId,
    area: Option<Rect>,
    ascending: bool,
    scroll_offset: usize,
    /// Entry count and visible rows seen by the last render
    entry_count: usize,
    visible_rows: usize,
    /// (current move, history length) seen by the last render
    last_seen: Option<(usize, usize)>,
    follow_current: bool,
    /// Drawn rows of clickable entries, paired with their move number
    entry_areas: Vec<(Rect, usize)>,
    toggle_area: Option<Rect>,
    theme: UITheme,
}

impl MoveHistoryComponent {
    pub fn new(ascending: bool) -> Self {
        Self {
            id: ComponentId::new(),
            area: None,
            ascending,
            scroll_offset: 0,
            entry_count: 0,
            visible_rows: 0,
            last_seen: None,
            follow_current: true,
            entry_areas: Vec::new(),
            toggle_area: None,
            theme: UITheme::default(),
        }
    }

    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    /// Flips the display order; the history itself is untouched
    pub fn toggle_order(&mut self) {
        self.ascending = !self.ascending;
        self.follow_current = true;
        debug!(ascending = self.ascending, "history order toggled");
    }

    /// Text of the toggle button: names the order currently shown
    pub fn toggle_label(&self) -> &'static str {
        if self.ascending {
            "Ascending"
        } else {
            "Descending"
        }
    }

    /// Where the clickable entry for `move_number` was last drawn
    pub fn entry_area(&self, move_number: usize) -> Option<Rect> {
        self.entry_areas
            .iter()
            .find(|(_, n)| *n == move_number)
            .map(|(area, _)| *area)
    }

    pub fn toggle_area(&self) -> Option<Rect> {
        self.toggle_area
    }

    /// Index of the first entry drawn
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    fn max_scroll(&self) -> usize {
        self.entry_count.saturating_sub(self.visible_rows)
    }

    fn clamp_scroll(&mut self) {
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(rows);
    }

    pub fn scroll_down(&mut self, rows: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(rows);
        self.clamp_scroll();
    }

    /// Moves the window the least amount that shows `position`
    fn scroll_into_view(&mut self, position: usize) {
        if self.visible_rows == 0 {
            return;
        }
        if position < self.scroll_offset {
            self.scroll_offset = position;
        } else if position >= self.scroll_offset + self.visible_rows {
            self.scroll_offset = position + 1 - self.visible_rows;
        }
    }

    fn handle_click(&mut self, x: u16, y: u16, app: &mut App) -> bool {
        if self.toggle_area.map_or(false, |area| area_contains(area, x, y)) {
            self.toggle_order();
            return true;
        }
        let target = self
            .entry_areas
            .iter()
            .find(|(area, _)| area_contains(*area, x, y))
            .map(|(_, n)| *n);
        match target {
            Some(move_number) => {
                app.jump_to(move_number);
                true
            }
            None => false,
        }
    }
}

impl Component for MoveHistoryComponent {
    fn id(&self) -> ComponentId {
        self.id
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &App) -> ComponentResult<()> {
        self.area = Some(area);
        self.entry_areas.clear();
        self.toggle_area = None;

        let block = Block::default()
            .title("Moves")
            .borders(Borders::ALL)
            .border_style(self.theme.border_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.width == 0 || inner.height == 0 {
            return Ok(());
        }

        // Entries take the rows above the toggle button
        let list_height = inner.height.saturating_sub(TOGGLE_HEIGHT + 1);
        let entries = app.history().entries(self.ascending);
        self.entry_count = entries.len();
        self.visible_rows = list_height as usize;

        let seen = (app.history().current_move(), app.history().len());
        if self.follow_current || self.last_seen != Some(seen) {
            if let Some(position) = entries.iter().position(|entry| entry.is_current) {
                self.scroll_into_view(position);
            }
            self.follow_current = false;
            self.last_seen = Some(seen);
        }
        self.clamp_scroll();

        let overflows = entries.len() > self.visible_rows && list_height > 0;
        let row_width = if overflows { inner.width.saturating_sub(1) } else { inner.width };

        let visible = entries.iter().enumerate().skip(self.scroll_offset).take(self.visible_rows);
        for (row_index, (position, entry)) in visible.enumerate() {
            let row = Rect::new(inner.x, inner.y + row_index as u16, row_width, 1);
            let style = if entry.is_current {
                self.theme.current_entry_style()
            } else {
                self.theme.button_style()
            };
            let line = Line::from(vec![
                Span::styled(format!("{:>2}. ", position + 1), self.theme.hint_style()),
                Span::styled(entry.to_string(), style),
            ]);
            frame.render_widget(Paragraph::new(line), row);
            if entry.is_jump_target() {
                self.entry_areas.push((row, entry.move_number));
            }
        }

        if overflows {
            let track = Rect::new(inner.x + inner.width - 1, inner.y, 1, list_height);
            let scrollbar = Scrollbar::default()
                .orientation(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"));
            let mut scrollbar_state = ScrollbarState::default()
                .content_length(entries.len())
                .viewport_content_length(self.visible_rows)
                .position(self.scroll_offset);
            frame.render_stateful_widget(scrollbar, track, &mut scrollbar_state);
        }

        if inner.height > TOGGLE_HEIGHT {
            let label = self.toggle_label();
            let width = (label.len() as u16 + 4).min(inner.width);
            let toggle = Rect::new(inner.x, inner.y + inner.height - TOGGLE_HEIGHT, width, TOGGLE_HEIGHT);
            let button = Paragraph::new(Span::styled(label, self.theme.text_style()))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).border_style(self.theme.border_style()));
            frame.render_widget(button, toggle);
            self.toggle_area = Some(toggle);
        }

        Ok(())
    }

    fn handle_event(&mut self, event: &ComponentEvent, app: &mut App) -> EventResult {
        match event {
            ComponentEvent::Input(InputEvent::KeyPress(key)) => match key {
                KeyCode::Char('s') | KeyCode::Char('S') => {
                    self.toggle_order();
                    Ok(true)
                }
                KeyCode::Home => {
                    app.jump_to(0);
                    Ok(true)
                }
                KeyCode::End => {
                    let latest = app.history().latest_move();
                    app.jump_to(latest);
                    Ok(true)
                }
                KeyCode::Up => {
                    self.scroll_up(1);
                    Ok(true)
                }
                KeyCode::Down => {
                    self.scroll_down(1);
                    Ok(true)
                }
                KeyCode::PageUp => {
                    self.scroll_up(self.visible_rows.max(1));
                    Ok(true)
                }
                KeyCode::PageDown => {
                    self.scroll_down(self.visible_rows.max(1));
                    Ok(true)
                }
                _ => Ok(false),
            },
            ComponentEvent::Input(InputEvent::MouseScroll { x, y, up }) => {
                if !self.area.map_or(false, |area| area_contains(area, *x, *y)) {
                    return Ok(false);
                }
                if *up {
                    self.scroll_up(WHEEL_STEP);
                } else {
                    self.scroll_down(WHEEL_STEP);
                }
                Ok(true)
            }
            ComponentEvent::Input(input) => match input.left_click() {
                Some((x, y)) => Ok(self.handle_click(x, y, app)),
                None => Ok(false),
            },
        }
    }

    crate::impl_component_base!(MoveHistoryComponent);
}

impl Default for MoveHistoryComponent {
    fn default() -> Self {
        Self::new(true)
    }
}
