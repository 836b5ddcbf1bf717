//! Visual theme and styling component for consistent UI appearance.

use ratatui::style::{Color, Modifier, Style};

use crate::games::tictactoe::{GameStatus, Mark};

/// A centralized theme that provides consistent styling across all UI elements
#[derive(Debug, Clone)]
pub struct UITheme {
    // Mark colors
    x_color: Color,
    o_color: Color,
    // UI element colors
    border_color: Color,
    text_color: Color,
    highlight_color: Color,
    win_background: Color,
    muted_color: Color,
    success_color: Color,
}

impl Default for UITheme {
    fn default() -> Self {
        Self {
            x_color: Color::Red,
            o_color: Color::Blue,
            border_color: Color::White,
            text_color: Color::White,
            highlight_color: Color::Yellow,
            win_background: Color::Green,
            muted_color: Color::DarkGray,
            success_color: Color::Green,
        }
    }
}

impl UITheme {
    /// Get the color for a mark
    pub fn mark_color(&self, mark: Mark) -> Color {
        match mark {
            Mark::X => self.x_color,
            Mark::O => self.o_color,
        }
    }

    /// Get style for a board cell, with the win tag applied when set
    pub fn cell_style(&self, cell: Option<Mark>, is_winning: bool) -> Style {
        let base = match cell {
            Some(mark) => Style::default().fg(self.mark_color(mark)).add_modifier(Modifier::BOLD),
            None => Style::default().fg(self.muted_color),
        };
        if is_winning {
            base.bg(self.win_background).fg(Color::Black)
        } else {
            base
        }
    }

    /// Border style for a cell; winning cells get a highlighted frame
    pub fn cell_border_style(&self, is_winning: bool) -> Style {
        if is_winning {
            Style::default().fg(self.win_background).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.muted_color)
        }
    }

    /// Get style for regular text
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_color)
    }

    /// Get style for borders
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border_color)
    }

    /// Style for the status line
    pub fn status_style(&self, status: GameStatus) -> Style {
        match status {
            GameStatus::Winner(_) => Style::default().fg(self.success_color).add_modifier(Modifier::BOLD),
            GameStatus::Draw => Style::default().fg(self.highlight_color).add_modifier(Modifier::BOLD),
            GameStatus::NextPlayer(mark) => Style::default().fg(self.mark_color(mark)),
        }
    }

    /// Style for a clickable history entry
    pub fn button_style(&self) -> Style {
        Style::default().fg(self.text_color).add_modifier(Modifier::UNDERLINED)
    }

    /// Style for the "You are at move" label
    pub fn current_entry_style(&self) -> Style {
        Style::default().fg(self.highlight_color).add_modifier(Modifier::BOLD)
    }

    /// Style for hint text
    pub fn hint_style(&self) -> Style {
        Style::default().fg(self.muted_color)
    }
}
