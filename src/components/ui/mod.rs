//! UI component implementations.

pub mod board;
pub mod board_cell;
pub mod move_history;
pub mod root;
pub mod theme;

// Re-export reusable components
pub use board::BoardComponent;
pub use board_cell::BoardCellComponent;
pub use move_history::MoveHistoryComponent;
pub use root::RootComponent;
pub use theme::UITheme;
