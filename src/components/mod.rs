//! # Component Architecture Module
//!
//! Components are self-contained UI elements that render from the shared
//! `App` state and handle input events. The root owns the board and the
//! history panel; the board owns its nine cells.

pub mod core;
pub mod events;
pub mod manager;
pub mod ui;
