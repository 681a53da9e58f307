//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key and mouse events into [`crate::types::InputAction`] and
//! provides the grid cursor used to pick cards from the keyboard.

pub mod cursor;
pub mod map;

pub use tui_memory_types as types;

pub use cursor::CardCursor;
pub use map::{handle_key_event, handle_mouse_event, should_quit};
