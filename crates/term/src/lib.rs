//! Terminal presentation layer.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and instead renders into a simple
//! framebuffer that is flushed to a terminal backend.
//!
//! Data flow:
//! - the engine queues [`core::RenderCommand`]s
//! - [`BoardView`] applies them, holding exactly what should be on screen
//! - [`GameView`] draws a `BoardView` (plus the cursor) into a [`FrameBuffer`]
//! - [`TerminalRenderer`] diffs and flushes frames through crossterm

pub mod board_view;
pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use tui_memory_core as core;
pub use tui_memory_types as types;

pub use board_view::{BoardView, CardView};
pub use fb::{BoxChars, Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport, CARD_H, CARD_W};
pub use render_throttle::{frame_fingerprint, RenderThrottle};
pub use renderer::{encode_diff_into, encode_full_into, stdout_is_terminal, TerminalRenderer};
