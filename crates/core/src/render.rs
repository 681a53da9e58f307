//! Render instructions emitted by the engine.
//!
//! The engine never draws. It queues these commands in order and the
//! presentation layer drains and applies them.

use crate::types::{CardFace, CardState, Difficulty};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCommand {
    /// Redraw the whole board face-down.
    DrawBoard {
        difficulty: Difficulty,
        faces: Vec<CardFace>,
        columns: u8,
    },
    /// Show a card face-up, face-down or matched.
    CardState { position: usize, state: CardState },
    Moves(u32),
    Matches(u32),
    /// Clock text, `mm:ss`.
    Timer(String),
    ShowWin(String),
    HideWin,
    /// Best score for a tier; `None` means no record yet.
    BestScore {
        difficulty: Difficulty,
        moves: Option<u32>,
    },
    /// Whether starting the clock is currently offered.
    StartEnabled(bool),
}
