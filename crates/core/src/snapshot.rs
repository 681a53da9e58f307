//! Point-in-time copies of the engine state.
//!
//! The engine keeps its session private; a snapshot is the read-only view
//! handed to tests and anything else that wants to inspect a whole game at
//! once.

use crate::board::Card;
use crate::types::Difficulty;

/// Point-in-time copy of a session, for observers and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub difficulty: Difficulty,
    pub episode_id: u32,
    pub cards: Vec<Card>,
    pub face_up: Vec<usize>,
    pub moves: u32,
    pub matched_pairs: u32,
    pub total_pairs: u32,
    pub elapsed_secs: u32,
    pub started: bool,
    pub won: bool,
    /// Milliseconds until the pending pair is judged.
    pub eval_remaining_ms: Option<u32>,
}

impl GameSnapshot {
    pub fn awaiting_evaluation(&self) -> bool {
        self.eval_remaining_ms.is_some()
    }
}
