//! BoardView: the presentation-side model of the game.
//!
//! It only changes by applying [`RenderCommand`]s drained from the engine, so
//! what is drawn is exactly what the engine asked for.

use crate::core::RenderCommand;
use crate::types::{format_clock, CardFace, CardState, Difficulty};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardView {
    pub face: CardFace,
    pub state: CardState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub difficulty: Difficulty,
    pub columns: u8,
    pub cards: Vec<CardView>,
    pub moves: u32,
    pub matches: u32,
    pub timer: String,
    pub win_message: Option<String>,
    pub best_easy: Option<u32>,
    pub best_hard: Option<u32>,
    pub start_enabled: bool,
    /// Bumped on every applied command; cheap change detection for the
    /// render throttle.
    revision: u64,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            columns: Difficulty::Easy.columns(),
            cards: Vec::new(),
            moves: 0,
            matches: 0,
            timer: format_clock(0),
            win_message: None,
            best_easy: None,
            best_hard: None,
            start_enabled: true,
            revision: 0,
        }
    }
}

impl BoardView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn rows(&self) -> usize {
        let cols = (self.columns as usize).max(1);
        self.cards.len().div_ceil(cols)
    }

    pub fn total_pairs(&self) -> u32 {
        (self.cards.len() / 2) as u32
    }

    pub fn best(&self, difficulty: Difficulty) -> Option<u32> {
        match difficulty {
            Difficulty::Easy => self.best_easy,
            Difficulty::Hard => self.best_hard,
        }
    }

    /// Apply one command. Returns true if the board was redrawn (card count
    /// or grid shape may have changed).
    pub fn apply(&mut self, command: RenderCommand) -> bool {
        self.revision = self.revision.wrapping_add(1);
        match command {
            RenderCommand::DrawBoard {
                difficulty,
                faces,
                columns,
            } => {
                self.difficulty = difficulty;
                self.columns = columns;
                self.cards = faces
                    .into_iter()
                    .map(|face| CardView {
                        face,
                        state: CardState::FaceDown,
                    })
                    .collect();
                return true;
            }
            RenderCommand::CardState { position, state } => {
                if let Some(card) = self.cards.get_mut(position) {
                    card.state = state;
                }
            }
            RenderCommand::Moves(n) => self.moves = n,
            RenderCommand::Matches(n) => self.matches = n,
            RenderCommand::Timer(text) => self.timer = text,
            RenderCommand::ShowWin(text) => self.win_message = Some(text),
            RenderCommand::HideWin => self.win_message = None,
            RenderCommand::BestScore { difficulty, moves } => match difficulty {
                Difficulty::Easy => self.best_easy = moves,
                Difficulty::Hard => self.best_hard = moves,
            },
            RenderCommand::StartEnabled(enabled) => self.start_enabled = enabled,
        }
        false
    }

    /// Apply commands in order. Returns true if any of them redrew the board.
    pub fn apply_all(&mut self, commands: impl IntoIterator<Item = RenderCommand>) -> bool {
        let mut redrawn = false;
        for command in commands {
            redrawn |= self.apply(command);
        }
        redrawn
    }
}
