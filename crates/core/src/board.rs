//! Board module - the ordered card layout for one session
//!
//! A board holds `card_count()` cards for its difficulty, each face exactly
//! twice. Positions are 0-indexed and stable for the lifetime of the board;
//! the grid shape is only a presentation concern (`Difficulty::columns`).

use crate::error::LayoutError;
use crate::rng::{deal_faces, SimpleRng};
use crate::types::{CardFace, CardState, Difficulty};

/// A single card on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub position: usize,
    pub face: CardFace,
    pub state: CardState,
}

impl Card {
    pub fn is_matched(&self) -> bool {
        self.state == CardState::Matched
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    difficulty: Difficulty,
    cards: Vec<Card>,
}

impl Board {
    /// Deal a freshly shuffled board for `difficulty`.
    pub fn deal(difficulty: Difficulty, rng: &mut SimpleRng) -> Self {
        Self::from_valid_faces(difficulty, deal_faces(difficulty, rng))
    }

    /// Build a board from an explicit face layout (all cards face-down).
    ///
    /// The layout must have the tier's card count and every face exactly twice.
    pub fn from_faces(difficulty: Difficulty, faces: Vec<CardFace>) -> Result<Self, LayoutError> {
        let expected = difficulty.card_count();
        if faces.len() != expected {
            return Err(LayoutError::WrongSize {
                expected,
                actual: faces.len(),
            });
        }

        let mut counts = [0usize; crate::types::FACE_COUNT];
        for face in &faces {
            counts[face.index() as usize] += 1;
        }
        if let Some((face, &count)) = counts
            .iter()
            .enumerate()
            .find(|(_, count)| **count != 0 && **count != 2)
        {
            return Err(LayoutError::Unpaired {
                face: face as u8,
                count,
            });
        }

        Ok(Self::from_valid_faces(difficulty, faces))
    }

    fn from_valid_faces(difficulty: Difficulty, faces: Vec<CardFace>) -> Self {
        let cards = faces
            .into_iter()
            .enumerate()
            .map(|(position, face)| Card {
                position,
                face,
                state: CardState::FaceDown,
            })
            .collect();
        Self { difficulty, cards }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn total_pairs(&self) -> usize {
        self.cards.len() / 2
    }

    pub fn columns(&self) -> u8 {
        self.difficulty.columns()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    /// Face values in board order.
    pub fn faces(&self) -> Vec<CardFace> {
        self.cards.iter().map(|c| c.face).collect()
    }

    /// A card can be revealed only while it is face-down.
    pub fn is_selectable(&self, position: usize) -> bool {
        self.get(position)
            .is_some_and(|c| c.state == CardState::FaceDown)
    }

    /// Returns false for out-of-range positions.
    pub(crate) fn set_state(&mut self, position: usize, state: CardState) -> bool {
        match self.cards.get_mut(position) {
            Some(card) => {
                card.state = state;
                true
            }
            None => false,
        }
    }

    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched()).count()
    }

    /// Position of the other card carrying the same face.
    pub fn partner_of(&self, position: usize) -> Option<usize> {
        let face = self.get(position)?.face;
        self.cards
            .iter()
            .find(|c| c.face == face && c.position != position)
            .map(|c| c.position)
    }
}
