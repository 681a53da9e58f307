//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Sizes
//!
//! | Difficulty | Cards | Pairs | Grid |
//! |------------|-------|-------|------|
//! | `easy` | 12 | 6 | 4 x 3 |
//! | `hard` | 24 | 12 | 6 x 4 |
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `EVAL_DELAY_MS` | 1000 | Time both cards stay visible before the pair is judged |
//! | `CLOCK_TICK_MS` | 1000 | Elapsed-time counter resolution |
//!
//! # Examples
//!
//! ```
//! use tui_memory_types::{format_clock, win_message, CardFace, Difficulty};
//!
//! let tier = Difficulty::from_str("HARD").unwrap();
//! assert_eq!(tier.card_count(), 24);
//! assert_eq!(tier.columns(), 6);
//!
//! assert_eq!(CardFace::new(0).unwrap().symbol(), "🍎");
//! assert_eq!(format_clock(75), "01:15");
//! assert_eq!(
//!     win_message(6, 42),
//!     "Congratulations! You completed the game in 6 moves and 42 seconds!"
//! );
//! ```

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Delay between the second reveal and the match evaluation.
pub const EVAL_DELAY_MS: u32 = 1000;

/// The elapsed-time counter ticks once per second.
pub const CLOCK_TICK_MS: u32 = 1000;

/// Number of distinct face symbols available.
pub const FACE_COUNT: usize = 18;

/// Fixed symbol set. Boards use the first `pairs` entries.
pub const FACE_SYMBOLS: [&str; FACE_COUNT] = [
    "🍎", "🍌", "🍇", "🍊", "🍓", "🍒", "🍕", "🍔", "🍦", "🍩", "🌮", "🥝", "🚗", "⚽", "🎮",
    "🎸", "🎨", "📚",
];

/// Score store key for the easy tier.
pub const BEST_SCORE_KEY_EASY: &str = "memoryGameBestScoreEasy";

/// Score store key for the hard tier.
pub const BEST_SCORE_KEY_HARD: &str = "memoryGameBestScoreHard";

/// Board size tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 2] = [Difficulty::Easy, Difficulty::Hard];

    /// Parse difficulty from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_memory_types::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_str("easy"), Some(Difficulty::Easy));
    /// assert_eq!(Difficulty::from_str(" Hard "), Some(Difficulty::Hard));
    /// assert_eq!(Difficulty::from_str("nightmare"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Parse difficulty, falling back to `Easy` for unknown names.
    pub fn from_str_or_default(s: &str) -> Self {
        Self::from_str(s).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Hard => "hard",
        }
    }

    /// Total cards on the board.
    pub fn card_count(&self) -> usize {
        match self {
            Difficulty::Easy => 12,
            Difficulty::Hard => 24,
        }
    }

    pub fn pair_count(&self) -> usize {
        self.card_count() / 2
    }

    /// Grid columns used when laying out the board.
    pub fn columns(&self) -> u8 {
        match self {
            Difficulty::Easy => 4,
            Difficulty::Hard => 6,
        }
    }

    pub fn rows(&self) -> u8 {
        (self.card_count() / self.columns() as usize) as u8
    }

    /// Key under which the best score for this tier is persisted.
    pub fn best_score_key(&self) -> &'static str {
        match self {
            Difficulty::Easy => BEST_SCORE_KEY_EASY,
            Difficulty::Hard => BEST_SCORE_KEY_HARD,
        }
    }

    /// The other tier.
    pub fn toggled(&self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}

/// A face value: an index into [`FACE_SYMBOLS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardFace(u8);

impl CardFace {
    /// Returns `None` when `index` is outside the symbol set.
    pub fn new(index: u8) -> Option<Self> {
        if (index as usize) < FACE_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    pub fn index(&self) -> u8 {
        self.0
    }

    pub fn symbol(&self) -> &'static str {
        FACE_SYMBOLS[self.0 as usize]
    }

    /// Single-column glyph for terminals (`A`..`R`).
    ///
    /// Emoji occupy two terminal columns, which breaks a one-char-per-cell
    /// framebuffer.
    pub fn glyph(&self) -> char {
        (b'A' + self.0) as char
    }

    /// The first `pairs` faces of the symbol set, clamped to its size.
    pub fn first(pairs: usize) -> impl Iterator<Item = CardFace> {
        (0..pairs.min(FACE_COUNT) as u8).map(CardFace)
    }
}

/// Visibility state of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CardState {
    #[default]
    FaceDown,
    FaceUp,
    /// Permanently revealed; never selectable again.
    Matched,
}

/// Cursor movement direction on the card grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Player intents produced by the input layer.
///
/// Cursor movement is handled by the presentation layer; everything else
/// maps onto an engine operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Move the selection cursor
    Cursor(Direction),
    /// Reveal the card under the cursor
    Reveal,
    /// Reveal the card at a board position (mouse click)
    RevealAt(usize),
    /// Start the clock without revealing a card
    Start,
    /// Deal a fresh board at the current difficulty
    Restart,
    /// Switch to a specific difficulty (deals a fresh board)
    SetDifficulty(Difficulty),
    /// Switch to the other difficulty
    ToggleDifficulty,
}

/// Format whole seconds as `mm:ss`.
///
/// Minutes are not capped, so an hour reads `60:00`.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Banner text shown when every pair has been matched.
pub fn win_message(moves: u32, seconds: u32) -> String {
    format!("Congratulations! You completed the game in {moves} moves and {seconds} seconds!")
}
