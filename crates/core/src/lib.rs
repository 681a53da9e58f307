//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the memory game rules, session state and best-score
//! persistence. It has no dependencies on terminal I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical deals
//! - **Testable**: Time only advances through [`MemoryGame::tick`]
//! - **Portable**: The presentation layer only consumes [`RenderCommand`]s
//!
//! # Module Structure
//!
//! - [`board`]: Card layout with exactly two of each face
//! - [`game_state`]: The engine: reveals, pair evaluation, moves, win sequence
//! - [`rng`]: Seeded LCG and Fisher-Yates deal
//! - [`timer`]: Session-scoped elapsed-seconds counter
//! - [`scores`]: Best-score store trait, in-memory and JSON file backends
//! - [`render`]: Instructions queued for the presentation layer
//! - [`snapshot`]: Point-in-time copy for observers
//! - [`config`]: Environment configuration
//!
//! # Game Rules
//!
//! - Revealing a card turns it face-up; the first reveal also starts the clock
//! - The second face-up card counts one move and schedules an evaluation
//! - After the evaluation delay a matching pair stays revealed for good,
//!   a mismatched pair turns face-down again
//! - No third card can be revealed while a pair waits for evaluation
//! - Matching every pair wins; the clock stops and the best score for the
//!   tier is replaced if the move count is strictly lower
//!
//! # Example
//!
//! ```
//! use tui_memory_core::{GameConfig, MemoryGame, MemoryScoreStore, PairResult};
//!
//! let config = GameConfig::default().with_seed(12345);
//! let mut game = MemoryGame::new(&config, MemoryScoreStore::new());
//!
//! let first = 0;
//! let partner = game.board().partner_of(first).unwrap();
//! game.reveal_card(first);
//! game.reveal_card(partner);
//! assert_eq!(game.moves(), 1);
//!
//! // The pair is judged once the evaluation delay has passed.
//! assert_eq!(game.tick(1000), Some(PairResult::Matched { won: false }));
//! assert_eq!(game.matched_pairs(), 1);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game_state;
pub mod render;
pub mod rng;
pub mod scores;
pub mod snapshot;
pub mod timer;

pub use tui_memory_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Card};
pub use config::GameConfig;
pub use error::{LayoutError, StoreError};
pub use game_state::{MemoryGame, PairResult, RevealOutcome};
pub use render::RenderCommand;
pub use rng::{deal_faces, SimpleRng};
pub use scores::{BestScores, FileScoreStore, MemoryScoreStore, ScoreStore};
pub use snapshot::GameSnapshot;
pub use timer::SecondsTimer;
