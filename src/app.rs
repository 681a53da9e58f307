//! App: wires the engine to the presentation layer.
//!
//! Owns the engine, the board view model and the card cursor. Input actions
//! go in, engine render commands are drained into the view after each step.

use crate::core::{MemoryGame, ScoreStore};
use crate::input::CardCursor;
use crate::term::BoardView;
use crate::types::InputAction;

pub struct App<S> {
    game: MemoryGame<S>,
    board: BoardView,
    cursor: CardCursor,
}

impl<S: ScoreStore> App<S> {
    pub fn new(game: MemoryGame<S>) -> Self {
        let mut app = Self {
            game,
            board: BoardView::new(),
            cursor: CardCursor::default(),
        };
        app.sync();
        app
    }

    pub fn game(&self) -> &MemoryGame<S> {
        &self.game
    }

    pub fn board(&self) -> &BoardView {
        &self.board
    }

    pub fn cursor(&self) -> &CardCursor {
        &self.cursor
    }

    /// Apply one player action and bring the view up to date.
    pub fn handle(&mut self, action: InputAction) {
        match action {
            InputAction::Cursor(direction) => self.cursor.step(direction),
            InputAction::Reveal => {
                self.game.reveal_card(self.cursor.position());
            }
            InputAction::RevealAt(position) => {
                self.cursor.set_position(position);
                self.game.reveal_card(position);
            }
            InputAction::Start => {
                self.game.start();
            }
            InputAction::Restart => self.game.reset(),
            InputAction::SetDifficulty(difficulty) => self.game.set_difficulty(difficulty),
            InputAction::ToggleDifficulty => {
                let next = self.game.difficulty().toggled();
                self.game.set_difficulty(next);
            }
        }
        self.sync();
    }

    /// Advance game time and bring the view up to date.
    pub fn tick(&mut self, elapsed_ms: u32) {
        self.game.tick(elapsed_ms);
        self.sync();
    }

    /// Stop the session before exit. A pair still waiting for evaluation is
    /// dropped, not judged.
    pub fn shutdown(&mut self) {
        self.game.abandon();
        self.sync();
    }

    fn sync(&mut self) {
        if self.board.apply_all(self.game.drain_commands()) {
            self.cursor
                .resize(self.board.columns, self.board.cards.len());
        }
    }
}
