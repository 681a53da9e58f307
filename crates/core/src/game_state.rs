//! Game state module - the memory game engine
//!
//! Owns the board and the session, and is the only place either is mutated.
//! Every visible change is queued as a [`RenderCommand`] for the presentation
//! layer to drain.
//!
//! Timing is cooperative: the caller advances time with [`MemoryGame::tick`].
//! That drives both the elapsed-seconds clock and the delayed evaluation of a
//! revealed pair. While a pair waits for evaluation the face-up set is full,
//! which is what blocks a third reveal.

use arrayvec::ArrayVec;
use tracing::{debug, info, trace};

use crate::board::{Board, Card};
use crate::config::GameConfig;
use crate::error::LayoutError;
use crate::render::RenderCommand;
use crate::rng::SimpleRng;
use crate::scores::{BestScores, ScoreStore};
use crate::snapshot::GameSnapshot;
use crate::timer::SecondsTimer;
use crate::types::{format_clock, win_message, CardFace, CardState, Difficulty};

/// What a call to [`MemoryGame::reveal_card`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Guard rejected the reveal; nothing changed.
    Ignored,
    /// First card of a pair is now face-up.
    FirstRevealed,
    /// Second card is face-up; evaluation is scheduled.
    PairPending,
    /// Second card is face-up and the pair was judged immediately
    /// (zero evaluation delay).
    PairEvaluated(PairResult),
}

/// Result of judging a face-up pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairResult {
    Matched { won: bool },
    Mismatched,
}

/// Transient per-game state. Replaced wholesale on reset, which also drops
/// the clock and any pending evaluation.
#[derive(Debug, Clone, Default)]
struct Session {
    moves: u32,
    matched_pairs: u32,
    face_up: ArrayVec<usize, 2>,
    started: bool,
    won: bool,
    timer: SecondsTimer,
    pending_eval_ms: Option<u32>,
}

/// The memory game engine.
#[derive(Debug)]
pub struct MemoryGame<S> {
    difficulty: Difficulty,
    eval_delay_ms: u32,
    board: Board,
    session: Session,
    rng: SimpleRng,
    scores: BestScores<S>,
    commands: Vec<RenderCommand>,
    /// Monotonic board id (increments on every deal).
    episode_id: u32,
}

impl<S: ScoreStore> MemoryGame<S> {
    /// Create an engine, publish stored best scores and deal the first board.
    pub fn new(config: &GameConfig, store: S) -> Self {
        let mut rng = config
            .seed
            .map(SimpleRng::new)
            .unwrap_or_else(SimpleRng::from_entropy);
        let board = Board::deal(config.difficulty, &mut rng);

        let mut game = Self {
            difficulty: config.difficulty,
            eval_delay_ms: config.eval_delay_ms,
            board,
            session: Session::default(),
            rng,
            scores: BestScores::new(store),
            commands: Vec::new(),
            episode_id: 0,
        };

        for difficulty in Difficulty::ALL {
            let moves = game.scores.get(difficulty);
            game.commands.push(RenderCommand::BestScore { difficulty, moves });
        }
        game.begin_session();
        game
    }

    /// Select a tier by name and deal a new board.
    ///
    /// Unknown names select `easy`.
    pub fn configure(&mut self, difficulty: &str) {
        let parsed = Difficulty::from_str(difficulty).unwrap_or_else(|| {
            debug!(difficulty, "unknown difficulty, using easy");
            Difficulty::Easy
        });
        self.set_difficulty(parsed);
    }

    /// Select a tier and deal a new board.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.reset();
    }

    /// Discard the session and deal a fresh shuffled board.
    pub fn reset(&mut self) {
        self.board = Board::deal(self.difficulty, &mut self.rng);
        self.begin_session();
    }

    /// Reset onto a fixed face layout for this tier.
    pub fn reset_with_faces(&mut self, faces: Vec<CardFace>) -> Result<(), LayoutError> {
        self.board = Board::from_faces(self.difficulty, faces)?;
        self.begin_session();
        Ok(())
    }

    fn begin_session(&mut self) {
        self.session = Session::default();
        self.episode_id = self.episode_id.wrapping_add(1);
        debug!(
            difficulty = self.difficulty.as_str(),
            episode = self.episode_id,
            "dealt board"
        );

        self.commands.push(RenderCommand::DrawBoard {
            difficulty: self.difficulty,
            faces: self.board.faces(),
            columns: self.board.columns(),
        });
        self.commands.push(RenderCommand::Moves(0));
        self.commands.push(RenderCommand::Matches(0));
        self.commands.push(RenderCommand::Timer(format_clock(0)));
        self.commands.push(RenderCommand::HideWin);
        self.commands.push(RenderCommand::StartEnabled(true));
    }

    /// Start the clock. Returns false if this session already started.
    pub fn start(&mut self) -> bool {
        if self.session.started {
            return false;
        }

        self.session.started = true;
        self.session.timer.start();
        self.commands.push(RenderCommand::Timer(format_clock(0)));
        self.commands.push(RenderCommand::StartEnabled(false));
        true
    }

    /// Turn the card at `position` face-up.
    ///
    /// Out-of-range positions, cards that are not face-down, a finished game
    /// and a pair awaiting evaluation are all silent no-ops.
    pub fn reveal_card(&mut self, position: usize) -> RevealOutcome {
        if self.session.won || self.session.face_up.is_full() || !self.board.is_selectable(position)
        {
            trace!(position, "reveal ignored");
            return RevealOutcome::Ignored;
        }

        if !self.session.started {
            self.start();
        }

        self.set_card(position, CardState::FaceUp);
        self.session.face_up.push(position);

        if !self.session.face_up.is_full() {
            return RevealOutcome::FirstRevealed;
        }

        self.session.moves += 1;
        self.commands.push(RenderCommand::Moves(self.session.moves));

        if self.eval_delay_ms == 0 {
            return match self.evaluate_pending() {
                Some(result) => RevealOutcome::PairEvaluated(result),
                None => RevealOutcome::PairPending,
            };
        }

        self.session.pending_eval_ms = Some(self.eval_delay_ms);
        RevealOutcome::PairPending
    }

    /// Advance time by `elapsed_ms`.
    ///
    /// Returns the pair result if a pending evaluation came due.
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<PairResult> {
        if self.session.timer.tick(elapsed_ms) > 0 {
            let clock = format_clock(self.session.timer.elapsed_secs());
            self.commands.push(RenderCommand::Timer(clock));
        }

        let remaining = self.session.pending_eval_ms?;
        if elapsed_ms >= remaining {
            self.evaluate_pending()
        } else {
            self.session.pending_eval_ms = Some(remaining - elapsed_ms);
            None
        }
    }

    /// Judge a pending pair now instead of waiting for the delay.
    pub fn flush_pending(&mut self) -> Option<PairResult> {
        self.session.pending_eval_ms?;
        self.evaluate_pending()
    }

    /// End the session without judging a pending pair.
    ///
    /// Stops the clock and turns any unjudged face-up cards back down, so a
    /// pair revealed just before teardown can neither finish the game nor
    /// touch the best score. Returns true if a pending pair was dropped.
    pub fn abandon(&mut self) -> bool {
        self.session.timer.stop();
        let dropped = self.session.pending_eval_ms.take().is_some();

        let face_up = std::mem::take(&mut self.session.face_up);
        for position in face_up {
            self.set_card(position, CardState::FaceDown);
        }
        if dropped {
            debug!(moves = self.session.moves, "dropped pending pair");
        }
        dropped
    }

    fn evaluate_pending(&mut self) -> Option<PairResult> {
        self.session.pending_eval_ms = None;
        let (a, b) = match self.session.face_up.as_slice() {
            &[a, b] => (a, b),
            _ => return None,
        };
        self.session.face_up.clear();

        let same = match (self.board.get(a), self.board.get(b)) {
            (Some(x), Some(y)) => x.face == y.face,
            _ => false,
        };

        if !same {
            debug!(a, b, "mismatch");
            self.set_card(a, CardState::FaceDown);
            self.set_card(b, CardState::FaceDown);
            return Some(PairResult::Mismatched);
        }

        self.set_card(a, CardState::Matched);
        self.set_card(b, CardState::Matched);
        self.session.matched_pairs += 1;
        self.commands
            .push(RenderCommand::Matches(self.session.matched_pairs));
        debug!(a, b, matched = self.session.matched_pairs, "match");

        let won = self.session.matched_pairs as usize == self.board.total_pairs();
        if won {
            self.finish();
        }
        Some(PairResult::Matched { won })
    }

    /// Win sequence: stop the clock, announce, update the best score.
    fn finish(&mut self) {
        self.session.timer.stop();
        self.session.won = true;

        let moves = self.session.moves;
        let seconds = self.session.timer.elapsed_secs();
        info!(
            difficulty = self.difficulty.as_str(),
            moves, seconds, "game completed"
        );
        self.commands
            .push(RenderCommand::ShowWin(win_message(moves, seconds)));

        if self.scores.record(self.difficulty, moves) {
            info!(difficulty = self.difficulty.as_str(), moves, "new best score");
            self.commands.push(RenderCommand::BestScore {
                difficulty: self.difficulty,
                moves: Some(moves),
            });
        }
    }

    fn set_card(&mut self, position: usize, state: CardState) {
        if self.board.set_state(position, state) {
            self.commands
                .push(RenderCommand::CardState { position, state });
        }
    }

    /// Take every queued render command, oldest first.
    pub fn drain_commands(&mut self) -> std::vec::Drain<'_, RenderCommand> {
        self.commands.drain(..)
    }

    pub fn pending_commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn eval_delay_ms(&self) -> u32 {
        self.eval_delay_ms
    }

    pub fn set_eval_delay_ms(&mut self, eval_delay_ms: u32) {
        self.eval_delay_ms = eval_delay_ms;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cards(&self) -> &[Card] {
        self.board.cards()
    }

    pub fn moves(&self) -> u32 {
        self.session.moves
    }

    pub fn matched_pairs(&self) -> u32 {
        self.session.matched_pairs
    }

    pub fn total_pairs(&self) -> u32 {
        self.board.total_pairs() as u32
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.session.timer.elapsed_secs()
    }

    pub fn clock_running(&self) -> bool {
        self.session.timer.is_running()
    }

    /// Positions currently face-up and not yet judged.
    pub fn face_up(&self) -> &[usize] {
        &self.session.face_up
    }

    pub fn awaiting_evaluation(&self) -> bool {
        self.session.pending_eval_ms.is_some()
    }

    pub fn started(&self) -> bool {
        self.session.started
    }

    pub fn won(&self) -> bool {
        self.session.won
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn best_score(&self, difficulty: Difficulty) -> Option<u32> {
        self.scores.get(difficulty)
    }

    pub fn scores(&self) -> &BestScores<S> {
        &self.scores
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            difficulty: self.difficulty,
            episode_id: self.episode_id,
            cards: self.board.cards().to_vec(),
            face_up: self.session.face_up.to_vec(),
            moves: self.session.moves,
            matched_pairs: self.session.matched_pairs,
            total_pairs: self.total_pairs(),
            elapsed_secs: self.session.timer.elapsed_secs(),
            started: self.session.started,
            won: self.session.won,
            eval_remaining_ms: self.session.pending_eval_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scores::MemoryScoreStore;

    fn face(i: u8) -> CardFace {
        CardFace::new(i).unwrap()
    }

    /// Easy layout with pairs at (0,1), (2,3), ... (10,11).
    fn ordered_faces() -> Vec<CardFace> {
        (0..6).flat_map(|i| [face(i), face(i)]).collect()
    }

    fn game() -> MemoryGame<MemoryScoreStore> {
        let config = GameConfig::default().with_seed(1);
        let mut game = MemoryGame::new(&config, MemoryScoreStore::new());
        game.reset_with_faces(ordered_faces()).unwrap();
        game.drain_commands();
        game
    }

    #[test]
    fn new_publishes_scores_then_board() {
        let store = MemoryScoreStore::new().with_value("memoryGameBestScoreHard", 30);
        let mut game = MemoryGame::new(&GameConfig::default().with_seed(9), store);
        let commands: Vec<_> = game.drain_commands().collect();

        assert_eq!(
            commands[0],
            RenderCommand::BestScore {
                difficulty: Difficulty::Easy,
                moves: None
            }
        );
        assert_eq!(
            commands[1],
            RenderCommand::BestScore {
                difficulty: Difficulty::Hard,
                moves: Some(30)
            }
        );
        assert!(matches!(commands[2], RenderCommand::DrawBoard { columns: 4, .. }));
        assert_eq!(commands.last(), Some(&RenderCommand::StartEnabled(true)));
    }

    #[test]
    fn first_reveal_starts_clock() {
        let mut game = game();
        assert!(!game.started());

        assert_eq!(game.reveal_card(0), RevealOutcome::FirstRevealed);
        assert!(game.started());
        assert!(game.clock_running());

        let commands: Vec<_> = game.drain_commands().collect();
        assert_eq!(
            commands,
            vec![
                RenderCommand::Timer("00:00".to_string()),
                RenderCommand::StartEnabled(false),
                RenderCommand::CardState {
                    position: 0,
                    state: CardState::FaceUp
                },
            ]
        );
    }

    #[test]
    fn start_is_idempotent() {
        let mut game = game();
        assert!(game.start());
        game.tick(2500);
        assert!(!game.start());
        assert_eq!(game.elapsed_secs(), 2);
    }

    #[test]
    fn ignored_reveal_does_not_start_clock() {
        let mut game = game();
        assert_eq!(game.reveal_card(99), RevealOutcome::Ignored);
        assert!(!game.started());
        assert!(game.pending_commands().is_empty());
    }

    #[test]
    fn tick_emits_clock_each_second() {
        let mut game = game();
        game.start();
        game.drain_commands();

        for _ in 0..63 {
            game.tick(16);
        }
        let commands: Vec<_> = game.drain_commands().collect();
        assert_eq!(commands, vec![RenderCommand::Timer("00:01".to_string())]);
    }

    #[test]
    fn evaluation_waits_for_delay() {
        let mut game = game();
        game.reveal_card(0);
        assert_eq!(game.reveal_card(1), RevealOutcome::PairPending);

        assert_eq!(game.tick(999), None);
        assert_eq!(game.face_up(), &[0, 1]);
        assert_eq!(game.tick(1), Some(PairResult::Matched { won: false }));
        assert!(game.face_up().is_empty());
    }

    #[test]
    fn zero_delay_evaluates_immediately() {
        let mut game = game();
        game.set_eval_delay_ms(0);
        game.reveal_card(0);
        assert_eq!(
            game.reveal_card(2),
            RevealOutcome::PairEvaluated(PairResult::Mismatched)
        );
        assert_eq!(game.moves(), 1);
        assert!(game.face_up().is_empty());
    }

    #[test]
    fn flush_pending_without_pair_is_noop() {
        let mut game = game();
        game.reveal_card(0);
        assert_eq!(game.flush_pending(), None);
        assert_eq!(game.face_up(), &[0]);
    }

    #[test]
    fn reset_discards_pending_pair_and_clock() {
        let mut game = game();
        game.reveal_card(0);
        game.reveal_card(3);
        game.tick(400);
        game.reset();

        assert!(!game.awaiting_evaluation());
        assert!(!game.clock_running());
        assert_eq!(game.moves(), 0);
        assert_eq!(game.tick(5000), None);
        assert_eq!(game.elapsed_secs(), 0);
    }

    #[test]
    fn configure_unknown_defaults_to_easy() {
        let mut game = game();
        game.configure("hard");
        assert_eq!(game.difficulty(), Difficulty::Hard);
        assert_eq!(game.cards().len(), 24);

        game.configure("legendary");
        assert_eq!(game.difficulty(), Difficulty::Easy);
        assert_eq!(game.cards().len(), 12);
    }

    #[test]
    fn episode_id_increments_on_each_deal() {
        let mut game = game();
        let before = game.episode_id();
        game.reset();
        game.set_difficulty(Difficulty::Hard);
        assert_eq!(game.episode_id(), before + 2);
    }
}
