//! End-to-end engine scenarios on fixed layouts.

use tui_memory::core::{
    GameConfig, LayoutError, MemoryGame, MemoryScoreStore, PairResult, RenderCommand,
    RevealOutcome, ScoreStore,
};
use tui_memory::types::{
    CardFace, CardState, Difficulty, BEST_SCORE_KEY_EASY, BEST_SCORE_KEY_HARD,
};

/// Pairs sit side by side: (0,1), (2,3), ...
fn ordered_faces(difficulty: Difficulty) -> Vec<CardFace> {
    CardFace::first(difficulty.pair_count())
        .flat_map(|face| [face, face])
        .collect()
}

fn ordered_game(difficulty: Difficulty, store: MemoryScoreStore) -> MemoryGame<MemoryScoreStore> {
    let config = GameConfig::default()
        .with_seed(7)
        .with_difficulty(difficulty);
    let mut game = MemoryGame::new(&config, store);
    game.reset_with_faces(ordered_faces(difficulty)).unwrap();
    game.drain_commands().for_each(drop);
    game
}

fn play_perfect_game(game: &mut MemoryGame<MemoryScoreStore>) -> Vec<RenderCommand> {
    let mut commands = Vec::new();
    for pair in 0..game.total_pairs() as usize {
        game.reveal_card(pair * 2);
        game.reveal_card(pair * 2 + 1);
        game.tick(1000);
        commands.extend(game.drain_commands());
    }
    commands
}

#[test]
fn matching_pair_stays_revealed() {
    let mut game = ordered_game(Difficulty::Easy, MemoryScoreStore::new());

    assert_eq!(game.reveal_card(0), RevealOutcome::FirstRevealed);
    assert_eq!(game.reveal_card(1), RevealOutcome::PairPending);
    assert_eq!(game.moves(), 1);
    assert!(game.awaiting_evaluation());

    assert_eq!(game.tick(999), None);
    assert_eq!(game.cards()[0].state, CardState::FaceUp);
    assert_eq!(game.tick(1), Some(PairResult::Matched { won: false }));

    assert_eq!(game.cards()[0].state, CardState::Matched);
    assert_eq!(game.cards()[1].state, CardState::Matched);
    assert_eq!(game.matched_pairs(), 1);
    assert!(game.face_up().is_empty());
}

#[test]
fn mismatched_pair_turns_back_face_down() {
    let mut game = ordered_game(Difficulty::Easy, MemoryScoreStore::new());

    game.reveal_card(0);
    game.reveal_card(2);
    assert_eq!(game.tick(1000), Some(PairResult::Mismatched));

    assert_eq!(game.cards()[0].state, CardState::FaceDown);
    assert_eq!(game.cards()[2].state, CardState::FaceDown);
    assert_eq!(game.moves(), 1);
    assert_eq!(game.matched_pairs(), 0);

    let commands: Vec<_> = game.drain_commands().collect();
    assert!(commands.contains(&RenderCommand::CardState {
        position: 0,
        state: CardState::FaceDown,
    }));
    assert!(!commands.iter().any(|c| matches!(c, RenderCommand::Matches(_))));
}

#[test]
fn third_reveal_is_ignored_while_pair_is_pending() {
    let mut game = ordered_game(Difficulty::Easy, MemoryScoreStore::new());

    game.reveal_card(0);
    game.reveal_card(2);
    assert_eq!(game.reveal_card(4), RevealOutcome::Ignored);
    assert_eq!(game.cards()[4].state, CardState::FaceDown);
    assert_eq!(game.face_up(), &[0, 2]);

    game.tick(1000);
    assert_eq!(game.reveal_card(4), RevealOutcome::FirstRevealed);
}

#[test]
fn invalid_reveals_are_silent_no_ops() {
    let mut game = ordered_game(Difficulty::Easy, MemoryScoreStore::new());

    assert_eq!(game.reveal_card(99), RevealOutcome::Ignored);
    assert!(!game.started());
    assert!(game.pending_commands().is_empty());

    game.reveal_card(0);
    assert_eq!(game.reveal_card(0), RevealOutcome::Ignored);
    assert_eq!(game.moves(), 0);

    game.reveal_card(1);
    game.tick(1000);
    assert_eq!(game.reveal_card(0), RevealOutcome::Ignored);
    assert_eq!(game.reveal_card(1), RevealOutcome::Ignored);
    assert_eq!(game.moves(), 1);
}

#[test]
fn first_reveal_starts_the_clock() {
    let mut game = ordered_game(Difficulty::Easy, MemoryScoreStore::new());
    assert!(!game.clock_running());

    game.reveal_card(0);
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
                state: CardState::FaceUp,
            },
        ]
    );

    game.tick(1000);
    assert_eq!(game.elapsed_secs(), 1);
    assert_eq!(
        game.drain_commands().collect::<Vec<_>>(),
        vec![RenderCommand::Timer("00:01".to_string())]
    );
}

#[test]
fn explicit_start_only_once_per_session() {
    let mut game = ordered_game(Difficulty::Easy, MemoryScoreStore::new());

    assert!(game.start());
    assert!(!game.start());

    game.reset();
    assert!(!game.started());
    assert!(game.start());
}

#[test]
fn clock_formats_minutes_and_seconds() {
    let mut game = ordered_game(Difficulty::Easy, MemoryScoreStore::new());
    game.start();
    game.drain_commands().for_each(drop);

    for _ in 0..75 {
        game.tick(1000);
    }

    let last = game.drain_commands().last();
    assert_eq!(last, Some(RenderCommand::Timer("01:15".to_string())));
}

#[test]
fn perfect_easy_game_wins_and_records_best() {
    let store = MemoryScoreStore::new().with_value(BEST_SCORE_KEY_EASY, 8);
    let mut game = ordered_game(Difficulty::Easy, store);

    let commands = play_perfect_game(&mut game);

    assert!(game.won());
    assert_eq!(game.moves(), 6);
    assert_eq!(game.matched_pairs(), 6);
    assert!(!game.clock_running());

    let wins: Vec<_> = commands
        .iter()
        .filter_map(|c| match c {
            RenderCommand::ShowWin(text) => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(
        wins,
        vec!["Congratulations! You completed the game in 6 moves and 6 seconds!"]
    );

    assert!(commands.contains(&RenderCommand::BestScore {
        difficulty: Difficulty::Easy,
        moves: Some(6),
    }));
    assert_eq!(game.best_score(Difficulty::Easy), Some(6));
    assert_eq!(game.scores().store().get(BEST_SCORE_KEY_EASY).unwrap(), Some(6));
}

#[test]
fn first_completion_sets_best_score() {
    let mut game = ordered_game(Difficulty::Easy, MemoryScoreStore::new());
    assert_eq!(game.best_score(Difficulty::Easy), None);

    play_perfect_game(&mut game);

    assert_eq!(game.best_score(Difficulty::Easy), Some(6));
    assert_eq!(game.best_score(Difficulty::Hard), None);
}

#[test]
fn worse_or_equal_result_keeps_best_score() {
    let store = MemoryScoreStore::new().with_value(BEST_SCORE_KEY_EASY, 6);
    let mut game = ordered_game(Difficulty::Easy, store);

    // One wasted move, then a perfect run.
    game.reveal_card(0);
    game.reveal_card(2);
    game.tick(1000);
    let commands = play_perfect_game(&mut game);

    assert_eq!(game.moves(), 7);
    assert_eq!(game.best_score(Difficulty::Easy), Some(6));
    assert!(!commands
        .iter()
        .any(|c| matches!(c, RenderCommand::BestScore { .. })));
}

#[test]
fn hard_tier_records_under_its_own_key() {
    let store = MemoryScoreStore::new().with_value(BEST_SCORE_KEY_EASY, 3);
    let mut game = ordered_game(Difficulty::Hard, store);
    assert_eq!(game.total_pairs(), 12);

    play_perfect_game(&mut game);

    assert!(game.won());
    assert_eq!(game.scores().store().get(BEST_SCORE_KEY_HARD).unwrap(), Some(12));
    assert_eq!(game.scores().store().get(BEST_SCORE_KEY_EASY).unwrap(), Some(3));
}

#[test]
fn finished_game_ignores_input_and_time() {
    let mut game = ordered_game(Difficulty::Easy, MemoryScoreStore::new());
    play_perfect_game(&mut game);
    let seconds = game.elapsed_secs();

    assert_eq!(game.reveal_card(0), RevealOutcome::Ignored);
    game.tick(5000);

    assert_eq!(game.elapsed_secs(), seconds);
    assert!(game
        .drain_commands()
        .all(|c| !matches!(c, RenderCommand::ShowWin(_))));
}

#[test]
fn reset_cancels_pending_evaluation_and_clock() {
    let mut game = ordered_game(Difficulty::Easy, MemoryScoreStore::new());
    game.reveal_card(0);
    game.reveal_card(2);
    game.tick(500);
    let episode = game.episode_id();

    game.reset();

    assert_eq!(game.tick(2000), None);
    assert_eq!(game.moves(), 0);
    assert_eq!(game.elapsed_secs(), 0);
    assert!(!game.clock_running());
    assert!(!game.awaiting_evaluation());
    assert!(game.cards().iter().all(|c| c.state == CardState::FaceDown));
    assert_eq!(game.episode_id(), episode + 1);
}

#[test]
fn reset_after_win_hides_banner() {
    let mut game = ordered_game(Difficulty::Easy, MemoryScoreStore::new());
    play_perfect_game(&mut game);

    game.reset();
    let commands: Vec<_> = game.drain_commands().collect();

    assert!(!game.won());
    assert!(commands.contains(&RenderCommand::HideWin));
    assert!(commands.contains(&RenderCommand::Moves(0)));
    assert!(commands.contains(&RenderCommand::Timer("00:00".to_string())));
    assert!(commands.contains(&RenderCommand::StartEnabled(true)));
}

#[test]
fn zero_delay_evaluates_immediately() {
    let mut game = ordered_game(Difficulty::Easy, MemoryScoreStore::new());
    game.set_eval_delay_ms(0);

    game.reveal_card(0);
    assert_eq!(
        game.reveal_card(1),
        RevealOutcome::PairEvaluated(PairResult::Matched { won: false })
    );
    assert!(!game.awaiting_evaluation());
    assert_eq!(game.reveal_card(2), RevealOutcome::FirstRevealed);
}

#[test]
fn flush_pending_judges_without_waiting() {
    let mut game = ordered_game(Difficulty::Easy, MemoryScoreStore::new());
    assert_eq!(game.flush_pending(), None);

    game.reveal_card(0);
    game.reveal_card(3);
    assert_eq!(game.flush_pending(), Some(PairResult::Mismatched));
    assert!(game.face_up().is_empty());
}

#[test]
fn configure_selects_tier_and_deals() {
    let config = GameConfig::default().with_seed(3);
    let mut game = MemoryGame::new(&config, MemoryScoreStore::new());

    game.configure("hard");
    assert_eq!(game.difficulty(), Difficulty::Hard);
    assert_eq!(game.cards().len(), 24);
    assert_eq!(game.board().columns(), 6);

    game.configure("impossible");
    assert_eq!(game.difficulty(), Difficulty::Easy);
    assert_eq!(game.cards().len(), 12);
}

#[test]
fn new_game_publishes_best_scores_then_board() {
    let store = MemoryScoreStore::new().with_value(BEST_SCORE_KEY_HARD, 20);
    let config = GameConfig::default().with_seed(1);
    let mut game = MemoryGame::new(&config, store);

    let commands: Vec<_> = game.drain_commands().collect();
    assert_eq!(
        commands[0],
        RenderCommand::BestScore {
            difficulty: Difficulty::Easy,
            moves: None,
        }
    );
    assert_eq!(
        commands[1],
        RenderCommand::BestScore {
            difficulty: Difficulty::Hard,
            moves: Some(20),
        }
    );
    assert!(matches!(
        &commands[2],
        RenderCommand::DrawBoard { faces, columns: 4, .. } if faces.len() == 12
    ));
}

#[test]
fn injected_layout_must_fit_the_tier() {
    let mut game = ordered_game(Difficulty::Easy, MemoryScoreStore::new());

    let short = ordered_faces(Difficulty::Easy)[..4].to_vec();
    assert_eq!(
        game.reset_with_faces(short),
        Err(LayoutError::WrongSize {
            expected: 12,
            actual: 4,
        })
    );

    let mut unpaired = ordered_faces(Difficulty::Easy);
    unpaired[0] = unpaired[2];
    assert!(matches!(
        game.reset_with_faces(unpaired),
        Err(LayoutError::Unpaired { .. })
    ));
}

#[test]
fn same_seed_deals_same_board() {
    let config = GameConfig::default().with_seed(42);
    let a = MemoryGame::new(&config, MemoryScoreStore::new());
    let b = MemoryGame::new(&config, MemoryScoreStore::new());

    assert_eq!(a.board().faces(), b.board().faces());
}

#[test]
fn abandon_drops_pending_pair_without_judging() {
    let mut game = ordered_game(Difficulty::Easy, MemoryScoreStore::new());
    assert!(!game.abandon());

    game.reveal_card(0);
    game.reveal_card(1);
    game.drain_commands().for_each(drop);

    assert!(game.abandon());
    assert_eq!(game.matched_pairs(), 0);
    assert_eq!(game.moves(), 1);
    assert!(game.face_up().is_empty());
    assert!(!game.clock_running());
    assert_eq!(game.cards()[0].state, CardState::FaceDown);

    let commands: Vec<_> = game.drain_commands().collect();
    assert!(!commands.iter().any(|c| matches!(c, RenderCommand::Matches(_))));
    assert_eq!(game.tick(2000), None);
}
