use proptest::prelude::*;
use twenty48::{Direction, GameEngine, GameError};

#[derive(Debug, Clone, Copy)]
enum Action {
    Move(Direction),
    Undo,
}

fn direction() -> impl Strategy<Value = Direction> {
    (0u8..4).prop_map(|code| Direction::try_from(code).unwrap())
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => direction().prop_map(Action::Move),
        1 => Just(Action::Undo),
    ]
}

/// Play `moves` from a seeded start so every property sees a realistic board.
fn played(seed: u64, moves: &[Direction]) -> GameEngine {
    let mut engine = GameEngine::seeded(seed);
    for &d in moves {
        engine.apply_move(d);
    }
    engine
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Moves never lower the score; only merging moves raise it.
    #[test]
    fn score_grows_only_on_merges(
        seed in any::<u64>(),
        moves in prop::collection::vec(direction(), 1..80)
    ) {
        let mut engine = GameEngine::seeded(seed);
        for d in moves {
            let before = engine.score();
            let outcome = engine.apply_move(d);
            prop_assert!(engine.score() >= before);
            prop_assert_eq!(engine.score() - before, outcome.gained);
            if !outcome.changed {
                prop_assert_eq!(outcome.gained, 0);
            }
        }
    }

    /// A move that changes nothing leaves state and history untouched.
    #[test]
    fn no_op_move_is_invisible(
        seed in any::<u64>(),
        prefix in prop::collection::vec(direction(), 0..60),
        d in direction()
    ) {
        let mut engine = played(seed, &prefix);
        let state = engine.state();
        let history = engine.history_len();
        let (shifted, _) = engine.grid().shift(d);
        let expect_change = shifted != *engine.grid();

        let outcome = engine.apply_move(d);
        prop_assert_eq!(outcome.changed, expect_change);
        if !outcome.changed {
            prop_assert_eq!(engine.state(), state);
            prop_assert_eq!(engine.history_len(), history);
        } else {
            prop_assert_eq!(engine.history_len(), history + 1);
        }
    }

    /// Undo right after a move returns the exact pre-move grid and score.
    #[test]
    fn undo_restores_exactly(
        seed in any::<u64>(),
        prefix in prop::collection::vec(direction(), 0..60),
        d in direction()
    ) {
        let mut engine = played(seed, &prefix);
        let before = engine.state();
        if engine.apply_move(d).changed {
            engine.undo().unwrap();
            prop_assert_eq!(engine.state(), before);
        }
    }

    /// History length tracks the moves that changed the board, minus undos.
    #[test]
    fn history_tracks_changed_moves(
        seed in any::<u64>(),
        actions in prop::collection::vec(action(), 1..80)
    ) {
        let mut engine = GameEngine::seeded(seed);
        let mut expected = 0usize;
        for a in actions {
            match a {
                Action::Move(d) => {
                    if engine.apply_move(d).changed {
                        expected += 1;
                    }
                }
                Action::Undo => match engine.undo() {
                    Ok(()) => expected -= 1,
                    Err(e) => {
                        prop_assert_eq!(e, GameError::EmptyHistory);
                        prop_assert_eq!(expected, 0);
                    }
                },
            }
            prop_assert_eq!(engine.history_len(), expected);
        }
    }

    /// Every cell is always zero or a power of two, and a changing move adds
    /// exactly one spawned tile's worth (2 or 4) to the board total.
    #[test]
    fn tiles_stay_valid(
        seed in any::<u64>(),
        moves in prop::collection::vec(direction(), 1..80)
    ) {
        let mut engine = GameEngine::seeded(seed);
        for d in moves {
            let total = engine.grid().total();
            let outcome = engine.apply_move(d);
            prop_assert!(engine.grid().validate().is_ok());
            let added = engine.grid().total() - total;
            if outcome.changed {
                prop_assert!(added == 2 || added == 4);
            } else {
                prop_assert_eq!(added, 0);
            }
        }
    }

    /// Reported outcome agrees with the engine's own checks.
    #[test]
    fn outcome_matches_queries(
        seed in any::<u64>(),
        moves in prop::collection::vec(direction(), 1..120)
    ) {
        let mut engine = GameEngine::seeded(seed);
        for d in moves {
            let outcome = engine.apply_move(d);
            if outcome.changed {
                prop_assert_eq!(outcome.won, engine.check_win());
                prop_assert_eq!(outcome.game_over, engine.is_game_over());
            }
        }
    }
}
