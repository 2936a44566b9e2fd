//! Property tests for the board engine.

use noughts_engine::{BoardEngine, Cell, GameStatus, InvalidMove, Position};
use proptest::prelude::*;

fn coordinate() -> impl Strategy<Value = (i32, i32)> {
    (-1i32..4, -1i32..4)
}

proptest! {
    #[test]
    fn accepted_moves_change_exactly_one_cell(moves in prop::collection::vec(coordinate(), 0..30)) {
        let mut engine = BoardEngine::default();

        for (row, col) in moves {
            let before = engine.board().clone();
            let status = engine.status();

            match engine.apply_move(row, col) {
                Ok(after) => {
                    let mover = status.active_player().expect("accepted while in progress");
                    let changed: Vec<Position> = Position::ALL
                        .into_iter()
                        .filter(|pos| before.get(*pos) != engine.board().get(*pos))
                        .collect();
                    prop_assert_eq!(changed.len(), 1);
                    prop_assert_eq!(before.get(changed[0]), Cell::Empty);
                    prop_assert_eq!(engine.board().get(changed[0]), Cell::Owned(mover));

                    if let GameStatus::InProgress(next) = after {
                        prop_assert_eq!(next, mover.opponent());
                    }
                }
                Err(err) => {
                    prop_assert_eq!(engine.board(), &before);
                    prop_assert_eq!(engine.status(), status);
                    if status.is_terminal() {
                        prop_assert_eq!(err, InvalidMove::GameOver(status));
                    }
                }
            }
        }
    }

    #[test]
    fn owned_cells_stay_owned(moves in prop::collection::vec(coordinate(), 0..30)) {
        let mut engine = BoardEngine::default();
        let mut owned = Vec::new();

        for (row, col) in moves {
            let _ = engine.apply_move(row, col);
            for (pos, owner) in &owned {
                prop_assert_eq!(engine.board().get(*pos), Cell::Owned(*owner));
            }
            owned = Position::ALL
                .into_iter()
                .filter_map(|pos| engine.board().get(pos).owner().map(|p| (pos, p)))
                .collect();
        }
    }

    #[test]
    fn reset_from_any_state_restores_start(moves in prop::collection::vec(coordinate(), 0..30)) {
        let mut engine = BoardEngine::default();
        for (row, col) in moves {
            let _ = engine.apply_move(row, col);
        }
        engine.reset();
        prop_assert_eq!(engine.status(), GameStatus::default());
        prop_assert_eq!(engine.board().filled(), 0);
    }
}
