//! Tests for the intent-driven game loop.

use noughts::{
    intent_channel, redraw_channel, BoardEngine, CellClick, Dispatch, GameLoop, GameStatus,
    Intent, InvalidMove, PlayerId, Snapshot,
};

fn click(row: i32, col: i32) -> Intent {
    Intent::Move(CellClick::new(row, col))
}

#[tokio::test]
async fn test_intents_applied_in_order() {
    let (observer, mut signal) = redraw_channel();
    let (tx, rx) = intent_channel();
    let game = tokio::spawn(GameLoop::new(BoardEngine::new(observer), rx).run());

    for intent in [
        click(0, 0),
        click(1, 1),
        click(0, 1),
        click(1, 0),
        click(0, 2),
        // Game is won: this move is dropped, then the reset is honoured.
        click(2, 2),
        Intent::Reset,
        click(2, 2),
    ] {
        tx.send(intent).await.expect("Loop alive");
    }
    drop(tx);

    let engine = game.await.expect("Loop finished");
    assert_eq!(engine.status(), GameStatus::InProgress(PlayerId::P2));
    assert_eq!(engine.board().filled(), 1);
    assert_eq!(engine.revision(), 7);

    let snapshot = signal.poll().expect("Dirty");
    assert_eq!(snapshot.revision, 7);
    assert_eq!(signal.poll(), None);
}

#[tokio::test]
async fn test_loop_stops_when_display_goes_away() {
    let (observer, signal) = redraw_channel();
    let (tx, rx) = intent_channel();
    let game = tokio::spawn(GameLoop::new(BoardEngine::new(observer), rx).run());

    drop(tx);
    let engine = game.await.expect("Loop finished");
    assert_eq!(engine.revision(), 0);

    drop(engine);
    assert!(signal.is_closed());
}

#[test]
fn test_reset_only_after_game_ends() {
    let (_tx, rx) = intent_channel();
    let mut game = GameLoop::new(BoardEngine::new(Vec::<Snapshot>::new()), rx);

    assert_eq!(
        game.dispatch(Intent::Reset),
        Dispatch::ResetIgnored(GameStatus::InProgress(PlayerId::P1))
    );
    assert!(game.engine().observer().is_empty());

    for intent in [click(0, 0), click(1, 1), click(0, 1), click(1, 0)] {
        assert!(matches!(game.dispatch(intent), Dispatch::Moved(_)));
    }
    assert_eq!(
        game.dispatch(click(0, 2)),
        Dispatch::Moved(GameStatus::Won(PlayerId::P1))
    );
    assert_eq!(
        game.dispatch(click(2, 2)),
        Dispatch::Rejected(InvalidMove::GameOver(GameStatus::Won(PlayerId::P1)))
    );

    assert_eq!(game.dispatch(Intent::Reset), Dispatch::Reset);
    assert_eq!(game.engine().status(), GameStatus::InProgress(PlayerId::P1));
    assert_eq!(game.engine().board().filled(), 0);
    assert_eq!(game.engine().observer().len(), 6);
}

#[test]
fn test_draw_then_reset() {
    let (_tx, rx) = intent_channel();
    let mut game = GameLoop::new(BoardEngine::default(), rx);

    for (row, col) in [(0, 1), (0, 0), (1, 0), (0, 2), (1, 2), (1, 1), (2, 0), (2, 1)] {
        game.dispatch(click(row, col));
    }
    assert_eq!(game.dispatch(click(2, 2)), Dispatch::Moved(GameStatus::Draw));
    assert_eq!(game.dispatch(Intent::Reset), Dispatch::Reset);
    assert_eq!(game.engine().status(), GameStatus::InProgress(PlayerId::P1));
}

#[test]
fn test_click_on_taken_cell_is_dropped() {
    let (_tx, rx) = intent_channel();
    let mut game = GameLoop::new(BoardEngine::default(), rx);

    game.dispatch(click(1, 1));
    assert!(matches!(
        game.dispatch(click(1, 1)),
        Dispatch::Rejected(InvalidMove::CellOccupied(_))
    ));
    assert_eq!(game.engine().active_player(), Some(PlayerId::P2));
}
