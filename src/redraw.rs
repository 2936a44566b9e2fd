//! Coalescing "redraw needed" signal from the game loop to the display.
//!
//! Backed by a `watch` channel: the loop overwrites the latest snapshot,
//! and the display sees at most one pending change per poll however many
//! mutations happened in between.

use noughts_engine::{Snapshot, StateObserver};
use tokio::sync::watch;
use tracing::trace;

/// Engine observer that publishes every state change.
#[derive(Debug)]
pub struct WatchObserver {
    tx: watch::Sender<Snapshot>,
}

impl StateObserver for WatchObserver {
    fn state_changed(&mut self, snapshot: &Snapshot) {
        trace!(revision = snapshot.revision, "Publishing snapshot");
        self.tx.send_replace(snapshot.clone());
    }
}

/// Display side of the signal: a dirty flag plus read-only snapshot access.
#[derive(Debug, Clone)]
pub struct RedrawSignal {
    rx: watch::Receiver<Snapshot>,
    /// Revision of the last snapshot handed out by `poll`.
    seen: Option<u64>,
}

impl RedrawSignal {
    /// Returns the latest snapshot if anything changed since the last call,
    /// clearing the dirty flag.
    ///
    /// After the game loop is gone, a last state that was never handed out
    /// is still returned once.
    pub fn poll(&mut self) -> Option<Snapshot> {
        let snapshot = match self.rx.has_changed() {
            Ok(true) => self.rx.borrow_and_update().clone(),
            Ok(false) => return None,
            Err(_) => {
                let last = self.rx.borrow_and_update();
                if self.seen == Some(last.revision) {
                    return None;
                }
                last.clone()
            }
        };
        self.seen = Some(snapshot.revision);
        Some(snapshot)
    }

    /// The latest snapshot, without touching the dirty flag.
    pub fn current(&self) -> Snapshot {
        self.rx.borrow().clone()
    }

    /// True once the game loop (and its observer) is gone.
    pub fn is_closed(&self) -> bool {
        self.rx.has_changed().is_err()
    }
}

/// Creates the signal pair. The first [`RedrawSignal::poll`] always yields
/// the initial state so the display draws once at start-up.
pub fn redraw_channel() -> (WatchObserver, RedrawSignal) {
    let (tx, mut rx) = watch::channel(Snapshot::default());
    rx.mark_changed();
    (WatchObserver { tx }, RedrawSignal { rx, seen: None })
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_engine::BoardEngine;

    #[test]
    fn test_initial_poll_yields_start_state() {
        let (_observer, mut signal) = redraw_channel();
        assert_eq!(signal.poll(), Some(Snapshot::default()));
        assert_eq!(signal.poll(), None);
    }

    #[test]
    fn test_changes_coalesce() {
        let (observer, mut signal) = redraw_channel();
        signal.poll();

        let mut engine = BoardEngine::new(observer);
        engine.apply_move(0, 0).unwrap();
        engine.apply_move(1, 1).unwrap();
        engine.apply_move(2, 2).unwrap();

        let snapshot = signal.poll().expect("dirty after moves");
        assert_eq!(snapshot.revision, 3);
        assert_eq!(snapshot.board.filled(), 3);
        assert_eq!(signal.poll(), None);
    }

    #[test]
    fn test_closed_after_engine_dropped() {
        let (observer, signal) = redraw_channel();
        assert!(!signal.is_closed());
        drop(observer);
        assert!(signal.is_closed());
    }

    #[test]
    fn test_final_state_drawn_after_close() {
        let (observer, mut signal) = redraw_channel();
        signal.poll();

        let mut engine = BoardEngine::new(observer);
        engine.apply_move(0, 0).unwrap();
        engine.apply_move(1, 1).unwrap();
        drop(engine);

        assert!(signal.is_closed());
        let snapshot = signal.poll().expect("last state still pending");
        assert_eq!(snapshot.revision, 2);
        assert_eq!(snapshot.board.filled(), 2);
        assert_eq!(signal.poll(), None);
    }

    #[test]
    fn test_no_repeat_after_close() {
        let (observer, mut signal) = redraw_channel();
        let mut engine = BoardEngine::new(observer);
        engine.apply_move(0, 0).unwrap();
        assert_eq!(signal.poll().map(|s| s.revision), Some(1));

        drop(engine);
        assert_eq!(signal.poll(), None);
    }
}
