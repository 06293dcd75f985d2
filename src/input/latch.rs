use std::sync::atomic::{AtomicU8, Ordering};

use crate::game::Turn;

const EMPTY: u8 = 0;
const LEFT: u8 = 1;
const RIGHT: u8 = 2;

/// Single-slot holder for the turn requested since the last tick
///
/// The input task writes it, the game loop drains it once per tick. Only the
/// first request between two ticks is kept: two quarter turns landing before
/// the snake moves would reverse it straight into its own body.
#[derive(Debug, Default)]
pub struct TurnLatch {
    slot: AtomicU8,
}

impl TurnLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `turn` if no turn is pending. Returns whether it was accepted.
    pub fn request(&self, turn: Turn) -> bool {
        let encoded = match turn {
            Turn::Left => LEFT,
            Turn::Right => RIGHT,
        };
        self.slot
            .compare_exchange(EMPTY, encoded, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Empty the slot, returning the pending turn if there was one
    pub fn take(&self) -> Option<Turn> {
        match self.slot.swap(EMPTY, Ordering::AcqRel) {
            LEFT => Some(Turn::Left),
            RIGHT => Some(Turn::Right),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.slot.load(Ordering::Acquire) != EMPTY
    }

    pub fn clear(&self) {
        self.slot.store(EMPTY, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_first_request_wins() {
        let latch = TurnLatch::new();
        assert!(latch.request(Turn::Left));
        assert!(!latch.request(Turn::Right));
        assert!(!latch.request(Turn::Left));

        assert_eq!(latch.take(), Some(Turn::Left));
        assert_eq!(latch.take(), None);
    }

    #[test]
    fn test_take_reopens_latch() {
        let latch = TurnLatch::new();
        latch.request(Turn::Right);
        assert!(latch.is_pending());
        assert_eq!(latch.take(), Some(Turn::Right));
        assert!(!latch.is_pending());

        assert!(latch.request(Turn::Left));
        assert_eq!(latch.take(), Some(Turn::Left));
    }

    #[test]
    fn test_clear() {
        let latch = TurnLatch::new();
        latch.request(Turn::Left);
        latch.clear();
        assert_eq!(latch.take(), None);
    }

    #[test]
    fn test_shared_across_threads() {
        let latch = Arc::new(TurnLatch::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let latch = Arc::clone(&latch);
                std::thread::spawn(move || {
                    let turn = if i % 2 == 0 { Turn::Left } else { Turn::Right };
                    latch.request(turn)
                })
            })
            .collect();

        let accepted = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(|&accepted| accepted)
            .count();

        assert_eq!(accepted, 1);
        assert!(latch.take().is_some());
    }
}
