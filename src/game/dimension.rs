/// One axis of a board position that cycles within `[start, end]`
///
/// Moving past either bound wraps to the opposite bound instead of clamping,
/// which is what lets the snake leave one edge of the matrix and reappear on
/// the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimension {
    start: i32,
    end: i32,
    value: i32,
}

impl Dimension {
    /// Create an axis value. `value` is expected to lie within `[start, end]`.
    pub fn new(start: i32, end: i32, value: i32) -> Self {
        debug_assert!(start <= end, "axis start {start} must not exceed end {end}");
        Self { start, end, value }
    }

    /// Axis spanning a board of `size` cells, starting at `value`
    pub fn on_board(size: usize, value: i32) -> Self {
        Self::new(0, size as i32 - 1, value)
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    /// Advance by one, wrapping to `start` past `end`
    pub fn increment(&mut self) {
        self.value += 1;
        if self.value > self.end {
            self.value = self.start;
        }
    }

    /// Retreat by one, wrapping to `end` below `start`
    pub fn decrement(&mut self) {
        self.value -= 1;
        if self.value < self.start {
            self.value = self.end;
        }
    }

    /// `value - k`, or `end` when that falls below `start`
    ///
    /// Unlike [`Dimension::decrement`] this does not wrap by the axis length:
    /// any underflow lands on `end` regardless of how far below `start` it went.
    pub fn subtract(&self, k: i32) -> i32 {
        let result = self.value - k;
        if result < self.start { self.end } else { result }
    }
}
