use std::collections::VecDeque;

use super::{
    action::{Heading, Turn},
    config::BOARD_SIZE,
    dimension::Dimension,
};

/// A cell on the LED matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Centre of the board, where every new snake starts
    pub fn center() -> Self {
        let middle = (BOARD_SIZE / 2) as i32;
        Self::new(middle, middle)
    }

    /// Neighbouring cell in `heading`, wrapping around the board edges
    pub fn moved_in_direction(&self, heading: Heading) -> Self {
        let mut x = Dimension::on_board(BOARD_SIZE, self.x);
        let mut y = Dimension::on_board(BOARD_SIZE, self.y);

        match heading {
            Heading::Up => y.decrement(),
            Heading::Down => y.increment(),
            Heading::Left => x.decrement(),
            Heading::Right => x.increment(),
        }

        Self::new(x.value(), y.value())
    }

    pub fn is_on_board(&self) -> bool {
        let range = 0..BOARD_SIZE as i32;
        range.contains(&self.x) && range.contains(&self.y)
    }
}

/// The snake: body segments ordered head to tail, plus its heading
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
    heading: Heading,
}

impl Snake {
    /// A single segment at the board centre, heading up
    pub fn new() -> Self {
        Self {
            body: VecDeque::from([Position::center()]),
            heading: Heading::Up,
        }
    }

    /// Build a snake from explicit segments, head first
    pub fn from_segments(segments: impl IntoIterator<Item = Position>, heading: Heading) -> Self {
        Self {
            body: segments.into_iter().collect(),
            heading,
        }
    }

    /// Most recently added segment, `None` if the body is empty
    pub fn head(&self) -> Option<Position> {
        self.body.front().copied()
    }

    /// Oldest segment, `None` if the body is empty
    pub fn tail(&self) -> Option<Position> {
        self.body.back().copied()
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Segments from head to tail
    pub fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().copied()
    }

    /// Prepend a new head one cell ahead of the current one
    ///
    /// The tail is left in place; pair with [`Snake::reduce`] for a plain move.
    pub fn grow(&mut self) {
        if let Some(head) = self.head() {
            self.body.push_front(head.moved_in_direction(self.heading));
        }
    }

    /// Drop the tail segment
    pub fn reduce(&mut self) {
        self.body.pop_back();
    }

    /// Apply a button press to the heading
    pub fn turn(&mut self, turn: Turn) {
        let heading = self.heading.turned(turn);
        debug_assert!(
            !self.heading.is_opposite(heading),
            "{turn:?} reversed {:?}",
            self.heading
        );
        self.heading = heading;
    }

    pub fn turn_left(&mut self) {
        self.turn(Turn::Left);
    }

    pub fn turn_right(&mut self) {
        self.turn(Turn::Right);
    }

    /// Back to a single centre segment heading up
    pub fn reset(&mut self) {
        self.body.clear();
        self.body.push_front(Position::center());
        self.heading = Heading::Up;
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}
