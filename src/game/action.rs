/// Direction the snake is travelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::Up, Heading::Down, Heading::Left, Heading::Right];

    /// Whether `other` lies straight behind this heading
    pub fn is_opposite(&self, other: Heading) -> bool {
        matches!(
            (self, other),
            (Heading::Up, Heading::Down)
                | (Heading::Down, Heading::Up)
                | (Heading::Left, Heading::Right)
                | (Heading::Right, Heading::Left)
        )
    }

    /// True for Up/Down, where the x axis stays fixed while moving
    pub fn is_vertical(&self) -> bool {
        matches!(self, Heading::Up | Heading::Down)
    }

    /// Heading after pressing the left button
    ///
    /// Up and Down both map to Left: the two buttons always move the snake off
    /// its current axis, so one press can never reverse it.
    pub fn turned_left(&self) -> Heading {
        match self {
            Heading::Up | Heading::Down => Heading::Left,
            Heading::Left => Heading::Down,
            Heading::Right => Heading::Up,
        }
    }

    /// Heading after pressing the right button
    pub fn turned_right(&self) -> Heading {
        match self {
            Heading::Up | Heading::Down => Heading::Right,
            Heading::Left => Heading::Up,
            Heading::Right => Heading::Down,
        }
    }

    pub fn turned(&self, turn: Turn) -> Heading {
        match turn {
            Turn::Left => self.turned_left(),
            Turn::Right => self.turned_right(),
        }
    }
}

/// A button press: relative turn requested by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Button A
    Left,
    /// Button B
    Right,
}
