use super::{config::BOARD_SIZE, config::BrightnessLevels, snake::Position};

/// What occupies a cell of the matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Body,
    Head,
    Food,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn brightness(&self, levels: &BrightnessLevels) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Body => levels.body,
            Cell::Head => levels.head,
            Cell::Food => levels.food,
        }
    }
}

/// Occupancy of every cell on the board, indexed by [`Position`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell at `pos`; positions off the board read as empty
    pub fn get(&self, pos: Position) -> Cell {
        if pos.is_on_board() {
            self.cells[pos.y as usize][pos.x as usize]
        } else {
            Cell::Empty
        }
    }

    /// Set the cell at `pos`; positions off the board are ignored
    pub fn set(&mut self, pos: Position, cell: Cell) {
        if pos.is_on_board() {
            self.cells[pos.y as usize][pos.x as usize] = cell;
        }
    }

    pub fn clear(&mut self) {
        self.cells = Default::default();
    }

    /// All board positions, row by row
    pub fn positions() -> impl Iterator<Item = Position> {
        let range = 0..BOARD_SIZE as i32;
        range
            .clone()
            .flat_map(move |y| range.clone().map(move |x| Position::new(x, y)))
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    /// Brightness image of this grid
    pub fn to_image(&self, levels: &BrightnessLevels) -> Image {
        let mut image = Image::new();
        for pos in Self::positions() {
            image.set_pixel(pos, self.get(pos).brightness(levels));
        }
        image
    }
}

/// Pixel brightness values pushed to the display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Image {
    pixels: [[u8; BOARD_SIZE]; BOARD_SIZE],
}

impl Image {
    /// All pixels off
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pixel(&self, pos: Position) -> u8 {
        if pos.is_on_board() {
            self.pixels[pos.y as usize][pos.x as usize]
        } else {
            0
        }
    }

    pub fn set_pixel(&mut self, pos: Position, value: u8) {
        if pos.is_on_board() {
            self.pixels[pos.y as usize][pos.x as usize] = value;
        }
    }

    pub fn rows(&self) -> &[[u8; BOARD_SIZE]; BOARD_SIZE] {
        &self.pixels
    }

    #[cfg(test)]
    pub fn is_blank(&self) -> bool {
        self.pixels.iter().flatten().all(|&p| p == 0)
    }
}
