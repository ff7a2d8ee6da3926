#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }

    /// Linear index delta on a grid `size` cells wide, before wrapping.
    pub fn delta(&self, size: usize) -> isize {
        match self {
            Direction::Right => 1,
            Direction::Left => -1,
            Direction::Down => size as isize,
            Direction::Up => -(size as isize),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Idle,
    Running,
    Lost,
    Won,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    SnakeHead,
    SnakeBody,
    Food,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    Ate,
    Collided,
    Filled,
    Ignored,
}

/// Render snapshot of the whole grid, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnakeFrame {
    pub grid_size: usize,
    pub cells: Vec<CellKind>,
    pub status: GameStatus,
    pub length: usize,
    pub score: u32,
}

impl SnakeFrame {
    pub fn cell(&self, row: usize, col: usize) -> CellKind {
        self.cells[row * self.grid_size + col]
    }
}
