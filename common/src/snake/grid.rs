use super::Direction;

/// Square grid addressed by row-major linear index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
}

impl Grid {
    /// `size` must be non-zero.
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    pub fn row(&self, index: usize) -> usize {
        index / self.size
    }

    pub fn col(&self, index: usize) -> usize {
        index % self.size
    }

    /// Neighbour of `index` in `direction`. Leaving the grid re-enters on the
    /// opposite edge of the same row or column.
    pub fn step(&self, index: usize, direction: Direction) -> usize {
        let size = self.size;
        let col = self.col(index);
        let row = self.row(index);

        match direction {
            Direction::Right if col == size - 1 => index + 1 - size,
            Direction::Left if col == 0 => index + size - 1,
            Direction::Down if row == size - 1 => col,
            Direction::Up if row == 0 => (size - 1) * size + col,
            _ => index.wrapping_add_signed(direction.delta(size)),
        }
    }
}
