use std::collections::{HashSet, VecDeque};

use crate::config::check_range;
use crate::session_rng::SessionRng;
use crate::log;
use super::grid::Grid;
use super::settings::{MAX_GRID_SIZE, MIN_GRID_SIZE};
use super::types::{CellKind, Direction, GameStatus, SnakeFrame, TickOutcome};

/// Head first: the snake starts on the top row moving right.
pub const INITIAL_SNAKE: [usize; 3] = [2, 1, 0];
pub const INITIAL_DIRECTION: Direction = Direction::Right;

// Random picks before falling back to a scan of the free cells.
const FOOD_SAMPLE_ATTEMPTS: usize = 64;

#[derive(Clone, Debug)]
pub struct SnakeGameState {
    grid: Grid,
    body: VecDeque<usize>,
    body_set: HashSet<usize>,
    direction: Direction,
    pending_direction: Option<Direction>,
    food: Option<usize>,
    status: GameStatus,
    score: u32,
}

impl SnakeGameState {
    /// Fails unless `grid_size` is within `MIN_GRID_SIZE..=MAX_GRID_SIZE`.
    pub fn new(grid_size: usize) -> Result<Self, String> {
        check_range("grid_size", grid_size, MIN_GRID_SIZE, MAX_GRID_SIZE)?;

        let mut state = Self {
            grid: Grid::new(grid_size),
            body: VecDeque::new(),
            body_set: HashSet::new(),
            direction: INITIAL_DIRECTION,
            pending_direction: None,
            food: None,
            status: GameStatus::Idle,
            score: 0,
        };
        state.set_body(&INITIAL_SNAKE);
        Ok(state)
    }

    /// Puts the snake back at its starting cells, places food and starts running.
    pub fn reset(&mut self, rng: &mut SessionRng) {
        self.set_body(&INITIAL_SNAKE);
        self.direction = INITIAL_DIRECTION;
        self.pending_direction = None;
        self.score = 0;
        self.food = None;
        self.status = GameStatus::Running;
        self.food = self.place_food(rng);
        if self.food.is_none() {
            self.status = GameStatus::Won;
        }
    }

    /// Queues a turn for the next tick. Reversing onto the neck is ignored.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.status != GameStatus::Running || direction.is_opposite(&self.direction) {
            return false;
        }
        self.pending_direction = Some(direction);
        true
    }

    pub fn update(&mut self, rng: &mut SessionRng) -> TickOutcome {
        if self.status != GameStatus::Running {
            return TickOutcome::Ignored;
        }

        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }

        let next_head = self.grid.step(self.head(), self.direction);

        if self.body_set.contains(&next_head) {
            self.status = GameStatus::Lost;
            log!(
                "Snake collided with itself at ({}, {}), length {}",
                self.grid.col(next_head),
                self.grid.row(next_head),
                self.body.len()
            );
            return TickOutcome::Collided;
        }

        self.body.push_front(next_head);
        self.body_set.insert(next_head);

        if self.food == Some(next_head) {
            self.score += 1;
            self.food = self.place_food(rng);
            if self.food.is_none() {
                self.status = GameStatus::Won;
                log!("Snake filled the grid with length {}", self.body.len());
                return TickOutcome::Filled;
            }
            return TickOutcome::Ate;
        }

        if let Some(tail) = self.body.pop_back() {
            self.body_set.remove(&tail);
        }
        TickOutcome::Moved
    }

    /// Picks a uniformly random cell not covered by the snake, or `None`
    /// when the snake covers the whole grid.
    pub fn place_food(&self, rng: &mut SessionRng) -> Option<usize> {
        let cell_count = self.grid.cell_count();
        if self.body_set.len() >= cell_count {
            return None;
        }

        for _ in 0..FOOD_SAMPLE_ATTEMPTS {
            let candidate = rng.index_below(cell_count);
            if !self.body_set.contains(&candidate) {
                return Some(candidate);
            }
        }

        let free_cells: Vec<usize> = (0..cell_count)
            .filter(|cell| !self.body_set.contains(cell))
            .collect();
        Some(free_cells[rng.index_below(free_cells.len())])
    }

    pub fn frame(&self) -> SnakeFrame {
        let mut cells = vec![CellKind::Empty; self.grid.cell_count()];

        if self.status != GameStatus::Idle {
            for &segment in self.body.iter().skip(1) {
                cells[segment] = CellKind::SnakeBody;
            }
            cells[self.head()] = CellKind::SnakeHead;
            if let Some(food) = self.food {
                cells[food] = CellKind::Food;
            }
        }

        SnakeFrame {
            grid_size: self.grid.size(),
            cells,
            status: self.status,
            length: self.body.len(),
            score: self.score,
        }
    }

    pub fn head(&self) -> usize {
        self.body[0]
    }

    pub fn body(&self) -> impl Iterator<Item = usize> + '_ {
        self.body.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn food(&self) -> Option<usize> {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    fn set_body(&mut self, cells: &[usize]) {
        self.body = cells.iter().copied().collect();
        self.body_set = cells.iter().copied().collect();
    }

    #[cfg(test)]
    pub(crate) fn force(&mut self, body: &[usize], direction: Direction, food: Option<usize>) {
        self.set_body(body);
        self.direction = direction;
        self.pending_direction = None;
        self.food = food;
        self.status = GameStatus::Running;
    }
}
