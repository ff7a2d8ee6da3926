mod game_state;
mod grid;
mod session;
mod settings;
mod types;

pub use game_state::{INITIAL_DIRECTION, INITIAL_SNAKE, SnakeGameState};
pub use grid::Grid;
pub use session::{SnakeRenderer, SnakeSession};
pub use settings::{MAX_GRID_SIZE, MIN_GRID_SIZE, SnakeSettings};
pub use types::{CellKind, Direction, GameStatus, SnakeFrame, TickOutcome};
