use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::config::Validate;
use crate::log;
use crate::scheduler::{RepeatingTimer, TickControl};
use crate::session_rng::SessionRng;
use super::{Direction, GameStatus, SnakeFrame, SnakeGameState, SnakeSettings, TickOutcome};

/// Receives a fresh frame after every state change.
pub trait SnakeRenderer: Send + Sync + Clone + 'static {
    fn render(&self, frame: SnakeFrame);
}

struct SharedGame {
    state: SnakeGameState,
    rng: SessionRng,
    generation: u64,
}

/// A snake game driven by a repeating tick timer.
///
/// Each `start` bumps the game generation and replaces the timer; a tick
/// from an older generation stops itself without touching the state, so at
/// most one tick stream mutates the game. Must be used inside a tokio runtime.
pub struct SnakeSession<R: SnakeRenderer> {
    game: Arc<Mutex<SharedGame>>,
    renderer: R,
    tick_interval: Duration,
    timer: Option<RepeatingTimer>,
}

impl<R: SnakeRenderer> SnakeSession<R> {
    pub fn new(settings: &SnakeSettings, renderer: R) -> Result<Self, String> {
        Self::with_rng(settings, SessionRng::from_random(), renderer)
    }

    /// Fails on settings that do not pass validation; nothing is rendered then.
    pub fn with_rng(settings: &SnakeSettings, rng: SessionRng, renderer: R) -> Result<Self, String> {
        settings.validate()?;
        let state = SnakeGameState::new(settings.grid_size)?;
        renderer.render(state.frame());

        Ok(Self {
            game: Arc::new(Mutex::new(SharedGame {
                state,
                rng,
                generation: 0,
            })),
            renderer,
            tick_interval: settings.tick_interval(),
            timer: None,
        })
    }

    /// (Re)starts the game from the initial snake, whatever the current status.
    pub fn start(&mut self) {
        if let Some(timer) = self.timer.take()
            && !timer.is_finished()
        {
            timer.cancel();
            log!("Snake tick timer cancelled for restart");
        }

        let (generation, status) = {
            let mut game = lock_game(&self.game);
            let SharedGame { state, rng, generation } = &mut *game;
            *generation += 1;
            state.reset(rng);
            self.renderer.render(state.frame());
            (*generation, state.status())
        };

        log!("Snake game #{} started", generation);

        if status != GameStatus::Running {
            return;
        }

        let game = Arc::clone(&self.game);
        let renderer = self.renderer.clone();
        self.timer = Some(RepeatingTimer::start(self.tick_interval, move || {
            tick(&game, generation, &renderer)
        }));
    }

    pub fn handle_direction_input(&self, direction: Direction) -> bool {
        lock_game(&self.game).state.set_direction(direction)
    }

    pub fn frame(&self) -> SnakeFrame {
        lock_game(&self.game).state.frame()
    }

    pub fn status(&self) -> GameStatus {
        lock_game(&self.game).state.status()
    }

    pub fn is_ticking(&self) -> bool {
        self.timer.as_ref().is_some_and(|timer| !timer.is_finished())
    }
}

fn tick<R: SnakeRenderer>(game: &Mutex<SharedGame>, generation: u64, renderer: &R) -> TickControl {
    let mut game = lock_game(game);
    if game.generation != generation {
        return TickControl::Stop;
    }

    let SharedGame { state, rng, .. } = &mut *game;
    let outcome = state.update(rng);

    match outcome {
        TickOutcome::Moved | TickOutcome::Ate => {
            renderer.render(state.frame());
            TickControl::Continue
        }
        TickOutcome::Collided | TickOutcome::Filled => {
            renderer.render(state.frame());
            log!(
                "Snake game #{} over: {:?}, length {}, score {}",
                generation,
                state.status(),
                state.len(),
                state.score()
            );
            TickControl::Stop
        }
        TickOutcome::Ignored => TickControl::Stop,
    }
}

// A panic inside a tick leaves the game readable; recover the guard.
fn lock_game(game: &Mutex<SharedGame>) -> MutexGuard<'_, SharedGame> {
    game.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::CellKind;
    use tokio::time::sleep;

    #[derive(Clone, Default)]
    struct RecordingRenderer {
        frames: Arc<Mutex<Vec<SnakeFrame>>>,
    }

    impl RecordingRenderer {
        fn count(&self) -> usize {
            self.frames.lock().unwrap().len()
        }

        fn last(&self) -> SnakeFrame {
            self.frames.lock().unwrap().last().cloned().unwrap()
        }
    }

    impl SnakeRenderer for RecordingRenderer {
        fn render(&self, frame: SnakeFrame) {
            self.frames.lock().unwrap().push(frame);
        }
    }

    fn create_session(grid_size: usize) -> (SnakeSession<RecordingRenderer>, RecordingRenderer) {
        let settings = SnakeSettings {
            grid_size,
            ..SnakeSettings::default()
        };
        let renderer = RecordingRenderer::default();
        let session = SnakeSession::with_rng(&settings, SessionRng::new(7), renderer.clone()).unwrap();
        (session, renderer)
    }

    fn head(frame: &SnakeFrame) -> usize {
        frame
            .cells
            .iter()
            .position(|c| *c == CellKind::SnakeHead)
            .unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_session_renders_idle_frame() {
        let (session, renderer) = create_session(20);
        assert_eq!(renderer.count(), 1);
        assert_eq!(session.status(), GameStatus::Idle);
        assert!(!session.is_ticking());
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_settings_are_rejected_without_rendering() {
        let renderer = RecordingRenderer::default();
        let tiny = SnakeSettings {
            grid_size: 1,
            ..SnakeSettings::default()
        };
        let no_tick = SnakeSettings {
            tick_interval_ms: 0,
            ..SnakeSettings::default()
        };

        assert!(SnakeSession::with_rng(&tiny, SessionRng::new(1), renderer.clone()).is_err());
        assert!(SnakeSession::with_rng(&no_tick, SessionRng::new(1), renderer.clone()).is_err());
        assert_eq!(renderer.count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_renders_initial_snake_and_ticks_every_interval() {
        let (mut session, renderer) = create_session(20);

        session.start();
        let first = renderer.last();
        assert_eq!(first.status, GameStatus::Running);
        assert_eq!(first.length, 3);
        assert_eq!(head(&first), 2);
        assert!(session.is_ticking());

        sleep(Duration::from_millis(140)).await;
        assert_eq!(head(&renderer.last()), 2);

        sleep(Duration::from_millis(20)).await;
        assert_eq!(head(&renderer.last()), 3);

        sleep(Duration::from_millis(150)).await;
        assert_eq!(head(&renderer.last()), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_leaves_exactly_one_tick_stream() {
        let (mut session, renderer) = create_session(20);

        for _ in 0..5 {
            session.start();
            sleep(Duration::from_millis(10)).await;
        }
        let frames_after_restarts = renderer.count();

        // The first timer would have fired at 150ms.
        sleep(Duration::from_millis(105)).await;
        assert_eq!(renderer.count(), frames_after_restarts);

        sleep(Duration::from_millis(40)).await;
        assert_eq!(renderer.count(), frames_after_restarts + 1);
        assert_eq!(head(&renderer.last()), 3);

        sleep(Duration::from_millis(150)).await;
        assert_eq!(renderer.count(), frames_after_restarts + 2);
        assert_eq!(head(&renderer.last()), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_collision_stops_ticking_until_restart() {
        let (mut session, renderer) = create_session(5);
        session.start();
        session
            .game
            .lock()
            .unwrap()
            .state
            .force(&[6, 7, 2, 1, 0], Direction::Left, Some(24));

        assert!(session.handle_direction_input(Direction::Up));
        sleep(Duration::from_millis(160)).await;

        assert_eq!(session.status(), GameStatus::Lost);
        assert_eq!(renderer.last().status, GameStatus::Lost);
        let frames_at_loss = renderer.count();

        sleep(Duration::from_millis(1000)).await;
        assert_eq!(renderer.count(), frames_at_loss);
        assert!(!session.is_ticking());
        assert!(!session.handle_direction_input(Direction::Down));

        session.start();
        assert_eq!(session.status(), GameStatus::Running);
        assert_eq!(renderer.last().length, 3);
        assert!(session.is_ticking());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reverse_input_is_rejected() {
        let (mut session, _) = create_session(20);
        session.start();

        assert!(!session.handle_direction_input(Direction::Left));
        assert!(session.handle_direction_input(Direction::Up));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_session_stops_ticks() {
        let (mut session, renderer) = create_session(20);
        session.start();
        drop(session);
        let frames = renderer.count();

        sleep(Duration::from_millis(1000)).await;

        assert_eq!(renderer.count(), frames);
    }
}
