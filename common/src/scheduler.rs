use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at, sleep_until};

/// Returned by a repeating callback to keep or end the loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Stop,
}

/// Runs a callback once at a fixed deadline unless cancelled first.
///
/// Dropping the handle does not cancel the timer.
pub struct OneShotTimer {
    handle: JoinHandle<()>,
}

impl OneShotTimer {
    pub fn at<F>(deadline: Instant, callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            sleep_until(deadline).await;
            callback();
        });
        Self { handle }
    }

    pub fn after<F>(delay: Duration, callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self::at(Instant::now() + delay, callback)
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Runs a callback every `period`, first one `period` after start, until it
/// returns [`TickControl::Stop`] or the timer is cancelled or dropped.
pub struct RepeatingTimer {
    handle: JoinHandle<()>,
}

impl RepeatingTimer {
    pub fn start<F>(period: Duration, mut callback: F) -> Self
    where
        F: FnMut() -> TickControl + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                if callback() == TickControl::Stop {
                    break;
                }
            }
        });
        Self { handle }
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for RepeatingTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::{Arc, Mutex};
    use tokio::time::sleep;

    #[tokio::test(start_paused = true)]
    async fn test_one_shot_fires_at_deadline() {
        let fired = Arc::new(AtomicU32::new(0));
        let fired_clone = fired.clone();
        let _timer = OneShotTimer::after(Duration::from_millis(100), move || {
            fired_clone.fetch_add(1, Ordering::SeqCst);
        });

        sleep(Duration::from_millis(99)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        sleep(Duration::from_millis(2)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_one_shot_cancel_prevents_callback() {
        let fired = Arc::new(AtomicU32::new(0));
        let fired_clone = fired.clone();
        let timer = OneShotTimer::after(Duration::from_millis(50), move || {
            fired_clone.fetch_add(1, Ordering::SeqCst);
        });

        timer.cancel();
        sleep(Duration::from_millis(100)).await;

        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_one_shots_fire_in_deadline_order() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let start = Instant::now();
        let mut timers = Vec::new();

        for index in [2u64, 0, 1] {
            let order = order.clone();
            timers.push(OneShotTimer::at(start + Duration::from_millis(100 * index), move || {
                order.lock().unwrap().push(index);
            }));
        }

        sleep(Duration::from_millis(250)).await;

        assert_eq!(*order.lock().unwrap(), vec![0, 1, 2]);
        assert!(timers.iter().all(OneShotTimer::is_finished));
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeating_timer_ticks_each_period_until_stop() {
        let ticks = Arc::new(AtomicU32::new(0));
        let ticks_clone = ticks.clone();
        let timer = RepeatingTimer::start(Duration::from_millis(150), move || {
            let count = ticks_clone.fetch_add(1, Ordering::SeqCst) + 1;
            if count == 3 { TickControl::Stop } else { TickControl::Continue }
        });

        sleep(Duration::from_millis(100)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 0);

        sleep(Duration::from_millis(100)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 1);

        sleep(Duration::from_millis(1000)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 3);
        assert!(timer.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_repeating_timer_stops_it() {
        let ticks = Arc::new(AtomicU32::new(0));
        let ticks_clone = ticks.clone();
        let timer = RepeatingTimer::start(Duration::from_millis(10), move || {
            ticks_clone.fetch_add(1, Ordering::SeqCst);
            TickControl::Continue
        });

        sleep(Duration::from_millis(35)).await;
        drop(timer);
        let seen = ticks.load(Ordering::SeqCst);
        sleep(Duration::from_millis(100)).await;

        assert_eq!(seen, 3);
        assert_eq!(ticks.load(Ordering::SeqCst), seen);
    }
}
