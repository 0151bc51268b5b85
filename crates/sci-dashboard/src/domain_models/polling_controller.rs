//! Polling controller
//!
//! Owns the single periodic refresh timer. The timer runs while the visible
//! task list contains pending or processing tasks and is cancelled as soon
//! as it does not.

use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Whether the periodic refresh timer is running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PollingPhase {
    #[default]
    Idle,
    Polling,
}

/// Starts and stops the periodic refresh timer
///
/// At most one timer exists at any time: `start` while polling and `stop`
/// while idle are no-ops. The timer is cancelled on drop.
pub struct PollingController {
    interval: Duration,
    timer: Option<JoinHandle<()>>,
}

impl PollingController {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            timer: None,
        }
    }

    pub fn phase(&self) -> PollingPhase {
        if self.timer.is_some() {
            PollingPhase::Polling
        } else {
            PollingPhase::Idle
        }
    }

    /// Start the timer, calling `on_tick` every interval
    ///
    /// The first tick fires one interval after start. Returns `false` if a
    /// timer was already running.
    pub fn start<F>(&mut self, on_tick: F) -> bool
    where
        F: Fn() + Send + 'static,
    {
        if self.timer.is_some() {
            return false;
        }

        let period = self.interval;
        log::info!("Polling: starting refresh timer every {:?}", period);
        self.timer = Some(tokio::spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                on_tick();
            }
        }));
        true
    }

    /// Cancel the timer. Returns `false` if none was running.
    pub fn stop(&mut self) -> bool {
        match self.timer.take() {
            Some(handle) => {
                handle.abort();
                log::info!("Polling: refresh timer stopped");
                true
            }
            None => false,
        }
    }

    /// Start or stop depending on whether active tasks are visible
    ///
    /// Returns the new phase if it changed.
    pub fn observe<F>(&mut self, has_active_tasks: bool, on_tick: F) -> Option<PollingPhase>
    where
        F: Fn() + Send + 'static,
    {
        let changed = if has_active_tasks {
            self.start(on_tick)
        } else {
            self.stop()
        };
        changed.then(|| self.phase())
    }
}

impl Drop for PollingController {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counter() -> (Arc<AtomicUsize>, impl Fn() + Send + Clone + 'static) {
        let ticks = Arc::new(AtomicUsize::new(0));
        let handle = Arc::clone(&ticks);
        (ticks, move || {
            handle.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_every_interval_until_stopped() {
        let (ticks, on_tick) = counter();
        let mut controller = PollingController::new(Duration::from_secs(5));

        assert!(controller.start(on_tick));
        assert_eq!(controller.phase(), PollingPhase::Polling);

        time::sleep(Duration::from_secs(11)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 2);

        assert!(controller.stop());
        assert_eq!(controller.phase(), PollingPhase::Idle);

        time::sleep(Duration::from_secs(30)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_twice_keeps_single_timer() {
        let (ticks, on_tick) = counter();
        let mut controller = PollingController::new(Duration::from_secs(5));

        assert!(controller.start(on_tick.clone()));
        assert!(!controller.start(on_tick));

        time::sleep(Duration::from_secs(6)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_when_idle_is_noop() {
        let mut controller = PollingController::new(Duration::from_secs(5));
        assert!(!controller.stop());
        assert!(!controller.stop());
        assert_eq!(controller.phase(), PollingPhase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_observe_reports_transitions_only() {
        let (_ticks, on_tick) = counter();
        let mut controller = PollingController::new(Duration::from_secs(5));

        assert_eq!(
            controller.observe(true, on_tick.clone()),
            Some(PollingPhase::Polling)
        );
        assert_eq!(controller.observe(true, on_tick.clone()), None);
        assert_eq!(
            controller.observe(false, on_tick.clone()),
            Some(PollingPhase::Idle)
        );
        assert_eq!(controller.observe(false, on_tick), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_timer() {
        let (ticks, on_tick) = counter();
        {
            let mut controller = PollingController::new(Duration::from_secs(5));
            controller.start(on_tick);
        }
        time::sleep(Duration::from_secs(20)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), 0);
    }
}
