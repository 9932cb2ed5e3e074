// Periodic refresher service
// Owns a once-per-second timer that re-evaluates an event's lifecycle
// status and countdown against the clock and publishes the latest pair

use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use crate::models::schedule::{CountdownBreakdown, EventSchedule, LifecycleStatus};
use crate::services::{countdown, lifecycle};
use crate::utils::clock::Clock;

/// Cadence at which running refreshers re-evaluate and publish.
pub const TICK_INTERVAL: StdDuration = StdDuration::from_secs(1);

/// The latest computed pair, published to the observer on every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub status: LifecycleStatus,
    pub breakdown: CountdownBreakdown,
}

/// One-shot read: compute the current pair without a timer.
///
/// Surfaces that only need a momentary answer (a registration gate, a
/// static badge) call this instead of running a refresher.
pub fn evaluate(now: DateTime<Utc>, target: DateTime<Utc>) -> StatusSnapshot {
    StatusSnapshot {
        status: lifecycle::classify(now, target),
        breakdown: countdown::decompose(now, target),
    }
}

/// Re-evaluates an event schedule once per second and pushes each result
/// to a single observer.
///
/// One refresher per observing surface; instances are independent and
/// each owns its own timer task. `stop` (or dropping the refresher)
/// releases the timer, after which no further snapshots are published.
pub struct CountdownRefresher<C: Clock> {
    clock: Arc<C>,
    target_tx: watch::Sender<DateTime<Utc>>,
    task: Option<JoinHandle<()>>,
}

impl<C: Clock> CountdownRefresher<C> {
    pub fn new(clock: Arc<C>, schedule: EventSchedule) -> Self {
        let (target_tx, _) = watch::channel(schedule.target());
        Self {
            clock,
            target_tx,
            task: None,
        }
    }

    /// Whether the timer task is currently running.
    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    /// The target instant currently being observed.
    pub fn target(&self) -> DateTime<Utc> {
        *self.target_tx.borrow()
    }

    /// Start ticking. Publishes an initial snapshot right away, then one
    /// per second. Calling `start` on a running refresher is a no-op.
    pub fn start<F>(&mut self, mut observer: F)
    where
        F: FnMut(StatusSnapshot) + Send + 'static,
    {
        if self.task.is_some() {
            log::warn!("refresher already running, ignoring start");
            return;
        }

        let clock = Arc::clone(&self.clock);
        let mut target_rx = self.target_tx.subscribe();

        let task = tokio::spawn(async move {
            let mut interval = time::interval(TICK_INTERVAL);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        let target = *target_rx.borrow_and_update();
                        observer(evaluate(clock.now_utc(), target));
                    }
                    changed = target_rx.changed() => {
                        if changed.is_err() {
                            // Refresher dropped; nothing left to observe.
                            break;
                        }
                        // New target: publish immediately, keep tick phase.
                        let target = *target_rx.borrow_and_update();
                        observer(evaluate(clock.now_utc(), target));
                    }
                }
            }
        });

        self.task = Some(task);
        log::debug!("refresher started (target={})", self.target());
    }

    /// Swap the observed target. A running refresher recomputes and
    /// publishes immediately, without resetting the one-second cadence.
    pub fn set_target(&self, schedule: EventSchedule) {
        self.target_tx.send_replace(schedule.target());
    }

    /// Stop ticking. Idempotent; no snapshot is published after this
    /// returns.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            log::debug!("refresher stopped");
        }
    }
}

impl<C: Clock> Drop for CountdownRefresher<C> {
    fn drop(&mut self) {
        self.stop();
    }
}
