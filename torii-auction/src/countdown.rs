use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration};

/// Remaining time on a clock, decomposed into whole units.
///
/// Clamps at zero: once the target passes, all fields are zero and `ended`
/// is set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Remaining {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub ended: bool,
}

impl Remaining {
    pub const ZERO: Remaining = Remaining {
        hours: 0,
        minutes: 0,
        seconds: 0,
        ended: true,
    };
}

/// A countdown toward a fixed target timestamp.
///
/// Purely derived from the wall clock; holds no ticking state of its own.
#[derive(Debug, Clone, Copy)]
pub struct Countdown {
    target: DateTime<Utc>,
}

impl Countdown {
    pub fn new(target: DateTime<Utc>) -> Self {
        Self { target }
    }

    pub fn target(&self) -> DateTime<Utc> {
        self.target
    }

    /// Remaining time as of `now`
    pub fn remaining_at(&self, now: DateTime<Utc>) -> Remaining {
        let total_seconds = (self.target - now).num_seconds();
        if total_seconds <= 0 {
            return Remaining::ZERO;
        }
        Remaining {
            hours: total_seconds / 3600,
            minutes: (total_seconds % 3600) / 60,
            seconds: total_seconds % 60,
            ended: false,
        }
    }

    /// Remaining time as of the current wall clock
    pub fn remaining(&self) -> Remaining {
        self.remaining_at(Utc::now())
    }
}

/// Handle to a running countdown task.
///
/// Each countdown runs its own independent one-second ticker; dropping the
/// handle tears the task down.
pub struct CountdownHandle {
    task: JoinHandle<()>,
    rx: watch::Receiver<Remaining>,
}

impl CountdownHandle {
    /// Get a receiver that observes every published tick
    pub fn subscribe(&self) -> watch::Receiver<Remaining> {
        self.rx.clone()
    }

    /// Most recently published remaining time
    pub fn latest(&self) -> Remaining {
        self.rx.borrow().clone()
    }

    /// Stop the ticker immediately
    pub fn cancel(&self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for CountdownHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Spawn a ticking countdown toward `target`.
///
/// Publishes a fresh `Remaining` once per second on a watch channel. The
/// task exits on its own after publishing the final ended tick, or when
/// cancelled. A target already in the past publishes the ended state
/// immediately.
pub fn spawn_countdown(target: DateTime<Utc>) -> CountdownHandle {
    let countdown = Countdown::new(target);
    let (tx, rx) = watch::channel(countdown.remaining());

    let task = tokio::spawn(async move {
        let mut ticker = interval(Duration::from_secs(1));
        loop {
            ticker.tick().await;
            let remaining = countdown.remaining();
            let ended = remaining.ended;
            if tx.send(remaining).is_err() {
                // Every receiver is gone; nothing left to drive
                break;
            }
            if ended {
                tracing::debug!(ends_at = %target, "countdown ended");
                break;
            }
        }
    });

    CountdownHandle { task, rx }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration as ChronoDuration;

    #[test]
    fn test_decomposition() {
        let now = Utc::now();
        let countdown = Countdown::new(now + ChronoDuration::seconds(3725));

        let remaining = countdown.remaining_at(now);
        assert_eq!(remaining.hours, 1);
        assert_eq!(remaining.minutes, 2);
        assert_eq!(remaining.seconds, 5);
        assert!(!remaining.ended);
    }

    #[test]
    fn test_past_target_clamps_to_zero() {
        let now = Utc::now();
        let countdown = Countdown::new(now - ChronoDuration::seconds(10));

        let remaining = countdown.remaining_at(now);
        assert_eq!(remaining, Remaining::ZERO);
        assert!(remaining.ended);
    }

    #[test]
    fn test_exact_target_is_ended() {
        let now = Utc::now();
        let countdown = Countdown::new(now);
        assert!(countdown.remaining_at(now).ended);
    }

    #[tokio::test]
    async fn test_spawned_countdown_with_past_target_ends_immediately() {
        let handle = spawn_countdown(Utc::now() - ChronoDuration::hours(1));

        // The initial published value already reports the ended state
        let remaining = handle.latest();
        assert!(remaining.ended);
        assert_eq!(remaining.hours, 0);
        assert_eq!(remaining.seconds, 0);
    }

    #[tokio::test]
    async fn test_cancel_tears_down_task() {
        let handle = spawn_countdown(Utc::now() + ChronoDuration::hours(6));
        assert!(!handle.latest().ended);

        handle.cancel();
        // Abort is asynchronous; yield until the runtime reaps the task
        for _ in 0..100 {
            if handle.is_finished() {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert!(handle.is_finished());
    }

    #[tokio::test]
    async fn test_subscriber_observes_ticks() {
        let handle = spawn_countdown(Utc::now() + ChronoDuration::seconds(2));
        let mut rx = handle.subscribe();

        rx.changed().await.expect("first tick");
        assert!(!rx.borrow().ended || rx.borrow().seconds == 0);
    }
}
