//! Repeating timer for frame-driven apps.
//!
//! egui has no timer callbacks: an app finds out that time has passed
//! when its next frame runs. `RepeatingTimer` keeps the schedule and
//! answers "has a tick come due?" for whatever `Instant` the frame saw,
//! so it can be driven by a real clock or by a test.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct RepeatingTimer {
    period: Duration,
    /// Deadline of the next tick, `None` while stopped.
    next_due: Option<Instant>,
}

impl RepeatingTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Arm the timer. The first tick is due one period after `now`.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.period);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Returns `true` if a tick is due at `now`, at most once per call.
    ///
    /// If more than one period was missed (the window was hidden, the
    /// machine slept) the missed ticks collapse into this one and the
    /// schedule restarts from `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now < due {
            return false;
        }
        let next = due + self.period;
        self.next_due = Some(if next <= now { now + self.period } else { next });
        true
    }

    /// Time left until the next tick, zero if one is already due.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}
