use instant::Instant;
use std::time::Duration;

/// Time from `start` to `now`, zero when `now` is earlier.
#[inline]
pub fn elapsed_since(start: Instant, now: Instant) -> Duration {
    if now > start {
        now - start
    } else {
        Duration::ZERO
    }
}

/// Debounced inactivity window.
///
/// Every `arm` pushes the deadline out to `now + window`; the owner polls
/// `take_expired` from its timer callback or frame tick.
#[derive(Clone, Debug)]
pub struct IdleTimer {
    window: Duration,
    deadline: Option<Instant>,
}

impl IdleTimer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left before expiry, `None` when disarmed.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| elapsed_since(now, d))
    }

    /// Returns true exactly once per armed window, disarming on expiry.
    pub fn take_expired(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(d) if now >= d => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
