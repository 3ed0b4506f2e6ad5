// llcnfc-rs/llcnfc/src/timer/guard.rs

use std::time::Duration;

use crate::types::Seq;

/// Tick-driven countdown. Only moves when the owner calls `advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Countdown {
    remaining: Option<Duration>,
}

impl Countdown {
    pub fn start(&mut self, timeout: Duration) {
        self.remaining = Some(timeout);
    }

    pub fn stop(&mut self) {
        self.remaining = None;
    }

    pub fn is_running(&self) -> bool {
        self.remaining.is_some()
    }

    pub fn remaining(&self) -> Option<Duration> {
        self.remaining
    }

    /// Advance by `step`. Returns true exactly once, on the tick that hits
    /// zero; the countdown is stopped afterwards.
    pub fn advance(&mut self, step: Duration) -> bool {
        match self.remaining {
            Some(left) => {
                let left = left.saturating_sub(step);
                if left.is_zero() {
                    self.remaining = None;
                    true
                } else {
                    self.remaining = Some(left);
                    false
                }
            }
            None => false,
        }
    }
}

/// Guard timer slot bound to one outstanding I frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardSlot {
    pub seq: Seq,
    countdown: Countdown,
    expired: bool,
}

impl GuardSlot {
    pub fn new(seq: Seq, timeout: Duration) -> Self {
        let mut countdown = Countdown::default();
        countdown.start(timeout);
        Self {
            seq,
            countdown,
            expired: false,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }

    pub fn remaining(&self) -> Option<Duration> {
        self.countdown.remaining()
    }

    pub(crate) fn advance(&mut self, step: Duration) {
        if self.countdown.advance(step) {
            self.expired = true;
        }
    }

    pub(crate) fn restart(&mut self, timeout: Duration) {
        self.countdown.start(timeout);
        self.expired = false;
    }
}
