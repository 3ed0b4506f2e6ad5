// llcnfc-rs/llcnfc/src/timer/mod.rs

//! Timer manager for the link engine.
//!
//! One connection timer, up to four guard timers (slot `i` belongs to the
//! `i`-th outstanding I frame) and an optional ack-coalescing timer. All of
//! them are driven by `tick()`, which the owner calls once per resolution
//! step.

pub mod guard;

use std::collections::VecDeque;
use std::time::Duration;

use log::{debug, trace, warn};

use crate::constants::MAX_GUARD_TIMERS;
use crate::types::Seq;
use crate::utils::ms;

pub use guard::{Countdown, GuardSlot};

/// Timeouts used by the timer manager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSettings {
    pub resolution: Duration,
    pub connection: Duration,
    pub guard: Duration,
    pub ack: Duration,
}

impl Default for TimerSettings {
    fn default() -> Self {
        use crate::constants::*;
        Self {
            resolution: ms(DEFAULT_TIMER_RESOLUTION_MS),
            connection: ms(DEFAULT_CONNECTION_TIMEOUT_MS),
            guard: ms(DEFAULT_GUARD_TIMEOUT_MS),
            ack: ms(DEFAULT_ACK_TIMEOUT_MS),
        }
    }
}

/// Expiries observed during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimerEvents {
    pub connection: bool,
    /// Index of the earliest expired guard slot. Only one per tick.
    pub guard: Option<usize>,
    pub ack: bool,
}

impl TimerEvents {
    pub fn is_empty(&self) -> bool {
        !self.connection && self.guard.is_none() && !self.ack
    }
}

#[derive(Debug)]
pub struct TimerManager {
    settings: TimerSettings,
    connection: Countdown,
    connection_retries: u8,
    guards: VecDeque<GuardSlot>,
    guards_suspended: bool,
    ack: Countdown,
}

impl TimerManager {
    pub fn new(settings: TimerSettings) -> Self {
        Self {
            settings,
            connection: Countdown::default(),
            connection_retries: 0,
            guards: VecDeque::with_capacity(MAX_GUARD_TIMERS),
            guards_suspended: false,
            ack: Countdown::default(),
        }
    }

    pub fn settings(&self) -> &TimerSettings {
        &self.settings
    }

    pub fn resolution(&self) -> Duration {
        self.settings.resolution
    }

    // -- connection timer --

    pub fn start_connection_timer(&mut self) {
        self.connection.start(self.settings.connection);
    }

    pub fn stop_connection_timer(&mut self) {
        self.connection.stop();
    }

    pub fn connection_running(&self) -> bool {
        self.connection.is_running()
    }

    pub fn connection_retries(&self) -> u8 {
        self.connection_retries
    }

    /// Count one more Reset retransmission and return the new total.
    pub fn note_connection_retry(&mut self) -> u8 {
        self.connection_retries = self.connection_retries.saturating_add(1);
        self.connection_retries
    }

    pub fn reset_connection_retries(&mut self) {
        self.connection_retries = 0;
    }

    // -- guard timers --

    /// Register a guard slot for a newly outstanding frame.
    /// Returns false when all slots are taken.
    pub fn start_guard_timer(&mut self, seq: Seq) -> bool {
        if self.guards.len() >= MAX_GUARD_TIMERS {
            warn!("no free guard timer slot for N(S)={}", seq);
            return false;
        }
        self.guards
            .push_back(GuardSlot::new(seq, self.settings.guard));
        true
    }

    /// Remove the `n` oldest guard slots. The remaining slots keep their
    /// countdowns and move to the front.
    pub fn stop_guards(&mut self, n: usize) -> usize {
        let n = n.min(self.guards.len());
        self.guards.drain(..n);
        n
    }

    /// Drop the newest slot; pairs with `SendWindow::pop_newest` and
    /// `SendWindow::shed_excess`.
    pub fn cancel_newest_guard(&mut self) {
        self.guards.pop_back();
    }

    /// Re-arm the slot at `idx` after its frame was retransmitted.
    pub fn restart_guard(&mut self, idx: usize) {
        let timeout = self.settings.guard;
        if let Some(slot) = self.guards.get_mut(idx) {
            slot.restart(timeout);
        }
    }

    pub fn guard_count(&self) -> usize {
        self.guards.len()
    }

    pub fn guard(&self, idx: usize) -> Option<&GuardSlot> {
        self.guards.get(idx)
    }

    pub fn suspend_guards(&mut self) {
        if !self.guards_suspended {
            debug!("guard timers suspended");
        }
        self.guards_suspended = true;
    }

    pub fn resume_guards(&mut self) {
        if self.guards_suspended {
            debug!("guard timers resumed");
        }
        self.guards_suspended = false;
    }

    pub fn guards_suspended(&self) -> bool {
        self.guards_suspended
    }

    /// Renumber every slot from `first` upwards and restart its countdown.
    pub fn renumber_guards(&mut self, first: Seq) {
        let timeout = self.settings.guard;
        for (i, slot) in self.guards.iter_mut().enumerate() {
            slot.seq = first.add(i);
            slot.restart(timeout);
        }
    }

    // -- ack timer --

    /// Arm the ack-coalescing timer unless it already runs.
    pub fn start_ack_timer(&mut self) {
        if !self.ack.is_running() {
            self.ack.start(self.settings.ack);
        }
    }

    pub fn stop_ack_timer(&mut self) {
        self.ack.stop();
    }

    pub fn ack_running(&self) -> bool {
        self.ack.is_running()
    }

    pub fn stop_all(&mut self) {
        self.connection.stop();
        self.guards.clear();
        self.guards_suspended = false;
        self.ack.stop();
    }

    /// Advance every running countdown by one resolution step.
    pub fn tick(&mut self) -> TimerEvents {
        let step = self.settings.resolution;
        let mut events = TimerEvents {
            connection: self.connection.advance(step),
            ack: self.ack.advance(step),
            ..TimerEvents::default()
        };
        if !self.guards_suspended {
            for slot in self.guards.iter_mut() {
                slot.advance(step);
            }
            events.guard = self.guards.iter().position(|g| g.is_expired());
        }
        if !events.is_empty() {
            trace!("timer expiry: {:?}", events);
        }
        events
    }
}

impl Default for TimerManager {
    fn default() -> Self {
        Self::new(TimerSettings::default())
    }
}
