// llcnfc-rs/llcnfc/src/link/state.rs

use std::collections::VecDeque;

use log::{debug, warn};

use crate::constants::MAX_WINDOW_SIZE;
use crate::protocol::SupervisoryKind;
use crate::types::{LinkState, Seq};

/// What the single in-flight write carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InFlight {
    Reset,
    UnnumberedAck,
    /// `fresh` is set for the first transmission of a `send()`.
    Info { seq: Seq, fresh: bool, len: usize },
    Supervisory(SupervisoryKind),
    /// I frame dropped from the window while its write was in flight.
    Discarded,
}

/// A write that had to wait for the in-flight one to complete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingWrite {
    Resend(Seq),
    Ack,
    Reject,
    Reset,
    UnnumberedAck,
}

/// Holds at most one resend per window slot plus one of each control frame.
pub const DEFERRED_CAPACITY: usize = MAX_WINDOW_SIZE as usize + 4;

/// FIFO of deferred writes. Duplicates are collapsed on push.
#[derive(Debug, Default)]
pub struct DeferredWrites {
    queue: VecDeque<PendingWrite>,
}

impl DeferredWrites {
    pub fn push(&mut self, write: PendingWrite) {
        if self.queue.contains(&write) {
            return;
        }
        if self.queue.len() >= DEFERRED_CAPACITY {
            warn!("deferred write queue full, dropping {:?}", write);
            return;
        }
        debug!("deferring {:?}", write);
        self.queue.push_back(write);
    }

    pub fn pop(&mut self) -> Option<PendingWrite> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn contains(&self, write: PendingWrite) -> bool {
        self.queue.contains(&write)
    }

    pub fn has_resend(&self) -> bool {
        self.queue
            .iter()
            .any(|w| matches!(w, PendingWrite::Resend(_)))
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

/// Current link state guarded by the transition table.
#[derive(Debug)]
pub struct StateCell {
    state: LinkState,
}

impl StateCell {
    pub fn new() -> Self {
        Self {
            state: LinkState::Disconnected,
        }
    }

    pub fn get(&self) -> LinkState {
        self.state
    }

    /// Move to `to`. Transitions missing from the table are logged and
    /// refused.
    pub fn transition(&mut self, to: LinkState) -> bool {
        if self.state == to {
            return true;
        }
        if !self.state.can_transition_to(to) {
            warn!("refusing link state transition {} -> {}", self.state, to);
            return false;
        }
        debug!("link state {} -> {}", self.state, to);
        self.state = to;
        true
    }
}

impl Default for StateCell {
    fn default() -> Self {
        Self::new()
    }
}
