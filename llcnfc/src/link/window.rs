// llcnfc-rs/llcnfc/src/link/window.rs

use std::collections::VecDeque;

use crate::protocol::restamp_ns_nr;
use crate::types::{Seq, WindowSize};

/// An I frame sent but not yet acknowledged by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutstandingFrame {
    pub seq: Seq,
    /// Encoded frame as first built. N(R) is restamped on every resend.
    pub raw: Vec<u8>,
    pub payload_len: usize,
    pub retry_count: u8,
    /// The transport reported the write as done at least once.
    pub confirmed: bool,
}

impl OutstandingFrame {
    pub fn new(seq: Seq, raw: Vec<u8>, payload_len: usize) -> Self {
        Self {
            seq,
            raw,
            payload_len,
            retry_count: 0,
            confirmed: false,
        }
    }
}

/// Send-side sliding window, oldest frame first.
#[derive(Debug)]
pub struct SendWindow {
    frames: VecDeque<OutstandingFrame>,
    capacity: usize,
}

impl SendWindow {
    pub fn new(size: WindowSize) -> Self {
        Self {
            frames: VecDeque::with_capacity(WindowSize::MAX.as_usize()),
            capacity: size.as_usize(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Shrinking below the current length keeps existing entries until
    /// `shed_excess` drops them.
    pub fn set_capacity(&mut self, size: WindowSize) {
        self.capacity = size.as_usize();
    }

    /// Drop the newest entries that no longer fit the capacity.
    /// Returns them oldest first.
    pub fn shed_excess(&mut self) -> Vec<OutstandingFrame> {
        if self.frames.len() <= self.capacity {
            return Vec::new();
        }
        self.frames.split_off(self.capacity).into()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.frames.len() >= self.capacity
    }

    /// Sequence number of the oldest unacknowledged frame
    pub fn base(&self) -> Option<Seq> {
        self.frames.front().map(|f| f.seq)
    }

    /// Append a frame. Returns false when the window is full.
    pub fn push(&mut self, frame: OutstandingFrame) -> bool {
        if self.is_full() {
            return false;
        }
        self.frames.push_back(frame);
        true
    }

    /// Undo the last `push` (used when the transport refuses the write).
    pub fn pop_newest(&mut self) -> Option<OutstandingFrame> {
        self.frames.pop_back()
    }

    /// Free every frame with a sequence strictly before `nr`.
    ///
    /// Returns the number of frames freed. An `nr` equal to the base or one
    /// pointing beyond the newest frame frees nothing.
    pub fn acknowledge(&mut self, nr: Seq) -> usize {
        let base = match self.base() {
            Some(b) => b,
            None => return 0,
        };
        let k = base.distance_to(nr);
        if k == 0 || k > self.frames.len() {
            return 0;
        }
        self.frames.drain(..k);
        k
    }

    pub fn position(&self, seq: Seq) -> Option<usize> {
        self.frames.iter().position(|f| f.seq == seq)
    }

    pub fn get(&self, idx: usize) -> Option<&OutstandingFrame> {
        self.frames.get(idx)
    }

    pub fn get_mut(&mut self, idx: usize) -> Option<&mut OutstandingFrame> {
        self.frames.get_mut(idx)
    }

    pub fn find_mut(&mut self, seq: Seq) -> Option<&mut OutstandingFrame> {
        self.frames.iter_mut().find(|f| f.seq == seq)
    }

    pub fn iter(&self) -> impl Iterator<Item = &OutstandingFrame> {
        self.frames.iter()
    }

    pub fn seqs(&self) -> Vec<Seq> {
        self.frames.iter().map(|f| f.seq).collect()
    }

    /// Renumber every frame from `first` after a link reset; retry counts
    /// start over.
    pub fn renumber(&mut self, first: Seq) {
        for (i, frame) in self.frames.iter_mut().enumerate() {
            frame.seq = first.add(i);
            frame.raw = restamp_ns_nr(&frame.raw, frame.seq, Seq::ZERO);
            frame.retry_count = 0;
        }
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }
}
