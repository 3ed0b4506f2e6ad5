// llcnfc-rs/llcnfc/src/types.rs

use crate::Error;
use crate::constants::{MAX_WINDOW_SIZE, MIN_WINDOW_SIZE, SEQ_MASK, SEQ_MODULUS};
use derive_more::Display;
use std::convert::TryFrom;

/// N(S) / N(R) - 3 ビットのシーケンス番号 (mod 8)
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Seq(u8);

impl Seq {
    pub const ZERO: Self = Self(0);

    /// Build a sequence number, keeping only the low three bits.
    pub const fn new(value: u8) -> Self {
        Self(value & SEQ_MASK)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn next(&self) -> Self {
        Self::new(self.0.wrapping_add(1))
    }

    pub fn prev(&self) -> Self {
        Self::new(self.0.wrapping_add(SEQ_MODULUS - 1))
    }

    /// Advance by `n` modulo 8.
    pub fn add(&self, n: usize) -> Self {
        Self::new(self.0.wrapping_add((n % SEQ_MODULUS as usize) as u8))
    }

    /// Forward distance from `self` to `other` modulo 8.
    pub fn distance_to(&self, other: Seq) -> usize {
        (other.0.wrapping_sub(self.0) & SEQ_MASK) as usize
    }
}

/// Negotiated window size (RW), 1..=4
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct WindowSize(u8);

impl WindowSize {
    pub const MAX: Self = Self(MAX_WINDOW_SIZE);

    pub fn get(&self) -> u8 {
        self.0
    }

    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self::MAX
    }
}

impl From<WindowSize> for u8 {
    fn from(w: WindowSize) -> u8 {
        w.0
    }
}

impl TryFrom<u8> for WindowSize {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if !(MIN_WINDOW_SIZE..=MAX_WINDOW_SIZE).contains(&value) {
            return Err(Error::InvalidConfig(format!(
                "window size {} outside {}..={}",
                value, MIN_WINDOW_SIZE, MAX_WINDOW_SIZE
            )));
        }
        Ok(Self(value))
    }
}

/// Baud rate codes carried in the optional third RSET byte
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BaudRate {
    B9600 = 0x00,
    B19200 = 0x01,
    B38400 = 0x02,
    B57600 = 0x03,
    B115200 = 0x04,
    B230400 = 0x05,
    B460800 = 0x06,
    B921600 = 0x07,
    B1228000 = 0x08,
}

impl BaudRate {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0x00 => Some(Self::B9600),
            0x01 => Some(Self::B19200),
            0x02 => Some(Self::B38400),
            0x03 => Some(Self::B57600),
            0x04 => Some(Self::B115200),
            0x05 => Some(Self::B230400),
            0x06 => Some(Self::B460800),
            0x07 => Some(Self::B921600),
            0x08 => Some(Self::B1228000),
            _ => None,
        }
    }

    pub fn code(&self) -> u8 {
        *self as u8
    }
}

/// Link state as seen by the upper layer
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    #[display(fmt = "disconnected")]
    Disconnected,
    #[display(fmt = "connecting")]
    Connecting,
    #[display(fmt = "connected")]
    Connected,
    #[display(fmt = "resending")]
    Resending,
}

impl LinkState {
    /// Transition table of the link engine.
    pub fn can_transition_to(&self, to: LinkState) -> bool {
        use LinkState::*;
        match (*self, to) {
            (_, Disconnected) => true,
            (Disconnected, Connecting) => true,
            (Connecting, Connected) => true,
            (Connected, Connecting) | (Resending, Connecting) => true,
            (Connected, Resending) => true,
            (Resending, Connected) => true,
            _ => false,
        }
    }

    /// I/S frames are only exchanged in these states.
    pub fn is_up(&self) -> bool {
        matches!(self, LinkState::Connected | LinkState::Resending)
    }
}

/// Outcome of `send()`. Busy is flow control, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendStatus {
    Accepted,
    Busy,
}

/// Direction of a transport operation
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum IoDirection {
    #[display(fmt = "read")]
    Read,
    #[display(fmt = "write")]
    Write,
}

/// Tag handed to the transport with every operation and returned with its
/// completion. Completions whose generation is older than the session's are
/// stale and only clear the pending flag.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[display(fmt = "{}#{}", direction, generation)]
pub struct IoToken {
    pub generation: u32,
    pub direction: IoDirection,
}
