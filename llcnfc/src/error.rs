// llcnfc-rs/llcnfc/src/error.rs

use thiserror::Error;

use crate::types::{LinkState, Seq};

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// Declared length byte disagrees with the bytes received, or lies
    /// outside the range a controller frame can have.
    #[error("bad frame length: declared {declared}, received {actual}")]
    BadLength { declared: usize, actual: usize },

    #[error("checksum mismatch: expected {expected:#06x}, got {actual:#06x}")]
    BadChecksum { expected: u16, actual: u16 },

    #[error("unknown frame type: header {0:#04x}")]
    UnknownType(u8),

    #[error("malformed {kind} frame: {reason}")]
    MalformedFrame { kind: &'static str, reason: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("a write is already pending")]
    WritePending,

    #[error("a frame body read from the previous link is still pending")]
    ReadPending,

    #[error("link is not connected (state {0})")]
    NotConnected(LinkState),

    #[error("operation not allowed in state {0}")]
    InvalidState(LinkState),

    #[error("payload too large: max {max}, got {actual}")]
    PayloadTooLarge { max: usize, actual: usize },

    #[error("empty payload")]
    EmptyPayload,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("connection handshake timed out after {retries} retries")]
    ConnectTimeout { retries: u8 },

    /// The controller stopped answering: retry budget exhausted.
    #[error("device communication error: {0}")]
    DeviceCommunication(String),

    /// An outstanding frame no longer fits the window the controller
    /// announced in its RSET.
    #[error("frame N(S)={seq} discarded: controller window reduced to {window}")]
    FrameDiscarded { seq: Seq, window: u8 },

    #[error("link runtime has shut down")]
    RuntimeClosed,
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Integrity errors are recovered locally (reject / re-read) up to the
    /// configured bound.
    pub fn is_integrity(&self) -> bool {
        matches!(
            self,
            Error::BadLength { .. } | Error::BadChecksum { .. } | Error::UnknownType(_)
        )
    }
}
