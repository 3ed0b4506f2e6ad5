// llcnfc-rs/llcnfc/src/prelude.rs

pub use crate::link::{
    LinkClient, LinkConfig, LinkConfigBuilder, LinkEvent, LinkSession, LinkSessionBuilder,
    RecoveryPolicy,
};
pub use crate::protocol::{ChecksumMode, Frame, ResetParams, SupervisoryKind};
#[cfg(feature = "async")]
pub use crate::runtime::{AsyncTransport, LinkHandle, spawn_link};
pub use crate::transport::Transport;
pub use crate::{
    BaudRate, Error, IoDirection, IoToken, LinkState, Result, SendStatus, Seq, WindowSize,
};

pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, ms, parse_hex};
