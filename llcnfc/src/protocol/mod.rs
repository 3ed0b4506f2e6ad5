// llcnfc-rs/llcnfc/src/protocol/mod.rs

pub mod checksum;
pub mod codec;
pub mod frame;
pub mod parser;

pub use checksum::{crc_bytes, crc16};
pub use codec::{FrameReader, classify_length_byte};
pub use frame::{
    ChecksumMode, Frame, ResetParams, SupervisoryKind, Unnumbered, restamp_nr, restamp_ns_nr,
};
