// llcnfc-rs/llcnfc/src/protocol/parser.rs

use crate::constants::*;
use crate::protocol::frame::SupervisoryKind;
use crate::types::Seq;
use crate::{Error, Result};

/// Decoded header byte, before the body is looked at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Header {
    Information { ns: Seq, nr: Seq },
    Supervisory { kind: SupervisoryKind, nr: Seq },
    Unnumbered { modifier: u8 },
}

/// Split a header byte into its frame class and fields.
pub fn parse_header(header: u8) -> Result<Header> {
    if header & HEADER_CLASS_MASK == U_FRAME_HEADER {
        return Ok(Header::Unnumbered {
            modifier: header & U_MODIFIER_MASK,
        });
    }
    if header & HEADER_CLASS_MASK == S_FRAME_HEADER {
        let kind = match header & S_TYPE_MASK {
            S_RR => SupervisoryKind::ReceiveReady,
            S_REJ => SupervisoryKind::Reject,
            S_RNR => SupervisoryKind::ReceiveNotReady,
            // SREJ is never negotiated
            _ => return Err(Error::UnknownType(header)),
        };
        return Ok(Header::Supervisory {
            kind,
            nr: Seq::new(header),
        });
    }
    if header & I_FRAME_HEADER_MASK == I_FRAME_HEADER {
        return Ok(Header::Information {
            ns: Seq::new(header >> NS_SHIFT),
            nr: Seq::new(header),
        });
    }
    Err(Error::UnknownType(header))
}

pub fn information_header(ns: Seq, nr: Seq) -> u8 {
    I_FRAME_HEADER | (ns.value() << NS_SHIFT) | nr.value()
}

pub fn supervisory_header(kind: SupervisoryKind, nr: Seq) -> u8 {
    S_FRAME_HEADER | kind.type_bits() | nr.value()
}

pub fn unnumbered_header(modifier: u8) -> u8 {
    U_FRAME_HEADER | (modifier & U_MODIFIER_MASK)
}

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::BadLength {
            declared: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}
