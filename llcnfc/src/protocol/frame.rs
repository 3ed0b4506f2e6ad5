// llcnfc-rs/llcnfc/src/protocol/frame.rs

use crate::constants::*;
use crate::protocol::checksum::{crc_bytes, crc16, trailer};
use crate::protocol::parser::{
    Header, byte_at, information_header, parse_header, supervisory_header, unnumbered_header,
};
use crate::types::{BaudRate, Seq, WindowSize};
use crate::{Error, Result};

/// Supervisory frame types understood by this stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupervisoryKind {
    ReceiveReady,
    Reject,
    ReceiveNotReady,
}

impl SupervisoryKind {
    pub fn type_bits(&self) -> u8 {
        match self {
            SupervisoryKind::ReceiveReady => S_RR,
            SupervisoryKind::Reject => S_REJ,
            SupervisoryKind::ReceiveNotReady => S_RNR,
        }
    }
}

/// Parameters carried by an RSET frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetParams {
    pub window_size: WindowSize,
    pub capabilities: u8,
    pub baud_rate: Option<BaudRate>,
}

impl Default for ResetParams {
    fn default() -> Self {
        Self {
            window_size: WindowSize::MAX,
            capabilities: 0,
            baud_rate: None,
        }
    }
}

impl ResetParams {
    pub fn supports_srej(&self) -> bool {
        self.capabilities & CAP_SREJ != 0
    }

    fn parse(body: &[u8]) -> Result<Self> {
        if !(2..=3).contains(&body.len()) {
            return Err(Error::MalformedFrame {
                kind: "RSET",
                reason: format!("expected 2 or 3 parameter bytes, got {}", body.len()),
            });
        }
        let window_size =
            WindowSize::try_from(byte_at(body, 0)?).map_err(|e| Error::MalformedFrame {
                kind: "RSET",
                reason: e.to_string(),
            })?;
        let capabilities = byte_at(body, 1)?;
        let baud_rate = match body.get(2) {
            None => None,
            Some(&code) => Some(BaudRate::from_code(code).ok_or_else(|| {
                Error::MalformedFrame {
                    kind: "RSET",
                    reason: format!("unknown baud rate code {:#04x}", code),
                }
            })?),
        };
        Ok(Self {
            window_size,
            capabilities,
            baud_rate,
        })
    }
}

/// Unnumbered subtypes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unnumbered {
    Reset(ResetParams),
    Ack,
}

/// Whether `decode_with` verifies the trailing CRC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChecksumMode {
    #[default]
    Verify,
    Skip,
}

/// LLC frame.
///
/// Wire format: `[len] [header] [payload..] [crc lo] [crc hi]` where `len`
/// counts every byte after itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Unnumbered(Unnumbered),
    Information { ns: Seq, nr: Seq, payload: Vec<u8> },
    Supervisory { kind: SupervisoryKind, nr: Seq },
}

impl Frame {
    pub fn reset(params: ResetParams) -> Self {
        Frame::Unnumbered(Unnumbered::Reset(params))
    }

    pub fn ua() -> Self {
        Frame::Unnumbered(Unnumbered::Ack)
    }

    pub fn rr(nr: Seq) -> Self {
        Frame::Supervisory {
            kind: SupervisoryKind::ReceiveReady,
            nr,
        }
    }

    pub fn rej(nr: Seq) -> Self {
        Frame::Supervisory {
            kind: SupervisoryKind::Reject,
            nr,
        }
    }

    /// Short name used in log lines
    pub fn name(&self) -> &'static str {
        match self {
            Frame::Unnumbered(Unnumbered::Reset(_)) => "RSET",
            Frame::Unnumbered(Unnumbered::Ack) => "UA",
            Frame::Information { .. } => "I",
            Frame::Supervisory { kind, .. } => match kind {
                SupervisoryKind::ReceiveReady => "RR",
                SupervisoryKind::Reject => "REJ",
                SupervisoryKind::ReceiveNotReady => "RNR",
            },
        }
    }

    /// Encode into a full wire frame with length prefix and CRC.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let (header, body): (u8, Vec<u8>) = match self {
            Frame::Unnumbered(Unnumbered::Reset(params)) => {
                let mut body = vec![params.window_size.get(), params.capabilities];
                if let Some(baud) = params.baud_rate {
                    body.push(baud.code());
                }
                (unnumbered_header(U_RSET), body)
            }
            Frame::Unnumbered(Unnumbered::Ack) => (unnumbered_header(U_UA), Vec::new()),
            Frame::Information { ns, nr, payload } => {
                if payload.len() > MAX_INFO_PAYLOAD {
                    return Err(Error::PayloadTooLarge {
                        max: MAX_INFO_PAYLOAD,
                        actual: payload.len(),
                    });
                }
                (information_header(*ns, *nr), payload.clone())
            }
            Frame::Supervisory { kind, nr } => (supervisory_header(*kind, *nr), Vec::new()),
        };

        let len = 1 + body.len() + CRC_LEN;
        let mut out = Vec::with_capacity(1 + len);
        out.push(len as u8);
        out.push(header);
        out.extend_from_slice(&body);
        let crc = crc_bytes(&out);
        out.extend_from_slice(&crc);
        Ok(out)
    }

    /// Decode a full wire frame, verifying its CRC.
    pub fn decode(frame: &[u8]) -> Result<Frame> {
        Self::decode_with(frame, ChecksumMode::Verify)
    }

    /// Decode a full wire frame. The length byte is always checked against
    /// the received byte count before anything else.
    pub fn decode_with(frame: &[u8], mode: ChecksumMode) -> Result<Frame> {
        let declared = match frame.first() {
            Some(&b) => b,
            None => {
                return Err(Error::BadLength {
                    declared: 0,
                    actual: 0,
                });
            }
        };
        let actual = frame.len() - 1;
        if !(MIN_LENGTH_BYTE..=MAX_LENGTH_BYTE).contains(&declared) || declared as usize != actual
        {
            return Err(Error::BadLength {
                declared: declared as usize,
                actual,
            });
        }

        let crc_start = frame.len() - CRC_LEN;
        if mode == ChecksumMode::Verify {
            let expected = crc16(&frame[..crc_start]);
            let received = trailer(frame).unwrap_or_default();
            if expected != received {
                return Err(Error::BadChecksum {
                    expected,
                    actual: received,
                });
            }
        }

        let body = &frame[2..crc_start];
        match parse_header(frame[1])? {
            Header::Information { ns, nr } => Ok(Frame::Information {
                ns,
                nr,
                payload: body.to_vec(),
            }),
            Header::Supervisory { kind, nr } => {
                if !body.is_empty() {
                    return Err(Error::MalformedFrame {
                        kind: "S",
                        reason: format!("unexpected {} byte payload", body.len()),
                    });
                }
                Ok(Frame::Supervisory { kind, nr })
            }
            Header::Unnumbered { modifier: U_RSET } => {
                Ok(Frame::reset(ResetParams::parse(body)?))
            }
            Header::Unnumbered { modifier: U_UA } => {
                if !body.is_empty() {
                    return Err(Error::MalformedFrame {
                        kind: "UA",
                        reason: format!("unexpected {} byte payload", body.len()),
                    });
                }
                Ok(Frame::ua())
            }
            Header::Unnumbered { .. } => Err(Error::UnknownType(frame[1])),
        }
    }
}

/// Rewrite N(R) of an encoded I frame and refresh its CRC.
///
/// Frames that are not I frames are returned unchanged.
pub fn restamp_nr(raw: &[u8], nr: Seq) -> Vec<u8> {
    let mut out = raw.to_vec();
    if out.len() < 1 + MIN_LENGTH_BYTE as usize || out[1] & I_FRAME_HEADER_MASK != I_FRAME_HEADER
    {
        return out;
    }
    out[1] = (out[1] & !SEQ_MASK) | nr.value();
    let crc_start = out.len() - CRC_LEN;
    let crc = crc_bytes(&out[..crc_start]);
    out[crc_start..].copy_from_slice(&crc);
    out
}

/// Rewrite N(S) and N(R) of an encoded I frame; used after a link reset
/// renumbers the outstanding frames.
pub fn restamp_ns_nr(raw: &[u8], ns: Seq, nr: Seq) -> Vec<u8> {
    let mut out = raw.to_vec();
    if out.len() < 1 + MIN_LENGTH_BYTE as usize || out[1] & I_FRAME_HEADER_MASK != I_FRAME_HEADER
    {
        return out;
    }
    out[1] = information_header(ns, nr);
    let crc_start = out.len() - CRC_LEN;
    let crc = crc_bytes(&out[..crc_start]);
    out[crc_start..].copy_from_slice(&crc);
    out
}
