// llcnfc-rs/llcnfc/src/protocol/codec.rs

use crate::constants::{MAX_LENGTH_BYTE, MIN_LENGTH_BYTE};
use crate::{Error, Result};

/// Validate a received length byte and return how many bytes follow it.
pub fn classify_length_byte(b: u8) -> Result<usize> {
    if (MIN_LENGTH_BYTE..=MAX_LENGTH_BYTE).contains(&b) {
        Ok(b as usize)
    } else {
        Err(Error::BadLength {
            declared: b as usize,
            actual: 0,
        })
    }
}

/// Rebuild the whole wire frame from the length byte and the bytes read
/// after it.
pub fn assemble(len_byte: u8, body: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(1 + body.len());
    out.push(len_byte);
    out.extend_from_slice(body);
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ReadPhase {
    #[default]
    LengthByte,
    Body(u8),
}

/// Two-step read pump: one length byte, then the declared number of bytes.
#[derive(Debug, Default)]
pub struct FrameReader {
    phase: ReadPhase,
}

impl FrameReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bytes the next transport read should request.
    pub fn next_read_len(&self) -> usize {
        match self.phase {
            ReadPhase::LengthByte => 1,
            ReadPhase::Body(len) => len as usize,
        }
    }

    pub fn awaiting_length(&self) -> bool {
        self.phase == ReadPhase::LengthByte
    }

    pub fn reset(&mut self) {
        self.phase = ReadPhase::LengthByte;
    }

    /// Feed the result of a completed read.
    ///
    /// Returns `Ok(None)` after a valid length byte, `Ok(Some(frame))` once
    /// the body arrived. Any error puts the reader back to the length byte.
    pub fn feed(&mut self, bytes: &[u8]) -> Result<Option<Vec<u8>>> {
        match self.phase {
            ReadPhase::LengthByte => {
                let b = match bytes {
                    [b] => *b,
                    _ => {
                        return Err(Error::BadLength {
                            declared: 1,
                            actual: bytes.len(),
                        });
                    }
                };
                classify_length_byte(b)?;
                self.phase = ReadPhase::Body(b);
                Ok(None)
            }
            ReadPhase::Body(len) => {
                self.reset();
                if bytes.len() != len as usize {
                    return Err(Error::BadLength {
                        declared: len as usize,
                        actual: bytes.len(),
                    });
                }
                Ok(Some(assemble(len, bytes)))
            }
        }
    }
}
