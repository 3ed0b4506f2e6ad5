// llcnfc-rs/llcnfc/src/constants.rs
//! Wire and timing constants of the controller LLC link layer

/// Sequence numbers N(S)/N(R) are 3 bits wide.
pub const SEQ_MODULUS: u8 = 8;
pub const SEQ_MASK: u8 = 0x07;

/// Bit position of N(S) inside an I frame header. N(R) starts at bit 0.
pub const NS_SHIFT: u8 = 3;

/// Top three header bits select the frame class.
pub const HEADER_CLASS_MASK: u8 = 0xE0;
pub const U_FRAME_HEADER: u8 = 0xE0;
pub const S_FRAME_HEADER: u8 = 0xC0;

/// I frames only use the top two bits for the class.
pub const I_FRAME_HEADER_MASK: u8 = 0xC0;
pub const I_FRAME_HEADER: u8 = 0x80;

/// U frame modifier bits and the two modifiers the controller uses.
pub const U_MODIFIER_MASK: u8 = 0x1F;
pub const U_RSET: u8 = 0x19;
pub const U_UA: u8 = 0x06;

/// S frame type bits (4..3).
pub const S_TYPE_MASK: u8 = 0x18;
pub const S_RR: u8 = 0x00;
pub const S_REJ: u8 = 0x08;
pub const S_RNR: u8 = 0x10;
pub const S_SREJ: u8 = 0x18;

/// Number of trailing CRC bytes
pub const CRC_LEN: usize = 2;

/// CRC preset of ISO/IEC 13239
pub const CRC_PRESET: u16 = 0xFFFF;

/// Smallest legal length byte: header + CRC
pub const MIN_LENGTH_BYTE: u8 = 3;

/// Largest legal length byte. A whole frame never exceeds 33 bytes.
pub const MAX_LENGTH_BYTE: u8 = 32;

/// Maximum whole-frame size including the length byte
pub const MAX_FRAME_LEN: usize = MAX_LENGTH_BYTE as usize + 1;

/// Maximum Information Unit carried by one I frame
pub const MAX_INFO_PAYLOAD: usize = MAX_LENGTH_BYTE as usize - 1 - CRC_LEN;

/// Window size bounds advertised in RSET
pub const MIN_WINDOW_SIZE: u8 = 1;
pub const MAX_WINDOW_SIZE: u8 = 4;

/// Guard timers: one per outstanding I frame
pub const MAX_GUARD_TIMERS: usize = MAX_WINDOW_SIZE as usize;

/// RSET capability bit announcing SREJ support. This stack never sets it.
pub const CAP_SREJ: u8 = 0x01;

/// Default timer values in milliseconds
pub const DEFAULT_TIMER_RESOLUTION_MS: u64 = 50;
pub const DEFAULT_CONNECTION_TIMEOUT_MS: u64 = 1000;
pub const DEFAULT_GUARD_TIMEOUT_MS: u64 = 1000;
pub const DEFAULT_ACK_TIMEOUT_MS: u64 = 500;

/// Retry bounds
pub const DEFAULT_MAX_CONNECT_RETRIES: u8 = 3;
pub const DEFAULT_MAX_GUARD_RETRIES: u8 = 3;
pub const DEFAULT_MAX_RECV_ERRORS: u8 = 4;
