// llcnfc-rs/llcnfc/src/protocol/checksum.rs

use crate::constants::CRC_PRESET;

/// Compute the ISO/IEC 13239 CRC-16 used by the controller LLC.
/// Reflected polynomial 0x8408, preset 0xFFFF, final complement.
pub fn crc16(data: &[u8]) -> u16 {
    let crc = data.iter().fold(CRC_PRESET, |crc, &byte| {
        let mut b = byte ^ (crc & 0x00FF) as u8;
        b ^= b << 4;
        let b = b as u16;
        (crc >> 8) ^ (b << 8) ^ (b << 3) ^ (b >> 4)
    });
    !crc
}

/// CRC bytes in wire order (low byte first)
pub fn crc_bytes(data: &[u8]) -> [u8; 2] {
    crc16(data).to_le_bytes()
}

/// Read the trailing CRC of `frame` as transmitted.
pub fn trailer(frame: &[u8]) -> Option<u16> {
    match frame {
        [.., lo, hi] => Some(u16::from_le_bytes([*lo, *hi])),
        _ => None,
    }
}
