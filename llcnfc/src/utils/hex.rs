// llcnfc-rs/llcnfc/src/utils/hex.rs

//! Hex helpers for frame dumps and test fixtures.

use std::fmt::Write;

use crate::{Error, Result};

/// `&[0x03, 0xe6]` -> `"03e6"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut s, b| {
        let _ = write!(s, "{:02x}", b);
        s
    })
}

/// `&[0x03, 0xe6]` -> `"03 e6"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a hex string, ignoring whitespace, into bytes.
pub fn parse_hex(s: &str) -> Result<Vec<u8>> {
    let digits: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.len() % 2 != 0 {
        return Err(Error::InvalidConfig(format!(
            "hex string has odd length {}",
            digits.len()
        )));
    }
    digits
        .chunks(2)
        .map(|pair| {
            let pair: String = pair.iter().collect();
            u8::from_str_radix(&pair, 16)
                .map_err(|e| Error::InvalidConfig(format!("invalid hex pair '{}': {}", pair, e)))
        })
        .collect()
}

/// One-line frame dump used by the `diagnostics` feature.
pub fn frame_dump(direction: &str, bytes: &[u8]) -> String {
    format!("{} [{:2}] {}", direction, bytes.len(), bytes_to_hex_spaced(bytes))
}
