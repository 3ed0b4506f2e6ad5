#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{self, bytes};
use llcnfc::protocol::checksum::{crc16, crc_bytes, trailer};
use llcnfc::protocol::{ChecksumMode, Frame};
use llcnfc::Error;

#[test]
fn trailer_matches_computed_crc() {
    for fixture in [fixtures::UA, fixtures::RR_0, fixtures::RSET_W4, fixtures::I_0_0] {
        let raw = bytes(fixture);
        let body = &raw[..raw.len() - 2];
        assert_eq!(trailer(&raw), Some(crc16(body)), "fixture {}", fixture);
        assert_eq!(&raw[raw.len() - 2..], &crc_bytes(body));
    }
}

#[test]
fn corrupted_crc_is_reported() {
    let mut raw = bytes(fixtures::RR_0);
    raw[3] ^= 0x80;
    match Frame::decode(&raw) {
        Err(Error::BadChecksum { expected, actual }) => {
            assert_eq!(expected, 0xE323);
            assert_eq!(actual, 0x6323);
        }
        other => panic!("expected BadChecksum, got {:?}", other),
    }
}

#[test]
fn skip_mode_accepts_bad_crc() -> anyhow::Result<()> {
    let mut raw = bytes(fixtures::I_0_0);
    let last = raw.len() - 1;
    raw[last] = 0x00;
    assert!(Frame::decode(&raw).is_err());
    let frame = Frame::decode_with(&raw, ChecksumMode::Skip)?;
    assert_eq!(frame.name(), "I");
    Ok(())
}
