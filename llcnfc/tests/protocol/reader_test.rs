use llcnfc::protocol::{Frame, FrameReader};
use llcnfc::{Error, Seq};

#[test]
fn reader_reassembles_frame() -> anyhow::Result<()> {
    let raw = Frame::rr(Seq::new(5)).encode()?;
    let mut reader = FrameReader::new();
    assert_eq!(reader.next_read_len(), 1);
    assert_eq!(reader.feed(&raw[..1])?, None);
    assert_eq!(reader.next_read_len(), raw.len() - 1);
    assert_eq!(reader.feed(&raw[1..])?, Some(raw.clone()));
    assert!(reader.awaiting_length());
    Ok(())
}

#[test]
fn reader_rejects_out_of_range_length() {
    for b in [0x00, 0x02, 0x21, 0xFF] {
        let mut reader = FrameReader::new();
        match reader.feed(&[b]) {
            Err(Error::BadLength { declared, .. }) => assert_eq!(declared, b as usize),
            other => panic!("length {:#04x}: expected BadLength, got {:?}", b, other),
        }
        assert_eq!(reader.next_read_len(), 1);
    }
}
