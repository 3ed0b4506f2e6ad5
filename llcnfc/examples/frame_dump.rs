//! Decode LLC frames given as hex strings and print what they carry.
//!
//! Usage:
//!   cargo run -p llcnfc --example frame_dump -- 03e617a7 05800102afa4

use llcnfc::protocol::{ChecksumMode, Frame, classify_length_byte};
use llcnfc::{Result, utils};

fn dump(raw: &[u8]) {
    let Some(&len_byte) = raw.first() else {
        println!("  empty input");
        return;
    };
    println!("  {}", utils::frame_dump("rx", raw));
    match classify_length_byte(len_byte) {
        Ok(n) => println!("  length byte announces {} bytes", n),
        Err(e) => println!("  {}", e),
    }

    match Frame::decode(raw) {
        Ok(frame) => println!("  {} {:?}", frame.name(), frame),
        Err(e) if e.is_integrity() => {
            println!("  integrity error: {}", e);
            // show what the frame would mean without the CRC check
            if let Ok(frame) = Frame::decode_with(raw, ChecksumMode::Skip) {
                println!("  unchecked: {} {:?}", frame.name(), frame);
            }
        }
        Err(e) => println!("  error: {}", e),
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: frame_dump <hex frame>...");
        return Ok(());
    }
    for arg in args {
        println!("{}:", arg);
        match utils::parse_hex(&arg) {
            Ok(raw) => dump(&raw),
            Err(e) => println!("  not hex: {}", e),
        }
    }
    Ok(())
}
