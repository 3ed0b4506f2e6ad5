// llcnfc-rs/llcnfc/src/lib.rs

//! llcnfc
//!
//! Link-layer (LLC) engine for NFC controllers: framed I/S/U frames with
//! CRC-16, a sliding send window of up to four frames, guard/ack/connection
//! timers and bounded retry, driven by transport completions.

pub mod constants;
pub mod error;
pub mod link;
pub mod prelude;
pub mod protocol;
#[cfg(feature = "async")]
pub mod runtime;
pub mod test_support;
pub mod timer;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`
// and the newtypes in `types` are available everywhere.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
