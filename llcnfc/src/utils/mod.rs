// llcnfc-rs/llcnfc/src/utils/mod.rs

//! Small helpers shared across the crate: hex dumps and timeout math.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
