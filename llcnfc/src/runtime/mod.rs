// llcnfc-rs/llcnfc/src/runtime/mod.rs

//! Tokio runtime for a link session.
//!
//! One task owns the `LinkSession`. Transport completions, interval ticks and
//! handle commands all reach it through channels drained by a single
//! `select!` loop, so the session never needs a lock.

pub mod driver;
pub mod handle;
pub mod transport;

pub use driver::{ChannelClient, spawn_link};
pub use handle::LinkHandle;
pub use transport::{AsyncTransport, SpawnedTransport};
