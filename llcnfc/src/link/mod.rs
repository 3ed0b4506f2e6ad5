// llcnfc-rs/llcnfc/src/link/mod.rs

pub mod builder;
pub mod client;
pub mod config;
pub mod session;
pub mod state;
pub mod window;

pub use builder::LinkSessionBuilder;
pub use client::{LinkClient, LinkEvent};
pub use config::{LinkConfig, LinkConfigBuilder, RecoveryPolicy};
pub use session::LinkSession;
pub use window::{OutstandingFrame, SendWindow};
