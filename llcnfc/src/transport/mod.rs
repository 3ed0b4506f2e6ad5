// llcnfc-rs/llcnfc/src/transport/mod.rs

pub mod mock;
pub mod traits;

pub use mock::{MockTransport, SharedMock};
pub use traits::Transport;
