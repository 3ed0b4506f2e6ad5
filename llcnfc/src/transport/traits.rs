// llcnfc-rs/llcnfc/src/transport/traits.rs

use crate::Result;
use crate::types::IoToken;

/// Completion-based byte transport underneath the link engine.
///
/// `read` and `write` only start an operation; `Ok(())` means it is
/// pending. The owner of the session later reports the outcome through
/// `LinkSession::on_read_complete` / `on_write_complete`, passing back the
/// same `token`.
pub trait Transport: Send {
    /// Bring the channel up. Called once, before the first Reset.
    fn init(&mut self) -> Result<()>;

    /// Start reading exactly `len` bytes.
    fn read(&mut self, token: IoToken, len: usize) -> Result<()>;

    /// Start writing `data`.
    fn write(&mut self, token: IoToken, data: &[u8]) -> Result<()>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn init(&mut self) -> Result<()> {
        (**self).init()
    }

    fn read(&mut self, token: IoToken, len: usize) -> Result<()> {
        (**self).read(token, len)
    }

    fn write(&mut self, token: IoToken, data: &[u8]) -> Result<()> {
        (**self).write(token, data)
    }
}
