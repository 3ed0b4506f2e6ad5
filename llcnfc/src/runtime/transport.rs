// llcnfc-rs/llcnfc/src/runtime/transport.rs

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use tokio::sync::mpsc;

use crate::Result;
use crate::transport::Transport;
use crate::types::IoToken;

/// Async byte channel to the controller (I2C/SPI/UART driver).
#[async_trait]
pub trait AsyncTransport: Send + Sync + 'static {
    /// Bring the channel up.
    async fn init(&self) -> Result<()>;

    /// Read exactly `len` bytes.
    async fn read(&self, len: usize) -> Result<Vec<u8>>;

    /// Write `data`, returning the number of bytes written.
    async fn write(&self, data: &[u8]) -> Result<usize>;
}

/// Outcome of one spawned transport operation
#[derive(Debug)]
pub enum IoCompletion {
    Read(IoToken, Result<Vec<u8>>),
    Write(IoToken, Result<usize>),
}

/// Adapts an `AsyncTransport` to the completion-based `Transport` the
/// session expects: every operation runs on its own task and posts its
/// completion back to the driver.
pub struct SpawnedTransport<T: AsyncTransport> {
    inner: Arc<T>,
    completions: mpsc::UnboundedSender<IoCompletion>,
}

impl<T: AsyncTransport> SpawnedTransport<T> {
    pub fn new(inner: Arc<T>, completions: mpsc::UnboundedSender<IoCompletion>) -> Self {
        Self { inner, completions }
    }
}

impl<T: AsyncTransport> Transport for SpawnedTransport<T> {
    /// The driver awaits `AsyncTransport::init` itself before the first
    /// connect, so nothing is left to do here.
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    fn read(&mut self, token: IoToken, len: usize) -> Result<()> {
        let inner = self.inner.clone();
        let tx = self.completions.clone();
        tokio::spawn(async move {
            let res = inner.read(len).await;
            if tx.send(IoCompletion::Read(token, res)).is_err() {
                debug!("driver gone, dropping read completion {}", token);
            }
        });
        Ok(())
    }

    fn write(&mut self, token: IoToken, data: &[u8]) -> Result<()> {
        let inner = self.inner.clone();
        let tx = self.completions.clone();
        let data = data.to_vec();
        tokio::spawn(async move {
            let res = inner.write(&data).await;
            if tx.send(IoCompletion::Write(token, res)).is_err() {
                debug!("driver gone, dropping write completion {}", token);
            }
        });
        Ok(())
    }
}
