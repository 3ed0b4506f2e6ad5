// llcnfc-rs/llcnfc/src/runtime/handle.rs

use tokio::sync::{mpsc, oneshot};

use crate::types::{LinkState, SendStatus};
use crate::{Error, Result};

/// Requests from a `LinkHandle` to the driver task
#[derive(Debug)]
pub(crate) enum Command {
    Connect(oneshot::Sender<Result<()>>),
    Send(Vec<u8>, oneshot::Sender<Result<SendStatus>>),
    Disconnect(oneshot::Sender<()>),
    State(oneshot::Sender<LinkState>),
    Shutdown,
}

/// Cloneable async handle to a running link.
#[derive(Debug, Clone)]
pub struct LinkHandle {
    commands: mpsc::Sender<Command>,
}

impl LinkHandle {
    pub(crate) fn new(commands: mpsc::Sender<Command>) -> Self {
        Self { commands }
    }

    async fn request<T>(&self, build: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (tx, rx) = oneshot::channel();
        self.commands
            .send(build(tx))
            .await
            .map_err(|_| Error::RuntimeClosed)?;
        rx.await.map_err(|_| Error::RuntimeClosed)
    }

    /// Start the Reset handshake. Completion arrives as
    /// `LinkEvent::InitCompleted` / `InitFailed`.
    pub async fn connect(&self) -> Result<()> {
        self.request(Command::Connect).await?
    }

    pub async fn send(&self, data: impl Into<Vec<u8>>) -> Result<SendStatus> {
        let data = data.into();
        self.request(|tx| Command::Send(data, tx)).await?
    }

    pub async fn disconnect(&self) -> Result<()> {
        self.request(Command::Disconnect).await
    }

    pub async fn state(&self) -> Result<LinkState> {
        self.request(Command::State).await
    }

    /// Stop the driver task. The link is torn down without notification.
    pub async fn shutdown(&self) -> Result<()> {
        self.commands
            .send(Command::Shutdown)
            .await
            .map_err(|_| Error::RuntimeClosed)
    }

    pub fn is_closed(&self) -> bool {
        self.commands.is_closed()
    }
}
