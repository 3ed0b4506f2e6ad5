// llcnfc-rs/llcnfc/src/runtime/driver.rs

use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::Result;
use crate::link::{LinkClient, LinkConfig, LinkEvent, LinkSession};
use crate::runtime::handle::{Command, LinkHandle};
use crate::runtime::transport::{AsyncTransport, IoCompletion, SpawnedTransport};
use crate::types::LinkState;

const COMMAND_QUEUE_DEPTH: usize = 32;

/// `LinkClient` that forwards every event into a channel.
#[derive(Debug, Clone)]
pub struct ChannelClient {
    events: mpsc::UnboundedSender<LinkEvent>,
}

impl ChannelClient {
    pub fn new(events: mpsc::UnboundedSender<LinkEvent>) -> Self {
        Self { events }
    }
}

impl LinkClient for ChannelClient {
    fn notify(&mut self, event: LinkEvent) {
        if let Err(e) = self.events.send(event) {
            debug!("event receiver dropped: {:?}", e.0);
        }
    }
}

/// Spawn the driver task for one link.
///
/// Must be called from within a tokio runtime. The task ends when every
/// `LinkHandle` is dropped or `shutdown()` is called.
pub fn spawn_link<T: AsyncTransport>(
    config: LinkConfig,
    transport: Arc<T>,
) -> Result<(
    LinkHandle,
    mpsc::UnboundedReceiver<LinkEvent>,
    JoinHandle<()>,
)> {
    config.validate()?;

    let (cmd_tx, cmd_rx) = mpsc::channel(COMMAND_QUEUE_DEPTH);
    let (io_tx, io_rx) = mpsc::unbounded_channel();
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    let session = LinkSession::new(
        config,
        Box::new(SpawnedTransport::new(transport.clone(), io_tx)),
        Box::new(ChannelClient::new(event_tx.clone())),
    );
    let driver = Driver {
        session,
        transport,
        transport_ready: false,
        events: event_tx,
    };
    let task = tokio::spawn(driver.run(cmd_rx, io_rx));
    Ok((LinkHandle::new(cmd_tx), event_rx, task))
}

struct Driver<T: AsyncTransport> {
    session: LinkSession,
    transport: Arc<T>,
    transport_ready: bool,
    events: mpsc::UnboundedSender<LinkEvent>,
}

impl<T: AsyncTransport> Driver<T> {
    async fn run(
        mut self,
        mut commands: mpsc::Receiver<Command>,
        mut io: mpsc::UnboundedReceiver<IoCompletion>,
    ) {
        let mut ticker = tokio::time::interval(self.session.timers().resolution());
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                cmd = commands.recv() => match cmd {
                    Some(Command::Shutdown) | None => break,
                    Some(cmd) => self.command(cmd).await,
                },
                Some(done) = io.recv() => match done {
                    IoCompletion::Read(token, res) => self.session.on_read_complete(token, res),
                    IoCompletion::Write(token, res) => self.session.on_write_complete(token, res),
                },
                _ = ticker.tick() => self.session.tick(),
            }
        }

        self.session.disconnect();
        info!("link driver stopped");
    }

    async fn command(&mut self, cmd: Command) {
        match cmd {
            Command::Connect(reply) => {
                let res = self.connect().await;
                let _ = reply.send(res);
            }
            Command::Send(data, reply) => {
                let _ = reply.send(self.session.send(&data));
            }
            Command::Disconnect(reply) => {
                self.session.disconnect();
                let _ = reply.send(());
            }
            Command::State(reply) => {
                let _ = reply.send(self.session.state());
            }
            Command::Shutdown => {}
        }
    }

    async fn connect(&mut self) -> Result<()> {
        if !self.transport_ready && self.session.state() == LinkState::Disconnected {
            if let Err(e) = self.transport.init().await {
                warn!("transport init failed: {}", e);
                let _ = self
                    .events
                    .send(LinkEvent::InitFailed(crate::Error::Transport(e.to_string())));
                return Err(e);
            }
            self.transport_ready = true;
        }
        self.session.connect()
    }
}
