// llcnfc-rs/llcnfc/src/link/builder.rs

use crate::link::client::LinkClient;
use crate::link::config::LinkConfig;
use crate::link::session::LinkSession;
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to construct a LinkSession with optional configuration.
#[derive(Default)]
pub struct LinkSessionBuilder {
    config: Option<LinkConfig>,
    transport: Option<Box<dyn Transport>>,
    client: Option<Box<dyn LinkClient>>,
}

impl LinkSessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: LinkConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn client(mut self, client: Box<dyn LinkClient>) -> Self {
        self.client = Some(client);
        self
    }

    /// Consume the builder. Transport and client are required; the config
    /// defaults to `LinkConfig::default()` and is validated.
    pub fn build(self) -> Result<LinkSession> {
        let config = self.config.unwrap_or_default();
        config.validate()?;
        let transport = self
            .transport
            .ok_or_else(|| Error::InvalidConfig("no transport provided".into()))?;
        let client = self
            .client
            .ok_or_else(|| Error::InvalidConfig("no link client provided".into()))?;
        Ok(LinkSession::new(config, transport, client))
    }
}
