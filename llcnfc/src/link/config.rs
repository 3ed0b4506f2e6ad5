// llcnfc-rs/llcnfc/src/link/config.rs

use crate::constants::*;
use crate::protocol::{ChecksumMode, ResetParams};
use crate::timer::TimerSettings;
use crate::types::{BaudRate, WindowSize};
use crate::utils::ms;
use crate::{Error, Result};

/// What the session does once a frame exhausted its guard retries or the
/// receive side hit the integrity-error bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecoveryPolicy {
    /// Tear the link down and report a device communication error.
    #[default]
    Fail,
    /// Run a fresh Reset handshake and retransmit what is still outstanding.
    Reset,
}

/// Link configuration. Build it with [`LinkConfig::builder`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkConfig {
    pub window_size: WindowSize,
    /// Largest payload accepted by `send()` (MIU)
    pub max_payload: usize,
    pub timer_resolution_ms: u64,
    pub connection_timeout_ms: u64,
    pub guard_timeout_ms: u64,
    pub ack_timeout_ms: u64,
    pub max_connect_retries: u8,
    pub max_guard_retries: u8,
    pub max_recv_errors: u8,
    pub verify_checksum: bool,
    pub reject_on_integrity_error: bool,
    pub piggyback_ack: bool,
    pub recovery: RecoveryPolicy,
    pub baud_rate: Option<BaudRate>,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            window_size: WindowSize::MAX,
            max_payload: MAX_INFO_PAYLOAD,
            timer_resolution_ms: DEFAULT_TIMER_RESOLUTION_MS,
            connection_timeout_ms: DEFAULT_CONNECTION_TIMEOUT_MS,
            guard_timeout_ms: DEFAULT_GUARD_TIMEOUT_MS,
            ack_timeout_ms: DEFAULT_ACK_TIMEOUT_MS,
            max_connect_retries: DEFAULT_MAX_CONNECT_RETRIES,
            max_guard_retries: DEFAULT_MAX_GUARD_RETRIES,
            max_recv_errors: DEFAULT_MAX_RECV_ERRORS,
            verify_checksum: true,
            reject_on_integrity_error: true,
            piggyback_ack: false,
            recovery: RecoveryPolicy::Fail,
            baud_rate: None,
        }
    }
}

impl LinkConfig {
    pub fn builder() -> LinkConfigBuilder {
        LinkConfigBuilder::new()
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_payload == 0 || self.max_payload > MAX_INFO_PAYLOAD {
            return Err(Error::InvalidConfig(format!(
                "max_payload {} outside 1..={}",
                self.max_payload, MAX_INFO_PAYLOAD
            )));
        }
        if self.timer_resolution_ms == 0 {
            return Err(Error::InvalidConfig(
                "timer resolution must be non-zero".into(),
            ));
        }
        for (name, value) in [
            ("connection", self.connection_timeout_ms),
            ("guard", self.guard_timeout_ms),
            ("ack", self.ack_timeout_ms),
        ] {
            if value < self.timer_resolution_ms {
                return Err(Error::InvalidConfig(format!(
                    "{} timeout {}ms shorter than timer resolution {}ms",
                    name, value, self.timer_resolution_ms
                )));
            }
        }
        if self.max_recv_errors == 0 {
            return Err(Error::InvalidConfig(
                "max_recv_errors must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn timer_settings(&self) -> TimerSettings {
        TimerSettings {
            resolution: ms(self.timer_resolution_ms),
            connection: ms(self.connection_timeout_ms),
            guard: ms(self.guard_timeout_ms),
            ack: ms(self.ack_timeout_ms),
        }
    }

    /// Parameters advertised in our RSET frame
    pub fn reset_params(&self) -> ResetParams {
        ResetParams {
            window_size: self.window_size,
            capabilities: 0,
            baud_rate: self.baud_rate,
        }
    }

    pub fn checksum_mode(&self) -> ChecksumMode {
        if self.verify_checksum {
            ChecksumMode::Verify
        } else {
            ChecksumMode::Skip
        }
    }
}

/// Builder for [`LinkConfig`]; `build()` validates the result.
#[derive(Debug, Default)]
pub struct LinkConfigBuilder {
    config: LinkConfig,
    window_size: Option<u8>,
}

impl LinkConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn window_size(mut self, window: u8) -> Self {
        self.window_size = Some(window);
        self
    }

    pub fn max_payload(mut self, max: usize) -> Self {
        self.config.max_payload = max;
        self
    }

    pub fn timer_resolution_ms(mut self, v: u64) -> Self {
        self.config.timer_resolution_ms = v;
        self
    }

    pub fn connection_timeout_ms(mut self, v: u64) -> Self {
        self.config.connection_timeout_ms = v;
        self
    }

    pub fn guard_timeout_ms(mut self, v: u64) -> Self {
        self.config.guard_timeout_ms = v;
        self
    }

    pub fn ack_timeout_ms(mut self, v: u64) -> Self {
        self.config.ack_timeout_ms = v;
        self
    }

    pub fn max_connect_retries(mut self, n: u8) -> Self {
        self.config.max_connect_retries = n;
        self
    }

    pub fn max_guard_retries(mut self, n: u8) -> Self {
        self.config.max_guard_retries = n;
        self
    }

    pub fn max_recv_errors(mut self, n: u8) -> Self {
        self.config.max_recv_errors = n;
        self
    }

    pub fn verify_checksum(mut self, on: bool) -> Self {
        self.config.verify_checksum = on;
        self
    }

    pub fn reject_on_integrity_error(mut self, on: bool) -> Self {
        self.config.reject_on_integrity_error = on;
        self
    }

    pub fn piggyback_ack(mut self, on: bool) -> Self {
        self.config.piggyback_ack = on;
        self
    }

    pub fn recovery(mut self, policy: RecoveryPolicy) -> Self {
        self.config.recovery = policy;
        self
    }

    pub fn baud_rate(mut self, baud: BaudRate) -> Self {
        self.config.baud_rate = Some(baud);
        self
    }

    pub fn build(self) -> Result<LinkConfig> {
        let mut config = self.config;
        if let Some(w) = self.window_size {
            config.window_size = WindowSize::try_from(w)?;
        }
        config.validate()?;
        Ok(config)
    }
}
