// llcnfc-rs/llcnfc/src/test_support.rs

//! Test support helpers intended for use by unit and integration tests.
//!
//! `Harness` wires a `LinkSession` to a `SharedMock` transport and a
//! `RecordingClient`, and plays the controller side by completing reads
//! and writes on demand.
#![allow(dead_code)]

use std::sync::{Arc, Mutex, MutexGuard};

use crate::link::{LinkClient, LinkConfig, LinkEvent, LinkSession};
use crate::protocol::{Frame, ResetParams, classify_length_byte};
use crate::transport::SharedMock;
use crate::types::{IoToken, Seq};
use crate::{Error, Result};

/// Client that stores every event it receives.
#[doc(hidden)]
#[derive(Debug, Clone, Default)]
pub struct RecordingClient {
    events: Arc<Mutex<Vec<LinkEvent>>>,
}

impl RecordingClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> MutexGuard<'_, Vec<LinkEvent>> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn len(&self) -> usize {
        self.events().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events().is_empty()
    }

    pub fn init_completed(&self) -> usize {
        self.count(|e| matches!(e, LinkEvent::InitCompleted))
    }

    pub fn init_failed(&self) -> usize {
        self.count(|e| matches!(e, LinkEvent::InitFailed(_)))
    }

    pub fn device_errors(&self) -> usize {
        self.count(|e| matches!(e, LinkEvent::DeviceError(_)))
    }

    pub fn receive_failures(&self) -> usize {
        self.count(|e| matches!(e, LinkEvent::ReceiveFailed(_)))
    }

    /// Payloads delivered through `ReceiveCompleted`, in order.
    pub fn received(&self) -> Vec<Vec<u8>> {
        self.events()
            .iter()
            .filter_map(|e| match e {
                LinkEvent::ReceiveCompleted(data) => Some(data.clone()),
                _ => None,
            })
            .collect()
    }

    /// `Ok(len)` / `Err(message)` of every `SendCompleted`, in order.
    pub fn send_completions(&self) -> Vec<std::result::Result<usize, String>> {
        self.events()
            .iter()
            .filter_map(|e| match e {
                LinkEvent::SendCompleted(Ok(n)) => Some(Ok(*n)),
                LinkEvent::SendCompleted(Err(err)) => Some(Err(err.to_string())),
                _ => None,
            })
            .collect()
    }

    fn count(&self, pred: impl Fn(&LinkEvent) -> bool) -> usize {
        self.events().iter().filter(|e| pred(e)).count()
    }
}

impl LinkClient for RecordingClient {
    fn notify(&mut self, event: LinkEvent) {
        self.events().push(event);
    }
}

/// Session plus the controller-side handles driving it.
#[doc(hidden)]
pub struct Harness {
    pub session: LinkSession,
    pub mock: SharedMock,
    pub client: RecordingClient,
}

impl Harness {
    pub fn new(config: LinkConfig) -> Self {
        let mock = SharedMock::new();
        let client = RecordingClient::new();
        let session = LinkSession::new(config, Box::new(mock.clone()), Box::new(client.clone()));
        Self {
            session,
            mock,
            client,
        }
    }

    /// Harness whose link already finished the Reset handshake. The RSET
    /// write has completed and a length-byte read is pending.
    pub fn connected(config: LinkConfig) -> Self {
        let mut h = Self::new(config);
        h.connect();
        h
    }

    pub fn connect(&mut self) {
        self.session.connect().expect("connect");
        self.complete_write();
        self.deliver(&ua());
        self.flush_writes();
    }

    fn last_write_token(&self) -> IoToken {
        self.mock.lock().last_write().expect("no write issued").0
    }

    fn last_read(&self) -> (IoToken, usize) {
        *self.mock.lock().last_read().expect("no read issued")
    }

    pub fn write_count(&self) -> usize {
        self.mock.lock().writes.len()
    }

    /// Complete the newest write successfully with its full length.
    pub fn complete_write(&mut self) {
        let (token, len) = {
            let mock = self.mock.lock();
            let (token, data) = mock.last_write().expect("no write issued");
            (*token, data.len())
        };
        self.session.on_write_complete(token, Ok(len));
    }

    pub fn fail_write(&mut self, err: Error) {
        let token = self.last_write_token();
        self.session.on_write_complete(token, Err(err));
    }

    /// Complete writes (including deferred ones) until none is pending.
    pub fn flush_writes(&mut self) {
        for _ in 0..16 {
            if !self.session.pending_write() {
                return;
            }
            self.complete_write();
        }
    }

    /// Complete the pending read with `bytes`.
    pub fn complete_read(&mut self, bytes: &[u8]) {
        let (token, _) = self.last_read();
        self.session.on_read_complete(token, Ok(bytes.to_vec()));
    }

    pub fn fail_read(&mut self, err: Error) {
        let (token, _) = self.last_read();
        self.session.on_read_complete(token, Err(err));
    }

    /// Feed one encoded frame through the two-step read pump.
    pub fn deliver(&mut self, raw: &[u8]) {
        self.complete_read(&raw[..1]);
        if classify_length_byte(raw[0]).is_ok() && self.session.pending_read() && raw.len() > 1 {
            self.complete_read(&raw[1..]);
        }
    }

    pub fn deliver_frame(&mut self, frame: &Frame) {
        let raw = frame.encode().expect("encode");
        self.deliver(&raw);
    }

    /// Length requested by the pending read.
    pub fn pending_read_len(&self) -> usize {
        self.last_read().1
    }

    pub fn last_written_raw(&self) -> Vec<u8> {
        self.mock.lock().last_write().expect("no write issued").1.clone()
    }

    pub fn last_written(&self) -> Frame {
        Frame::decode(&self.last_written_raw()).expect("written frame decodes")
    }

    /// Every frame written so far, decoded.
    pub fn written(&self) -> Vec<Frame> {
        self.mock
            .lock()
            .written_frames()
            .iter()
            .map(|raw| Frame::decode(raw).expect("written frame decodes"))
            .collect()
    }

    pub fn ticks(&mut self, n: usize) {
        for _ in 0..n {
            self.session.tick();
        }
    }

    /// Send and complete the write, returning the N(S) used.
    pub fn send_and_complete(&mut self, data: &[u8]) -> Result<Seq> {
        let seq = self.session.send_sequence();
        self.session.send(data)?;
        self.complete_write();
        Ok(seq)
    }
}

/// Encoded UA frame
pub fn ua() -> Vec<u8> {
    Frame::ua().encode().unwrap_or_default()
}

/// Encoded RR frame with the given N(R)
pub fn rr(nr: u8) -> Vec<u8> {
    Frame::rr(Seq::new(nr)).encode().unwrap_or_default()
}

/// Encoded REJ frame with the given N(R)
pub fn rej(nr: u8) -> Vec<u8> {
    Frame::rej(Seq::new(nr)).encode().unwrap_or_default()
}

/// Encoded RSET frame with default parameters
pub fn rset() -> Vec<u8> {
    Frame::reset(ResetParams::default())
        .encode()
        .unwrap_or_default()
}

/// Encoded I frame
pub fn info(ns: u8, nr: u8, payload: &[u8]) -> Vec<u8> {
    Frame::Information {
        ns: Seq::new(ns),
        nr: Seq::new(nr),
        payload: payload.to_vec(),
    }
    .encode()
    .unwrap_or_default()
}
