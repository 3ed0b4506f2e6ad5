// llcnfc-rs/llcnfc/src/link/session.rs

//! The link engine.
//!
//! `LinkSession` is completion driven: it starts transport operations and
//! the owner feeds their outcome back through `on_read_complete` /
//! `on_write_complete`. Timers advance only when the owner calls `tick()`
//! once per configured resolution. Nothing here blocks or spawns.

use log::{debug, error, info, trace, warn};

use crate::link::client::{LinkClient, LinkEvent};
use crate::link::config::{LinkConfig, RecoveryPolicy};
use crate::link::state::{DeferredWrites, InFlight, PendingWrite, StateCell};
use crate::link::window::{OutstandingFrame, SendWindow};
use crate::protocol::{Frame, FrameReader, ResetParams, SupervisoryKind, Unnumbered, restamp_nr};
use crate::timer::TimerManager;
use crate::transport::Transport;
use crate::types::{IoDirection, IoToken, LinkState, SendStatus, Seq, WindowSize};
use crate::{Error, Result};

pub struct LinkSession {
    config: LinkConfig,
    state: StateCell,
    transport: Box<dyn Transport>,
    client: Box<dyn LinkClient>,
    timers: TimerManager,
    window: SendWindow,
    reader: FrameReader,
    /// N(S) of the next new I frame
    send_sequence: Seq,
    /// V(R): next in-sequence N(S) expected from the controller
    ack_sequence: Seq,
    pending_read: bool,
    /// Length and generation of the read in progress
    read_len: usize,
    read_generation: u32,
    /// A length read left over from the previous link that now serves
    /// the current one
    adopted_read: Option<u32>,
    pending_write: bool,
    in_flight: Option<InFlight>,
    deferred: DeferredWrites,
    recv_error_count: u8,
    /// Received I frames not acknowledged yet
    unacked_rx: usize,
    remote_busy: bool,
    withheld_send_complete: Option<Result<usize>>,
    generation: u32,
    transport_ready: bool,
    /// InitCompleted was delivered for the current `connect()`
    initialized: bool,
    peer_params: Option<ResetParams>,
}

impl std::fmt::Debug for LinkSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinkSession")
            .field("state", &self.state.get())
            .field("send_sequence", &self.send_sequence)
            .field("ack_sequence", &self.ack_sequence)
            .field("outstanding", &self.window.seqs())
            .field("pending_read", &self.pending_read)
            .field("pending_write", &self.pending_write)
            .field("recv_error_count", &self.recv_error_count)
            .field("generation", &self.generation)
            .finish()
    }
}

impl LinkSession {
    pub fn new(
        config: LinkConfig,
        transport: Box<dyn Transport>,
        client: Box<dyn LinkClient>,
    ) -> Self {
        let timers = TimerManager::new(config.timer_settings());
        let window = SendWindow::new(config.window_size);
        Self {
            config,
            state: StateCell::new(),
            transport,
            client,
            timers,
            window,
            reader: FrameReader::new(),
            send_sequence: Seq::ZERO,
            ack_sequence: Seq::ZERO,
            pending_read: false,
            read_len: 0,
            read_generation: 0,
            adopted_read: None,
            pending_write: false,
            in_flight: None,
            deferred: DeferredWrites::default(),
            recv_error_count: 0,
            unacked_rx: 0,
            remote_busy: false,
            withheld_send_complete: None,
            generation: 0,
            transport_ready: false,
            initialized: false,
            peer_params: None,
        }
    }

    // -- accessors --

    pub fn state(&self) -> LinkState {
        self.state.get()
    }

    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    pub fn send_sequence(&self) -> Seq {
        self.send_sequence
    }

    pub fn ack_sequence(&self) -> Seq {
        self.ack_sequence
    }

    pub fn outstanding(&self) -> &SendWindow {
        &self.window
    }

    pub fn timers(&self) -> &TimerManager {
        &self.timers
    }

    pub fn pending_read(&self) -> bool {
        self.pending_read
    }

    pub fn pending_write(&self) -> bool {
        self.pending_write
    }

    pub fn deferred_len(&self) -> usize {
        self.deferred.len()
    }

    pub fn recv_error_count(&self) -> u8 {
        self.recv_error_count
    }

    pub fn remote_busy(&self) -> bool {
        self.remote_busy
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Parameters of the last RSET received from the controller
    pub fn peer_params(&self) -> Option<&ResetParams> {
        self.peer_params.as_ref()
    }

    // -- upper layer API --

    /// Start the Reset handshake.
    pub fn connect(&mut self) -> Result<()> {
        let state = self.state.get();
        if state != LinkState::Disconnected {
            return Err(Error::InvalidState(state));
        }
        if self.pending_write {
            return Err(Error::WritePending);
        }
        if self.pending_read {
            // A body read would swallow the start of the new byte stream.
            if self.read_len > 1 {
                return Err(Error::ReadPending);
            }
            debug!("adopting length read from generation {}", self.read_generation);
            self.adopted_read = Some(self.read_generation);
        }
        if !self.transport_ready {
            if let Err(e) = self.transport.init() {
                self.adopted_read = None;
                return Err(e);
            }
            self.transport_ready = true;
        }

        self.reset_sequences();
        self.window.set_capacity(self.config.window_size);
        self.timers.reset_connection_retries();
        self.initialized = false;
        self.state.transition(LinkState::Connecting);

        if let Err(e) = self.perform(PendingWrite::Reset) {
            self.state.transition(LinkState::Disconnected);
            self.adopted_read = None;
            return Err(e);
        }
        self.timers.start_connection_timer();
        self.ensure_read();
        Ok(())
    }

    /// Queue one payload as an I frame.
    pub fn send(&mut self, data: &[u8]) -> Result<SendStatus> {
        let state = self.state.get();
        if !state.is_up() {
            return Err(Error::NotConnected(state));
        }
        if data.is_empty() {
            return Err(Error::EmptyPayload);
        }
        if data.len() > self.config.max_payload {
            return Err(Error::PayloadTooLarge {
                max: self.config.max_payload,
                actual: data.len(),
            });
        }
        if self.pending_write || self.window.is_full() {
            return Ok(SendStatus::Busy);
        }

        let seq = self.send_sequence;
        let raw = Frame::Information {
            ns: seq,
            nr: self.ack_sequence,
            payload: data.to_vec(),
        }
        .encode()?;

        self.window
            .push(OutstandingFrame::new(seq, raw.clone(), data.len()));
        self.timers.start_guard_timer(seq);

        let in_flight = InFlight::Info {
            seq,
            fresh: true,
            len: data.len(),
        };
        if let Err(e) = self.write_raw(&raw, in_flight) {
            self.window.pop_newest();
            self.timers.cancel_newest_guard();
            return Err(e);
        }
        self.ack_piggybacked();
        debug!("tx I N(S)={} N(R)={} ({} bytes)", seq, self.ack_sequence, data.len());
        Ok(SendStatus::Accepted)
    }

    /// Tear the link down without notifying the client.
    pub fn disconnect(&mut self) {
        if self.state.get() == LinkState::Disconnected {
            return;
        }
        info!("link disconnected by owner");
        self.teardown();
    }

    // -- completions --

    pub fn on_write_complete(&mut self, token: IoToken, result: Result<usize>) {
        if token.direction != IoDirection::Write {
            warn!("write completion with {} token ignored", token);
            return;
        }
        self.pending_write = false;

        if token.generation != self.generation {
            debug!("stale write completion {}", token);
            self.resume_io();
            return;
        }

        match self.in_flight.take() {
            Some(InFlight::Info { seq, fresh, len }) => self.info_written(seq, fresh, len, result),
            Some(InFlight::UnnumberedAck) => match result {
                Ok(_) => self.link_established(),
                Err(e) => warn!("UA write failed: {}", e),
            },
            Some(InFlight::Reset) => {
                if let Err(e) = result {
                    warn!("RSET write failed: {}", e);
                }
            }
            Some(InFlight::Supervisory(kind)) => {
                if let Err(e) = result {
                    warn!("{:?} write failed: {}", kind, e);
                }
            }
            Some(InFlight::Discarded) => debug!("write of a discarded I frame completed"),
            None => debug!("write completion with nothing in flight"),
        }

        self.resume_io();
    }

    pub fn on_read_complete(&mut self, token: IoToken, result: Result<Vec<u8>>) {
        if token.direction != IoDirection::Read {
            warn!("read completion with {} token ignored", token);
            return;
        }
        self.pending_read = false;

        if token.generation != self.generation {
            if self.adopted_read != Some(token.generation) {
                debug!("stale read completion {}", token);
                self.resume_io();
                return;
            }
            self.adopted_read = None;
        }
        if self.state.get() == LinkState::Disconnected {
            return;
        }

        let bytes = match result {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("transport read failed: {}", e);
                self.reader.reset();
                self.client.notify(LinkEvent::ReceiveFailed(e));
                return;
            }
        };
        dump("rx", &bytes);

        let body_read = !self.reader.awaiting_length();
        match self.reader.feed(&bytes) {
            Ok(None) => {}
            Ok(Some(raw)) => self.process_frame(&raw),
            Err(e) => self.integrity_error(e, body_read),
        }
        self.ensure_read();
    }

    /// Advance the timers by one resolution step and act on expiries.
    pub fn tick(&mut self) {
        if self.state.get() == LinkState::Disconnected {
            return;
        }
        // re-arm after a failed read
        self.ensure_read();
        let events = self.timers.tick();

        if events.connection && self.state.get() == LinkState::Connecting {
            self.connection_timeout();
        }
        if let Some(idx) = events.guard {
            if self.state.get().is_up() {
                self.guard_timeout(idx);
            }
        }
        if events.ack && self.state.get().is_up() && self.unacked_rx > 0 {
            debug!("ack timer expired, sending RR");
            self.issue_or_defer(PendingWrite::Ack);
        }
    }

    // -- receive path --

    fn process_frame(&mut self, raw: &[u8]) {
        let frame = match Frame::decode_with(raw, self.config.checksum_mode()) {
            Ok(frame) => frame,
            Err(e) => {
                self.integrity_error(e, true);
                return;
            }
        };
        trace!("rx {:?}", frame);

        match frame {
            Frame::Unnumbered(Unnumbered::Reset(params)) => self.peer_reset(params),
            Frame::Unnumbered(Unnumbered::Ack) => self.ua_received(),
            Frame::Information { ns, nr, payload } => self.information_received(ns, nr, payload),
            Frame::Supervisory { kind, nr } => self.supervisory_received(kind, nr),
        }
    }

    fn information_received(&mut self, ns: Seq, nr: Seq, payload: Vec<u8>) {
        if !self.state.get().is_up() {
            debug!("I frame in state {} ignored", self.state.get());
            return;
        }
        self.process_ack(nr);
        self.clear_remote_busy();

        if ns == self.ack_sequence {
            debug!("rx I N(S)={} N(R)={} ({} bytes)", ns, nr, payload.len());
            self.recv_error_count = 0;
            self.ack_sequence = self.ack_sequence.next();
            if !payload.is_empty() {
                self.client.on_receive(&payload);
            }
            self.schedule_ack();
        } else if ns == self.ack_sequence.prev() {
            debug!("duplicate I N(S)={}, re-acknowledging", ns);
            self.issue_or_defer(PendingWrite::Ack);
        } else {
            warn!(
                "out of sequence I frame: N(S)={} expected {}",
                ns, self.ack_sequence
            );
            self.issue_or_defer(PendingWrite::Reject);
        }
    }

    fn supervisory_received(&mut self, kind: SupervisoryKind, nr: Seq) {
        if !self.state.get().is_up() {
            debug!("{:?} in state {} ignored", kind, self.state.get());
            return;
        }
        debug!("rx {:?} N(R)={}", kind, nr);
        match kind {
            SupervisoryKind::ReceiveReady => {
                self.recv_error_count = 0;
                self.clear_remote_busy();
                self.process_ack(nr);
            }
            SupervisoryKind::Reject => {
                self.clear_remote_busy();
                self.process_ack(nr);
                self.recv_error_count = self.recv_error_count.saturating_add(1);
                if self.recv_error_count >= self.config.max_recv_errors {
                    self.escalate(format!(
                        "{} consecutive rejects from controller",
                        self.recv_error_count
                    ));
                    return;
                }
                if let Some(seq) = self.window.base() {
                    self.state.transition(LinkState::Resending);
                    self.issue_or_defer(PendingWrite::Resend(seq));
                }
            }
            SupervisoryKind::ReceiveNotReady => {
                self.process_ack(nr);
                self.remote_busy = true;
                self.timers.suspend_guards();
            }
        }
    }

    fn ua_received(&mut self) {
        if self.state.get() != LinkState::Connecting {
            debug!("UA in state {} ignored", self.state.get());
            return;
        }
        self.link_established();
    }

    fn peer_reset(&mut self, params: ResetParams) {
        let state = self.state.get();
        if state == LinkState::Disconnected {
            debug!("RSET while disconnected ignored");
            return;
        }
        info!(
            "controller reset: window {}, capabilities {:#04x}",
            params.window_size, params.capabilities
        );
        let window = params.window_size.min(self.config.window_size);
        self.shrink_window(window);
        self.peer_params = Some(params);

        self.restart_numbering();
        self.timers.stop_connection_timer();
        self.state.transition(LinkState::Connecting);
        self.issue_or_defer(PendingWrite::UnnumberedAck);
    }

    /// Apply a window size and fail the outstanding frames beyond it.
    fn shrink_window(&mut self, window: WindowSize) {
        self.window.set_capacity(window);
        let dropped = self.window.shed_excess();
        if dropped.is_empty() {
            return;
        }
        for _ in &dropped {
            self.timers.cancel_newest_guard();
        }
        if let Some(InFlight::Info { seq, .. }) = self.in_flight {
            if dropped.iter().any(|f| f.seq == seq) {
                self.in_flight = Some(InFlight::Discarded);
            }
        }
        self.withheld_send_complete = None;
        for frame in dropped {
            warn!(
                "N(S)={} dropped, controller window is {}",
                frame.seq, window
            );
            self.client.on_send_complete(Err(Error::FrameDiscarded {
                seq: frame.seq,
                window: window.get(),
            }));
        }
    }

    /// Count one integrity failure; reject or re-read while below the bound.
    fn integrity_error(&mut self, err: Error, may_reject: bool) {
        self.recv_error_count = self.recv_error_count.saturating_add(1);
        warn!(
            "receive error {}/{}: {}",
            self.recv_error_count, self.config.max_recv_errors, err
        );
        if self.recv_error_count >= self.config.max_recv_errors {
            self.escalate(format!(
                "{} consecutive receive errors, last: {}",
                self.recv_error_count, err
            ));
            return;
        }
        if may_reject && self.config.reject_on_integrity_error && self.state.get().is_up() {
            self.issue_or_defer(PendingWrite::Reject);
        }
    }

    fn process_ack(&mut self, nr: Seq) {
        let freed = self.window.acknowledge(nr);
        if freed == 0 {
            return;
        }
        self.timers.stop_guards(freed);
        debug!("N(R)={} acknowledged {} frame(s)", nr, freed);
        if !self.window.is_full() {
            if let Some(status) = self.withheld_send_complete.take() {
                self.client.on_send_complete(status);
            }
        }
    }

    fn schedule_ack(&mut self) {
        self.unacked_rx += 1;
        if !self.config.piggyback_ack {
            self.issue_or_defer(PendingWrite::Ack);
        } else if self.unacked_rx >= self.window.capacity() {
            self.issue_or_defer(PendingWrite::Ack);
        } else {
            self.timers.start_ack_timer();
        }
    }

    fn clear_remote_busy(&mut self) {
        if self.remote_busy {
            self.remote_busy = false;
            self.timers.resume_guards();
        }
    }

    // -- timers --

    fn connection_timeout(&mut self) {
        let retries = self.timers.connection_retries();
        if retries < self.config.max_connect_retries {
            let n = self.timers.note_connection_retry();
            warn!("no UA, resending RSET ({}/{})", n, self.config.max_connect_retries);
            self.issue_or_defer(PendingWrite::Reset);
            self.timers.start_connection_timer();
            return;
        }
        error!("reset handshake failed after {} retries", retries);
        self.fatal(Error::ConnectTimeout { retries });
    }

    /// Each expiry counts against the frame; the expiry that reaches the
    /// retry bound escalates instead of resending.
    fn guard_timeout(&mut self, idx: usize) {
        let max = self.config.max_guard_retries;
        let (seq, retries) = match self.window.get_mut(idx) {
            Some(entry) => {
                entry.retry_count = entry.retry_count.saturating_add(1);
                (entry.seq, entry.retry_count)
            }
            None => {
                self.timers.restart_guard(idx);
                return;
            }
        };
        if retries >= max {
            self.escalate(format!(
                "no acknowledgment for N(S)={} after {} guard timeouts",
                seq, retries
            ));
            return;
        }
        warn!("guard timer expired for N(S)={}, resend {}/{}", seq, retries, max);
        self.timers.restart_guard(idx);
        self.state.transition(LinkState::Resending);
        self.issue_or_defer(PendingWrite::Resend(seq));
    }

    // -- recovery --

    fn escalate(&mut self, reason: String) {
        match self.config.recovery {
            RecoveryPolicy::Fail => {
                error!("{}", reason);
                self.fatal(Error::DeviceCommunication(reason));
            }
            RecoveryPolicy::Reset => {
                warn!("{}; resetting link", reason);
                self.local_reset();
            }
        }
    }

    /// Fresh Reset handshake keeping the outstanding frames.
    fn local_reset(&mut self) {
        self.restart_numbering();
        self.timers.suspend_guards();
        self.timers.reset_connection_retries();
        self.state.transition(LinkState::Connecting);
        self.issue_or_defer(PendingWrite::Reset);
        self.timers.start_connection_timer();
    }

    /// Sequences restart from zero and outstanding frames are renumbered.
    /// A fresh I frame still in flight counts once its write completes.
    fn restart_numbering(&mut self) {
        self.deferred.clear();
        self.window.renumber(Seq::ZERO);
        self.timers.renumber_guards(Seq::ZERO);
        let mut next = Seq::ZERO.add(self.window.len());
        if let Some(InFlight::Info { seq, fresh: true, len }) = self.in_flight {
            next = next.prev();
            debug!("in-flight N(S)={} renumbered to {}", seq, next);
            self.in_flight = Some(InFlight::Info {
                seq: next,
                fresh: true,
                len,
            });
        }
        self.send_sequence = next;
        self.ack_sequence = Seq::ZERO;
        self.unacked_rx = 0;
        self.recv_error_count = 0;
        self.remote_busy = false;
        self.timers.stop_ack_timer();
    }

    /// UA received (our RSET) or UA written (their RSET).
    fn link_established(&mut self) {
        self.timers.stop_connection_timer();
        self.timers.reset_connection_retries();
        self.recv_error_count = 0;
        if !self.state.transition(LinkState::Connected) {
            return;
        }
        self.timers.renumber_guards(Seq::ZERO);
        self.timers.resume_guards();
        if !self.initialized {
            self.initialized = true;
            info!("link up");
            self.client.on_init(Ok(()));
        }
        for seq in self.window.seqs() {
            self.issue_or_defer(PendingWrite::Resend(seq));
        }
    }

    fn fatal(&mut self, err: Error) {
        self.teardown();
        if self.initialized {
            self.client.on_error(err);
        } else {
            self.client.on_init(Err(err));
        }
    }

    fn teardown(&mut self) {
        self.state.transition(LinkState::Disconnected);
        self.timers.stop_all();
        self.window.clear();
        self.deferred.clear();
        self.reader.reset();
        self.in_flight = None;
        self.adopted_read = None;
        self.withheld_send_complete = None;
        self.unacked_rx = 0;
        self.remote_busy = false;
        self.recv_error_count = 0;
        self.generation = self.generation.wrapping_add(1);
    }

    fn reset_sequences(&mut self) {
        self.send_sequence = Seq::ZERO;
        self.ack_sequence = Seq::ZERO;
        self.unacked_rx = 0;
        self.recv_error_count = 0;
        self.remote_busy = false;
        self.reader.reset();
    }

    // -- write path --

    fn info_written(&mut self, seq: Seq, fresh: bool, len: usize, result: Result<usize>) {
        if fresh {
            self.send_sequence = self.send_sequence.next();
        }
        match result {
            Ok(_) => {
                if let Some(entry) = self.window.find_mut(seq) {
                    entry.confirmed = true;
                }
                if fresh {
                    if self.window.is_full() {
                        debug!("window full, withholding send completion");
                        self.withheld_send_complete = Some(Ok(len));
                    } else {
                        self.client.on_send_complete(Ok(len));
                    }
                }
            }
            Err(e) => {
                warn!("I frame N(S)={} write failed: {}", seq, e);
                if fresh {
                    self.client.on_send_complete(Err(e));
                }
            }
        }
        if !fresh {
            self.resend_settled();
        }
    }

    /// Leave Resending once no retransmission is in flight or queued.
    fn resend_settled(&mut self) {
        if self.state.get() != LinkState::Resending {
            return;
        }
        let resending = matches!(self.in_flight, Some(InFlight::Info { fresh: false, .. }));
        if !resending && !self.deferred.has_resend() {
            self.state.transition(LinkState::Connected);
        }
    }

    fn issue_or_defer(&mut self, write: PendingWrite) {
        if self.pending_write {
            self.deferred.push(write);
            return;
        }
        if let Err(e) = self.perform(write) {
            warn!("{:?} could not be written: {}", write, e);
        }
    }

    fn perform(&mut self, write: PendingWrite) -> Result<()> {
        match write {
            PendingWrite::Reset => {
                let raw = Frame::reset(self.config.reset_params()).encode()?;
                self.write_raw(&raw, InFlight::Reset)
            }
            PendingWrite::UnnumberedAck => {
                let raw = Frame::ua().encode()?;
                self.write_raw(&raw, InFlight::UnnumberedAck)
            }
            PendingWrite::Ack => {
                if !self.state.get().is_up() {
                    return Ok(());
                }
                let raw = Frame::rr(self.ack_sequence).encode()?;
                self.write_raw(&raw, InFlight::Supervisory(SupervisoryKind::ReceiveReady))?;
                self.ack_piggybacked();
                Ok(())
            }
            PendingWrite::Reject => {
                if !self.state.get().is_up() {
                    return Ok(());
                }
                let raw = Frame::rej(self.ack_sequence).encode()?;
                self.write_raw(&raw, InFlight::Supervisory(SupervisoryKind::Reject))
            }
            PendingWrite::Resend(seq) => {
                if !self.state.get().is_up() {
                    return Ok(());
                }
                let (raw, len) = match self.window.find_mut(seq) {
                    Some(entry) => (restamp_nr(&entry.raw, self.ack_sequence), entry.payload_len),
                    None => {
                        debug!("resend of N(S)={} skipped, already acknowledged", seq);
                        self.resend_settled();
                        return Ok(());
                    }
                };
                self.write_raw(
                    &raw,
                    InFlight::Info {
                        seq,
                        fresh: false,
                        len,
                    },
                )?;
                self.ack_piggybacked();
                debug!("resent I N(S)={} N(R)={}", seq, self.ack_sequence);
                Ok(())
            }
        }
    }

    fn write_raw(&mut self, raw: &[u8], in_flight: InFlight) -> Result<()> {
        let token = self.token(IoDirection::Write);
        dump("tx", raw);
        self.transport.write(token, raw)?;
        self.pending_write = true;
        self.in_flight = Some(in_flight);
        Ok(())
    }

    /// Our N(R) just went out; nothing left to acknowledge.
    fn ack_piggybacked(&mut self) {
        self.unacked_rx = 0;
        self.timers.stop_ack_timer();
    }

    fn resume_io(&mut self) {
        if self.state.get() == LinkState::Disconnected {
            return;
        }
        while !self.pending_write {
            let Some(write) = self.deferred.pop() else {
                break;
            };
            if let Err(e) = self.perform(write) {
                warn!("deferred {:?} could not be written: {}", write, e);
            }
        }
        self.ensure_read();
    }

    fn ensure_read(&mut self) {
        if self.pending_read || self.state.get() == LinkState::Disconnected {
            return;
        }
        let token = self.token(IoDirection::Read);
        let len = self.reader.next_read_len();
        match self.transport.read(token, len) {
            Ok(()) => {
                self.pending_read = true;
                self.read_len = len;
                self.read_generation = self.generation;
            }
            Err(e) => {
                warn!("could not start {} byte read: {}", len, e);
                self.client.notify(LinkEvent::ReceiveFailed(e));
            }
        }
    }

    fn token(&self, direction: IoDirection) -> IoToken {
        IoToken {
            generation: self.generation,
            direction,
        }
    }
}

#[cfg(feature = "diagnostics")]
fn dump(direction: &str, bytes: &[u8]) {
    trace!("{}", crate::utils::frame_dump(direction, bytes));
}

#[cfg(not(feature = "diagnostics"))]
fn dump(_direction: &str, _bytes: &[u8]) {}
