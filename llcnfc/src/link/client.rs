// llcnfc-rs/llcnfc/src/link/client.rs

use crate::{Error, Result};

/// Events delivered to the upper layer
#[derive(Debug)]
pub enum LinkEvent {
    /// Reset handshake finished; the link is up.
    InitCompleted,
    /// Reset handshake failed (or the transport could not be brought up).
    InitFailed(Error),
    /// One in-sequence payload from the controller.
    ReceiveCompleted(Vec<u8>),
    /// The transport reported a read error.
    ReceiveFailed(Error),
    /// Result of handing an I frame to the transport.
    SendCompleted(Result<usize>),
    /// Fatal error after the link was up. The session is disconnected.
    DeviceError(Error),
}

/// Capability set of the link's owner.
///
/// Only `notify` is required; the specific callbacks default to wrapping
/// their argument into a [`LinkEvent`].
pub trait LinkClient: Send {
    fn notify(&mut self, event: LinkEvent);

    fn on_init(&mut self, status: Result<()>) {
        match status {
            Ok(()) => self.notify(LinkEvent::InitCompleted),
            Err(e) => self.notify(LinkEvent::InitFailed(e)),
        }
    }

    fn on_receive(&mut self, data: &[u8]) {
        self.notify(LinkEvent::ReceiveCompleted(data.to_vec()));
    }

    fn on_send_complete(&mut self, status: Result<usize>) {
        self.notify(LinkEvent::SendCompleted(status));
    }

    fn on_error(&mut self, err: Error) {
        self.notify(LinkEvent::DeviceError(err));
    }
}

impl<F> LinkClient for F
where
    F: FnMut(LinkEvent) + Send,
{
    fn notify(&mut self, event: LinkEvent) {
        self(event)
    }
}
