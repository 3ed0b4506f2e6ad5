// llcnfc-rs/llcnfc/src/transport/mock.rs

use std::sync::{Arc, Mutex, MutexGuard};

use crate::transport::traits::Transport;
use crate::types::IoToken;
use crate::{Error, Result};

/// Mock transport for tests. It records every read/write request; the test
/// decides when and how each one completes.
#[derive(Debug, Default)]
pub struct MockTransport {
    pub init_calls: usize,
    pub reads: Vec<(IoToken, usize)>,
    pub writes: Vec<(IoToken, Vec<u8>)>,
    /// Testing hook: `init` fails while set
    pub fail_init: bool,
    /// Testing hook: number of upcoming `write` calls that fail immediately
    pub write_failures: usize,
    /// Testing hook: number of upcoming `read` calls that fail immediately
    pub read_failures: usize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_write_failures(&mut self, n: usize) {
        self.write_failures = n;
    }

    pub fn set_read_failures(&mut self, n: usize) {
        self.read_failures = n;
    }

    pub fn last_write(&self) -> Option<&(IoToken, Vec<u8>)> {
        self.writes.last()
    }

    pub fn last_read(&self) -> Option<&(IoToken, usize)> {
        self.reads.last()
    }

    /// Raw bytes of every write, oldest first.
    pub fn written_frames(&self) -> Vec<Vec<u8>> {
        self.writes.iter().map(|(_, data)| data.clone()).collect()
    }
}

impl Transport for MockTransport {
    fn init(&mut self) -> Result<()> {
        self.init_calls += 1;
        if self.fail_init {
            return Err(Error::Transport("mock init failure".into()));
        }
        Ok(())
    }

    fn read(&mut self, token: IoToken, len: usize) -> Result<()> {
        if self.read_failures > 0 {
            self.read_failures -= 1;
            return Err(Error::Transport("mock read failure".into()));
        }
        self.reads.push((token, len));
        Ok(())
    }

    fn write(&mut self, token: IoToken, data: &[u8]) -> Result<()> {
        if self.write_failures > 0 {
            self.write_failures -= 1;
            return Err(Error::Transport("mock write failure".into()));
        }
        self.writes.push((token, data.to_vec()));
        Ok(())
    }
}

/// Cloneable handle to a `MockTransport`, so a test can keep inspecting the
/// mock after handing it to a session.
#[derive(Debug, Clone, Default)]
pub struct SharedMock(Arc<Mutex<MockTransport>>);

impl SharedMock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock the inner mock. A poisoned lock still yields the data.
    pub fn lock(&self) -> MutexGuard<'_, MockTransport> {
        self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Transport for SharedMock {
    fn init(&mut self) -> Result<()> {
        self.lock().init()
    }

    fn read(&mut self, token: IoToken, len: usize) -> Result<()> {
        self.lock().read(token, len)
    }

    fn write(&mut self, token: IoToken, data: &[u8]) -> Result<()> {
        self.lock().write(token, data)
    }
}
