// breakout/src/transport/mock.rs

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Mock transport for unit tests. It records sent frames and returns queued responses.
#[derive(Debug, Default)]
pub struct MockTransport {
    pub sent: Vec<Vec<u8>>,
    pub responses: Vec<Vec<u8>>,
    /// Timeouts requested by each receive call, in order
    pub receive_timeouts: Vec<u64>,
    pub wakeups: usize,
    pub resets: usize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push(resp);
    }

    /// Queue an ACK followed by a response frame, the usual reply to one command.
    pub fn push_ack_and(&mut self, frame: Vec<u8>) {
        self.responses.push(crate::constants::PN532_ACK.to_vec());
        self.responses.push(frame);
    }

    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }
}

impl Transport for MockTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.sent.push(data.to_vec());
        Ok(())
    }

    fn receive(&mut self, timeout_ms: u64) -> Result<Vec<u8>> {
        self.receive_timeouts.push(timeout_ms);
        if self.responses.is_empty() {
            Err(Error::Timeout)
        } else {
            Ok(self.responses.remove(0))
        }
    }

    fn wakeup(&mut self) -> Result<()> {
        self.wakeups += 1;
        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        // Reset clears the sent log but keeps queued responses so tests can
        // pre-seed replies before handing the transport to a Device.
        self.sent.clear();
        self.resets += 1;
        Ok(())
    }
}
