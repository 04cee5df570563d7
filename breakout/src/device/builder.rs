// breakout/src/device/builder.rs

use crate::device::handle::{Device, Uninitialized};
use crate::transport::Transport;
use crate::utils::{ACK_TIMEOUT_MS, DEFAULT_READ_TIMEOUT_MS};
use crate::{Error, Result};

/// Helper to construct a Device with optional configuration.
pub struct DeviceBuilder {
    transport: Option<Box<dyn Transport>>,
    ack_timeout_ms: u64,
    response_timeout_ms: u64,
}

impl Default for DeviceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceBuilder {
    pub fn new() -> Self {
        Self {
            transport: None,
            ack_timeout_ms: ACK_TIMEOUT_MS,
            response_timeout_ms: DEFAULT_READ_TIMEOUT_MS,
        }
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// How long to wait for the ACK that follows every command.
    pub fn ack_timeout_ms(mut self, ms: u64) -> Self {
        self.ack_timeout_ms = ms;
        self
    }

    /// How long to wait for responses of commands other than target polling.
    pub fn response_timeout_ms(mut self, ms: u64) -> Self {
        self.response_timeout_ms = ms;
        self
    }

    /// Consume the builder and return an uninitialized Device.
    /// Requires a transport to be provided; otherwise returns DeviceNotFound.
    pub fn build_uninitialized(self) -> Result<Device<Uninitialized>> {
        match self.transport {
            Some(t) => Ok(Device::with_timeouts(
                t,
                self.ack_timeout_ms,
                self.response_timeout_ms,
            )),
            None => Err(Error::DeviceNotFound),
        }
    }
}
