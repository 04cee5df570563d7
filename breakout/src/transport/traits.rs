// breakout/src/transport/traits.rs

use crate::Result;

/// Transport trait abstracts I/O away from protocol/device logic.
pub trait Transport {
    /// Send one complete frame to the chip
    fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Wait until the chip has a frame ready (or `timeout_ms` elapses,
    /// returning `Error::Timeout`) and receive exactly one frame: an ACK,
    /// a NACK or a normal information frame.
    fn receive(&mut self, timeout_ms: u64) -> Result<Vec<u8>>;

    /// Bring the chip out of power-down. Transports whose bus activity
    /// already wakes the chip can keep the default no-op.
    fn wakeup(&mut self) -> Result<()> {
        Ok(())
    }

    /// Perform a transport-level reset
    fn reset(&mut self) -> Result<()>;
}
