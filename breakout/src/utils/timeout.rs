//! Timeout helpers used across the crate.

use embedded_hal::delay::DelayNs;

use crate::{Error, Result};

/// Default response timeout in milliseconds used when a caller doesn't
/// provide an explicit timeout.
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 1000;

/// How long the chip gets to acknowledge a command frame.
pub const ACK_TIMEOUT_MS: u64 = 100;

/// Poll `ready` once per millisecond until it reports true or `timeout_ms`
/// elapses. A zero timeout checks exactly once.
pub fn wait_ready<D, F>(delay: &mut D, timeout_ms: u64, mut ready: F) -> Result<()>
where
    D: DelayNs,
    F: FnMut() -> Result<bool>,
{
    let mut waited = 0u64;
    loop {
        if ready()? {
            return Ok(());
        }
        if waited >= timeout_ms {
            return Err(Error::Timeout);
        }
        delay.delay_ms(1);
        waited += 1;
    }
}
