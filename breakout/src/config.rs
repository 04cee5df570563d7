// breakout/src/config.rs

//! Compile-time configuration: breakout wiring and the read sequence.

use crate::types::{KeyType, MifareKey};
use crate::utils::DEFAULT_READ_TIMEOUT_MS;

/// GPIO numbers of the four-wire SPI connection to the breakout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinConfig {
    pub sck: u8,
    pub mosi: u8,
    pub ss: u8,
    pub miso: u8,
}

/// Wiring used by the breakout board.
pub const BREAKOUT_PINS: PinConfig = PinConfig {
    sck: 2,
    mosi: 3,
    ss: 4,
    miso: 5,
};

/// Banner printed on startup.
pub const BANNER: &str = "BreakOut v1.0";

/// What the poll loop reads and how it paces itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SketchConfig {
    /// Block to authenticate and read. Block 4 is the first block of
    /// sector 1; sector 0 holds manufacturer data.
    pub block: u8,
    pub key_type: KeyType,
    pub key: MifareKey,
    /// Pause after a successful read so a card left on the reader is not
    /// re-read immediately.
    pub settle_delay_ms: u32,
    /// How long one poll waits for a card before the loop goes round again.
    pub poll_timeout_ms: u64,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            block: 4,
            key_type: KeyType::A,
            key: MifareKey::DEFAULT,
            settle_delay_ms: 1000,
            poll_timeout_ms: DEFAULT_READ_TIMEOUT_MS,
        }
    }
}
