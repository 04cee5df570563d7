// breakout/src/prelude.rs

pub use crate::card::{Card, CardKind};
pub use crate::config::{PinConfig, SketchConfig, BREAKOUT_PINS};
pub use crate::device::{Device, DeviceBuilder, Initialized, Uninitialized};
pub use crate::protocol::{Command, Response};
pub use crate::sketch::{Outcome, Phase, Reader, Sketch};
pub use crate::transport::{SoftSpi, SpiTransport, Transport};
pub use crate::{BlockData, Error, FirmwareVersion, KeyType, MifareKey, Result, Uid};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_prefixed, bytes_to_hex_spaced, hex_char_dump};
