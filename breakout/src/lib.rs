// breakout/src/lib.rs

//! breakout
//!
//! PN532 breakout reader: wait for an ISO14443A card and, for Mifare
//! Classic cards, authenticate sector 1 and dump block 4.
#![warn(missing_docs)]

pub mod card;
pub mod config;
pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod sketch;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// `Error`, `Result` and the value types live at the crate root; the
// prelude adds the driver and sketch entry points on top.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
