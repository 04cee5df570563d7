// breakout/src/error.rs

use thiserror::Error;

/// Common error type for the driver and transports.
#[derive(Error, Debug)]
pub enum Error {
    #[error("device not found")]
    DeviceNotFound,

    #[error("bus error: {0}")]
    Bus(String),

    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch { expected: u8, actual: u8 },

    #[error("frame format error: {0}")]
    FrameFormat(String),

    #[error("command not acknowledged")]
    NotAcknowledged,

    #[error("pn532 reported an application error")]
    ApplicationError,

    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse { expected: u8, actual: u8 },

    #[error("unsupported uid length: {0} (expected 4 or 7)")]
    UnsupportedUidLength(usize),

    #[error("authentication failed for block {block}: status={status:#04x}")]
    AuthenticationFailed { block: u8, status: u8 },

    #[error("card error: status={status:#04x}")]
    CardStatus { status: u8 },

    #[error("operation timed out")]
    Timeout,
}

pub type Result<T> = std::result::Result<T, Error>;
