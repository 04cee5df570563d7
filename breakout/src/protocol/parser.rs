// breakout/src/protocol/parser.rs

use crate::constants::PN532_PN532_TO_HOST;
use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a big-endian u16 at given index, with bounds checking.
pub fn be_u16_at(data: &[u8], idx: usize) -> Result<u16> {
    ensure_len(data, idx + 2)?;
    Ok(u16::from_be_bytes([data[idx], data[idx + 1]]))
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Ensure the payload starts with the chip->host TFI (0xD5) followed by
/// `expected` response code. Returns UnexpectedResponse on mismatch.
pub fn expect_response_code(data: &[u8], expected: u8) -> Result<()> {
    let tfi = byte_at(data, 0)?;
    if tfi != PN532_PN532_TO_HOST {
        return Err(Error::UnexpectedResponse {
            expected: PN532_PN532_TO_HOST,
            actual: tfi,
        });
    }
    let actual = byte_at(data, 1)?;
    if actual != expected {
        return Err(Error::UnexpectedResponse { expected, actual });
    }
    Ok(())
}
