// breakout/src/protocol/responses/firmware.rs

use crate::protocol::parser;
use crate::types::FirmwareVersion;
use crate::Result;

/// Decode a GetFirmwareVersion response payload
/// Layout: D5 03 IC(1) Ver(1) Rev(1) Support(1)
pub fn decode_firmware_version(data: &[u8]) -> Result<FirmwareVersion> {
    const MIN_LEN: usize = 2 + 4;
    parser::ensure_len(data, MIN_LEN)?;
    parser::expect_response_code(data, 0x03)?;

    let b = parser::slice_at(data, 2, 4)?;
    Ok(FirmwareVersion::from_parts(b[0], b[1], b[2], b[3]))
}
