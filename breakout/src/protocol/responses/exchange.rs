// breakout/src/protocol/responses/exchange.rs

use crate::protocol::parser;
use crate::Result;

/// Decode an InDataExchange response payload.
/// Layout: D5 41 Status(1) Data(n). Only the low six status bits carry the
/// error code; the upper bits flag NAD/MI.
pub fn decode_in_data_exchange(data: &[u8]) -> Result<(u8, Vec<u8>)> {
    parser::ensure_len(data, 3)?;
    parser::expect_response_code(data, 0x41)?;

    let status = parser::byte_at(data, 2)? & 0x3F;
    Ok((status, data[3..].to_vec()))
}
