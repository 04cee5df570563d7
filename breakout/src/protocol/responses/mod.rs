// breakout/src/protocol/responses/mod.rs

pub mod exchange;
pub mod firmware;
pub mod target;

pub use exchange::decode_in_data_exchange;
pub use firmware::decode_firmware_version;
pub use target::decode_in_list_passive_target;

use crate::constants::{
    PN532_CMD_GET_FIRMWARE_VERSION, PN532_CMD_IN_DATA_EXCHANGE,
    PN532_CMD_IN_LIST_PASSIVE_TARGET, PN532_CMD_SAM_CONFIGURATION,
};

/// High-level Response enum. Per-command decoders live in
/// `protocol::responses::<name>.rs` and are dispatched here.
#[derive(Debug, Clone)]
pub enum Response {
    FirmwareVersion(crate::types::FirmwareVersion),
    SamConfiguration,
    InListPassiveTarget {
        targets: Vec<crate::card::Card>,
    },
    InDataExchange {
        status: u8,
        data: Vec<u8>,
    },
}

impl Response {
    /// Decode a response payload (TFI + response code + body) for the
    /// given expected command code.
    pub fn decode(expected_cmd: u8, data: &[u8]) -> crate::Result<Self> {
        // Check TFI and response code (command + 1) up front so decoders
        // only deal with their own body layout.
        let expected_response = expected_cmd.wrapping_add(1);
        crate::protocol::parser::expect_response_code(data, expected_response)?;

        match expected_cmd {
            PN532_CMD_GET_FIRMWARE_VERSION => {
                Ok(Self::FirmwareVersion(firmware::decode_firmware_version(data)?))
            }
            PN532_CMD_SAM_CONFIGURATION => Ok(Self::SamConfiguration),
            PN532_CMD_IN_LIST_PASSIVE_TARGET => Ok(Self::InListPassiveTarget {
                targets: target::decode_in_list_passive_target(data)?,
            }),
            PN532_CMD_IN_DATA_EXCHANGE => {
                let (status, data) = exchange::decode_in_data_exchange(data)?;
                Ok(Self::InDataExchange { status, data })
            }
            other => Err(crate::Error::FrameFormat(format!(
                "no decoder for command {other:#04x}"
            ))),
        }
    }
}
