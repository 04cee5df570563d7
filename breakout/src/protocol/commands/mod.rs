// breakout/src/protocol/commands/mod.rs

pub mod mifare;

use crate::constants::{
    PN532_CMD_GET_FIRMWARE_VERSION, PN532_CMD_IN_DATA_EXCHANGE,
    PN532_CMD_IN_LIST_PASSIVE_TARGET, PN532_CMD_SAM_CONFIGURATION, PN532_HOST_TO_PN532,
};

/// High-level Command enum. New commands should be added here together
/// with a decoder arm in `protocol::responses`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    GetFirmwareVersion,
    /// `mode` 0x01 is normal mode (no SAM); `timeout` is in 50 ms units
    /// and only matters in virtual card mode.
    SamConfiguration {
        mode: u8,
        timeout: u8,
        use_irq: bool,
    },
    InListPassiveTarget {
        max_targets: u8,
        brty: u8,
    },
    /// Raw exchange with an activated target. Mifare payloads are built by
    /// `commands::mifare`.
    InDataExchange {
        target: u8,
        data: Vec<u8>,
    },
}

impl Command {
    /// Normal-mode SAM configuration used before reading passive targets.
    pub fn sam_normal() -> Self {
        Self::SamConfiguration {
            mode: 0x01,
            timeout: 0x14,
            use_irq: true,
        }
    }

    /// Return the PN532 command code.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::GetFirmwareVersion => PN532_CMD_GET_FIRMWARE_VERSION,
            Self::SamConfiguration { .. } => PN532_CMD_SAM_CONFIGURATION,
            Self::InListPassiveTarget { .. } => PN532_CMD_IN_LIST_PASSIVE_TARGET,
            Self::InDataExchange { .. } => PN532_CMD_IN_DATA_EXCHANGE,
        }
    }

    /// Encode the command into the frame payload (TFI + command code + params).
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = vec![PN532_HOST_TO_PN532, self.command_code()];
        match self {
            Self::GetFirmwareVersion => {}
            Self::SamConfiguration {
                mode,
                timeout,
                use_irq,
            } => {
                buf.push(*mode);
                buf.push(*timeout);
                buf.push(u8::from(*use_irq));
            }
            Self::InListPassiveTarget { max_targets, brty } => {
                buf.push(*max_targets);
                buf.push(*brty);
            }
            Self::InDataExchange { target, data } => {
                buf.push(*target);
                buf.extend_from_slice(data);
            }
        }
        buf
    }
}
