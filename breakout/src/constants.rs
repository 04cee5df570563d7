// breakout/src/constants.rs
//! Common protocol constants used across the crate

/// Wire frame preamble + start code: 0x00 0x00 0xFF
pub const PN532_PREAMBLE: [u8; 3] = [0x00, 0x00, 0xFF];

/// Start code alone; some reads drop the leading preamble byte.
pub const PN532_START_CODE: [u8; 2] = [0x00, 0xFF];

/// Wire frame postamble: 0x00
pub const PN532_POSTAMBLE: u8 = 0x00;

/// Minimal wire frame length in bytes (preamble, len, lcs, dcs, postamble)
pub const PN532_MIN_FRAME_LEN: usize = 7;

/// Maximum payload length of a normal information frame
pub const PN532_MAX_PAYLOAD_LEN: usize = 255;

/// ACK frame sent by the chip after every accepted command. Sending it
/// to the chip aborts the command currently in progress.
pub const PN532_ACK: [u8; 6] = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];

/// NACK frame
pub const PN532_NACK: [u8; 6] = [0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00];

/// Application-level error frame (syntax error in the last command)
pub const PN532_ERROR_FRAME: [u8; 8] = [0x00, 0x00, 0xFF, 0x01, 0xFF, 0x7F, 0x81, 0x00];

/// Host->chip frame identifier (D4) and chip->host identifier (D5)
pub const PN532_HOST_TO_PN532: u8 = 0xD4;
pub const PN532_PN532_TO_HOST: u8 = 0xD5;

/// Command codes
pub const PN532_CMD_GET_FIRMWARE_VERSION: u8 = 0x02;
pub const PN532_CMD_SAM_CONFIGURATION: u8 = 0x14;
pub const PN532_CMD_IN_DATA_EXCHANGE: u8 = 0x40;
pub const PN532_CMD_IN_LIST_PASSIVE_TARGET: u8 = 0x4A;

/// BrTy for InListPassiveTarget: 106 kbps type A (ISO14443A / Mifare)
pub const PN532_MIFARE_ISO14443A: u8 = 0x00;

/// Mifare Classic commands carried inside InDataExchange
pub const MIFARE_CMD_AUTH_A: u8 = 0x60;
pub const MIFARE_CMD_AUTH_B: u8 = 0x61;
pub const MIFARE_CMD_READ: u8 = 0x30;

/// Size of one Mifare Classic data block
pub const MIFARE_BLOCK_LEN: usize = 16;

/// SPI operation prefixes
pub const PN532_SPI_DATA_WRITE: u8 = 0x01;
pub const PN532_SPI_STATUS_READ: u8 = 0x02;
pub const PN532_SPI_DATA_READ: u8 = 0x03;
pub const PN532_SPI_READY: u8 = 0x01;
