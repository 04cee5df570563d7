// breakout/src/protocol/commands/mifare.rs

//! Mifare Classic payloads carried by InDataExchange

use crate::constants::MIFARE_CMD_READ;
use crate::types::{KeyType, MifareKey, Uid};

/// Encode an authentication request:
/// auth_cmd(1) + block(1) + key(6) + uid(4)
pub fn encode_authenticate(key_type: KeyType, block: u8, key: &MifareKey, uid: &Uid) -> Vec<u8> {
    let mut buf = Vec::with_capacity(12);
    buf.push(key_type.auth_command());
    buf.push(block);
    buf.extend_from_slice(key.as_bytes());
    buf.extend_from_slice(uid.auth_bytes());
    buf
}

/// Encode a 16-byte block read request.
pub fn encode_read(block: u8) -> Vec<u8> {
    vec![MIFARE_CMD_READ, block]
}
