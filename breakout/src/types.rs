// breakout/src/types.rs

use crate::Error;
use std::convert::TryFrom;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// ISO14443A UID - 4 bytes (single size) or 7 bytes (double size)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<u8>", into = "Vec<u8>"))]
pub struct Uid {
    bytes: [u8; 7],
    len: usize,
}

#[allow(clippy::len_without_is_empty)]
impl Uid {
    /// 4 or 7; a UID is never empty.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Bytes used by the Mifare authentication command. Double size UIDs
    /// authenticate with their last cascade level.
    pub fn auth_bytes(&self) -> &[u8] {
        &self.bytes[self.len - 4..self.len]
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        match bytes.len() {
            4 | 7 => {
                let mut arr = [0u8; 7];
                arr[..bytes.len()].copy_from_slice(bytes);
                Ok(Self {
                    bytes: arr,
                    len: bytes.len(),
                })
            }
            n => Err(Error::UnsupportedUidLength(n)),
        }
    }
}

impl TryFrom<Vec<u8>> for Uid {
    type Error = Error;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        Self::try_from(&bytes[..])
    }
}

impl From<Uid> for Vec<u8> {
    fn from(uid: Uid) -> Self {
        uid.as_bytes().to_vec()
    }
}

/// BlockData (16 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BlockData([u8; 16]);

impl BlockData {
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }

    pub fn to_ascii_safe(&self) -> String {
        self.0
            .iter()
            .map(|&b| {
                if b.is_ascii_graphic() || b == b' ' {
                    b as char
                } else {
                    '.'
                }
            })
            .collect()
    }
}

impl TryFrom<&[u8]> for BlockData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() < 16 {
            return Err(Error::InvalidLength {
                expected: 16,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 16];
        arr.copy_from_slice(&bytes[..16]);
        Ok(Self(arr))
    }
}

/// Packed firmware identifier: `IC << 24 | Ver << 16 | Rev << 8 | Support`.
/// Zero means no chip answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FirmwareVersion(u32);

impl FirmwareVersion {
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub fn from_parts(ic: u8, ver: u8, rev: u8, support: u8) -> Self {
        Self(u32::from_be_bytes([ic, ver, rev, support]))
    }

    pub fn raw(&self) -> u32 {
        self.0
    }

    pub fn is_present(&self) -> bool {
        self.0 != 0
    }

    /// Chip model (0x32 for a PN532)
    pub fn ic(&self) -> u8 {
        ((self.0 >> 24) & 0xFF) as u8
    }

    pub fn major(&self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    pub fn minor(&self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    /// Supported card families bitmap (bit0 ISO14443A, bit1 ISO14443B, bit2 ISO18092)
    pub fn support(&self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

/// Mifare Classic key slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KeyType {
    A,
    B,
}

impl KeyType {
    pub fn auth_command(&self) -> u8 {
        match self {
            KeyType::A => crate::constants::MIFARE_CMD_AUTH_A,
            KeyType::B => crate::constants::MIFARE_CMD_AUTH_B,
        }
    }
}

/// Six-byte Mifare Classic sector key
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MifareKey([u8; 6]);

impl MifareKey {
    /// Factory default transport key
    pub const DEFAULT: Self = Self([0xFF; 6]);

    pub const fn new(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }
}

impl Default for MifareKey {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// Keys stay out of logs.
impl std::fmt::Debug for MifareKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("MifareKey(..)")
    }
}

/// Sector holding `block` on a 1K card (4 blocks per sector).
pub fn sector_of(block: u8) -> u8 {
    block / 4
}

/// First block of `sector` on a 1K card.
pub fn first_block_of(sector: u8) -> u8 {
    sector * 4
}
