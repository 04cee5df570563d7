// breakout/src/card/mod.rs

use crate::types::Uid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Card family as far as this reader cares: only single size UIDs get the
/// Mifare Classic treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CardKind {
    /// 4-byte UID, sector based memory behind Crypto-1 authentication
    MifareClassic,
    /// 7-byte UID (Ultralight, NTAG, DESFire, ...)
    SevenByteUid,
}

/// An activated ISO14443A target as reported by InListPassiveTarget.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Card {
    target: u8,
    sens_res: u16,
    sel_res: u8,
    uid: Uid,
}

impl Card {
    pub fn new(target: u8, sens_res: u16, sel_res: u8, uid: Uid) -> Self {
        Self {
            target,
            sens_res,
            sel_res,
            uid,
        }
    }

    /// Logical target number assigned by the chip
    pub fn target(&self) -> u8 {
        self.target
    }

    /// SENS_RES (ATQA)
    pub fn sens_res(&self) -> u16 {
        self.sens_res
    }

    /// SEL_RES (SAK)
    pub fn sel_res(&self) -> u8 {
        self.sel_res
    }

    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    pub fn kind(&self) -> CardKind {
        if self.uid.len() == 4 {
            CardKind::MifareClassic
        } else {
            CardKind::SevenByteUid
        }
    }
}
