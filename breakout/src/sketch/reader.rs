// breakout/src/sketch/reader.rs

use crate::card::Card;
use crate::device::{Device, Initialized};
use crate::types::{BlockData, FirmwareVersion, KeyType, MifareKey, Uid};
use crate::Result;

/// The driver operations the poll loop consumes. `Device<Initialized>` is
/// the real implementation; tests script their own.
pub trait Reader {
    /// Establish communication with the chip.
    fn begin(&mut self) -> Result<()>;

    /// Packed firmware identifier; zero means the chip did not answer.
    fn firmware_version(&mut self) -> Result<FirmwareVersion>;

    /// Configure the chip for passive-target reads.
    fn sam_config(&mut self) -> Result<()>;

    /// Wait for an ISO14443A card. `Ok(None)` when none appeared in time.
    fn read_passive_target(&mut self, timeout_ms: u64) -> Result<Option<Card>>;

    fn authenticate_block(
        &mut self,
        uid: &Uid,
        block: u8,
        key_type: KeyType,
        key: &MifareKey,
    ) -> Result<()>;

    fn read_data_block(&mut self, block: u8) -> Result<BlockData>;
}

impl Reader for Device<Initialized> {
    fn begin(&mut self) -> Result<()> {
        self.wakeup()
    }

    fn firmware_version(&mut self) -> Result<FirmwareVersion> {
        Device::firmware_version(self)
    }

    fn sam_config(&mut self) -> Result<()> {
        Device::sam_config(self)
    }

    fn read_passive_target(&mut self, timeout_ms: u64) -> Result<Option<Card>> {
        Device::read_passive_target(self, timeout_ms)
    }

    fn authenticate_block(
        &mut self,
        uid: &Uid,
        block: u8,
        key_type: KeyType,
        key: &MifareKey,
    ) -> Result<()> {
        self.mifare_authenticate_block(uid, block, key_type, key)
    }

    fn read_data_block(&mut self, block: u8) -> Result<BlockData> {
        self.mifare_read_block(block)
    }
}
