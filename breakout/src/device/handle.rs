// breakout/src/device/handle.rs

use std::marker::PhantomData;

use log::{debug, trace};

use crate::card::Card;
use crate::constants::{PN532_ACK, PN532_ERROR_FRAME, PN532_MIFARE_ISO14443A};
use crate::protocol::commands::mifare;
use crate::protocol::{codec, Command, Frame, Response};
use crate::transport::Transport;
use crate::types::{BlockData, FirmwareVersion, KeyType, MifareKey, Uid};
use crate::utils::{ACK_TIMEOUT_MS, DEFAULT_READ_TIMEOUT_MS};
use crate::{Error, Result};

/// Logical target number the chip assigns to the single listed card.
const TARGET: u8 = 1;

/// Type-state markers
pub struct Uninitialized;
pub struct Initialized;

/// Device handle that enforces initialization state at compile time.
pub struct Device<State = Uninitialized> {
    transport: Box<dyn Transport>,
    ack_timeout_ms: u64,
    response_timeout_ms: u64,
    _state: PhantomData<State>,
}

impl Device<Uninitialized> {
    /// Create a Device from an existing Transport instance (SPI, or a
    /// MockTransport in tests) with default timeouts.
    pub fn new_with_transport(transport: Box<dyn Transport>) -> Self {
        Self::with_timeouts(transport, ACK_TIMEOUT_MS, DEFAULT_READ_TIMEOUT_MS)
    }

    pub(crate) fn with_timeouts(
        transport: Box<dyn Transport>,
        ack_timeout_ms: u64,
        response_timeout_ms: u64,
    ) -> Self {
        Self {
            transport,
            ack_timeout_ms,
            response_timeout_ms,
            _state: PhantomData,
        }
    }

    /// Reset the transport and hand back an initialized Device. No bytes
    /// are exchanged with the chip yet; see `Device::wakeup`.
    pub fn initialize(self) -> Result<Device<Initialized>> {
        let mut this = self;
        this.transport.reset()?;

        Ok(Device {
            transport: this.transport,
            ack_timeout_ms: this.ack_timeout_ms,
            response_timeout_ms: this.response_timeout_ms,
            _state: PhantomData,
        })
    }
}

impl<State> Device<State> {
    pub fn ack_timeout_ms(&self) -> u64 {
        self.ack_timeout_ms
    }

    pub fn response_timeout_ms(&self) -> u64 {
        self.response_timeout_ms
    }
}

impl Device<Initialized> {
    /// Send a command, wait for its ACK, then receive and decode the
    /// response within `timeout_ms`.
    pub fn execute(&mut self, cmd: Command, timeout_ms: u64) -> Result<Response> {
        self.send_command(&cmd)?;
        let raw = self.transport.receive(timeout_ms)?;
        trace!("pn532 << {}", crate::utils::bytes_to_hex_spaced(&raw));
        codec::decode_response_frame(cmd.command_code(), &raw)
    }

    fn send_command(&mut self, cmd: &Command) -> Result<()> {
        let frame = codec::encode_command_frame(cmd)?;
        debug!("pn532 command {:#04x}", cmd.command_code());
        trace!("pn532 >> {}", crate::utils::bytes_to_hex_spaced(&frame));
        self.transport.send(&frame)?;

        let ack = self.transport.receive(self.ack_timeout_ms)?;
        if Frame::is_ack(&ack) {
            Ok(())
        } else if Frame::is_nack(&ack) {
            Err(Error::NotAcknowledged)
        } else if ack == PN532_ERROR_FRAME {
            Err(Error::ApplicationError)
        } else {
            Err(Error::FrameFormat("expected ack frame".into()))
        }
    }

    /// Wake the chip from power-down.
    pub fn wakeup(&mut self) -> Result<()> {
        self.transport.wakeup()
    }

    pub fn firmware_version(&mut self) -> Result<FirmwareVersion> {
        match self.execute(Command::GetFirmwareVersion, self.response_timeout_ms)? {
            Response::FirmwareVersion(v) => Ok(v),
            other => Err(unexpected(&other)),
        }
    }

    /// Configure the SAM for normal mode so passive targets can be listed.
    pub fn sam_config(&mut self) -> Result<()> {
        match self.execute(Command::sam_normal(), self.response_timeout_ms)? {
            Response::SamConfiguration => Ok(()),
            other => Err(unexpected(&other)),
        }
    }

    /// Wait up to `timeout_ms` for one ISO14443A target. When nothing shows
    /// up the pending command is aborted and `Ok(None)` returned.
    pub fn read_passive_target(&mut self, timeout_ms: u64) -> Result<Option<Card>> {
        let cmd = Command::InListPassiveTarget {
            max_targets: 1,
            brty: PN532_MIFARE_ISO14443A,
        };
        self.send_command(&cmd)?;

        let raw = match self.transport.receive(timeout_ms) {
            Ok(raw) => raw,
            Err(Error::Timeout) => {
                debug!("no target within {timeout_ms} ms, aborting");
                // An ACK from the host cancels the command in progress
                self.transport.send(&PN532_ACK)?;
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        match codec::decode_response_frame(cmd.command_code(), &raw)? {
            Response::InListPassiveTarget { targets } => Ok(targets.into_iter().next()),
            other => Err(unexpected(&other)),
        }
    }

    /// Authenticate the sector holding `block` against the listed target.
    pub fn mifare_authenticate_block(
        &mut self,
        uid: &Uid,
        block: u8,
        key_type: KeyType,
        key: &MifareKey,
    ) -> Result<()> {
        let data = mifare::encode_authenticate(key_type, block, key, uid);
        let (status, _) = self.data_exchange(data)?;
        if status != 0 {
            return Err(Error::AuthenticationFailed { block, status });
        }
        Ok(())
    }

    /// Read one 16-byte block from an authenticated sector.
    pub fn mifare_read_block(&mut self, block: u8) -> Result<BlockData> {
        let (status, data) = self.data_exchange(mifare::encode_read(block))?;
        if status != 0 {
            return Err(Error::CardStatus { status });
        }
        BlockData::try_from(&data[..])
    }

    fn data_exchange(&mut self, data: Vec<u8>) -> Result<(u8, Vec<u8>)> {
        let cmd = Command::InDataExchange {
            target: TARGET,
            data,
        };
        match self.execute(cmd, self.response_timeout_ms)? {
            Response::InDataExchange { status, data } => Ok((status, data)),
            other => Err(unexpected(&other)),
        }
    }
}

fn unexpected(resp: &Response) -> Error {
    Error::FrameFormat(format!("unexpected response: {resp:?}"))
}
