// breakout/src/sketch/mod.rs

//! The breakout read sequence: a one-time initializer followed by an
//! endless poll loop, reporting to a line-oriented console.

mod reader;

pub use reader::Reader;

use std::fmt;
use std::io::Write;

use embedded_hal::delay::DelayNs;
use log::{debug, warn};

use crate::card::CardKind;
use crate::config::{SketchConfig, BANNER};
use crate::types::{first_block_of, sector_of, BlockData, KeyType, MifareKey, Uid};
use crate::utils::{bytes_to_hex_prefixed, hex_char_dump};

/// Where the sketch is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Setup,
    Polling,
    /// The chip never answered. Terminal: no further reader calls happen.
    Halted,
}

/// Result of one poll loop iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    NoCard,
    /// A card was found but its UID is not a 4-byte Mifare Classic one
    Unsupported(Uid),
    AuthenticationFailed(Uid),
    ReadFailed(Uid),
    BlockRead { uid: Uid, data: BlockData },
}

pub struct Sketch<R, W, D> {
    reader: R,
    console: W,
    delay: D,
    config: SketchConfig,
    phase: Phase,
}

impl<R, W, D> Sketch<R, W, D>
where
    R: Reader,
    W: Write,
    D: DelayNs,
{
    pub fn new(reader: R, console: W, delay: D, config: SketchConfig) -> Self {
        Self {
            reader,
            console,
            delay,
            config,
            phase: Phase::Setup,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    pub fn console(&self) -> &W {
        &self.console
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Run the initializer, then poll forever. Never returns; a missing
    /// chip parks the thread for good.
    pub fn run(&mut self) -> ! {
        loop {
            if self.phase == Phase::Halted {
                halt();
            }
            self.step();
        }
    }

    /// Advance by one unit of work: the initializer while in `Setup`, one
    /// poll iteration while `Polling`, nothing once `Halted`.
    pub fn step(&mut self) -> Option<Outcome> {
        match self.phase {
            Phase::Setup => {
                self.setup();
                None
            }
            Phase::Polling => Some(self.poll_once()),
            Phase::Halted => None,
        }
    }

    /// One-time bring-up. Returns the phase reached.
    pub fn setup(&mut self) -> Phase {
        if self.phase != Phase::Setup {
            return self.phase;
        }

        self.say(format_args!("{BANNER}"));
        self.say(format_args!("Attempting to locate chip"));

        let version = match self.reader.begin().and_then(|_| self.reader.firmware_version()) {
            Ok(v) if v.is_present() => v,
            Ok(_) => return self.halt_missing_chip(),
            Err(e) => {
                debug!("firmware version query failed: {e}");
                return self.halt_missing_chip();
            }
        };

        self.say(format_args!("Found chip PN5{:02X}", version.ic()));
        self.say(format_args!(
            "Firmware version: {}.{}",
            version.major(),
            version.minor()
        ));

        if let Err(e) = self.reader.sam_config() {
            warn!("SAM configuration failed: {e}");
            return self.halt_missing_chip();
        }

        self.say(format_args!("Waiting for an ISO14443A Card ..."));
        self.phase = Phase::Polling;
        self.phase
    }

    fn halt_missing_chip(&mut self) -> Phase {
        self.say(format_args!("Didn't find PN532 board"));
        self.say(format_args!("Ascertain all physical connections"));
        self.phase = Phase::Halted;
        self.phase
    }

    fn poll_once(&mut self) -> Outcome {
        let card = match self.reader.read_passive_target(self.config.poll_timeout_ms) {
            Ok(Some(card)) => card,
            Ok(None) => return Outcome::NoCard,
            Err(e) => {
                debug!("poll failed: {e}");
                return Outcome::NoCard;
            }
        };
        let uid = *card.uid();

        self.say(format_args!("Splendid! Found an ISO14443A card"));
        self.say(format_args!("  UID Length: {} bytes", uid.len()));
        self.say(format_args!("  UID Value:{}", bytes_to_hex_prefixed(uid.as_bytes())));

        if card.kind() != CardKind::MifareClassic {
            return Outcome::Unsupported(uid);
        }

        let SketchConfig {
            block,
            key_type,
            key,
            settle_delay_ms,
            ..
        } = self.config;

        self.say(format_args!("Mifare Card obtained (4 byte UID)"));
        self.say(format_args!(
            "Trying to authenticate block {block} with {}KEY{} value",
            if key == MifareKey::DEFAULT { "default " } else { "" },
            key_slot(key_type)
        ));

        if let Err(e) = self.reader.authenticate_block(&uid, block, key_type, &key) {
            debug!("authentication failed: {e}");
            self.say(format_args!("Ooops ... authentication failed: Try another key?"));
            return Outcome::AuthenticationFailed(uid);
        }

        let sector = sector_of(block);
        let first = first_block_of(sector);
        self.say(format_args!(
            "Sector {sector} (Blocks {first}..{}) has been authenticated",
            first + 3
        ));

        let data = match self.reader.read_data_block(block) {
            Ok(data) => data,
            Err(e) => {
                debug!("block read failed: {e}");
                self.say(format_args!(
                    "Ooops ... unable to read the requested block.  Try another key?"
                ));
                return Outcome::ReadFailed(uid);
            }
        };

        self.say(format_args!("Reading Block {block}:"));
        self.say(format_args!("{}", hex_char_dump(data.as_bytes())));

        self.delay.delay_ms(settle_delay_ms);
        Outcome::BlockRead { uid, data }
    }

    fn say(&mut self, line: fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.console, "{line}") {
            warn!("console write failed: {e}");
        }
    }
}

fn key_slot(key_type: KeyType) -> char {
    match key_type {
        KeyType::A => 'A',
        KeyType::B => 'B',
    }
}

fn halt() -> ! {
    loop {
        std::thread::park();
    }
}
