// breakout/src/transport/soft_spi.rs

//! Bit-banged SPI (mode 0, LSB first) over four GPIO lines, matching the
//! breakout's SCK/MOSI/MISO/SS wiring.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::spi::{ErrorKind, ErrorType, Operation, SpiDevice};

/// Half clock period; 5 µs gives a 100 kHz clock, well under the chip's 5 MHz limit.
pub const DEFAULT_HALF_PERIOD_NS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoftSpiError {
    /// A GPIO line could not be driven or sampled
    Pin,
}

impl embedded_hal::spi::Error for SoftSpiError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

pub struct SoftSpi<SCK, MOSI, MISO, SS, D> {
    sck: SCK,
    mosi: MOSI,
    miso: MISO,
    ss: SS,
    delay: D,
    half_period_ns: u32,
}

impl<SCK, MOSI, MISO, SS, D> SoftSpi<SCK, MOSI, MISO, SS, D>
where
    SCK: OutputPin,
    MOSI: OutputPin,
    MISO: InputPin,
    SS: OutputPin,
    D: DelayNs,
{
    /// SCK is expected idle low and SS idle high.
    pub fn new(sck: SCK, mosi: MOSI, miso: MISO, ss: SS, delay: D) -> Self {
        Self {
            sck,
            mosi,
            miso,
            ss,
            delay,
            half_period_ns: DEFAULT_HALF_PERIOD_NS,
        }
    }

    pub fn with_half_period_ns(mut self, ns: u32) -> Self {
        self.half_period_ns = ns;
        self
    }

    pub fn release(self) -> (SCK, MOSI, MISO, SS, D) {
        (self.sck, self.mosi, self.miso, self.ss, self.delay)
    }

    fn transfer_byte(&mut self, out: u8) -> Result<u8, SoftSpiError> {
        let mut input = 0u8;
        for bit in 0..8 {
            if (out >> bit) & 1 == 1 {
                self.mosi.set_high().map_err(|_| SoftSpiError::Pin)?;
            } else {
                self.mosi.set_low().map_err(|_| SoftSpiError::Pin)?;
            }
            self.delay.delay_ns(self.half_period_ns);
            self.sck.set_high().map_err(|_| SoftSpiError::Pin)?;
            if self.miso.is_high().map_err(|_| SoftSpiError::Pin)? {
                input |= 1 << bit;
            }
            self.delay.delay_ns(self.half_period_ns);
            self.sck.set_low().map_err(|_| SoftSpiError::Pin)?;
        }
        Ok(input)
    }

    fn run(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), SoftSpiError> {
        for op in operations.iter_mut() {
            match op {
                Operation::Read(buf) => {
                    for b in buf.iter_mut() {
                        *b = self.transfer_byte(0x00)?;
                    }
                }
                Operation::Write(buf) => {
                    for &b in buf.iter() {
                        self.transfer_byte(b)?;
                    }
                }
                Operation::Transfer(read, write) => {
                    for i in 0..read.len().max(write.len()) {
                        let input = self.transfer_byte(write.get(i).copied().unwrap_or(0x00))?;
                        if let Some(r) = read.get_mut(i) {
                            *r = input;
                        }
                    }
                }
                Operation::TransferInPlace(buf) => {
                    for b in buf.iter_mut() {
                        *b = self.transfer_byte(*b)?;
                    }
                }
                Operation::DelayNs(ns) => self.delay.delay_ns(*ns),
            }
        }
        Ok(())
    }
}

impl<SCK, MOSI, MISO, SS, D> ErrorType for SoftSpi<SCK, MOSI, MISO, SS, D> {
    type Error = SoftSpiError;
}

impl<SCK, MOSI, MISO, SS, D> SpiDevice for SoftSpi<SCK, MOSI, MISO, SS, D>
where
    SCK: OutputPin,
    MOSI: OutputPin,
    MISO: InputPin,
    SS: OutputPin,
    D: DelayNs,
{
    fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Self::Error> {
        self.ss.set_low().map_err(|_| SoftSpiError::Pin)?;
        let result = self.run(operations);
        // Always release the chip, even after a failed transfer
        let deselect = self.ss.set_high().map_err(|_| SoftSpiError::Pin);
        result.and(deselect)
    }
}
