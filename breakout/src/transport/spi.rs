// breakout/src/transport/spi.rs

//! PN532 SPI framing on top of an `embedded_hal` SPI device.
//!
//! Every exchange starts with an operation byte: DW (0x01) before a frame
//! sent to the chip, SR (0x02) to read the status byte whose bit 0 is the
//! ready flag, DR (0x03) to read a pending frame. The chip shifts bytes LSB
//! first.

use embedded_hal::delay::DelayNs;
use embedded_hal::spi::{Error as _, Operation, SpiDevice};
use log::trace;

use crate::constants::{
    PN532_SPI_DATA_READ, PN532_SPI_DATA_WRITE, PN532_SPI_READY, PN532_SPI_STATUS_READ,
};
use crate::protocol::Frame;
use crate::transport::traits::Transport;
use crate::utils::wait_ready;
use crate::{Error, Result};

/// Bytes clocked out of the chip per data read. Larger than any response
/// this crate asks for (an InDataExchange block read is 26 bytes framed).
pub const SPI_READ_WINDOW: usize = 64;

/// Chip-select low time needed to wake the chip from power-down.
const WAKEUP_NS: u32 = 2_000_000;

pub struct SpiTransport<S, D> {
    spi: S,
    delay: D,
    msb_first_bus: bool,
}

impl<S, D> SpiTransport<S, D>
where
    S: SpiDevice,
    D: DelayNs,
{
    /// Wrap an SPI device that already shifts LSB first (e.g. `SoftSpi`).
    pub fn new(spi: S, delay: D) -> Self {
        Self {
            spi,
            delay,
            msb_first_bus: false,
        }
    }

    /// The bus shifts MSB first: bit-reverse every byte on the wire.
    pub fn with_msb_first_bus(mut self) -> Self {
        self.msb_first_bus = true;
        self
    }

    /// Give back the SPI device and delay.
    pub fn release(self) -> (S, D) {
        (self.spi, self.delay)
    }
}

fn wire(msb_first_bus: bool, byte: u8) -> u8 {
    if msb_first_bus {
        byte.reverse_bits()
    } else {
        byte
    }
}

fn bus_error<E: embedded_hal::spi::Error>(e: E) -> Error {
    Error::Bus(format!("{:?}", e.kind()))
}

fn status_ready<S: SpiDevice>(spi: &mut S, msb_first_bus: bool) -> Result<bool> {
    let cmd = [wire(msb_first_bus, PN532_SPI_STATUS_READ)];
    let mut status = [0u8];
    spi.transaction(&mut [Operation::Write(&cmd), Operation::Read(&mut status)])
        .map_err(bus_error)?;
    Ok(wire(msb_first_bus, status[0]) & PN532_SPI_READY != 0)
}

impl<S, D> Transport for SpiTransport<S, D>
where
    S: SpiDevice,
    D: DelayNs,
{
    fn send(&mut self, data: &[u8]) -> Result<()> {
        trace!("spi >> {}", crate::utils::bytes_to_hex_spaced(data));
        let msb = self.msb_first_bus;
        let buf: Vec<u8> = std::iter::once(PN532_SPI_DATA_WRITE)
            .chain(data.iter().copied())
            .map(|b| wire(msb, b))
            .collect();
        self.spi.write(&buf).map_err(bus_error)
    }

    fn receive(&mut self, timeout_ms: u64) -> Result<Vec<u8>> {
        let Self {
            spi,
            delay,
            msb_first_bus,
        } = self;
        let msb = *msb_first_bus;

        wait_ready(delay, timeout_ms, || status_ready(&mut *spi, msb))?;

        let cmd = [wire(msb, PN532_SPI_DATA_READ)];
        let mut buf = [0u8; SPI_READ_WINDOW];
        spi.transaction(&mut [Operation::Write(&cmd), Operation::Read(&mut buf)])
            .map_err(bus_error)?;
        for b in buf.iter_mut() {
            *b = wire(msb, *b);
        }

        let frame = Frame::locate(&buf)?;
        trace!("spi << {}", crate::utils::bytes_to_hex_spaced(&frame));
        Ok(frame)
    }

    fn wakeup(&mut self) -> Result<()> {
        self.spi
            .transaction(&mut [Operation::DelayNs(WAKEUP_NS)])
            .map_err(bus_error)
    }

    fn reset(&mut self) -> Result<()> {
        // No reset line on the four-wire breakout wiring.
        Ok(())
    }
}
