use std::collections::VecDeque;
use std::convert::Infallible;

use breakout::constants::PN532_ACK;
use breakout::protocol::Frame;
use breakout::transport::{SpiTransport, Transport};
use breakout::Error;
use embedded_hal::delay::DelayNs;
use embedded_hal::spi::{ErrorType, Operation, SpiDevice};

/// Plays the chip side of the SPI link. Scripted bytes are logical values;
/// with `msb_first_bus` set they are bit-reversed on the wire like a real
/// LSB-first chip seen through an MSB-first controller.
#[derive(Default)]
struct FakeChip {
    msb_first_bus: bool,
    /// Raw bytes of every Write operation, one entry per operation
    writes: Vec<Vec<u8>>,
    statuses: VecDeque<u8>,
    windows: VecDeque<Vec<u8>>,
    status_reads: usize,
    delays_ns: Vec<u32>,
}

impl FakeChip {
    fn wire(&self, b: u8) -> u8 {
        if self.msb_first_bus {
            b.reverse_bits()
        } else {
            b
        }
    }

    /// Queue a frame: the ready status, then the data window holding it.
    fn respond(&mut self, frame: &[u8]) {
        self.statuses.push_back(0x01);
        self.windows.push_back(frame.to_vec());
    }
}

impl ErrorType for FakeChip {
    type Error = Infallible;
}

impl SpiDevice for FakeChip {
    fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Infallible> {
        let mut op_code = None;
        for op in operations.iter_mut() {
            match op {
                Operation::Write(bytes) => {
                    self.writes.push(bytes.to_vec());
                    op_code = bytes.first().map(|&b| self.wire(b));
                }
                Operation::Read(buf) => match op_code {
                    Some(0x02) => {
                        self.status_reads += 1;
                        let status = self.statuses.pop_front().unwrap_or(0x00);
                        buf[0] = self.wire(status);
                    }
                    Some(0x03) => {
                        let window = self.windows.pop_front().unwrap_or_default();
                        for (i, b) in buf.iter_mut().enumerate() {
                            *b = self.wire(window.get(i).copied().unwrap_or(0x00));
                        }
                    }
                    _ => buf.fill(0x00),
                },
                Operation::DelayNs(ns) => self.delays_ns.push(*ns),
                _ => {}
            }
        }
        Ok(())
    }
}

#[derive(Default)]
struct CountingDelay {
    ms: u32,
}

impl DelayNs for CountingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.ms += ns / 1_000_000;
    }
}

fn firmware_frame() -> Vec<u8> {
    Frame::encode(&[0xD5, 0x03, 0x32, 0x01, 0x06, 0x07]).unwrap()
}

#[test]
fn send_prefixes_data_write() {
    let mut t = SpiTransport::new(FakeChip::default(), CountingDelay::default());
    let frame = Frame::encode(&[0xD4, 0x02]).unwrap();
    t.send(&frame).unwrap();

    let (chip, _) = t.release();
    let mut expected = vec![0x01];
    expected.extend_from_slice(&frame);
    assert_eq!(chip.writes, vec![expected]);
}

#[test]
fn receive_polls_status_then_reads_window() {
    let mut chip = FakeChip::default();
    chip.statuses.extend([0x00, 0x00]);
    chip.respond(&firmware_frame());

    let mut t = SpiTransport::new(chip, CountingDelay::default());
    assert_eq!(t.receive(100).unwrap(), firmware_frame());

    let (chip, delay) = t.release();
    assert_eq!(chip.status_reads, 3);
    assert_eq!(delay.ms, 2);
    assert_eq!(chip.writes.last().unwrap(), &vec![0x03]);
}

#[test]
fn receive_handles_ack_in_window() {
    let mut chip = FakeChip::default();
    chip.respond(&PN532_ACK);
    let mut t = SpiTransport::new(chip, CountingDelay::default());
    assert_eq!(t.receive(10).unwrap(), PN532_ACK.to_vec());
}

#[test]
fn receive_times_out_when_never_ready() {
    let mut t = SpiTransport::new(FakeChip::default(), CountingDelay::default());
    assert!(matches!(t.receive(5), Err(Error::Timeout)));

    let (chip, delay) = t.release();
    assert_eq!(delay.ms, 5);
    assert_eq!(chip.status_reads, 6);
    // No data read was attempted
    assert!(chip.writes.iter().all(|w| w != &vec![0x03]));
}

#[test]
fn msb_first_bus_reverses_every_byte() {
    let chip = FakeChip {
        msb_first_bus: true,
        ..FakeChip::default()
    };
    let mut t = SpiTransport::new(chip, CountingDelay::default()).with_msb_first_bus();

    t.send(&PN532_ACK).unwrap();
    let (mut chip, delay) = t.release();
    assert_eq!(
        chip.writes[0],
        vec![0x80, 0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00]
    );

    chip.writes.clear();
    chip.respond(&firmware_frame());
    let mut t = SpiTransport::new(chip, delay).with_msb_first_bus();
    assert_eq!(t.receive(10).unwrap(), firmware_frame());

    let (chip, _) = t.release();
    assert_eq!(chip.writes[0], vec![0x40]);
    assert_eq!(chip.writes[1], vec![0xC0]);
}

#[test]
fn wakeup_holds_chip_select_for_two_ms() {
    let mut t = SpiTransport::new(FakeChip::default(), CountingDelay::default());
    t.wakeup().unwrap();
    t.reset().unwrap();

    let (chip, _) = t.release();
    assert_eq!(chip.delays_ns, vec![2_000_000]);
    assert!(chip.writes.is_empty());
}

#[test]
fn garbage_window_is_a_frame_error() {
    let mut chip = FakeChip::default();
    chip.statuses.push_back(0x01);
    chip.windows.push_back(vec![0xAA; 64]);
    let mut t = SpiTransport::new(chip, CountingDelay::default());
    assert!(matches!(t.receive(10), Err(Error::FrameFormat(_))));
}
