// breakout/src/main.rs

//! Reads block 4 of Mifare Classic cards presented to a PN532 breakout wired
//! to a Raspberry Pi over bit-banged SPI (see `config::BREAKOUT_PINS`).
//!
//! Run with `RUST_LOG=breakout=debug` to see driver traffic.

use anyhow::Context;
use rppal::gpio::Gpio;
use rppal::hal::Delay;

use breakout::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let pins = BREAKOUT_PINS;
    let gpio = Gpio::new().context("opening GPIO controller")?;
    let sck = gpio
        .get(pins.sck)
        .with_context(|| format!("claiming SCK on GPIO {}", pins.sck))?
        .into_output_low();
    let mosi = gpio
        .get(pins.mosi)
        .with_context(|| format!("claiming MOSI on GPIO {}", pins.mosi))?
        .into_output_low();
    let miso = gpio
        .get(pins.miso)
        .with_context(|| format!("claiming MISO on GPIO {}", pins.miso))?
        .into_input();
    let ss = gpio
        .get(pins.ss)
        .with_context(|| format!("claiming SS on GPIO {}", pins.ss))?
        .into_output_high();

    let spi = SoftSpi::new(sck, mosi, miso, ss, Delay::new());
    let transport = SpiTransport::new(spi, Delay::new());
    let device = Device::new_with_transport(Box::new(transport)).initialize()?;

    let mut sketch = Sketch::new(
        device,
        std::io::stdout(),
        Delay::new(),
        SketchConfig::default(),
    );
    sketch.run()
}
