// breakout/src/transport/mod.rs

pub mod mock;
pub mod soft_spi;
pub mod spi;
pub mod traits;

pub use mock::MockTransport;
pub use soft_spi::{SoftSpi, SoftSpiError};
pub use spi::SpiTransport;
pub use traits::Transport;
