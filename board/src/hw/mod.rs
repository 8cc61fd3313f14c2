// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

pub mod delay;
pub mod led;
pub mod pins;
pub mod spi;
pub mod usart;

pub use delay::SysDelay;
pub use led::Led;
pub use pins::BoardPins;
pub use spi::ChipSelect;
pub use spi::SpiBus;
pub use usart::Usart;
