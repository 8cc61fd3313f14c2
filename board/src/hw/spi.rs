// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Serial Peripheral Interface (SPI) abstraction layer.
//!
//! - `SpiBus` wraps a configured HAL SPI instance with 8-bit words and implements
//!   [`embedded_hal::spi::SpiBus`].
//! - `ChipSelect` is an active-low GPIO output wrapper for manual CS control, implementing
//!   [`embedded_hal::digital::OutputPin`].

use core::convert::Infallible;

use embedded_hal::{digital, spi::ErrorKind};
use stm32f7xx_hal::{
    gpio::{self, Output, PinState, PushPull},
    prelude::*,
    spi::{self, Enabled, Phase, Polarity, Spi},
};

/// Translate an `embedded-hal` SPI mode into the HAL's configuration type.
pub fn hal_mode(mode: embedded_hal::spi::Mode) -> spi::Mode {
    spi::Mode {
        polarity: match mode.polarity {
            embedded_hal::spi::Polarity::IdleLow => Polarity::IdleLow,
            embedded_hal::spi::Polarity::IdleHigh => Polarity::IdleHigh,
        },
        phase: match mode.phase {
            embedded_hal::spi::Phase::CaptureOnFirstTransition => Phase::CaptureOnFirstTransition,
            embedded_hal::spi::Phase::CaptureOnSecondTransition => {
                Phase::CaptureOnSecondTransition
            }
        },
    }
}

/// HAL SPI error, tagged with an `embedded-hal` error kind.
#[derive(Debug)]
pub struct BusError(pub spi::Error);

impl embedded_hal::spi::Error for BusError {
    fn kind(&self) -> ErrorKind {
        #[allow(unreachable_patterns)]
        match self.0 {
            spi::Error::Overrun => ErrorKind::Overrun,
            spi::Error::ModeFault => ErrorKind::ModeFault,
            spi::Error::FrameFormat => ErrorKind::FrameFormat,
            _ => ErrorKind::Other,
        }
    }
}

/// Wrapper around an enabled HAL SPI instance (8-bit words).
pub struct SpiBus<I, P> {
    spi: Spi<I, P, Enabled<u8>>,
}

impl<I, P> SpiBus<I, P>
where
    I: spi::Instance,
    P: spi::Pins<I>,
{
    pub fn new(spi: Spi<I, P, Enabled<u8>>) -> Self {
        Self { spi }
    }

    /// Perform a blocking, full-duplex transfer of one byte.
    pub fn transfer_byte(&mut self, byte: u8) -> Result<u8, BusError> {
        let mut tmp = [byte];
        self.spi.transfer(&mut tmp).map_err(BusError)?;
        Ok(tmp[0])
    }
}

impl<I, P> embedded_hal::spi::ErrorType for SpiBus<I, P> {
    type Error = BusError;
}

impl<I, P> embedded_hal::spi::SpiBus<u8> for SpiBus<I, P>
where
    I: spi::Instance,
    P: spi::Pins<I>,
{
    fn read(&mut self, words: &mut [u8]) -> Result<(), BusError> {
        for w in words.iter_mut() {
            *w = self.transfer_byte(0x00)?;
        }
        Ok(())
    }

    fn write(&mut self, words: &[u8]) -> Result<(), BusError> {
        for &w in words {
            self.transfer_byte(w)?;
        }
        Ok(())
    }

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), BusError> {
        for i in 0..read.len().max(write.len()) {
            let b = self.transfer_byte(write.get(i).copied().unwrap_or(0x00))?;
            if let Some(r) = read.get_mut(i) {
                *r = b;
            }
        }
        Ok(())
    }

    fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), BusError> {
        for w in words.iter_mut() {
            *w = self.transfer_byte(*w)?;
        }
        Ok(())
    }

    /// Byte transfers block until the received byte is in, so there is nothing left in flight.
    fn flush(&mut self) -> Result<(), BusError> {
        Ok(())
    }
}

/// Manual chip-select line, active-low, generic over any GPIO pin.
pub struct ChipSelect<const P: char, const N: u8> {
    pin: gpio::Pin<P, N, Output<PushPull>>,
}

impl<const P: char, const N: u8> ChipSelect<P, N> {
    /// Create an active-low chip select and set to the inactive state (i.e., high).
    pub fn active_low<MODE>(pin: gpio::Pin<P, N, MODE>) -> Self {
        let mut pin = pin.into_push_pull_output();
        pin.set_state(PinState::High);
        Self { pin }
    }
}

impl<const P: char, const N: u8> digital::ErrorType for ChipSelect<P, N> {
    type Error = Infallible;
}

impl<const P: char, const N: u8> digital::OutputPin for ChipSelect<P, N> {
    /// Assert the chip select.
    #[inline]
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.pin.set_low();
        Ok(())
    }

    /// Deassert the chip select.
    #[inline]
    fn set_high(&mut self) -> Result<(), Infallible> {
        self.pin.set_high();
        Ok(())
    }
}
