// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Main-loop body of the clock firmware: print the Si53xx status register, then service the
//! serial relay once.

use embedded_hal::digital::{self, OutputPin};
use embedded_hal::spi::{self, SpiBus};
use embedded_hal_nb::serial::{self, Read, Write};

use crate::config::STATUS_REGISTER;
use crate::drivers::si53xx::{self, Si53xx};
use crate::relay::{self, Outcome};
use crate::report;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error<D, S> {
    /// Register access on the clock generator failed.
    Device(D),
    /// The serial port failed.
    Serial(S),
}

/// Error from reading or printing the status register, for a given chip-select, bus and serial
/// port.
pub type StatusError<CS, SPI, S> = Error<
    si53xx::Error<<SPI as spi::ErrorType>::Error, <CS as digital::ErrorType>::Error>,
    <S as serial::ErrorType>::Error,
>;

/// What one iteration of the monitor loop did. The two halves fail independently.
#[derive(Debug)]
pub struct Step<D, S> {
    /// The status value that was printed.
    pub status: Result<u8, D>,
    /// The relay poll that followed.
    pub relay: Result<Outcome, S>,
}

impl<D, S> Step<D, S> {
    /// The bootloader trigger was received.
    #[inline]
    pub fn is_jump(&self) -> bool {
        matches!(self.relay, Ok(Outcome::Jump))
    }
}

/// Run one iteration of the monitor loop.
///
/// The relay is always polled, even if the status read or print failed, so the bootloader
/// trigger stays reachable when the clock generator does not answer.
pub fn step<CS, SPI, S>(
    dev: &mut Si53xx<CS>,
    spi: &mut SPI,
    serial: &mut S,
) -> Step<StatusError<CS, SPI, S>, S::Error>
where
    CS: OutputPin,
    SPI: SpiBus<u8>,
    S: Read<u8> + Write<u8>,
{
    let status = match dev.read_register(spi, STATUS_REGISTER) {
        Ok(v) => report::println_u8(serial, v)
            .map(|()| v)
            .map_err(Error::Serial),
        Err(e) => Err(Error::Device(e)),
    };

    Step {
        status,
        relay: relay::poll(serial),
    }
}
