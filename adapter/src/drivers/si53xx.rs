// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Si53xx any-frequency clock multiplier, SPI register access.
//!
//! Every register access is two bus phases, each framed by its own chip-select pulse:
//!
//! 1. `SET_ADDR` + register address
//! 2. `WRITE` + value, or `READ` + dummy byte (the register value is clocked out during the
//!    dummy)
//!
//! The bus must already be configured for the device: 1 MHz, MSB first, mode 3 (see page 91 of
//! the Si53xx reference manual).

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

/// Instruction bytes sent at the start of each phase.
pub mod opcode {
    pub const SET_ADDR: u8 = 0b0000_0000;
    pub const WRITE: u8 = 0b0100_0000;
    pub const READ: u8 = 0b1000_0000;
}

// Register addresses
pub mod reg {
    /// Input clock autoselection mode (`AUTOSEL_REG`).
    pub const AUTOSEL: u8 = 4;
    /// Output signal format and output disables (`SFOUT`).
    pub const SFOUT: u8 = 6;
    /// NC1_LS output divider, low byte.
    pub const NC1_LS_LO: u8 = 33;
    /// NC2_LS output divider, low byte.
    pub const NC2_LS_LO: u8 = 36;
    /// N2_LS feedback divider, middle byte.
    pub const N2_LS_MID: u8 = 41;
    /// N2_LS feedback divider, low byte.
    pub const N2_LS_LO: u8 = 42;
    /// N31 input divider (CKIN1), low byte.
    pub const N31_LO: u8 = 45;
    /// N32 input divider (CKIN2), low byte.
    pub const N32_LO: u8 = 48;
    /// Part number low nibble and device revision.
    pub const PARTNUM_REVID: u8 = 135;
    /// Register reset and internal calibration triggers.
    pub const RST_ICAL: u8 = 136;
}

/// `RST_ICAL` bit that resets all registers to their defaults.
pub const RST_REG: u8 = 1 << 7;
/// `RST_ICAL` bit that starts an internal calibration.
pub const ICAL: u8 = 1 << 6;

/// Failure of a single register access.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error<S, P> {
    /// The SPI bus reported an error.
    Spi(S),
    /// The chip-select pin could not be driven.
    Pin(P),
}

/// Si53xx driver bound to a chip-select pin.
///
/// The SPI bus is passed in as &mut to each method so that other devices can share the same bus.
pub struct Si53xx<CS> {
    cs: CS,
}

impl<CS: OutputPin> Si53xx<CS> {
    /// Construct a driver and drive chip-select to its idle (high) level.
    pub fn new(mut cs: CS) -> Result<Self, CS::Error> {
        cs.set_high()?;
        Ok(Self { cs })
    }

    /// Release the chip-select pin.
    pub fn free(self) -> CS {
        self.cs
    }

    /// Clock one instruction byte and one data byte inside a single chip-select pulse, and
    /// return the byte received alongside the data byte.
    ///
    /// Chip-select is released even if the transfer fails.
    fn phase<SPI>(
        &mut self,
        spi: &mut SPI,
        instruction: u8,
        data: u8,
    ) -> Result<u8, Error<SPI::Error, CS::Error>>
    where
        SPI: SpiBus<u8>,
    {
        let mut buf = [instruction, data];

        self.cs.set_low().map_err(Error::Pin)?;
        let res = spi.transfer_in_place(&mut buf).and_then(|()| spi.flush());
        self.cs.set_high().map_err(Error::Pin)?;

        res.map_err(Error::Spi)?;
        Ok(buf[1])
    }

    /// Write `value` into register `addr`.
    pub fn write_register<SPI>(
        &mut self,
        spi: &mut SPI,
        addr: u8,
        value: u8,
    ) -> Result<(), Error<SPI::Error, CS::Error>>
    where
        SPI: SpiBus<u8>,
    {
        self.phase(spi, opcode::SET_ADDR, addr)?;
        self.phase(spi, opcode::WRITE, value)?;
        Ok(())
    }

    /// Read the current contents of register `addr`.
    pub fn read_register<SPI>(
        &mut self,
        spi: &mut SPI,
        addr: u8,
    ) -> Result<u8, Error<SPI::Error, CS::Error>>
    where
        SPI: SpiBus<u8>,
    {
        self.phase(spi, opcode::SET_ADDR, addr)?;
        self.phase(spi, opcode::READ, 0x00)
    }
}
