// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Serial command relay.
//!
//! Every received byte is echoed back, except the two-byte bootloader trigger `'0' ' '`
//! (`0x30 0x20`). After a `'0'` the relay blocks until the next byte arrives. Receive errors
//! during that wait are skipped, since they carry no byte. There is no timeout on the wait: a
//! host that sends a lone `'0'` stalls the loop until it sends another byte.

use embedded_hal_nb::serial::{Read, Write};
use nb::block;

use crate::boot::Bootloader;

/// First byte of the bootloader trigger (ASCII `'0'`).
pub const JUMP_PREFIX: u8 = 0x30;
/// Second byte of the bootloader trigger (ASCII space).
pub const JUMP_SUFFIX: u8 = 0x20;

/// What a single [`poll`] did.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// No byte was waiting.
    Idle,
    /// A byte was received and written back.
    Echoed(u8),
    /// A trigger prefix was followed by this byte instead of the suffix. Neither is echoed.
    Dropped(u8),
    /// The full trigger was received.
    Jump,
}

/// Run one iteration of the relay loop.
///
/// Returns immediately with [`Outcome::Idle`] if nothing has been received. An error is only
/// returned for the first byte or the echo.
pub fn poll<S>(serial: &mut S) -> Result<Outcome, S::Error>
where
    S: Read<u8> + Write<u8>,
{
    let byte = match serial.read() {
        Ok(b) => b,
        Err(nb::Error::WouldBlock) => return Ok(Outcome::Idle),
        Err(nb::Error::Other(e)) => return Err(e),
    };

    if byte != JUMP_PREFIX {
        block!(serial.write(byte))?;
        return Ok(Outcome::Echoed(byte));
    }

    let suffix = loop {
        if let Ok(b) = serial.read() {
            break b;
        }
    };

    match suffix {
        JUMP_SUFFIX => Ok(Outcome::Jump),
        other => Ok(Outcome::Dropped(other)),
    }
}

/// Relay forever, handing over to `bootloader` once the trigger arrives.
///
/// Receive and transmit errors are ignored and polling continues.
pub fn run<S, B>(serial: &mut S, bootloader: &mut B) -> !
where
    S: Read<u8> + Write<u8>,
    B: Bootloader,
{
    loop {
        if let Ok(Outcome::Jump) = poll(serial) {
            bootloader.enter();
        }
    }
}
