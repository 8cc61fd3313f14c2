// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Status lines on the debug serial port.

use embedded_hal_nb::serial::Write;
use nb::block;

/// Write `value` in decimal followed by CRLF, blocking on each byte.
pub fn println_u8<W: Write<u8>>(serial: &mut W, value: u8) -> Result<(), W::Error> {
    let mut buf = itoa::Buffer::new();
    for &b in buf.format(value).as_bytes().iter().chain(b"\r\n") {
        block!(serial.write(b))?;
    }
    Ok(())
}
