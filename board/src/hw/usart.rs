// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! USART abstraction layer.
//!
//! Wraps both halves of a HAL serial port behind the `embedded-hal-nb` serial traits, which is
//! what the relay and status report are written against.
//!
//! To access the terminal on the host machine, connect to the ST-LINK USB port and use
//! ```text
//! $ screen /dev/ttyACM0 115200
//! ```
//!
//! To close the debug terminal, press `Ctrl+A` then `Ctrl+\` then `y`.

use embedded_hal_nb::serial::{self as nb_serial, ErrorKind};

use stm32f7xx_hal::{
    prelude::*,
    serial::{self, Instance, Pins, Rx, Serial, Tx},
};

/// Receive or transmit failure on the port.
#[derive(Debug)]
pub enum UartError {
    Rx(serial::Error),
    Tx,
}

impl nb_serial::Error for UartError {
    fn kind(&self) -> ErrorKind {
        #[allow(unreachable_patterns)]
        match self {
            UartError::Rx(serial::Error::Overrun) => ErrorKind::Overrun,
            UartError::Rx(serial::Error::Framing) => ErrorKind::FrameFormat,
            UartError::Rx(serial::Error::Parity) => ErrorKind::Parity,
            UartError::Rx(serial::Error::Noise) => ErrorKind::Noise,
            _ => ErrorKind::Other,
        }
    }
}

pub struct Usart<U: Instance> {
    tx: Tx<U>,
    rx: Rx<U>,
}

impl<U: Instance> Usart<U> {
    pub fn new<PINS: Pins<U>>(serial: Serial<U, PINS>) -> Self {
        let (tx, rx) = serial.split();
        Self { tx, rx }
    }
}

impl<U: Instance> nb_serial::ErrorType for Usart<U> {
    type Error = UartError;
}

impl<U: Instance> nb_serial::Read<u8> for Usart<U> {
    #[inline]
    fn read(&mut self) -> nb::Result<u8, UartError> {
        self.rx.read().map_err(|e| e.map(UartError::Rx))
    }
}

impl<U: Instance> nb_serial::Write<u8> for Usart<U> {
    #[inline]
    fn write(&mut self, word: u8) -> nb::Result<(), UartError> {
        self.tx.write(word).map_err(|e| e.map(|_| UartError::Tx))
    }

    /// Block until the hardware TX FIFO/drain is flushed.
    #[inline]
    fn flush(&mut self) -> nb::Result<(), UartError> {
        self.tx.flush().map_err(|e| e.map(|_| UartError::Tx))
    }
}
