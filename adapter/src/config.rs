// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Protocol, bus and timing constants shared by both firmwares.

use embedded_hal::spi::{Mode, MODE_3};

/// Debug serial baud rate.
pub const SERIAL_BAUD: u32 = 115_200;

/// Si53xx SPI clock. See page 91 of the Si53xx reference manual.
pub const SPI_FREQ_HZ: u32 = 1_000_000;

/// Si53xx SPI mode (CPOL=1, CPHA=1), MSB first.
pub const SPI_MODE: Mode = MODE_3;

/// Entry point of the resident bootloader.
///
/// Only valid on a part whose memory map puts the bootloader there; see `board::boot`.
pub const BOOTLOADER_ADDR: usize = 0x7000;

/// Time the clock generator needs after a register reset.
pub const RESET_SETTLE_MS: u32 = 100;

/// Register printed on every iteration of the clock firmware's main loop.
pub const STATUS_REGISTER: u8 = crate::drivers::si53xx::reg::PARTNUM_REVID;
