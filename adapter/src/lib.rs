// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # PCIe Adapter Support Firmware
//!
//! Hardware-independent logic for the microcontroller that sits next to the ECP5 on the PCIe
//! adapter board. Everything here is generic over the `embedded-hal` 1.0 traits, so it runs on
//! the STM32F7 through the `board` crate and on the host under test.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`relay`] | Serial echo with the two-byte bootloader trigger |
//! | [`drivers`] | Device-level drivers (Si53xx clock generator) |
//! | [`bringup`] | Fixed clock-generator configuration script |
//! | [`monitor`] | One iteration of the clock firmware's main loop |
//! | [`report`] | Decimal status lines on the serial port |
//! | [`boot`] | Control transfer to the bootloader |
//! | [`config`] | Protocol, bus and timing constants |
//!
//! ## Getting Started
//!
//! Run the host tests:
//!
//! ```bash
//! cargo test
//! ```
//!
//! Flash a firmware (see `.cargo/config.toml`):
//!
//! ```bash
//! cargo flash-pll
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod boot;
pub mod bringup;
pub mod config;
pub mod drivers;
pub mod monitor;
pub mod relay;
pub mod report;

pub use boot::Bootloader;
pub use drivers::Si53xx;
pub use relay::Outcome;
