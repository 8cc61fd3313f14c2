// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Device-Specific Drivers
//!
//! Drivers that sit between the `embedded-hal` bus traits and the firmware logic.
//!
//! ## Existing drivers
//!
//! - [`si53xx`] – Skyworks/Silicon Labs Si53xx clock multiplier, 4-wire SPI

pub mod si53xx;

pub use si53xx::Si53xx;
