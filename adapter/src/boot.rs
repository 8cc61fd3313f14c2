// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Control transfer to the resident bootloader.
//!
//! Jumping to a hard-coded address has no portable form, so the firmware logic only sees this
//! trait. The board crate provides the implementation for the target's memory layout.

/// Something that can hand the CPU over to a bootloader. Never returns.
pub trait Bootloader {
    fn enter(&mut self) -> !;
}
