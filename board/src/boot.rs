// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Jump into the resident bootloader.
//!
//! Not portable, and not reachable on a stock STM32F767 memory map. There, `0x0000_0000` to
//! `0x0000_3FFF` is ITCM RAM and `0x7000` sits in a reserved hole, so a branch to
//! [`config::BOOTLOADER_ADDR`](adapter::config::BOOTLOADER_ADDR) bus-faults unless something
//! (the boot loader image or an MPU/remap setup) has placed code there first. A bootloader that
//! lives in flash needs its real address, e.g. `0x0800_0000 + offset`, passed to
//! [`JumpTo::new`]. Nothing checks that code is present at the target.

use adapter::Bootloader;

/// Hands the CPU to code at a fixed address.
pub struct JumpTo {
    address: usize,
}

impl JumpTo {
    pub const fn new(address: usize) -> Self {
        Self { address }
    }
}

impl Bootloader for JumpTo {
    /// Branch straight to `address` in Thumb state. Stack, interrupts and peripherals are left
    /// exactly as they are.
    #[cfg(not(feature = "vector-table-jump"))]
    fn enter(&mut self) -> ! {
        // SAFETY: none that can be checked here. The address is trusted to hold Thumb code
        // that never returns.
        unsafe {
            let entry: extern "C" fn() -> ! = core::mem::transmute(self.address | 1);
            entry()
        }
    }

    /// Treat `address` as a vector table: load MSP and the reset vector from it and jump.
    #[cfg(feature = "vector-table-jump")]
    fn enter(&mut self) -> ! {
        // SAFETY: the address is trusted to hold a valid vector table.
        unsafe { cortex_m::asm::bootload(self.address as *const u32) }
    }
}
