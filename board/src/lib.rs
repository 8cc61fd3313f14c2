// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # PCIe Adapter Board Support
//!
//! STM32F767ZI (NUCLEO-F767ZI) support for the adapter firmwares. The wrappers in [`hw`]
//! expose the `stm32f7xx-hal` peripherals through the `embedded-hal` 1.0 traits that the
//! `adapter` crate is written against.
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`hw`] | MCU-level wrappers around USART, SPI, GPIO and SysTick |
//! | [`boot`] | Jump into the resident bootloader |

#![no_std]

pub mod boot;
pub mod hw;
