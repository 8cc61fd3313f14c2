// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Serial passthrough: echo everything on USART3 until `'0' ' '` arrives, then jump into the
//! bootloader.

#![no_main]
#![no_std]

use cortex_m_rt::entry;
use panic_halt as _;

use hal::{
    pac,
    prelude::*,
    serial::{Config, Serial},
};
use stm32f7xx_hal as hal;

use adapter::{config, relay};
use board::boot::JumpTo;
use board::hw::{Led, Usart};

#[entry]
fn main() -> ! {
    // Peripherals
    let dp = pac::Peripherals::take().unwrap();

    // Clocks
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();

    // GPIO. Only the serial pins and LD1 are touched.
    let gpiob = dp.GPIOB.split();
    let gpiod = dp.GPIOD.split();

    // USART3 via ST-LINK (PD8/PD9)
    let tx = gpiod.pd8.into_alternate::<7>();
    let rx = gpiod.pd9.into_alternate::<7>();
    let usart_cfg = Config {
        baud_rate: config::SERIAL_BAUD.bps(),
        ..Default::default()
    };
    let serial = Serial::new(dp.USART3, (tx, rx), &clocks, usart_cfg);
    let mut usart = Usart::new(serial);

    let mut led = Led::active_high(gpiob.pb0);
    led.on();

    relay::run(&mut usart, &mut JumpTo::new(config::BOOTLOADER_ADDR))
}
