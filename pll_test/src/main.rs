// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Si53xx bring-up: configure the clock generator once, then print its status register on
//! USART3 forever while relaying serial traffic, jumping into the bootloader on `'0' ' '`.

#![no_main]
#![no_std]

use cortex_m_rt::entry;
use panic_halt as _;

use hal::{
    pac,
    prelude::*,
    serial::{Config, Serial},
    spi::Spi,
};
use stm32f7xx_hal as hal;

use adapter::{bringup, config, monitor, Bootloader, Si53xx};
use board::boot::JumpTo;
use board::hw::{spi::hal_mode, BoardPins, ChipSelect, Led, SpiBus, SysDelay, Usart};

#[entry]
fn main() -> ! {
    let dp = pac::Peripherals::take().unwrap();
    let cp = cortex_m::Peripherals::take().unwrap();

    // Clocks
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();
    let mut apb2 = rcc.apb2;

    // GPIO
    let pins = BoardPins::new(dp.GPIOA, dp.GPIOB, dp.GPIOD, dp.GPIOE);

    // SPI1 (PA5/PA6/PA7), CS = D10 -> PD14
    let spi1 = Spi::new(dp.SPI1, (pins.spi1.sck, pins.spi1.miso, pins.spi1.mosi)).enable::<u8>(
        hal_mode(config::SPI_MODE),
        (config::SPI_FREQ_HZ / 1_000).kHz(),
        &clocks,
        &mut apb2,
    );
    let mut spi_bus = SpiBus::new(spi1);
    let cs = ChipSelect::active_low(pins.spi1.cs);

    // USART3 via ST-LINK (PD8/PD9)
    let usart_cfg = Config {
        baud_rate: config::SERIAL_BAUD.bps(),
        ..Default::default()
    };
    let serial = Serial::new(dp.USART3, (pins.usart3.tx, pins.usart3.rx), &clocks, usart_cfg);
    let mut usart = Usart::new(serial);

    // D5
    let mut aux = pins.aux;
    aux.set_low();

    // SysTick delay
    let mut delay = SysDelay::new(cp.SYST, clocks.sysclk().raw());

    let mut si53xx = Si53xx::new(cs).unwrap_or_else(|e| match e {});
    let _ = bringup::bring_up(&mut si53xx, &mut spi_bus, &mut delay);

    let mut led = Led::active_high(pins.leds.green);
    led.on();

    let mut bootloader = JumpTo::new(config::BOOTLOADER_ADDR);
    loop {
        if monitor::step(&mut si53xx, &mut spi_bus, &mut usart).is_jump() {
            bootloader.enter();
        }
    }
}
