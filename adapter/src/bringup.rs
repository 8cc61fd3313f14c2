// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Si53xx start-up configuration for the PCIe adapter.
//!
//! With a 16 MHz reference on CKIN the PLL runs at 4992 MHz. Out1 feeds the ECP5 with 60 MHz
//! LVDS, out2 provides 10 MHz, and the SERDES output stays disabled. Register contents are not
//! read back or checked.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::config::RESET_SETTLE_MS;
use crate::drivers::si53xx::{self, reg, Si53xx};

/// One entry of the configuration script.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Step {
    Write { reg: u8, value: u8 },
    DelayMs(u32),
}

const fn write(reg: u8, value: u8) -> Step {
    Step::Write { reg, value }
}

/// The configuration script, applied in order.
pub const SEQUENCE: [Step; 11] = [
    write(reg::RST_ICAL, si53xx::RST_REG),
    Step::DelayMs(RESET_SETTLE_MS),
    write(reg::AUTOSEL, 0b1001_0010), // Autoselect, revertive
    write(reg::SFOUT, 0b0000_1111),   // LVDS to ECP5, SERDES output disabled
    write(reg::N2_LS_MID, 1),         // N2 = 0x138 so Fpll = 4992 MHz at Fin = 16 MHz
    write(reg::N2_LS_LO, 56),
    write(reg::N31_LO, 0),            // Divide in0 by 1
    write(reg::N32_LO, 1),            // Divide in1 by 2
    write(reg::NC1_LS_LO, 21),        // 60 MHz out1
    write(reg::NC2_LS_LO, 101),       // 10 MHz out2
    write(reg::RST_ICAL, si53xx::ICAL),
];

/// Run [`SEQUENCE`] against the device. Stops at the first failed register access.
pub fn bring_up<CS, SPI, D>(
    dev: &mut Si53xx<CS>,
    spi: &mut SPI,
    delay: &mut D,
) -> Result<(), si53xx::Error<SPI::Error, CS::Error>>
where
    CS: OutputPin,
    SPI: SpiBus<u8>,
    D: DelayNs,
{
    for step in SEQUENCE {
        match step {
            Step::Write { reg, value } => dev.write_register(spi, reg, value)?,
            Step::DelayMs(ms) => delay.delay_ms(ms),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_writes_with_one_delay_after_reset() {
        let writes: Vec<(u8, u8)> = SEQUENCE
            .iter()
            .filter_map(|s| match *s {
                Step::Write { reg, value } => Some((reg, value)),
                Step::DelayMs(_) => None,
            })
            .collect();

        assert_eq!(
            writes,
            [
                (136, 0b1000_0000),
                (4, 0b1001_0010),
                (6, 0b0000_1111),
                (41, 1),
                (42, 56),
                (45, 0),
                (48, 1),
                (33, 21),
                (36, 101),
                (136, 0b0100_0000),
            ]
        );

        let delays: Vec<usize> = SEQUENCE
            .iter()
            .enumerate()
            .filter(|(_, s)| matches!(s, Step::DelayMs(_)))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(delays, [1]);
        assert_eq!(SEQUENCE[1], Step::DelayMs(100));
    }
}
