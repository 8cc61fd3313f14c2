// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Drives the Si53xx driver and bring-up script against a register-level model of the chip.

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use adapter::bringup::{self, bring_up};
use adapter::drivers::si53xx::{self, opcode, reg, Si53xx};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, OutputPin};
use embedded_hal::spi::{self, ErrorKind, SpiBus};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Event {
    Select,
    Deselect,
    Write { reg: u8, value: u8 },
    DelayMs(u32),
}

#[derive(Default)]
struct Chip {
    regs: Vec<u8>,
    addr: u8,
    selected: bool,
    frame: Vec<u8>,
    log: Vec<Event>,
    /// Fail every transfer once this many bytes have been clocked.
    fail_after: Option<usize>,
    clocked: usize,
}

impl Chip {
    fn clock(&mut self, mosi: u8) -> u8 {
        assert!(self.selected, "byte 0x{mosi:02X} clocked with chip-select high");
        let miso = match self.frame.as_slice() {
            [opcode::READ] => self.regs[self.addr as usize],
            _ => 0x00,
        };
        self.frame.push(mosi);
        miso
    }

    fn end_frame(&mut self) {
        match *self.frame.as_slice() {
            [opcode::SET_ADDR, addr] => self.addr = addr,
            [opcode::WRITE, value] => {
                self.regs[self.addr as usize] = value;
                self.log.push(Event::Write {
                    reg: self.addr,
                    value,
                });
            }
            [opcode::READ, _] | [] => {}
            ref other => panic!("malformed frame {other:02X?}"),
        }
        self.frame.clear();
    }
}

#[derive(Clone)]
struct Sim(Rc<RefCell<Chip>>);

impl Sim {
    fn new() -> Self {
        Sim(Rc::new(RefCell::new(Chip {
            regs: vec![0; 256],
            ..Default::default()
        })))
    }

    fn failing_after(bytes: usize) -> Self {
        let sim = Self::new();
        sim.0.borrow_mut().fail_after = Some(bytes);
        sim
    }

    fn log(&self) -> Vec<Event> {
        self.0.borrow().log.clone()
    }

    fn selected(&self) -> bool {
        self.0.borrow().selected
    }
}

struct Cs(Sim);
struct Bus(Sim);
struct Delay(Sim);

impl digital::ErrorType for Cs {
    type Error = Infallible;
}

impl OutputPin for Cs {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        let mut chip = self.0 .0.borrow_mut();
        chip.selected = true;
        chip.log.push(Event::Select);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        let mut chip = self.0 .0.borrow_mut();
        if chip.selected {
            chip.end_frame();
            chip.log.push(Event::Deselect);
        }
        chip.selected = false;
        Ok(())
    }
}

impl spi::ErrorType for Bus {
    type Error = ErrorKind;
}

impl Bus {
    fn clock(&mut self, mosi: u8) -> Result<u8, ErrorKind> {
        let mut chip = self.0 .0.borrow_mut();
        if chip.fail_after.is_some_and(|n| chip.clocked >= n) {
            return Err(ErrorKind::Other);
        }
        chip.clocked += 1;
        Ok(chip.clock(mosi))
    }
}

impl SpiBus<u8> for Bus {
    fn read(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        for w in words.iter_mut() {
            *w = self.clock(0x00)?;
        }
        Ok(())
    }

    fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
        for &w in words {
            self.clock(w)?;
        }
        Ok(())
    }

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
        for i in 0..read.len().max(write.len()) {
            let miso = self.clock(write.get(i).copied().unwrap_or(0x00))?;
            if let Some(r) = read.get_mut(i) {
                *r = miso;
            }
        }
        Ok(())
    }

    fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        for w in words.iter_mut() {
            *w = self.clock(*w)?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl DelayNs for Delay {
    fn delay_ns(&mut self, ns: u32) {
        self.delay_ms(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0 .0.borrow_mut().log.push(Event::DelayMs(ms));
    }
}

fn attach(sim: &Sim) -> (Si53xx<Cs>, Bus) {
    let dev = Si53xx::new(Cs(sim.clone())).unwrap();
    (dev, Bus(sim.clone()))
}

#[test]
fn read_back_returns_last_written_value() {
    let sim = Sim::new();
    let (mut dev, mut bus) = attach(&sim);

    for (addr, value) in [(reg::AUTOSEL, 0x92), (reg::SFOUT, 0x0F), (reg::N2_LS_LO, 56)] {
        dev.write_register(&mut bus, addr, value).unwrap();
        assert_eq!(dev.read_register(&mut bus, addr).unwrap(), value);
    }

    dev.write_register(&mut bus, reg::AUTOSEL, 0x12).unwrap();
    assert_eq!(dev.read_register(&mut bus, reg::AUTOSEL).unwrap(), 0x12);
    assert_eq!(dev.read_register(&mut bus, reg::SFOUT).unwrap(), 0x0F);
}

#[test]
fn every_phase_gets_its_own_chip_select_pulse() {
    let sim = Sim::new();
    let (mut dev, mut bus) = attach(&sim);

    dev.write_register(&mut bus, reg::N31_LO, 0).unwrap();
    let _ = dev.read_register(&mut bus, reg::N31_LO).unwrap();

    assert_eq!(
        sim.log(),
        [
            Event::Select,
            Event::Deselect,
            Event::Select,
            Event::Write {
                reg: reg::N31_LO,
                value: 0,
            },
            Event::Deselect,
            Event::Select,
            Event::Deselect,
            Event::Select,
            Event::Deselect,
        ]
    );
    assert!(!sim.selected());
}

#[test]
fn bring_up_writes_script_in_order() {
    let sim = Sim::new();
    let (mut dev, mut bus) = attach(&sim);
    let mut delay = Delay(sim.clone());

    bring_up(&mut dev, &mut bus, &mut delay).unwrap();

    let log = sim.log();
    let script: Vec<Event> = log
        .iter()
        .copied()
        .filter(|e| !matches!(e, Event::Select | Event::Deselect))
        .collect();
    assert_eq!(
        script,
        [
            Event::Write {
                reg: 136,
                value: 0b1000_0000,
            },
            Event::DelayMs(100),
            Event::Write {
                reg: 4,
                value: 0b1001_0010,
            },
            Event::Write {
                reg: 6,
                value: 0b0000_1111,
            },
            Event::Write {
                reg: 41,
                value: 1,
            },
            Event::Write {
                reg: 42,
                value: 56,
            },
            Event::Write {
                reg: 45,
                value: 0,
            },
            Event::Write {
                reg: 48,
                value: 1,
            },
            Event::Write {
                reg: 33,
                value: 21,
            },
            Event::Write {
                reg: 36,
                value: 101,
            },
            Event::Write {
                reg: 136,
                value: 0b0100_0000,
            },
        ]
    );

    // Delay happens with the chip deselected, right after the reset write completes.
    let delay_at = log.iter().position(|e| *e == Event::DelayMs(100)).unwrap();
    assert_eq!(log[delay_at - 1], Event::Deselect);
    assert_eq!(log.iter().filter(|e| **e == Event::Select).count(), 20);
    assert!(!sim.selected());
}

#[test]
fn bus_failure_aborts_bring_up_and_releases_chip_select() {
    // Fails on the first byte of the second write.
    let sim = Sim::failing_after(4);
    let (mut dev, mut bus) = attach(&sim);
    let mut delay = Delay(sim.clone());

    let err = bring_up(&mut dev, &mut bus, &mut delay).unwrap_err();

    assert_eq!(err, si53xx::Error::Spi(ErrorKind::Other));
    assert!(!sim.selected());
    let writes = sim
        .log()
        .into_iter()
        .filter(|e| matches!(e, Event::Write { .. }))
        .count();
    assert_eq!(writes, 1);
    assert_eq!(bringup::SEQUENCE.len(), 11);
}
