// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! In-memory register file.
//!
//! Stands in for the real peripherals so the whole control loop can run on a host. It keeps one
//! word per [`Register`], counts accesses, records the first [`LOG_CAPACITY`] accesses in program
//! order, and models the two quirks the firmware depends on:
//!
//! - writing an ADC channel register triggers conversions rather than storing the value
//!   (channel 0 = update once, channel 1 = keep updating),
//! - writing the console data register transmits a byte.

use super::regs::{Channel, Register, RegisterAccess};

/// Number of accesses kept in the ordered access log.
pub const LOG_CAPACITY: usize = 32;

/// Number of transmitted console bytes kept.
pub const TX_CAPACITY: usize = 256;

/// One recorded register access.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Access {
    Read(Register),
    Write(Register, u32),
}

/// Conversion mode the simulated ADC has been put into.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AdcMode {
    Idle,
    SingleShot,
    AutoUpdate,
}

pub struct RegisterFile {
    words: [u32; Register::COUNT],
    reads: [usize; Register::COUNT],
    writes: [usize; Register::COUNT],

    log: [Option<Access>; LOG_CAPACITY],
    log_len: usize,

    tx: [u8; TX_CAPACITY],
    tx_len: usize,

    adc_mode: AdcMode,
}

impl RegisterFile {
    pub fn new() -> Self {
        Self {
            words: [0; Register::COUNT],
            reads: [0; Register::COUNT],
            writes: [0; Register::COUNT],
            log: [None; LOG_CAPACITY],
            log_len: 0,
            tx: [0; TX_CAPACITY],
            tx_len: 0,
            adc_mode: AdcMode::Idle,
        }
    }

    /// Put a raw conversion result (ready flag + magnitude) on `ch`.
    pub fn set_sample(&mut self, ch: Channel, raw: u32) {
        self.words[Register::AdcChannel(ch).slot()] = raw;
    }

    /// Set the slide switch input word.
    pub fn set_switch(&mut self, raw: u32) {
        self.words[Register::Switch.slot()] = raw;
    }

    /// Set the free TX space the console reports. Each console byte written uses one.
    pub fn set_console_space(&mut self, space: u16) {
        self.words[Register::ConsoleControl.slot()] = (space as u32) << 16;
    }

    /// Current contents of a register, without counting as an access.
    #[inline]
    pub fn peek(&self, reg: Register) -> u32 {
        self.words[reg.slot()]
    }

    #[inline]
    pub fn reads_of(&self, reg: Register) -> usize {
        self.reads[reg.slot()]
    }

    #[inline]
    pub fn writes_to(&self, reg: Register) -> usize {
        self.writes[reg.slot()]
    }

    #[inline]
    pub fn adc_mode(&self) -> AdcMode {
        self.adc_mode
    }

    /// The first accesses made, in program order.
    pub fn access_log(&self) -> impl Iterator<Item = Access> + '_ {
        self.log[..self.log_len].iter().flatten().copied()
    }

    /// Bytes written to the console data register.
    pub fn console_output(&self) -> &[u8] {
        &self.tx[..self.tx_len]
    }

    /// Forget the access log and counters, keeping register contents.
    pub fn clear_history(&mut self) {
        self.reads = [0; Register::COUNT];
        self.writes = [0; Register::COUNT];
        self.log = [None; LOG_CAPACITY];
        self.log_len = 0;
    }

    fn record(&mut self, access: Access) {
        if self.log_len < LOG_CAPACITY {
            self.log[self.log_len] = Some(access);
            self.log_len += 1;
        }
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterAccess for RegisterFile {
    fn read(&mut self, reg: Register) -> u32 {
        self.reads[reg.slot()] += 1;
        self.record(Access::Read(reg));
        self.words[reg.slot()]
    }

    fn write(&mut self, reg: Register, value: u32) {
        self.writes[reg.slot()] += 1;
        self.record(Access::Write(reg, value));

        match reg {
            Register::AdcChannel(ch) => {
                if value != 0 {
                    self.adc_mode = match (ch.index(), self.adc_mode) {
                        (1, _) => AdcMode::AutoUpdate,
                        (_, AdcMode::AutoUpdate) => AdcMode::AutoUpdate,
                        _ => AdcMode::SingleShot,
                    };
                }
            }
            Register::ConsoleData => {
                // Nothing drains the simulated FIFO, so each byte uses up one slot.
                let ctrl = &mut self.words[Register::ConsoleControl.slot()];
                let space = (*ctrl >> 16).saturating_sub(1);
                *ctrl = (*ctrl & 0xFFFF) | (space << 16);

                if self.tx_len < TX_CAPACITY {
                    self.tx[self.tx_len] = value as u8;
                    self.tx_len += 1;
                }
            }
            // Read-only on the board.
            Register::Switch | Register::ConsoleControl => {}
            Register::GpioData | Register::GpioDir => self.words[reg.slot()] = value,
        }
    }
}
