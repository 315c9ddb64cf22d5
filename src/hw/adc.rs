// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Memory-mapped ADC with per-channel data registers.
//!
//! Each channel register reads back a conversion-ready flag and a 12-bit magnitude. Writing any
//! nonzero value to channel 0 updates all channels once; writing channel 1 switches the converter
//! into continuous auto-update for the rest of execution.
//!
//! Example:
//! ```ignore
//! let adc = Adc::new(SampleFormat::new(0x1_0000, 0xFFF));
//! adc.arm(&mut regs);
//! if let Some(m) = adc.sample(&mut regs, Channel::CH0).magnitude() {
//!     // ...
//! }
//! ```

use super::regs::{Channel, Register, RegisterAccess};

/// Where the ready flag and the magnitude live in a channel word.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SampleFormat {
    pub ready_mask: u32,
    pub magnitude_mask: u32,
}

impl SampleFormat {
    pub const fn new(ready_mask: u32, magnitude_mask: u32) -> Self {
        Self {
            ready_mask,
            magnitude_mask,
        }
    }
}

/// One raw channel read.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RawSample {
    raw: u32,
    format: SampleFormat,
}

impl RawSample {
    #[inline]
    pub const fn new(raw: u32, format: SampleFormat) -> Self {
        Self { raw, format }
    }

    #[inline]
    pub fn raw(&self) -> u32 {
        self.raw
    }

    /// Conversion complete.
    #[inline]
    pub fn is_ready(&self) -> bool {
        (self.raw & self.format.ready_mask) != 0
    }

    /// The converted value, only if the conversion has completed.
    #[inline]
    pub fn magnitude(&self) -> Option<u16> {
        if self.is_ready() {
            Some((self.raw & self.format.magnitude_mask) as u16)
        } else {
            None
        }
    }
}

/// View of the ADC registers. Holds no device state; the register backend is passed to each
/// call so the ADC can share it with the other peripherals.
#[derive(Copy, Clone, Debug)]
pub struct Adc {
    format: SampleFormat,
}

impl Adc {
    pub const fn new(format: SampleFormat) -> Self {
        Self { format }
    }

    #[inline]
    pub fn format(&self) -> SampleFormat {
        self.format
    }

    /// Update every channel once, then enable continuous conversion.
    pub fn arm<R: RegisterAccess>(&self, regs: &mut R) {
        regs.write(Register::AdcChannel(Channel::CH0), 1);
        regs.write(Register::AdcChannel(Channel::CH1), 1);
    }

    /// Read `ch` once.
    #[inline]
    pub fn sample<R: RegisterAccess>(&self, regs: &mut R, ch: Channel) -> RawSample {
        RawSample::new(regs.read(Register::AdcChannel(ch)), self.format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hw::sim::{Access, AdcMode, RegisterFile};

    const SIM: SampleFormat = SampleFormat::new(0x1_0000, 0xFFF);
    const BOARD: SampleFormat = SampleFormat::new(0x8000, 0xFFF);

    #[test]
    fn magnitude_only_when_ready() {
        assert_eq!(RawSample::new(0x1_0800, SIM).magnitude(), Some(0x800));
        assert_eq!(RawSample::new(0x0_0800, SIM).magnitude(), None);
        assert!(!RawSample::new(0x0_0800, SIM).is_ready());
    }

    #[test]
    fn ready_bit_is_platform_specific() {
        let word = 0x8FFF;
        assert_eq!(RawSample::new(word, BOARD).magnitude(), Some(0xFFF));
        assert_eq!(RawSample::new(word, SIM).magnitude(), None);
    }

    #[test]
    fn magnitude_ignores_bits_above_width() {
        assert_eq!(RawSample::new(0x1_7123, SIM).magnitude(), Some(0x123));
    }

    #[test]
    fn arm_writes_channel_zero_then_one() {
        let mut regs = RegisterFile::new();
        Adc::new(SIM).arm(&mut regs);

        let log: Vec<Access> = regs.access_log().collect();
        assert_eq!(
            log,
            vec![
                Access::Write(Register::AdcChannel(Channel::CH0), 1),
                Access::Write(Register::AdcChannel(Channel::CH1), 1),
            ]
        );
        assert_eq!(regs.adc_mode(), AdcMode::AutoUpdate);
    }

    #[test]
    fn sample_is_a_single_read() {
        let mut regs = RegisterFile::new();
        regs.set_sample(Channel::CH1, 0x1_0FFF);

        let s = Adc::new(SIM).sample(&mut regs, Channel::CH1);
        assert_eq!(s.magnitude(), Some(4095));
        assert_eq!(regs.reads_of(Register::AdcChannel(Channel::CH1)), 1);
        assert_eq!(regs.reads_of(Register::AdcChannel(Channel::CH0)), 0);
    }
}
