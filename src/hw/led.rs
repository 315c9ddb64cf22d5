// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Bank of discrete indicator LEDs on one GPIO port.

use super::regs::{Register, RegisterAccess};

/// The indicator LEDs, bit i of the data register driving LED i.
#[derive(Copy, Clone, Debug)]
pub struct IndicatorBank {
    count: u8,
}

impl IndicatorBank {
    /// `count` LEDs starting at bit 0. Must be in `1..=32`.
    pub const fn new(count: u8) -> Self {
        Self { count }
    }

    #[inline]
    pub fn count(&self) -> u8 {
        self.count
    }

    /// Bit mask covering every indicator.
    #[inline]
    pub fn mask(&self) -> u32 {
        if self.count >= 32 {
            u32::MAX
        } else {
            (1u32 << self.count) - 1
        }
    }

    /// Make every indicator pin an output.
    pub fn configure<R: RegisterAccess>(&self, regs: &mut R) {
        regs.write(Register::GpioDir, self.mask());
    }

    /// Latch a pattern onto the LEDs. Bits beyond the bank are dropped.
    #[inline]
    pub fn show<R: RegisterAccess>(&self, regs: &mut R, pattern: u32) {
        regs.write(Register::GpioData, pattern & self.mask());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hw::sim::RegisterFile;

    #[test]
    fn ten_leds_mask() {
        assert_eq!(IndicatorBank::new(10).mask(), 0x3FF);
        assert_eq!(IndicatorBank::new(32).mask(), u32::MAX);
    }

    #[test]
    fn configure_sets_all_outputs() {
        let mut regs = RegisterFile::new();
        IndicatorBank::new(10).configure(&mut regs);
        assert_eq!(regs.peek(Register::GpioDir), 0x3FF);
    }

    #[test]
    fn show_masks_to_bank() {
        let mut regs = RegisterFile::new();
        IndicatorBank::new(10).show(&mut regs, 0xFFFF);
        assert_eq!(regs.peek(Register::GpioData), 0x3FF);
        assert_eq!(regs.writes_to(Register::GpioData), 1);
    }
}
