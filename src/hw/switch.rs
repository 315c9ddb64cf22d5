// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Slide switch input used as the ADC channel selector.

use super::regs::{Register, RegisterAccess};

/// Position of the selector switch.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SelectorState {
    Low,
    High,
}

/// Single-bit channel selector on the switch port.
#[derive(Copy, Clone, Debug)]
pub struct Selector {
    mask: u32,
}

impl Selector {
    pub const fn new(mask: u32) -> Self {
        Self { mask }
    }

    /// Sample the switch. Read fresh every loop iteration, never cached.
    #[inline]
    pub fn read<R: RegisterAccess>(&self, regs: &mut R) -> SelectorState {
        if regs.read(Register::Switch) & self.mask != 0 {
            SelectorState::High
        } else {
            SelectorState::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hw::sim::RegisterFile;

    #[test]
    fn reads_only_its_bit() {
        let mut regs = RegisterFile::new();
        let sel = Selector::new(0x1);

        regs.set_switch(0b10);
        assert_eq!(sel.read(&mut regs), SelectorState::Low);
        regs.set_switch(0b11);
        assert_eq!(sel.read(&mut regs), SelectorState::High);
        assert_eq!(regs.reads_of(Register::Switch), 2);
    }
}
