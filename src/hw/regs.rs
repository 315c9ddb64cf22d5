// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Register names, the address map, and the access trait every backend implements.
//!
//! The control loop never touches an address directly. It names a [`Register`] and hands it to a
//! [`RegisterAccess`] backend, which is either [`Mmio`](super::Mmio) on the target or
//! [`RegisterFile`](super::RegisterFile) in tests.

/// Number of ADC channel registers exposed by the converter.
pub const ADC_CHANNELS: u8 = 8;

/// One ADC input channel (`0..ADC_CHANNELS`).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Channel(u8);

impl Channel {
    pub const CH0: Channel = Channel(0);
    pub const CH1: Channel = Channel(1);

    /// Returns `None` for channels the converter doesn't have.
    pub const fn new(n: u8) -> Option<Self> {
        if n < ADC_CHANNELS {
            Some(Channel(n))
        } else {
            None
        }
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }
}

/// Every hardware location the firmware reads or writes.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Register {
    /// ADC channel data. Reading returns ready flag + magnitude, writing triggers conversions.
    AdcChannel(Channel),
    /// Indicator bank output latch, bit i = indicator i.
    GpioData,
    /// Indicator bank direction, bit i = 1 makes indicator i an output.
    GpioDir,
    /// Slide switches, bit 0 = channel selector.
    Switch,
    /// JTAG UART data (TX byte in bits 7:0).
    ConsoleData,
    /// JTAG UART control (free TX space in bits 31:16).
    ConsoleControl,
}

impl Register {
    /// Number of distinct registers, for backends that keep one slot per register.
    pub const COUNT: usize = ADC_CHANNELS as usize + 5;

    /// Dense index in `0..Register::COUNT`.
    pub const fn slot(self) -> usize {
        const BASE: usize = ADC_CHANNELS as usize;
        match self {
            Register::AdcChannel(ch) => ch.0 as usize,
            Register::GpioData => BASE,
            Register::GpioDir => BASE + 1,
            Register::Switch => BASE + 2,
            Register::ConsoleData => BASE + 3,
            Register::ConsoleControl => BASE + 4,
        }
    }
}

/// Base addresses of the memory-mapped peripherals.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RegisterMap {
    pub adc_base: usize,
    pub gpio_base: usize,
    pub switch_base: usize,
    /// `None` when the board has no debug console.
    pub console_base: Option<usize>,
}

impl RegisterMap {
    /// Absolute address of `reg`, or `None` if its peripheral isn't mapped.
    pub const fn address(&self, reg: Register) -> Option<usize> {
        match reg {
            Register::AdcChannel(ch) => Some(self.adc_base + 4 * ch.0 as usize),
            Register::GpioData => Some(self.gpio_base),
            Register::GpioDir => Some(self.gpio_base + 4),
            Register::Switch => Some(self.switch_base),
            Register::ConsoleData => match self.console_base {
                Some(base) => Some(base),
                None => None,
            },
            Register::ConsoleControl => match self.console_base {
                Some(base) => Some(base + 4),
                None => None,
            },
        }
    }
}

/// Word-wide access to named hardware registers.
///
/// Implementations must perform exactly one load or store per call, in program order. Reads take
/// `&mut self` because on real hardware they have side effects.
pub trait RegisterAccess {
    fn read(&mut self, reg: Register) -> u32;
    fn write(&mut self, reg: Register, value: u32);
}

impl<R: RegisterAccess + ?Sized> RegisterAccess for &mut R {
    #[inline]
    fn read(&mut self, reg: Register) -> u32 {
        (**self).read(reg)
    }

    #[inline]
    fn write(&mut self, reg: Register, value: u32) {
        (**self).write(reg, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP: RegisterMap = RegisterMap {
        adc_base: 0xFF20_4000,
        gpio_base: 0xFF20_0060,
        switch_base: 0xFF20_0040,
        console_base: None,
    };

    #[test]
    fn adc_channels_are_word_strided() {
        assert_eq!(MAP.address(Register::AdcChannel(Channel::CH0)), Some(0xFF20_4000));
        assert_eq!(MAP.address(Register::AdcChannel(Channel::CH1)), Some(0xFF20_4004));
        let ch7 = Channel::new(7).unwrap();
        assert_eq!(MAP.address(Register::AdcChannel(ch7)), Some(0xFF20_401C));
    }

    #[test]
    fn gpio_direction_follows_data() {
        assert_eq!(MAP.address(Register::GpioData), Some(0xFF20_0060));
        assert_eq!(MAP.address(Register::GpioDir), Some(0xFF20_0064));
        assert_eq!(MAP.address(Register::Switch), Some(0xFF20_0040));
    }

    #[test]
    fn console_unmapped_without_base() {
        assert_eq!(MAP.address(Register::ConsoleData), None);
        let map = RegisterMap {
            console_base: Some(0xFF20_1000),
            ..MAP
        };
        assert_eq!(map.address(Register::ConsoleControl), Some(0xFF20_1004));
    }

    #[test]
    fn channel_out_of_range() {
        assert!(Channel::new(ADC_CHANNELS).is_none());
    }

    #[test]
    fn slots_are_distinct() {
        let regs = [
            Register::AdcChannel(Channel::CH0),
            Register::AdcChannel(Channel::new(7).unwrap()),
            Register::GpioData,
            Register::GpioDir,
            Register::Switch,
            Register::ConsoleData,
            Register::ConsoleControl,
        ];
        for (i, a) in regs.iter().enumerate() {
            assert!(a.slot() < Register::COUNT);
            for b in &regs[i + 1..] {
                assert_ne!(a.slot(), b.slot());
            }
        }
    }
}
