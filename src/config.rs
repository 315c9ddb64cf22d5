// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Board configuration.
//!
//! Everything here is fixed at build time, but it is carried as a value so the readiness bit and
//! addresses can differ between the simulator and the real board without touching the loop.
//!
//! The base addresses below are the simulator board's. Other boards must supply their own
//! [`RegisterMap`].

use core::fmt;

use crate::hw::{RegisterMap, SampleFormat};

/// ADC controller base.
pub const ADC_BASE: usize = 0xFF20_4000;
/// JP1 expansion header, indicators on pins 0-9.
pub const GPIO_BASE: usize = 0xFF20_0060;
/// Slide switches.
pub const SWITCH_BASE: usize = 0xFF20_0040;
/// JTAG UART.
pub const CONSOLE_BASE: usize = 0xFF20_1000;

/// Magnitude field of a channel word (12 bits).
pub const MAGNITUDE_MASK: u32 = 0x0FFF;
/// Largest value the converter reports.
pub const FULL_SCALE: u16 = 4095;
/// LEDs on the indicator bank.
pub const INDICATOR_COUNT: u8 = 10;
/// SW0 picks the channel.
pub const SELECTOR_MASK: u32 = 0x1;
/// Delay between loop iterations.
pub const PACE_MS: u32 = 10;

/// Where the firmware runs. Only the conversion-ready bit differs.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Platform {
    /// Instruction-set simulator, ready flag in bit 16.
    Simulator,
    /// Physical board, ready flag in bit 15.
    Hardware,
}

impl Platform {
    /// Platform selected by the `hardware` feature.
    #[cfg(feature = "hardware")]
    pub const DEFAULT: Platform = Platform::Hardware;
    #[cfg(not(feature = "hardware"))]
    pub const DEFAULT: Platform = Platform::Simulator;

    pub const fn ready_mask(self) -> u32 {
        match self {
            Platform::Simulator => 0x1_0000,
            Platform::Hardware => 0x8000,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub map: RegisterMap,
    /// Conversion-complete bit of a channel word.
    pub ready_mask: u32,
    pub magnitude_mask: u32,
    pub full_scale: u16,
    pub indicator_count: u8,
    /// Highest bar-graph level; never more than `indicator_count`.
    pub max_level: u8,
    pub selector_mask: u32,
    pub pace_ms: u32,
}

impl Config {
    pub const fn for_platform(platform: Platform) -> Self {
        Self {
            map: RegisterMap {
                adc_base: ADC_BASE,
                gpio_base: GPIO_BASE,
                switch_base: SWITCH_BASE,
                console_base: Some(CONSOLE_BASE),
            },
            ready_mask: platform.ready_mask(),
            magnitude_mask: MAGNITUDE_MASK,
            full_scale: FULL_SCALE,
            indicator_count: INDICATOR_COUNT,
            max_level: INDICATOR_COUNT,
            selector_mask: SELECTOR_MASK,
            pace_ms: PACE_MS,
        }
    }

    /// Replace the conversion-ready bit.
    pub fn with_ready_mask(mut self, ready_mask: u32) -> Self {
        self.ready_mask = ready_mask;
        self
    }

    #[inline]
    pub const fn sample_format(&self) -> SampleFormat {
        SampleFormat::new(self.ready_mask, self.magnitude_mask)
    }

    /// Check the masks and ranges are consistent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ready_mask.count_ones() != 1 {
            return Err(ConfigError::ReadyMaskNotSingleBit(self.ready_mask));
        }
        if self.magnitude_mask > u16::MAX as u32 {
            return Err(ConfigError::MagnitudeMaskTooWide(self.magnitude_mask));
        }
        if self.ready_mask & self.magnitude_mask != 0 {
            return Err(ConfigError::ReadyOverlapsMagnitude);
        }
        if self.full_scale == 0 || self.full_scale as u32 > self.magnitude_mask {
            return Err(ConfigError::FullScale(self.full_scale));
        }
        if self.indicator_count == 0 || self.indicator_count > 32 {
            return Err(ConfigError::IndicatorCount(self.indicator_count));
        }
        if self.max_level > self.indicator_count {
            return Err(ConfigError::MaxLevel(self.max_level));
        }
        if self.selector_mask == 0 {
            return Err(ConfigError::NoSelector);
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::for_platform(Platform::DEFAULT)
    }
}

/// Inconsistent [`Config`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    ReadyMaskNotSingleBit(u32),
    ReadyOverlapsMagnitude,
    MagnitudeMaskTooWide(u32),
    FullScale(u16),
    IndicatorCount(u8),
    MaxLevel(u8),
    NoSelector,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ReadyMaskNotSingleBit(m) => {
                write!(f, "ready mask {m:#x} must have exactly one bit set")
            }
            ConfigError::ReadyOverlapsMagnitude => {
                write!(f, "ready mask overlaps the magnitude field")
            }
            ConfigError::MagnitudeMaskTooWide(m) => {
                write!(f, "magnitude mask {m:#x} is wider than 16 bits")
            }
            ConfigError::FullScale(n) => write!(f, "full scale {n} outside the magnitude field"),
            ConfigError::IndicatorCount(n) => write!(f, "{n} indicators, expected 1..=32"),
            ConfigError::MaxLevel(n) => write!(f, "max level {n} exceeds the indicator count"),
            ConfigError::NoSelector => write!(f, "selector mask is empty"),
        }
    }
}
