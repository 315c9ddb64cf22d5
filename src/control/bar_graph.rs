// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Proportional bar graph of one selectable ADC channel.

use crate::control::{Decision, DecisionStrategy};
use crate::hw::{Adc, Channel, RegisterAccess, SelectorState};

/// Scales the selected channel's magnitude into `0..=max_level` lit indicators.
///
/// Switch low reads channel 0, switch high reads channel 1.
#[derive(Copy, Clone, Debug)]
pub struct BarGraph {
    full_scale: u16,
    max_level: u8,
}

impl BarGraph {
    pub const fn new(full_scale: u16, max_level: u8) -> Self {
        Self {
            full_scale,
            max_level,
        }
    }

    #[inline]
    pub fn max_level(&self) -> u8 {
        self.max_level
    }

    /// Channel feeding the graph for a given switch position.
    #[inline]
    pub fn channel(selector: SelectorState) -> Channel {
        match selector {
            SelectorState::Low => Channel::CH0,
            SelectorState::High => Channel::CH1,
        }
    }

    /// `floor(magnitude / full_scale * max_level)`, clamped to `max_level`.
    pub fn level(&self, magnitude: u16) -> u8 {
        if self.full_scale == 0 {
            return self.max_level;
        }
        let n = (magnitude as u32 * self.max_level as u32) / self.full_scale as u32;
        n.min(self.max_level as u32) as u8
    }
}

impl DecisionStrategy for BarGraph {
    type Input = u16;

    fn acquire<R: RegisterAccess>(
        &self,
        adc: &Adc,
        regs: &mut R,
        selector: SelectorState,
    ) -> Option<u16> {
        adc.sample(regs, Self::channel(selector)).magnitude()
    }

    fn decide(&self, magnitude: u16) -> Decision {
        Decision::Level(self.level(magnitude))
    }
}
