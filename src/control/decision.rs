// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Decisions and the indicator patterns they light.

use crate::hw::{Adc, RegisterAccess, SelectorState};

/// Outcome of one decision step.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Decision {
    /// Stall warning on / off.
    Stall(bool),
    /// Bar-graph level, `0..=max_level`.
    Level(u8),
}

/// Bit pattern for the indicator data register.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ActuationPattern(u32);

impl ActuationPattern {
    pub const OFF: ActuationPattern = ActuationPattern(0);

    /// Lowest `level` bits set. Saturates at 32.
    pub fn bar(level: u8) -> Self {
        match level {
            0 => Self::OFF,
            n if n >= 32 => ActuationPattern(u32::MAX),
            n => ActuationPattern((1u32 << n) - 1),
        }
    }

    #[inline]
    pub fn bits(self) -> u32 {
        self.0
    }
}

impl Decision {
    /// Pattern to show on a bank whose indicators are `indicator_mask`.
    pub fn pattern(self, indicator_mask: u32) -> ActuationPattern {
        match self {
            Decision::Stall(true) => ActuationPattern(indicator_mask),
            Decision::Stall(false) => ActuationPattern::OFF,
            Decision::Level(n) => ActuationPattern(ActuationPattern::bar(n).0 & indicator_mask),
        }
    }
}

/// A way of turning ADC samples into a [`Decision`].
///
/// Acquisition and decision are split: [`acquire`](Self::acquire) performs the register reads and
/// returns `None` if any sample it needs isn't ready yet, [`decide`](Self::decide) is a pure
/// function of what was acquired.
pub trait DecisionStrategy {
    /// Magnitudes this strategy decides on.
    type Input: Copy;

    /// Whether [`acquire`](Self::acquire) looks at the selector switch. If not, the switch
    /// register isn't read.
    fn uses_selector(&self) -> bool {
        true
    }

    fn acquire<R: RegisterAccess>(
        &self,
        adc: &Adc,
        regs: &mut R,
        selector: SelectorState,
    ) -> Option<Self::Input>;

    fn decide(&self, input: Self::Input) -> Decision;
}
