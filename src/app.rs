// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! The sense → convert → decide → actuate loop.
//!
//! [`ControlLoop::new`] runs the one-time initialization (indicator directions, ADC arming).
//! Every [`step`](ControlLoop::step) then polls the selector (if the strategy uses it) and the
//! ADC, and if the conversion is complete, decides and writes the indicators exactly once. If it
//! isn't complete nothing is written and the next step simply polls again.
//!
//! Typical usage pattern:
//!
//! ```ignore
//! let regs = unsafe { Mmio::new(config.map) };
//! let app = ControlLoop::new(regs, config, BarGraph::new(4095, 10))?;
//! app.run_forever(&mut delay);
//! ```

use embedded_hal::delay::DelayNs;

use crate::config::{Config, ConfigError};
use crate::control::{Decision, DecisionStrategy};
use crate::hw::{Adc, IndicatorBank, RegisterAccess, Selector, SelectorState};

/// What one pass of the loop did.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum StepOutcome {
    /// Samples were ready and the indicators now show this decision.
    Actuated(Decision),
    /// A conversion wasn't complete; indicators untouched.
    NotReady,
}

/// Owns the device registers and runs the decision strategy against them.
pub struct ControlLoop<R: RegisterAccess, S: DecisionStrategy> {
    regs: R,
    adc: Adc,
    indicators: IndicatorBank,
    selector: Selector,
    strategy: S,
    pace_ms: u32,
}

impl<R: RegisterAccess, S: DecisionStrategy> ControlLoop<R, S> {
    /// Validate `config`, configure the indicator bank as outputs and arm the ADC.
    pub fn new(mut regs: R, config: Config, strategy: S) -> Result<Self, ConfigError> {
        config.validate()?;

        let adc = Adc::new(config.sample_format());
        let indicators = IndicatorBank::new(config.indicator_count);

        indicators.configure(&mut regs);
        adc.arm(&mut regs);

        log::info!(
            "armed: ready mask {:#x}, {} indicators, pace {} ms",
            config.ready_mask,
            config.indicator_count,
            config.pace_ms
        );

        Ok(Self {
            regs,
            adc,
            indicators,
            selector: Selector::new(config.selector_mask),
            strategy,
            pace_ms: config.pace_ms,
        })
    }

    /// One pass: poll, and if ready convert, decide and actuate. Does not pace.
    pub fn step(&mut self) -> StepOutcome {
        let selector = if self.strategy.uses_selector() {
            self.selector.read(&mut self.regs)
        } else {
            SelectorState::Low
        };

        let Some(input) = self.strategy.acquire(&self.adc, &mut self.regs, selector) else {
            return StepOutcome::NotReady;
        };

        let decision = self.strategy.decide(input);
        let pattern = decision.pattern(self.indicators.mask());
        self.indicators.show(&mut self.regs, pattern.bits());

        log::debug!("{:?} -> {:#05x}", decision, pattern.bits());
        StepOutcome::Actuated(decision)
    }

    /// Step and pace until `keep_running` returns false. Checked before every iteration.
    pub fn run<D, F>(&mut self, delay: &mut D, mut keep_running: F)
    where
        D: DelayNs,
        F: FnMut() -> bool,
    {
        while keep_running() {
            self.step();
            delay.delay_ms(self.pace_ms);
        }
    }

    /// Run exactly `iterations` paced steps.
    pub fn run_for<D: DelayNs>(&mut self, delay: &mut D, iterations: usize) {
        let mut remaining = iterations;
        self.run(delay, || {
            if remaining == 0 {
                return false;
            }
            remaining -= 1;
            true
        });
    }

    /// Run until power-down.
    pub fn run_forever<D: DelayNs>(mut self, delay: &mut D) -> ! {
        loop {
            self.step();
            delay.delay_ms(self.pace_ms);
        }
    }

    #[inline]
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    #[inline]
    pub fn regs(&self) -> &R {
        &self.regs
    }

    #[inline]
    pub fn regs_mut(&mut self) -> &mut R {
        &mut self.regs
    }

    /// Release the register backend.
    pub fn free(self) -> R {
        self.regs
    }
}
