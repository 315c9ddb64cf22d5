// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Stall warning from airspeed and angle of attack.
//!
//! Channel 0 carries airspeed, channel 1 the angle-of-attack vane. The aircraft is considered
//! stalling when it is slower than the stall speed or the angle of attack is above the limit.
//! There is no hysteresis: each decision depends only on the current pair of samples.

use crate::control::conversion::{ANGLE_OF_ATTACK_DEG, VELOCITY_MPS};
use crate::control::{Airframe, Decision, DecisionStrategy, LinearScale};
use crate::hw::{Adc, Channel, RegisterAccess, SelectorState};

/// Critical angle of attack (deg).
pub const MAX_ANGLE_OF_ATTACK_DEG: f32 = 15.0;

#[derive(Copy, Clone, Debug)]
pub struct StallDetector {
    stall_speed_mps: f32,
    max_angle_deg: f32,
    velocity: LinearScale,
    angle: LinearScale,
}

impl StallDetector {
    /// Detector with thresholds `stall_speed_mps` and `max_angle_deg`, using the default sensor
    /// scales.
    pub fn new(stall_speed_mps: f32, max_angle_deg: f32) -> Self {
        Self {
            stall_speed_mps,
            max_angle_deg,
            velocity: VELOCITY_MPS,
            angle: ANGLE_OF_ATTACK_DEG,
        }
    }

    /// Computes the stall speed once from the airframe.
    pub fn for_airframe(airframe: &Airframe) -> Self {
        Self::new(airframe.stall_speed(), MAX_ANGLE_OF_ATTACK_DEG)
    }

    pub fn with_scales(mut self, velocity: LinearScale, angle: LinearScale) -> Self {
        self.velocity = velocity;
        self.angle = angle;
        self
    }

    #[inline]
    pub fn stall_speed_mps(&self) -> f32 {
        self.stall_speed_mps
    }

    /// Stall check on physical values.
    #[inline]
    pub fn is_stalling(&self, velocity_mps: f32, angle_deg: f32) -> bool {
        velocity_mps < self.stall_speed_mps || angle_deg > self.max_angle_deg
    }
}

impl DecisionStrategy for StallDetector {
    /// (airspeed, angle of attack) magnitudes.
    type Input = (u16, u16);

    fn uses_selector(&self) -> bool {
        false
    }

    fn acquire<R: RegisterAccess>(
        &self,
        adc: &Adc,
        regs: &mut R,
        _selector: SelectorState,
    ) -> Option<(u16, u16)> {
        // Both channels are read every pass so the pair is from the same iteration.
        let velocity = adc.sample(regs, Channel::CH0);
        let angle = adc.sample(regs, Channel::CH1);
        Some((velocity.magnitude()?, angle.magnitude()?))
    }

    fn decide(&self, (velocity, angle): (u16, u16)) -> Decision {
        let v = self.velocity.apply(velocity);
        let a = self.angle.apply(angle);
        log::trace!("airspeed {} m/s, aoa {} deg", v, a);
        Decision::Stall(self.is_stalling(v, a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hw::{Register, RegisterFile, SampleFormat};

    fn detector() -> StallDetector {
        StallDetector::for_airframe(&Airframe::DEFAULT)
    }

    /// Magnitude for a physical value on `scale`, rounded to the nearest count.
    fn counts(scale: &LinearScale, value: f32) -> u16 {
        let f = (value - scale.min) / (scale.max - scale.min);
        (f * scale.full_scale as f32 + 0.5) as u16
    }

    #[test]
    fn slow_stalls_at_any_angle() {
        let d = detector();
        for aoa in [-30.0, 0.0, 10.0, 30.0] {
            assert!(d.is_stalling(50.0, aoa));
        }
    }

    #[test]
    fn high_angle_stalls_at_any_speed() {
        let d = detector();
        for v in [0.0, 150.0, 300.0] {
            assert!(d.is_stalling(v, 16.0));
        }
    }

    #[test]
    fn fast_and_shallow_is_safe() {
        let d = detector();
        assert!(!d.is_stalling(200.0, 5.0));
        assert!(!d.is_stalling(200.0, 15.0));
    }

    #[test]
    fn decide_converts_magnitudes() {
        let d = detector();
        let fast = counts(&VELOCITY_MPS, 200.0);
        let slow = counts(&VELOCITY_MPS, 60.0);
        let level = counts(&ANGLE_OF_ATTACK_DEG, 2.0);
        let steep = counts(&ANGLE_OF_ATTACK_DEG, 20.0);

        assert_eq!(d.decide((fast, level)), Decision::Stall(false));
        assert_eq!(d.decide((slow, level)), Decision::Stall(true));
        assert_eq!(d.decide((fast, steep)), Decision::Stall(true));
        assert_eq!(d.decide((slow, steep)), Decision::Stall(true));
    }

    #[test]
    fn acquire_needs_both_channels_ready() {
        let adc = Adc::new(SampleFormat::new(0x1_0000, 0xFFF));
        let d = detector();
        let mut regs = RegisterFile::new();

        regs.set_sample(Channel::CH0, 0x1_0ABC);
        regs.set_sample(Channel::CH1, 0x0_0800);
        assert_eq!(d.acquire(&adc, &mut regs, SelectorState::Low), None);
        assert_eq!(regs.reads_of(Register::AdcChannel(Channel::CH1)), 1);

        regs.set_sample(Channel::CH1, 0x1_0800);
        assert_eq!(d.acquire(&adc, &mut regs, SelectorState::High), Some((0xABC, 0x800)));
    }
}
