// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Raw ADC magnitude to physical units.

/// Affine map from `0..=full_scale` ADC counts onto `[min, max]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LinearScale {
    pub min: f32,
    pub max: f32,
    pub full_scale: u16,
}

/// Full-scale count of the 12-bit converter.
pub const FULL_SCALE_12BIT: u16 = 4095;

/// Airspeed sensor, 0..300 m/s.
pub const VELOCITY_MPS: LinearScale = LinearScale::new(0.0, 300.0, FULL_SCALE_12BIT);

/// Angle-of-attack vane, -30..+30 degrees.
pub const ANGLE_OF_ATTACK_DEG: LinearScale = LinearScale::new(-30.0, 30.0, FULL_SCALE_12BIT);

impl LinearScale {
    pub const fn new(min: f32, max: f32, full_scale: u16) -> Self {
        Self {
            min,
            max,
            full_scale,
        }
    }

    /// Magnitude as a fraction of full scale.
    #[inline]
    pub fn fraction(&self, magnitude: u16) -> f32 {
        magnitude as f32 / self.full_scale as f32
    }

    /// Magnitude in physical units.
    #[inline]
    pub fn apply(&self, magnitude: u16) -> f32 {
        self.min + (self.max - self.min) * self.fraction(magnitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn velocity_endpoints() {
        assert!(close(VELOCITY_MPS.apply(0), 0.0));
        assert!(close(VELOCITY_MPS.apply(4095), 300.0));
    }

    #[test]
    fn angle_is_centered() {
        assert!(close(ANGLE_OF_ATTACK_DEG.apply(0), -30.0));
        assert!(close(ANGLE_OF_ATTACK_DEG.apply(4095), 30.0));
        assert!(ANGLE_OF_ATTACK_DEG.apply(2047).abs() < 0.01);
    }

    #[test]
    fn monotonic_over_input_range() {
        let mut prev = f32::MIN;
        for m in 0..=FULL_SCALE_12BIT {
            let v = ANGLE_OF_ATTACK_DEG.apply(m);
            assert!(v >= prev);
            prev = v;
        }
    }
}
