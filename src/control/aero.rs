// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Airframe constants and the stall speed derived from them.

/// Fixed aerodynamic properties of the aircraft.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Airframe {
    /// Weight (N)
    pub weight_n: f32,
    /// Air density (kg/m^3)
    pub air_density: f32,
    /// Wing reference area (m^2)
    pub wing_area_m2: f32,
    /// Maximum lift coefficient
    pub cl_max: f32,
}

impl Airframe {
    /// ~100 t airliner at sea level.
    pub const DEFAULT: Airframe = Airframe {
        weight_n: 980_000.0,
        air_density: 1.225,
        wing_area_m2: 125.0,
        cl_max: 1.2,
    };

    /// Level-flight stall speed (m/s): `sqrt(2W / (rho * S * CLmax))`.
    pub fn stall_speed(&self) -> f32 {
        libm::sqrtf(2.0 * self.weight_n / (self.air_density * self.wing_area_m2 * self.cl_max))
    }
}

impl Default for Airframe {
    fn default() -> Self {
        Self::DEFAULT
    }
}
