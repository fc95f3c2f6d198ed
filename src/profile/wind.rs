//! Linear shear wind profiles.

/// Linearly sheared streamwise wind, `u = dudz * z`.
///
/// In the balanced configurations this crate generates, the geostrophic
/// wind equals the shear-induced wind at every level, and the thermal-wind
/// relation fixes the meridional buoyancy gradient that sustains the
/// shear: `dbdy = -dudz * fc`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShearProfile {
    /// Vertical shear du/dz (s⁻¹).
    pub dudz: f64,
}

impl ShearProfile {
    /// Create a new shear profile.
    #[inline]
    pub fn new(dudz: f64) -> Self {
        Self { dudz }
    }

    /// Streamwise wind at a single height.
    #[inline]
    pub fn velocity_at(&self, z: f64) -> f64 {
        self.dudz * z
    }

    /// Streamwise wind over a height sequence.
    pub fn evaluate(&self, z: &[f64]) -> Vec<f64> {
        z.iter().map(|&z| self.velocity_at(z)).collect()
    }

    /// Geostrophic wind over a height sequence.
    ///
    /// Equal to the streamwise wind level for level in this balance.
    pub fn geostrophic(&self, z: &[f64]) -> Vec<f64> {
        self.evaluate(z)
    }

    /// Meridional buoyancy gradient sustaining the shear, `-dudz * fc`.
    ///
    /// Diagnostic only; not written to the profile file.
    #[inline]
    pub fn meridional_buoyancy_gradient(&self, fc: f64) -> f64 {
        -self.dudz * fc
    }
}
