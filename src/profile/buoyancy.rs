//! Buoyancy profiles for stratified initial conditions.

/// Buoyancy as a function of height.
///
/// The default formulation is a linearly stratified profile `b = N² z`.
/// The erf-corrected variant adds a surface-layer correction that relaxes
/// the buoyancy to `b0` at the surface over a depth scale `delta`:
///
/// ```text
/// b = N² z + b0 * erf(-0.5 z / delta) + b0
/// ```
///
/// # Example
///
/// ```
/// use abl_rs::profile::BuoyancyProfile;
///
/// let profile = BuoyancyProfile::Linear { n2: 3.0 };
/// assert_eq!(profile.value_at(0.5), 1.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BuoyancyProfile {
    /// Linear stratification `b = n2 * z`.
    Linear {
        /// Brunt-Väisälä frequency squared N² (s⁻²).
        n2: f64,
    },

    /// Linear stratification with an error-function surface-layer
    /// correction.
    ErfCorrected {
        /// Brunt-Väisälä frequency squared N² (s⁻²).
        n2: f64,
        /// Surface buoyancy scale (m s⁻²).
        b0: f64,
        /// Surface-layer depth scale (m).
        delta: f64,
    },
}

impl BuoyancyProfile {
    /// Buoyancy at a single height.
    #[inline]
    pub fn value_at(&self, z: f64) -> f64 {
        match *self {
            Self::Linear { n2 } => n2 * z,
            Self::ErfCorrected { n2, b0, delta } => {
                n2 * z + b0 * libm::erf(-0.5 * z / delta) + b0
            }
        }
    }

    /// Evaluate the profile over a height sequence.
    pub fn evaluate(&self, z: &[f64]) -> Vec<f64> {
        z.iter().map(|&z| self.value_at(z)).collect()
    }

    /// Human-readable name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear { .. } => "linear",
            Self::ErfCorrected { .. } => "erf_corrected",
        }
    }

    /// Description of parameters (for diagnostics).
    pub fn description(&self) -> String {
        match *self {
            Self::Linear { n2 } => format!("Linear (N2={})", n2),
            Self::ErfCorrected { n2, b0, delta } => {
                format!("Erf-corrected (N2={}, b0={}, delta={:e})", n2, b0, delta)
            }
        }
    }
}
