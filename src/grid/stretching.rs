//! Vertical stretching policies for boundary-layer grids.
//!
//! A stretching policy controls the vertical distribution of cell
//! thicknesses, allowing refinement near the surface where gradients are
//! sharpest.
//!
//! # Available Stretching Policies
//!
//! - [`UniformStretching`]: constant spacing from a total domain height
//! - [`ThreeLayerStretching`]: smooth tanh transitions between three
//!   constant-thickness regions
//!
//! # Example
//!
//! ```
//! use abl_rs::grid::{Stretching, ThreeLayerStretching, UniformStretching};
//!
//! // Constant 6.25 cm spacing over 32 m
//! let uniform = UniformStretching { zsize: 32.0 };
//! let dz = uniform.cell_thicknesses(512).unwrap();
//! assert_eq!(dz[0], 32.0 / 512.0);
//!
//! // Fine surface layer, uniform interior, coarse top
//! let stretched = ThreeLayerStretching {
//!     dz1: 0.001,
//!     dz2: 0.002,
//!     dz3: 0.016,
//!     nloc1: 80.0 / 512.0,
//!     nbuf1: 16.0 / 512.0,
//!     nloc2: 1.0,
//!     nbuf2: 72.0 / 512.0,
//! };
//! let dz = stretched.cell_thicknesses(512).unwrap();
//! assert!(dz[0] < dz[511]);
//! ```

use thiserror::Error;

/// Error type for grid construction.
#[derive(Debug, Error)]
pub enum GridError {
    /// Level count was zero.
    #[error("level count must be positive")]
    InvalidLevelCount,

    /// A stretching parameter that must be positive was not.
    #[error("{name} must be positive, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

/// Trait for vertical stretching policies.
///
/// A stretching policy defines the thickness of each grid cell. Heights
/// are not part of the policy; [`super::VerticalGrid`] integrates them
/// from the thicknesses.
///
/// # Implementation Notes
///
/// - Returned thicknesses have length `kmax` and are strictly positive
/// - Index 0 is the bottom cell, index `kmax - 1` the top cell
pub trait Stretching: Send + Sync {
    /// Compute per-level cell thicknesses for a grid with `kmax` levels.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidParameter`] if the policy's parameters cannot
    /// produce a positive thickness field.
    fn cell_thicknesses(&self, kmax: usize) -> Result<Vec<f64>, GridError>;

    /// Human-readable name for diagnostics and logging.
    fn name(&self) -> &'static str;

    /// Description of parameters (for diagnostics).
    fn description(&self) -> String {
        self.name().to_string()
    }
}

// =============================================================================
// Uniform Stretching
// =============================================================================

/// Uniform (equal) spacing derived from a total domain height.
///
/// The simplest policy: every cell is `zsize / kmax` thick. Used when only
/// the level count and the domain height are known, e.g. when both come
/// from a solver settings file.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformStretching {
    /// Total domain height in meters.
    pub zsize: f64,
}

impl Stretching for UniformStretching {
    fn cell_thicknesses(&self, kmax: usize) -> Result<Vec<f64>, GridError> {
        if self.zsize <= 0.0 {
            return Err(GridError::InvalidParameter {
                name: "zsize",
                value: self.zsize,
            });
        }

        let dz = self.zsize / kmax as f64;
        Ok(vec![dz; kmax])
    }

    fn name(&self) -> &'static str {
        "uniform"
    }

    fn description(&self) -> String {
        format!("Uniform (zsize={}m)", self.zsize)
    }
}

// =============================================================================
// Three-Layer Tanh Stretching
// =============================================================================

/// Tanh-blended stretching across three constant-thickness regions.
///
/// The thickness field is a sum of two sigmoidal transitions over the
/// normalized level index `n = (k+1)/kmax`:
///
/// ```text
/// dzdn(n) = dzdn1 + 0.5*(dzdn2 - dzdn1)*(1 + tanh((n - nloc1)/nbuf1))
///                 + 0.5*(dzdn3 - dzdn2)*(1 + tanh((n - nloc2)/nbuf2))
/// dz[k]   = dzdn(n) * dn,     dn = 1/kmax,  dzdn_i = dz_i/dn
/// ```
///
/// The thickness asymptotically equals `dz1` well below the first
/// transition, `dz2` in the plateau between the transitions, and `dz3`
/// well above the second. The widths `nbuf1`/`nbuf2` set the transition
/// sharpness; the field stays C∞-smooth for any positive width, which
/// downstream schemes assume of their grid spacing.
///
/// # Parameters
///
/// - `dz1`, `dz2`, `dz3`: target thicknesses (m) of the three regions
/// - `nloc1`, `nloc2`: transition centers, as fractions of the normalized
///   index range (e.g. `80.0 / 512.0` puts the first transition around
///   level 80 of a 512-level grid)
/// - `nbuf1`, `nbuf2`: transition half-widths in the same units
///
/// All thicknesses and widths must be strictly positive; construction of
/// the thickness field fails fast otherwise instead of silently producing
/// a negative or non-finite grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThreeLayerStretching {
    /// Surface-region target thickness (m).
    pub dz1: f64,
    /// Interior-region target thickness (m).
    pub dz2: f64,
    /// Upper-region target thickness (m).
    pub dz3: f64,
    /// Center of the surface-to-interior transition (normalized index).
    pub nloc1: f64,
    /// Half-width of the surface-to-interior transition (normalized index).
    pub nbuf1: f64,
    /// Center of the interior-to-upper transition (normalized index).
    pub nloc2: f64,
    /// Half-width of the interior-to-upper transition (normalized index).
    pub nbuf2: f64,
}

impl ThreeLayerStretching {
    fn validate(&self) -> Result<(), GridError> {
        for (name, value) in [
            ("dz1", self.dz1),
            ("dz2", self.dz2),
            ("dz3", self.dz3),
            ("nbuf1", self.nbuf1),
            ("nbuf2", self.nbuf2),
        ] {
            if value <= 0.0 {
                return Err(GridError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}

impl Stretching for ThreeLayerStretching {
    fn cell_thicknesses(&self, kmax: usize) -> Result<Vec<f64>, GridError> {
        self.validate()?;

        let dn = 1.0 / kmax as f64;
        let dzdn1 = self.dz1 / dn;
        let dzdn2 = self.dz2 / dn;
        let dzdn3 = self.dz3 / dn;

        let dz = (0..kmax)
            .map(|k| {
                let n = (k + 1) as f64 * dn;
                let dzdn = dzdn1
                    + 0.5 * (dzdn2 - dzdn1) * (1.0 + ((n - self.nloc1) / self.nbuf1).tanh())
                    + 0.5 * (dzdn3 - dzdn2) * (1.0 + ((n - self.nloc2) / self.nbuf2).tanh());
                dzdn * dn
            })
            .collect();

        Ok(dz)
    }

    fn name(&self) -> &'static str {
        "three_layer_tanh"
    }

    fn description(&self) -> String {
        format!(
            "Three-layer tanh (dz={}/{}/{}m, transitions at n={:.4}, n={:.4})",
            self.dz1, self.dz2, self.dz3, self.nloc1, self.nloc2
        )
    }
}

// =============================================================================
// Tests
// =============================================================================
