//! Vertical grid with integrated cell-center heights.
//!
//! A [`VerticalGrid`] owns the thickness field produced by a
//! [`Stretching`] policy together with the cell-center heights integrated
//! from it and the diagnostic stretch ratios between adjacent cells.
//!
//! # Height Integration
//!
//! The bottom cell is centered half a thickness above the surface; each
//! subsequent center sits half of both adjacent thicknesses above the
//! previous one:
//!
//! ```text
//! z[0] = 0.5 * dz[0]
//! z[k] = z[k-1] + 0.5 * (dz[k-1] + dz[k])
//! ```
//!
//! Heights are therefore strictly increasing whenever all thicknesses are
//! positive, which every shipped policy guarantees.
//!
//! # Example
//!
//! ```
//! use abl_rs::grid::{ThreeLayerStretching, VerticalGrid};
//!
//! let grid = VerticalGrid::new(
//!     512,
//!     ThreeLayerStretching {
//!         dz1: 0.001,
//!         dz2: 0.002,
//!         dz3: 0.016,
//!         nloc1: 80.0 / 512.0,
//!         nbuf1: 16.0 / 512.0,
//!         nloc2: 1.0,
//!         nbuf2: 72.0 / 512.0,
//!     },
//! )
//! .unwrap();
//!
//! assert_eq!(grid.z().len(), 512);
//! assert!(grid.total_height().meters() > 0.0);
//! ```

use super::stretching::{GridError, Stretching, UniformStretching};
use crate::types::{Height, Thickness};

/// Vertical grid: cell-center heights, thicknesses, and stretch ratios.
///
/// Index 0 is the bottom level. All arrays are contiguous `Vec<f64>` with
/// length equal to the level count.
#[derive(Clone, Debug)]
pub struct VerticalGrid {
    /// Number of vertical levels (cells).
    kmax: usize,

    /// Cell-center heights, strictly increasing from the bottom.
    z: Vec<f64>,

    /// Cell thicknesses, strictly positive.
    dz: Vec<f64>,

    /// Stretch ratios dz[k]/dz[k-1]; stretch[0] = 1 by convention.
    stretch: Vec<f64>,

    /// Name of the stretching policy used.
    stretching_name: String,

    /// Description of stretching parameters.
    stretching_description: String,
}

impl VerticalGrid {
    /// Create a new grid with the specified stretching policy.
    ///
    /// # Errors
    ///
    /// - [`GridError::InvalidLevelCount`] if `kmax` is zero
    /// - [`GridError::InvalidParameter`] if the policy rejects its own
    ///   parameters
    pub fn new(kmax: usize, stretching: impl Stretching) -> Result<Self, GridError> {
        if kmax == 0 {
            return Err(GridError::InvalidLevelCount);
        }

        let dz = stretching.cell_thicknesses(kmax)?;
        debug_assert_eq!(dz.len(), kmax);

        let z = integrate_centers(&dz);
        let stretch = stretch_ratios(&dz);

        Ok(Self {
            kmax,
            z,
            dz,
            stretch,
            stretching_name: stretching.name().to_string(),
            stretching_description: stretching.description(),
        })
    }

    /// Create a uniform grid (convenience constructor).
    #[inline]
    pub fn uniform(kmax: usize, zsize: f64) -> Result<Self, GridError> {
        Self::new(kmax, UniformStretching { zsize })
    }

    // =========================================================================
    // Accessors (return slices for zero-copy access)
    // =========================================================================

    /// Number of vertical levels.
    #[inline]
    pub fn kmax(&self) -> usize {
        self.kmax
    }

    /// Cell-center heights as a slice.
    #[inline]
    pub fn z(&self) -> &[f64] {
        &self.z
    }

    /// Cell thicknesses as a slice.
    #[inline]
    pub fn dz(&self) -> &[f64] {
        &self.dz
    }

    /// Stretch ratios between adjacent cells as a slice.
    ///
    /// Diagnostic only; no downstream consumer depends on these.
    #[inline]
    pub fn stretch(&self) -> &[f64] {
        &self.stretch
    }

    /// Name of the stretching policy.
    #[inline]
    pub fn stretching_name(&self) -> &str {
        &self.stretching_name
    }

    /// Description of stretching parameters.
    #[inline]
    pub fn stretching_description(&self) -> &str {
        &self.stretching_description
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    /// Top-of-domain height recomputed from the grid:
    /// `z[kmax-1] + 0.5 * dz[kmax-1]`.
    ///
    /// For a uniform grid this recovers `zsize` exactly (up to float
    /// rounding); for a stretched grid it is the realized domain height
    /// implied by the thickness targets.
    pub fn total_height(&self) -> Height {
        Height::new(self.z[self.kmax - 1] + 0.5 * self.dz[self.kmax - 1])
    }

    /// Thinnest cell in the grid.
    pub fn min_thickness(&self) -> Thickness {
        Thickness::new(self.dz.iter().fold(f64::INFINITY, |a, &b| a.min(b)))
    }

    /// Thickest cell in the grid.
    pub fn max_thickness(&self) -> Thickness {
        Thickness::new(self.dz.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b)))
    }
}

/// Integrate cell thicknesses into cell-center heights.
fn integrate_centers(dz: &[f64]) -> Vec<f64> {
    let mut z = vec![0.0; dz.len()];
    z[0] = 0.5 * dz[0];
    for k in 1..dz.len() {
        z[k] = z[k - 1] + 0.5 * (dz[k - 1] + dz[k]);
    }
    z
}

/// Compute diagnostic stretch ratios dz[k]/dz[k-1], with stretch[0] = 1.
fn stretch_ratios(dz: &[f64]) -> Vec<f64> {
    let mut stretch = vec![1.0; dz.len()];
    for k in 1..dz.len() {
        stretch[k] = dz[k] / dz[k - 1];
    }
    stretch
}
