//! The breeze case: stretched-grid buoyancy profile.
//!
//! Produces `breeze.prof` with columns `z, b` on a three-layer stretched
//! grid: millimeter-scale cells in the surface layer, a uniform interior,
//! and coarser cells aloft.

use std::path::{Path, PathBuf};

use super::CaseError;
use crate::grid::{ThreeLayerStretching, VerticalGrid};
use crate::io::ProfileWriter;
use crate::profile::BuoyancyProfile;
use crate::types::{Height, Thickness};

/// Default stratification N² (s⁻²).
const N2: f64 = 3.0;

/// Surface buoyancy scale of the erf-corrected variant (m s⁻²).
const B0: f64 = 1.0;

/// Surface-layer depth scale of the erf-corrected variant (m).
const DELTA: f64 = 4.407731e-3;

/// Output filename, fixed by the downstream simulation tool.
pub const PROFILE_FILENAME: &str = "breeze.prof";

/// Grid resolution variant for the breeze case.
///
/// Both variants target the same domain shape; the fine variant doubles
/// the level count and halves the surface-layer thickness.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BreezeResolution {
    /// 512 levels, 1 mm surface cells.
    Coarse512,
    /// 1024 levels, 0.4 mm surface cells.
    Fine1024,
}

impl BreezeResolution {
    /// Number of vertical levels.
    pub fn kmax(&self) -> usize {
        match self {
            Self::Coarse512 => 512,
            Self::Fine1024 => 1024,
        }
    }

    /// Stretching parameters for this resolution.
    pub fn stretching(&self) -> ThreeLayerStretching {
        match self {
            Self::Coarse512 => ThreeLayerStretching {
                dz1: 0.001,
                dz2: 0.002,
                dz3: 0.016,
                nloc1: 80.0 / 512.0,
                nbuf1: 16.0 / 512.0,
                nloc2: 512.0 / 512.0,
                nbuf2: 72.0 / 512.0,
            },
            Self::Fine1024 => ThreeLayerStretching {
                dz1: 0.0004,
                dz2: 0.0009765625,
                dz3: 0.008,
                nloc1: 150.0 / 1024.0,
                nbuf1: 32.0 / 1024.0,
                nloc2: 1024.0 / 1024.0,
                nbuf2: 192.0 / 1024.0,
            },
        }
    }
}

/// Diagnostics from a breeze run.
#[derive(Clone, Debug)]
pub struct BreezeSummary {
    /// Number of vertical levels written.
    pub kmax: usize,
    /// Domain height realized by the stretched grid.
    pub total_height: Height,
    /// Thinnest cell.
    pub min_thickness: Thickness,
    /// Thickest cell.
    pub max_thickness: Thickness,
    /// Path of the written profile file.
    pub output: PathBuf,
}

/// The breeze case configuration.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use abl_rs::cases::BreezeCase;
///
/// let summary = BreezeCase::default().run(Path::new(".")).unwrap();
/// println!("zsize = {}", summary.total_height);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct BreezeCase {
    /// Grid resolution variant.
    pub resolution: BreezeResolution,
    /// Buoyancy formulation.
    pub buoyancy: BuoyancyProfile,
}

impl Default for BreezeCase {
    fn default() -> Self {
        Self {
            resolution: BreezeResolution::Coarse512,
            buoyancy: BuoyancyProfile::Linear { n2: N2 },
        }
    }
}

impl BreezeCase {
    /// The erf-corrected variant at the given resolution.
    ///
    /// Relaxes the surface buoyancy to `b0` over the surface-layer depth
    /// scale instead of the purely linear profile.
    pub fn erf_corrected(resolution: BreezeResolution) -> Self {
        Self {
            resolution,
            buoyancy: BuoyancyProfile::ErfCorrected {
                n2: N2,
                b0: B0,
                delta: DELTA,
            },
        }
    }

    /// Build the stretched grid for this configuration.
    pub fn grid(&self) -> Result<VerticalGrid, CaseError> {
        Ok(VerticalGrid::new(
            self.resolution.kmax(),
            self.resolution.stretching(),
        )?)
    }

    /// Generate the grid and profile and write `breeze.prof` into `dir`.
    pub fn run(&self, dir: &Path) -> Result<BreezeSummary, CaseError> {
        let grid = self.grid()?;
        let b = self.buoyancy.evaluate(grid.z());

        let output = dir.join(PROFILE_FILENAME);
        ProfileWriter::new()
            .column("z", grid.z())?
            .column("b", &b)?
            .write_file(&output)?;

        Ok(BreezeSummary {
            kmax: grid.kmax(),
            total_height: grid.total_height(),
            min_thickness: grid.min_thickness(),
            max_thickness: grid.max_thickness(),
            output,
        })
    }
}
