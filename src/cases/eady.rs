//! The eady case: uniform-grid buoyancy and wind profiles.
//!
//! Level count and domain height come from the solver settings file
//! (`eady.ini`); the grid is uniform and the profiles are linear in
//! height. Produces `eady.prof` with columns `z, b, u, ug`.

use std::path::{Path, PathBuf};

use super::CaseError;
use crate::grid::VerticalGrid;
use crate::io::{ProfileWriter, Settings, read_settings_file};
use crate::profile::{BuoyancyProfile, ShearProfile};

/// Stratification N² (s⁻²).
const N2: f64 = 1.0;

/// Coriolis parameter (s⁻¹).
const FC: f64 = 1.0e-4;

/// Vertical shear of the streamwise wind (s⁻¹).
const DUDZ: f64 = 1.0e-4;

/// Settings filename shared with the simulation tool.
pub const SETTINGS_FILENAME: &str = "eady.ini";

/// Output filename, fixed by the downstream simulation tool.
pub const PROFILE_FILENAME: &str = "eady.prof";

/// Diagnostics from an eady run.
#[derive(Clone, Debug)]
pub struct EadySummary {
    /// Number of vertical levels written.
    pub ktot: usize,
    /// Domain height from the settings file.
    pub zsize: f64,
    /// Large-scale meridional buoyancy gradient `-dudz * fc`.
    pub dbdy_ls: f64,
    /// Path of the written profile file.
    pub output: PathBuf,
}

/// The eady case configuration.
///
/// Settings are read and validated before any output file is created, so
/// a missing or malformed settings file never leaves a truncated profile
/// behind.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use abl_rs::cases::EadyCase;
///
/// let case = EadyCase::from_settings_file(Path::new("eady.ini")).unwrap();
/// let summary = case.run(Path::new(".")).unwrap();
/// println!("dbdy_ls = {:e}", summary.dbdy_ls);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EadyCase {
    /// Number of vertical levels.
    pub ktot: usize,
    /// Total domain height (m).
    pub zsize: f64,
}

impl EadyCase {
    /// Build the case from parsed settings.
    ///
    /// # Errors
    /// [`crate::io::SettingsError`] if `ktot` or `zsize` is absent or
    /// unparsable.
    pub fn from_settings(settings: &Settings) -> Result<Self, CaseError> {
        Ok(Self {
            ktot: settings.get_usize("ktot")?,
            zsize: settings.get_f64("zsize")?,
        })
    }

    /// Read and parse a settings file, then build the case from it.
    pub fn from_settings_file(path: &Path) -> Result<Self, CaseError> {
        let settings = read_settings_file(path)?;
        Self::from_settings(&settings)
    }

    /// Large-scale meridional buoyancy gradient `-dudz * fc`.
    pub fn dbdy_ls(&self) -> f64 {
        ShearProfile::new(DUDZ).meridional_buoyancy_gradient(FC)
    }

    /// Generate the grid and profiles and write `eady.prof` into `dir`.
    pub fn run(&self, dir: &Path) -> Result<EadySummary, CaseError> {
        let grid = VerticalGrid::uniform(self.ktot, self.zsize)?;

        let b = BuoyancyProfile::Linear { n2: N2 }.evaluate(grid.z());
        let shear = ShearProfile::new(DUDZ);
        let u = shear.evaluate(grid.z());
        let ug = shear.geostrophic(grid.z());

        let output = dir.join(PROFILE_FILENAME);
        ProfileWriter::new()
            .column("z", grid.z())?
            .column("b", &b)?
            .column("u", &u)?
            .column("ug", &ug)?
            .write_file(&output)?;

        Ok(EadySummary {
            ktot: grid.kmax(),
            zsize: self.zsize,
            dbdy_ls: self.dbdy_ls(),
            output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::SettingsError;

    #[test]
    fn test_from_settings() {
        let settings = Settings::parse("ktot=64\nzsize=5.");
        let case = EadyCase::from_settings(&settings).unwrap();
        assert_eq!(case.ktot, 64);
        assert_eq!(case.zsize, 5.0);
    }

    #[test]
    fn test_missing_ktot_fails() {
        let settings = Settings::parse("zsize=5.");
        let result = EadyCase::from_settings(&settings);
        assert!(matches!(
            result,
            Err(CaseError::Settings(SettingsError::MissingKey { .. }))
        ));
    }

    #[test]
    fn test_dbdy_ls_is_exact() {
        let case = EadyCase {
            ktot: 64,
            zsize: 5.0,
        };
        assert_eq!(case.dbdy_ls(), -1.0e-4 * 1.0e-4);
    }
}
