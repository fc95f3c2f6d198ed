//! Simulation case definitions.
//!
//! A case ties a grid, its profiles, and the output file together: the
//! `breeze` case generates a stretched-grid buoyancy profile, the `eady`
//! case a uniform-grid buoyancy and wind profile driven by a solver
//! settings file. Each case writes a single `<case>.prof` artifact and
//! returns a summary of diagnostics for the caller to report.

pub mod breeze;
pub mod eady;

pub use breeze::{BreezeCase, BreezeResolution, BreezeSummary};
pub use eady::{EadyCase, EadySummary};

use thiserror::Error;

use crate::grid::GridError;
use crate::io::{ProfileError, SettingsError};

/// Error type for case generation.
///
/// Any failure aborts the whole run; nothing is retried or recovered.
#[derive(Debug, Error)]
pub enum CaseError {
    /// Grid construction failed.
    #[error("grid generation failed: {0}")]
    Grid(#[from] GridError),

    /// The settings file was absent, malformed, or incomplete.
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),

    /// The profile file could not be written.
    #[error("profile output failed: {0}")]
    Profile(#[from] ProfileError),
}
