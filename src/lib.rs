//! # abl-rs
//!
//! Vertical grid and initial-condition profile generation for atmospheric
//! boundary-layer simulation cases.
//!
//! This crate provides the building blocks for producing the one-dimensional
//! vertical grids and initial profiles consumed by a stratified-flow solver:
//! - Stretched and uniform vertical grids (tanh-blended layer thicknesses)
//! - Buoyancy and shear profile evaluators
//! - Plain-text profile output and `key=value` settings input
//! - The `breeze` and `eady` case definitions tying these together

pub mod cases;
pub mod grid;
pub mod io;
pub mod profile;
pub mod types;

// Re-export main types for convenience
pub use cases::{BreezeCase, BreezeResolution, CaseError, EadyCase};
pub use grid::{
    GridError, Stretching, ThreeLayerStretching, UniformStretching, VerticalGrid,
};
pub use io::{
    ProfileError, ProfileWriter, Settings, SettingsError, read_settings_file,
};
pub use profile::{BuoyancyProfile, ShearProfile};
pub use types::{Height, Thickness};
