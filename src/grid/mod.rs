//! Vertical grid generation for boundary-layer simulation domains.
//!
//! A vertical grid is an ordered sequence of cell-center heights `z` and
//! cell thicknesses `dz`, indexed from 0 at the bottom. Thicknesses come
//! from a [`Stretching`] policy; heights follow by integrating thickness
//! upward from the surface.
//!
//! # Stretching Policies
//!
//! - [`UniformStretching`]: constant spacing `zsize / kmax`
//! - [`ThreeLayerStretching`]: tanh-blended transition between three
//!   constant-thickness regions (fine surface layer, uniform interior,
//!   coarse upper region)
//!
//! # Example
//!
//! ```
//! use abl_rs::grid::{UniformStretching, VerticalGrid};
//!
//! // 64 levels over a 3200 m domain
//! let grid = VerticalGrid::new(64, UniformStretching { zsize: 3200.0 }).unwrap();
//! assert_eq!(grid.kmax(), 64);
//! assert_eq!(grid.z()[0], 0.5 * grid.dz()[0]);
//! ```

mod stretching;
mod vertical;

pub use stretching::{GridError, Stretching, ThreeLayerStretching, UniformStretching};
pub use vertical::VerticalGrid;
