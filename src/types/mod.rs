//! Strongly-typed physical quantities.
//!
//! Newtypes keep heights and thicknesses from being mixed up in APIs
//! where both are plain meters underneath.
//!
//! # Example
//!
//! ```
//! use abl_rs::types::{Height, Thickness};
//!
//! let ztop = Height::new(3.2);       // Top of domain
//! let dz = Thickness::new(0.002);    // Cell thickness
//! assert_eq!(ztop.meters(), 3.2);
//! assert_eq!(dz.meters(), 0.002);
//! ```

mod physical;

pub use physical::{Height, Thickness};
