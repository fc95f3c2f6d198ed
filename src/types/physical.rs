//! Physical quantity newtypes for vertical grids.
//!
//! These types prevent mixing up different physical quantities
//! that all have the same underlying type (f64).

use std::fmt;

// =============================================================================
// Height (cell-center or domain-top height, non-negative)
// =============================================================================

/// Height above the surface (z), always non-negative.
///
/// Cell centers sit half a thickness above the cell below, so the lowest
/// height in any grid is `0.5 * dz[0]`, never zero.
///
/// # Example
///
/// ```
/// use abl_rs::types::Height;
///
/// let z = Height::new(1.28);
/// assert_eq!(z.meters(), 1.28);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Height(f64);

impl Height {
    /// Create a new height value.
    #[inline]
    pub fn new(meters: f64) -> Self {
        debug_assert!(meters >= 0.0, "Height must be non-negative, got {}", meters);
        Self(meters)
    }

    /// Zero height (the surface).
    pub const ZERO: Self = Self(0.0);

    /// Get the height in meters.
    #[inline]
    pub fn meters(self) -> f64 {
        self.0
    }

    /// Convert to raw f64.
    #[inline]
    pub fn into_inner(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}m", self.0)
    }
}

impl From<Height> for f64 {
    #[inline]
    fn from(z: Height) -> f64 {
        z.0
    }
}

// =============================================================================
// Thickness (cell thickness, always positive)
// =============================================================================

/// Cell thickness (Δz), always positive.
///
/// A grid level with 2 mm of spacing has `Thickness(0.002)`; zero or
/// negative thicknesses are invalid everywhere in this crate.
///
/// # Example
///
/// ```
/// use abl_rs::types::Thickness;
///
/// let dz = Thickness::new(0.016);
/// assert_eq!(dz.meters(), 0.016);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Thickness(f64);

impl Thickness {
    /// Create a new thickness value.
    #[inline]
    pub fn new(meters: f64) -> Self {
        debug_assert!(meters > 0.0, "Thickness must be positive, got {}", meters);
        Self(meters)
    }

    /// Get the thickness in meters.
    #[inline]
    pub fn meters(self) -> f64 {
        self.0
    }

    /// Convert to raw f64.
    #[inline]
    pub fn into_inner(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Thickness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}m", self.0)
    }
}

impl From<Thickness> for f64 {
    #[inline]
    fn from(dz: Thickness) -> f64 {
        dz.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_accessors() {
        let z = Height::new(1.5);
        assert_eq!(z.meters(), 1.5);
        assert_eq!(z.into_inner(), 1.5);
        assert_eq!(f64::from(z), 1.5);
        assert_eq!(Height::ZERO.meters(), 0.0);
    }

    #[test]
    fn test_thickness_accessors() {
        let dz = Thickness::new(0.002);
        assert_eq!(dz.meters(), 0.002);
        assert_eq!(f64::from(dz), 0.002);
    }

    #[test]
    fn test_ordering() {
        assert!(Height::new(0.5) < Height::new(1.0));
        assert!(Thickness::new(0.001) < Thickness::new(0.016));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Height::new(1.28)), "1.2800m");
        assert_eq!(format!("{}", Thickness::new(0.016)), "0.0160m");
    }
}
