//! Points, boxes and chromaticities.
//!
//! - [`V2`] - Two-component vector, aliased as [`V2i`] and [`V2f`]
//! - [`Box2`] - Axis-aligned box with optional corners, aliased as [`Box2i`] and [`Box2f`]
//! - [`Chromaticity`] - CIE xy coordinate
//! - [`Chromaticities`] - Primaries and white point of an image
//!
//! # Usage
//!
//! ```rust
//! use vfx_imath::{Box2i, V2i};
//!
//! let data_window = Box2i::new(V2i::new(0, 0), V2i::new(1919, 1079));
//! assert_eq!(data_window.size(), Some(V2i::new(1920, 1080)));
//! assert_eq!(data_window.to_string(), "(0, 0) - (1919, 1079)");
//! ```
//!
//! Corners are not reordered or checked: keeping `min <= max` is up to the
//! caller.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Two-component vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct V2<T> {
    /// X component.
    pub x: T,
    /// Y component.
    pub y: T,
}

/// Integer vector, used for window corners.
pub type V2i = V2<i32>;

/// Float vector, used for screen window center.
pub type V2f = V2<f32>;

impl<T> V2<T> {
    /// Creates a vector.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T> From<(T, T)> for V2<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T: fmt::Display> fmt::Display for V2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned 2D box.
///
/// Either corner may be absent. Two boxes are equal when both corners
/// are equal, absent corners included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Box2<T> {
    /// Lower corner, inclusive.
    pub min: Option<V2<T>>,
    /// Upper corner, inclusive.
    pub max: Option<V2<T>>,
}

/// Integer box (data and display windows).
pub type Box2i = Box2<i32>;

/// Float box.
pub type Box2f = Box2<f32>;

impl<T> Box2<T> {
    /// Creates a box with both corners set.
    #[inline]
    pub const fn new(min: V2<T>, max: V2<T>) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Box with no corners.
    #[inline]
    pub const fn empty() -> Self {
        Self { min: None, max: None }
    }

    /// `true` if either corner is missing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.is_none() || self.max.is_none()
    }
}

impl Box2i {
    /// Inclusive pixel extent, `max - min + 1`.
    ///
    /// Returns `None` if a corner is missing or the extent does not fit in `i32`.
    pub fn size(&self) -> Option<V2i> {
        let (min, max) = (self.min?, self.max?);
        let extent = |lo: i32, hi: i32| hi.checked_sub(lo)?.checked_add(1);
        Some(V2::new(extent(min.x, max.x)?, extent(min.y, max.y)?))
    }
}

impl Box2f {
    /// Extent, `max - min`.
    pub fn size(&self) -> Option<V2f> {
        let (min, max) = (self.min?, self.max?);
        Some(V2::new(max.x - min.x, max.y - min.y))
    }
}

struct OptDisplay<'a, T>(&'a Option<T>);

impl<T: fmt::Display> fmt::Display for OptDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => fmt::Display::fmt(v, f),
            None => f.write_str("None"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Box2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", OptDisplay(&self.min), OptDisplay(&self.max))
    }
}

/// CIE xy chromaticity coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Chromaticity {
    /// x coordinate.
    pub x: f32,
    /// y coordinate.
    pub y: f32,
}

impl Chromaticity {
    /// Creates a chromaticity.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Chromaticity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Red, green and blue primaries plus white point.
///
/// Any of the four may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Chromaticities {
    /// Red primary.
    pub red: Option<Chromaticity>,
    /// Green primary.
    pub green: Option<Chromaticity>,
    /// Blue primary.
    pub blue: Option<Chromaticity>,
    /// White point.
    pub white: Option<Chromaticity>,
}

impl Chromaticities {
    /// Creates a fully populated descriptor.
    pub const fn new(red: Chromaticity, green: Chromaticity, blue: Chromaticity, white: Chromaticity) -> Self {
        Self {
            red: Some(red),
            green: Some(green),
            blue: Some(blue),
            white: Some(white),
        }
    }

    /// Rec.709 primaries with D65 white, the OpenEXR default.
    pub const fn rec709() -> Self {
        Self::new(
            Chromaticity::new(0.6400, 0.3300),
            Chromaticity::new(0.3000, 0.6000),
            Chromaticity::new(0.1500, 0.0600),
            Chromaticity::new(0.3127, 0.3290),
        )
    }

    /// `true` when all four coordinates are present.
    pub fn is_complete(&self) -> bool {
        self.red.is_some() && self.green.is_some() && self.blue.is_some() && self.white.is_some()
    }
}

impl fmt::Display for Chromaticities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            OptDisplay(&self.red),
            OptDisplay(&self.green),
            OptDisplay(&self.blue),
            OptDisplay(&self.white)
        )
    }
}
