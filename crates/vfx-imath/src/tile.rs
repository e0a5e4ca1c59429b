//! Tiling and preview descriptors.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::enumerated::{LevelMode, LevelRoundingMode};

/// Tile size and resolution level policy of a tiled image.
///
/// # Example
///
/// ```rust
/// use vfx_imath::{LevelMode, TileDescription};
///
/// let td = TileDescription::default();
/// assert_eq!((td.x_size, td.y_size), (32, 32));
/// assert_eq!(td.mode, LevelMode::OneLevel);
/// assert_eq!(td.to_string(), "<TileDescription 32x32 ONE_LEVEL ROUND_DOWN>");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TileDescription {
    /// Tile width in pixels.
    pub x_size: u32,
    /// Tile height in pixels.
    pub y_size: u32,
    /// Level layout.
    pub mode: LevelMode,
    /// Level size rounding.
    pub rounding_mode: LevelRoundingMode,
}

impl TileDescription {
    /// Default tile edge length.
    pub const DEFAULT_SIZE: u32 = 32;

    /// Creates a tile description.
    pub const fn new(x_size: u32, y_size: u32, mode: LevelMode, rounding_mode: LevelRoundingMode) -> Self {
        Self {
            x_size,
            y_size,
            mode,
            rounding_mode,
        }
    }

    /// Square single-level tiles of the given size.
    pub const fn square(size: u32) -> Self {
        Self::new(size, size, LevelMode::OneLevel, LevelRoundingMode::RoundDown)
    }
}

impl Default for TileDescription {
    fn default() -> Self {
        Self::square(Self::DEFAULT_SIZE)
    }
}

impl fmt::Display for TileDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<TileDescription {}x{} {} {}>",
            self.x_size, self.y_size, self.mode, self.rounding_mode
        )
    }
}

/// Marker for a preview image attribute. Carries no pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PreviewImage;

impl fmt::Display for PreviewImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<PreviewImage>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let td = TileDescription::default();
        assert_eq!(td.x_size, 32);
        assert_eq!(td.y_size, 32);
        assert_eq!(u8::from(td.mode), 0);
        assert_eq!(u8::from(td.rounding_mode), 0);
    }

    #[test]
    fn test_display() {
        let td = TileDescription::new(64, 16, LevelMode::MipmapLevels, LevelRoundingMode::RoundUp);
        assert_eq!(td.to_string(), "<TileDescription 64x16 MIPMAP_LEVELS ROUND_UP>");
    }

    #[test]
    fn test_eq_per_field() {
        let a = TileDescription::default();
        assert_eq!(a, TileDescription::square(32));
        assert_ne!(a, TileDescription { x_size: 64, ..a });
        assert_ne!(a, TileDescription { mode: LevelMode::RipmapLevels, ..a });
        assert_ne!(a, TileDescription { rounding_mode: LevelRoundingMode::RoundUp, ..a });
    }

    #[test]
    fn test_preview() {
        assert_eq!(PreviewImage, PreviewImage::default());
        assert_eq!(PreviewImage.to_string(), "<PreviewImage>");
    }
}
