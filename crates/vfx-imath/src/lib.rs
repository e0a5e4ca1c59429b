//! # vfx-imath
//!
//! OpenEXR header value types.
//!
//! This crate declares the plain value types an OpenEXR binding passes to and
//! from the native library: vectors, boxes, chromaticities, enumerated
//! constants, channel and tile descriptors, and timecode records. It performs
//! no I/O and holds no state; every type is an immutable `Copy` value that can
//! be shared freely between threads.
//!
//! - [`V2i`], [`V2f`], [`Box2i`], [`Box2f`] - Points and windows
//! - [`Chromaticity`], [`Chromaticities`] - Color primaries
//! - [`LineOrder`], [`Compression`], [`PixelType`], [`LevelMode`], [`LevelRoundingMode`] - Enumerated constants
//! - [`Channel`] - Channel sample type and subsampling
//! - [`Rational`], [`TimeCode`], [`KeyCode`] - Frame rate and frame identification
//! - [`TileDescription`], [`PreviewImage`] - Tiling policy and preview marker
//! - [`Value`] - Untyped value at a binding boundary
//!
//! ## Native Codes
//!
//! Enumerated constants keep the integer codes of the native library, so
//! `PixelType::Float` is `2` on both sides:
//!
//! ```rust
//! use vfx_imath::{Compression, Enumerated, PixelType};
//!
//! assert_eq!(u8::from(PixelType::Float), 2);
//! assert_eq!(Compression::from_code(4)?.to_string(), "PIZ_COMPRESSION");
//! # Ok::<(), vfx_imath::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Serialization for all value types; enumerated constants use
//!   their symbolic names

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod channel;
pub mod enumerated;
pub mod error;
pub mod tile;
pub mod time;
pub mod value;
pub mod vec;

pub use channel::Channel;
pub use enumerated::{Compression, Enumerated, LevelMode, LevelRoundingMode, LineOrder, PixelType};
pub use error::{Error, Result};
pub use tile::{PreviewImage, TileDescription};
pub use time::{KeyCode, Rational, TimeCode};
pub use value::{FromValue, Value};
pub use vec::{Box2, Box2f, Box2i, Chromaticities, Chromaticity, V2, V2f, V2i};

/// Prelude module for convenient imports.
///
/// ```
/// use vfx_imath::prelude::*;
/// ```
pub mod prelude {
    pub use crate::channel::Channel;
    pub use crate::enumerated::{
        Compression, Enumerated, LevelMode, LevelRoundingMode, LineOrder, PixelType,
    };
    pub use crate::error::{Error, Result};
    pub use crate::tile::{PreviewImage, TileDescription};
    pub use crate::time::{KeyCode, Rational, TimeCode};
    pub use crate::value::{FromValue, Value};
    pub use crate::vec::{Box2f, Box2i, Chromaticities, Chromaticity, V2f, V2i};
}
