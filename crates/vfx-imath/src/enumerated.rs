//! Enumerated OpenEXR constants.
//!
//! Each type here is a closed set of named integer codes. The codes are the
//! ones the native OpenEXR library uses on its public surface, so values can
//! be handed across a binding boundary unchanged.
//!
//! # Types
//!
//! - [`LineOrder`] - Scanline storage order
//! - [`Compression`] - Compression method identifier
//! - [`PixelType`] - Channel sample type
//! - [`LevelMode`] - Single level, mipmap or ripmap
//! - [`LevelRoundingMode`] - Level size rounding
//!
//! All of them implement [`Enumerated`], which provides lookups in both
//! directions through the static name table of the type.
//!
//! # Usage
//!
//! ```rust
//! use vfx_imath::{Compression, Enumerated};
//!
//! let piz = Compression::from_code(4)?;
//! assert_eq!(piz.to_string(), "PIZ_COMPRESSION");
//! assert_eq!("PIZ_COMPRESSION".parse::<Compression>()?, piz);
//! assert!(Compression::name_for_code(11).is_err());
//! # Ok::<(), vfx_imath::Error>(())
//! ```
//!
//! # Validation
//!
//! Values are validated when they are built: an enumerated value can never
//! hold a code outside its table. Raw integers that never became a value can
//! still be rendered through [`Enumerated::name_for_code`], which reports
//! [`Error::RenderError`] for unknown codes.

use tracing::trace;

use crate::error::{Error, Result};

/// Common behaviour of all enumerated OpenEXR constants.
///
/// Implementors are fieldless enums whose discriminants equal their native
/// codes. `NAMES[code]` is the symbolic name of `code`.
pub trait Enumerated: Copy + Sized + 'static {
    /// Type name used in error messages.
    const KIND: &'static str;

    /// Symbolic names, indexed by code.
    const NAMES: &'static [&'static str];

    /// Every value, in code order.
    const ALL: &'static [Self];

    /// Native integer code.
    fn code(self) -> u8;

    /// Symbolic name, e.g. `"ZIP_COMPRESSION"`.
    fn name(self) -> &'static str;

    /// Looks up a value by native code.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidEnumerant`] if `code` is not in the table.
    fn from_code(code: i32) -> Result<Self>;

    /// Looks up a value by symbolic name. Matching is exact.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidEnumerant`] if `name` is not in the table.
    fn from_name(name: &str) -> Result<Self> {
        match Self::NAMES.iter().position(|n| *n == name) {
            Some(i) => Ok(Self::ALL[i]),
            None => {
                trace!(kind = Self::KIND, name, "unknown enumerant name");
                Err(Error::invalid_enumerant(Self::KIND, name))
            }
        }
    }

    /// Renders a raw code without building a value first.
    ///
    /// # Errors
    ///
    /// [`Error::RenderError`] if `code` has no name.
    fn name_for_code(code: i32) -> Result<&'static str> {
        usize::try_from(code)
            .ok()
            .and_then(|i| Self::NAMES.get(i).copied())
            .ok_or_else(|| Error::render_error(Self::KIND, code))
    }
}

/// Declares a fieldless `#[repr(u8)]` enum together with its [`Enumerated`]
/// table and the standard conversions.
///
/// Variants must be listed in code order starting at zero.
macro_rules! enumerated {
    (
        $(#[$meta:meta])*
        pub enum $ty:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $code:literal => $name:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        #[repr(u8)]
        pub enum $ty {
            $(
                $(#[$vmeta])*
                $variant = $code,
            )+
        }

        const _: () = {
            let codes: &[u8] = &[$($code),+];
            let mut i = 0;
            while i < codes.len() {
                assert!(codes[i] as usize == i, "enumerated codes must be listed in order from zero");
                i += 1;
            }
        };

        impl Enumerated for $ty {
            const KIND: &'static str = stringify!($ty);
            const NAMES: &'static [&'static str] = &[$($name),+];
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            #[inline]
            fn code(self) -> u8 {
                self as u8
            }

            fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }

            fn from_code(code: i32) -> Result<Self> {
                match code {
                    $($code => Ok(Self::$variant),)+
                    _ => {
                        trace!(kind = Self::KIND, code, "unknown enumerant code");
                        Err(Error::invalid_enumerant(Self::KIND, code))
                    }
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.pad(self.name())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                Self::from_name(s)
            }
        }

        impl TryFrom<i32> for $ty {
            type Error = Error;

            fn try_from(code: i32) -> Result<Self> {
                Self::from_code(code)
            }
        }

        impl From<$ty> for u8 {
            #[inline]
            fn from(v: $ty) -> u8 {
                v.code()
            }
        }

        impl From<$ty> for i32 {
            #[inline]
            fn from(v: $ty) -> i32 {
                i32::from(v.code())
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.name())
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                let name = <std::borrow::Cow<'de, str> as serde::Deserialize<'de>>::deserialize(deserializer)?;
                Self::from_name(&name).map_err(serde::de::Error::custom)
            }
        }
    };
}

enumerated! {
    /// Order in which scanlines are stored in the file.
    pub enum LineOrder {
        /// First scanline has the lowest y coordinate.
        #[default]
        IncreasingY = 0 => "INCREASING_Y",
        /// First scanline has the highest y coordinate.
        DecreasingY = 1 => "DECREASING_Y",
        /// Tiles are stored in no particular order.
        RandomY = 2 => "RANDOM_Y",
    }
}

enumerated! {
    /// Compression method applied to pixel blocks.
    pub enum Compression {
        /// Uncompressed.
        None = 0 => "NO_COMPRESSION",
        /// Run length encoding.
        Rle = 1 => "RLE_COMPRESSION",
        /// Zlib, one scanline per block.
        Zips = 2 => "ZIPS_COMPRESSION",
        /// Zlib, 16 scanlines per block.
        #[default]
        Zip = 3 => "ZIP_COMPRESSION",
        /// Wavelet with Huffman, 32 scanlines.
        Piz = 4 => "PIZ_COMPRESSION",
        /// Lossy 24-bit float, then zlib.
        Pxr24 = 5 => "PXR24_COMPRESSION",
        /// Lossy 4x4 block, fixed rate.
        B44 = 6 => "B44_COMPRESSION",
        /// B44 with flat-field shortcut.
        B44a = 7 => "B44A_COMPRESSION",
        /// Lossy DCT, 32 scanlines.
        Dwaa = 8 => "DWAA_COMPRESSION",
        /// Lossy DCT, 256 scanlines.
        Dwab = 9 => "DWAB_COMPRESSION",
        /// High-throughput JPEG 2000.
        Htj2k = 10 => "HTJ2K_COMPRESSION",
    }
}

enumerated! {
    /// Storage type of a channel's samples.
    pub enum PixelType {
        /// 32-bit unsigned integer.
        Uint = 0 => "UINT",
        /// 16-bit float.
        #[default]
        Half = 1 => "HALF",
        /// 32-bit float.
        Float = 2 => "FLOAT",
    }
}

enumerated! {
    /// Resolution level layout of a tiled image.
    pub enum LevelMode {
        /// A single full resolution level.
        #[default]
        OneLevel = 0 => "ONE_LEVEL",
        /// Levels halved in both directions.
        MipmapLevels = 1 => "MIPMAP_LEVELS",
        /// Levels halved independently in x and y.
        RipmapLevels = 2 => "RIPMAP_LEVELS",
    }
}

enumerated! {
    /// Rounding applied when a level size is not a power of two.
    pub enum LevelRoundingMode {
        /// Round sizes down.
        #[default]
        RoundDown = 0 => "ROUND_DOWN",
        /// Round sizes up.
        RoundUp = 1 => "ROUND_UP",
    }
}

impl Compression {
    /// Whether decoding can differ from the original pixels.
    pub fn is_lossy(self) -> bool {
        matches!(
            self,
            Self::Pxr24 | Self::B44 | Self::B44a | Self::Dwaa | Self::Dwab
        )
    }

    /// Scanlines grouped into one compressed block.
    pub fn scanlines_per_block(self) -> u32 {
        match self {
            Self::None | Self::Rle | Self::Zips => 1,
            Self::Zip | Self::Pxr24 => 16,
            Self::Piz | Self::B44 | Self::B44a | Self::Dwaa => 32,
            Self::Dwab | Self::Htj2k => 256,
        }
    }
}

impl PixelType {
    /// Bytes used by one sample.
    #[inline]
    pub fn bytes_per_sample(self) -> usize {
        match self {
            Self::Half => 2,
            Self::Uint | Self::Float => 4,
        }
    }
}

impl LevelMode {
    /// `true` for mipmaps and ripmaps.
    #[inline]
    pub fn has_levels(self) -> bool {
        self != Self::OneLevel
    }
}
