//! Channel storage descriptor.

use std::fmt;

use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::enumerated::PixelType;
use crate::error::{Error, Result};
use crate::value::Value;

/// Sample type and subsampling of one image channel.
///
/// Subsampling factors are stored as given; the native library expects
/// them to be positive.
///
/// # Example
///
/// ```rust
/// use vfx_imath::{Channel, PixelType, Value};
///
/// let ch = Channel::new(PixelType::Float, 1, 1);
/// assert_eq!(ch.to_string(), "FLOAT (1, 1)");
///
/// // Raw integers are rejected at the dynamic boundary
/// assert!(Channel::from_value(&Value::Int(2), 1, 1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Channel {
    /// Sample storage type.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub pixel_type: PixelType,
    /// Horizontal subsampling.
    pub x_sampling: u32,
    /// Vertical subsampling.
    pub y_sampling: u32,
}

impl Channel {
    /// Creates a channel descriptor.
    #[inline]
    pub const fn new(pixel_type: PixelType, x_sampling: u32, y_sampling: u32) -> Self {
        Self {
            pixel_type,
            x_sampling,
            y_sampling,
        }
    }

    /// Creates a channel from an untyped pixel type.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] unless `pixel_type` is [`Value::PixelType`].
    /// Integer codes are not accepted.
    pub fn from_value(pixel_type: &Value, x_sampling: u32, y_sampling: u32) -> Result<Self> {
        match pixel_type {
            Value::PixelType(t) => Ok(Self::new(*t, x_sampling, y_sampling)),
            other => {
                debug!(got = other.type_name(), "channel type is not a PixelType");
                Err(Error::type_mismatch("type", "PixelType", other.type_name()))
            }
        }
    }

    /// `true` if the channel is stored at full resolution.
    #[inline]
    pub fn is_full_resolution(&self) -> bool {
        self.x_sampling == 1 && self.y_sampling == 1
    }
}

impl Default for Channel {
    fn default() -> Self {
        Self::new(PixelType::Half, 1, 1)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.pixel_type, self.x_sampling, self.y_sampling)
    }
}
