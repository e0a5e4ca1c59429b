//! Untyped values crossing a binding boundary.
//!
//! A scripting binding hands over values whose type is only known at
//! runtime. [`Value`] holds any of them, and [`FromValue`] turns one back
//! into a concrete type, checking the type on the way.
//!
//! # Conversion Rules
//!
//! - Enumerated types accept their own variant, an `Int` code, or a `Str` name
//! - Record types accept only their own variant
//!
//! # Example
//!
//! ```rust
//! use vfx_imath::{Compression, FromValue, Value};
//!
//! let by_code = Compression::from_value(&Value::Int(4))?;
//! let by_name = Compression::from_value(&Value::from("PIZ_COMPRESSION"))?;
//! assert_eq!(by_code, by_name);
//! # Ok::<(), vfx_imath::Error>(())
//! ```

use std::fmt;

use tracing::debug;

use crate::channel::Channel;
use crate::enumerated::{Compression, Enumerated, LevelMode, LevelRoundingMode, LineOrder, PixelType};
use crate::error::{Error, Result};
use crate::tile::{PreviewImage, TileDescription};
use crate::time::{KeyCode, Rational, TimeCode};
use crate::vec::{Box2f, Box2i, Chromaticities, Chromaticity, V2f, V2i};

/// Dynamically typed value.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum Value {
    /// Absent value.
    None,
    /// Boolean.
    Bool(bool),
    /// Integer, possibly an enumerated code.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// String, possibly an enumerated name.
    Str(String),
    /// Integer vector.
    V2i(V2i),
    /// Float vector.
    V2f(V2f),
    /// Integer box.
    Box2i(Box2i),
    /// Float box.
    Box2f(Box2f),
    /// Single chromaticity.
    Chromaticity(Chromaticity),
    /// Primaries and white point.
    Chromaticities(Chromaticities),
    /// Scanline order.
    LineOrder(LineOrder),
    /// Compression method.
    Compression(Compression),
    /// Sample type.
    PixelType(PixelType),
    /// Level layout.
    LevelMode(LevelMode),
    /// Level rounding.
    LevelRoundingMode(LevelRoundingMode),
    /// Channel descriptor.
    Channel(Channel),
    /// Fraction.
    Rational(Rational),
    /// Timecode.
    TimeCode(TimeCode),
    /// Keycode.
    KeyCode(KeyCode),
    /// Tile description.
    TileDescription(TileDescription),
    /// Preview marker.
    PreviewImage(PreviewImage),
}

impl Value {
    /// Name of the held type, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::None => "None",
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::Str(_) => "Str",
            Value::V2i(_) => "V2i",
            Value::V2f(_) => "V2f",
            Value::Box2i(_) => "Box2i",
            Value::Box2f(_) => "Box2f",
            Value::Chromaticity(_) => "Chromaticity",
            Value::Chromaticities(_) => "Chromaticities",
            Value::LineOrder(_) => "LineOrder",
            Value::Compression(_) => "Compression",
            Value::PixelType(_) => "PixelType",
            Value::LevelMode(_) => "LevelMode",
            Value::LevelRoundingMode(_) => "LevelRoundingMode",
            Value::Channel(_) => "Channel",
            Value::Rational(_) => "Rational",
            Value::TimeCode(_) => "TimeCode",
            Value::KeyCode(_) => "KeyCode",
            Value::TileDescription(_) => "TileDescription",
            Value::PreviewImage(_) => "PreviewImage",
        }
    }

    /// Returns `true` for [`Value::None`].
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Converts into a concrete type. See [`FromValue`].
    #[inline]
    pub fn get<T: FromValue>(&self) -> Result<T> {
        T::from_value(self)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => f.write_str("None"),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Str(v) => write!(f, "{}", v),
            Value::V2i(v) => fmt::Display::fmt(v, f),
            Value::V2f(v) => fmt::Display::fmt(v, f),
            Value::Box2i(v) => fmt::Display::fmt(v, f),
            Value::Box2f(v) => fmt::Display::fmt(v, f),
            Value::Chromaticity(v) => fmt::Display::fmt(v, f),
            Value::Chromaticities(v) => fmt::Display::fmt(v, f),
            Value::LineOrder(v) => fmt::Display::fmt(v, f),
            Value::Compression(v) => fmt::Display::fmt(v, f),
            Value::PixelType(v) => fmt::Display::fmt(v, f),
            Value::LevelMode(v) => fmt::Display::fmt(v, f),
            Value::LevelRoundingMode(v) => fmt::Display::fmt(v, f),
            Value::Channel(v) => fmt::Display::fmt(v, f),
            Value::Rational(v) => fmt::Display::fmt(v, f),
            Value::TimeCode(v) => fmt::Display::fmt(v, f),
            Value::KeyCode(v) => fmt::Display::fmt(v, f),
            Value::TileDescription(v) => fmt::Display::fmt(v, f),
            Value::PreviewImage(v) => fmt::Display::fmt(v, f),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::None, Into::into)
    }
}

/// Extraction of a concrete type from a [`Value`].
pub trait FromValue: Sized {
    /// Converts `value`.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] for records given another type,
    /// [`Error::InvalidEnumerant`] for enumerations given anything that
    /// does not name one of their constants.
    fn from_value(value: &Value) -> Result<Self>;
}

/// Enumerations: own variant, integer code or symbolic name.
fn enum_from_value<E: Enumerated>(value: &Value, own: Option<E>) -> Result<E> {
    if let Some(v) = own {
        return Ok(v);
    }
    let res = match value {
        Value::Int(code) => i32::try_from(*code)
            .map_err(|_| Error::invalid_enumerant(E::KIND, code))
            .and_then(E::from_code),
        Value::Str(name) => E::from_name(name),
        other => Err(Error::invalid_enumerant(E::KIND, other)),
    };
    if let Err(e) = &res {
        debug!(kind = E::KIND, got = value.type_name(), "{}", e);
    }
    res
}

macro_rules! value_conversions {
    (enum: $($ty:ident),+ ; record: $($rec:ident),+ $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$ty(v)
                }
            }

            impl FromValue for $ty {
                fn from_value(value: &Value) -> Result<Self> {
                    let own = match value {
                        Value::$ty(v) => Some(*v),
                        _ => None,
                    };
                    enum_from_value(value, own)
                }
            }
        )+
        $(
            impl From<$rec> for Value {
                fn from(v: $rec) -> Self {
                    Value::$rec(v)
                }
            }

            impl FromValue for $rec {
                fn from_value(value: &Value) -> Result<Self> {
                    match value {
                        Value::$rec(v) => Ok(*v),
                        other => {
                            debug!(expected = stringify!($rec), got = other.type_name(), "value type mismatch");
                            Err(Error::type_mismatch("value", stringify!($rec), other.type_name()))
                        }
                    }
                }
            }
        )+
    };
}

value_conversions! {
    enum: LineOrder, Compression, PixelType, LevelMode, LevelRoundingMode;
    record: V2i, V2f, Box2i, Box2f, Chromaticity, Chromaticities, Channel,
        Rational, TimeCode, KeyCode, TileDescription, PreviewImage,
}
