//! Error types for vfx-imath value construction.
//!
//! Every failure in this crate happens at construction or rendering time
//! and is local to the call that produced it. Nothing is retried.
//!
//! # Usage
//!
//! ```rust
//! use vfx_imath::{Compression, Enumerated, Error};
//!
//! let err = Compression::from_name("LZW_COMPRESSION").unwrap_err();
//! assert!(err.is_invalid_enumerant());
//! assert!(err.to_string().contains("LZW_COMPRESSION"));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or rendering OpenEXR value types.
///
/// # Categories
///
/// - **Type errors**: [`TypeMismatch`](Error::TypeMismatch)
/// - **Lookup errors**: [`InvalidEnumerant`](Error::InvalidEnumerant), [`RenderError`](Error::RenderError)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A field received a value of the wrong kind.
    ///
    /// Raised by [`Channel::from_value`](crate::Channel::from_value) when the
    /// pixel type is anything other than a [`PixelType`](crate::PixelType).
    #[error("{field} needs to be a {expected}, got {got}")]
    TypeMismatch {
        /// Field being assigned
        field: &'static str,
        /// Type the field requires
        expected: &'static str,
        /// Type that was supplied
        got: String,
    },

    /// Neither a known code nor a known symbolic name.
    #[error("invalid {kind} enumerant: {value}")]
    InvalidEnumerant {
        /// Enumeration type name, e.g. `Compression`
        kind: &'static str,
        /// Offending input as text
        value: String,
    },

    /// A raw code has no symbolic name to render.
    #[error("{kind} code {code} has no name")]
    RenderError {
        /// Enumeration type name
        kind: &'static str,
        /// Code that was looked up
        code: i64,
    },
}

impl Error {
    /// Creates an [`Error::TypeMismatch`] error.
    #[inline]
    pub fn type_mismatch(field: &'static str, expected: &'static str, got: impl Into<String>) -> Self {
        Self::TypeMismatch {
            field,
            expected,
            got: got.into(),
        }
    }

    /// Creates an [`Error::InvalidEnumerant`] error.
    #[inline]
    pub fn invalid_enumerant(kind: &'static str, value: impl ToString) -> Self {
        Self::InvalidEnumerant {
            kind,
            value: value.to_string(),
        }
    }

    /// Creates an [`Error::RenderError`] error.
    #[inline]
    pub fn render_error(kind: &'static str, code: impl Into<i64>) -> Self {
        Self::RenderError {
            kind,
            code: code.into(),
        }
    }

    /// Returns `true` if this is a type mismatch.
    #[inline]
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }

    /// Returns `true` if an enumerant lookup failed.
    #[inline]
    pub fn is_invalid_enumerant(&self) -> bool {
        matches!(self, Self::InvalidEnumerant { .. })
    }

    /// Returns `true` if a raw code could not be rendered.
    #[inline]
    pub fn is_render_error(&self) -> bool {
        matches!(self, Self::RenderError { .. })
    }
}
