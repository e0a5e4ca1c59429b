//! Frame rate, timecode and film keycode records.
//!
//! - [`Rational`] - Exact fraction, e.g. `24000/1001` frames per second
//! - [`TimeCode`] - SMPTE timecode with flags and binary groups
//! - [`KeyCode`] - Film edge code
//!
//! # Usage
//!
//! ```rust
//! use vfx_imath::{Rational, TimeCode};
//!
//! let fps = Rational::new(24000, 1001);
//! assert_eq!(fps.to_string(), "24000/1001 (23.976)");
//!
//! let tc = TimeCode { drop_frame: true, ..TimeCode::new(1, 2, 3, 4) };
//! assert!(tc.to_string().starts_with("<TimeCode time: 1:2:3:4, dropFrame: true"));
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Exact fraction with unsigned denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rational {
    /// Numerator.
    pub n: i32,
    /// Denominator.
    pub d: u32,
}

impl Rational {
    /// Creates a fraction. No reduction is applied.
    #[inline]
    pub const fn new(n: i32, d: u32) -> Self {
        Self { n, d }
    }

    /// Floating point value. A zero denominator yields an infinity or NaN.
    #[inline]
    pub fn to_f64(self) -> f64 {
        f64::from(self.n) / f64::from(self.d)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({:.3})", self.n, self.d, self.to_f64())
    }
}

/// SMPTE timecode.
///
/// Counters and binary groups are stored unpacked. Binary groups hold
/// 4-bit user data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TimeCode {
    /// Hours, 0-23.
    pub hours: u8,
    /// Minutes, 0-59.
    pub minutes: u8,
    /// Seconds, 0-59.
    pub seconds: u8,
    /// Frame within the second.
    pub frame: u8,
    /// Drop-frame counting (29.97 fps).
    pub drop_frame: bool,
    /// Color frame flag.
    pub color_frame: bool,
    /// Field phase flag.
    pub field_phase: bool,
    /// Binary group flag 0.
    pub bgf0: bool,
    /// Binary group flag 1.
    pub bgf1: bool,
    /// Binary group flag 2.
    pub bgf2: bool,
    /// User data group 1.
    pub binary_group1: u8,
    /// User data group 2.
    pub binary_group2: u8,
    /// User data group 3.
    pub binary_group3: u8,
    /// User data group 4.
    pub binary_group4: u8,
    /// User data group 5.
    pub binary_group5: u8,
    /// User data group 6.
    pub binary_group6: u8,
    /// User data group 7.
    pub binary_group7: u8,
    /// User data group 8.
    pub binary_group8: u8,
}

impl TimeCode {
    /// Creates a timecode with all flags cleared and empty binary groups.
    pub const fn new(hours: u8, minutes: u8, seconds: u8, frame: u8) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            frame,
            drop_frame: false,
            color_frame: false,
            field_phase: false,
            bgf0: false,
            bgf1: false,
            bgf2: false,
            binary_group1: 0,
            binary_group2: 0,
            binary_group3: 0,
            binary_group4: 0,
            binary_group5: 0,
            binary_group6: 0,
            binary_group7: 0,
            binary_group8: 0,
        }
    }

    /// Binary groups 1 through 8 in order.
    pub fn binary_groups(&self) -> [u8; 8] {
        [
            self.binary_group1,
            self.binary_group2,
            self.binary_group3,
            self.binary_group4,
            self.binary_group5,
            self.binary_group6,
            self.binary_group7,
            self.binary_group8,
        ]
    }
}

// Binary groups are left out.
impl fmt::Display for TimeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<TimeCode time: {}:{}:{}:{}, dropFrame: {}, colorFrame: {}, fieldPhase: {}, bgf0: {}, bgf1: {}, bgf2: {}>",
            self.hours,
            self.minutes,
            self.seconds,
            self.frame,
            self.drop_frame,
            self.color_frame,
            self.field_phase,
            self.bgf0,
            self.bgf1,
            self.bgf2
        )
    }
}

/// Film edge code identifying a frame on a reel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct KeyCode {
    /// Manufacturer code.
    pub film_mfc_code: i32,
    /// Film type code.
    pub film_type: i32,
    /// Prefix identifying the roll.
    pub prefix: i32,
    /// Count, increments every `perfs_per_count` perforations.
    pub count: i32,
    /// Offset of the frame in perforations from the zero-frame reference mark.
    pub perf_offset: i32,
    /// Perforations per frame.
    pub perfs_per_frame: i32,
    /// Perforations per count.
    pub perfs_per_count: i32,
}

impl KeyCode {
    /// Default perforations per frame (4-perf 35mm).
    pub const DEFAULT_PERFS_PER_FRAME: i32 = 4;
    /// Default perforations per count.
    pub const DEFAULT_PERFS_PER_COUNT: i32 = 64;
}

impl Default for KeyCode {
    fn default() -> Self {
        Self {
            film_mfc_code: 0,
            film_type: 0,
            prefix: 0,
            count: 0,
            perf_offset: 0,
            perfs_per_frame: Self::DEFAULT_PERFS_PER_FRAME,
            perfs_per_count: Self::DEFAULT_PERFS_PER_COUNT,
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<KeyCode filmMfcCode: {}, filmType: {}, prefix: {}, count: {}, perfOffset: {}, perfsPerFrame: {}, perfsPerCount: {}>",
            self.film_mfc_code,
            self.film_type,
            self.prefix,
            self.count,
            self.perf_offset,
            self.perfs_per_frame,
            self.perfs_per_count
        )
    }
}
