//! Coordinate domains for the geometry containers.

use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

/// A coordinate domain: exact 64-bit integers or `f64`.
///
/// The containers are generic over this trait so the integral and floating
/// variants share one implementation and differ only in how values round on
/// the way back from `f64` arithmetic (rotation, cross-domain scaling,
/// rotated-box refitting).
pub trait Ordinate:
    Copy
    + Default
    + Debug
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + 'static
{
    /// Most negative usable coordinate; initial `right`/`bottom` of a bounds fold.
    const MIN_SENTINEL: Self;
    /// Most positive usable coordinate; initial `left`/`top` of a bounds fold.
    const MAX_SENTINEL: Self;
    const ZERO: Self;
    const ONE: Self;
    /// True when conversions from `f64` round to whole numbers.
    const INTEGRAL: bool;

    fn to_f64(self) -> f64;

    /// Nearest value in this domain; halves round away from zero.
    fn from_f64(v: f64) -> Self;

    fn from_f64_floor(v: f64) -> Self;

    fn from_f64_ceil(v: f64) -> Self;

    /// Convert a coordinate from another domain, applying `scale`.
    fn from_scaled<U: Ordinate>(v: U, scale: f64) -> Self {
        Self::from_f64(v.to_f64() * scale)
    }
}

impl Ordinate for i64 {
    // Symmetric around zero so a fold can start from negated extrema.
    const MIN_SENTINEL: Self = -i64::MAX;
    const MAX_SENTINEL: Self = i64::MAX;
    const ZERO: Self = 0;
    const ONE: Self = 1;
    const INTEGRAL: bool = true;

    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_f64(v: f64) -> Self {
        v.round() as i64
    }

    fn from_f64_floor(v: f64) -> Self {
        v.floor() as i64
    }

    fn from_f64_ceil(v: f64) -> Self {
        v.ceil() as i64
    }
}

impl Ordinate for f64 {
    const MIN_SENTINEL: Self = f64::MIN;
    const MAX_SENTINEL: Self = f64::MAX;
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const INTEGRAL: bool = false;

    fn to_f64(self) -> f64 {
        self
    }

    fn from_f64(v: f64) -> Self {
        v
    }

    fn from_f64_floor(v: f64) -> Self {
        v
    }

    fn from_f64_ceil(v: f64) -> Self {
        v
    }
}
