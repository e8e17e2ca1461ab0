//! Strongly-typed numeric primitives for prstgeom (zero-cost newtypes).
//!
//! - Angles are degrees everywhere inside the crate; the DrawingML unit
//!   (1/60000 degree) is converted only at the input boundary.
//! - Bounding boxes are sanitized on construction so generators never see
//!   NaN, infinite or negative extents.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use crate::defaults;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is negative when non-negative required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

fn check_non_negative(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// Angle in degrees
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Angle(pub f64);

impl Angle {
    pub const ZERO: Angle = Angle(0.0);

    #[inline]
    pub const fn deg(val: f64) -> Angle {
        Angle(val)
    }

    /// Convert a DrawingML angle (1/60000 of a degree).
    #[inline]
    pub fn from_ooxml(units: f64) -> Angle {
        Angle(units / defaults::ANGLE_UNITS)
    }

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }

    #[inline]
    pub fn abs(self) -> Angle {
        Angle(self.0.abs())
    }
}

impl Add for Angle {
    type Output = Angle;
    fn add(self, rhs: Angle) -> Angle { Angle(self.0 + rhs.0) }
}
impl Sub for Angle {
    type Output = Angle;
    fn sub(self, rhs: Angle) -> Angle { Angle(self.0 - rhs.0) }
}
impl Mul<f64> for Angle {
    type Output = Angle;
    fn mul(self, rhs: f64) -> Angle { Angle(self.0 * rhs) }
}
impl Neg for Angle {
    type Output = Angle;
    fn neg(self) -> Angle { Angle(-self.0) }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

/// Width and height of the shape's frame, in the caller's units.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct BoundingBox {
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    /// Create a bounding box, replacing NaN, infinite and negative extents with 0.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: check_non_negative(width).unwrap_or(0.0),
            height: check_non_negative(height).unwrap_or(0.0),
        }
    }

    /// Create a bounding box with validation
    pub fn try_new(width: f64, height: f64) -> Result<Self, NumericError> {
        Ok(Self {
            width: check_non_negative(width)?,
            height: check_non_negative(height)?,
        })
    }

    /// True when either extent is zero.
    pub fn is_degenerate(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    /// Substitute `min` for any extent smaller than it.
    pub fn with_min_extent(self, min: f64) -> Self {
        Self {
            width: self.width.max(min),
            height: self.height.max(min),
        }
    }
}

/// 8-bit RGB color, as handed over by the theme/color resolution layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear mix toward `target`; `ratio` 0 keeps `self`, 1 yields `target`.
    pub fn mix(self, target: Rgb, ratio: f64) -> Rgb {
        let ratio = ratio.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| -> u8 {
            let v = f64::from(a) + (f64::from(b) - f64::from(a)) * ratio;
            v.round().clamp(0.0, 255.0) as u8
        };
        Rgb {
            r: channel(self.r, target.r),
            g: channel(self.g, target.g),
            b: channel(self.b, target.b),
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Parse `#rrggbb` or `rrggbb` (the DrawingML `srgbClr` form).
impl FromStr for Rgb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("invalid hex color: {s}"));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| format!("invalid hex color {s}: {e}"))
        };
        Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_from_ooxml_units() {
        assert_eq!(Angle::from_ooxml(5_400_000.0), Angle(90.0));
    }

    #[test]
    fn bbox_new_sanitizes() {
        let b = BoundingBox::new(f64::NAN, -3.0);
        assert_eq!(b, BoundingBox { width: 0.0, height: 0.0 });
        let b = BoundingBox::new(f64::INFINITY, 12.0);
        assert_eq!(b.width, 0.0);
        assert_eq!(b.height, 12.0);
    }

    #[test]
    fn bbox_try_new_rejects() {
        assert_eq!(BoundingBox::try_new(f64::NAN, 1.0), Err(NumericError::NaN));
        assert_eq!(BoundingBox::try_new(1.0, f64::NEG_INFINITY), Err(NumericError::Infinite));
        assert_eq!(BoundingBox::try_new(-1.0, 1.0), Err(NumericError::Negative));
        assert!(BoundingBox::try_new(0.0, 0.0).is_ok());
    }

    #[test]
    fn bbox_min_extent() {
        let b = BoundingBox::new(200.0, 0.0);
        assert!(b.is_degenerate());
        let b = b.with_min_extent(1.0);
        assert_eq!(b, BoundingBox { width: 200.0, height: 1.0 });
        assert!(!b.is_degenerate());
    }

    #[test]
    fn rgb_mix() {
        let c = Rgb::new(100, 200, 50);
        assert_eq!(c.mix(Rgb::BLACK, 0.0), c);
        assert_eq!(c.mix(Rgb::BLACK, 1.0), Rgb::BLACK);
        assert_eq!(c.mix(Rgb::WHITE, 0.5), Rgb::new(178, 228, 153));
    }

    #[test]
    fn rgb_parse() {
        assert_eq!("#4472C4".parse::<Rgb>(), Ok(Rgb::new(0x44, 0x72, 0xc4)));
        assert_eq!("ffffff".parse::<Rgb>(), Ok(Rgb::WHITE));
        assert!("#12345".parse::<Rgb>().is_err());
        assert!("zzzzzz".parse::<Rgb>().is_err());
    }

    #[test]
    fn rgb_display() {
        assert_eq!(Rgb::new(1, 2, 3).to_string(), "rgb(1,2,3)");
        assert_eq!(Rgb::new(1, 2, 3).to_hex(), "#010203");
    }
}
