//! Geometry formula engine: shape guides, guide operators and the
//! visual→parametric angle correction for elliptical arcs.
//!
//! Generators are written as closed-form arithmetic over [`Guides`], using the
//! operator functions below wherever the DrawingML definition uses a guide
//! operator. All angles are degrees; adjustment angles come in 1/60000 degree
//! and are converted by [`Guides::angle`].

use glam::{DVec2, dvec2};

use crate::adjust::ResolvedAdjustments;
use crate::defaults;
use crate::types::{Angle, BoundingBox};

// Fixed angles, in degrees
pub const CD8: f64 = 45.0;
pub const CD4: f64 = 90.0;
pub const THREE_CD8: f64 = 135.0;
pub const CD2: f64 = 180.0;
pub const FIVE_CD8: f64 = 225.0;
pub const THREE_CD4: f64 = 270.0;
pub const SEVEN_CD8: f64 = 315.0;
pub const CD1: f64 = 360.0;

/// Named angle constants in DrawingML units, for formula evaluation.
pub fn angle_constant(name: &str) -> Option<f64> {
    let deg = match name {
        "cd8" => CD8,
        "cd4" => CD4,
        "3cd8" => THREE_CD8,
        "cd2" => CD2,
        "5cd8" => FIVE_CD8,
        "3cd4" => THREE_CD4,
        "7cd8" => SEVEN_CD8,
        _ => return None,
    };
    Some(deg * defaults::ANGLE_UNITS)
}

// ============================================================================
// Guide operators
// ============================================================================

/// `*/`: a * b / c; a zero divisor yields 0.
#[inline]
pub fn mul_div(a: f64, b: f64, c: f64) -> f64 {
    if c == 0.0 { 0.0 } else { a * b / c }
}

/// `+-`: a + b - c
#[inline]
pub fn add_sub(a: f64, b: f64, c: f64) -> f64 {
    a + b - c
}

/// `+/`: (a + b) / c; a zero divisor yields 0.
#[inline]
pub fn add_div(a: f64, b: f64, c: f64) -> f64 {
    if c == 0.0 { 0.0 } else { (a + b) / c }
}

/// `?:`: b if a > 0, else c
#[inline]
pub fn if_else(a: f64, b: f64, c: f64) -> f64 {
    if a > 0.0 { b } else { c }
}

/// `pin`: clamp `v` to `[lo, hi]`. Unlike `f64::clamp` this never panics
/// when `lo > hi`; the lower bound wins.
#[inline]
pub fn pin(lo: f64, v: f64, hi: f64) -> f64 {
    if v < lo {
        lo
    } else if v > hi {
        hi.max(lo)
    } else {
        v
    }
}

/// `mod`: Euclidean length of (a, b, c)
#[inline]
pub fn modulus(a: f64, b: f64, c: f64) -> f64 {
    (a * a + b * b + c * c).sqrt()
}

#[inline]
pub fn sqrt_of(v: f64) -> f64 {
    v.max(0.0).sqrt()
}

/// `cos`: val * cos(deg)
#[inline]
pub fn cos_of(val: f64, deg: f64) -> f64 {
    val * deg.to_radians().cos()
}

/// `sin`: val * sin(deg)
#[inline]
pub fn sin_of(val: f64, deg: f64) -> f64 {
    val * deg.to_radians().sin()
}

/// `tan`: val * tan(deg)
#[inline]
pub fn tan_of(val: f64, deg: f64) -> f64 {
    val * deg.to_radians().tan()
}

/// `at2`: atan2(y, x) in degrees. Note the DrawingML operand order (x first).
#[inline]
pub fn at2(x: f64, y: f64) -> f64 {
    y.atan2(x).to_degrees()
}

/// `cat2`: val * cos(atan2(y, x))
#[inline]
pub fn cat2(val: f64, x: f64, y: f64) -> f64 {
    val * y.atan2(x).cos()
}

/// `sat2`: val * sin(atan2(y, x))
#[inline]
pub fn sat2(val: f64, x: f64, y: f64) -> f64 {
    val * y.atan2(x).sin()
}

// ============================================================================
// Elliptical arcs
// ============================================================================

/// Convert a visual angle (measured as on a circle) to the parametric angle of
/// the ellipse with radii `rx`, `ry`.
///
/// `t = atan2(sin(v) / ry, cos(v) / rx)`. With a zero radius the ellipse is
/// a segment and the visual angle is returned unchanged.
pub fn parametric_angle(visual_deg: f64, rx: f64, ry: f64) -> f64 {
    if rx <= 0.0 || ry <= 0.0 || rx == ry {
        return visual_deg;
    }
    let v = visual_deg.to_radians();
    let t = (v.sin() / ry).atan2(v.cos() / rx).to_degrees();
    // keep the same turn as the input so sweeps stay monotonic
    let turns = ((visual_deg - t) / CD1).round();
    t + turns * CD1
}

/// Offset from the ellipse center to the point on the ray at `visual_deg`.
pub fn ellipse_offset(rx: f64, ry: f64, visual_deg: f64) -> DVec2 {
    let t = parametric_angle(visual_deg, rx, ry).to_radians();
    dvec2(rx * t.cos(), ry * t.sin())
}

/// Point on the ellipse centered at `center` on the ray at `visual_deg`.
pub fn ellipse_point(center: DVec2, rx: f64, ry: f64, visual_deg: f64) -> DVec2 {
    center + ellipse_offset(rx, ry, visual_deg)
}

// ============================================================================
// Shape guides
// ============================================================================

/// The guide environment of one preset invocation: frame extents, derived
/// constants and the resolved adjustments.
#[derive(Debug, Clone, PartialEq)]
pub struct Guides {
    w: f64,
    h: f64,
    adj: ResolvedAdjustments,
}

impl Guides {
    pub fn new(bbox: BoundingBox, adj: ResolvedAdjustments) -> Self {
        Self {
            w: bbox.width,
            h: bbox.height,
            adj,
        }
    }

    #[inline] pub fn w(&self) -> f64 { self.w }
    #[inline] pub fn h(&self) -> f64 { self.h }
    #[inline] pub fn r(&self) -> f64 { self.w }
    #[inline] pub fn b(&self) -> f64 { self.h }
    #[inline] pub fn hc(&self) -> f64 { self.w / 2.0 }
    #[inline] pub fn vc(&self) -> f64 { self.h / 2.0 }
    #[inline] pub fn wd2(&self) -> f64 { self.w / 2.0 }
    #[inline] pub fn hd2(&self) -> f64 { self.h / 2.0 }
    #[inline] pub fn wd4(&self) -> f64 { self.w / 4.0 }
    #[inline] pub fn hd4(&self) -> f64 { self.h / 4.0 }
    #[inline] pub fn wd8(&self) -> f64 { self.w / 8.0 }
    #[inline] pub fn hd8(&self) -> f64 { self.h / 8.0 }
    #[inline] pub fn wd32(&self) -> f64 { self.w / 32.0 }
    /// Short side
    #[inline] pub fn ss(&self) -> f64 { self.w.min(self.h) }
    /// Long side
    #[inline] pub fn ls(&self) -> f64 { self.w.max(self.h) }
    #[inline] pub fn ssd2(&self) -> f64 { self.ss() / 2.0 }
    #[inline] pub fn ssd4(&self) -> f64 { self.ss() / 4.0 }
    #[inline] pub fn ssd6(&self) -> f64 { self.ss() / 6.0 }
    #[inline] pub fn ssd8(&self) -> f64 { self.ss() / 8.0 }
    #[inline] pub fn ssd16(&self) -> f64 { self.ss() / 16.0 }
    #[inline] pub fn ssd32(&self) -> f64 { self.ss() / 32.0 }

    pub fn center(&self) -> DVec2 {
        dvec2(self.hc(), self.vc())
    }

    /// Raw adjustment value (DrawingML units).
    pub fn adj(&self, name: &str) -> f64 {
        self.adj.get(name)
    }

    /// Adjustment as a fraction (`adj / 100000`).
    pub fn ratio(&self, name: &str) -> f64 {
        self.adj.get(name) / defaults::RATIO_UNITS
    }

    /// Adjustment as an angle in degrees (`adj / 60000`).
    pub fn angle(&self, name: &str) -> f64 {
        Angle::from_ooxml(self.adj.get(name)).raw()
    }

    /// Adjustment pinned to `[lo, hi]` (DrawingML units).
    pub fn pinned(&self, name: &str, lo: f64, hi: f64) -> f64 {
        pin(lo, self.adj(name), hi)
    }

    /// `*/ ss adj 100000`: an adjustment scaling a length.
    pub fn ss_ratio(&self, name: &str) -> f64 {
        self.ss() * self.ratio(name)
    }
}
