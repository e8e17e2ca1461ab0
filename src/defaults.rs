//! Fixed constants shared by the geometry engine and the path serializer

/// Ratio adjustments are expressed in 1/100000.
pub const RATIO_UNITS: f64 = 100_000.0;
/// Angle adjustments are expressed in 1/60000 degree.
pub const ANGLE_UNITS: f64 = 60_000.0;

/// Extent substituted for a zero width/height on non line-like presets.
pub const MIN_EXTENT: f64 = 1.0;

/// Significant figures written for path coordinates.
pub const PATH_SIG_FIGS: i32 = 6;
/// Magnitudes below this are written as `0`.
pub const ZERO_SNAP: f64 = 1e-9;
/// Distance under which an arc start is considered to coincide with the pen.
pub const POINT_EPSILON: f64 = 1e-6;

// Fill blend ratios, calibrated against the reference renderer.
pub const DARKEN_RATIO: f64 = 0.30;
pub const DARKEN_LESS_RATIO: f64 = 0.15;
pub const LIGHTEN_RATIO: f64 = 0.30;
pub const LIGHTEN_LESS_RATIO: f64 = 0.18;
