//! Multi-path composites: ordered sub-paths with fill modifiers and stroke flags
//!
//! Composite presets (cans, cubes, scrolls, action buttons, ...) emulate 3D
//! shading by painting several sub-paths in order, each with a blend of the
//! shape's fill color. Later sub-paths paint over earlier ones.

use std::fmt;
use std::str::FromStr;

use crate::defaults;
use crate::errors::GeometryError;
use crate::path::PathData;
use crate::types::Rgb;

/// How a sub-path's fill derives from the shape's resolved fill color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FillModifier {
    /// The shape's fill, unchanged
    #[default]
    Norm,
    /// Mixed toward black by 30%
    Darken,
    /// Mixed toward black by 15%
    DarkenLess,
    /// Mixed toward white by 30%
    Lighten,
    /// Mixed toward white by 18%
    LightenLess,
    /// Not filled (outline or detail strokes only)
    None,
}

impl FillModifier {
    pub const ALL: [FillModifier; 6] = [
        FillModifier::Norm,
        FillModifier::Darken,
        FillModifier::DarkenLess,
        FillModifier::Lighten,
        FillModifier::LightenLess,
        FillModifier::None,
    ];

    /// DrawingML spelling
    pub fn as_str(self) -> &'static str {
        match self {
            FillModifier::Norm => "norm",
            FillModifier::Darken => "darken",
            FillModifier::DarkenLess => "darkenLess",
            FillModifier::Lighten => "lighten",
            FillModifier::LightenLess => "lightenLess",
            FillModifier::None => "none",
        }
    }

    pub fn is_filled(self) -> bool {
        self != FillModifier::None
    }

    /// Paint color for a shape whose fill resolved to `base`; `None` means
    /// the sub-path is not filled.
    pub fn apply(self, base: Rgb) -> Option<Rgb> {
        match self {
            FillModifier::Norm => Some(base),
            FillModifier::Darken => Some(base.mix(Rgb::BLACK, defaults::DARKEN_RATIO)),
            FillModifier::DarkenLess => Some(base.mix(Rgb::BLACK, defaults::DARKEN_LESS_RATIO)),
            FillModifier::Lighten => Some(base.mix(Rgb::WHITE, defaults::LIGHTEN_RATIO)),
            FillModifier::LightenLess => Some(base.mix(Rgb::WHITE, defaults::LIGHTEN_LESS_RATIO)),
            FillModifier::None => None,
        }
    }
}

impl fmt::Display for FillModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FillModifier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FillModifier::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown fill modifier: {s}"))
    }
}

/// One layer of a composite
#[derive(Debug, Clone, PartialEq)]
pub struct SubPath {
    pub path: PathData,
    pub fill: FillModifier,
    pub stroke: bool,
}

impl SubPath {
    pub fn new(path: PathData, fill: FillModifier, stroke: bool) -> Self {
        Self { path, fill, stroke }
    }

    /// The sub-path as an SVG path string
    pub fn d(&self) -> String {
        self.path.to_svg()
    }
}

/// An ordered, non-empty list of sub-paths; later entries paint on top
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeGeometry {
    parts: Vec<SubPath>,
}

impl ShapeGeometry {
    /// Start a composite with its bottom layer.
    pub fn new(path: PathData, fill: FillModifier, stroke: bool) -> Self {
        Self {
            parts: vec![SubPath::new(path, fill, stroke)],
        }
    }

    /// A single filled and stroked path.
    pub fn single(path: PathData) -> Self {
        Self::new(path, FillModifier::Norm, true)
    }

    /// Add a layer on top.
    pub fn layer(mut self, path: PathData, fill: FillModifier, stroke: bool) -> Self {
        self.parts.push(SubPath::new(path, fill, stroke));
        self
    }

    pub fn parts(&self) -> &[SubPath] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Always false; kept for the `len`/`is_empty` pair.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SubPath> {
        self.parts.iter()
    }

    /// Merge all layers into one path, for callers that only draw single paths.
    pub fn flatten(&self) -> PathData {
        self.parts
            .iter()
            .fold(PathData::new(), |acc, part| acc.append(part.path.clone()))
    }

    pub fn validate(&self) -> Result<(), GeometryError> {
        self.parts.iter().try_for_each(|p| p.path.validate())
    }
}

impl IntoIterator for ShapeGeometry {
    type Item = SubPath;
    type IntoIter = std::vec::IntoIter<SubPath>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.into_iter()
    }
}
