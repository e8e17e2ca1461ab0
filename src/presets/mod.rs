//! Preset catalog: DrawingML preset shape names → geometry generators
//!
//! Generators are grouped by family:
//! - `lines`: lines and connectors (line-like, zero extents allowed)
//! - `basic`: rectangles, polygons and simple outlines
//! - `curved`: ellipse-based shapes (pie, chord, arc, donut, moon, ...)
//! - `solids`: pseudo-3D composites (can, cube, bevel, folded corner, ...)
//! - `arrows`, `curved_arrows`: block arrows and arrow callouts
//! - `flowchart`: flowchart symbols
//! - `callouts`: line, wedge and cloud callouts
//! - `stars`: stars, seals and gears
//! - `banners`: ribbons, scrolls and waves
//! - `brackets`: brackets and braces
//! - `symbols`: math symbols, tabs and chart markers
//! - `buttons`: action buttons
//!
//! The standard catalog is built once on first use and is read-only after
//! that, so it can be shared across threads.

mod arrows;
mod banners;
mod basic;
mod brackets;
mod buttons;
mod callouts;
mod curved;
mod curved_arrows;
mod flowchart;
mod lines;
mod mirror;
mod solids;
mod stars;
mod symbols;

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;

use crate::adjust::{AdjustSpec, AdjustmentSet, ResolvedAdjustments};
use crate::defaults;
use crate::geometry::Guides;
use crate::path::PathData;
use crate::shape::ShapeGeometry;
use crate::types::BoundingBox;

/// Single-path generator
pub type PathFn = fn(&Guides) -> PathData;
/// Composite generator
pub type CompositeFn = fn(&Guides) -> ShapeGeometry;

/// A registered preset: its generators, declared adjustments and flags
#[derive(Clone, Copy)]
pub struct PresetDef {
    name: &'static str,
    path: Option<PathFn>,
    composite: Option<CompositeFn>,
    adjust: &'static [AdjustSpec],
    line_like: bool,
}

impl PresetDef {
    /// A preset drawn as one path.
    pub const fn path(name: &'static str, f: PathFn) -> Self {
        Self {
            name,
            path: Some(f),
            composite: None,
            adjust: &[],
            line_like: false,
        }
    }

    /// A composite preset. Its single-path form merges all layers unless
    /// [`PresetDef::outline`] provides a dedicated one.
    pub const fn composite(name: &'static str, f: CompositeFn) -> Self {
        Self {
            name,
            path: None,
            composite: Some(f),
            adjust: &[],
            line_like: false,
        }
    }

    pub const fn outline(mut self, f: PathFn) -> Self {
        self.path = Some(f);
        self
    }

    pub const fn adjust(mut self, specs: &'static [AdjustSpec]) -> Self {
        self.adjust = specs;
        self
    }

    /// Zero extents are kept as-is instead of being widened to
    /// [`defaults::MIN_EXTENT`].
    pub const fn line_like(mut self) -> Self {
        self.line_like = true;
        self
    }

    /// Canonical (DrawingML) spelling of the name
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn adjustments(&self) -> &'static [AdjustSpec] {
        self.adjust
    }

    pub fn is_line_like(&self) -> bool {
        self.line_like
    }

    pub fn has_composite(&self) -> bool {
        self.composite.is_some()
    }

    /// Guide environment for this preset: resolved adjustments and the frame,
    /// widened to a minimum extent unless the preset is line-like.
    pub fn guides(&self, bbox: BoundingBox, raw: &AdjustmentSet) -> Guides {
        let bbox = if self.line_like {
            bbox
        } else {
            bbox.with_min_extent(defaults::MIN_EXTENT)
        };
        Guides::new(bbox, ResolvedAdjustments::resolve_specs(self.adjust, raw))
    }

    pub fn build_path(&self, bbox: BoundingBox, raw: &AdjustmentSet) -> PathData {
        let g = self.guides(bbox, raw);
        crate::log::trace!(preset = self.name, w = g.w(), h = g.h(), "building preset path");
        match (self.path, self.composite) {
            (Some(f), _) => f(&g),
            (None, Some(f)) => f(&g).flatten(),
            (None, None) => fallback_rect(bbox.width, bbox.height),
        }
    }

    pub fn build_composite(&self, bbox: BoundingBox, raw: &AdjustmentSet) -> Option<ShapeGeometry> {
        self.composite.map(|f| f(&self.guides(bbox, raw)))
    }
}

impl fmt::Debug for PresetDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresetDef")
            .field("name", &self.name)
            .field("composite", &self.composite.is_some())
            .field("adjust", &self.adjust)
            .field("line_like", &self.line_like)
            .finish()
    }
}

/// Sweep from `st` to `en` going clockwise; equal angles make a full turn.
pub(crate) fn clockwise_sweep(st: f64, en: f64) -> f64 {
    let sw = en - st;
    if sw > 0.0 { sw } else { sw + 360.0 }
}

/// Closed polygon given on a `grid`×`grid` design square, scaled to the frame.
pub(crate) fn grid_polygon(g: &Guides, grid: f64, points: &[(f64, f64)]) -> PathData {
    let scaled: Vec<(f64, f64)> = points
        .iter()
        .map(|&(x, y)| (g.w() * x / grid, g.h() * y / grid))
        .collect();
    PathData::polygon(&scaled)
}

/// The exact rectangle spanning the frame: the geometry of unknown presets.
pub fn fallback_rect(w: f64, h: f64) -> PathData {
    PathData::polygon(&[(0.0, 0.0), (w, 0.0), (w, h), (0.0, h)])
}

/// The frame rectangle as a path string, sizes written exactly rather than
/// rounded to path precision.
fn frame_rect_svg(bbox: BoundingBox) -> String {
    // `+ 0.0` turns -0 into 0
    let (w, h) = (bbox.width + 0.0, bbox.height + 0.0);
    format!("M0,0 L{w},0 L{w},{h} L0,{h} Z")
}

/// Frame of a lookup. NaN, infinite and negative extents become 0.
fn frame(width: f64, height: f64) -> BoundingBox {
    BoundingBox::try_new(width, height).unwrap_or_else(|_err| {
        crate::log::debug!(width, height, error = %_err, "invalid frame extent, using 0");
        BoundingBox::new(width, height)
    })
}

fn canonical(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

/// Registry of presets, keyed by lowercase name
#[derive(Debug, Default)]
pub struct Catalog {
    entries: HashMap<String, PresetDef>,
}

static STANDARD: Lazy<Catalog> = Lazy::new(Catalog::build_standard);

impl Catalog {
    /// An empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog of all DrawingML presets.
    pub fn standard() -> &'static Catalog {
        &STANDARD
    }

    fn build_standard() -> Self {
        let mut catalog = Self::new();
        lines::register(&mut catalog);
        basic::register(&mut catalog);
        curved::register(&mut catalog);
        solids::register(&mut catalog);
        arrows::register(&mut catalog);
        curved_arrows::register(&mut catalog);
        flowchart::register(&mut catalog);
        callouts::register(&mut catalog);
        stars::register(&mut catalog);
        banners::register(&mut catalog);
        brackets::register(&mut catalog);
        symbols::register(&mut catalog);
        buttons::register(&mut catalog);

        for (alias, target) in [
            ("rectangle", "rect"),
            ("textBox", "rect"),
            ("oval", "ellipse"),
            ("circle", "ellipse"),
            ("square", "rect"),
            ("roundRectangle", "roundRect"),
            ("isoscelesTriangle", "triangle"),
            ("rightTriangle", "rtTriangle"),
            ("straightConnector", "straightConnector1"),
            ("connector", "straightConnector1"),
            ("bentConnector", "bentConnector3"),
            ("curvedConnector", "curvedConnector3"),
            ("elbowConnector", "bentConnector3"),
            ("star", "star5"),
            ("gear", "gear6"),
            ("lineArrow", "straightConnector1"),
            ("flowChartData", "flowChartInputOutput"),
            ("pentagonArrow", "homePlate"),
        ] {
            catalog.alias(alias, target);
        }

        crate::log::debug!(presets = catalog.len(), "preset catalog built");
        catalog
    }

    /// Register (or replace) a preset under its lowercase name.
    pub fn register(&mut self, def: PresetDef) -> &mut Self {
        self.entries.insert(canonical(def.name), def);
        self
    }

    /// Make `alias` resolve to the already registered `target`.
    /// Returns false if `target` is unknown.
    pub fn alias(&mut self, alias: &str, target: &str) -> bool {
        match self.lookup(target).copied() {
            Some(def) => {
                self.entries.insert(canonical(alias), def);
                true
            }
            None => false,
        }
    }

    /// Case-insensitive lookup
    pub fn lookup(&self, name: &str) -> Option<&PresetDef> {
        self.entries.get(&canonical(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered (lowercase) names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Single-path geometry of `name`, as a path string.
    ///
    /// Unknown names yield the rectangle spanning the frame. So does a
    /// generator that produced non-finite output, after logging a warning.
    pub fn path(&self, name: &str, width: f64, height: f64, adjustments: &AdjustmentSet) -> String {
        let bbox = frame(width, height);
        let Some(def) = self.lookup(name) else {
            crate::log::debug!(preset = name, "unknown preset, using rectangle");
            return frame_rect_svg(bbox);
        };

        let path = def.build_path(bbox, adjustments);
        match path.validate() {
            Ok(()) => path.to_svg(),
            Err(_err) => {
                crate::log::warn!(preset = name, error = %_err, "invalid preset geometry, using rectangle");
                frame_rect_svg(bbox)
            }
        }
    }

    /// Composite geometry of `name`, or `None` if it has no composite form
    /// (callers then use [`Catalog::path`]).
    pub fn multi_path(
        &self,
        name: &str,
        width: f64,
        height: f64,
        adjustments: &AdjustmentSet,
    ) -> Option<ShapeGeometry> {
        let bbox = frame(width, height);
        let geometry = self.lookup(name)?.build_composite(bbox, adjustments)?;
        match geometry.validate() {
            Ok(()) => Some(geometry),
            Err(_err) => {
                crate::log::warn!(preset = name, error = %_err, "invalid composite geometry, dropping");
                None
            }
        }
    }
}

/// Single-path geometry of a preset from the standard catalog.
///
/// ```
/// use prstgeom::{AdjustmentSet, get_path};
///
/// assert_eq!(get_path("rect", 100.0, 50.0, &AdjustmentSet::new()), "M0,0 L100,0 L100,50 L0,50 Z");
/// ```
pub fn get_path(name: &str, width: f64, height: f64, adjustments: &AdjustmentSet) -> String {
    Catalog::standard().path(name, width, height, adjustments)
}

/// Composite geometry of a preset from the standard catalog.
pub fn get_multi_path(name: &str, width: f64, height: f64, adjustments: &AdjustmentSet) -> Option<ShapeGeometry> {
    Catalog::standard().multi_path(name, width, height, adjustments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::FillModifier;

    fn none() -> AdjustmentSet {
        AdjustmentSet::new()
    }

    #[test]
    fn standard_catalog_is_large() {
        assert!(Catalog::standard().len() >= 200, "only {} presets", Catalog::standard().len());
    }

    #[test]
    fn lookup_ignores_case_and_whitespace() {
        let c = Catalog::standard();
        assert_eq!(c.lookup("RoundRect").map(PresetDef::name), Some("roundRect"));
        assert_eq!(c.lookup("  ROUNDRECT ").map(PresetDef::name), Some("roundRect"));
        assert!(c.lookup("nonsense").is_none());
    }

    #[test]
    fn aliases_resolve() {
        let c = Catalog::standard();
        assert_eq!(c.lookup("oval").map(PresetDef::name), Some("ellipse"));
        assert_eq!(c.lookup("rectangle").map(PresetDef::name), Some("rect"));
    }

    #[test]
    fn unknown_preset_is_rectangle() {
        assert_eq!(
            get_path("definitelyNotAShape", 400.0, 280.0, &none()),
            "M0,0 L400,0 L400,280 L0,280 Z"
        );
        assert_eq!(get_path("", 0.0, 0.0, &none()), "M0,0 L0,0 L0,0 L0,0 Z");
    }

    #[test]
    fn unknown_preset_keeps_exact_sizes() {
        assert_eq!(
            get_path("nope", 1234567.0, 0.1234567, &none()),
            "M0,0 L1234567,0 L1234567,0.1234567 L0,0.1234567 Z"
        );
        assert_eq!(get_path("nope", -0.0, 12.5, &none()), "M0,0 L0,0 L0,12.5 L0,12.5 Z");
        assert_eq!(get_path("nope", f64::NAN, -3.0, &none()), "M0,0 L0,0 L0,0 L0,0 Z");
        assert_eq!(get_path("rect", f64::INFINITY, 10.0, &none()), "M0,0 L1,0 L1,10 L0,10 Z");
    }

    #[test]
    fn non_finite_output_falls_back_to_exact_rectangle() {
        fn broken(g: &Guides) -> PathData {
            PathData::new().m(0.0, 0.0).l(g.w() / 0.0 * 0.0, g.h())
        }
        fn broken_layers(g: &Guides) -> ShapeGeometry {
            let outline = PathData::polygon(&[(0.0, 0.0), (g.w(), g.h()), (0.0, g.h())]);
            ShapeGeometry::new(broken(g), FillModifier::Norm, false).layer(outline, FillModifier::None, true)
        }
        let mut c = Catalog::new();
        c.register(PresetDef::path("broken", broken))
            .register(PresetDef::composite("brokenLayers", broken_layers));

        let def = c.lookup("broken").copied().unwrap();
        assert!(def.build_path(BoundingBox::new(80.0, 100.0), &none()).validate().is_err());
        assert_eq!(c.path("broken", 80.0, 100.5, &none()), "M0,0 L80,0 L80,100.5 L0,100.5 Z");
        assert!(c.multi_path("brokenLayers", 80.0, 100.0, &none()).is_none());
    }

    #[test]
    fn multi_path_none_without_composite() {
        assert!(get_multi_path("rect", 10.0, 10.0, &none()).is_none());
        assert!(get_multi_path("nonsense", 10.0, 10.0, &none()).is_none());
        assert!(get_multi_path("can", 10.0, 10.0, &none()).is_some());
    }

    #[test]
    fn custom_catalog() {
        fn tri(g: &Guides) -> PathData {
            PathData::polygon(&[(0.0, g.h()), (g.hc(), 0.0), (g.w(), g.h())])
        }
        let mut c = Catalog::new();
        assert!(c.is_empty());
        c.register(PresetDef::path("myTriangle", tri));
        assert!(c.alias("tri", "myTriangle"));
        assert!(!c.alias("x", "missing"));
        assert_eq!(c.path("TRI", 10.0, 10.0, &none()), "M0,10 L5,0 L10,10 Z");
        assert_eq!(c.names(), vec!["mytriangle", "tri"]);
    }

    #[test]
    fn line_like_keeps_zero_extent() {
        let def = Catalog::standard().lookup("line").copied().unwrap();
        assert!(def.is_line_like());
        let g = def.guides(BoundingBox::new(200.0, 0.0), &none());
        assert_eq!(g.h(), 0.0);

        let def = Catalog::standard().lookup("rect").copied().unwrap();
        let g = def.guides(BoundingBox::new(200.0, 0.0), &none());
        assert_eq!(g.h(), defaults::MIN_EXTENT);
    }
}
