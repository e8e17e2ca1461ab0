//! Preset shape geometry for OOXML presentations.
//!
//! DrawingML describes most shapes by a preset name (`roundRect`,
//! `rightArrow`, `can`, ...) plus a handful of named adjustments. This crate
//! turns such a preset, a frame size and the adjustments into SVG-compatible
//! path data:
//!
//! ```
//! use prstgeom::{AdjustmentSet, get_path};
//!
//! assert_eq!(get_path("rect", 100.0, 50.0, &AdjustmentSet::new()), "M0,0 L100,0 L100,50 L0,50 Z");
//! ```
//!
//! Pseudo-3D presets (cans, cubes, scrolls, action buttons, ...) are also
//! available as ordered layers, each with a [`FillModifier`] and a stroke
//! flag, through [`get_multi_path`].
//!
//! Lookups never fail: unknown presets become the frame rectangle, adjustments
//! are clamped to their ranges and zero-sized frames are widened to a minimum
//! extent (except for lines and connectors).

pub mod adjust;
pub mod defaults;
pub mod errors;
pub mod formula;
pub mod geometry;
mod log;
pub mod path;
pub mod presets;
pub mod shape;
pub mod types;

pub use adjust::{AdjustSpec, AdjustmentSet, ResolvedAdjustments, resolve};
pub use formula::GuideFormula;
pub use path::{PathCommand, PathData, fmt_num};
pub use presets::{Catalog, PresetDef, get_multi_path, get_path};
pub use shape::{FillModifier, ShapeGeometry, SubPath};
pub use types::{Angle, BoundingBox, Rgb};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_scenario() {
        assert_eq!(get_path("rect", 100.0, 50.0, &AdjustmentSet::new()), "M0,0 L100,0 L100,50 L0,50 Z");
    }

    #[test]
    fn line_scenario() {
        assert_eq!(get_path("line", 200.0, 100.0, &AdjustmentSet::new()), "M0,0 L200,100");
    }

    #[test]
    fn unknown_preset_is_the_frame() {
        assert_eq!(
            get_path("noSuchShape", 120.0, 30.0, &AdjustmentSet::new()),
            "M0,0 L120,0 L120,30 L0,30 Z"
        );
        assert!(get_multi_path("noSuchShape", 120.0, 30.0, &AdjustmentSet::new()).is_none());
    }

    #[test]
    fn adjustments_from_guide_formulas() {
        let adj = AdjustmentSet::from_formulas([("adj", "val 25000")]).unwrap();
        assert_eq!(adj.get("adj"), Some(25000.0));
        assert_eq!(
            get_path("rightArrow", 200.0, 100.0, &AdjustmentSet::new().with("adj1", 50000.0)),
            get_path("rightArrow", 200.0, 100.0, &AdjustmentSet::from_formulas([("adj1", "val 50000")]).unwrap())
        );
    }
}
