//! Brackets and braces.
//!
//! Each is a composite: a closed unstroked fill, then the open stroke that
//! draws the bracket itself. The single-path form is the open stroke.

use super::basic::rounded_rect;
use super::{Catalog, PresetDef};
use crate::adjust::AdjustSpec;
use crate::geometry::{CD2, CD4, Guides, THREE_CD4, mul_div};
use crate::path::PathData;
use crate::shape::{FillModifier, ShapeGeometry};

const BRACKET: &[AdjustSpec] = &[AdjustSpec::new("adj", 8333.0)];
const BRACE: &[AdjustSpec] = &[
    AdjustSpec::new("adj1", 8333.0),
    AdjustSpec::new("adj2", 50000.0).clamp(0.0, 100000.0),
];
const BRACKET_PAIR: &[AdjustSpec] = &[AdjustSpec::new("adj", 16667.0).clamp(0.0, 50000.0)];
const BRACE_PAIR: &[AdjustSpec] = &[AdjustSpec::new("adj", 8333.0).clamp(0.0, 25000.0)];

pub(super) fn register(c: &mut Catalog) {
    c.register(PresetDef::composite("leftBracket", left_bracket).outline(left_bracket_stroke).adjust(BRACKET))
        .register(PresetDef::composite("rightBracket", right_bracket).outline(right_bracket_stroke).adjust(BRACKET))
        .register(PresetDef::composite("leftBrace", left_brace).outline(left_brace_stroke).adjust(BRACE))
        .register(PresetDef::composite("rightBrace", right_brace).outline(right_brace_stroke).adjust(BRACE))
        .register(PresetDef::composite("bracketPair", bracket_pair).outline(bracket_pair_stroke).adjust(BRACKET_PAIR))
        .register(PresetDef::composite("bracePair", brace_pair).outline(brace_pair_stroke).adjust(BRACE_PAIR));
}

fn filled(fill: PathData, stroke: PathData) -> ShapeGeometry {
    ShapeGeometry::new(fill, FillModifier::Norm, false).layer(stroke, FillModifier::None, true)
}

/// Corner radius of a single bracket; the two corners never overlap.
fn bracket_corner(g: &Guides) -> f64 {
    let max_adj = mul_div(50000.0, g.h(), g.ss());
    mul_div(g.ss(), g.pinned("adj", 0.0, max_adj), 100000.0)
}

fn left_bracket_stroke(g: &Guides) -> PathData {
    let y1 = bracket_corner(g);
    PathData::new()
        .m(g.r(), g.b())
        .arc_to(g.w(), y1, CD4, CD4)
        .l(0.0, y1)
        .arc_to(g.w(), y1, CD2, CD4)
}

fn left_bracket(g: &Guides) -> ShapeGeometry {
    filled(left_bracket_stroke(g).z(), left_bracket_stroke(g))
}

fn right_bracket_stroke(g: &Guides) -> PathData {
    let y1 = bracket_corner(g);
    PathData::new()
        .m(0.0, 0.0)
        .arc_to(g.w(), y1, THREE_CD4, CD4)
        .l(g.r(), g.b() - y1)
        .arc_to(g.w(), y1, 0.0, CD4)
}

fn right_bracket(g: &Guides) -> ShapeGeometry {
    filled(right_bracket_stroke(g).z(), right_bracket_stroke(g))
}

/// Brace guides: corner radius `y1` and the point row `y3`.
fn brace_levels(g: &Guides) -> (f64, f64) {
    let a2 = g.pinned("adj2", 0.0, 100000.0);
    let q2 = (100000.0 - a2).min(a2);
    let max_adj1 = mul_div(q2 / 2.0, g.h(), g.ss());
    let y1 = mul_div(g.ss(), g.pinned("adj1", 0.0, max_adj1), 100000.0);
    (y1, mul_div(g.h(), a2, 100000.0))
}

fn left_brace_stroke(g: &Guides) -> PathData {
    let (y1, y3) = brace_levels(g);
    PathData::new()
        .m(g.r(), g.b())
        .arc_to(g.wd2(), y1, CD4, CD4)
        .l(g.hc(), y3 + y1)
        .arc_to(g.wd2(), y1, 0.0, -CD4)
        .arc_to(g.wd2(), y1, CD4, -CD4)
        .l(g.hc(), y1)
        .arc_to(g.wd2(), y1, CD2, CD4)
}

fn left_brace(g: &Guides) -> ShapeGeometry {
    filled(left_brace_stroke(g).z(), left_brace_stroke(g))
}

fn right_brace_stroke(g: &Guides) -> PathData {
    let (y1, y3) = brace_levels(g);
    PathData::new()
        .m(0.0, 0.0)
        .arc_to(g.wd2(), y1, THREE_CD4, CD4)
        .l(g.hc(), y3 - y1)
        .arc_to(g.wd2(), y1, CD2, -CD4)
        .arc_to(g.wd2(), y1, THREE_CD4, -CD4)
        .l(g.hc(), g.b() - y1)
        .arc_to(g.wd2(), y1, 0.0, CD4)
}

fn right_brace(g: &Guides) -> ShapeGeometry {
    filled(right_brace_stroke(g).z(), right_brace_stroke(g))
}

fn bracket_pair_stroke(g: &Guides) -> PathData {
    let x1 = g.ss_ratio("adj");
    let (x2, y2) = (g.r() - x1, g.b() - x1);
    PathData::new()
        .m(x1, g.b())
        .arc_to(x1, x1, CD4, CD4)
        .l(0.0, x1)
        .arc_to(x1, x1, CD2, CD4)
        .m(x2, 0.0)
        .arc_to(x1, x1, THREE_CD4, CD4)
        .l(g.r(), y2)
        .arc_to(x1, x1, 0.0, CD4)
}

fn bracket_pair(g: &Guides) -> ShapeGeometry {
    let fill = rounded_rect(0.0, 0.0, g.r(), g.b(), g.ss_ratio("adj"));
    filled(fill, bracket_pair_stroke(g))
}

/// Left brace of a pair, from its bottom end up to its top end.
fn left_of_pair(path: PathData, g: &Guides) -> PathData {
    let x1 = g.ss_ratio("adj");
    path.arc_to(x1, x1, CD4, CD4)
        .l(x1, g.vc() + x1)
        .arc_to(x1, x1, 0.0, -CD4)
        .arc_to(x1, x1, CD4, -CD4)
        .l(x1, x1)
        .arc_to(x1, x1, CD2, CD4)
}

/// Right brace of a pair, from its top end down to its bottom end.
fn right_of_pair(path: PathData, g: &Guides) -> PathData {
    let x1 = g.ss_ratio("adj");
    let x4 = g.r() - x1;
    path.arc_to(x1, x1, THREE_CD4, CD4)
        .l(x4, g.vc() - x1)
        .arc_to(x1, x1, CD2, -CD4)
        .arc_to(x1, x1, THREE_CD4, -CD4)
        .l(x4, g.b() - x1)
        .arc_to(x1, x1, 0.0, CD4)
}

fn brace_pair_stroke(g: &Guides) -> PathData {
    let x2 = 2.0 * g.ss_ratio("adj");
    let left = left_of_pair(PathData::new().m(x2, g.b()), g);
    right_of_pair(left.m(g.r() - x2, 0.0), g)
}

fn brace_pair(g: &Guides) -> ShapeGeometry {
    let x2 = 2.0 * g.ss_ratio("adj");
    let left = left_of_pair(PathData::new().m(x2, g.b()), g);
    let fill = right_of_pair(left.l(g.r() - x2, 0.0), g).z();
    filled(fill, brace_pair_stroke(g))
}

#[cfg(test)]
mod tests {
    use crate::shape::FillModifier;
    use crate::{AdjustmentSet, get_multi_path, get_path};

    #[test]
    fn left_bracket_default() {
        assert_eq!(
            get_path("leftBracket", 100.0, 200.0, &AdjustmentSet::new()),
            "M100,200 A100,8.333 0 0,1 0,191.667 L0,8.333 A100,8.333 0 0,1 100,0"
        );
    }

    #[test]
    fn right_brace_ends_at_bottom_left() {
        let d = get_path("rightBrace", 100.0, 200.0, &AdjustmentSet::new());
        assert!(d.starts_with("M0,0 A50,8.333 0 0,1 50,8.333 "), "{d}");
        assert!(d.ends_with(" 0,200"), "{d}");
        assert_eq!(d.matches('A').count(), 4, "{d}");
    }

    #[test]
    fn bracket_pair_is_fill_then_stroke() {
        let geo = get_multi_path("bracketPair", 200.0, 100.0, &AdjustmentSet::new()).unwrap();
        let parts: Vec<_> = geo.iter().map(|p| (p.fill, p.stroke)).collect();
        assert_eq!(parts, vec![(FillModifier::Norm, false), (FillModifier::None, true)]);
        assert!(geo.parts()[0].d().ends_with('Z'));
        assert!(!geo.parts()[1].d().contains('Z'));
    }

    #[test]
    fn brace_pair_has_two_strokes() {
        let d = get_path("bracePair", 300.0, 200.0, &AdjustmentSet::new());
        assert_eq!(d.matches('M').count(), 2, "{d}");
        assert_eq!(d.matches('A').count(), 8, "{d}");
    }
}
