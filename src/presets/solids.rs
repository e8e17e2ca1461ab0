//! Pseudo-3D solids. Each is a composite: faces with shaded fills, then an
//! unfilled outline that strokes every visible edge on top.

use super::{Catalog, PresetDef, fallback_rect};
use crate::adjust::AdjustSpec;
use crate::geometry::{CD2, Guides, mul_div};
use crate::path::PathData;
use crate::shape::{FillModifier, ShapeGeometry};

const CAN: &[AdjustSpec] = &[AdjustSpec::new("adj", 25000.0)];
const CUBE: &[AdjustSpec] = &[AdjustSpec::new("adj", 25000.0).clamp(0.0, 100000.0)];
const BEVEL: &[AdjustSpec] = &[AdjustSpec::new("adj", 12500.0).clamp(0.0, 50000.0)];
const FOLDED: &[AdjustSpec] = &[AdjustSpec::new("adj", 16667.0).clamp(0.0, 50000.0)];

pub(super) fn register(c: &mut Catalog) {
    c.register(PresetDef::composite("can", can).outline(can_outline).adjust(CAN))
        .register(PresetDef::composite("cube", cube).outline(cube_outline).adjust(CUBE))
        .register(PresetDef::composite("bevel", bevel).outline(bevel_outline).adjust(BEVEL))
        .register(PresetDef::composite("foldedCorner", folded_corner).adjust(FOLDED));
}

/// Half height of the can's top ellipse.
fn can_lid(g: &Guides) -> f64 {
    let max_adj = mul_div(50000.0, g.h(), g.ss());
    mul_div(g.ss(), g.pinned("adj", 0.0, max_adj), 200000.0)
}

fn can_body(g: &Guides, y1: f64) -> PathData {
    let y3 = g.b() - y1;
    PathData::new()
        .m(0.0, y1)
        .arc_to(g.wd2(), y1, CD2, -CD2)
        .l(g.r(), y3)
        .arc_to(g.wd2(), y1, 0.0, CD2)
        .z()
}

fn can_outline(g: &Guides) -> PathData {
    let y1 = can_lid(g);
    let y3 = g.b() - y1;
    PathData::new()
        .m(g.r(), y1)
        .arc_to(g.wd2(), y1, 0.0, CD2)
        .arc_to(g.wd2(), y1, CD2, CD2)
        .l(g.r(), y3)
        .arc_to(g.wd2(), y1, 0.0, CD2)
        .l(0.0, y1)
}

fn can(g: &Guides) -> ShapeGeometry {
    let y1 = can_lid(g);
    let top = PathData::new()
        .m(0.0, y1)
        .arc_to(g.wd2(), y1, CD2, CD2)
        .arc_to(g.wd2(), y1, 0.0, CD2)
        .z();
    ShapeGeometry::new(can_body(g, y1), FillModifier::Norm, false)
        .layer(top, FillModifier::Lighten, false)
        .layer(can_outline(g), FillModifier::None, true)
}

fn cube_outline(g: &Guides) -> PathData {
    let y1 = g.ss_ratio("adj");
    let y4 = g.b() - y1;
    let x4 = g.r() - y1;
    PathData::polygon(&[(0.0, y1), (y1, 0.0), (g.r(), 0.0), (g.r(), y4), (x4, g.b()), (0.0, g.b())])
        .polyline(&[(0.0, y1), (x4, y1), (g.r(), 0.0)])
        .polyline(&[(x4, y1), (x4, g.b())])
}

fn cube(g: &Guides) -> ShapeGeometry {
    let y1 = g.ss_ratio("adj");
    let y4 = g.b() - y1;
    let x4 = g.r() - y1;
    let front = PathData::polygon(&[(0.0, y1), (x4, y1), (x4, g.b()), (0.0, g.b())]);
    let top = PathData::polygon(&[(0.0, y1), (y1, 0.0), (g.r(), 0.0), (x4, y1)]);
    let side = PathData::polygon(&[(x4, g.b()), (x4, y1), (g.r(), 0.0), (g.r(), y4)]);
    ShapeGeometry::new(front, FillModifier::Norm, false)
        .layer(top, FillModifier::LightenLess, false)
        .layer(side, FillModifier::DarkenLess, false)
        .layer(cube_outline(g), FillModifier::None, true)
}

fn bevel_outline(g: &Guides) -> PathData {
    let x1 = g.ss_ratio("adj");
    let x2 = g.r() - x1;
    let y2 = g.b() - x1;
    fallback_rect(g.w(), g.h())
        .poly(&[(x1, x1), (x2, x1), (x2, y2), (x1, y2)])
        .polyline(&[(0.0, 0.0), (x1, x1)])
        .polyline(&[(0.0, g.b()), (x1, y2)])
        .polyline(&[(g.r(), 0.0), (x2, x1)])
        .polyline(&[(g.r(), g.b()), (x2, y2)])
}

fn bevel(g: &Guides) -> ShapeGeometry {
    let x1 = g.ss_ratio("adj");
    let x2 = g.r() - x1;
    let y2 = g.b() - x1;
    let (r, b) = (g.r(), g.b());
    let face = PathData::polygon(&[(x1, x1), (x2, x1), (x2, y2), (x1, y2)]);
    let top = PathData::polygon(&[(0.0, 0.0), (r, 0.0), (x2, x1), (x1, x1)]);
    let right = PathData::polygon(&[(r, 0.0), (r, b), (x2, y2), (x2, x1)]);
    let bottom = PathData::polygon(&[(0.0, b), (x1, y2), (x2, y2), (r, b)]);
    let left = PathData::polygon(&[(0.0, 0.0), (0.0, b), (x1, y2), (x1, x1)]);
    ShapeGeometry::new(face, FillModifier::Norm, false)
        .layer(top, FillModifier::LightenLess, false)
        .layer(right, FillModifier::DarkenLess, false)
        .layer(bottom, FillModifier::Darken, false)
        .layer(left, FillModifier::Lighten, false)
        .layer(bevel_outline(g), FillModifier::None, true)
}

fn folded_corner(g: &Guides) -> ShapeGeometry {
    let dy2 = g.ss_ratio("adj");
    let dy1 = dy2 / 5.0;
    let x1 = g.r() - dy2;
    let x2 = x1 + dy1;
    let y2 = g.b() - dy2;
    let y1 = y2 + dy1;
    let (r, b) = (g.r(), g.b());
    let body = PathData::polygon(&[(0.0, 0.0), (r, 0.0), (r, y2), (x1, b), (0.0, b)]);
    let fold = PathData::polygon(&[(x1, b), (x2, y1), (r, y2)]);
    let outline = PathData::new().polyline(&[(x1, b), (x2, y1), (r, y2), (x1, b), (0.0, b), (0.0, 0.0), (r, 0.0), (r, y2)]);
    ShapeGeometry::new(body, FillModifier::Norm, false)
        .layer(fold, FillModifier::DarkenLess, false)
        .layer(outline, FillModifier::None, true)
}

#[cfg(test)]
mod tests {
    use crate::shape::FillModifier;
    use crate::{AdjustmentSet, get_multi_path, get_path};

    fn layers(name: &str) -> Vec<(FillModifier, bool)> {
        get_multi_path(name, 200.0, 120.0, &AdjustmentSet::new())
            .unwrap()
            .iter()
            .map(|p| (p.fill, p.stroke))
            .collect()
    }

    #[test]
    fn can_order() {
        assert_eq!(
            layers("can"),
            vec![
                (FillModifier::Norm, false),
                (FillModifier::Lighten, false),
                (FillModifier::None, true)
            ]
        );
    }

    #[test]
    fn cube_order() {
        assert_eq!(
            layers("cube"),
            vec![
                (FillModifier::Norm, false),
                (FillModifier::LightenLess, false),
                (FillModifier::DarkenLess, false),
                (FillModifier::None, true)
            ]
        );
    }

    #[test]
    fn single_path_of_cube_is_its_outline() {
        let adj = AdjustmentSet::new().with("adj", 10000.0);
        assert_eq!(
            get_path("cube", 100.0, 100.0, &adj),
            "M0,10 L10,0 L100,0 L100,90 L90,100 L0,100 Z M0,10 L90,10 L100,0 M90,10 L90,100"
        );
    }

    #[test]
    fn bevel_has_five_faces_and_outline() {
        assert_eq!(layers("bevel").len(), 6);
    }
}
