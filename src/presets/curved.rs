//! Ellipse-based shapes: ellipse, pie, chord, arc and friends.
//!
//! Adjustment angles are visual; every arc goes through the parametric
//! correction in [`PathData::arc`], so on a non-circular ellipse a 45°
//! wedge edge still lies on the 45° ray from the center.

use super::{Catalog, PresetDef, clockwise_sweep};
use crate::adjust::AdjustSpec;
use crate::geometry::{self, CD1, CD2, CD4, Guides, THREE_CD4, mul_div, pin, sqrt_of};
use crate::path::PathData;
use crate::shape::{FillModifier, ShapeGeometry};

const PIE: &[AdjustSpec] = &[AdjustSpec::new("adj1", 0.0), AdjustSpec::new("adj2", 16200000.0)];
const CHORD: &[AdjustSpec] = &[AdjustSpec::new("adj1", 2700000.0), AdjustSpec::new("adj2", 16200000.0)];
const ARC: &[AdjustSpec] = &[AdjustSpec::new("adj1", 16200000.0), AdjustSpec::new("adj2", 0.0)];
const BLOCK_ARC: &[AdjustSpec] = &[
    AdjustSpec::new("adj1", 10800000.0),
    AdjustSpec::new("adj2", 0.0),
    AdjustSpec::new("adj3", 25000.0).clamp(0.0, 50000.0),
];
const DONUT: &[AdjustSpec] = &[AdjustSpec::new("adj", 25000.0).clamp(0.0, 50000.0)];
const NO_SMOKING: &[AdjustSpec] = &[AdjustSpec::new("adj", 18750.0).clamp(0.0, 50000.0)];
const MOON: &[AdjustSpec] = &[AdjustSpec::new("adj", 50000.0).clamp(0.0, 87500.0)];
const TEARDROP: &[AdjustSpec] = &[AdjustSpec::new("adj", 100000.0).clamp(0.0, 200000.0)];
const SUN: &[AdjustSpec] = &[AdjustSpec::new("adj", 25000.0).clamp(12500.0, 46875.0)];
const SMILEY: &[AdjustSpec] = &[AdjustSpec::new("adj", 4653.0).clamp(-4653.0, 4653.0)];

/// Largest angle adjustment accepted, just short of a full turn.
const MAX_ANGLE: f64 = 21599999.0;

pub(super) fn register(c: &mut Catalog) {
    c.register(PresetDef::path("ellipse", ellipse))
        .register(PresetDef::path("pie", pie).adjust(PIE))
        .register(PresetDef::path("pieWedge", pie_wedge))
        .register(PresetDef::path("chord", chord).adjust(CHORD))
        .register(PresetDef::path("arc", arc).adjust(ARC))
        .register(PresetDef::path("blockArc", block_arc).adjust(BLOCK_ARC))
        .register(PresetDef::path("donut", donut).adjust(DONUT))
        .register(PresetDef::path("noSmoking", no_smoking).adjust(NO_SMOKING))
        .register(PresetDef::path("moon", moon).adjust(MOON))
        .register(PresetDef::path("heart", heart))
        .register(PresetDef::path("teardrop", teardrop).adjust(TEARDROP))
        .register(PresetDef::path("sun", sun).adjust(SUN))
        .register(PresetDef::composite("smileyFace", smiley_face).adjust(SMILEY));
}

pub(super) fn ellipse(g: &Guides) -> PathData {
    PathData::new()
        .m(0.0, g.vc())
        .arc_to(g.wd2(), g.hd2(), CD2, CD4)
        .arc_to(g.wd2(), g.hd2(), THREE_CD4, CD4)
        .arc_to(g.wd2(), g.hd2(), 0.0, CD4)
        .arc_to(g.wd2(), g.hd2(), CD4, CD4)
        .z()
}

/// Start angle and clockwise sweep (degrees) from the `adj1`/`adj2` pair.
fn angle_span(g: &Guides) -> (f64, f64) {
    let st = pin(0.0, g.adj("adj1"), MAX_ANGLE) / 60000.0;
    let en = pin(0.0, g.adj("adj2"), MAX_ANGLE) / 60000.0;
    (st, clockwise_sweep(st, en))
}

fn pie(g: &Guides) -> PathData {
    let (st, sw) = angle_span(g);
    PathData::new()
        .arc(g.hc(), g.vc(), g.wd2(), g.hd2(), st, sw)
        .l(g.hc(), g.vc())
        .z()
}

fn pie_wedge(g: &Guides) -> PathData {
    PathData::new()
        .m(0.0, g.b())
        .arc_to(g.w(), g.h(), CD2, CD4)
        .l(g.r(), g.b())
        .z()
}

fn chord(g: &Guides) -> PathData {
    let (st, sw) = angle_span(g);
    PathData::new().arc(g.hc(), g.vc(), g.wd2(), g.hd2(), st, sw).z()
}

fn arc(g: &Guides) -> PathData {
    let (st, sw) = angle_span(g);
    PathData::new().arc(g.hc(), g.vc(), g.wd2(), g.hd2(), st, sw)
}

fn block_arc(g: &Guides) -> PathData {
    let (st, sw) = angle_span(g);
    let dr = g.ss_ratio("adj3");
    let iwd2 = g.wd2() - dr;
    let ihd2 = g.hd2() - dr;
    PathData::new()
        .arc(g.hc(), g.vc(), g.wd2(), g.hd2(), st, sw)
        .arc(g.hc(), g.vc(), iwd2, ihd2, st + sw, -sw)
        .z()
}

fn donut(g: &Guides) -> PathData {
    let dr = g.ss_ratio("adj");
    let iwd2 = g.wd2() - dr;
    let ihd2 = g.hd2() - dr;
    ellipse(g)
        .m(dr, g.vc())
        .arc(g.hc(), g.vc(), iwd2, ihd2, CD2, -360.0)
        .z()
}

fn no_smoking(g: &Guides) -> PathData {
    let dr = g.ss_ratio("adj");
    let iwd2 = g.wd2() - dr;
    let ihd2 = g.hd2() - dr;
    // half-width of the bar as an angle on the inner ring
    let ri = g.ssd2() - dr;
    let half = dr / 2.0;
    let delta = geometry::at2(sqrt_of(ri * ri - half * half), half.min(ri.max(0.0)));
    let c = g.center();
    let at = |deg: f64| geometry::ellipse_point(c, iwd2, ihd2, deg);
    let bar = [at(45.0 - delta), at(45.0 + delta), at(225.0 - delta), at(225.0 + delta)];
    let bar: Vec<(f64, f64)> = bar.iter().map(|p| (p.x, p.y)).collect();

    ellipse(g)
        .m(dr, g.vc())
        .arc(g.hc(), g.vc(), iwd2, ihd2, CD2, -360.0)
        .z()
        .poly(&bar)
}

/// Crescent: the left half of the frame ellipse, hollowed by a wider ellipse
/// whose leftmost point sits `adj` of `ss` in from the left edge.
fn moon(g: &Guides) -> PathData {
    let ss = g.ss();
    let g0 = g.ss_ratio("adj");
    let g0w = mul_div(g0, g.w(), ss);
    let g1 = ss - g0;
    let g5 = mul_div(ss, ss, g1) * 2.0 - mul_div(g0, g0, g1);
    let g6w = mul_div(g5 - g0, g.w(), ss);
    let dy1 = mul_div(g5 / 2.0 - g0, g.hd2(), ss);
    let g18w = (g6w - g0w) / 2.0;
    let dx2 = g.w() - g0w - g18w;
    let st = geometry::at2(dx2, -g.hd2());
    let en = geometry::at2(dx2, g.hd2()) - CD1;
    PathData::new()
        .m(g.r(), g.b())
        .arc_to(g.w(), g.hd2(), CD4, CD2)
        .arc_to(g18w, dy1, st, en - st)
        .z()
}

fn heart(g: &Guides) -> PathData {
    let dx1 = mul_div(g.w(), 49.0, 48.0);
    let dx2 = mul_div(g.w(), 10.0, 48.0);
    let x1 = g.hc() - dx1;
    let x2 = g.hc() - dx2;
    let x3 = g.hc() + dx2;
    let x4 = g.hc() + dx1;
    let y1 = -g.h() / 3.0;
    PathData::new()
        .m(g.hc(), g.hd4())
        .c(x3, y1, x4, g.hd4(), g.hc(), g.b())
        .c(x1, g.hd4(), x2, y1, g.hc(), g.hd4())
        .z()
}

fn teardrop(g: &Guides) -> PathData {
    let tw = g.wd2() * std::f64::consts::SQRT_2;
    let th = g.hd2() * std::f64::consts::SQRT_2;
    let sw = mul_div(tw, g.adj("adj"), 100000.0);
    let sh = mul_div(th, g.adj("adj"), 100000.0);
    let x1 = g.hc() + geometry::cos_of(sw, 45.0);
    let y1 = g.vc() - geometry::sin_of(sh, 45.0);
    let x2 = (g.hc() + x1) / 2.0;
    let y2 = (g.vc() + y1) / 2.0;
    PathData::new()
        .m(0.0, g.vc())
        .arc_to(g.wd2(), g.hd2(), CD2, CD4)
        .q(x2, 0.0, x1, y1)
        .q(g.r(), y2, g.r(), g.vc())
        .arc_to(g.wd2(), g.hd2(), 0.0, CD4)
        .arc_to(g.wd2(), g.hd2(), CD4, CD4)
        .z()
}

fn sun(g: &Guides) -> PathData {
    let a = g.ratio("adj");
    let c = g.center();
    let disc = 1.0 - 2.0 * a;
    let base = 1.0 - a;
    let mut path = PathData::new().ellipse(g.hc(), g.vc(), g.wd2() * disc, g.hd2() * disc);
    for k in 0..8 {
        let dir = 45.0 * k as f64;
        let tip = geometry::ellipse_point(c, g.wd2(), g.hd2(), dir);
        let b1 = geometry::ellipse_point(c, g.wd2() * base, g.hd2() * base, dir - 8.0);
        let b2 = geometry::ellipse_point(c, g.wd2() * base, g.hd2() * base, dir + 8.0);
        path = path.poly(&[(tip.x, tip.y), (b2.x, b2.y), (b1.x, b1.y)]);
    }
    path
}

fn smiley_face(g: &Guides) -> ShapeGeometry {
    let x1 = mul_div(g.w(), 4969.0, 21699.0);
    let x2 = mul_div(g.w(), 6215.0, 21600.0);
    let x3 = mul_div(g.w(), 13135.0, 21600.0);
    let x4 = mul_div(g.w(), 16640.0, 21600.0);
    let y1 = mul_div(g.h(), 7570.0, 21600.0);
    let y3 = mul_div(g.h(), 16515.0, 21600.0);
    let dy2 = mul_div(g.h(), g.adj("adj"), 100000.0);
    let y2 = y3 - dy2;
    let y5 = y3 + dy2 * 3.0;
    let wr = mul_div(g.w(), 1125.0, 21600.0);
    let hr = mul_div(g.h(), 1125.0, 21600.0);

    let eyes = PathData::new()
        .m(x2, y1)
        .arc_to(wr, hr, CD2, CD1)
        .m(x3, y1)
        .arc_to(wr, hr, CD2, CD1);
    let mouth = PathData::new().m(x1, y2).q(g.hc(), y5, x4, y2);

    ShapeGeometry::new(ellipse(g), FillModifier::Norm, false)
        .layer(eyes, FillModifier::DarkenLess, true)
        .layer(mouth, FillModifier::None, true)
        .layer(ellipse(g), FillModifier::None, true)
}

#[cfg(test)]
mod tests {
    use crate::shape::FillModifier;
    use crate::{AdjustmentSet, get_multi_path, get_path};

    #[test]
    fn circle_is_four_quarters() {
        assert_eq!(
            get_path("ellipse", 100.0, 100.0, &AdjustmentSet::new()),
            "M0,50 A50,50 0 0,1 50,0 A50,50 0 0,1 100,50 A50,50 0 0,1 50,100 A50,50 0 0,1 0,50 Z"
        );
    }

    #[test]
    fn pie_edge_on_visual_ray() {
        // 45° on a 400x200 frame lands at (289.443, 189.443), not at the
        // naive parametric point (341.421, 170.711)
        let adj = AdjustmentSet::new().with("adj1", 0.0).with("adj2", 2700000.0);
        assert_eq!(
            get_path("pie", 400.0, 200.0, &adj),
            "M400,100 A200,100 0 0,1 289.443,189.443 L200,100 Z"
        );
    }

    #[test]
    fn default_arc_is_upper_right_quarter() {
        assert_eq!(
            get_path("arc", 100.0, 100.0, &AdjustmentSet::new()),
            "M50,0 A50,50 0 0,1 100,50"
        );
    }

    #[test]
    fn equal_pie_angles_make_a_full_turn() {
        let adj = AdjustmentSet::new().with("adj1", 0.0).with("adj2", 0.0);
        let d = get_path("pie", 100.0, 100.0, &adj);
        assert_eq!(d, "M100,50 A50,50 0 0,1 0,50 A50,50 0 0,1 100,50 L50,50 Z");
    }

    #[test]
    fn moon_hollowed_by_wider_ellipse() {
        // inner ellipse: rx 125, ry 62.5, centered at (175, 50)
        assert_eq!(
            get_path("moon", 100.0, 100.0, &AdjustmentSet::new()),
            "M100,100 A100,50 0 0,1 100,0 A125,62.5 0 0,0 100,100 Z"
        );
    }

    #[test]
    fn smiley_layers() {
        let geom = get_multi_path("smileyFace", 100.0, 100.0, &AdjustmentSet::new()).unwrap();
        let layers: Vec<_> = geom.iter().map(|p| (p.fill, p.stroke)).collect();
        assert_eq!(
            layers,
            [
                (FillModifier::Norm, false),
                (FillModifier::DarkenLess, true),
                (FillModifier::None, true),
                (FillModifier::None, true),
            ]
        );
    }
}
