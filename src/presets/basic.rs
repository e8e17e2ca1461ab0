//! Rectangles, rounded and snipped rectangles, polygons and simple outlines.

use super::{Catalog, PresetDef, fallback_rect, grid_polygon};
use crate::adjust::AdjustSpec;
use crate::geometry::{self, CD2, CD4, Guides, THREE_CD4, mul_div};
use crate::path::PathData;

const CORNER: &[AdjustSpec] = &[AdjustSpec::new("adj", 16667.0).clamp(0.0, 50000.0)];
const TWO_CORNERS: &[AdjustSpec] = &[
    AdjustSpec::new("adj1", 16667.0).clamp(0.0, 50000.0),
    AdjustSpec::new("adj2", 0.0).clamp(0.0, 50000.0),
];
const TWO_CORNERS_DIAG: &[AdjustSpec] = &[
    AdjustSpec::new("adj1", 0.0).clamp(0.0, 50000.0),
    AdjustSpec::new("adj2", 16667.0).clamp(0.0, 50000.0),
];
const SNIP_ROUND: &[AdjustSpec] = &[
    AdjustSpec::new("adj1", 16667.0).clamp(0.0, 50000.0),
    AdjustSpec::new("adj2", 16667.0).clamp(0.0, 50000.0),
];
const APEX: &[AdjustSpec] = &[AdjustSpec::new("adj", 50000.0).clamp(0.0, 100000.0)];
const SLANT: &[AdjustSpec] = &[AdjustSpec::new("adj", 25000.0)];
const TWO_SLANTS: &[AdjustSpec] = &[AdjustSpec::new("adj1", 25000.0), AdjustSpec::new("adj2", 25000.0)];
const OCTAGON: &[AdjustSpec] = &[AdjustSpec::new("adj", 29289.0).clamp(0.0, 50000.0)];
const PLUS: &[AdjustSpec] = &[AdjustSpec::new("adj", 25000.0).clamp(0.0, 50000.0)];
const FRAME: &[AdjustSpec] = &[AdjustSpec::new("adj1", 12500.0).clamp(0.0, 50000.0)];
const HALF_FRAME: &[AdjustSpec] = &[AdjustSpec::new("adj1", 33333.0), AdjustSpec::new("adj2", 33333.0)];
const CORNER_SHAPE: &[AdjustSpec] = &[AdjustSpec::new("adj1", 50000.0), AdjustSpec::new("adj2", 50000.0)];
const DIAG_STRIPE: &[AdjustSpec] = &[AdjustSpec::new("adj", 50000.0).clamp(0.0, 100000.0)];

pub(super) fn register(c: &mut Catalog) {
    c.register(PresetDef::path("rect", rect))
        .register(PresetDef::path("roundRect", round_rect).adjust(CORNER))
        .register(PresetDef::path("snip1Rect", snip1_rect).adjust(CORNER))
        .register(PresetDef::path("snip2SameRect", snip2_same_rect).adjust(TWO_CORNERS))
        .register(PresetDef::path("snip2DiagRect", snip2_diag_rect).adjust(TWO_CORNERS_DIAG))
        .register(PresetDef::path("snipRoundRect", snip_round_rect).adjust(SNIP_ROUND))
        .register(PresetDef::path("round1Rect", round1_rect).adjust(CORNER))
        .register(PresetDef::path("round2SameRect", round2_same_rect).adjust(TWO_CORNERS))
        .register(PresetDef::path("round2DiagRect", round2_diag_rect).adjust(TWO_CORNERS))
        .register(PresetDef::path("triangle", triangle).adjust(APEX))
        .register(PresetDef::path("rtTriangle", rt_triangle))
        .register(PresetDef::path("parallelogram", parallelogram).adjust(SLANT))
        .register(PresetDef::path("trapezoid", trapezoid).adjust(SLANT))
        .register(PresetDef::path("nonIsoscelesTrapezoid", non_isosceles_trapezoid).adjust(TWO_SLANTS))
        .register(PresetDef::path("diamond", diamond))
        .register(PresetDef::path("pentagon", pentagon))
        .register(PresetDef::path("hexagon", hexagon).adjust(SLANT))
        .register(PresetDef::path("heptagon", heptagon))
        .register(PresetDef::path("octagon", octagon).adjust(OCTAGON))
        .register(PresetDef::path("decagon", decagon))
        .register(PresetDef::path("dodecagon", dodecagon))
        .register(PresetDef::path("plus", plus).adjust(PLUS))
        .register(PresetDef::path("frame", frame).adjust(FRAME))
        .register(PresetDef::path("halfFrame", half_frame).adjust(HALF_FRAME))
        .register(PresetDef::path("corner", corner).adjust(CORNER_SHAPE))
        .register(PresetDef::path("diagStripe", diag_stripe).adjust(DIAG_STRIPE))
        .register(PresetDef::path("plaque", plaque).adjust(CORNER))
        .register(PresetDef::path("lightningBolt", lightning_bolt))
        .register(PresetDef::path("funnel", funnel));
}

fn rect(g: &Guides) -> PathData {
    fallback_rect(g.w(), g.h())
}

/// Rectangle with all four corners rounded by radius `x1`.
pub(super) fn rounded_rect(x0: f64, y0: f64, x1: f64, y1: f64, r: f64) -> PathData {
    PathData::new()
        .m(x0, y0 + r)
        .arc_to(r, r, CD2, CD4)
        .l(x1 - r, y0)
        .arc_to(r, r, THREE_CD4, CD4)
        .l(x1, y1 - r)
        .arc_to(r, r, 0.0, CD4)
        .l(x0 + r, y1)
        .arc_to(r, r, CD4, CD4)
        .z()
}

fn round_rect(g: &Guides) -> PathData {
    rounded_rect(0.0, 0.0, g.r(), g.b(), g.ss_ratio("adj"))
}

fn snip1_rect(g: &Guides) -> PathData {
    let dx1 = g.ss_ratio("adj");
    let x1 = g.r() - dx1;
    PathData::polygon(&[(0.0, 0.0), (x1, 0.0), (g.r(), dx1), (g.r(), g.b()), (0.0, g.b())])
}

fn snip2_same_rect(g: &Guides) -> PathData {
    let tx1 = g.ss_ratio("adj1");
    let bx1 = g.ss_ratio("adj2");
    let tx2 = g.r() - tx1;
    let bx2 = g.r() - bx1;
    let by1 = g.b() - bx1;
    PathData::polygon(&[
        (tx1, 0.0),
        (tx2, 0.0),
        (g.r(), tx1),
        (g.r(), by1),
        (bx2, g.b()),
        (bx1, g.b()),
        (0.0, by1),
        (0.0, tx1),
    ])
}

fn snip2_diag_rect(g: &Guides) -> PathData {
    let lx1 = g.ss_ratio("adj1");
    let rx1 = g.ss_ratio("adj2");
    let lx2 = g.r() - lx1;
    let ly1 = g.b() - lx1;
    let rx2 = g.r() - rx1;
    let ry1 = g.b() - rx1;
    PathData::polygon(&[
        (lx1, 0.0),
        (rx2, 0.0),
        (g.r(), rx1),
        (g.r(), ly1),
        (lx2, g.b()),
        (rx1, g.b()),
        (0.0, ry1),
        (0.0, lx1),
    ])
}

fn snip_round_rect(g: &Guides) -> PathData {
    let x1 = g.ss_ratio("adj1");
    let dx2 = g.ss_ratio("adj2");
    let x2 = g.r() - dx2;
    PathData::new()
        .m(x1, 0.0)
        .l(x2, 0.0)
        .l(g.r(), dx2)
        .l(g.r(), g.b())
        .l(0.0, g.b())
        .l(0.0, x1)
        .arc_to(x1, x1, CD2, CD4)
        .z()
}

fn round1_rect(g: &Guides) -> PathData {
    let dx1 = g.ss_ratio("adj");
    let x1 = g.r() - dx1;
    PathData::new()
        .m(0.0, 0.0)
        .l(x1, 0.0)
        .arc_to(dx1, dx1, THREE_CD4, CD4)
        .l(g.r(), g.b())
        .l(0.0, g.b())
        .z()
}

fn round2_same_rect(g: &Guides) -> PathData {
    let tx1 = g.ss_ratio("adj1");
    let bx1 = g.ss_ratio("adj2");
    let tx2 = g.r() - tx1;
    let by1 = g.b() - bx1;
    PathData::new()
        .m(tx1, 0.0)
        .l(tx2, 0.0)
        .arc_to(tx1, tx1, THREE_CD4, CD4)
        .l(g.r(), by1)
        .arc_to(bx1, bx1, 0.0, CD4)
        .l(bx1, g.b())
        .arc_to(bx1, bx1, CD4, CD4)
        .l(0.0, tx1)
        .arc_to(tx1, tx1, CD2, CD4)
        .z()
}

fn round2_diag_rect(g: &Guides) -> PathData {
    let x1 = g.ss_ratio("adj1");
    let a = g.ss_ratio("adj2");
    let x2 = g.r() - a;
    let y1 = g.b() - x1;
    PathData::new()
        .m(x1, 0.0)
        .l(x2, 0.0)
        .arc_to(a, a, THREE_CD4, CD4)
        .l(g.r(), y1)
        .arc_to(x1, x1, 0.0, CD4)
        .l(a, g.b())
        .arc_to(a, a, CD4, CD4)
        .l(0.0, x1)
        .arc_to(x1, x1, CD2, CD4)
        .z()
}

fn triangle(g: &Guides) -> PathData {
    let x1 = mul_div(g.w(), g.adj("adj"), 100000.0);
    PathData::polygon(&[(0.0, g.b()), (x1, 0.0), (g.r(), g.b())])
}

fn rt_triangle(g: &Guides) -> PathData {
    PathData::polygon(&[(0.0, g.b()), (0.0, 0.0), (g.r(), g.b())])
}

fn parallelogram(g: &Guides) -> PathData {
    let max_adj = mul_div(100000.0, g.w(), g.ss());
    let x2 = mul_div(g.ss(), g.pinned("adj", 0.0, max_adj), 100000.0);
    let x5 = g.r() - x2;
    PathData::polygon(&[(0.0, g.b()), (x2, 0.0), (g.r(), 0.0), (x5, g.b())])
}

fn trapezoid(g: &Guides) -> PathData {
    let max_adj = mul_div(50000.0, g.w(), g.ss());
    let x2 = mul_div(g.ss(), g.pinned("adj", 0.0, max_adj), 100000.0);
    let x3 = g.r() - x2;
    PathData::polygon(&[(0.0, g.b()), (x2, 0.0), (x3, 0.0), (g.r(), g.b())])
}

fn non_isosceles_trapezoid(g: &Guides) -> PathData {
    let max_adj = mul_div(50000.0, g.w(), g.ss());
    let x2 = mul_div(g.ss(), g.pinned("adj1", 0.0, max_adj), 100000.0);
    let dx3 = mul_div(g.ss(), g.pinned("adj2", 0.0, max_adj), 100000.0);
    let x3 = g.r() - dx3;
    PathData::polygon(&[(0.0, g.b()), (x2, 0.0), (x3, 0.0), (g.r(), g.b())])
}

fn diamond(g: &Guides) -> PathData {
    PathData::polygon(&[(0.0, g.vc()), (g.hc(), 0.0), (g.r(), g.vc()), (g.hc(), g.b())])
}

/// Regular `n`-gon on the ellipse centered at (`cx`, `cy`), first vertex at
/// visual angle `start`. Radii are the half extents scaled by `hf`/`vf`
/// (1/100000) so the outline touches the frame.
fn regular_polygon(g: &Guides, n: usize, start: f64, hf: f64, vf: f64, cy: f64) -> PathData {
    let rx = mul_div(g.wd2(), hf, 100000.0);
    let ry = mul_div(g.hd2(), vf, 100000.0);
    let step = 360.0 / n as f64;
    let points: Vec<(f64, f64)> = (0..n)
        .map(|k| {
            let t = (start + step * k as f64).to_radians();
            (g.hc() + rx * t.cos(), cy + ry * t.sin())
        })
        .collect();
    PathData::polygon(&points)
}

fn pentagon(g: &Guides) -> PathData {
    let svc = mul_div(g.vc(), 110557.0, 100000.0);
    regular_polygon(g, 5, -90.0, 105146.0, 110557.0, svc)
}

fn hexagon(g: &Guides) -> PathData {
    let max_adj = mul_div(50000.0, g.w(), g.ss());
    let x1 = mul_div(g.ss(), g.pinned("adj", 0.0, max_adj), 100000.0);
    let x2 = g.r() - x1;
    let shd2 = mul_div(g.hd2(), 115470.0, 100000.0);
    let dy1 = geometry::sin_of(shd2, 60.0);
    let y1 = g.vc() - dy1;
    let y2 = g.vc() + dy1;
    PathData::polygon(&[(0.0, g.vc()), (x1, y1), (x2, y1), (g.r(), g.vc()), (x2, y2), (x1, y2)])
}

fn heptagon(g: &Guides) -> PathData {
    let svc = mul_div(g.vc(), 105210.0, 100000.0);
    regular_polygon(g, 7, -90.0, 102572.0, 105210.0, svc)
}

fn octagon(g: &Guides) -> PathData {
    let x1 = g.ss_ratio("adj");
    let x2 = g.r() - x1;
    let y2 = g.b() - x1;
    PathData::polygon(&[
        (0.0, x1),
        (x1, 0.0),
        (x2, 0.0),
        (g.r(), x1),
        (g.r(), y2),
        (x2, g.b()),
        (x1, g.b()),
        (0.0, y2),
    ])
}

fn decagon(g: &Guides) -> PathData {
    regular_polygon(g, 10, 0.0, 100000.0, 105146.0, g.vc())
}

fn dodecagon(g: &Guides) -> PathData {
    regular_polygon(g, 12, 15.0, 103528.0, 103528.0, g.vc())
}

fn plus(g: &Guides) -> PathData {
    let x1 = g.ss_ratio("adj");
    let x2 = g.r() - x1;
    let y2 = g.b() - x1;
    PathData::polygon(&[
        (0.0, x1),
        (x1, x1),
        (x1, 0.0),
        (x2, 0.0),
        (x2, x1),
        (g.r(), x1),
        (g.r(), y2),
        (x2, y2),
        (x2, g.b()),
        (x1, g.b()),
        (x1, y2),
        (0.0, y2),
    ])
}

fn frame(g: &Guides) -> PathData {
    let x1 = g.ss_ratio("adj1");
    let x4 = g.r() - x1;
    let y4 = g.b() - x1;
    fallback_rect(g.w(), g.h()).poly(&[(x1, x1), (x1, y4), (x4, y4), (x4, x1)])
}

fn half_frame(g: &Guides) -> PathData {
    let max_adj2 = mul_div(100000.0, g.w(), g.ss());
    let x1 = mul_div(g.ss(), g.pinned("adj2", 0.0, max_adj2), 100000.0);
    let g2 = g.h() - mul_div(g.h(), x1, g.w());
    let max_adj1 = mul_div(100000.0, g2, g.ss());
    let y1 = mul_div(g.ss(), g.pinned("adj1", 0.0, max_adj1), 100000.0);
    let x2 = g.r() - mul_div(y1, g.w(), g.h());
    let y2 = g.b() - mul_div(x1, g.h(), g.w());
    PathData::polygon(&[(0.0, 0.0), (g.r(), 0.0), (x2, y1), (x1, y1), (x1, y2), (0.0, g.b())])
}

fn corner(g: &Guides) -> PathData {
    let max_adj1 = mul_div(100000.0, g.h(), g.ss());
    let max_adj2 = mul_div(100000.0, g.w(), g.ss());
    let dy1 = mul_div(g.ss(), g.pinned("adj1", 0.0, max_adj1), 100000.0);
    let x1 = mul_div(g.ss(), g.pinned("adj2", 0.0, max_adj2), 100000.0);
    let y1 = g.b() - dy1;
    PathData::polygon(&[(0.0, 0.0), (x1, 0.0), (x1, y1), (g.r(), y1), (g.r(), g.b()), (0.0, g.b())])
}

fn diag_stripe(g: &Guides) -> PathData {
    let x2 = mul_div(g.w(), g.adj("adj"), 100000.0);
    let y2 = mul_div(g.h(), g.adj("adj"), 100000.0);
    PathData::polygon(&[(0.0, y2), (x2, 0.0), (g.r(), 0.0), (0.0, g.b())])
}

fn plaque(g: &Guides) -> PathData {
    let x1 = g.ss_ratio("adj");
    let x2 = g.r() - x1;
    let y2 = g.b() - x1;
    PathData::new()
        .m(0.0, x1)
        .arc_to(x1, x1, CD4, -CD4)
        .l(x2, 0.0)
        .arc_to(x1, x1, CD2, -CD4)
        .l(g.r(), y2)
        .arc_to(x1, x1, THREE_CD4, -CD4)
        .l(x1, g.b())
        .arc_to(x1, x1, 0.0, -CD4)
        .z()
}

fn lightning_bolt(g: &Guides) -> PathData {
    grid_polygon(
        g,
        21600.0,
        &[
            (8458.0, 0.0),
            (0.0, 3923.0),
            (7564.0, 8416.0),
            (4993.0, 9720.0),
            (12197.0, 13904.0),
            (9987.0, 14934.0),
            (21600.0, 21600.0),
            (14768.0, 12911.0),
            (16558.0, 12016.0),
            (11030.0, 6840.0),
            (12831.0, 6120.0),
        ],
    )
}

/// Rim ellipse on top narrowing to a small bottom ellipse, with the inner
/// rim cut out.
fn funnel(g: &Guides) -> PathData {
    let d = g.ss() / 20.0;
    let rw2 = g.wd2() - d;
    let rh2 = g.hd4() - d;
    let da = geometry::at2(geometry::cos_of(g.wd2(), 8.0), geometry::sin_of(g.hd4(), 8.0));
    let rw3 = g.wd2() / 4.0;
    let rh3 = g.hd4() / 4.0;
    PathData::new()
        .arc(g.hc(), g.hd4(), g.wd2(), g.hd4(), CD2 - da, CD2 + 2.0 * da)
        .arc(g.hc(), g.b() - rh3, rw3, rh3, da, CD2 - 2.0 * da)
        .z()
        .m(g.wd2() - rw2, g.hd4())
        .arc_to(rw2, rh2, CD2, -360.0)
        .z()
}

#[cfg(test)]
mod tests {
    use crate::{AdjustmentSet, get_path};

    fn none() -> AdjustmentSet {
        AdjustmentSet::new()
    }

    #[test]
    fn funnel_body_and_rim() {
        let d = get_path("funnel", 100.0, 100.0, &none());
        assert_eq!(d.matches('A').count(), 4, "{d}");
        assert_eq!(d.matches('L').count(), 1, "{d}");
        assert!(d.ends_with(" Z M5,25 A45,20 0 0,0 95,25 A45,20 0 0,0 5,25 Z"), "{d}");
    }

    #[test]
    fn rect_is_exact() {
        assert_eq!(get_path("rect", 100.0, 50.0, &none()), "M0,0 L100,0 L100,50 L0,50 Z");
    }

    #[test]
    fn round_rect_default_corner() {
        // r = 100 * 16667 / 100000
        let d = get_path("roundRect", 200.0, 100.0, &none());
        assert!(d.starts_with("M0,16.667 A16.667,16.667 0 0,1 16.667,0 L183.333,0"), "{d}");
        assert!(d.ends_with('Z'));
    }

    #[test]
    fn round_rect_zero_corner_is_rectangle_with_empty_arcs() {
        let adj = AdjustmentSet::new().with("adj", 0.0);
        let d = get_path("roundRect", 100.0, 50.0, &adj);
        assert!(d.starts_with("M0,0 A0,0 0 0,1 0,0 L100,0"), "{d}");
    }

    #[test]
    fn triangle_apex_follows_adjustment() {
        assert_eq!(get_path("triangle", 100.0, 80.0, &none()), "M0,80 L50,0 L100,80 Z");
        let adj = AdjustmentSet::new().with("adj", 0.0);
        assert_eq!(get_path("triangle", 100.0, 80.0, &adj), "M0,80 L0,0 L100,80 Z");
    }

    #[test]
    fn frame_has_inner_hole() {
        let adj = AdjustmentSet::new().with("adj1", 10000.0);
        assert_eq!(
            get_path("frame", 100.0, 100.0, &adj),
            "M0,0 L100,0 L100,100 L0,100 Z M10,10 L10,90 L90,90 L90,10 Z"
        );
    }

    #[test]
    fn octagon_corners() {
        let adj = AdjustmentSet::new().with("adj", 25000.0);
        assert_eq!(
            get_path("octagon", 100.0, 100.0, &adj),
            "M0,25 L25,0 L75,0 L100,25 L100,75 L75,100 L25,100 L0,75 Z"
        );
    }
}
