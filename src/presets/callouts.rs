//! Callouts: wedge callouts pointing at an adjustable tail point, the cloud
//! and its callout, and the line callouts (plain, accent bar, border).

use super::{Catalog, PresetDef, fallback_rect};
use crate::adjust::AdjustSpec;
use crate::geometry::{self, CD2, CD4, Guides, THREE_CD4, if_else, mul_div};
use crate::path::PathData;
use crate::shape::{FillModifier, ShapeGeometry};

const WEDGE: &[AdjustSpec] = &[AdjustSpec::new("adj1", -20833.0), AdjustSpec::new("adj2", 62500.0)];
const WEDGE_ROUND: &[AdjustSpec] = &[
    AdjustSpec::new("adj1", -20833.0),
    AdjustSpec::new("adj2", 62500.0),
    AdjustSpec::new("adj3", 16667.0).clamp(0.0, 50000.0),
];
const CALLOUT1: &[AdjustSpec] = &[
    AdjustSpec::new("adj1", 18750.0),
    AdjustSpec::new("adj2", -8333.0),
    AdjustSpec::new("adj3", 112500.0),
    AdjustSpec::new("adj4", -38333.0),
];
const CALLOUT2: &[AdjustSpec] = &[
    AdjustSpec::new("adj1", 18750.0),
    AdjustSpec::new("adj2", -8333.0),
    AdjustSpec::new("adj3", 18750.0),
    AdjustSpec::new("adj4", -16667.0),
    AdjustSpec::new("adj5", 112500.0),
    AdjustSpec::new("adj6", -46667.0),
];
const CALLOUT3: &[AdjustSpec] = &[
    AdjustSpec::new("adj1", 18750.0),
    AdjustSpec::new("adj2", -8333.0),
    AdjustSpec::new("adj3", 18750.0),
    AdjustSpec::new("adj4", -16667.0),
    AdjustSpec::new("adj5", 100000.0),
    AdjustSpec::new("adj6", -16667.0),
    AdjustSpec::new("adj7", 112963.0),
    AdjustSpec::new("adj8", -8333.0),
];

/// Cloud outline on a 43200 design square: radii, start angle and sweep of
/// each lobe, in DrawingML units.
const CLOUD_LOBES: [(f64, f64, f64, f64); 11] = [
    (6753.0, 9190.0, -11429249.0, 7426832.0),
    (5333.0, 7267.0, -8646143.0, 5396714.0),
    (4365.0, 5945.0, -8748475.0, 5983381.0),
    (4857.0, 6595.0, -7859164.0, 7034504.0),
    (5333.0, 7273.0, -4722533.0, 6541615.0),
    (6775.0, 9220.0, -2776035.0, 7816140.0),
    (5785.0, 7867.0, 37501.0, 6842000.0),
    (6752.0, 9215.0, 1347096.0, 6910353.0),
    (7720.0, 10543.0, 3974558.0, 4542661.0),
    (4360.0, 5918.0, -16496525.0, 8804134.0),
    (4345.0, 5945.0, -14809710.0, 9151131.0),
];

pub(super) fn register(c: &mut Catalog) {
    c.register(PresetDef::path("wedgeRectCallout", wedge_rect_callout).adjust(WEDGE))
        .register(PresetDef::path("wedgeRoundRectCallout", wedge_round_rect_callout).adjust(WEDGE_ROUND))
        .register(PresetDef::path("wedgeEllipseCallout", wedge_ellipse_callout).adjust(WEDGE))
        .register(PresetDef::path("cloud", cloud))
        .register(PresetDef::path("cloudCallout", cloud_callout).adjust(WEDGE))
        .register(PresetDef::composite("callout1", callout1).adjust(CALLOUT1))
        .register(PresetDef::composite("accentCallout1", accent_callout1).adjust(CALLOUT1))
        .register(PresetDef::composite("borderCallout1", border_callout1).adjust(CALLOUT1))
        .register(PresetDef::composite("accentBorderCallout1", accent_border_callout1).adjust(CALLOUT1))
        .register(PresetDef::composite("callout2", callout2).adjust(CALLOUT2))
        .register(PresetDef::composite("accentCallout2", accent_callout2).adjust(CALLOUT2))
        .register(PresetDef::composite("borderCallout2", border_callout2).adjust(CALLOUT2))
        .register(PresetDef::composite("accentBorderCallout2", accent_border_callout2).adjust(CALLOUT2))
        .register(PresetDef::composite("callout3", callout3).adjust(CALLOUT3))
        .register(PresetDef::composite("accentCallout3", accent_callout3).adjust(CALLOUT3))
        .register(PresetDef::composite("borderCallout3", border_callout3).adjust(CALLOUT3))
        .register(PresetDef::composite("accentBorderCallout3", accent_border_callout3).adjust(CALLOUT3));
}

/// Tail point of a wedge callout, relative to the frame center.
fn tail(g: &Guides) -> (f64, f64) {
    (
        mul_div(g.w(), g.adj("adj1"), 100000.0),
        mul_div(g.h(), g.adj("adj2"), 100000.0),
    )
}

/// Where the wedge of a rectangular callout leaves each side. The wedge
/// leaves from the side the tail point faces; the other sides stay straight.
struct Wedge {
    x1: f64,
    x2: f64,
    y1: f64,
    y2: f64,
    xt: f64,
    yt: f64,
    xr: f64,
    yr: f64,
    xb: f64,
    yb: f64,
    xl: f64,
    yl: f64,
}

impl Wedge {
    fn new(g: &Guides) -> Self {
        let (dx, dy) = tail(g);
        let x_pos = g.hc() + dx;
        let y_pos = g.vc() + dy;
        let dq = mul_div(dx, g.h(), g.w());
        let dz = dy.abs() - dq.abs();
        let x1 = mul_div(g.w(), if_else(dx, 7.0, 2.0), 12.0);
        let x2 = mul_div(g.w(), if_else(dx, 10.0, 5.0), 12.0);
        let y1 = mul_div(g.h(), if_else(dy, 7.0, 2.0), 12.0);
        let y2 = mul_div(g.h(), if_else(dy, 10.0, 5.0), 12.0);
        let (r, b) = (g.r(), g.b());
        Self {
            x1,
            x2,
            y1,
            y2,
            xl: if_else(dz, 0.0, if_else(dx, 0.0, x_pos)),
            yl: if_else(dz, y1, if_else(dx, y1, y_pos)),
            xt: if_else(dz, if_else(dy, x1, x_pos), x1),
            yt: if_else(dz, if_else(dy, 0.0, y_pos), 0.0),
            xr: if_else(dz, r, if_else(dx, x_pos, r)),
            yr: if_else(dz, y1, if_else(dx, y_pos, y1)),
            xb: if_else(dz, if_else(dy, x_pos, x1), x1),
            yb: if_else(dz, if_else(dy, y_pos, b), b),
        }
    }
}

fn wedge_rect_callout(g: &Guides) -> PathData {
    let k = Wedge::new(g);
    let (r, b) = (g.r(), g.b());
    PathData::polygon(&[
        (0.0, 0.0),
        (k.x1, 0.0),
        (k.xt, k.yt),
        (k.x2, 0.0),
        (r, 0.0),
        (r, k.y1),
        (k.xr, k.yr),
        (r, k.y2),
        (r, b),
        (k.x2, b),
        (k.xb, k.yb),
        (k.x1, b),
        (0.0, b),
        (0.0, k.y2),
        (k.xl, k.yl),
        (0.0, k.y1),
    ])
}

fn wedge_round_rect_callout(g: &Guides) -> PathData {
    let k = Wedge::new(g);
    let (r, b) = (g.r(), g.b());
    let ar = g.ss_ratio("adj3");
    PathData::new()
        .m(0.0, ar)
        .arc_to(ar, ar, CD2, CD4)
        .l(k.x1, 0.0)
        .l(k.xt, k.yt)
        .l(k.x2, 0.0)
        .l(r - ar, 0.0)
        .arc_to(ar, ar, THREE_CD4, CD4)
        .l(r, k.y1)
        .l(k.xr, k.yr)
        .l(r, k.y2)
        .l(r, b - ar)
        .arc_to(ar, ar, 0.0, CD4)
        .l(k.x2, b)
        .l(k.xb, k.yb)
        .l(k.x1, b)
        .l(ar, b)
        .arc_to(ar, ar, CD4, CD4)
        .l(0.0, k.y2)
        .l(k.xl, k.yl)
        .l(0.0, k.y1)
        .z()
}

fn wedge_ellipse_callout(g: &Guides) -> PathData {
    let (dx, dy) = tail(g);
    let pang = geometry::at2(dx * g.h(), dy * g.w());
    let st = pang + 11.0;
    PathData::new()
        .m(g.hc() + dx, g.vc() + dy)
        .arc(g.hc(), g.vc(), g.wd2(), g.hd2(), st, 338.0)
        .z()
}

fn cloud(g: &Guides) -> PathData {
    let (sx, sy) = (g.w() / 43200.0, g.h() / 43200.0);
    CLOUD_LOBES
        .iter()
        .fold(PathData::new().m(3900.0 * sx, 14370.0 * sy), |path, &(wr, hr, st, sw)| {
            path.arc_to(wr * sx, hr * sy, st / 60000.0, sw / 60000.0)
        })
        .z()
}

fn cloud_callout(g: &Guides) -> PathData {
    let (dx, dy) = tail(g);
    let (px, py) = (g.hc() + dx, g.vc() + dy);
    [(0.0, 72.0), (0.18, 45.0), (0.36, 28.0)]
        .iter()
        .fold(cloud(g), |path, &(t, div)| {
            path.ellipse(px - dx * t, py - dy * t, g.w() / div, g.h() / div)
        })
}

/// Leader line of a line callout: the `adj` pairs are (y, x) points in
/// 1/100000 of the frame.
fn leader(g: &Guides, points: usize) -> PathData {
    let pts: Vec<(f64, f64)> = (0..points)
        .map(|i| {
            let y = mul_div(g.h(), g.adj(&format!("adj{}", 2 * i + 1)), 100000.0);
            let x = mul_div(g.w(), g.adj(&format!("adj{}", 2 * i + 2)), 100000.0);
            (x, y)
        })
        .collect();
    PathData::new().polyline(&pts)
}

fn line_callout(g: &Guides, points: usize, accent: bool, border: bool) -> ShapeGeometry {
    let mut geom = ShapeGeometry::new(fallback_rect(g.w(), g.h()), FillModifier::Norm, border);
    if accent {
        let x1 = mul_div(g.w(), g.adj("adj2"), 100000.0);
        geom = geom.layer(
            PathData::new().polyline(&[(x1, 0.0), (x1, g.b())]),
            FillModifier::None,
            true,
        );
    }
    geom.layer(leader(g, points), FillModifier::None, true)
}

fn callout1(g: &Guides) -> ShapeGeometry {
    line_callout(g, 2, false, false)
}

fn accent_callout1(g: &Guides) -> ShapeGeometry {
    line_callout(g, 2, true, false)
}

fn border_callout1(g: &Guides) -> ShapeGeometry {
    line_callout(g, 2, false, true)
}

fn accent_border_callout1(g: &Guides) -> ShapeGeometry {
    line_callout(g, 2, true, true)
}

fn callout2(g: &Guides) -> ShapeGeometry {
    line_callout(g, 3, false, false)
}

fn accent_callout2(g: &Guides) -> ShapeGeometry {
    line_callout(g, 3, true, false)
}

fn border_callout2(g: &Guides) -> ShapeGeometry {
    line_callout(g, 3, false, true)
}

fn accent_border_callout2(g: &Guides) -> ShapeGeometry {
    line_callout(g, 3, true, true)
}

fn callout3(g: &Guides) -> ShapeGeometry {
    line_callout(g, 4, false, false)
}

fn accent_callout3(g: &Guides) -> ShapeGeometry {
    line_callout(g, 4, true, false)
}

fn border_callout3(g: &Guides) -> ShapeGeometry {
    line_callout(g, 4, false, true)
}

fn accent_border_callout3(g: &Guides) -> ShapeGeometry {
    line_callout(g, 4, true, true)
}

#[cfg(test)]
mod tests {
    use crate::{AdjustmentSet, get_multi_path, get_path};

    #[test]
    fn wedge_leaves_the_bottom_edge_by_default() {
        // tail at (58.334, 67.5), below the frame
        assert_eq!(
            get_path("wedgeRectCallout", 200.0, 60.0, &AdjustmentSet::new()),
            "M0,0 L33.3333,0 L33.3333,0 L83.3333,0 L200,0 L200,35 L200,35 L200,50 L200,60 \
             L83.3333,60 L58.334,67.5 L33.3333,60 L0,60 L0,50 L0,35 L0,35 Z"
        );
    }

    #[test]
    fn line_callout_layers() {
        let geom = get_multi_path("accentBorderCallout2", 200.0, 100.0, &AdjustmentSet::new()).unwrap();
        assert_eq!(geom.len(), 3);
        assert!(geom.parts()[0].stroke);
        assert_eq!(geom.parts()[2].d(), "M-16.666,18.75 L-33.334,18.75 L-93.334,112.5");

        let geom = get_multi_path("callout1", 200.0, 100.0, &AdjustmentSet::new()).unwrap();
        assert_eq!(geom.len(), 2);
        assert!(!geom.parts()[0].stroke);
    }

    #[test]
    fn cloud_is_one_closed_outline() {
        let d = get_path("cloud", 432.0, 432.0, &AdjustmentSet::new());
        assert!(d.starts_with("M39,143.7 "), "{d}");
        assert_eq!(d.matches('A').count(), 11);
        assert!(d.ends_with('Z'));
    }
}
