//! Math symbols, corner tabs and chart markers.

use glam::{DVec2, dvec2};

use super::{Catalog, PresetDef, fallback_rect};
use crate::adjust::AdjustSpec;
use crate::geometry::{CD1, CD2, CD4, Guides, THREE_CD4, modulus, mul_div, pin};
use crate::path::PathData;
use crate::shape::{FillModifier, ShapeGeometry};

/// Half width of the math symbol bars, as a share of `w` (1/200000).
const BAR_SPAN: f64 = 73490.0;

const MATH_PLUS: &[AdjustSpec] = &[AdjustSpec::new("adj1", 23520.0).clamp(0.0, 73490.0)];
const MATH_MINUS: &[AdjustSpec] = &[AdjustSpec::new("adj1", 23520.0).clamp(0.0, 100000.0)];
const MATH_MULTIPLY: &[AdjustSpec] = &[AdjustSpec::new("adj1", 23520.0).clamp(0.0, 51965.0)];
const MATH_DIVIDE: &[AdjustSpec] = &[
    AdjustSpec::new("adj1", 23520.0).clamp(1000.0, 36745.0),
    AdjustSpec::new("adj2", 5880.0),
    AdjustSpec::new("adj3", 11760.0),
];
const MATH_EQUAL: &[AdjustSpec] = &[
    AdjustSpec::new("adj1", 23520.0).clamp(0.0, 36745.0),
    AdjustSpec::new("adj2", 11760.0),
];
const MATH_NOT_EQUAL: &[AdjustSpec] = &[
    AdjustSpec::new("adj1", 23520.0).clamp(0.0, 50000.0),
    AdjustSpec::new("adj2", 6600000.0).clamp(4200000.0, 6600000.0),
    AdjustSpec::new("adj3", 11760.0),
];

pub(super) fn register(c: &mut Catalog) {
    c.register(PresetDef::path("mathPlus", math_plus).adjust(MATH_PLUS))
        .register(PresetDef::path("mathMinus", math_minus).adjust(MATH_MINUS))
        .register(PresetDef::path("mathMultiply", math_multiply).adjust(MATH_MULTIPLY))
        .register(PresetDef::path("mathDivide", math_divide).adjust(MATH_DIVIDE))
        .register(PresetDef::path("mathEqual", math_equal).adjust(MATH_EQUAL))
        .register(PresetDef::path("mathNotEqual", math_not_equal).adjust(MATH_NOT_EQUAL))
        .register(PresetDef::path("squareTabs", square_tabs))
        .register(PresetDef::path("cornerTabs", corner_tabs))
        .register(PresetDef::path("plaqueTabs", plaque_tabs))
        .register(PresetDef::composite("chartX", chart_x))
        .register(PresetDef::composite("chartStar", chart_star))
        .register(PresetDef::composite("chartPlus", chart_plus));
}

fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> [(f64, f64); 4] {
    [(x0, y0), (x1, y0), (x1, y1), (x0, y1)]
}

fn math_plus(g: &Guides) -> PathData {
    let a1 = g.pinned("adj1", 0.0, BAR_SPAN);
    let dx1 = mul_div(g.w(), BAR_SPAN, 200000.0);
    let dy1 = mul_div(g.h(), BAR_SPAN, 200000.0);
    let dx2 = mul_div(g.ss(), a1, 200000.0);
    let (hc, vc) = (g.hc(), g.vc());
    let (x1, x2, x3, x4) = (hc - dx1, hc - dx2, hc + dx2, hc + dx1);
    let (y1, y2, y3, y4) = (vc - dy1, vc - dx2, vc + dx2, vc + dy1);
    PathData::polygon(&[
        (x1, y2),
        (x2, y2),
        (x2, y1),
        (x3, y1),
        (x3, y2),
        (x4, y2),
        (x4, y3),
        (x3, y3),
        (x3, y4),
        (x2, y4),
        (x2, y3),
        (x1, y3),
    ])
}

fn math_minus(g: &Guides) -> PathData {
    let dy1 = mul_div(g.h(), g.adj("adj1"), 200000.0);
    let dx1 = mul_div(g.w(), BAR_SPAN, 200000.0);
    PathData::polygon(&rect(g.hc() - dx1, g.vc() - dy1, g.hc() + dx1, g.vc() + dy1))
}

/// Two bars along the diagonals, cut square at their ends.
fn math_multiply(g: &Guides) -> PathData {
    let th = mul_div(g.ss(), g.pinned("adj1", 0.0, 51965.0), 100000.0);
    let diag = modulus(g.w(), g.h(), 0.0);
    let dir = dvec2(g.w(), g.h()) / diag;
    let tan = g.h() / g.w();
    let normal = dvec2(-dir.y, dir.x) * (th / 2.0);
    let mid = dir * (diag - diag * 51965.0 / 100000.0) / 2.0;
    let a = mid + normal;
    let b = mid - normal;

    let (r, bt, hc, vc) = (g.r(), g.b(), g.hc(), g.vc());
    let y_c = b.y + (hc - b.x) * tan;
    let x_fe = (vc - a.y) / tan;
    let (x_d, x_e) = (r - b.x, r - a.x);
    PathData::polygon(&[
        (a.x, a.y),
        (b.x, b.y),
        (hc, y_c),
        (x_d, b.y),
        (x_e, a.y),
        (x_e - x_fe, vc),
        (x_e, bt - a.y),
        (x_d, bt - b.y),
        (hc, bt - y_c),
        (b.x, bt - b.y),
        (a.x, bt - a.y),
        (a.x + x_fe, vc),
    ])
}

fn math_divide(g: &Guides) -> PathData {
    let (w, h) = (g.w(), g.h());
    let a1 = g.pinned("adj1", 1000.0, 36745.0);
    let max_adj3 = ((BAR_SPAN - a1) / 4.0).min(36745.0 * w / h);
    let a3 = g.pinned("adj3", 1000.0, max_adj3);
    let a2 = g.pinned("adj2", 0.0, BAR_SPAN - 4.0 * a3 - a1);

    let dy1 = mul_div(h, a1, 200000.0);
    let gap = mul_div(h, a2, 100000.0);
    let rad = mul_div(h, a3, 100000.0);
    let dx1 = mul_div(w, BAR_SPAN, 200000.0);
    let y3 = g.vc() - dy1;
    let y4 = g.vc() + dy1;
    let y2 = y3 - gap - rad;
    let y1 = y2 - rad;
    let y5 = g.b() - y1;

    PathData::new()
        .m(g.hc(), y1)
        .arc_to(rad, rad, THREE_CD4, CD1)
        .z()
        .m(g.hc(), y5)
        .arc_to(rad, rad, CD4, CD1)
        .z()
        .poly(&rect(g.hc() - dx1, y3, g.hc() + dx1, y4))
}

/// Vertical extents of the two bars of `=`.
fn equal_bars(g: &Guides) -> (f64, f64, f64, f64) {
    let a1 = g.pinned("adj1", 0.0, 36745.0);
    let a2 = g.pinned("adj2", 0.0, 100000.0 - 2.0 * a1);
    let dy1 = mul_div(g.h(), a1, 100000.0);
    let dy2 = mul_div(g.h(), a2, 200000.0);
    let y2 = g.vc() - dy2;
    let y3 = g.vc() + dy2;
    (y2 - dy1, y2, y3, y3 + dy1)
}

fn math_equal(g: &Guides) -> PathData {
    let (y1, y2, y3, y4) = equal_bars(g);
    let dx1 = mul_div(g.w(), BAR_SPAN, 200000.0);
    let (x1, x2) = (g.hc() - dx1, g.hc() + dx1);
    PathData::polygon(&rect(x1, y1, x2, y2)).poly(&rect(x1, y3, x2, y4))
}

/// `=` crossed by a slanted bar. `adj2` is the slant, measured clockwise
/// from the positive x axis.
fn math_not_equal(g: &Guides) -> PathData {
    let (y1, y2, y3, y4) = equal_bars(g);
    let dx1 = mul_div(g.w(), BAR_SPAN, 200000.0);
    let (x1, x2) = (g.hc() - dx1, g.hc() + dx1);

    let slant = pin(70.0, g.angle("adj2"), 110.0).to_radians();
    let dir = DVec2::new(slant.cos(), slant.sin());
    let reach = (y4 - y1) / 2.0 + (y2 - y1);
    let half = dir * (reach / dir.y.abs().max(0.5));
    let side = dvec2(-dir.y, dir.x) * ((y2 - y1) / 2.0);
    let c = g.center();
    let corners = [c - half - side, c - half + side, c + half + side, c + half - side];

    PathData::polygon(&rect(x1, y1, x2, y2))
        .poly(&rect(x1, y3, x2, y4))
        .poly(&corners.map(|p| (p.x, p.y)))
}

/// Side of the corner tabs: a share of the frame diagonal.
fn tab_size(g: &Guides, share: f64) -> f64 {
    modulus(g.w(), g.h(), 0.0) * share / 10000.0
}

fn square_tabs(g: &Guides) -> PathData {
    let dx = tab_size(g, 2929.0);
    let (x1, y1) = (g.r() - dx, g.b() - dx);
    PathData::polygon(&rect(0.0, 0.0, dx, dx))
        .poly(&rect(0.0, y1, dx, g.b()))
        .poly(&rect(x1, 0.0, g.r(), dx))
        .poly(&rect(x1, y1, g.r(), g.b()))
}

fn corner_tabs(g: &Guides) -> PathData {
    let dx = tab_size(g, 2929.0);
    let (x1, y1, r, b) = (g.r() - dx, g.b() - dx, g.r(), g.b());
    PathData::polygon(&[(0.0, 0.0), (dx, 0.0), (0.0, dx)])
        .poly(&[(0.0, y1), (dx, b), (0.0, b)])
        .poly(&[(x1, 0.0), (r, 0.0), (r, dx)])
        .poly(&[(r, y1), (r, b), (x1, b)])
}

/// Quarter discs centered on the corners.
fn plaque_tabs(g: &Guides) -> PathData {
    let dx = tab_size(g, 1464.0);
    let (x1, y1, r, b) = (g.r() - dx, g.b() - dx, g.r(), g.b());
    PathData::new()
        .m(0.0, 0.0)
        .l(dx, 0.0)
        .arc_to(dx, dx, 0.0, CD4)
        .z()
        .m(r, 0.0)
        .l(r, dx)
        .arc_to(dx, dx, CD4, CD4)
        .z()
        .m(0.0, b)
        .l(0.0, y1)
        .arc_to(dx, dx, THREE_CD4, CD4)
        .z()
        .m(r, b)
        .l(x1, b)
        .arc_to(dx, dx, CD2, CD4)
        .z()
}

/// Chart marker: the stroked frame, then the unfilled marker lines.
fn chart_marker(g: &Guides, lines: PathData) -> ShapeGeometry {
    ShapeGeometry::new(fallback_rect(g.w(), g.h()), FillModifier::Norm, true).layer(lines, FillModifier::None, true)
}

fn diagonals(g: &Guides) -> PathData {
    PathData::new()
        .polyline(&[(0.0, 0.0), (g.r(), g.b())])
        .polyline(&[(g.r(), 0.0), (0.0, g.b())])
}

fn cross(g: &Guides) -> PathData {
    PathData::new()
        .polyline(&[(g.hc(), 0.0), (g.hc(), g.b())])
        .polyline(&[(0.0, g.vc()), (g.r(), g.vc())])
}

fn chart_x(g: &Guides) -> ShapeGeometry {
    chart_marker(g, diagonals(g))
}

fn chart_star(g: &Guides) -> ShapeGeometry {
    let lines = diagonals(g).polyline(&[(g.hc(), 0.0), (g.hc(), g.b())]);
    chart_marker(g, lines)
}

fn chart_plus(g: &Guides) -> ShapeGeometry {
    chart_marker(g, cross(g))
}

#[cfg(test)]
mod tests {
    use crate::shape::FillModifier;
    use crate::{AdjustmentSet, get_multi_path, get_path};

    #[test]
    fn chart_x_is_frame_then_diagonals() {
        let geo = get_multi_path("chartX", 400.0, 280.0, &AdjustmentSet::new()).unwrap();
        assert_eq!(geo.len(), 2);
        let frame = &geo.parts()[0];
        let lines = &geo.parts()[1];
        assert_eq!(frame.fill, FillModifier::Norm);
        assert_eq!(frame.d(), "M0,0 L400,0 L400,280 L0,280 Z");
        assert_eq!((lines.fill, lines.stroke), (FillModifier::None, true));
        assert_eq!(lines.d(), "M0,0 L400,280 M400,0 L0,280");
    }

    #[test]
    fn math_plus_default() {
        assert_eq!(
            get_path("mathPlus", 100.0, 100.0, &AdjustmentSet::new()),
            "M13.255,38.24 L38.24,38.24 L38.24,13.255 L61.76,13.255 L61.76,38.24 L86.745,38.24 \
             L86.745,61.76 L61.76,61.76 L61.76,86.745 L38.24,86.745 L38.24,61.76 L13.255,61.76 Z"
        );
    }

    #[test]
    fn math_minus_default() {
        assert_eq!(
            get_path("mathMinus", 100.0, 100.0, &AdjustmentSet::new()),
            "M13.255,38.24 L86.745,38.24 L86.745,61.76 L13.255,61.76 Z"
        );
    }

    #[test]
    fn math_multiply_is_point_symmetric() {
        let d = get_path("mathMultiply", 100.0, 100.0, &AdjustmentSet::new());
        assert_eq!(d.matches('L').count(), 11, "{d}");
        assert!(d.ends_with('Z'));
    }

    #[test]
    fn math_divide_has_two_dots_and_a_bar() {
        let d = get_path("mathDivide", 100.0, 100.0, &AdjustmentSet::new());
        assert_eq!(d.matches('M').count(), 3, "{d}");
        assert_eq!(d.matches('A').count(), 4, "{d}");
    }

    #[test]
    fn square_tabs_scale_with_the_diagonal() {
        let d = get_path("squareTabs", 300.0, 400.0, &AdjustmentSet::new());
        // diagonal 500, tab 146.45
        assert!(d.starts_with("M0,0 L146.45,0 L146.45,146.45 L0,146.45 Z"), "{d}");
    }
}
