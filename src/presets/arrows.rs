//! Block arrows, chevrons and arrow callouts.

use super::mirror::Mirror;
use super::{Catalog, PresetDef};
use crate::adjust::AdjustSpec;
use crate::geometry::{CD2, CD4, Guides, THREE_CD4, mul_div, pin};
use crate::path::PathData;

const ARROW: &[AdjustSpec] = &[
    AdjustSpec::new("adj1", 50000.0).clamp(0.0, 100000.0),
    AdjustSpec::new("adj2", 50000.0),
];
const QUAD_ARROW: &[AdjustSpec] = &[
    AdjustSpec::new("adj1", 22500.0),
    AdjustSpec::new("adj2", 22500.0),
    AdjustSpec::new("adj3", 22500.0),
];
const THREE_WAY_ARROW: &[AdjustSpec] = &[
    AdjustSpec::new("adj1", 25000.0),
    AdjustSpec::new("adj2", 25000.0),
    AdjustSpec::new("adj3", 25000.0),
];
const BENT_UP_ARROW: &[AdjustSpec] = &[
    AdjustSpec::new("adj1", 25000.0).clamp(0.0, 50000.0),
    AdjustSpec::new("adj2", 25000.0).clamp(0.0, 50000.0),
    AdjustSpec::new("adj3", 25000.0).clamp(0.0, 50000.0),
];
const BENT_ARROW: &[AdjustSpec] = &[
    AdjustSpec::new("adj1", 25000.0),
    AdjustSpec::new("adj2", 25000.0),
    AdjustSpec::new("adj3", 25000.0).clamp(0.0, 50000.0),
    AdjustSpec::new("adj4", 43750.0),
];
const UTURN_ARROW: &[AdjustSpec] = &[
    AdjustSpec::new("adj1", 25000.0),
    AdjustSpec::new("adj2", 25000.0),
    AdjustSpec::new("adj3", 25000.0),
    AdjustSpec::new("adj4", 43750.0),
    AdjustSpec::new("adj5", 75000.0),
];
const STRIPED_ARROW: &[AdjustSpec] = &[
    AdjustSpec::new("adj1", 50000.0).clamp(0.0, 100000.0),
    AdjustSpec::new("adj2", 50000.0),
];
const CHEVRON: &[AdjustSpec] = &[AdjustSpec::new("adj", 50000.0)];
const ARROW_CALLOUT: &[AdjustSpec] = &[
    AdjustSpec::new("adj1", 25000.0),
    AdjustSpec::new("adj2", 25000.0),
    AdjustSpec::new("adj3", 25000.0),
    AdjustSpec::new("adj4", 64977.0),
];
const DOUBLE_ARROW_CALLOUT: &[AdjustSpec] = &[
    AdjustSpec::new("adj1", 25000.0),
    AdjustSpec::new("adj2", 25000.0),
    AdjustSpec::new("adj3", 25000.0),
    AdjustSpec::new("adj4", 48123.0),
];
const QUAD_ARROW_CALLOUT: &[AdjustSpec] = &[
    AdjustSpec::new("adj1", 18515.0),
    AdjustSpec::new("adj2", 18515.0),
    AdjustSpec::new("adj3", 18515.0),
    AdjustSpec::new("adj4", 48123.0),
];
const SWOOSH: &[AdjustSpec] = &[
    AdjustSpec::new("adj1", 25000.0).clamp(1.0, 75000.0),
    AdjustSpec::new("adj2", 16667.0).clamp(0.0, 50000.0),
];

pub(super) fn register(c: &mut Catalog) {
    c.register(PresetDef::path("rightArrow", right_arrow).adjust(ARROW))
        .register(PresetDef::path("leftArrow", left_arrow).adjust(ARROW))
        .register(PresetDef::path("downArrow", down_arrow).adjust(ARROW))
        .register(PresetDef::path("upArrow", up_arrow).adjust(ARROW))
        .register(PresetDef::path("leftRightArrow", left_right_arrow).adjust(ARROW))
        .register(PresetDef::path("upDownArrow", up_down_arrow).adjust(ARROW))
        .register(PresetDef::path("quadArrow", quad_arrow).adjust(QUAD_ARROW))
        .register(PresetDef::path("leftRightUpArrow", left_right_up_arrow).adjust(THREE_WAY_ARROW))
        .register(PresetDef::path("leftUpArrow", left_up_arrow).adjust(THREE_WAY_ARROW))
        .register(PresetDef::path("bentUpArrow", bent_up_arrow).adjust(BENT_UP_ARROW))
        .register(PresetDef::path("bentArrow", bent_arrow).adjust(BENT_ARROW))
        .register(PresetDef::path("uturnArrow", uturn_arrow).adjust(UTURN_ARROW))
        .register(PresetDef::path("notchedRightArrow", notched_right_arrow).adjust(ARROW))
        .register(PresetDef::path("stripedRightArrow", striped_right_arrow).adjust(STRIPED_ARROW))
        .register(PresetDef::path("chevron", chevron).adjust(CHEVRON))
        .register(PresetDef::path("homePlate", home_plate).adjust(CHEVRON))
        .register(PresetDef::path("rightArrowCallout", right_arrow_callout).adjust(ARROW_CALLOUT))
        .register(PresetDef::path("leftArrowCallout", left_arrow_callout).adjust(ARROW_CALLOUT))
        .register(PresetDef::path("downArrowCallout", down_arrow_callout).adjust(ARROW_CALLOUT))
        .register(PresetDef::path("upArrowCallout", up_arrow_callout).adjust(ARROW_CALLOUT))
        .register(PresetDef::path("leftRightArrowCallout", left_right_arrow_callout).adjust(DOUBLE_ARROW_CALLOUT))
        .register(PresetDef::path("upDownArrowCallout", up_down_arrow_callout).adjust(DOUBLE_ARROW_CALLOUT))
        .register(PresetDef::path("quadArrowCallout", quad_arrow_callout).adjust(QUAD_ARROW_CALLOUT))
        .register(PresetDef::path("swooshArrow", swoosh_arrow).adjust(SWOOSH));
}

/// Single-headed arrow pointing right in the mirror's local frame.
fn single_arrow(g: &Guides, m: Mirror) -> PathData {
    let (w, h) = m.size();
    let ss = w.min(h);
    let (vc, b) = (h / 2.0, h);
    let max_adj2 = mul_div(100000.0, w, ss);
    let dy1 = mul_div(h, g.adj("adj1"), 200000.0);
    let dx1 = mul_div(ss, g.pinned("adj2", 0.0, max_adj2), 100000.0);
    let x1 = w - dx1;
    let y1 = vc - dy1;
    let y2 = vc + dy1;
    m.pen()
        .m(0.0, y1)
        .l(x1, y1)
        .l(x1, 0.0)
        .l(w, vc)
        .l(x1, b)
        .l(x1, y2)
        .l(0.0, y2)
        .z()
        .finish()
}

fn right_arrow(g: &Guides) -> PathData {
    single_arrow(g, Mirror::new(g))
}

fn left_arrow(g: &Guides) -> PathData {
    single_arrow(g, Mirror::new(g).flip_x())
}

fn down_arrow(g: &Guides) -> PathData {
    single_arrow(g, Mirror::new(g).swap())
}

fn up_arrow(g: &Guides) -> PathData {
    single_arrow(g, Mirror::new(g).swap().flip_y())
}

/// Double-headed horizontal arrow in the mirror's local frame.
fn double_arrow(g: &Guides, m: Mirror) -> PathData {
    let (w, h) = m.size();
    let ss = w.min(h);
    let vc = h / 2.0;
    let max_adj2 = mul_div(50000.0, w, ss);
    let dy1 = mul_div(h, g.adj("adj1"), 200000.0);
    let dx2 = mul_div(ss, g.pinned("adj2", 0.0, max_adj2), 100000.0);
    let x2 = w - dx2;
    let y1 = vc - dy1;
    let y2 = vc + dy1;
    m.pen()
        .m(0.0, vc)
        .l(dx2, 0.0)
        .l(dx2, y1)
        .l(x2, y1)
        .l(x2, 0.0)
        .l(w, vc)
        .l(x2, h)
        .l(x2, y2)
        .l(dx2, y2)
        .l(dx2, h)
        .z()
        .finish()
}

fn left_right_arrow(g: &Guides) -> PathData {
    double_arrow(g, Mirror::new(g))
}

fn up_down_arrow(g: &Guides) -> PathData {
    double_arrow(g, Mirror::new(g).swap())
}

fn quad_arrow(g: &Guides) -> PathData {
    let (ss, hc, vc, r, b) = (g.ss(), g.hc(), g.vc(), g.r(), g.b());
    let a2 = g.pinned("adj2", 0.0, 50000.0);
    let a1 = g.pinned("adj1", 0.0, 2.0 * a2);
    let a3 = g.pinned("adj3", 0.0, (100000.0 - 2.0 * a2) / 2.0);
    let x1 = mul_div(ss, a3, 100000.0);
    let dx2 = mul_div(ss, a2, 100000.0);
    let dx3 = mul_div(ss, a1, 200000.0);
    let (x2, x5) = (hc - dx2, hc + dx2);
    let (x3, x4) = (hc - dx3, hc + dx3);
    let x6 = r - x1;
    let (y2, y5) = (vc - dx2, vc + dx2);
    let (y3, y4) = (vc - dx3, vc + dx3);
    let y6 = b - x1;
    PathData::polygon(&[
        (0.0, vc),
        (x1, y2),
        (x1, y3),
        (x3, y3),
        (x3, x1),
        (x2, x1),
        (hc, 0.0),
        (x5, x1),
        (x4, x1),
        (x4, y3),
        (x6, y3),
        (x6, y2),
        (r, vc),
        (x6, y5),
        (x6, y4),
        (x4, y4),
        (x4, y6),
        (x5, y6),
        (hc, b),
        (x2, y6),
        (x3, y6),
        (x3, y4),
        (x1, y4),
        (x1, y5),
    ])
}

fn left_right_up_arrow(g: &Guides) -> PathData {
    let (ss, hc, r, b) = (g.ss(), g.hc(), g.r(), g.b());
    let a2 = g.pinned("adj2", 0.0, 50000.0);
    let a1 = g.pinned("adj1", 0.0, 2.0 * a2);
    let a3 = g.pinned("adj3", 0.0, (100000.0 - 2.0 * a2) / 2.0);
    let x1 = mul_div(ss, a3, 100000.0);
    let dx2 = mul_div(ss, a2, 100000.0);
    let dx3 = mul_div(ss, a1, 200000.0);
    let (x2, x5) = (hc - dx2, hc + dx2);
    let (x3, x4) = (hc - dx3, hc + dx3);
    let x6 = r - x1;
    let y2 = b - 2.0 * dx2;
    let y4 = b - dx2;
    let (y3, y5) = (y4 - dx3, y4 + dx3);
    PathData::polygon(&[
        (0.0, y4),
        (x1, y2),
        (x1, y3),
        (x3, y3),
        (x3, x1),
        (x2, x1),
        (hc, 0.0),
        (x5, x1),
        (x4, x1),
        (x4, y3),
        (x6, y3),
        (x6, y2),
        (r, y4),
        (x6, b),
        (x6, y5),
        (x1, y5),
        (x1, b),
    ])
}

fn left_up_arrow(g: &Guides) -> PathData {
    let (ss, r, b) = (g.ss(), g.r(), g.b());
    let a2 = g.pinned("adj2", 0.0, 50000.0);
    let a1 = g.pinned("adj1", 0.0, 2.0 * a2);
    let a3 = g.pinned("adj3", 0.0, 100000.0 - 2.0 * a2);
    let x1 = mul_div(ss, a3, 100000.0);
    let dx2 = mul_div(ss, a2, 50000.0);
    let (x2, y2) = (r - dx2, b - dx2);
    let dx4 = mul_div(ss, a2, 100000.0);
    let (x4, y4) = (r - dx4, b - dx4);
    let dx3 = mul_div(ss, a1, 200000.0);
    let (x3, x5) = (x4 - dx3, x4 + dx3);
    let (y3, y5) = (y4 - dx3, y4 + dx3);
    PathData::polygon(&[
        (0.0, y4),
        (x1, y2),
        (x1, y3),
        (x3, y3),
        (x3, x1),
        (x2, x1),
        (x4, 0.0),
        (r, x1),
        (x5, x1),
        (x5, y5),
        (x1, y5),
        (x1, b),
    ])
}

fn bent_up_arrow(g: &Guides) -> PathData {
    let (ss, r, b) = (g.ss(), g.r(), g.b());
    let y1 = g.ss_ratio("adj3");
    let dx1 = mul_div(ss, g.adj("adj2"), 50000.0);
    let x1 = r - dx1;
    let dx3 = mul_div(ss, g.adj("adj2"), 100000.0);
    let x3 = r - dx3;
    let dx2 = mul_div(ss, g.adj("adj1"), 200000.0);
    let (x2, x4) = (x3 - dx2, x3 + dx2);
    let y2 = b - mul_div(ss, g.adj("adj1"), 100000.0);
    PathData::polygon(&[
        (0.0, y2),
        (x2, y2),
        (x2, y1),
        (x1, y1),
        (x3, 0.0),
        (r, y1),
        (x4, y1),
        (x4, b),
        (0.0, b),
    ])
}

fn bent_arrow(g: &Guides) -> PathData {
    let (ss, r, b) = (g.ss(), g.r(), g.b());
    let a2 = g.pinned("adj2", 0.0, 50000.0);
    let a1 = g.pinned("adj1", 0.0, 2.0 * a2);
    let th = mul_div(ss, a1, 100000.0);
    let aw2 = mul_div(ss, a2, 100000.0);
    let dh2 = aw2 - th / 2.0;
    let ah = g.ss_ratio("adj3");
    let bs = (r - ah).min(b - dh2);
    let max_adj4 = mul_div(100000.0, bs, ss);
    let bd = mul_div(ss, g.pinned("adj4", 0.0, max_adj4), 100000.0);
    let bd2 = (bd - th).max(0.0);
    let x3 = th + bd2;
    let x4 = r - ah;
    let y3 = dh2 + th;
    let y4 = y3 + dh2;
    let y5 = dh2 + bd;
    PathData::new()
        .m(0.0, b)
        .l(0.0, y5)
        .arc_to(bd, bd, CD2, CD4)
        .l(x4, dh2)
        .l(x4, 0.0)
        .l(r, aw2)
        .l(x4, y4)
        .l(x4, y3)
        .l(x3, y3)
        .arc_to(bd2, bd2, THREE_CD4, -CD4)
        .l(th, b)
        .z()
}

fn uturn_arrow(g: &Guides) -> PathData {
    let (ss, w, h, r, b) = (g.ss(), g.w(), g.h(), g.r(), g.b());
    let a2 = g.pinned("adj2", 0.0, 25000.0);
    let a1 = g.pinned("adj1", 0.0, 2.0 * a2);
    let max_adj3 = mul_div(100000.0 - mul_div(a1, ss, h), h, ss);
    let a3 = g.pinned("adj3", 0.0, max_adj3);
    let min_adj5 = mul_div(a3 + a1, ss, h);
    let a5 = g.pinned("adj5", min_adj5, 100000.0);
    let th = mul_div(ss, a1, 100000.0);
    let aw2 = mul_div(ss, a2, 100000.0);
    let dh2 = aw2 - th / 2.0;
    let y5 = mul_div(h, a5, 100000.0);
    let ah = mul_div(ss, a3, 100000.0);
    let y4 = y5 - ah;
    let x9 = r - dh2;
    let bs = (x9 / 2.0).min(y4);
    let max_adj4 = mul_div(bs, 100000.0, ss);
    let bd = mul_div(ss, g.pinned("adj4", 0.0, max_adj4), 100000.0);
    let bd2 = (bd - th).max(0.0);
    let x3 = th + bd2;
    let x8 = w - aw2;
    let x6 = x8 - aw2;
    let x7 = x6 + dh2;
    let x4 = x9 - bd;
    PathData::new()
        .m(0.0, b)
        .l(0.0, bd)
        .arc_to(bd, bd, CD2, CD4)
        .l(x4, 0.0)
        .arc_to(bd, bd, THREE_CD4, CD4)
        .l(x9, y4)
        .l(r, y4)
        .l(x8, y5)
        .l(x6, y4)
        .l(x7, y4)
        .l(x7, x3)
        .arc_to(bd2, bd2, 0.0, -CD4)
        .l(x3, th)
        .arc_to(bd2, bd2, THREE_CD4, -CD4)
        .l(th, b)
        .z()
}

fn notched_right_arrow(g: &Guides) -> PathData {
    let (ss, w, h, vc, r, b) = (g.ss(), g.w(), g.h(), g.vc(), g.r(), g.b());
    let max_adj2 = mul_div(100000.0, w, ss);
    let dx2 = mul_div(ss, g.pinned("adj2", 0.0, max_adj2), 100000.0);
    let x2 = r - dx2;
    let dy1 = mul_div(h, g.adj("adj1"), 200000.0);
    let (y1, y2) = (vc - dy1, vc + dy1);
    let x1 = mul_div(dy1, dx2, g.hd2());
    PathData::polygon(&[(0.0, y1), (x2, y1), (x2, 0.0), (r, vc), (x2, b), (x2, y2), (0.0, y2), (x1, vc)])
}

fn striped_right_arrow(g: &Guides) -> PathData {
    let (ss, w, h, vc, r, b) = (g.ss(), g.w(), g.h(), g.vc(), g.r(), g.b());
    let max_adj2 = mul_div(84375.0, w, ss);
    let x4 = mul_div(ss, 5.0, 32.0);
    let dx5 = mul_div(ss, g.pinned("adj2", 0.0, max_adj2), 100000.0);
    let x5 = r - dx5;
    let dy1 = mul_div(h, g.adj("adj1"), 200000.0);
    let (y1, y2) = (vc - dy1, vc + dy1);
    PathData::new()
        .poly(&[(0.0, y1), (g.ssd32(), y1), (g.ssd32(), y2), (0.0, y2)])
        .poly(&[(g.ssd16(), y1), (g.ssd8(), y1), (g.ssd8(), y2), (g.ssd16(), y2)])
        .poly(&[(x4, y1), (x5, y1), (x5, 0.0), (r, vc), (x5, b), (x5, y2), (x4, y2)])
}

fn chevron(g: &Guides) -> PathData {
    let max_adj = mul_div(100000.0, g.w(), g.ss());
    let x1 = mul_div(g.ss(), g.pinned("adj", 0.0, max_adj), 100000.0);
    let x2 = g.r() - x1;
    PathData::polygon(&[(0.0, 0.0), (x2, 0.0), (g.r(), g.vc()), (x2, g.b()), (0.0, g.b()), (x1, g.vc())])
}

fn home_plate(g: &Guides) -> PathData {
    let max_adj = mul_div(100000.0, g.w(), g.ss());
    let dx1 = mul_div(g.ss(), g.pinned("adj", 0.0, max_adj), 100000.0);
    let x1 = g.r() - dx1;
    PathData::polygon(&[(0.0, 0.0), (x1, 0.0), (g.r(), g.vc()), (x1, g.b()), (0.0, g.b())])
}

/// Guides shared by the single-headed arrow callouts, for a callout whose
/// arrow points right in the mirror's local frame.
struct CalloutArrow {
    y1: f64,
    y2: f64,
    y3: f64,
    y4: f64,
    /// Base of the arrow head
    x3: f64,
    /// Edge of the box
    x2: f64,
}

impl CalloutArrow {
    fn new(g: &Guides, w: f64, h: f64) -> Self {
        let ss = w.min(h);
        let vc = h / 2.0;
        let max_adj2 = mul_div(50000.0, h, ss);
        let a2 = g.pinned("adj2", 0.0, max_adj2);
        let a1 = g.pinned("adj1", 0.0, a2 * 2.0);
        let max_adj3 = mul_div(100000.0, w, ss);
        let a3 = g.pinned("adj3", 0.0, max_adj3);
        let q2 = mul_div(a3, ss, w);
        let a4 = g.pinned("adj4", 0.0, 100000.0 - q2);
        let dy1 = mul_div(ss, a2, 100000.0);
        let dy2 = mul_div(ss, a1, 200000.0);
        Self {
            y1: vc - dy1,
            y2: vc - dy2,
            y3: vc + dy2,
            y4: vc + dy1,
            x3: w - mul_div(ss, a3, 100000.0),
            x2: mul_div(w, a4, 100000.0),
        }
    }
}

fn arrow_callout(g: &Guides, m: Mirror) -> PathData {
    let (w, h) = m.size();
    let a = CalloutArrow::new(g, w, h);
    m.pen()
        .m(0.0, 0.0)
        .l(a.x2, 0.0)
        .l(a.x2, a.y2)
        .l(a.x3, a.y2)
        .l(a.x3, a.y1)
        .l(w, h / 2.0)
        .l(a.x3, a.y4)
        .l(a.x3, a.y3)
        .l(a.x2, a.y3)
        .l(a.x2, h)
        .l(0.0, h)
        .z()
        .finish()
}

fn right_arrow_callout(g: &Guides) -> PathData {
    arrow_callout(g, Mirror::new(g))
}

fn left_arrow_callout(g: &Guides) -> PathData {
    arrow_callout(g, Mirror::new(g).flip_x())
}

fn down_arrow_callout(g: &Guides) -> PathData {
    arrow_callout(g, Mirror::new(g).swap())
}

fn up_arrow_callout(g: &Guides) -> PathData {
    arrow_callout(g, Mirror::new(g).swap().flip_y())
}

fn double_arrow_callout(g: &Guides, m: Mirror) -> PathData {
    let (w, h) = m.size();
    let ss = w.min(h);
    let vc = h / 2.0;
    let max_adj2 = mul_div(50000.0, h, ss);
    let a2 = g.pinned("adj2", 0.0, max_adj2);
    let a1 = g.pinned("adj1", 0.0, a2 * 2.0);
    let max_adj3 = mul_div(50000.0, w, ss);
    let a3 = g.pinned("adj3", 0.0, max_adj3);
    let q2 = mul_div(a3, ss, w / 2.0);
    let a4 = g.pinned("adj4", 0.0, 100000.0 - q2);
    let dy1 = mul_div(ss, a2, 100000.0);
    let dy2 = mul_div(ss, a1, 200000.0);
    let (y1, y2, y3, y4) = (vc - dy1, vc - dy2, vc + dy2, vc + dy1);
    let x1 = mul_div(ss, a3, 100000.0);
    let x4 = w - x1;
    let dx2 = mul_div(w, a4, 200000.0);
    let (x2, x3) = (w / 2.0 - dx2, w / 2.0 + dx2);
    m.pen()
        .m(0.0, vc)
        .l(x1, y1)
        .l(x1, y2)
        .l(x2, y2)
        .l(x2, 0.0)
        .l(x3, 0.0)
        .l(x3, y2)
        .l(x4, y2)
        .l(x4, y1)
        .l(w, vc)
        .l(x4, y4)
        .l(x4, y3)
        .l(x3, y3)
        .l(x3, h)
        .l(x2, h)
        .l(x2, y3)
        .l(x1, y3)
        .l(x1, y4)
        .z()
        .finish()
}

fn left_right_arrow_callout(g: &Guides) -> PathData {
    double_arrow_callout(g, Mirror::new(g))
}

fn up_down_arrow_callout(g: &Guides) -> PathData {
    double_arrow_callout(g, Mirror::new(g).swap())
}

fn quad_arrow_callout(g: &Guides) -> PathData {
    let (ss, w, h, hc, vc, r, b) = (g.ss(), g.w(), g.h(), g.hc(), g.vc(), g.r(), g.b());
    let a2 = g.pinned("adj2", 0.0, 50000.0);
    let a1 = g.pinned("adj1", 0.0, a2 * 2.0);
    let a3 = g.pinned("adj3", 0.0, 50000.0 - a2);
    let a4 = g.pinned("adj4", a1, 100000.0 - 2.0 * a3);
    let dx2 = mul_div(ss, a2, 100000.0);
    let dx3 = mul_div(ss, a1, 200000.0);
    let ah = mul_div(ss, a3, 100000.0);
    let dx1 = mul_div(w, a4, 200000.0);
    let dy1 = mul_div(h, a4, 200000.0);
    let x8 = r - ah;
    let (x2, x7) = (hc - dx1, hc + dx1);
    let (x3, x6) = (hc - dx2, hc + dx2);
    let (x4, x5) = (hc - dx3, hc + dx3);
    let y8 = b - ah;
    let (y2, y7) = (vc - dy1, vc + dy1);
    let (y3, y6) = (vc - dx2, vc + dx2);
    let (y4, y5) = (vc - dx3, vc + dx3);
    PathData::polygon(&[
        (0.0, vc),
        (ah, y3),
        (ah, y4),
        (x2, y4),
        (x2, y2),
        (x4, y2),
        (x4, ah),
        (x3, ah),
        (hc, 0.0),
        (x6, ah),
        (x5, ah),
        (x5, y2),
        (x7, y2),
        (x7, y4),
        (x8, y4),
        (x8, y3),
        (r, vc),
        (x8, y6),
        (x8, y5),
        (x7, y5),
        (x7, y7),
        (x5, y7),
        (x5, y8),
        (x6, y8),
        (hc, b),
        (x3, y8),
        (x4, y8),
        (x4, y7),
        (x2, y7),
        (x2, y5),
        (ah, y5),
        (ah, y6),
    ])
}

fn swoosh_arrow(g: &Guides) -> PathData {
    let (w, h, r, b) = (g.w(), g.h(), g.r(), g.b());
    let th = mul_div(h, g.adj("adj1"), 200000.0);
    let head = mul_div(g.ss(), g.adj("adj2"), 100000.0);
    let xa = r - pin(0.0, head, w);
    let yc = g.hd4();
    let hh = th + g.hd8();
    PathData::new()
        .m(0.0, b)
        .q(w * 0.35, h * 0.3, xa, yc - th / 2.0)
        .l(xa, (yc - hh).max(0.0))
        .l(r, yc)
        .l(xa, yc + hh)
        .l(xa, yc + th / 2.0)
        .q(w * 0.4, h * 0.3 + th * 2.0, g.wd32(), b)
        .z()
}

#[cfg(test)]
mod tests {
    use crate::{AdjustmentSet, get_path};

    #[test]
    fn right_arrow_default() {
        assert_eq!(
            get_path("rightArrow", 200.0, 100.0, &AdjustmentSet::new()),
            "M0,25 L150,25 L150,0 L200,50 L150,100 L150,75 L0,75 Z"
        );
    }

    #[test]
    fn left_arrow_is_mirrored() {
        assert_eq!(
            get_path("leftArrow", 200.0, 100.0, &AdjustmentSet::new()),
            "M200,25 L50,25 L50,0 L0,50 L50,100 L50,75 L200,75 Z"
        );
    }

    #[test]
    fn down_arrow_points_down() {
        assert_eq!(
            get_path("downArrow", 100.0, 200.0, &AdjustmentSet::new()),
            "M25,0 L25,150 L0,150 L50,200 L100,150 L75,150 L75,0 Z"
        );
    }

    #[test]
    fn chevron_notch() {
        assert_eq!(
            get_path("chevron", 200.0, 100.0, &AdjustmentSet::new()),
            "M0,0 L150,0 L200,50 L150,100 L0,100 L50,50 Z"
        );
    }
}
