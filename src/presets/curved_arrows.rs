//! Curved and circular arrows.

use glam::DVec2;

use super::mirror::Mirror;
use super::{Catalog, PresetDef, clockwise_sweep};
use crate::adjust::AdjustSpec;
use crate::geometry::{self, Guides, mul_div, pin};
use crate::path::PathData;

const CURVED_ARROW: &[AdjustSpec] = &[
    AdjustSpec::new("adj1", 25000.0),
    AdjustSpec::new("adj2", 50000.0),
    AdjustSpec::new("adj3", 25000.0),
];
const CIRCULAR_ARROW: &[AdjustSpec] = &[
    AdjustSpec::new("adj1", 12500.0).clamp(0.0, 25000.0),
    AdjustSpec::new("adj2", 1142319.0),
    AdjustSpec::new("adj3", 20457681.0),
    AdjustSpec::new("adj4", 10800000.0),
    AdjustSpec::new("adj5", 12500.0).clamp(0.0, 25000.0),
];
const LEFT_CIRCULAR_ARROW: &[AdjustSpec] = &[
    AdjustSpec::new("adj1", 12500.0).clamp(0.0, 25000.0),
    AdjustSpec::new("adj2", -1142319.0),
    AdjustSpec::new("adj3", 1142319.0),
    AdjustSpec::new("adj4", 10800000.0),
    AdjustSpec::new("adj5", 12500.0).clamp(0.0, 25000.0),
];
const LEFT_RIGHT_CIRCULAR_ARROW: &[AdjustSpec] = &[
    AdjustSpec::new("adj1", 12500.0).clamp(0.0, 25000.0),
    AdjustSpec::new("adj2", 1142319.0),
    AdjustSpec::new("adj3", 20457681.0),
    AdjustSpec::new("adj4", 11942319.0),
    AdjustSpec::new("adj5", 12500.0).clamp(0.0, 25000.0),
];

pub(super) fn register(c: &mut Catalog) {
    c.register(PresetDef::path("curvedRightArrow", curved_right_arrow).adjust(CURVED_ARROW))
        .register(PresetDef::path("curvedLeftArrow", curved_left_arrow).adjust(CURVED_ARROW))
        .register(PresetDef::path("curvedDownArrow", curved_down_arrow).adjust(CURVED_ARROW))
        .register(PresetDef::path("curvedUpArrow", curved_up_arrow).adjust(CURVED_ARROW))
        .register(PresetDef::path("circularArrow", circular_arrow).adjust(CIRCULAR_ARROW))
        .register(PresetDef::path("leftCircularArrow", left_circular_arrow).adjust(LEFT_CIRCULAR_ARROW))
        .register(
            PresetDef::path("leftRightCircularArrow", left_right_circular_arrow).adjust(LEFT_RIGHT_CIRCULAR_ARROW),
        );
}

/// A band bending around the left of the local frame, from the top edge to
/// an arrow head at the bottom pointing right.
fn curved_arrow(g: &Guides, m: Mirror) -> PathData {
    let (w, h) = m.size();
    let ss = w.min(h);
    let ah = mul_div(ss, g.pinned("adj3", 0.0, mul_div(100000.0, w, ss)), 100000.0);
    let aw = mul_div(ss, g.pinned("adj2", 0.0, mul_div(100000.0, h, ss)), 100000.0);
    let th = mul_div(ss, g.pinned("adj1", 0.0, g.adj("adj2")), 100000.0).min(aw);

    let wb = w - ah;
    let yh = h - aw / 2.0;
    let ry_out = (yh + th / 2.0) / 2.0;
    let th = pin(0.0, th, wb.min(ry_out));
    let (rx_in, ry_in) = (wb - th, ry_out - th);

    m.pen()
        .m(wb, 0.0)
        .arc(wb, ry_out, wb, ry_out, 270.0, -180.0)
        .l(wb, yh + aw / 2.0)
        .l(w, yh)
        .l(wb, yh - aw / 2.0)
        .l(wb, yh - th / 2.0)
        .arc(wb, ry_out, rx_in, ry_in, 90.0, 180.0)
        .z()
        .finish()
}

fn curved_right_arrow(g: &Guides) -> PathData {
    curved_arrow(g, Mirror::new(g))
}

fn curved_left_arrow(g: &Guides) -> PathData {
    curved_arrow(g, Mirror::new(g).flip_x())
}

fn curved_down_arrow(g: &Guides) -> PathData {
    curved_arrow(g, Mirror::new(g).swap())
}

fn curved_up_arrow(g: &Guides) -> PathData {
    curved_arrow(g, Mirror::new(g).swap().flip_y())
}

/// Ring geometry shared by the circular arrows.
struct Ring {
    center: DVec2,
    outer: DVec2,
    inner: DVec2,
    /// Radii reached by the arrow head's barbs
    barb_out: DVec2,
    barb_in: DVec2,
    mid: DVec2,
    head: f64,
}

impl Ring {
    fn new(g: &Guides) -> Self {
        let th = g.ss_ratio("adj1");
        let flare = g.ss_ratio("adj5");
        let half = DVec2::new(g.wd2(), g.hd2());
        let outer = (half - DVec2::splat(flare)).max(DVec2::ZERO);
        let inner = (outer - DVec2::splat(th)).max(DVec2::ZERO);
        Self {
            center: g.center(),
            outer,
            inner,
            barb_out: half,
            barb_in: (inner - DVec2::splat(flare)).max(DVec2::ZERO),
            mid: (outer + inner) / 2.0,
            head: g.adj("adj2").abs() / 60000.0,
        }
    }

    fn at(&self, radii: DVec2, deg: f64) -> (f64, f64) {
        let p = geometry::ellipse_point(self.center, radii.x, radii.y, deg);
        (p.x, p.y)
    }

    /// Append an arrow head at angle `at`, pointing in the direction of `dir`
    /// (±1), going from the outer edge to the inner edge.
    fn head(&self, path: PathData, at: f64, dir: f64) -> PathData {
        let (ox, oy) = self.at(self.barb_out, at);
        let (tx, ty) = self.at(self.mid, at + dir * self.head);
        let (ix, iy) = self.at(self.barb_in, at);
        let (ex, ey) = self.at(self.inner, at);
        path.l(ox, oy).l(tx, ty).l(ix, iy).l(ex, ey)
    }
}

fn circular_arrow(g: &Guides) -> PathData {
    let ring = Ring::new(g);
    let st = g.angle("adj4");
    let en = g.angle("adj3");
    let sw = pin(0.0, clockwise_sweep(st, en), 360.0 - ring.head);
    let c = ring.center;
    let path = PathData::new().arc(c.x, c.y, ring.outer.x, ring.outer.y, st, sw);
    ring.head(path, st + sw, 1.0)
        .arc(c.x, c.y, ring.inner.x, ring.inner.y, st + sw, -sw)
        .z()
}

fn left_circular_arrow(g: &Guides) -> PathData {
    let ring = Ring::new(g);
    let st = g.angle("adj4");
    let en = g.angle("adj3");
    let sw = -pin(0.0, clockwise_sweep(en, st), 360.0 - ring.head);
    let c = ring.center;
    let path = PathData::new().arc(c.x, c.y, ring.outer.x, ring.outer.y, st, sw);
    ring.head(path, st + sw, -1.0)
        .arc(c.x, c.y, ring.inner.x, ring.inner.y, st + sw, -sw)
        .z()
}

fn left_right_circular_arrow(g: &Guides) -> PathData {
    let ring = Ring::new(g);
    let st = g.angle("adj4");
    let en = g.angle("adj3");
    let sw = pin(0.0, clockwise_sweep(st, en), 360.0 - 2.0 * ring.head);
    let c = ring.center;
    let (ix, iy) = ring.at(ring.inner, st);
    let (bx, by) = ring.at(ring.barb_in, st);
    let (tx, ty) = ring.at(ring.mid, st - ring.head);
    let (ox, oy) = ring.at(ring.barb_out, st);
    let path = PathData::new()
        .m(ix, iy)
        .l(bx, by)
        .l(tx, ty)
        .l(ox, oy)
        .arc(c.x, c.y, ring.outer.x, ring.outer.y, st, sw);
    ring.head(path, st + sw, 1.0)
        .arc(c.x, c.y, ring.inner.x, ring.inner.y, st + sw, -sw)
        .z()
}

#[cfg(test)]
mod tests {
    use crate::{AdjustmentSet, get_path};

    #[test]
    fn curved_arrows_are_closed_single_outlines() {
        for name in ["curvedRightArrow", "curvedLeftArrow", "curvedUpArrow", "curvedDownArrow"] {
            let d = get_path(name, 120.0, 240.0, &AdjustmentSet::new());
            assert!(d.starts_with('M') && d.ends_with('Z'), "{name}: {d}");
            assert_eq!(d.matches('M').count(), 1, "{name}: {d}");
            assert_eq!(d.matches('A').count(), 2, "{name}: {d}");
        }
    }

    #[test]
    fn circular_arrow_head_has_three_barb_lines() {
        let d = get_path("circularArrow", 200.0, 200.0, &AdjustmentSet::new());
        assert!(d.starts_with("M25,100 A75,75 0 0,1"), "{d}");
        assert!(d.ends_with('Z'));
    }
}
