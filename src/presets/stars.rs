//! Stars, explosion seals and gears.

use glam::dvec2;

use super::{Catalog, PresetDef, grid_polygon};
use crate::adjust::AdjustSpec;
use crate::geometry::{self, Guides, mul_div, pin};
use crate::path::PathData;

/// Star outline: number of points plus the horizontal and vertical stretch
/// (1/100000) applied to the outer radii.
struct StarSpec {
    points: usize,
    hf: f64,
    vf: f64,
}

const STARS: [StarSpec; 10] = [
    StarSpec { points: 4, hf: 100000.0, vf: 100000.0 },
    StarSpec { points: 5, hf: 105146.0, vf: 110557.0 },
    StarSpec { points: 6, hf: 115470.0, vf: 100000.0 },
    StarSpec { points: 7, hf: 102572.0, vf: 105210.0 },
    StarSpec { points: 8, hf: 100000.0, vf: 100000.0 },
    StarSpec { points: 10, hf: 105146.0, vf: 100000.0 },
    StarSpec { points: 12, hf: 100000.0, vf: 100000.0 },
    StarSpec { points: 16, hf: 100000.0, vf: 100000.0 },
    StarSpec { points: 24, hf: 100000.0, vf: 100000.0 },
    StarSpec { points: 32, hf: 100000.0, vf: 100000.0 },
];

const STAR4: &[AdjustSpec] = &[AdjustSpec::new("adj", 12500.0).clamp(0.0, 50000.0)];
const STAR5: &[AdjustSpec] = &[AdjustSpec::new("adj", 19098.0).clamp(0.0, 50000.0)];
const STAR6: &[AdjustSpec] = &[AdjustSpec::new("adj", 28868.0).clamp(0.0, 50000.0)];
const STAR7: &[AdjustSpec] = &[AdjustSpec::new("adj", 34601.0).clamp(0.0, 50000.0)];
const STAR8: &[AdjustSpec] = &[AdjustSpec::new("adj", 38250.0).clamp(0.0, 50000.0)];
const STAR10: &[AdjustSpec] = &[AdjustSpec::new("adj", 42533.0).clamp(0.0, 50000.0)];
const STAR_MANY: &[AdjustSpec] = &[AdjustSpec::new("adj", 37500.0).clamp(0.0, 50000.0)];

const GEAR6: &[AdjustSpec] = &[
    AdjustSpec::new("adj1", 15000.0).clamp(0.0, 20000.0),
    AdjustSpec::new("adj2", 3526.0).clamp(0.0, 5358.0),
];
const GEAR9: &[AdjustSpec] = &[
    AdjustSpec::new("adj1", 10000.0).clamp(0.0, 20000.0),
    AdjustSpec::new("adj2", 1763.0).clamp(0.0, 2679.0),
];

/// Outline points of the explosion seals on a 21600 design square.
const SEAL1: [(f64, f64); 24] = [
    (10800.0, 5800.0),
    (14522.0, 0.0),
    (14155.0, 5325.0),
    (18380.0, 4457.0),
    (16702.0, 7315.0),
    (21097.0, 8137.0),
    (17607.0, 10475.0),
    (21600.0, 13290.0),
    (16837.0, 12942.0),
    (18145.0, 18095.0),
    (14020.0, 14457.0),
    (13247.0, 19737.0),
    (10532.0, 14935.0),
    (8485.0, 21600.0),
    (7715.0, 15627.0),
    (4762.0, 17617.0),
    (5667.0, 13937.0),
    (135.0, 14587.0),
    (3722.0, 11775.0),
    (0.0, 8615.0),
    (4627.0, 7617.0),
    (370.0, 2295.0),
    (7312.0, 6320.0),
    (8352.0, 2295.0),
];
const SEAL2: [(f64, f64); 28] = [
    (11462.0, 4342.0),
    (14790.0, 0.0),
    (14525.0, 5777.0),
    (18007.0, 3172.0),
    (16380.0, 6532.0),
    (21600.0, 6645.0),
    (16985.0, 9402.0),
    (18270.0, 11290.0),
    (16380.0, 12310.0),
    (18877.0, 15632.0),
    (14640.0, 14350.0),
    (14942.0, 17370.0),
    (12180.0, 15935.0),
    (11612.0, 18842.0),
    (9872.0, 17370.0),
    (8700.0, 19712.0),
    (7527.0, 18125.0),
    (4917.0, 21600.0),
    (4805.0, 18240.0),
    (1285.0, 17825.0),
    (3330.0, 15370.0),
    (0.0, 12877.0),
    (3935.0, 11592.0),
    (1172.0, 8270.0),
    (5372.0, 7817.0),
    (4502.0, 3625.0),
    (8550.0, 6382.0),
    (9722.0, 1887.0),
];

pub(super) fn register(c: &mut Catalog) {
    c.register(PresetDef::path("star4", |g| star(g, &STARS[0])).adjust(STAR4))
        .register(PresetDef::path("star5", |g| star(g, &STARS[1])).adjust(STAR5))
        .register(PresetDef::path("star6", |g| star(g, &STARS[2])).adjust(STAR6))
        .register(PresetDef::path("star7", |g| star(g, &STARS[3])).adjust(STAR7))
        .register(PresetDef::path("star8", |g| star(g, &STARS[4])).adjust(STAR8))
        .register(PresetDef::path("star10", |g| star(g, &STARS[5])).adjust(STAR10))
        .register(PresetDef::path("star12", |g| star(g, &STARS[6])).adjust(STAR_MANY))
        .register(PresetDef::path("star16", |g| star(g, &STARS[7])).adjust(STAR_MANY))
        .register(PresetDef::path("star24", |g| star(g, &STARS[8])).adjust(STAR_MANY))
        .register(PresetDef::path("star32", |g| star(g, &STARS[9])).adjust(STAR_MANY))
        .register(PresetDef::path("irregularSeal1", |g| grid_polygon(g, 21600.0, &SEAL1)))
        .register(PresetDef::path("irregularSeal2", |g| grid_polygon(g, 21600.0, &SEAL2)))
        .register(PresetDef::path("gear6", |g| gear(g, 6)).adjust(GEAR6))
        .register(PresetDef::path("gear9", |g| gear(g, 9)).adjust(GEAR9));
}

/// Star with its first point straight up; inner vertices sit halfway
/// between the points at `adj / 50000` of the outer radii.
fn star(g: &Guides, spec: &StarSpec) -> PathData {
    let rx = mul_div(g.wd2(), spec.hf, 100000.0);
    let ry = mul_div(g.hd2(), spec.vf, 100000.0);
    let cy = mul_div(g.vc(), spec.vf, 100000.0);
    let inner = g.adj("adj") / 50000.0;
    let n = spec.points;
    let step = 180.0 / n as f64;

    let points: Vec<(f64, f64)> = (0..2 * n)
        .map(|k| {
            let t = (-90.0 + step * k as f64).to_radians();
            let scale = if k % 2 == 0 { 1.0 } else { inner };
            (g.hc() + rx * scale * t.cos(), cy + ry * scale * t.sin())
        })
        .collect();
    PathData::polygon(&points)
}

/// Gear with `teeth` trapezoidal teeth around a root ellipse.
///
/// Each tooth is three straight segments (flank, tip, flank) and the gap to
/// the next tooth is one arc along the root, so a gear with N teeth has
/// exactly 3N line segments and N arcs.
fn gear(g: &Guides, teeth: usize) -> PathData {
    let c = g.center();
    let depth = g.ss_ratio("adj1");
    let tooth = g.ss_ratio("adj2");
    let outer = dvec2(g.wd2(), g.hd2());
    let root = (outer - dvec2(depth, depth)).max(dvec2(0.0, 0.0));

    let pitch = 360.0 / teeth as f64;
    let mean = ((outer.x + outer.y) / 2.0).max(f64::MIN_POSITIVE);
    // half angles of the tooth at its tip and at its root
    let tip = pin(0.0, (tooth / mean).to_degrees(), pitch * 0.3);
    let base = pin(tip, tip * 1.6 + pitch * 0.05, pitch * 0.45);
    let gap = pitch - 2.0 * base;

    let at = |radii: glam::DVec2, deg: f64| {
        let p = geometry::ellipse_point(c, radii.x, radii.y, deg);
        (p.x, p.y)
    };

    let first = -90.0 - base;
    let (x0, y0) = at(root, first);
    let mut path = PathData::new().m(x0, y0);
    for k in 0..teeth {
        let mid = -90.0 + pitch * k as f64;
        let (x1, y1) = at(outer, mid - tip);
        let (x2, y2) = at(outer, mid + tip);
        let (x3, y3) = at(root, mid + base);
        path = path
            .l(x1, y1)
            .l(x2, y2)
            .l(x3, y3)
            .arc(c.x, c.y, root.x, root.y, mid + base, gap);
    }
    path.z()
}
