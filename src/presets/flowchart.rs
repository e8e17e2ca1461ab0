//! Flowchart symbols. None take adjustments; proportions are fixed fractions
//! of the frame.

use super::{Catalog, PresetDef, curved, fallback_rect};
use crate::geometry::{self, CD2, CD4, Guides, THREE_CD4};
use crate::path::PathData;
use crate::shape::{FillModifier, ShapeGeometry};

pub(super) fn register(c: &mut Catalog) {
    c.register(PresetDef::path("flowChartProcess", process))
        .register(PresetDef::path("flowChartAlternateProcess", alternate_process))
        .register(PresetDef::path("flowChartDecision", decision))
        .register(PresetDef::path("flowChartInputOutput", input_output))
        .register(PresetDef::composite("flowChartPredefinedProcess", predefined_process).outline(predefined_process_outline))
        .register(PresetDef::composite("flowChartInternalStorage", internal_storage).outline(internal_storage_outline))
        .register(PresetDef::path("flowChartDocument", document))
        .register(PresetDef::path("flowChartMultidocument", multidocument))
        .register(PresetDef::path("flowChartTerminator", terminator))
        .register(PresetDef::path("flowChartPreparation", preparation))
        .register(PresetDef::path("flowChartManualInput", manual_input))
        .register(PresetDef::path("flowChartManualOperation", manual_operation))
        .register(PresetDef::path("flowChartConnector", curved::ellipse))
        .register(PresetDef::path("flowChartOffpageConnector", offpage_connector))
        .register(PresetDef::path("flowChartPunchedCard", punched_card))
        .register(PresetDef::path("flowChartPunchedTape", punched_tape))
        .register(PresetDef::path("flowChartSummingJunction", summing_junction))
        .register(PresetDef::path("flowChartOr", or))
        .register(PresetDef::path("flowChartCollate", collate))
        .register(PresetDef::path("flowChartSort", sort))
        .register(PresetDef::path("flowChartExtract", extract))
        .register(PresetDef::path("flowChartMerge", merge))
        .register(PresetDef::path("flowChartOfflineStorage", offline_storage))
        .register(PresetDef::path("flowChartOnlineStorage", online_storage))
        .register(PresetDef::path("flowChartDelay", delay))
        .register(PresetDef::path("flowChartMagneticTape", magnetic_tape))
        .register(PresetDef::composite("flowChartMagneticDisk", magnetic_disk).outline(magnetic_disk_outline))
        .register(PresetDef::composite("flowChartMagneticDrum", magnetic_drum).outline(magnetic_drum_outline))
        .register(PresetDef::path("flowChartDisplay", display));
}

/// Scale from a `grid`×`grid` design square to the frame.
fn grid(g: &Guides, grid: f64) -> impl Fn(f64, f64) -> (f64, f64) {
    let (sx, sy) = (g.w() / grid, g.h() / grid);
    move |x, y| (x * sx, y * sy)
}

fn process(g: &Guides) -> PathData {
    fallback_rect(g.w(), g.h())
}

fn alternate_process(g: &Guides) -> PathData {
    super::basic::rounded_rect(0.0, 0.0, g.r(), g.b(), g.ssd6())
}

fn decision(g: &Guides) -> PathData {
    PathData::polygon(&[(0.0, g.vc()), (g.hc(), 0.0), (g.r(), g.vc()), (g.hc(), g.b())])
}

fn input_output(g: &Guides) -> PathData {
    let x2 = g.w() / 5.0;
    let x3 = g.w() * 4.0 / 5.0;
    PathData::polygon(&[(0.0, g.b()), (x2, 0.0), (g.r(), 0.0), (x3, g.b())])
}

fn predefined_process_lines(g: &Guides) -> PathData {
    let x1 = g.w() / 8.0;
    let x2 = g.r() - x1;
    PathData::new()
        .polyline(&[(x1, 0.0), (x1, g.b())])
        .polyline(&[(x2, 0.0), (x2, g.b())])
}

fn predefined_process_outline(g: &Guides) -> PathData {
    fallback_rect(g.w(), g.h()).append(predefined_process_lines(g))
}

fn predefined_process(g: &Guides) -> ShapeGeometry {
    ShapeGeometry::new(fallback_rect(g.w(), g.h()), FillModifier::Norm, false)
        .layer(predefined_process_lines(g), FillModifier::None, true)
        .layer(fallback_rect(g.w(), g.h()), FillModifier::None, true)
}

fn internal_storage_lines(g: &Guides) -> PathData {
    let x1 = g.w() / 8.0;
    let y1 = g.h() / 8.0;
    PathData::new()
        .polyline(&[(x1, 0.0), (x1, g.b())])
        .polyline(&[(0.0, y1), (g.r(), y1)])
}

fn internal_storage_outline(g: &Guides) -> PathData {
    fallback_rect(g.w(), g.h()).append(internal_storage_lines(g))
}

fn internal_storage(g: &Guides) -> ShapeGeometry {
    ShapeGeometry::new(fallback_rect(g.w(), g.h()), FillModifier::Norm, false)
        .layer(internal_storage_lines(g), FillModifier::None, true)
        .layer(fallback_rect(g.w(), g.h()), FillModifier::None, true)
}

fn document(g: &Guides) -> PathData {
    let p = grid(g, 21600.0);
    let (x, y) = p(21600.0, 17322.0);
    let (c1x, c1y) = p(10800.0, 17322.0);
    let (c2x, c2y) = p(10800.0, 23922.0);
    let (ex, ey) = p(0.0, 20172.0);
    PathData::new()
        .m(0.0, 0.0)
        .l(g.r(), 0.0)
        .l(x, y)
        .c(c1x, c1y, c2x, c2y, ex, ey)
        .z()
}

fn multidocument(g: &Guides) -> PathData {
    let pt = grid(g, 21600.0);

    let (ax, ay) = pt(0.0, 3675.0);
    let (bx, by) = pt(18595.0, 3675.0);
    let (cx, cy) = pt(18595.0, 18022.0);
    let (c1x, c1y) = pt(9298.0, 18022.0);
    let (c2x, c2y) = pt(9298.0, 23542.0);
    let (dx, dy) = pt(0.0, 20782.0);
    let front = PathData::new()
        .m(ax, ay)
        .l(bx, by)
        .l(cx, cy)
        .c(c1x, c1y, c2x, c2y, dx, dy)
        .z();

    let middle = [
        pt(1532.0, 3675.0),
        pt(1532.0, 1815.0),
        pt(20000.0, 1815.0),
        pt(20000.0, 16252.0),
        pt(18595.0, 16352.0),
    ];
    let back = [
        pt(2972.0, 1815.0),
        pt(2972.0, 0.0),
        pt(21600.0, 0.0),
        pt(21600.0, 14392.0),
        pt(20000.0, 14467.0),
    ];
    front.polyline(&middle).polyline(&back)
}

fn terminator(g: &Guides) -> PathData {
    let p = grid(g, 21600.0);
    let (x1, _) = p(3475.0, 0.0);
    let (x2, _) = p(18125.0, 0.0);
    let (rx, ry) = p(3475.0, 10800.0);
    PathData::new()
        .m(x1, 0.0)
        .l(x2, 0.0)
        .arc_to(rx, ry, THREE_CD4, CD2)
        .l(x1, g.b())
        .arc_to(rx, ry, CD4, CD2)
        .z()
}

fn preparation(g: &Guides) -> PathData {
    let x2 = g.w() / 5.0;
    let x3 = g.w() * 4.0 / 5.0;
    PathData::polygon(&[(0.0, g.vc()), (x2, 0.0), (x3, 0.0), (g.r(), g.vc()), (x3, g.b()), (x2, g.b())])
}

fn manual_input(g: &Guides) -> PathData {
    PathData::polygon(&[(0.0, g.h() / 5.0), (g.r(), 0.0), (g.r(), g.b()), (0.0, g.b())])
}

fn manual_operation(g: &Guides) -> PathData {
    let x2 = g.w() / 5.0;
    let x3 = g.w() * 4.0 / 5.0;
    PathData::polygon(&[(0.0, 0.0), (g.r(), 0.0), (x3, g.b()), (x2, g.b())])
}

fn offpage_connector(g: &Guides) -> PathData {
    let y1 = g.h() * 4.0 / 5.0;
    PathData::polygon(&[(0.0, 0.0), (g.r(), 0.0), (g.r(), y1), (g.hc(), g.b()), (0.0, y1)])
}

fn punched_card(g: &Guides) -> PathData {
    PathData::polygon(&[(0.0, g.h() / 5.0), (g.w() / 5.0, 0.0), (g.r(), 0.0), (g.r(), g.b()), (0.0, g.b())])
}

fn punched_tape(g: &Guides) -> PathData {
    let p = grid(g, 20.0);
    let (rx, ry) = p(5.0, 2.0);
    let (_, y1) = p(0.0, 2.0);
    let (_, y2) = p(0.0, 18.0);
    PathData::new()
        .m(0.0, y1)
        .arc_to(rx, ry, CD2, -CD2)
        .arc_to(rx, ry, CD2, CD2)
        .l(g.r(), y2)
        .arc_to(rx, ry, 0.0, -CD2)
        .arc_to(rx, ry, 0.0, CD2)
        .z()
}

fn summing_junction(g: &Guides) -> PathData {
    let c = g.center();
    let at = |deg: f64| {
        let p = geometry::ellipse_point(c, g.wd2(), g.hd2(), deg);
        (p.x, p.y)
    };
    curved::ellipse(g)
        .polyline(&[at(225.0), at(45.0)])
        .polyline(&[at(315.0), at(135.0)])
}

fn or(g: &Guides) -> PathData {
    curved::ellipse(g)
        .polyline(&[(g.hc(), 0.0), (g.hc(), g.b())])
        .polyline(&[(0.0, g.vc()), (g.r(), g.vc())])
}

fn collate(g: &Guides) -> PathData {
    PathData::polygon(&[(0.0, 0.0), (g.r(), 0.0), (g.hc(), g.vc()), (g.r(), g.b()), (0.0, g.b()), (g.hc(), g.vc())])
}

fn sort(g: &Guides) -> PathData {
    decision(g).polyline(&[(0.0, g.vc()), (g.r(), g.vc())])
}

fn extract(g: &Guides) -> PathData {
    PathData::polygon(&[(0.0, g.b()), (g.hc(), 0.0), (g.r(), g.b())])
}

fn merge(g: &Guides) -> PathData {
    PathData::polygon(&[(0.0, 0.0), (g.r(), 0.0), (g.hc(), g.b())])
}

fn offline_storage(g: &Guides) -> PathData {
    let y2 = g.h() * 4.0 / 5.0;
    let x1 = g.w() * 2.0 / 5.0;
    let x2 = g.w() * 3.0 / 5.0;
    merge(g).polyline(&[(x1, y2), (x2, y2)])
}

fn online_storage(g: &Guides) -> PathData {
    let p = grid(g, 6.0);
    let (x1, _) = p(1.0, 0.0);
    let (rx, ry) = p(1.0, 3.0);
    PathData::new()
        .m(x1, 0.0)
        .l(g.r(), 0.0)
        .arc_to(rx, ry, THREE_CD4, -CD2)
        .l(x1, g.b())
        .arc_to(rx, ry, CD4, CD2)
        .z()
}

fn delay(g: &Guides) -> PathData {
    PathData::new()
        .m(0.0, 0.0)
        .l(g.hc(), 0.0)
        .arc_to(g.wd2(), g.hd2(), THREE_CD4, CD2)
        .l(0.0, g.b())
        .z()
}

fn magnetic_tape(g: &Guides) -> PathData {
    let ib = g.vc() + geometry::sin_of(g.hd2(), 45.0);
    let ang1 = geometry::at2(g.w(), g.h());
    PathData::new()
        .m(g.hc(), g.b())
        .arc_to(g.wd2(), g.hd2(), CD4, CD4)
        .arc_to(g.wd2(), g.hd2(), CD2, CD4)
        .arc_to(g.wd2(), g.hd2(), THREE_CD4, CD4)
        .arc_to(g.wd2(), g.hd2(), 0.0, ang1)
        .l(g.r(), ib)
        .l(g.r(), g.b())
        .z()
}

fn magnetic_disk_body(g: &Guides) -> PathData {
    let y1 = g.h() / 6.0;
    let y3 = g.h() * 5.0 / 6.0;
    PathData::new()
        .m(0.0, y1)
        .arc_to(g.wd2(), y1, CD2, CD2)
        .l(g.r(), y3)
        .arc_to(g.wd2(), y1, 0.0, CD2)
        .z()
}

fn magnetic_disk_rim(g: &Guides) -> PathData {
    let y1 = g.h() / 6.0;
    PathData::new().m(g.r(), y1).arc_to(g.wd2(), y1, 0.0, CD2)
}

fn magnetic_disk_outline(g: &Guides) -> PathData {
    magnetic_disk_body(g).append(magnetic_disk_rim(g))
}

fn magnetic_disk(g: &Guides) -> ShapeGeometry {
    ShapeGeometry::new(magnetic_disk_body(g), FillModifier::Norm, false)
        .layer(magnetic_disk_rim(g), FillModifier::None, true)
        .layer(magnetic_disk_body(g), FillModifier::None, true)
}

fn magnetic_drum_body(g: &Guides) -> PathData {
    let x1 = g.w() / 6.0;
    let x2 = g.w() * 5.0 / 6.0;
    PathData::new()
        .m(x1, 0.0)
        .l(x2, 0.0)
        .arc_to(x1, g.hd2(), THREE_CD4, CD2)
        .l(x1, g.b())
        .arc_to(x1, g.hd2(), CD4, CD2)
        .z()
}

fn magnetic_drum_rim(g: &Guides) -> PathData {
    let x1 = g.w() / 6.0;
    let x2 = g.w() * 5.0 / 6.0;
    PathData::new().m(x2, g.b()).arc_to(x1, g.hd2(), CD4, CD2)
}

fn magnetic_drum_outline(g: &Guides) -> PathData {
    magnetic_drum_body(g).append(magnetic_drum_rim(g))
}

fn magnetic_drum(g: &Guides) -> ShapeGeometry {
    ShapeGeometry::new(magnetic_drum_body(g), FillModifier::Norm, false)
        .layer(magnetic_drum_rim(g), FillModifier::None, true)
        .layer(magnetic_drum_body(g), FillModifier::None, true)
}

fn display(g: &Guides) -> PathData {
    let p = grid(g, 6.0);
    let (x1, _) = p(1.0, 0.0);
    let (x2, _) = p(5.0, 0.0);
    let (rx, ry) = p(1.0, 3.0);
    PathData::new()
        .m(0.0, g.vc())
        .l(x1, 0.0)
        .l(x2, 0.0)
        .arc_to(rx, ry, THREE_CD4, CD2)
        .l(x1, g.b())
        .z()
}

#[cfg(test)]
mod tests {
    use crate::{AdjustmentSet, get_multi_path, get_path};

    #[test]
    fn decision_is_a_diamond() {
        assert_eq!(
            get_path("flowChartDecision", 100.0, 60.0, &AdjustmentSet::new()),
            "M0,30 L50,0 L100,30 L50,60 Z"
        );
    }

    #[test]
    fn punched_tape_waves() {
        assert_eq!(
            get_path("flowChartPunchedTape", 200.0, 100.0, &AdjustmentSet::new()),
            "M0,10 A50,10 0 0,0 100,10 A50,10 0 0,1 200,10 L200,90 A50,10 0 0,0 100,90 A50,10 0 0,1 0,90 Z"
        );
    }

    #[test]
    fn magnetic_disk_draws_the_rim_over_the_body() {
        let geom = get_multi_path("flowChartMagneticDisk", 120.0, 180.0, &AdjustmentSet::new()).unwrap();
        assert_eq!(geom.len(), 3);
        assert!(!geom.parts()[0].stroke);
        assert!(geom.parts()[1].stroke && !geom.parts()[1].fill.is_filled());
    }
}
