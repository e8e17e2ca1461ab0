//! Lines and connectors. All are line-like: a zero width or height is a
//! legitimate horizontal or vertical connector, so extents are not widened.

use super::{Catalog, PresetDef};
use crate::adjust::AdjustSpec;
use crate::geometry::{Guides, add_div, mul_div};
use crate::path::PathData;

const ONE_MIDPOINT: &[AdjustSpec] = &[AdjustSpec::new("adj1", 50000.0)];
const TWO_MIDPOINTS: &[AdjustSpec] = &[AdjustSpec::new("adj1", 50000.0), AdjustSpec::new("adj2", 50000.0)];
const THREE_MIDPOINTS: &[AdjustSpec] = &[
    AdjustSpec::new("adj1", 50000.0),
    AdjustSpec::new("adj2", 50000.0),
    AdjustSpec::new("adj3", 50000.0),
];

pub(super) fn register(c: &mut Catalog) {
    c.register(PresetDef::path("line", line).line_like())
        .register(PresetDef::path("lineInv", line_inv).line_like())
        .register(PresetDef::path("straightConnector1", line).line_like())
        .register(PresetDef::path("bentConnector2", bent_connector2).line_like())
        .register(PresetDef::path("bentConnector3", bent_connector3).adjust(ONE_MIDPOINT).line_like())
        .register(PresetDef::path("bentConnector4", bent_connector4).adjust(TWO_MIDPOINTS).line_like())
        .register(PresetDef::path("bentConnector5", bent_connector5).adjust(THREE_MIDPOINTS).line_like())
        .register(PresetDef::path("curvedConnector2", curved_connector2).line_like())
        .register(PresetDef::path("curvedConnector3", curved_connector3).adjust(ONE_MIDPOINT).line_like())
        .register(PresetDef::path("curvedConnector4", curved_connector4).adjust(TWO_MIDPOINTS).line_like())
        .register(PresetDef::path("curvedConnector5", curved_connector5).adjust(THREE_MIDPOINTS).line_like());
}

fn line(g: &Guides) -> PathData {
    PathData::new().m(0.0, 0.0).l(g.r(), g.b())
}

fn line_inv(g: &Guides) -> PathData {
    PathData::new().m(0.0, g.b()).l(g.r(), 0.0)
}

fn bent_connector2(g: &Guides) -> PathData {
    PathData::new().m(0.0, 0.0).l(g.r(), 0.0).l(g.r(), g.b())
}

fn bent_connector3(g: &Guides) -> PathData {
    let x1 = mul_div(g.w(), g.adj("adj1"), 100000.0);
    PathData::new()
        .m(0.0, 0.0)
        .l(x1, 0.0)
        .l(x1, g.b())
        .l(g.r(), g.b())
}

fn bent_connector4(g: &Guides) -> PathData {
    let x1 = mul_div(g.w(), g.adj("adj1"), 100000.0);
    let y2 = mul_div(g.h(), g.adj("adj2"), 100000.0);
    PathData::new()
        .m(0.0, 0.0)
        .l(x1, 0.0)
        .l(x1, y2)
        .l(g.r(), y2)
        .l(g.r(), g.b())
}

fn bent_connector5(g: &Guides) -> PathData {
    let x1 = mul_div(g.w(), g.adj("adj1"), 100000.0);
    let y2 = mul_div(g.h(), g.adj("adj2"), 100000.0);
    let x3 = mul_div(g.w(), g.adj("adj3"), 100000.0);
    PathData::new()
        .m(0.0, 0.0)
        .l(x1, 0.0)
        .l(x1, y2)
        .l(x3, y2)
        .l(x3, g.b())
        .l(g.r(), g.b())
}

fn curved_connector2(g: &Guides) -> PathData {
    PathData::new()
        .m(0.0, 0.0)
        .c(g.wd2(), 0.0, g.r(), g.hd2(), g.r(), g.b())
}

fn curved_connector3(g: &Guides) -> PathData {
    let x2 = mul_div(g.w(), g.adj("adj1"), 100000.0);
    let x1 = add_div(0.0, x2, 2.0);
    let x3 = add_div(g.r(), x2, 2.0);
    let y3 = mul_div(g.h(), 3.0, 4.0);
    PathData::new()
        .m(0.0, 0.0)
        .c(x1, 0.0, x2, g.hd4(), x2, g.vc())
        .c(x2, y3, x3, g.b(), g.r(), g.b())
}

fn curved_connector4(g: &Guides) -> PathData {
    let x2 = mul_div(g.w(), g.adj("adj1"), 100000.0);
    let x1 = add_div(0.0, x2, 2.0);
    let x3 = add_div(g.r(), x2, 2.0);
    let x4 = add_div(x2, x3, 2.0);
    let x5 = add_div(x3, g.r(), 2.0);
    let y4 = mul_div(g.h(), g.adj("adj2"), 100000.0);
    let y1 = add_div(0.0, y4, 2.0);
    let y2 = add_div(0.0, y1, 2.0);
    let y3 = add_div(y1, y4, 2.0);
    let y5 = add_div(g.b(), y4, 2.0);
    PathData::new()
        .m(0.0, 0.0)
        .c(x1, 0.0, x2, y2, x2, y1)
        .c(x2, y3, x4, y4, x3, y4)
        .c(x5, y4, g.r(), y5, g.r(), g.b())
}

fn curved_connector5(g: &Guides) -> PathData {
    let x3 = mul_div(g.w(), g.adj("adj1"), 100000.0);
    let x6 = mul_div(g.w(), g.adj("adj3"), 100000.0);
    let x1 = add_div(x3, x6, 2.0);
    let x2 = add_div(0.0, x3, 2.0);
    let x4 = add_div(x3, x1, 2.0);
    let x5 = add_div(x6, x1, 2.0);
    let x7 = add_div(x6, g.r(), 2.0);
    let y4 = mul_div(g.h(), g.adj("adj2"), 100000.0);
    let y1 = add_div(0.0, y4, 2.0);
    let y2 = add_div(0.0, y1, 2.0);
    let y3 = add_div(y1, y4, 2.0);
    let y5 = add_div(g.b(), y4, 2.0);
    let y6 = add_div(y5, y4, 2.0);
    let y7 = add_div(y5, g.b(), 2.0);
    PathData::new()
        .m(0.0, 0.0)
        .c(x2, 0.0, x3, y2, x3, y1)
        .c(x3, y3, x4, y4, x1, y4)
        .c(x5, y4, x6, y6, x6, y5)
        .c(x6, y7, x7, g.b(), g.r(), g.b())
}

#[cfg(test)]
mod tests {
    use crate::{AdjustmentSet, get_path};

    #[test]
    fn line_strings() {
        let none = AdjustmentSet::new();
        assert_eq!(get_path("line", 200.0, 100.0, &none), "M0,0 L200,100");
        assert_eq!(get_path("lineInv", 200.0, 100.0, &none), "M0,100 L200,0");
        assert_eq!(get_path("line", 200.0, 0.0, &none), "M0,0 L200,0");
    }

    #[test]
    fn elbow_follows_adjustment() {
        let adj = AdjustmentSet::new().with("adj1", 25000.0);
        assert_eq!(
            get_path("bentConnector3", 200.0, 100.0, &adj),
            "M0,0 L50,0 L50,100 L200,100"
        );
    }
}
