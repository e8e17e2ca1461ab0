//! Ribbons, scrolls and waves.

use super::mirror::{Mirror, Pen};
use super::{Catalog, PresetDef};
use crate::adjust::AdjustSpec;
use crate::geometry::{Guides, if_else, mul_div, pin};
use crate::path::PathData;
use crate::shape::{FillModifier, ShapeGeometry};

const RIBBON: &[AdjustSpec] = &[
    AdjustSpec::new("adj1", 16667.0).clamp(0.0, 33333.0),
    AdjustSpec::new("adj2", 50000.0).clamp(25000.0, 75000.0),
];
const ELLIPSE_RIBBON: &[AdjustSpec] = &[
    AdjustSpec::new("adj1", 25000.0).clamp(0.0, 33333.0),
    AdjustSpec::new("adj2", 50000.0).clamp(25000.0, 75000.0),
    AdjustSpec::new("adj3", 12500.0),
];
const LEFT_RIGHT_RIBBON: &[AdjustSpec] = &[
    AdjustSpec::new("adj1", 50000.0).clamp(0.0, 100000.0),
    AdjustSpec::new("adj2", 50000.0).clamp(0.0, 100000.0),
    AdjustSpec::new("adj3", 16667.0).clamp(0.0, 33333.0),
];
const SCROLL: &[AdjustSpec] = &[AdjustSpec::new("adj", 12500.0).clamp(0.0, 25000.0)];
const WAVE: &[AdjustSpec] = &[
    AdjustSpec::new("adj1", 12500.0).clamp(0.0, 20000.0),
    AdjustSpec::new("adj2", 0.0).clamp(-10000.0, 10000.0),
];
const DOUBLE_WAVE: &[AdjustSpec] = &[
    AdjustSpec::new("adj1", 6250.0).clamp(0.0, 12500.0),
    AdjustSpec::new("adj2", 0.0).clamp(-10000.0, 10000.0),
];

pub(super) fn register(c: &mut Catalog) {
    c.register(PresetDef::composite("ribbon", ribbon).outline(ribbon_outline).adjust(RIBBON))
        .register(PresetDef::composite("ribbon2", ribbon2).outline(ribbon2_outline).adjust(RIBBON))
        .register(
            PresetDef::composite("ellipseRibbon", ellipse_ribbon)
                .outline(ellipse_ribbon_outline)
                .adjust(ELLIPSE_RIBBON),
        )
        .register(
            PresetDef::composite("ellipseRibbon2", ellipse_ribbon2)
                .outline(ellipse_ribbon2_outline)
                .adjust(ELLIPSE_RIBBON),
        )
        .register(PresetDef::path("leftRightRibbon", left_right_ribbon).adjust(LEFT_RIGHT_RIBBON))
        .register(
            PresetDef::composite("verticalScroll", vertical_scroll)
                .outline(vertical_scroll_outline)
                .adjust(SCROLL),
        )
        .register(
            PresetDef::composite("horizontalScroll", horizontal_scroll)
                .outline(horizontal_scroll_outline)
                .adjust(SCROLL),
        )
        .register(PresetDef::path("wave", wave).adjust(WAVE))
        .register(PresetDef::path("doubleWave", double_wave).adjust(DOUBLE_WAVE));
}

// ============================================================================
// Ribbons
// ============================================================================

/// Ribbon layout in the local frame: a center band raised above two ends
/// that hang behind it. With `curve > 0` every horizontal edge follows the
/// parabola `curve * (1 - 2x/w)^2`, highest in the middle.
struct Band {
    w: f64,
    curve: f64,
    /// Vertical offset of the ends below the center band
    fold: f64,
    /// Thickness of the band
    thick: f64,
    x2: f64,
    x5: f64,
    x6: f64,
    x9: f64,
    notch: f64,
}

impl Band {
    fn new(g: &Guides, m: &Mirror, curved: bool) -> Self {
        let (w, h) = m.size();
        let a1 = g.pinned("adj1", 0.0, 33333.0);
        let a2 = g.pinned("adj2", 25000.0, 75000.0);
        let a3 = if curved {
            g.pinned("adj3", 0.0, 100000.0 - 2.0 * a1)
        } else {
            0.0
        };
        let fold = mul_div(h, a1, 100000.0);
        let curve = mul_div(h, a3, 100000.0);
        let dx2 = mul_div(w, a2, 200000.0);
        let x2 = w / 2.0 - dx2;
        let x9 = w / 2.0 + dx2;
        Self {
            w,
            curve,
            fold,
            thick: (h - fold - curve).max(0.0),
            x2,
            x5: x2 + w / 8.0,
            x6: x9 - w / 8.0,
            x9,
            notch: w / 8.0,
        }
    }

    fn y(&self, x: f64) -> f64 {
        if self.w <= 0.0 {
            return self.curve;
        }
        let u = 1.0 - 2.0 * x / self.w;
        self.curve * u * u
    }

    /// Follow the edge at offset `off` from the pen at `x0` to `x1`.
    fn follow<'a>(&self, pen: Pen<'a>, x0: f64, x1: f64, off: f64) -> Pen<'a> {
        let end = self.y(x1) + off;
        if self.curve <= 0.0 || self.w <= 0.0 {
            return pen.l(x1, end);
        }
        // the tangents of a parabola meet halfway between the endpoints
        let slope = -4.0 * self.curve * (1.0 - 2.0 * x0 / self.w) / self.w;
        let cy = self.y(x0) + off + slope * (x1 - x0) / 2.0;
        pen.q((x0 + x1) / 2.0, cy, x1, end)
    }

    fn silhouette<'a>(&self, pen: Pen<'a>) -> Pen<'a> {
        let (w, fold, bt) = (self.w, self.fold, self.thick);
        let pen = pen.m(0.0, self.y(0.0) + fold);
        let pen = self.follow(pen, 0.0, self.x2, fold).l(self.x2, self.y(self.x2));
        let pen = self.follow(pen, self.x2, self.x9, 0.0).l(self.x9, self.y(self.x9) + fold);
        let pen = self
            .follow(pen, self.x9, w, fold)
            .l(w - self.notch, self.y(w) + fold + bt / 2.0)
            .l(w, self.y(w) + fold + bt);
        let pen = self.follow(pen, w, self.x6, fold + bt).l(self.x6, self.y(self.x6) + bt);
        let pen = self.follow(pen, self.x6, self.x5, bt).l(self.x5, self.y(self.x5) + fold + bt);
        self.follow(pen, self.x5, 0.0, fold + bt)
            .l(self.notch, self.y(0.0) + fold + bt / 2.0)
            .z()
    }

    fn folds<'a>(&self, pen: Pen<'a>) -> Pen<'a> {
        let (fold, bt) = (self.fold, self.thick);
        let (x2, x5, x6, x9) = (self.x2, self.x5, self.x6, self.x9);
        pen.poly(&[
            (x2, self.y(x2) + bt),
            (x5, self.y(x5) + bt),
            (x5, self.y(x5) + fold + bt),
        ])
        .poly(&[
            (x9, self.y(x9) + bt),
            (x6, self.y(x6) + fold + bt),
            (x6, self.y(x6) + bt),
        ])
    }

    fn outline<'a>(&self, pen: Pen<'a>) -> Pen<'a> {
        let (fold, bt) = (self.fold, self.thick);
        let (x2, x5, x6, x9) = (self.x2, self.x5, self.x6, self.x9);
        self.silhouette(pen)
            .polyline(&[
                (x2, self.y(x2) + fold),
                (x2, self.y(x2) + bt),
                (x5, self.y(x5) + fold + bt),
            ])
            .polyline(&[(x2, self.y(x2) + bt), (x5, self.y(x5) + bt)])
            .polyline(&[
                (x9, self.y(x9) + fold),
                (x9, self.y(x9) + bt),
                (x6, self.y(x6) + fold + bt),
            ])
            .polyline(&[(x9, self.y(x9) + bt), (x6, self.y(x6) + bt)])
    }
}

fn band_outline(g: &Guides, m: Mirror, curved: bool) -> PathData {
    Band::new(g, &m, curved).outline(m.pen()).finish()
}

fn band_shape(g: &Guides, m: Mirror, curved: bool) -> ShapeGeometry {
    let band = Band::new(g, &m, curved);
    ShapeGeometry::new(band.silhouette(m.pen()).finish(), FillModifier::Norm, false)
        .layer(band.folds(m.pen()).finish(), FillModifier::DarkenLess, false)
        .layer(band.outline(m.pen()).finish(), FillModifier::None, true)
}

fn ribbon(g: &Guides) -> ShapeGeometry {
    band_shape(g, Mirror::new(g).flip_y(), false)
}

fn ribbon_outline(g: &Guides) -> PathData {
    band_outline(g, Mirror::new(g).flip_y(), false)
}

fn ribbon2(g: &Guides) -> ShapeGeometry {
    band_shape(g, Mirror::new(g), false)
}

fn ribbon2_outline(g: &Guides) -> PathData {
    band_outline(g, Mirror::new(g), false)
}

fn ellipse_ribbon(g: &Guides) -> ShapeGeometry {
    band_shape(g, Mirror::new(g).flip_y(), true)
}

fn ellipse_ribbon_outline(g: &Guides) -> PathData {
    band_outline(g, Mirror::new(g).flip_y(), true)
}

fn ellipse_ribbon2(g: &Guides) -> ShapeGeometry {
    band_shape(g, Mirror::new(g), true)
}

fn ellipse_ribbon2_outline(g: &Guides) -> PathData {
    band_outline(g, Mirror::new(g), true)
}

/// Two overlapping bands: the upper one pointing left, the lower one right.
fn left_right_ribbon(g: &Guides) -> PathData {
    let (w, h) = (g.w(), g.h());
    let bt = mul_div(h, g.adj("adj1"), 100000.0);
    let fold = pin(0.0, mul_div(h, g.adj("adj3"), 100000.0), bt.min(h - bt));
    let head = pin(0.0, g.ss_ratio("adj2"), g.wd4());
    let y1 = (h - bt - fold) / 2.0;
    let y2 = y1 + fold;
    let (xl, xr) = (g.hc() - g.wd32(), g.hc() + g.wd32());
    PathData::polygon(&[
        (0.0, y1 + bt / 2.0),
        (head, y1),
        (xr, y1),
        (xr, y2),
        (w - head, y2),
        (w, y2 + bt / 2.0),
        (w - head, y2 + bt),
        (xl, y2 + bt),
        (xl, y1 + bt),
        (head, y1 + bt),
    ])
}

// ============================================================================
// Scrolls
// ============================================================================

/// Scroll with rolls along the top and bottom of the local frame. The top
/// roll curls in at the left, the bottom roll at the left below the paper.
struct Scroll {
    w: f64,
    h: f64,
    ch: f64,
}

impl Scroll {
    fn new(g: &Guides, m: &Mirror) -> Self {
        let (w, h) = m.size();
        Self {
            w,
            h,
            ch: mul_div(g.ss(), g.pinned("adj", 0.0, 25000.0), 100000.0),
        }
    }

    fn silhouette<'a>(&self, pen: Pen<'a>) -> Pen<'a> {
        let (r, b, ch) = (self.w, self.h, self.ch);
        let ch2 = ch / 2.0;
        pen.m(ch, 0.0)
            .l(r - ch2, 0.0)
            .arc(r - ch2, ch2, ch2, ch2, 270.0, 180.0)
            .l(r - ch2, b - ch2)
            .arc(r - ch, b - ch2, ch2, ch2, 0.0, 90.0)
            .l(ch2, b)
            .arc(ch2, b - ch2, ch2, ch2, 90.0, 180.0)
            .l(ch2, ch2)
            .arc(ch, ch2, ch2, ch2, 180.0, 90.0)
            .z()
    }

    /// Curled ends of the rolls.
    fn curls<'a>(&self, pen: Pen<'a>) -> Pen<'a> {
        let (b, ch) = (self.h, self.ch);
        let (ch2, ch4) = (ch / 2.0, ch / 4.0);
        pen.ellipse(ch, ch2, ch4, ch4).ellipse(ch2, b - ch2, ch4, ch4)
    }

    fn outline<'a>(&self, pen: Pen<'a>) -> Pen<'a> {
        let (r, b, ch) = (self.w, self.h, self.ch);
        let ch2 = ch / 2.0;
        let pen = self
            .silhouette(pen)
            .polyline(&[(ch2, ch), (r - ch2, ch)])
            .polyline(&[(ch2, b - ch), (r - ch, b - ch)]);
        self.curls(pen)
    }
}

fn scroll_shape(g: &Guides, m: Mirror) -> ShapeGeometry {
    let scroll = Scroll::new(g, &m);
    ShapeGeometry::new(scroll.silhouette(m.pen()).finish(), FillModifier::Norm, false)
        .layer(scroll.curls(m.pen()).finish(), FillModifier::DarkenLess, false)
        .layer(scroll.outline(m.pen()).finish(), FillModifier::None, true)
}

fn vertical_scroll(g: &Guides) -> ShapeGeometry {
    scroll_shape(g, Mirror::new(g))
}

fn vertical_scroll_outline(g: &Guides) -> PathData {
    let m = Mirror::new(g);
    Scroll::new(g, &m).outline(m.pen()).finish()
}

fn horizontal_scroll(g: &Guides) -> ShapeGeometry {
    scroll_shape(g, Mirror::new(g).swap())
}

fn horizontal_scroll_outline(g: &Guides) -> PathData {
    let m = Mirror::new(g).swap();
    Scroll::new(g, &m).outline(m.pen()).finish()
}

// ============================================================================
// Waves
// ============================================================================

/// Amplitude guides shared by both waves: the crest line `y1`, the control
/// offsets `y2`/`y3` and their mirrors at the bottom edge.
fn wave_levels(g: &Guides) -> [f64; 6] {
    let y1 = g.h() * g.ratio("adj1");
    let dy2 = y1 * 10.0 / 3.0;
    let y4 = g.b() - y1;
    [y1, y1 - dy2, y1 + dy2, y4, y4 - dy2, y4 + dy2]
}

fn wave(g: &Guides) -> PathData {
    let [y1, y2, y3, y4, y5, y6] = wave_levels(g);
    let of2 = mul_div(g.w(), g.adj("adj2"), 100000.0);
    let dx2 = if_else(of2, 0.0, of2);
    let x2 = -dx2;
    let dx5 = if_else(of2, of2, 0.0);
    let x5 = g.r() - dx5;
    let dx3 = (dx2 + x5) / 3.0;
    let x3 = x2 + dx3;
    let x4 = (x3 + x5) / 2.0;
    let x6 = dx5;
    let x10 = g.r() + dx2;
    let x7 = x6 + dx3;
    let x8 = (x7 + x10) / 2.0;

    PathData::new()
        .m(x2, y1)
        .c(x3, y2, x4, y3, x5, y1)
        .l(x10, y4)
        .c(x8, y6, x7, y5, x6, y4)
        .z()
}

fn double_wave(g: &Guides) -> PathData {
    let [y1, y2, y3, y4, y5, y6] = wave_levels(g);
    let of2 = mul_div(g.w(), g.adj("adj2"), 100000.0);
    let dx2 = if_else(of2, 0.0, of2);
    let x2 = -dx2;
    let dx8 = if_else(of2, of2, 0.0);
    let x8 = g.r() - dx8;
    let dx3 = (dx2 + x8) / 6.0;
    let dx4 = (dx2 + x8) / 3.0;
    let x3 = x2 + dx3;
    let x4 = x2 + dx4;
    let x5 = (x2 + x8) / 2.0;
    let x6 = x5 + dx3;
    let x7 = (x6 + x8) / 2.0;
    let x9 = dx8;
    let x15 = g.r() + dx2;
    let x10 = x9 + dx3;
    let x11 = x9 + dx4;
    let x12 = (x9 + x15) / 2.0;
    let x13 = x12 + dx3;
    let x14 = (x13 + x15) / 2.0;

    PathData::new()
        .m(x2, y1)
        .c(x3, y2, x4, y3, x5, y1)
        .c(x6, y2, x7, y3, x8, y1)
        .l(x15, y4)
        .c(x14, y6, x13, y5, x12, y4)
        .c(x11, y6, x10, y5, x9, y4)
        .z()
}

#[cfg(test)]
mod tests {
    use crate::shape::FillModifier;
    use crate::{AdjustmentSet, get_multi_path, get_path};

    fn layers(name: &str) -> Vec<(FillModifier, bool)> {
        get_multi_path(name, 300.0, 200.0, &AdjustmentSet::new())
            .unwrap()
            .iter()
            .map(|p| (p.fill, p.stroke))
            .collect()
    }

    #[test]
    fn scrolls_paint_body_shadow_outline() {
        let expected = vec![
            (FillModifier::Norm, false),
            (FillModifier::DarkenLess, false),
            (FillModifier::None, true),
        ];
        assert_eq!(layers("verticalScroll"), expected);
        assert_eq!(layers("horizontalScroll"), expected);
    }

    #[test]
    fn scroll_adjustment_is_clamped() {
        let wide = AdjustmentSet::new().with("adj", 90000.0);
        let max = AdjustmentSet::new().with("adj", 25000.0);
        assert_eq!(
            get_path("verticalScroll", 200.0, 300.0, &wide),
            get_path("verticalScroll", 200.0, 300.0, &max)
        );
    }

    #[test]
    fn ribbons_fold_behind_the_band() {
        for name in ["ribbon", "ribbon2", "ellipseRibbon", "ellipseRibbon2"] {
            let parts = layers(name);
            assert_eq!(parts.len(), 3, "{name}");
            assert_eq!(parts[1], (FillModifier::DarkenLess, false), "{name}");
        }
        let d = get_path("ellipseRibbon2", 300.0, 200.0, &AdjustmentSet::new());
        assert!(d.contains('Q'), "{d}");
    }

    #[test]
    fn ribbon2_silhouette() {
        let adj = AdjustmentSet::new().with("adj1", 20000.0);
        let geo = get_multi_path("ribbon2", 800.0, 300.0, &adj).unwrap();
        assert_eq!(
            geo.parts()[0].d(),
            "M0,60 L200,60 L200,0 L600,0 L600,60 L800,60 L700,180 L800,300 \
             L500,300 L500,240 L300,240 L300,300 L0,300 L100,180 Z"
        );
    }

    #[test]
    fn default_wave() {
        assert_eq!(
            get_path("wave", 100.0, 100.0, &AdjustmentSet::new()),
            "M0,12.5 C33.3333,-29.1667 66.6667,54.1667 100,12.5 L100,87.5 C66.6667,129.167 33.3333,45.8333 0,87.5 Z"
        );
    }

    #[test]
    fn double_wave_has_four_curves() {
        let d = get_path("doubleWave", 200.0, 100.0, &AdjustmentSet::new());
        assert_eq!(d.matches('C').count(), 4, "{d}");
    }
}
