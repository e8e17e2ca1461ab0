//! Drawing in a reflected or transposed frame.
//!
//! Several presets are mirror images of one another (`curvedLeftArrow` of
//! `curvedRightArrow`, `ribbon2` of `ribbon`, `horizontalScroll` of
//! `verticalScroll`). They are written once in a local frame and drawn
//! through a [`Mirror`], which maps points, radii and arc angles.

use crate::geometry::Guides;
use crate::path::PathData;

#[derive(Debug, Clone, Copy)]
pub(super) struct Mirror {
    w: f64,
    h: f64,
    swap: bool,
    flip_x: bool,
    flip_y: bool,
}

impl Mirror {
    pub fn new(g: &Guides) -> Self {
        Self {
            w: g.w(),
            h: g.h(),
            swap: false,
            flip_x: false,
            flip_y: false,
        }
    }

    /// Exchange the axes; applied before any flip.
    pub fn swap(mut self) -> Self {
        self.swap = true;
        self
    }

    pub fn flip_x(mut self) -> Self {
        self.flip_x = true;
        self
    }

    pub fn flip_y(mut self) -> Self {
        self.flip_y = true;
        self
    }

    /// Width and height of the local frame.
    pub fn size(&self) -> (f64, f64) {
        if self.swap { (self.h, self.w) } else { (self.w, self.h) }
    }

    fn point(&self, x: f64, y: f64) -> (f64, f64) {
        let (mut x, mut y) = if self.swap { (y, x) } else { (x, y) };
        if self.flip_x {
            x = self.w - x;
        }
        if self.flip_y {
            y = self.h - y;
        }
        (x, y)
    }

    fn radii(&self, rx: f64, ry: f64) -> (f64, f64) {
        if self.swap { (ry, rx) } else { (rx, ry) }
    }

    /// Map a visual start angle and sweep. Every reflection reverses the
    /// direction of travel.
    fn angles(&self, st: f64, sw: f64) -> (f64, f64) {
        let (mut st, mut sw) = (st, sw);
        if self.swap {
            st = 90.0 - st;
            sw = -sw;
        }
        if self.flip_x {
            st = 180.0 - st;
            sw = -sw;
        }
        if self.flip_y {
            st = -st;
            sw = -sw;
        }
        (st, sw)
    }

    pub fn pen(&self) -> Pen<'_> {
        Pen {
            mirror: self,
            path: PathData::new(),
        }
    }
}

/// Fluent builder with the same vocabulary as [`PathData`], in local coordinates
pub(super) struct Pen<'a> {
    mirror: &'a Mirror,
    path: PathData,
}

impl Pen<'_> {
    pub fn m(mut self, x: f64, y: f64) -> Self {
        let (x, y) = self.mirror.point(x, y);
        self.path = self.path.m(x, y);
        self
    }

    pub fn l(mut self, x: f64, y: f64) -> Self {
        let (x, y) = self.mirror.point(x, y);
        self.path = self.path.l(x, y);
        self
    }

    pub fn q(mut self, x1: f64, y1: f64, x: f64, y: f64) -> Self {
        let (x1, y1) = self.mirror.point(x1, y1);
        let (x, y) = self.mirror.point(x, y);
        self.path = self.path.q(x1, y1, x, y);
        self
    }

    pub fn arc(mut self, cx: f64, cy: f64, rx: f64, ry: f64, st: f64, sw: f64) -> Self {
        let (cx, cy) = self.mirror.point(cx, cy);
        let (rx, ry) = self.mirror.radii(rx, ry);
        let (st, sw) = self.mirror.angles(st, sw);
        self.path = self.path.arc(cx, cy, rx, ry, st, sw);
        self
    }

    pub fn ellipse(mut self, cx: f64, cy: f64, rx: f64, ry: f64) -> Self {
        let (cx, cy) = self.mirror.point(cx, cy);
        let (rx, ry) = self.mirror.radii(rx, ry);
        self.path = self.path.ellipse(cx, cy, rx, ry);
        self
    }

    pub fn z(mut self) -> Self {
        self.path = self.path.z();
        self
    }

    /// Closed polygon as a new subpath.
    pub fn poly(self, points: &[(f64, f64)]) -> Self {
        self.polyline(points).z()
    }

    /// Open polyline as a new subpath.
    pub fn polyline(mut self, points: &[(f64, f64)]) -> Self {
        let mapped: Vec<(f64, f64)> = points.iter().map(|&(x, y)| self.mirror.point(x, y)).collect();
        self.path = self.path.polyline(&mapped);
        self
    }

    pub fn finish(self) -> PathData {
        self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjust::ResolvedAdjustments;
    use crate::types::BoundingBox;

    fn guides(w: f64, h: f64) -> Guides {
        Guides::new(BoundingBox::new(w, h), ResolvedAdjustments::default())
    }

    #[test]
    fn identity() {
        let g = guides(100.0, 50.0);
        let p = Mirror::new(&g).pen().m(0.0, 0.0).l(10.0, 5.0).finish();
        assert_eq!(p.to_svg(), "M0,0 L10,5");
    }

    #[test]
    fn flips_and_swap() {
        let g = guides(100.0, 50.0);
        let p = Mirror::new(&g).flip_x().pen().m(0.0, 0.0).l(10.0, 5.0).finish();
        assert_eq!(p.to_svg(), "M100,0 L90,5");

        let m = Mirror::new(&g).swap();
        assert_eq!(m.size(), (50.0, 100.0));
        let p = m.pen().m(0.0, 10.0).finish();
        assert_eq!(p.to_svg(), "M10,0");
    }

    #[test]
    fn mirrored_arc_ends_on_mirrored_point() {
        let g = guides(100.0, 100.0);
        // local: quarter arc from (0,50) over the top-left to (50,0)
        let p = Mirror::new(&g)
            .flip_x()
            .pen()
            .m(0.0, 50.0)
            .arc(50.0, 50.0, 50.0, 50.0, 180.0, 90.0)
            .finish();
        let end = p.cursor().unwrap();
        assert!((end.x - 50.0).abs() < 1e-9 && end.y.abs() < 1e-9);
        assert_eq!(p.to_svg(), "M100,50 A50,50 0 0,0 50,0");
    }
}
