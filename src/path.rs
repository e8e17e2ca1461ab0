//! Path builder and serializer.
//!
//! Presets build a [`PathData`] with a fluent API (`PathData::new().m(..).l(..)`)
//! and the result is written as an SVG-compatible path string.
//!
//! # Arcs
//!
//! Arcs are stored in center form: center, radii, start angle and sweep, all
//! angles visual (as measured on a circle, see [`geometry::parametric_angle`]).
//! On output they become endpoint arcs `A rx,ry 0 large,sweep x,y` with
//! `large = |sweep| > 180°` and `sweep = sweep > 0`, Y pointing down.
//! [`PathData::arc_to`] accepts the DrawingML `arcTo` form instead, where the
//! arc starts at the current point and the center is derived from it.

use std::fmt;

use glam::{DVec2, dvec2};

use crate::defaults;
use crate::errors::GeometryError;
use crate::geometry;
use crate::types::Angle;

/// One drawing command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(DVec2),
    LineTo(DVec2),
    ArcTo {
        center: DVec2,
        rx: f64,
        ry: f64,
        start: Angle,
        sweep: Angle,
    },
    CubicTo {
        c1: DVec2,
        c2: DVec2,
        end: DVec2,
    },
    QuadTo {
        control: DVec2,
        end: DVec2,
    },
    Close,
}

impl PathCommand {
    pub fn name(&self) -> &'static str {
        match self {
            PathCommand::MoveTo(_) => "MoveTo",
            PathCommand::LineTo(_) => "LineTo",
            PathCommand::ArcTo { .. } => "ArcTo",
            PathCommand::CubicTo { .. } => "CubicTo",
            PathCommand::QuadTo { .. } => "QuadTo",
            PathCommand::Close => "Close",
        }
    }

    fn is_finite(&self) -> bool {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p.is_finite(),
            PathCommand::ArcTo {
                center,
                rx,
                ry,
                start,
                sweep,
            } => center.is_finite() && rx.is_finite() && ry.is_finite() && start.raw().is_finite() && sweep.raw().is_finite(),
            PathCommand::CubicTo { c1, c2, end } => c1.is_finite() && c2.is_finite() && end.is_finite(),
            PathCommand::QuadTo { control, end } => control.is_finite() && end.is_finite(),
            PathCommand::Close => true,
        }
    }
}

/// Start and end points of an arc in center form.
fn arc_endpoints(center: DVec2, rx: f64, ry: f64, start: Angle, sweep: Angle) -> (DVec2, DVec2) {
    (
        geometry::ellipse_point(center, rx, ry, start.raw()),
        geometry::ellipse_point(center, rx, ry, (start + sweep).raw()),
    )
}

/// An ordered sequence of drawing commands
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    commands: Vec<PathCommand>,
    /// Current pen position
    cursor: Option<DVec2>,
    /// Start of the current subpath (target of `Z`)
    subpath_start: Option<DVec2>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Closed polygon through `points`.
    pub fn polygon(points: &[(f64, f64)]) -> Self {
        Self::new().poly(points)
    }

    pub fn m(mut self, x: f64, y: f64) -> Self {
        let p = dvec2(x, y);
        self.commands.push(PathCommand::MoveTo(p));
        self.cursor = Some(p);
        self.subpath_start = Some(p);
        self
    }

    pub fn l(mut self, x: f64, y: f64) -> Self {
        let p = dvec2(x, y);
        if self.cursor.is_none() {
            return self.m(x, y);
        }
        self.commands.push(PathCommand::LineTo(p));
        self.cursor = Some(p);
        self
    }

    /// Cubic Bézier
    pub fn c(mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) -> Self {
        if self.cursor.is_none() {
            self = self.m(x1, y1);
        }
        let end = dvec2(x, y);
        self.commands.push(PathCommand::CubicTo {
            c1: dvec2(x1, y1),
            c2: dvec2(x2, y2),
            end,
        });
        self.cursor = Some(end);
        self
    }

    /// Quadratic Bézier
    pub fn q(mut self, x1: f64, y1: f64, x: f64, y: f64) -> Self {
        if self.cursor.is_none() {
            self = self.m(x1, y1);
        }
        let end = dvec2(x, y);
        self.commands.push(PathCommand::QuadTo {
            control: dvec2(x1, y1),
            end,
        });
        self.cursor = Some(end);
        self
    }

    pub fn z(mut self) -> Self {
        if self.cursor.is_some() {
            self.commands.push(PathCommand::Close);
            self.cursor = self.subpath_start;
        }
        self
    }

    /// Elliptical arc in center form (angles in degrees, visual).
    ///
    /// Without a current point the arc starts a new subpath; otherwise a line
    /// joins the pen to the arc start when they differ.
    pub fn arc(mut self, cx: f64, cy: f64, rx: f64, ry: f64, start_deg: f64, sweep_deg: f64) -> Self {
        let center = dvec2(cx, cy);
        let (rx, ry) = (rx.abs(), ry.abs());
        let (start, sweep) = (Angle::deg(start_deg), Angle::deg(sweep_deg));
        let (from, to) = arc_endpoints(center, rx, ry, start, sweep);
        if self.cursor.is_none() {
            self = self.m(from.x, from.y);
        }
        self.commands.push(PathCommand::ArcTo {
            center,
            rx,
            ry,
            start,
            sweep,
        });
        self.cursor = Some(to);
        self
    }

    /// DrawingML `arcTo`: an arc of radii `wr`/`hr` starting at the current
    /// point at visual angle `st_deg`, sweeping `sw_deg`.
    pub fn arc_to(self, wr: f64, hr: f64, st_deg: f64, sw_deg: f64) -> Self {
        let pen = self.cursor.unwrap_or(DVec2::ZERO);
        let center = pen - geometry::ellipse_offset(wr.abs(), hr.abs(), st_deg);
        self.arc(center.x, center.y, wr, hr, st_deg, sw_deg)
    }

    /// Closed ellipse inscribed in the given center/radii.
    pub fn ellipse(self, cx: f64, cy: f64, rx: f64, ry: f64) -> Self {
        self.m(cx + rx.abs(), cy).arc(cx, cy, rx, ry, 0.0, 360.0).z()
    }

    /// Closed polygon appended as a new subpath.
    pub fn poly(mut self, points: &[(f64, f64)]) -> Self {
        let Some((&(x0, y0), rest)) = points.split_first() else {
            return self;
        };
        self = self.m(x0, y0);
        for &(x, y) in rest {
            self = self.l(x, y);
        }
        self.z()
    }

    /// Open polyline appended as a new subpath.
    pub fn polyline(mut self, points: &[(f64, f64)]) -> Self {
        let Some((&(x0, y0), rest)) = points.split_first() else {
            return self;
        };
        self = self.m(x0, y0);
        for &(x, y) in rest {
            self = self.l(x, y);
        }
        self
    }

    /// Append all commands of `other`.
    pub fn append(mut self, other: PathData) -> Self {
        if other.commands.is_empty() {
            return self;
        }
        self.commands.extend(other.commands);
        self.cursor = other.cursor;
        self.subpath_start = other.subpath_start;
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn cursor(&self) -> Option<DVec2> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Check for the defects the catalog must never emit: an empty path, a
    /// path not starting with a move, or a non-finite number.
    pub fn validate(&self) -> Result<(), GeometryError> {
        let first = self.commands.first().ok_or(GeometryError::EmptyPath)?;
        if !matches!(first, PathCommand::MoveTo(_)) {
            return Err(GeometryError::NoInitialMove { command: first.name() });
        }
        for (index, cmd) in self.commands.iter().enumerate() {
            if !cmd.is_finite() {
                return Err(GeometryError::NonFinite {
                    index,
                    command: cmd.name(),
                });
            }
        }
        Ok(())
    }

    /// Serialize to path-string tokens.
    fn write_tokens(&self, out: &mut Vec<String>) {
        let mut pen: Option<DVec2> = None;
        let mut subpath_start: Option<DVec2> = None;

        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    out.push(format!("M{}", fmt_point(p)));
                    pen = Some(p);
                    subpath_start = Some(p);
                }
                PathCommand::LineTo(p) => {
                    out.push(format!("L{}", fmt_point(p)));
                    pen = Some(p);
                }
                PathCommand::CubicTo { c1, c2, end } => {
                    out.push(format!("C{} {} {}", fmt_point(c1), fmt_point(c2), fmt_point(end)));
                    pen = Some(end);
                }
                PathCommand::QuadTo { control, end } => {
                    out.push(format!("Q{} {}", fmt_point(control), fmt_point(end)));
                    pen = Some(end);
                }
                PathCommand::Close => {
                    out.push("Z".to_string());
                    pen = subpath_start;
                }
                PathCommand::ArcTo {
                    center,
                    rx,
                    ry,
                    start,
                    sweep,
                } => {
                    let (from, to) = arc_endpoints(center, rx, ry, start, sweep);
                    match pen {
                        None => {
                            out.push(format!("M{}", fmt_point(from)));
                            subpath_start = Some(from);
                        }
                        Some(p) if p.distance(from) > defaults::POINT_EPSILON => {
                            out.push(format!("L{}", fmt_point(from)));
                        }
                        Some(_) => {}
                    }
                    write_arc(out, center, rx, ry, start, sweep, to);
                    pen = Some(to);
                }
            }
        }
    }

    /// The path as an SVG path string.
    pub fn to_svg(&self) -> String {
        let mut tokens = Vec::with_capacity(self.commands.len() + 2);
        self.write_tokens(&mut tokens);
        tokens.join(" ")
    }
}

/// Emit one or two endpoint arcs. A full turn cannot be expressed by a single
/// endpoint arc (start == end draws nothing), so it is split in halves.
fn write_arc(out: &mut Vec<String>, center: DVec2, rx: f64, ry: f64, start: Angle, sweep: Angle, to: DVec2) {
    let full = geometry::CD1;
    if sweep.raw().abs() < defaults::ZERO_SNAP {
        return;
    }
    let sweep = Angle::deg(sweep.raw().clamp(-full, full));
    let sweep_flag = u8::from(sweep.raw() > 0.0);

    if sweep.raw().abs() >= full - 1e-9 {
        let half = sweep * 0.5;
        let (_, mid) = arc_endpoints(center, rx, ry, start, half);
        let (_, end) = arc_endpoints(center, rx, ry, start, sweep);
        for p in [mid, end] {
            out.push(format!("A{},{} 0 0,{} {}", fmt_num(rx), fmt_num(ry), sweep_flag, fmt_point(p)));
        }
        return;
    }

    let large = u8::from(sweep.raw().abs() > geometry::CD2);
    out.push(format!(
        "A{},{} 0 {},{} {}",
        fmt_num(rx),
        fmt_num(ry),
        large,
        sweep_flag,
        fmt_point(to)
    ));
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_svg())
    }
}

fn fmt_point(p: DVec2) -> String {
    format!("{},{}", fmt_num(p.x), fmt_num(p.y))
}

/// Format a number like C's `%g` (six significant figures, trailing zeros
/// trimmed). Magnitudes below [`defaults::ZERO_SNAP`] print as `0`; non-finite
/// values print as `NaN`/`Infinity` so defects stay visible in the output.
pub fn fmt_num(value: f64) -> String {
    fmt_num_precision(value, defaults::PATH_SIG_FIGS)
}

/// Format a number with specified significant figures, trailing zeros trimmed.
fn fmt_num_precision(value: f64, sig_figs: i32) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value.abs() < defaults::ZERO_SNAP {
        return "0".to_string();
    }

    // Round to specified significant figures
    let abs_val = value.abs();
    let magnitude = abs_val.log10().floor() as i32;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    let rounded = (value * scale).round() / scale;

    // Format with enough decimal places, then trim the fraction only
    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s.as_str()
    };
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_num_matches_percent_g() {
        assert_eq!(fmt_num(0.0), "0");
        assert_eq!(fmt_num(-0.0), "0");
        assert_eq!(fmt_num(100.0), "100");
        assert_eq!(fmt_num(5000.0), "5000");
        assert_eq!(fmt_num(1234567.0), "1234570");
        assert_eq!(fmt_num(4166.666666), "4166.67");
        assert_eq!(fmt_num(0.0833333333), "0.0833333");
        assert_eq!(fmt_num(-12.5), "-12.5");
        assert_eq!(fmt_num(6.123e-15), "0");
        assert_eq!(fmt_num(-1e-12), "0");
    }

    #[test]
    fn fmt_num_non_finite() {
        assert_eq!(fmt_num(f64::NAN), "NaN");
        assert_eq!(fmt_num(f64::INFINITY), "Infinity");
        assert_eq!(fmt_num(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn rect_string() {
        let p = PathData::polygon(&[(0.0, 0.0), (100.0, 0.0), (100.0, 50.0), (0.0, 50.0)]);
        assert_eq!(p.to_svg(), "M0,0 L100,0 L100,50 L0,50 Z");
    }

    #[test]
    fn line_without_move_starts_subpath() {
        let p = PathData::new().l(3.0, 4.0);
        assert_eq!(p.to_svg(), "M3,4");
    }

    #[test]
    fn curves() {
        let p = PathData::new().m(0.0, 0.0).c(1.0, 2.0, 3.0, 4.0, 5.0, 6.0).q(7.0, 8.0, 9.0, 10.0);
        assert_eq!(p.to_svg(), "M0,0 C1,2 3,4 5,6 Q7,8 9,10");
    }

    #[test]
    fn quarter_arc_flags() {
        // center (0,0), r 10, from 0° sweeping 90° (clockwise on screen)
        let p = PathData::new().m(10.0, 0.0).arc(0.0, 0.0, 10.0, 10.0, 0.0, 90.0);
        assert_eq!(p.to_svg(), "M10,0 A10,10 0 0,1 0,10");
    }

    #[test]
    fn large_negative_arc_flags() {
        let p = PathData::new().m(10.0, 0.0).arc(0.0, 0.0, 10.0, 10.0, 0.0, -270.0);
        assert_eq!(p.to_svg(), "M10,0 A10,10 0 1,0 0,10");
    }

    #[test]
    fn arc_joins_pen_with_line() {
        let p = PathData::new().m(0.0, 0.0).arc(0.0, 0.0, 10.0, 10.0, 0.0, 90.0);
        assert_eq!(p.to_svg(), "M0,0 L10,0 A10,10 0 0,1 0,10");
    }

    #[test]
    fn arc_without_pen_moves() {
        let p = PathData::new().arc(0.0, 0.0, 10.0, 10.0, 180.0, 90.0);
        assert_eq!(p.to_svg(), "M-10,0 A10,10 0 0,1 0,-10");
    }

    #[test]
    fn full_circle_is_split() {
        let p = PathData::new().ellipse(50.0, 50.0, 50.0, 50.0);
        assert_eq!(p.to_svg(), "M100,50 A50,50 0 0,1 0,50 A50,50 0 0,1 100,50 Z");
    }

    #[test]
    fn zero_sweep_emits_nothing() {
        let p = PathData::new().m(10.0, 0.0).arc(0.0, 0.0, 10.0, 10.0, 0.0, 0.0);
        assert_eq!(p.to_svg(), "M10,0");
    }

    #[test]
    fn arc_to_derives_center_from_pen() {
        // DrawingML: from (0, 50), radius 50, start 180°, sweep 90° → (50, 0)
        let p = PathData::new().m(0.0, 50.0).arc_to(50.0, 50.0, 180.0, 90.0);
        assert_eq!(p.to_svg(), "M0,50 A50,50 0 0,1 50,0");
        let end = p.cursor().unwrap();
        assert!((end.x - 50.0).abs() < 1e-9 && end.y.abs() < 1e-9);
    }

    #[test]
    fn arc_to_on_ellipse_uses_parametric_angle() {
        // start at the top of a 200x100 half-axes ellipse centered at (200, 100)
        let p = PathData::new().m(200.0, 0.0).arc_to(200.0, 100.0, 270.0, 90.0);
        let end = p.cursor().unwrap();
        assert!((end.x - 400.0).abs() < 1e-9);
        assert!((end.y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn close_returns_pen_to_start() {
        let p = PathData::new().m(1.0, 1.0).l(5.0, 1.0).z();
        assert_eq!(p.cursor(), Some(dvec2(1.0, 1.0)));
    }

    #[test]
    fn validate_flags_defects() {
        assert_eq!(PathData::new().validate(), Err(GeometryError::EmptyPath));
        let p = PathData::new().m(0.0, 0.0).l(f64::NAN, 1.0);
        assert_eq!(
            p.validate(),
            Err(GeometryError::NonFinite {
                index: 1,
                command: "LineTo"
            })
        );
        assert!(PathData::polygon(&[(0.0, 0.0), (1.0, 1.0)]).validate().is_ok());
    }

    #[test]
    fn append_concatenates() {
        let a = PathData::new().m(0.0, 0.0).l(1.0, 0.0);
        let b = PathData::new().m(5.0, 5.0).l(6.0, 5.0);
        assert_eq!(a.append(b).to_svg(), "M0,0 L1,0 M5,5 L6,5");
    }
}
