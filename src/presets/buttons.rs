//! Action buttons: a plain button face with an icon drawn in a centered
//! square of side `3/4 ss`.
//!
//! Every button except the blank one is a composite of the face, the icon in
//! a darker tone and an outline stroking both.

use super::{Catalog, PresetDef, fallback_rect};
use crate::geometry::Guides;
use crate::path::PathData;
use crate::shape::{FillModifier, ShapeGeometry};

pub(super) fn register(c: &mut Catalog) {
    c.register(PresetDef::path("actionButtonBlank", blank))
        .register(
            PresetDef::composite("actionButtonBackPrevious", back_previous)
                .outline(|g| outline_of(back_previous(g))),
        )
        .register(
            PresetDef::composite("actionButtonForwardNext", forward_next)
                .outline(|g| outline_of(forward_next(g))),
        )
        .register(
            PresetDef::composite("actionButtonBeginning", beginning)
                .outline(|g| outline_of(beginning(g))),
        )
        .register(
            PresetDef::composite("actionButtonEnd", end)
                .outline(|g| outline_of(end(g))),
        )
        .register(
            PresetDef::composite("actionButtonHome", home)
                .outline(|g| outline_of(home(g))),
        )
        .register(
            PresetDef::composite("actionButtonDocument", document)
                .outline(|g| outline_of(document(g))),
        )
        .register(
            PresetDef::composite("actionButtonHelp", help)
                .outline(|g| outline_of(help(g))),
        )
        .register(
            PresetDef::composite("actionButtonInformation", information)
                .outline(|g| outline_of(information(g))),
        )
        .register(
            PresetDef::composite("actionButtonMovie", movie)
                .outline(|g| outline_of(movie(g))),
        )
        .register(
            PresetDef::composite("actionButtonReturn", return_button)
                .outline(|g| outline_of(return_button(g))),
        )
        .register(
            PresetDef::composite("actionButtonSound", sound)
                .outline(|g| outline_of(sound(g))),
        );
}

/// The icon square, addressed on an 8×8 grid.
#[derive(Debug, Clone, Copy)]
struct Icon {
    x0: f64,
    y0: f64,
    /// One grid step
    q: f64,
}

impl Icon {
    fn new(g: &Guides) -> Self {
        let dx2 = g.ss() * 3.0 / 8.0;
        Self {
            x0: g.hc() - dx2,
            y0: g.vc() - dx2,
            q: dx2 / 4.0,
        }
    }

    fn at(&self, i: f64, j: f64) -> (f64, f64) {
        (self.x0 + i * self.q, self.y0 + j * self.q)
    }

    fn poly(&self, path: PathData, cells: &[(f64, f64)]) -> PathData {
        let points: Vec<(f64, f64)> = cells.iter().map(|&(i, j)| self.at(i, j)).collect();
        path.poly(&points)
    }

    fn polyline(&self, path: PathData, cells: &[(f64, f64)]) -> PathData {
        let points: Vec<(f64, f64)> = cells.iter().map(|&(i, j)| self.at(i, j)).collect();
        path.polyline(&points)
    }
}

/// The single-path form of a button: its top, stroked layer.
fn outline_of(button: ShapeGeometry) -> PathData {
    button.into_iter().last().map(|part| part.path).unwrap_or_default()
}

fn blank(g: &Guides) -> PathData {
    fallback_rect(g.w(), g.h())
}

/// Face, icon, then the outline of both with any `details` stroked on top.
fn button(g: &Guides, icon: PathData, details: PathData) -> ShapeGeometry {
    let outline = fallback_rect(g.w(), g.h()).append(icon.clone()).append(details);
    ShapeGeometry::new(fallback_rect(g.w(), g.h()), FillModifier::Norm, false)
        .layer(icon, FillModifier::Darken, false)
        .layer(outline, FillModifier::None, true)
}

fn icon_button(g: &Guides, cells: &[&[(f64, f64)]]) -> ShapeGeometry {
    let icon = Icon::new(g);
    let path = cells.iter().fold(PathData::new(), |path, c| icon.poly(path, c));
    button(g, path, PathData::new())
}

fn back_previous(g: &Guides) -> ShapeGeometry {
    icon_button(g, &[&[(0.0, 4.0), (8.0, 0.0), (8.0, 8.0)]])
}

fn forward_next(g: &Guides) -> ShapeGeometry {
    icon_button(g, &[&[(8.0, 4.0), (0.0, 8.0), (0.0, 0.0)]])
}

fn beginning(g: &Guides) -> ShapeGeometry {
    icon_button(
        g,
        &[
            &[(0.0, 0.0), (2.0, 0.0), (2.0, 8.0), (0.0, 8.0)],
            &[(2.0, 4.0), (8.0, 0.0), (8.0, 8.0)],
        ],
    )
}

fn end(g: &Guides) -> ShapeGeometry {
    icon_button(
        g,
        &[
            &[(0.0, 0.0), (6.0, 4.0), (0.0, 8.0)],
            &[(6.0, 0.0), (8.0, 0.0), (8.0, 8.0), (6.0, 8.0)],
        ],
    )
}

fn home(g: &Guides) -> ShapeGeometry {
    let icon = Icon::new(g);
    let house = icon.poly(
        PathData::new(),
        &[
            (4.0, 0.0),
            (8.0, 4.0),
            (7.0, 4.0),
            (7.0, 8.0),
            (1.0, 8.0),
            (1.0, 4.0),
            (0.0, 4.0),
        ],
    );
    let door = icon.polyline(PathData::new(), &[(3.5, 8.0), (3.5, 5.5), (4.5, 5.5), (4.5, 8.0)]);
    button(g, house, door)
}

fn document(g: &Guides) -> ShapeGeometry {
    let icon = Icon::new(g);
    let page = icon.poly(PathData::new(), &[(1.0, 0.0), (5.0, 0.0), (7.0, 2.0), (7.0, 8.0), (1.0, 8.0)]);
    let fold = icon.polyline(PathData::new(), &[(5.0, 0.0), (5.0, 2.0), (7.0, 2.0)]);
    button(g, page, fold)
}

/// Question mark: a hooked band ending in a stem, and a dot below.
fn question_mark(g: &Guides) -> PathData {
    let icon = Icon::new(g);
    let dx2 = icon.q * 4.0;
    let (hc, bottom) = (g.hc(), icon.y0 + 2.0 * dx2);
    let r1 = dx2 / 2.0;
    let t = dx2 / 4.0;
    let cy = icon.y0 + r1;
    let stem = bottom - 2.5 * t;
    PathData::new()
        .arc(hc, cy, r1, r1, 180.0, 270.0)
        .l(hc, stem)
        .l(hc - t, stem)
        .l(hc - t, cy + r1 - t)
        .arc(hc, cy, r1 - t, r1 - t, 90.0, -270.0)
        .z()
        .ellipse(hc - t / 2.0, bottom - t, 0.75 * t, 0.75 * t)
}

fn help(g: &Guides) -> ShapeGeometry {
    button(g, question_mark(g), PathData::new())
}

/// A disc with a lighter `i` on it.
fn information(g: &Guides) -> ShapeGeometry {
    let icon = Icon::new(g);
    let dx2 = icon.q * 4.0;
    let (hc, vc) = (g.hc(), g.vc());
    let disc = PathData::new().ellipse(hc, vc, dx2, dx2);
    let glyph = PathData::new()
        .ellipse(hc, vc - 0.65 * dx2, 0.15 * dx2, 0.15 * dx2)
        .poly(&[
            (hc - 0.12 * dx2, vc - 0.3 * dx2),
            (hc + 0.12 * dx2, vc - 0.3 * dx2),
            (hc + 0.12 * dx2, vc + 0.7 * dx2),
            (hc - 0.12 * dx2, vc + 0.7 * dx2),
        ]);
    let outline = fallback_rect(g.w(), g.h()).append(disc.clone()).append(glyph.clone());
    ShapeGeometry::new(fallback_rect(g.w(), g.h()), FillModifier::Norm, false)
        .layer(disc, FillModifier::Darken, false)
        .layer(glyph, FillModifier::Lighten, false)
        .layer(outline, FillModifier::None, true)
}

fn movie(g: &Guides) -> ShapeGeometry {
    icon_button(
        g,
        &[
            &[(0.0, 2.0), (5.0, 2.0), (5.0, 6.0), (0.0, 6.0)],
            &[(5.0, 4.0), (8.0, 2.0), (8.0, 6.0)],
        ],
    )
}

/// U-turn arrow with its head on the left stem, pointing up.
fn return_button(g: &Guides) -> ShapeGeometry {
    icon_button(
        g,
        &[&[
            (2.0, 0.0),
            (4.0, 3.0),
            (3.0, 3.0),
            (3.0, 6.0),
            (6.0, 6.0),
            (6.0, 2.0),
            (8.0, 2.0),
            (8.0, 8.0),
            (1.0, 8.0),
            (1.0, 3.0),
            (0.0, 3.0),
        ]],
    )
}

fn sound(g: &Guides) -> ShapeGeometry {
    let icon = Icon::new(g);
    let speaker = icon.poly(
        PathData::new(),
        &[(0.0, 3.0), (2.0, 3.0), (5.0, 0.0), (5.0, 8.0), (2.0, 5.0), (0.0, 5.0)],
    );
    let waves = [[(6.0, 2.0), (8.0, 0.0)], [(6.0, 4.0), (8.0, 4.0)], [(6.0, 6.0), (8.0, 8.0)]]
        .iter()
        .fold(PathData::new(), |path, w| icon.polyline(path, w));
    button(g, speaker, waves)
}

#[cfg(test)]
mod tests {
    use crate::shape::FillModifier;
    use crate::{AdjustmentSet, get_multi_path, get_path};

    const BUTTONS: [&str; 11] = [
        "actionButtonBackPrevious",
        "actionButtonForwardNext",
        "actionButtonBeginning",
        "actionButtonEnd",
        "actionButtonHome",
        "actionButtonDocument",
        "actionButtonHelp",
        "actionButtonInformation",
        "actionButtonMovie",
        "actionButtonReturn",
        "actionButtonSound",
    ];

    #[test]
    fn blank_button_is_a_plain_rect() {
        assert_eq!(
            get_path("actionButtonBlank", 120.0, 80.0, &AdjustmentSet::new()),
            "M0,0 L120,0 L120,80 L0,80 Z"
        );
        assert!(get_multi_path("actionButtonBlank", 120.0, 80.0, &AdjustmentSet::new()).is_none());
    }

    #[test]
    fn single_path_is_the_outline_layer() {
        assert_eq!(
            get_path("actionButtonForwardNext", 100.0, 100.0, &AdjustmentSet::new()),
            "M0,0 L100,0 L100,100 L0,100 Z M87.5,50 L12.5,87.5 L12.5,12.5 Z"
        );
    }

    #[test]
    fn buttons_paint_face_icon_outline() {
        for name in BUTTONS {
            let geo = get_multi_path(name, 120.0, 80.0, &AdjustmentSet::new()).unwrap();
            let parts: Vec<_> = geo.iter().map(|p| (p.fill, p.stroke)).collect();
            assert_eq!(parts.first(), Some(&(FillModifier::Norm, false)), "{name}");
            assert_eq!(parts.last(), Some(&(FillModifier::None, true)), "{name}");
            assert_eq!(parts[1], (FillModifier::Darken, false), "{name}");
        }
    }

    #[test]
    fn information_has_a_light_glyph() {
        let geo = get_multi_path("actionButtonInformation", 100.0, 100.0, &AdjustmentSet::new()).unwrap();
        assert_eq!(geo.len(), 4);
        assert_eq!(geo.parts()[2].fill, FillModifier::Lighten);
    }

    #[test]
    fn back_icon_in_centered_square() {
        let geo = get_multi_path("actionButtonBackPrevious", 100.0, 100.0, &AdjustmentSet::new()).unwrap();
        assert_eq!(geo.parts()[1].d(), "M12.5,50 L87.5,12.5 L87.5,87.5 Z");
    }
}
