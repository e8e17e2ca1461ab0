//! Whole-catalog properties: every preset at every boundary size produces a
//! well-formed path, the same inputs give the same output, and composite
//! layer orders stay fixed.
//!
//! Run with `RUST_LOG=prstgeom=trace cargo test --features tracing -- --nocapture`
//! to see the fallbacks being taken.

use std::sync::Once;

use proptest::prelude::*;
use prstgeom::{AdjustmentSet, BoundingBox, Catalog, FillModifier, get_multi_path, get_path};
use regex_lite::Regex;

const SIZES: [(f64, f64); 5] = [(0.0, 0.0), (1.0, 1.0), (80.0, 100.0), (400.0, 280.0), (5000.0, 5000.0)];

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

fn names() -> Vec<&'static str> {
    Catalog::standard().names()
}

/// Check the generator output itself, before the catalog swaps invalid
/// geometry for the frame rectangle.
fn raw_geometry_is_valid(name: &str, w: f64, h: f64, adj: &AdjustmentSet) -> Result<(), String> {
    let def = Catalog::standard().lookup(name).ok_or_else(|| format!("{name} is not registered"))?;
    let bbox = BoundingBox::new(w, h);
    def.build_path(bbox, adj)
        .validate()
        .map_err(|e| format!("{name} {w}x{h} path: {e}"))?;
    if let Some(geo) = def.build_composite(bbox, adj) {
        geo.validate().map_err(|e| format!("{name} {w}x{h} layers: {e}"))?;
    }
    Ok(())
}

fn assert_well_formed(name: &str, w: f64, h: f64, d: &str) {
    assert!(!d.is_empty(), "{name} {w}x{h}: empty path");
    assert!(d.starts_with('M'), "{name} {w}x{h}: {d}");
    assert!(!d.contains("NaN") && !d.contains("Infinity"), "{name} {w}x{h}: {d}");
}

#[test]
fn every_preset_at_every_boundary_size() {
    init_tracing();
    let none = AdjustmentSet::new();
    for name in names() {
        for (w, h) in SIZES {
            if let Err(err) = raw_geometry_is_valid(name, w, h, &none) {
                panic!("{err}");
            }

            let d = get_path(name, w, h, &none);
            assert_well_formed(name, w, h, &d);

            if let Some(geo) = get_multi_path(name, w, h, &none) {
                assert!(geo.len() >= 2, "{name}: composite with {} layers", geo.len());
                for part in geo.iter() {
                    assert_well_formed(name, w, h, &part.d());
                }
            }
        }
    }
}

#[test]
fn raw_sweep_sees_extreme_adjustments() {
    for name in names() {
        for value in [-25_000_000.0, -1.0, 0.0, 50_000.0, 100_000.0, 25_000_000.0] {
            let adj = ["adj", "adj1", "adj2", "adj3", "adj4", "adj5", "adj6", "adj7", "adj8"]
                .into_iter()
                .fold(AdjustmentSet::new(), |adj, key| adj.with(key, value));
            for (w, h) in SIZES {
                if let Err(err) = raw_geometry_is_valid(name, w, h, &adj) {
                    panic!("{err}");
                }
            }
        }
    }
}

#[test]
fn output_is_pure() {
    let adj = AdjustmentSet::new().with("adj", 20000.0).with("adj1", 30000.0);
    for name in names() {
        let first = get_path(name, 321.0, 123.0, &adj);
        let second = get_path(name, 321.0, 123.0, &adj);
        assert_eq!(first, second, "{name}");
        assert_eq!(
            get_multi_path(name, 321.0, 123.0, &adj),
            get_multi_path(name, 321.0, 123.0, &adj),
            "{name}"
        );
    }
}

#[test]
fn catalog_is_large_and_case_insensitive() {
    let catalog = Catalog::standard();
    assert!(catalog.len() >= 200, "only {} presets", catalog.len());
    let none = AdjustmentSet::new();
    assert_eq!(get_path("ROUNDRECT", 90.0, 60.0, &none), get_path("roundRect", 90.0, 60.0, &none));
    assert_eq!(get_path("  flowchartdecision ", 90.0, 60.0, &none), get_path("flowChartDecision", 90.0, 60.0, &none));
}

#[test]
fn gears_emit_three_lines_per_tooth() {
    let lines = Regex::new(r"L-?[\d.]+,-?[\d.]+").unwrap();
    let arcs = Regex::new(r"A[\d.]+,[\d.]+ 0 [01],[01]").unwrap();
    for (name, teeth) in [("gear6", 6), ("gear9", 9)] {
        for (w, h) in SIZES {
            let d = get_path(name, w, h, &AdjustmentSet::new());
            assert_eq!(lines.find_iter(&d).count(), 3 * teeth, "{name} {w}x{h}: {d}");
            assert_eq!(arcs.find_iter(&d).count(), teeth, "{name} {w}x{h}: {d}");
        }
    }
}

/// End point of the first arc in `d`.
fn first_arc_end(d: &str) -> (f64, f64) {
    let arc = Regex::new(r"A[\d.]+,[\d.]+ 0 [01],[01] (-?[\d.]+),(-?[\d.]+)").unwrap();
    let caps = arc.captures(d).unwrap_or_else(|| panic!("no arc in {d}"));
    (caps[1].parse().unwrap(), caps[2].parse().unwrap())
}

#[test]
fn arc_angles_are_corrected_for_ellipses() {
    let (w, h) = (400.0_f64, 200.0_f64);
    let (rx, ry) = (w / 2.0, h / 2.0);
    let v = 45.0_f64.to_radians();
    let t = (v.sin() / ry).atan2(v.cos() / rx);
    let corrected = (rx + rx * t.cos(), ry + ry * t.sin());
    let naive = (rx + rx * v.cos(), ry + ry * v.sin());

    let adj = AdjustmentSet::new().with("adj1", 0.0).with("adj2", 2_700_000.0);
    for name in ["pie", "chord", "arc"] {
        let (x, y) = first_arc_end(&get_path(name, w, h, &adj));
        assert!((x - corrected.0).abs() < 0.1 && (y - corrected.1).abs() < 0.1, "{name}: ({x}, {y})");
        assert!((x - naive.0).hypot(y - naive.1) > 10.0, "{name}: ({x}, {y})");
    }
}

#[test]
fn scroll_layers_are_body_shadow_outline() {
    for name in ["verticalScroll", "horizontalScroll"] {
        let geo = get_multi_path(name, 400.0, 280.0, &AdjustmentSet::new()).unwrap();
        let order: Vec<_> = geo.iter().map(|p| (p.fill, p.stroke)).collect();
        assert_eq!(
            order,
            [
                (FillModifier::Norm, false),
                (FillModifier::DarkenLess, false),
                (FillModifier::None, true),
            ]
        );
    }
}

#[test]
fn chart_x_frame_and_diagonals() {
    let geo = get_multi_path("chartX", 400.0, 280.0, &AdjustmentSet::new()).unwrap();
    insta::assert_snapshot!(geo.parts()[0].d(), @"M0,0 L400,0 L400,280 L0,280 Z");
    insta::assert_snapshot!(geo.parts()[1].d(), @"M0,0 L400,280 M400,0 L0,280");
    assert_eq!(geo.parts()[1].fill, FillModifier::None);
    assert!(geo.parts()[1].stroke);
}

#[test]
fn single_path_scenarios() {
    let none = AdjustmentSet::new();
    insta::assert_snapshot!(get_path("rect", 100.0, 50.0, &none), @"M0,0 L100,0 L100,50 L0,50 Z");
    insta::assert_snapshot!(get_path("line", 200.0, 100.0, &none), @"M0,0 L200,100");
    insta::assert_snapshot!(get_path("unknownThing", 64.0, 48.0, &none), @"M0,0 L64,0 L64,48 L0,48 Z");
}

#[test]
fn composites_without_layers_are_none() {
    for name in ["rect", "line", "rightArrow", "star5", "notAPreset"] {
        assert!(get_multi_path(name, 100.0, 100.0, &AdjustmentSet::new()).is_none(), "{name}");
    }
}

proptest! {
    #[test]
    fn prop_any_size_and_adjustment_is_finite(
        name in prop::sample::select(names()),
        w in 0.0f64..6000.0,
        h in 0.0f64..6000.0,
        adj in -200_000.0f64..25_000_000.0,
        adj1 in -200_000.0f64..25_000_000.0,
        adj2 in -200_000.0f64..25_000_000.0,
    ) {
        let raw = AdjustmentSet::new()
            .with("adj", adj)
            .with("adj1", adj1)
            .with("adj2", adj2)
            .with("adj3", adj)
            .with("adj4", adj1)
            .with("adj5", adj2);
        let raw_check = raw_geometry_is_valid(name, w, h, &raw);
        prop_assert!(raw_check.is_ok(), "{:?}", raw_check);

        let d = get_path(name, w, h, &raw);
        prop_assert!(d.starts_with('M'), "{} {}x{}: {}", name, w, h, d);
        prop_assert!(!d.contains("NaN") && !d.contains("Infinity"), "{} {}x{}: {}", name, w, h, d);
    }

    #[test]
    fn prop_unknown_presets_fill_the_frame(w in 0.0f64..10_000.0, h in 0.0f64..10_000.0) {
        let d = get_path("definitelyNotAPreset", w, h, &AdjustmentSet::new());
        prop_assert_eq!(d, format!("M0,0 L{w},0 L{w},{h} L0,{h} Z"));
    }
}
