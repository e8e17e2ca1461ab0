//! Data-driven checks of preset geometry against hand-verified paths.
//!
//! Each `tests/fixtures/*.case` file holds `key: value` header lines, a `---`
//! separator and the expected single-path output:
//!
//! ```text
//! preset: rightArrow
//! size: 200 100
//! adj: adj1 50000
//! layers: norm, none+stroke
//! ---
//! M0,25 L150,25 L150,0 L200,50 L150,100 L150,75 L0,75 Z
//! ```
//!
//! `adj` may repeat. `layers` lists the composite parts as `fill` or
//! `fill+stroke`; without it the preset must have no composite form.

use camino::Utf8Path;
use prstgeom::{AdjustmentSet, FillModifier, get_multi_path, get_path};
use regex_lite::Regex;

/// Numbers are printed with six significant figures
const FLOAT_TOLERANCE: f64 = 0.01;

/// A single path command (M, L, C, Q, A, Z)
#[derive(Debug, Clone)]
struct PathCommand {
    cmd: char,
    args: Vec<f64>,
}

fn parse_path(d: &str) -> Result<Vec<PathCommand>, String> {
    let commands = Regex::new(r"[MLCQAZ][^MLCQAZ]*").map_err(|e| e.to_string())?;
    commands
        .find_iter(d)
        .map(|m| {
            let text = m.as_str();
            let cmd = text.chars().next().ok_or("empty command")?;
            let args = text[1..]
                .split([' ', ','])
                .filter(|s| !s.is_empty())
                .map(|s| s.parse::<f64>().map_err(|e| format!("bad number {s:?} in {text:?}: {e}")))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(PathCommand { cmd, args })
        })
        .collect()
}

/// Describe the first difference between two paths, if any.
fn compare_paths(expected: &str, actual: &str) -> Result<Option<String>, String> {
    let want = parse_path(expected)?;
    let got = parse_path(actual)?;
    if want.len() != got.len() {
        return Ok(Some(format!("{} commands expected, got {}", want.len(), got.len())));
    }
    for (i, (w, g)) in want.iter().zip(&got).enumerate() {
        if w.cmd != g.cmd || w.args.len() != g.args.len() {
            return Ok(Some(format!("command {i}: expected {w:?}, got {g:?}")));
        }
        if let Some((a, b)) = w.args.iter().zip(&g.args).find(|(a, b)| (*a - *b).abs() > FLOAT_TOLERANCE) {
            return Ok(Some(format!("command {i} ({}): expected {a}, got {b}", w.cmd)));
        }
    }
    Ok(None)
}

/// Format a colored inline diff using dissimilar
fn format_inline_diff(expected: &str, actual: &str) -> String {
    use dissimilar::Chunk;

    let mut output = String::from("\n=== Inline Diff (expected vs actual) ===\n");
    for chunk in dissimilar::diff(expected, actual) {
        match chunk {
            Chunk::Equal(s) => output.push_str(s),
            Chunk::Delete(s) => {
                output.push_str("\x1b[31m[-");
                output.push_str(s);
                output.push_str("-]\x1b[0m");
            }
            Chunk::Insert(s) => {
                output.push_str("\x1b[32m[+");
                output.push_str(s);
                output.push_str("+]\x1b[0m");
            }
        }
    }
    output
}

#[derive(Debug, Default)]
struct Case {
    preset: String,
    size: (f64, f64),
    adjustments: AdjustmentSet,
    layers: Option<Vec<(FillModifier, bool)>>,
    expected: String,
}

fn parse_case(source: &str) -> Result<Case, String> {
    let (header, expected) = source.split_once("\n---\n").ok_or("missing `---` separator")?;
    let mut case = Case {
        expected: expected.trim().to_string(),
        ..Case::default()
    };

    for line in header.lines().map(str::trim).filter(|l| !l.is_empty() && !l.starts_with('#')) {
        let (key, value) = line.split_once(':').ok_or_else(|| format!("bad header line {line:?}"))?;
        let value = value.trim();
        match key.trim() {
            "preset" => case.preset = value.to_string(),
            "size" => {
                let (w, h) = value.split_once(' ').ok_or("size needs width and height")?;
                case.size = (
                    w.trim().parse().map_err(|e| format!("width: {e}"))?,
                    h.trim().parse().map_err(|e| format!("height: {e}"))?,
                );
            }
            "adj" => {
                let (name, v) = value.split_once(' ').ok_or("adj needs a name and a value")?;
                case.adjustments.insert(name, v.trim().parse().map_err(|e| format!("adj {name}: {e}"))?);
            }
            "layers" => {
                let layers = value
                    .split(',')
                    .map(|layer| {
                        let layer = layer.trim();
                        let (fill, stroke) = match layer.strip_suffix("+stroke") {
                            Some(fill) => (fill, true),
                            None => (layer, false),
                        };
                        Ok((fill.parse::<FillModifier>()?, stroke))
                    })
                    .collect::<Result<Vec<_>, String>>()?;
                case.layers = Some(layers);
            }
            other => return Err(format!("unknown header key {other:?}")),
        }
    }

    if case.preset.is_empty() {
        return Err("missing `preset`".to_string());
    }
    Ok(case)
}

fn test_preset_case(path: &Utf8Path) -> datatest_stable::Result<()> {
    let source = std::fs::read_to_string(path)?;
    let case = parse_case(&source.replace("\r\n", "\n"))?;
    let (w, h) = case.size;

    let actual = get_path(&case.preset, w, h, &case.adjustments);
    if let Some(diff) = compare_paths(&case.expected, &actual)? {
        panic!(
            "path mismatch for {path} ({}):\n{diff}\n{}",
            case.preset,
            format_inline_diff(&case.expected, &actual)
        );
    }

    let composite = get_multi_path(&case.preset, w, h, &case.adjustments);
    match (&case.layers, composite) {
        (None, None) => {}
        (Some(want), Some(geo)) => {
            let got: Vec<_> = geo.iter().map(|p| (p.fill, p.stroke)).collect();
            assert_eq!(&got, want, "layers of {path}");
        }
        (None, Some(geo)) => panic!("{path}: unexpected composite with {} layers", geo.len()),
        (Some(_), None) => panic!("{path}: expected a composite"),
    }

    Ok(())
}

datatest_stable::harness! {
    { test = test_preset_case, root = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures"), pattern = r"\.case$" },
}
