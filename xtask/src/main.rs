use camino::Utf8PathBuf;
use prstgeom::{AdjustmentSet, Catalog, FillModifier, Rgb, ShapeGeometry, get_multi_path, get_path};
use rayon::prelude::*;
use std::fs;

/// Base fill every card is painted with
const BASE_FILL: Rgb = Rgb::new(0x44, 0x72, 0xc4);
const STROKE: &str = "#1f3864";

/// Frame sizes each preset is drawn at
const FRAMES: [(f64, f64); 3] = [(120.0, 120.0), (160.0, 90.0), (80.0, 140.0)];

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo xtask <command>");
        eprintln!("Commands:");
        eprintln!("  gallery [OUT]   Write an HTML contact sheet of every preset (default: gallery.html)");
        std::process::exit(1);
    }

    match args[1].as_str() {
        "gallery" => gallery(args.get(2).map(Utf8PathBuf::from)),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            std::process::exit(1);
        }
    }
}

struct Card {
    name: &'static str,
    composite: bool,
    svgs: Vec<String>,
}

fn gallery(out: Option<Utf8PathBuf>) {
    let manifest_dir = Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let output_path = out.unwrap_or_else(|| manifest_dir.join("../gallery.html"));

    let names = Catalog::standard().names();
    eprintln!("Rendering {} presets...", names.len());

    let cards: Vec<Card> = names
        .par_iter()
        .map(|&name| {
            let none = AdjustmentSet::new();
            let svgs = FRAMES
                .iter()
                .map(|&(w, h)| match get_multi_path(name, w, h, &none) {
                    Some(geo) => layered_svg(&geo, w, h),
                    None => single_svg(&get_path(name, w, h, &none), w, h),
                })
                .collect();
            Card {
                name,
                composite: Catalog::standard().lookup(name).is_some_and(|def| def.has_composite()),
                svgs,
            }
        })
        .collect();

    let composites = cards.iter().filter(|c| c.composite).count();

    let mut html = String::new();
    html.push_str(&format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Preset shape gallery</title>
    <style>
        * {{
            box-sizing: border-box;
        }}
        body {{
            font-family: system-ui, sans-serif;
            margin: 0;
            padding: 24px;
            background: #eee;
            color: #333;
        }}
        h1 {{
            font-weight: 600;
            font-size: 20px;
            margin: 0 0 8px 0;
        }}
        .summary {{
            font-size: 13px;
            color: #666;
            margin-bottom: 24px;
        }}
        .grid {{
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
            gap: 16px;
        }}
        .card {{
            background: white;
            border-radius: 8px;
            box-shadow: 0 1px 3px rgba(0,0,0,0.08);
            overflow: hidden;
        }}
        .card-header {{
            display: flex;
            justify-content: space-between;
            padding: 8px 12px;
            border-bottom: 1px solid #eee;
            background: #fafafa;
            font-size: 13px;
            font-weight: 600;
        }}
        .badge {{
            font-size: 11px;
            padding: 2px 6px;
            border-radius: 4px;
            background: #eff6ff;
            color: #1d4ed8;
        }}
        .frames {{
            display: flex;
            align-items: center;
            justify-content: space-around;
            padding: 12px;
        }}
        .swatch {{
            display: inline-block;
            padding: 2px 8px;
            border-radius: 4px;
            color: white;
            font-size: 11px;
        }}
        .frames svg {{
            overflow: visible;
        }}
    </style>
</head>
<body>
    <h1>Preset shape gallery</h1>
    <div class="summary">{total} presets, {composites} with layered geometry</div>
    <div class="summary">{legend}</div>
    <div class="grid">
"#,
        total = cards.len(),
        composites = composites,
        legend = fill_legend(),
    ));

    for card in &cards {
        html.push_str(&format!(
            "        <div class=\"card\">\n            <div class=\"card-header\"><span>{}</span>{}</div>\n            <div class=\"frames\">\n",
            html_escape(card.name),
            if card.composite { "<span class=\"badge\">layers</span>" } else { "" }
        ));
        for svg in &card.svgs {
            html.push_str("                ");
            html.push_str(svg);
            html.push('\n');
        }
        html.push_str("            </div>\n        </div>\n");
    }

    html.push_str("    </div>\n</body>\n</html>\n");

    fs::write(&output_path, html).expect("Failed to write gallery");
    eprintln!("Wrote {}", output_path);
}

fn svg_open(w: f64, h: f64) -> String {
    format!(r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#)
}

fn single_svg(d: &str, w: f64, h: f64) -> String {
    format!(
        r#"{}<path d="{}" fill="{}" fill-rule="evenodd" stroke="{STROKE}" stroke-width="1.5"/></svg>"#,
        svg_open(w, h),
        d,
        BASE_FILL.to_hex()
    )
}

fn layered_svg(geo: &ShapeGeometry, w: f64, h: f64) -> String {
    let mut svg = svg_open(w, h);
    for part in geo.iter() {
        let fill = part.fill.apply(BASE_FILL).map_or_else(|| "none".to_string(), Rgb::to_hex);
        let stroke = if part.stroke {
            format!(r#"stroke="{STROKE}" stroke-width="1.5""#)
        } else {
            r#"stroke="none""#.to_string()
        };
        svg.push_str(&format!(
            r#"<path d="{}" fill="{}" fill-rule="evenodd" {} data-fill="{}"/>"#,
            part.d(),
            fill,
            stroke,
            part.fill
        ));
    }
    svg.push_str("</svg>");
    svg
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Swatches of the base fill under each modifier
fn fill_legend() -> String {
    FillModifier::ALL
        .iter()
        .filter_map(|m| m.apply(BASE_FILL).map(|rgb| (m, rgb)))
        .map(|(m, rgb)| format!(r#"<span class="swatch" style="background:{}">{}</span>"#, rgb.to_hex(), m))
        .collect::<Vec<_>>()
        .join(" ")
}
