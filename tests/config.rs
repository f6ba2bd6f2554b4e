use std::io::Write;

use blockgraph::color::Rgba;
use blockgraph::config::EditorConfig;
use blockgraph::editor::GraphSurface;
use blockgraph::geometry::Pos;
use camino::Utf8Path;

fn write_config(body: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(body.as_bytes()).expect("write config");
    file
}

fn load(file: &tempfile::NamedTempFile) -> anyhow::Result<EditorConfig> {
    let path = Utf8Path::from_path(file.path()).expect("utf-8 temp path");
    EditorConfig::load(path)
}

#[test]
fn partial_file_overrides_only_given_fields() {
    let file = write_config(r##"{ "block": { "width": 240, "text": "Step", "color": "#ffeeaa" }, "caret_blink_ms": 400 }"##);
    let cfg = load(&file).unwrap();
    assert_eq!(cfg.block.width, 240.0);
    assert_eq!(cfg.block.height, 120.0);
    assert_eq!(cfg.block.text, "Step");
    assert_eq!(cfg.block.color, Rgba::rgb(0xff, 0xee, 0xaa));
    assert_eq!(cfg.caret_blink_ms, 400);
    assert_eq!(cfg.port_snap_margin, 9.0);

    let mut s = GraphSurface::headless(cfg);
    let id = s.create_default_block(Pos::new(50.0, 50.0));
    let b = s.block(id).unwrap();
    assert_eq!(b.rect.w, 240.0);
    assert_eq!(b.text, "Step");
}

#[test]
fn invalid_values_fall_back_to_defaults() {
    let file = write_config(r#"{ "port_radius": -1, "caret_blink_ms": 0, "block": { "height": 0 } }"#);
    let cfg = load(&file).unwrap();
    let defaults = EditorConfig::default();
    assert_eq!(cfg.port_radius, defaults.port_radius);
    assert_eq!(cfg.caret_blink_ms, defaults.caret_blink_ms);
    assert_eq!(cfg.block.height, defaults.block.height);
}

#[test]
fn malformed_file_reports_path() {
    let file = write_config("{ not json");
    let err = load(&file).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to parse"));
}

#[test]
fn missing_file_is_an_error() {
    assert!(EditorConfig::load(Utf8Path::new("/nonexistent/blockgraph.json")).is_err());
}
