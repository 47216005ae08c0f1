// File: crates/speedup-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke tests writing PNG and SVG.

mod common;

use speedup_core::{ChartRenderer, RenderOptions};

#[test]
fn render_smoke_png() {
    let spec = common::ybwc_log2();
    let renderer = ChartRenderer::new(RenderOptions::default());

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    renderer.render_to_png(&spec, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = renderer.render_to_png_bytes(&spec).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_smoke_svg() {
    let spec = common::nested_linear();
    let renderer = ChartRenderer::new(RenderOptions::default());

    let bytes = renderer.render_to_svg_bytes(&spec).expect("render svg");
    let text = String::from_utf8(bytes).expect("svg is utf-8");
    assert!(text.contains("<svg"), "should contain an svg root");

    let out = std::path::PathBuf::from("target/test_out/smoke.svg");
    renderer.render_to_svg(&spec, &out).expect("write svg");
    assert!(out.exists());
}
