// File: crates/speedup-core/tests/rgba.rs
// Purpose: Validate RGBA buffer shape, a few pixels and render idempotence.

mod common;

use speedup_core::{ChartRenderer, RenderOptions};

fn renderer() -> ChartRenderer {
    let mut opts = RenderOptions::default();
    opts.width = 400;
    opts.height = 300;
    opts.draw_labels = false; // avoid font variance
    ChartRenderer::new(opts)
}

#[test]
fn render_rgba8_buffer() {
    let (px, w, h, stride) = renderer().render_to_rgba8(&common::ybwc_log2()).expect("rgba render");
    assert_eq!((w, h), (400, 300));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left pixel is the opaque white figure background (RGBA)
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
}

#[test]
fn rendering_is_idempotent() {
    let r = renderer();
    let spec = common::nested_linear();
    let (a, ..) = r.render_to_rgba8(&spec).expect("first render");
    let (b, ..) = r.render_to_rgba8(&spec).expect("second render");
    assert!(a == b, "two renders of the same spec differ");
}

#[test]
fn series_pixels_use_palette_colours() {
    let spec = common::ybwc_log2();
    let r = renderer();
    let (px, w, ..) = r.render_to_rgba8(&spec).expect("rgba render");

    let frame = speedup_core::Frame::compute(&spec, r.options());
    let (x, y) = frame.marker_positions(&spec)[3];
    let i = (y.round() as usize * w as usize + x.round() as usize) * 4;
    // first palette entry, drawn by the marker at the 8-thread point
    assert_eq!(&px[i..i + 3], &[0x1f, 0x77, 0xb4]);
}
