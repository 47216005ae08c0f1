// File: crates/speedup-core/tests/legend.rs
// Purpose: Legend sizing, corner choice and row layout.

mod common;

use speedup_core::geometry::RectI32;
use speedup_core::{ChartRenderer, Corner, Frame, LegendLayout, RenderOptions};

fn plot() -> RectI32 {
    RectI32::from_ltrb(0, 0, 400, 300)
}

#[test]
fn empty_plot_prefers_upper_right() {
    let legend = LegendLayout::compute(plot(), &[50.0, 80.0], 12.0, &[]);
    assert_eq!(legend.corner, Corner::UpperRight);
    // 8 + 28 + 8 + 80 + 8 wide, 8 + 2 * 18 + 8 tall
    assert_eq!(legend.rect, RectI32::from_ltwh(258, 10, 132, 52));
}

#[test]
fn moves_away_from_markers() {
    let markers = [(300.0, 30.0), (350.0, 40.0)];
    let legend = LegendLayout::compute(plot(), &[50.0, 80.0], 12.0, &markers);
    assert_eq!(legend.corner, Corner::UpperLeft);
    assert_eq!(legend.rect.left, 10);
}

#[test]
fn picks_corner_hiding_fewest_markers() {
    let markers = [
        (300.0, 30.0), (350.0, 40.0), // upper right
        (20.0, 20.0),                 // upper left
        (20.0, 280.0),                // lower left
    ];
    let legend = LegendLayout::compute(plot(), &[40.0], 12.0, &markers);
    assert_eq!(legend.corner, Corner::LowerRight);
}

#[test]
fn ties_follow_preference_order() {
    let markers = [(380.0, 20.0), (20.0, 20.0), (20.0, 280.0), (380.0, 280.0)];
    let legend = LegendLayout::compute(plot(), &[40.0], 12.0, &markers);
    assert_eq!(legend.corner, Corner::UpperRight);
}

#[test]
fn rows_stack_inside_the_box() {
    let legend = LegendLayout::compute(plot(), &[50.0, 80.0], 12.0, &[]);
    assert_eq!(legend.rows.len(), 2);
    assert_eq!(legend.rows[0].center_y, 27.0);
    assert_eq!(legend.rows[1].center_y, 45.0);
    for row in &legend.rows {
        assert!(legend.rect.contains(row.swatch_from.0, row.center_y));
        assert!(row.text_x > row.swatch_to.0);
    }
}

#[test]
fn legend_has_one_entry_per_series() {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let renderer = ChartRenderer::new(opts);

    let nested = common::nested_linear();
    let frame = Frame::compute(&nested, renderer.options());
    assert_eq!(renderer.legend_layout(&nested, &frame).rows.len(), 5);

    let single = common::ybwc_log2();
    let frame = Frame::compute(&single, renderer.options());
    assert_eq!(renderer.legend_layout(&single, &frame).rows.len(), 1);
}

#[test]
fn legend_geometry_ignores_draw_labels() {
    let labeled = ChartRenderer::new(RenderOptions::default());
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let bare = ChartRenderer::new(opts);

    for spec in [common::nested_linear(), common::ybwc_log2()] {
        let frame = Frame::compute(&spec, labeled.options());
        let with_text = labeled.legend_layout(&spec, &frame);
        let without_text = bare.legend_layout(&spec, &frame);
        assert_eq!(with_text.rect, without_text.rect);
        assert_eq!(with_text.corner, without_text.corner);
        assert_eq!(with_text.rows, without_text.rows);
    }
}
