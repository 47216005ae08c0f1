// File: crates/speedup-core/src/chart.rs
// Summary: ChartRenderer and the headless PNG/SVG/RGBA pipeline using Skia CPU raster and SVG canvases.

use std::path::Path;

use anyhow::{Context, Result};
use skia_safe as skia;

use crate::frame::Frame;
use crate::legend::LegendLayout;
use crate::spec::ChartSpec;
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, LABEL_SIZE, LINE_WIDTH, MARKER_RADIUS, TICK_SIZE, TITLE_SIZE, WIDTH};

/// Length of the tick marks outside the plot frame.
const TICK_LEN: f32 = 5.0;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Turn off to skip all text; geometry stays the same.
    pub draw_labels: bool,
    pub line_width: f32,
    pub marker_radius: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
            line_width: LINE_WIDTH,
            marker_radius: MARKER_RADIUS,
        }
    }
}

/// Draws a [`ChartSpec`] as a marked multi-line chart with grid, legend and labels.
///
/// Holds only options and the font collection, so one renderer can be reused
/// for any number of specs.
pub struct ChartRenderer {
    opts: RenderOptions,
    shaper: TextShaper,
}

impl ChartRenderer {
    pub fn new(opts: RenderOptions) -> Self {
        Self { opts, shaper: TextShaper::new() }
    }

    pub fn options(&self) -> &RenderOptions { &self.opts }

    /// Change the surface size, e.g. to follow a resized window.
    pub fn resize(&mut self, width: i32, height: i32) {
        self.opts.width = width;
        self.opts.height = height;
    }

    /// Render to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, spec: &ChartSpec, output_png_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(spec)?;
        write_file(output_png_path.as_ref(), &bytes)
    }

    pub fn render_to_png_bytes(&self, spec: &ChartSpec) -> Result<Vec<u8>> {
        let mut surface = self.raster(spec)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed for '{}'", spec.title()))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Unpremultiplied RGBA pixels as `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&self, spec: &ChartSpec) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.raster(spec)?;
        let (w, h) = (self.opts.width, self.opts.height);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("failed to read back {w}x{h} pixels");
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    pub fn render_to_svg(&self, spec: &ChartSpec, output_svg_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_svg_bytes(spec)?;
        write_file(output_svg_path.as_ref(), &bytes)
    }

    pub fn render_to_svg_bytes(&self, spec: &ChartSpec) -> Result<Vec<u8>> {
        let bounds = skia::Rect::from_wh(self.opts.width as f32, self.opts.height as f32);
        let canvas = skia::svg::Canvas::new(bounds, None);
        self.draw(&canvas, spec);
        let data = canvas.end();
        Ok(data.as_bytes().to_vec())
    }

    /// Legend box for `spec` laid out against `frame`.
    ///
    /// Widths come from shaped text even when labels are off, so the box and
    /// its corner match the labeled figure.
    pub fn legend_layout(&self, spec: &ChartSpec, frame: &Frame) -> LegendLayout {
        let widths: Vec<f32> = spec.labels().map(|l| self.shaper.measure_width(l, TICK_SIZE)).collect();
        LegendLayout::compute(frame.plot, &widths, TICK_SIZE, &frame.marker_positions(spec))
    }

    fn raster(&self, spec: &ChartSpec) -> Result<skia::Surface> {
        let (w, h) = (self.opts.width, self.opts.height);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;
        self.draw(surface.canvas(), spec);
        Ok(surface)
    }

    fn draw(&self, canvas: &skia::Canvas, spec: &ChartSpec) {
        tracing::debug!(title = spec.title(), series = spec.series().len(), "rendering chart");
        let theme = &self.opts.theme;
        let frame = Frame::compute(spec, &self.opts);

        canvas.clear(theme.background);
        let mut fill = skia::Paint::default();
        fill.set_color(theme.plot_background);
        canvas.draw_rect(frame.plot.to_skia(), &fill);

        draw_grid(canvas, &frame, theme);
        draw_frame(canvas, &frame, theme);
        for (i, s) in spec.series().iter().enumerate() {
            let points: Vec<(f32, f32)> = s
                .points()
                .map(|(x, y)| (frame.x_scale.to_px(x), frame.y_scale.to_px(y)))
                .collect();
            draw_line_series(canvas, &points, theme.series_color(i), &self.opts);
        }
        self.draw_legend(canvas, spec, &frame);

        if self.opts.draw_labels {
            self.draw_text(canvas, spec, &frame);
        }
    }

    fn draw_legend(&self, canvas: &skia::Canvas, spec: &ChartSpec, frame: &Frame) {
        let theme = &self.opts.theme;
        let legend = self.legend_layout(spec, frame);
        let rect = legend.rect.to_skia();

        let mut bg = skia::Paint::default();
        bg.set_anti_alias(true);
        bg.set_color(theme.legend_background);
        canvas.draw_round_rect(rect, 3.0, 3.0, &bg);

        let mut border = skia::Paint::default();
        border.set_anti_alias(true);
        border.set_style(skia::paint::Style::Stroke);
        border.set_stroke_width(1.0);
        border.set_color(theme.legend_border);
        canvas.draw_round_rect(rect, 3.0, 3.0, &border);

        for ((i, row), label) in legend.rows.iter().enumerate().zip(spec.labels()) {
            let color = theme.series_color(i);
            let mid = ((row.swatch_from.0 + row.swatch_to.0) * 0.5, row.center_y);
            stroke_polyline(canvas, &[row.swatch_from, row.swatch_to], color, self.opts.line_width);
            draw_marker(canvas, mid, color, self.opts.marker_radius);
            if self.opts.draw_labels {
                self.shaper.draw(canvas, label, row.text_x, row.center_y + TICK_SIZE * 0.35, TICK_SIZE, theme.axis_label, Anchor::Left);
            }
        }
    }

    fn draw_text(&self, canvas: &skia::Canvas, spec: &ChartSpec, frame: &Frame) {
        let theme = &self.opts.theme;
        let plot = frame.plot;

        for t in &frame.x_ticks {
            let y = plot.bottom as f32 + TICK_LEN + 4.0 + TICK_SIZE;
            self.shaper.draw(canvas, &t.label, t.px, y, TICK_SIZE, theme.tick, Anchor::Center);
        }
        for t in &frame.y_ticks {
            let x = plot.left as f32 - TICK_LEN - 4.0;
            self.shaper.draw(canvas, &t.label, x, t.px + TICK_SIZE * 0.35, TICK_SIZE, theme.tick, Anchor::Right);
        }

        self.shaper.draw(canvas, spec.title(), plot.center_x(), plot.top as f32 - 16.0, TITLE_SIZE, theme.title, Anchor::Center);
        self.shaper.draw(canvas, spec.x_label(), plot.center_x(), self.opts.height as f32 - 16.0, LABEL_SIZE, theme.axis_label, Anchor::Center);

        // y label runs bottom-to-top along the left edge
        canvas.save();
        canvas.translate((LABEL_SIZE + 8.0, plot.center_y()));
        canvas.rotate(-90.0, None);
        self.shaper.draw(canvas, spec.y_label(), 0.0, 0.0, LABEL_SIZE, theme.axis_label, Anchor::Center);
        canvas.restore();
    }
}

// ---- helpers ----------------------------------------------------------------

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn draw_grid(canvas: &skia::Canvas, frame: &Frame, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(0.8);

    let (l, t, r, b) = (frame.plot.left as f32, frame.plot.top as f32, frame.plot.right as f32, frame.plot.bottom as f32);
    // verticals
    for tick in &frame.x_ticks {
        canvas.draw_line((tick.px, t), (tick.px, b), &paint);
    }
    // horizontals
    for tick in &frame.y_ticks {
        canvas.draw_line((l, tick.px), (r, tick.px), &paint);
    }
}

fn draw_frame(canvas: &skia::Canvas, frame: &Frame, theme: &Theme) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_style(skia::paint::Style::Stroke);
    axis_paint.set_stroke_width(1.0);

    canvas.draw_rect(frame.plot.to_skia(), &axis_paint);

    let (l, b) = (frame.plot.left as f32, frame.plot.bottom as f32);
    for tick in &frame.x_ticks {
        canvas.draw_line((tick.px, b), (tick.px, b + TICK_LEN), &axis_paint);
    }
    for tick in &frame.y_ticks {
        canvas.draw_line((l - TICK_LEN, tick.px), (l, tick.px), &axis_paint);
    }
}

/// Polyline through `points` plus a filled circle marker at each one.
fn draw_line_series(canvas: &skia::Canvas, points: &[(f32, f32)], color: skia::Color, opts: &RenderOptions) {
    stroke_polyline(canvas, points, color, opts.line_width);
    for &p in points {
        draw_marker(canvas, p, color, opts.marker_radius);
    }
}

fn stroke_polyline(canvas: &skia::Canvas, points: &[(f32, f32)], color: skia::Color, width: f32) {
    let Some(&first) = points.first() else { return };
    if points.len() < 2 {
        return;
    }

    let mut path = skia::Path::new();
    path.move_to(first);
    for &p in points.iter().skip(1) {
        path.line_to(p);
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(width);
    stroke.set_stroke_join(skia::paint::Join::Round);
    stroke.set_color(color);
    canvas.draw_path(&path, &stroke);
}

fn draw_marker(canvas: &skia::Canvas, center: (f32, f32), color: skia::Color, radius: f32) {
    let mut marker = skia::Paint::default();
    marker.set_anti_alias(true);
    marker.set_style(skia::paint::Style::Fill);
    marker.set_color(color);
    canvas.draw_circle(center, radius, &marker);
}
