use anyhow::Result;
use criterion::{criterion_group, criterion_main, Criterion, black_box};
use speedup_core::{ChartRenderer, ChartSpec, RenderOptions, ScaleKind};

fn build_spec(series: usize) -> ChartSpec {
    let threads = [1.0, 2.0, 4.0, 8.0, 16.0, 32.0, 64.0];
    let mut b = ChartSpec::builder(format!("{series} curves"))
        .x_scale(ScaleKind::Log2)
        .threads(&threads);
    for s in 0..series {
        let ys: Vec<f64> = threads.iter().map(|t| t.log2() * (1.0 + s as f64 * 0.1) + 1.0).collect();
        b = b.line(format!("algo {s}"), &ys);
    }
    b.build().expect("bench spec")
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[1usize, 5, 10] {
        group.bench_function(format!("series_{n}"), |b| {
            let spec = build_spec(n);
            let mut opts = RenderOptions::default();
            opts.draw_labels = false;
            let renderer = ChartRenderer::new(opts);
            b.iter(|| -> Result<()> {
                let bytes = renderer.render_to_png_bytes(&spec)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
