// File: crates/speedup-plots/src/commands.rs
// Summary: Subcommand implementations: list, render, show, export and plot.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use speedup_core::{ChartRenderer, ChartSpec, ScaleKind};
use tracing::{info, warn};

use crate::catalog::{self, Group, GROUPS};
use crate::cli::{Commands, OutputFormat, StyleArgs};
use crate::table::{self, TableMeta};
use crate::window::Viewer;

pub fn run(command: Commands) -> Result<()> {
    match command {
        Commands::List => {
            print!("{}", list());
            Ok(())
        }
        Commands::Render { groups, out_dir, format, style } => {
            let written = render(&select_groups(&groups)?, &out_dir, format, &style)?;
            info!(files = written.len(), dir = %out_dir.display(), "rendering finished");
            Ok(())
        }
        Commands::Show { groups, style } => show(&select_groups(&groups)?, &style),
        Commands::Export { groups, out_dir } => {
            let written = export(&select_groups(&groups)?, &out_dir)?;
            info!(files = written.len(), dir = %out_dir.display(), "export finished");
            Ok(())
        }
        Commands::Plot { input, title, x_label, y_label, log2, out, style } => {
            let mut meta = TableMeta::new(title);
            meta.x_label = x_label;
            meta.y_label = y_label;
            meta.x_scale = if log2 { ScaleKind::Log2 } else { ScaleKind::Linear };
            plot(&input, meta, &out, &style)
        }
    }
}

/// One line per group followed by its figures, indented.
pub fn list() -> String {
    let mut out = String::new();
    for g in GROUPS {
        let scale = match g.x_scale {
            ScaleKind::Linear => "linear",
            ScaleKind::Log2 => "log2",
        };
        out.push_str(&format!("{} ({} threads, {scale}): {}\n", g.id, g.threads.len(), g.summary));
        for f in g.figures {
            out.push_str(&format!("  {:<20} {}\n", f.id, f.title));
        }
    }
    out
}

/// Resolve group ids in the order given; an empty selection means every group.
/// Repeated ids are kept once.
pub fn select_groups(ids: &[String]) -> Result<Vec<&'static Group>> {
    if ids.is_empty() {
        return Ok(GROUPS.iter().collect());
    }
    let mut selected: Vec<&'static Group> = Vec::with_capacity(ids.len());
    for id in ids {
        let Some(g) = catalog::group(id) else {
            let known: Vec<&str> = GROUPS.iter().map(|g| g.id).collect();
            bail!("unknown group '{id}' (known: {})", known.join(", "));
        };
        if selected.iter().any(|s| s.id == g.id) {
            warn!(group = %id, "group selected more than once, using it once");
            continue;
        }
        selected.push(g);
    }
    Ok(selected)
}

/// Render every figure of `groups` in order, one file per figure and extension.
pub fn render(groups: &[&Group], out_dir: &Path, format: OutputFormat, style: &StyleArgs) -> Result<Vec<PathBuf>> {
    let renderer = ChartRenderer::new(style.render_options());
    let mut written = Vec::new();
    for group in groups {
        for (stem, spec) in catalog::chart_specs(group).with_context(|| format!("building group '{}'", group.id))? {
            for ext in format.extensions() {
                let path = out_dir.join(format!("{stem}.{ext}"));
                write_chart(&renderer, &spec, &path)?;
                written.push(path);
            }
        }
    }
    Ok(written)
}

/// Open each figure in a window; the next figure is built once the previous window closes.
pub fn show(groups: &[&Group], style: &StyleArgs) -> Result<()> {
    let mut viewer = Viewer::new(style.render_options());
    for group in groups {
        for figure in group.figures {
            let stem = group.stem(figure);
            let spec = group.chart_spec(figure).with_context(|| format!("building '{stem}'"))?;
            viewer.show(&stem, &spec)?;
        }
    }
    Ok(())
}

/// Write each figure's table as `<group>_<figure>.csv`.
pub fn export(groups: &[&Group], out_dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir).with_context(|| format!("creating {}", out_dir.display()))?;
    let mut written = Vec::new();
    for group in groups {
        for (stem, spec) in catalog::chart_specs(group)? {
            let path = out_dir.join(format!("{stem}.csv"));
            let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
            table::write_csv(&spec, BufWriter::new(file)).with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), "wrote table");
            written.push(path);
        }
    }
    Ok(written)
}

pub fn plot(input: &Path, meta: TableMeta, out: &Path, style: &StyleArgs) -> Result<()> {
    let file = File::open(input).with_context(|| format!("opening {}", input.display()))?;
    let spec = table::read_csv(BufReader::new(file), meta)
        .with_context(|| format!("failed to load table '{}'", input.display()))?;
    info!(series = spec.series().len(), points = spec.x_values().len(), "loaded table");
    write_chart(&ChartRenderer::new(style.render_options()), &spec, out)
}

/// Pick the encoder from the file extension; anything but `.svg` is PNG.
fn write_chart(renderer: &ChartRenderer, spec: &ChartSpec, path: &Path) -> Result<()> {
    let is_svg = path.extension().is_some_and(|e| e.eq_ignore_ascii_case("svg"));
    if is_svg {
        renderer.render_to_svg(spec, path)?;
    } else {
        renderer.render_to_png(spec, path)?;
    }
    info!(path = %path.display(), title = spec.title(), "wrote chart");
    Ok(())
}
