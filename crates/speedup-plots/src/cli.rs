// File: crates/speedup-plots/src/cli.rs
// Summary: Command-line surface (clap derive) and its mapping onto render options.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use speedup_core::types::{HEIGHT, WIDTH};
use speedup_core::{theme, RenderOptions, Theme};

/// Render speedup charts for the parallel game-tree search benchmarks
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log level filter (overridden by RUST_LOG)
    #[arg(short, long, default_value = "info", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List benchmark groups and their figures
    List,

    /// Render catalog figures to image files
    Render {
        /// Only render these groups (repeatable); all groups when omitted
        #[arg(short, long = "group")]
        groups: Vec<String>,

        /// Directory the images are written to
        #[arg(short, long, default_value = "target/speedup")]
        out_dir: PathBuf,

        /// Image format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Png)]
        format: OutputFormat,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Show catalog figures in windows, one at a time in catalog order
    Show {
        /// Only show these groups (repeatable); all groups when omitted
        #[arg(short, long = "group")]
        groups: Vec<String>,

        #[command(flatten)]
        style: StyleArgs,
    },

    /// Write catalog tables as CSV
    Export {
        /// Only export these groups (repeatable); all groups when omitted
        #[arg(short, long = "group")]
        groups: Vec<String>,

        /// Directory the CSV files are written to
        #[arg(short, long, default_value = "target/speedup")]
        out_dir: PathBuf,
    },

    /// Render a CSV table (`threads,<label>...`) as one chart
    Plot {
        /// Input CSV file
        input: PathBuf,

        /// Chart title
        #[arg(short, long)]
        title: String,

        #[arg(long, default_value = "Number of Threads")]
        x_label: String,

        #[arg(long, default_value = "Speedup")]
        y_label: String,

        /// Use a base-2 logarithmic thread axis
        #[arg(long)]
        log2: bool,

        /// Output file; the extension picks PNG or SVG
        #[arg(short, long, default_value = "target/speedup/plot.png")]
        out: PathBuf,

        #[command(flatten)]
        style: StyleArgs,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Png,
    Svg,
    Both,
}

impl OutputFormat {
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            OutputFormat::Png => &["png"],
            OutputFormat::Svg => &["svg"],
            OutputFormat::Both => &["png", "svg"],
        }
    }
}

/// Figure styling shared by the rendering subcommands.
#[derive(Args, Debug, Clone)]
pub struct StyleArgs {
    /// Colour theme: light, dark, solarized-light, solarized-dark
    #[arg(long, default_value = "light", value_parser = parse_theme)]
    pub theme: Theme,

    /// Figure width in pixels
    #[arg(long, default_value_t = WIDTH, value_parser = clap::value_parser!(i32).range(200..=8000))]
    pub width: i32,

    /// Figure height in pixels
    #[arg(long, default_value_t = HEIGHT, value_parser = clap::value_parser!(i32).range(150..=8000))]
    pub height: i32,

    /// Skip all text (title, labels, ticks, legend names)
    #[arg(long)]
    pub no_labels: bool,
}

fn parse_theme(name: &str) -> Result<Theme, String> {
    match theme::find(name) {
        Some(t) => Ok(t),
        None => {
            let known: Vec<&str> = theme::presets().iter().map(|t| t.name).collect();
            Err(format!("unknown theme '{name}' (known: {})", known.join(", ")))
        }
    }
}

impl StyleArgs {
    pub fn render_options(&self) -> RenderOptions {
        let mut opts = RenderOptions::default();
        opts.width = self.width;
        opts.height = self.height;
        opts.draw_labels = !self.no_labels;
        opts.theme = self.theme;
        opts
    }
}
