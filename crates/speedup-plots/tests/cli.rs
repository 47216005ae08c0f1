// File: crates/speedup-plots/tests/cli.rs
// Purpose: Drive the binary end to end.

use assert_cmd::Command;

fn bin() -> Command {
    Command::cargo_bin("speedup-plots").expect("binary built")
}

#[test]
fn list_prints_groups_and_titles() {
    let out = bin().arg("list").assert().success().get_output().stdout.clone();
    let text = String::from_utf8(out).unwrap();
    for id in ["m1-inner", "m1-sequential", "m2-inner", "m2-sequential", "m3", "nested-m1", "nested-m2"] {
        assert!(text.contains(id), "missing {id} in:\n{text}");
    }
    assert!(text.contains("Nested Relative to Sequential Speedup Results (Depth 4)"));
}

#[test]
fn render_one_group_writes_one_file_per_figure() {
    let dir = tempfile::tempdir().unwrap();
    bin()
        .args(["render", "--group", "nested-m1", "--format", "both", "--no-labels", "--width", "400", "--height", "300"])
        .arg("--out-dir")
        .arg(dir.path())
        .assert()
        .success();

    for fig in ["inner-depth1", "inner-depth2", "sequential-depth1", "sequential-depth2"] {
        for ext in ["png", "svg"] {
            let p = dir.path().join(format!("nested-m1_{fig}.{ext}"));
            assert!(p.exists(), "missing {}", p.display());
        }
    }
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 8);
}

#[test]
fn unknown_group_fails() {
    let dir = tempfile::tempdir().unwrap();
    bin()
        .args(["render", "--group", "m9"])
        .arg("--out-dir")
        .arg(dir.path())
        .assert()
        .failure();
}

#[test]
fn unknown_theme_is_a_usage_error() {
    bin().args(["render", "--theme", "neon"]).assert().failure();
}

#[test]
fn export_then_plot() {
    let dir = tempfile::tempdir().unwrap();
    bin().args(["export", "--group", "m1-inner"]).arg("--out-dir").arg(dir.path()).assert().success();

    let table = dir.path().join("m1-inner_depth2.csv");
    assert!(table.exists());

    let out = dir.path().join("replot.png");
    bin()
        .arg("plot")
        .arg(&table)
        .args(["--title", "Inner Speedup Results for Mate in 1 (Depth 2)", "--log2", "--no-labels"])
        .arg("--out")
        .arg(&out)
        .assert()
        .success();
    let bytes = std::fs::read(&out).unwrap();
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn show_rejects_unknown_group_before_opening_windows() {
    bin().args(["show", "--group", "m9"]).assert().failure();
}

#[test]
fn repeated_groups_are_selected_once() {
    let ids = ["nested-m1", "m3", "nested-m1"].map(String::from);
    let groups = speedup_plots::commands::select_groups(&ids).unwrap();
    let got: Vec<&str> = groups.iter().map(|g| g.id).collect();
    assert_eq!(got, ["nested-m1", "m3"]);
}

#[test]
fn theme_flag_reaches_render_options() {
    use clap::Parser;
    use speedup_plots::cli::{Cli, Commands};

    let cli = Cli::try_parse_from(["speedup-plots", "show", "--theme", "Solarized-Dark", "--no-labels"]).unwrap();
    let Commands::Show { style, .. } = cli.command else { panic!("expected show") };
    let opts = style.render_options();
    assert_eq!(opts.theme.name, "solarized-dark");
    assert!(!opts.draw_labels);
}
