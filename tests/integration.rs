//! Integration tests for curveplot CLI

use std::process::Command;
use tempfile::TempDir;

/// Get the path to the curveplot binary
fn curveplot_bin() -> std::path::PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    path.pop(); // Remove deps
    path.push("curveplot");
    path
}

/// Run curveplot with the given arguments
fn run_curveplot(args: &[&str]) -> std::process::Output {
    Command::new(curveplot_bin())
        .args(args)
        .output()
        .expect("failed to execute curveplot")
}

// =============================================================================
// Basic functionality tests
// =============================================================================

#[test]
fn test_help_flag() {
    let output = run_curveplot(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Smoothed line/area chart"));
    assert!(stdout.contains("--period"));
    assert!(stdout.contains("--out"));
    assert!(stdout.contains("--smoothness"));
    assert!(stdout.contains("--lead-in"));
}

#[test]
fn test_version_flag() {
    let output = run_curveplot(&["--version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("curveplot"));
}

// =============================================================================
// Inspect mode
// =============================================================================

#[test]
fn test_inspect_positional_samples() {
    let output = run_curveplot(&["-q", "40", "26", "22", "72", "82", "80", "88"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[Sample Coordinates]"));
    assert!(stdout.contains("[Path Descriptors]"));
    assert!(stdout.contains("Curve:"));
    assert!(stdout.contains("Area:"));
    assert!(stdout.contains("Marker anchor: (360, 38.9"));
}

#[test]
fn test_inspect_verbose() {
    let output = run_curveplot(&["40", "60", "80"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    // Verbose mode includes layout info and the legend
    assert!(stdout.contains("Path Inspection"));
    assert!(stdout.contains("Surface: 390 x 180 px"));
    assert!(stdout.contains("cubic-Bezier"));
}

#[test]
fn test_inspect_quiet_suppresses_explanations() {
    let output = run_curveplot(&["-q", "40", "60", "80"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Path Inspection"));
    assert!(!stdout.contains("cubic-Bezier"));
}

#[test]
fn test_inspect_preset_period() {
    let output = run_curveplot(&["-q", "--period", "24h"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    // Curve starts at the lead-in point for the default layout
    assert!(stdout.contains("M -32 186"));
    assert!(stdout.contains("Marker anchor: (360, 38.9"));
}

#[test]
fn test_inspect_singleton_sample() {
    let output = run_curveplot(&["-q", "55"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("M -32 186"));
    assert!(!stdout.contains("NaN"));
    assert!(!stdout.contains("inf"));
}

#[test]
fn test_inspect_deterministic() {
    let args = ["--no-color", "-q", "30", "70", "50"];
    let a = run_curveplot(&args);
    let b = run_curveplot(&args);
    assert!(a.status.success() && b.status.success());
    assert_eq!(a.stdout, b.stdout);
}

#[test]
fn test_out_of_domain_warning() {
    let output = run_curveplot(&["-q", "50", "150"]);
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("warning"));
    assert!(stderr.contains("[0, 100]"));
}

// =============================================================================
// Render mode
// =============================================================================

#[test]
fn test_render_svg_file() {
    let temp_dir = TempDir::new().unwrap();
    let svg_path = temp_dir.path().join("chart.svg");

    let output = run_curveplot(&[
        "-q",
        "40",
        "26",
        "22",
        "72",
        "82",
        "80",
        "88",
        "--out",
        svg_path.to_str().unwrap(),
    ]);
    assert!(output.status.success());

    assert!(svg_path.exists(), "SVG file should be created");
    let doc = std::fs::read_to_string(&svg_path).unwrap();
    assert!(doc.starts_with("<svg "));
    assert!(doc.contains("M -32 186"));
    assert!(doc.contains("</svg>"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Chart saved to:"));
}

#[test]
fn test_render_preset_includes_balance_label() {
    let temp_dir = TempDir::new().unwrap();
    let svg_path = temp_dir.path().join("period.svg");

    let output = run_curveplot(&[
        "-q",
        "--period",
        "1W",
        "--out",
        svg_path.to_str().unwrap(),
    ]);
    assert!(output.status.success());

    let doc = std::fs::read_to_string(&svg_path).unwrap();
    assert!(doc.contains("$ 12,450"));
}

#[test]
fn test_render_custom_label() {
    let temp_dir = TempDir::new().unwrap();
    let svg_path = temp_dir.path().join("label.svg");

    let output = run_curveplot(&[
        "-q",
        "10",
        "80",
        "30",
        "--out",
        svg_path.to_str().unwrap(),
        "--label",
        "$ 950",
    ]);
    assert!(output.status.success());

    let doc = std::fs::read_to_string(&svg_path).unwrap();
    assert!(doc.contains("$ 950"));
}

#[test]
fn test_render_custom_layout() {
    let temp_dir = TempDir::new().unwrap();
    let svg_path = temp_dir.path().join("wide.svg");

    let output = run_curveplot(&[
        "-q",
        "20",
        "80",
        "--width",
        "800",
        "--height",
        "300",
        "--out",
        svg_path.to_str().unwrap(),
    ]);
    assert!(output.status.success());

    let doc = std::fs::read_to_string(&svg_path).unwrap();
    assert!(doc.contains("width=\"800\""));
    assert!(doc.contains("height=\"300\""));
}

// =============================================================================
// Validation errors
// =============================================================================

#[test]
fn test_unknown_period() {
    let output = run_curveplot(&["--period", "2Y"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown period"));
    assert!(stderr.contains("24h"));
}

#[test]
fn test_samples_and_period_conflict() {
    let output = run_curveplot(&["40", "60", "--period", "24h"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not both"));
}

#[test]
fn test_no_samples() {
    let output = run_curveplot(&["-q"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No samples given"));
}

#[test]
fn test_non_finite_samples() {
    let output = run_curveplot(&["40", "NaN"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("finite"));
}

#[test]
fn test_zero_smoothness_rejected() {
    let output = run_curveplot(&["--smoothness", "0", "40", "60"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Smoothness must be positive"));
}

#[test]
fn test_zero_width_rejected() {
    let output = run_curveplot(&["--width", "0", "40", "60"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Surface dimensions must be positive"));
}

#[test]
fn test_label_without_out_rejected() {
    let output = run_curveplot(&["--label", "text", "40", "60"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--label can only be used with --out"));
}

#[test]
fn test_out_missing_directory() {
    let output = run_curveplot(&["40", "60", "--out", "/nonexistent-dir/chart.svg"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Directory does not exist"));
}
