mod data;
mod geometry;
mod mode;
mod output;
mod render;

use clap::Parser;

use data::{find_period, period_labels};
use geometry::Layout;
use mode::{run_inspect, run_render};
use output::print_error;

#[derive(Parser)]
#[command(
    name = "curveplot",
    version,
    about = "Smoothed line/area chart path generator with SVG output",
    after_help = "Examples:
  curveplot 40 26 22 72 82 80 88               Print coordinates and path geometry
  curveplot --period 24h                       Use a preset dataset
  curveplot --period 1W --out chart.svg        Render a preset to an SVG file
  curveplot --out c.svg --label \"$ 950\" 10 80  Render custom samples with a label
  curveplot --smoothness 0.35 30 60 45         Rounder tangents
  curveplot --no-color 40 60 80                Disable colored output"
)]
struct Args {
    /// Sample values (nominal 0-100), in rendering order
    #[arg(allow_negative_numbers = true)]
    samples: Vec<f64>,

    /// Use a preset dataset (24h, 1W, 1M, 3M, 1Y, ALL)
    #[arg(short, long, value_name = "LABEL")]
    period: Option<String>,

    /// Render a complete SVG document to this path
    #[arg(short, long, value_name = "PATH")]
    out: Option<String>,

    /// Text label drawn onto the rendered chart
    #[arg(short, long, value_name = "TEXT")]
    label: Option<String>,

    /// Drawing surface width in pixels
    #[arg(long, default_value = "390", value_name = "PX")]
    width: f64,

    /// Drawing surface height in pixels
    #[arg(long, default_value = "180", value_name = "PX")]
    height: f64,

    /// Padding above the drawing band
    #[arg(long, default_value = "26", value_name = "PX")]
    padding_top: f64,

    /// Padding below the drawing band
    #[arg(long, default_value = "20", value_name = "PX")]
    padding_bottom: f64,

    /// Horizontal position of the off-screen lead-in point
    #[arg(long, default_value = "-32", allow_hyphen_values = true, value_name = "PX")]
    lead_in: f64,

    /// Tangent influence of neighboring samples (0 < s)
    #[arg(long, default_value = "0.2", value_name = "S")]
    smoothness: f64,

    /// Marker anchor inset from the right edge
    #[arg(long, default_value = "30", value_name = "PX")]
    marker_inset: f64,

    /// Suppress explanations (show data only)
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() {
    let args = Args::parse();

    // Handle --no-color
    if args.no_color {
        colored::control::set_override(false);
    }

    // Resolve the sample sequence
    if !args.samples.is_empty() && args.period.is_some() {
        print_error("Pass either sample values or --period, not both");
        std::process::exit(1);
    }

    let (samples, preset_balance): (Vec<f64>, Option<String>) = match &args.period {
        Some(label) => match find_period(label) {
            Some(period) => (
                period.points.to_vec(),
                Some(period.balance.to_string()),
            ),
            None => {
                print_error(&format!(
                    "Unknown period '{}' (expected one of: {})",
                    label,
                    period_labels()
                ));
                std::process::exit(1);
            }
        },
        None => (args.samples.clone(), None),
    };

    if samples.is_empty() {
        print_error("No samples given (pass values or --period LABEL)");
        std::process::exit(1);
    }

    if samples.iter().any(|v| !v.is_finite()) {
        print_error("Samples must be finite numbers");
        std::process::exit(1);
    }

    // Validate layout parameters
    if args.width <= 0.0 || args.height <= 0.0 {
        print_error("Surface dimensions must be positive");
        std::process::exit(1);
    }

    if args.smoothness <= 0.0 {
        print_error("Smoothness must be positive");
        std::process::exit(1);
    }

    if args.padding_top < 0.0 || args.padding_bottom < 0.0 {
        print_error("Padding must not be negative");
        std::process::exit(1);
    }

    // Validate option combinations
    if args.label.is_some() && args.out.is_none() {
        print_error("--label can only be used with --out");
        std::process::exit(1);
    }

    // Validate SVG output path
    if let Some(ref path) = args.out {
        use std::path::Path;
        if let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            print_error(&format!("Directory does not exist: {}", parent.display()));
            std::process::exit(1);
        }
    }

    let layout = Layout {
        surface_width: args.width,
        surface_height: args.height,
        padding_top: args.padding_top,
        padding_bottom: args.padding_bottom,
        lead_in_x: args.lead_in,
        smoothness: args.smoothness,
        marker_inset_right: args.marker_inset,
    };

    // Dispatch to appropriate mode
    match &args.out {
        Some(path) => {
            let label = args.label.or(preset_balance);
            run_render(&samples, &layout, label.as_deref(), path, args.quiet);
        }
        None => run_inspect(&samples, &layout, args.quiet),
    }
}
