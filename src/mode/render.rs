//! SVG rendering mode

use crate::geometry::{Layout, check_domain, marker_anchor};
use crate::output::{print_error, print_marker, print_warning};
use crate::render::{Theme, save_chart};

/// Render the samples to a standalone SVG document
pub fn run_render(
    samples: &[f64],
    layout: &Layout,
    label: Option<&str>,
    output_path: &str,
    quiet: bool,
) {
    if let Some(warning) = check_domain(samples) {
        print_warning(&warning);
    }

    let theme = Theme::default();
    if let Err(e) = save_chart(samples, layout, &theme, label, output_path) {
        print_error(&e);
        std::process::exit(1);
    }

    if !quiet {
        print_marker(marker_anchor(samples, layout));
    }
    eprintln!("Chart saved to: {}", output_path);
}
