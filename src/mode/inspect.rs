//! Coordinate and path inspection mode

use crate::geometry::{
    Layout, build_area_path, build_smooth_path, check_domain, map_value_to_y, marker_anchor,
};
use crate::output::{
    print_layout_info, print_legend, print_marker, print_path_row, print_point_header,
    print_point_row, print_point_separator, print_warning,
};

/// Print the mapped coordinates and path descriptors for the samples
pub fn run_inspect(samples: &[f64], layout: &Layout, quiet: bool) {
    if let Some(warning) = check_domain(samples) {
        print_warning(&warning);
    }

    if !quiet {
        println!("Path Inspection");
        print_layout_info(layout);
    }

    println!("[Sample Coordinates]");
    print_point_header();
    print_point_separator();
    let step = layout.step(samples.len());
    for (i, v) in samples.iter().enumerate() {
        print_point_row(i, *v, step * i as f64, map_value_to_y(*v, layout));
    }
    print_point_separator();

    println!();
    println!("[Path Descriptors]");
    print_path_row("Curve", &build_smooth_path(samples, layout));
    print_path_row("Area", &build_area_path(samples, layout));

    println!();
    print_marker(marker_anchor(samples, layout));

    if !quiet {
        println!();
        print_legend();
    }
}
