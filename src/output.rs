use colored::*;

use crate::geometry::{Layout, Point};

pub(crate) fn print_error(msg: &str) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

pub(crate) fn print_warning(msg: &str) {
    eprintln!("{}: {}", "warning".yellow().bold(), msg);
}

pub(crate) fn print_layout_info(layout: &Layout) {
    println!(
        "Surface: {} x {} px, padding {} top / {} bottom",
        layout.surface_width, layout.surface_height, layout.padding_top, layout.padding_bottom
    );
    println!(
        "Lead-in x: {}, smoothness: {}, marker inset: {}",
        layout.lead_in_x, layout.smoothness, layout.marker_inset_right
    );
    println!();
}

pub(crate) fn print_point_header() {
    println!("{:>4} {:>8} {:>10} {:>10}", "IDX", "VALUE", "X", "Y");
}

pub(crate) fn print_point_separator() {
    println!("{}", "-".repeat(35));
}

pub(crate) fn print_point_row(index: usize, value: f64, x: f64, y: f64) {
    println!("{:>4} {:>8.2} {:>10.2} {:>10.2}", index, value, x, y);
}

pub(crate) fn print_path_row(name: &str, d: &str) {
    println!("{} {}", format!("{}:", name).bold(), d);
}

pub(crate) fn print_marker(anchor: Point) {
    println!("{} ({}, {})", "Marker anchor:".bold(), anchor.x, anchor.y);
}

pub(crate) fn print_legend() {
    println!("X/Y: Pixel coordinates each sample maps to (y axis points down)");
    println!("Curve: SVG path through every sample, cubic-Bezier smoothed");
    println!("Area: Same path closed down to the surface bottom for filling");
    println!("Marker anchor: Position for the last-sample dot");
}
