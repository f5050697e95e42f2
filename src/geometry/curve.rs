//! Smooth curve and fill-area path construction

use std::fmt::Write;

use super::{FIRST_CP_DX, FIRST_CP_DY, LEAD_IN_CP_DX, LEAD_IN_CP_DY, Layout, map_value_to_y};

/// Build an SVG path through every sample using local cubic-Bezier segments.
///
/// The path starts at a synthetic lead-in point left of the surface, at the
/// baseline, and curves into the first sample so the left edge has a smooth
/// entry instead of a sharp corner. Interior control points come from a
/// Catmull-Rom-style tangent estimate scaled by `layout.smoothness`; the
/// lead-in point stands in for the neighbor before sample 0, and the segment
/// end is reused when no neighbor exists past it.
///
/// Returns an empty string for an empty sequence. A single sample yields a
/// degenerate but valid path (lead-in curve only). Identical inputs produce
/// byte-identical output.
pub fn build_smooth_path(samples: &[f64], layout: &Layout) -> String {
    if samples.is_empty() {
        return String::new();
    }

    let step = layout.step(samples.len());
    let start_y = layout.lead_in_y();
    let mut d = format!("M {} {}", layout.lead_in_x, start_y);

    let first_x = 0.0;
    let first_y = map_value_to_y(samples[0], layout);
    let _ = write!(
        d,
        " C {} {}, {} {}, {} {}",
        layout.lead_in_x + LEAD_IN_CP_DX,
        start_y - LEAD_IN_CP_DY,
        first_x - FIRST_CP_DX,
        first_y + FIRST_CP_DY,
        first_x,
        first_y
    );

    for i in 0..samples.len().saturating_sub(1) {
        let x0 = step * i as f64;
        let y0 = map_value_to_y(samples[i], layout);
        let x1 = step * (i + 1) as f64;
        let y1 = map_value_to_y(samples[i + 1], layout);

        // Neighbor before the segment start; the lead-in stands in at i == 0.
        let (x_prev, y_prev) = if i == 0 {
            (layout.lead_in_x, start_y)
        } else {
            (step * (i - 1) as f64, map_value_to_y(samples[i - 1], layout))
        };

        // Neighbor past the segment end; the end repeats when there is none.
        let (x_next, y_next) = if i + 2 >= samples.len() {
            (x1, y1)
        } else {
            (step * (i + 2) as f64, map_value_to_y(samples[i + 2], layout))
        };

        let cp1x = x0 + (x1 - x_prev) * layout.smoothness;
        let cp1y = y0 + (y1 - y_prev) * layout.smoothness;
        let cp2x = x1 - (x_next - x0) * layout.smoothness;
        let cp2y = y1 - (y_next - y0) * layout.smoothness;

        let _ = write!(d, " C {cp1x} {cp1y}, {cp2x} {cp2y}, {x1} {y1}");
    }

    d
}

/// Close the smooth curve into a filled region.
///
/// Appends a straight drop to the surface bottom below the last sample, a
/// straight run back to the lead-in's horizontal position, and a close
/// command. Empty input returns an empty string.
pub fn build_area_path(samples: &[f64], layout: &Layout) -> String {
    if samples.is_empty() {
        return String::new();
    }

    let mut d = build_smooth_path(samples, layout);
    let step = layout.step(samples.len());
    let last_x = step * (samples.len() - 1) as f64;
    let bottom = layout.surface_height;
    let _ = write!(d, " L {last_x} {bottom} L {} {bottom} Z", layout.lead_in_x);
    d
}
