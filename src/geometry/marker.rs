//! Marker anchor placement

use super::{Layout, Point, map_value_to_y};

/// Compute the anchor point for the last-sample marker.
///
/// The x position sits a fixed inset from the right edge; the y position is
/// the last sample's mapped coordinate. The caller must pass a non-empty
/// sequence — an empty chart has no last sample to mark.
pub fn marker_anchor(samples: &[f64], layout: &Layout) -> Point {
    let last = samples[samples.len() - 1];
    Point {
        x: layout.surface_width - layout.marker_inset_right,
        y: map_value_to_y(last, layout),
    }
}
