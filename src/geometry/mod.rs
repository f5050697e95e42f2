//! Chart path geometry

mod curve;
mod marker;
mod scale;

pub use curve::{build_area_path, build_smooth_path};
pub use marker::marker_anchor;
pub use scale::{check_domain, map_value_to_y};


/// Vertical overshoot below the surface for the lead-in baseline
pub(crate) const BASELINE_OVERSHOOT: f64 = 6.0;

/// Fixed control-point offsets for the lead-in segment
pub(crate) const LEAD_IN_CP_DX: f64 = 14.0;
pub(crate) const LEAD_IN_CP_DY: f64 = 14.0;
pub(crate) const FIRST_CP_DX: f64 = 14.0;
pub(crate) const FIRST_CP_DY: f64 = 10.0;

/// Per-render layout configuration. Supplied once per call, never mutated.
#[derive(Debug, Clone)]
pub struct Layout {
    /// Drawing surface width in pixels
    pub surface_width: f64,
    /// Drawing surface height in pixels
    pub surface_height: f64,
    /// Padding above the usable vertical band
    pub padding_top: f64,
    /// Padding below the usable vertical band
    pub padding_bottom: f64,
    /// Horizontal position of the synthetic off-screen lead-in point
    pub lead_in_x: f64,
    /// Tangent influence of neighboring samples (0 < s, ~0.5 max useful)
    pub smoothness: f64,
    /// Marker anchor inset from the right edge
    pub marker_inset_right: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            surface_width: 390.0,
            surface_height: 180.0,
            padding_top: 26.0,
            padding_bottom: 20.0,
            lead_in_x: -32.0,
            smoothness: 0.2,
            marker_inset_right: 30.0,
        }
    }
}

impl Layout {
    /// Horizontal spacing between consecutive samples. Zero for a single
    /// sample so the degenerate path stays finite.
    pub(crate) fn step(&self, n: usize) -> f64 {
        if n > 1 {
            self.surface_width / (n - 1) as f64
        } else {
            0.0
        }
    }

    /// Vertical position of the lead-in point (baseline plus overshoot)
    pub(crate) fn lead_in_y(&self) -> f64 {
        self.surface_height + BASELINE_OVERSHOOT
    }
}

/// A pixel coordinate pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}
