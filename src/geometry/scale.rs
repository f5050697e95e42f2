//! Value-to-pixel coordinate mapping

use super::Layout;

/// Map a sample value (nominal 0-100) to a vertical pixel coordinate.
///
/// The usable band runs from `padding_top` down to
/// `surface_height - padding_bottom - padding_top`; value 0 maps to the band
/// bottom, 100 to the band top (inverted axis, larger values render higher).
/// Values outside [0, 100] extrapolate linearly past the band rather than
/// clamping.
pub fn map_value_to_y(value: f64, layout: &Layout) -> f64 {
    let top = layout.padding_top;
    let bottom = layout.surface_height - layout.padding_bottom - layout.padding_top;
    bottom - (value / 100.0) * (bottom - top)
}

/// Check whether every sample lies in the nominal [0, 100] domain.
/// Returns a warning message if not.
pub fn check_domain(samples: &[f64]) -> Option<String> {
    let outside = samples
        .iter()
        .filter(|v| !(0.0..=100.0).contains(*v))
        .count();
    if outside == 0 {
        None
    } else {
        Some(format!(
            "Warning: {} sample(s) outside the [0, 100] domain. \
             They extrapolate past the padding band and may render off-surface.",
            outside
        ))
    }
}
