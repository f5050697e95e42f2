//! Color definitions for the rendered scene

/// Background gradient, top tint fading into the card color
pub(super) const COLOR_BG_TOP: &str = "#3170f7";
pub(super) const COLOR_BG_TOP_OPACITY: f64 = 0.1;
pub(super) const COLOR_BG_BOTTOM: &str = "#FFFFFF";

/// Curve stroke (translucent white over the gradient)
pub(super) const COLOR_LINE: &str = "#ffffffa3";

/// Area fill base color; opacity comes from the theme
pub(super) const COLOR_FILL: &str = "#ffffff";

/// Balance labels
pub(super) const COLOR_LABEL: &str = "rgba(34,114,255,0.9)";
pub(super) const COLOR_LABEL_MAGNIFIED: &str = "rgba(34,114,255,1)";

/// Marker dot and its ring
pub(super) const COLOR_MARKER: &str = "#2F80FF";
pub(super) const COLOR_MARKER_RING: &str = "#FFFFFF";

/// Widening soft-shadow strokes under the curve: extra width over the base
/// shadow width, paired with the layer's opacity. Widest first.
pub(super) const SHADOW_LAYERS: [(f64, f64); 4] =
    [(16.0, 0.02), (10.0, 0.03), (5.0, 0.01), (0.0, 0.06)];

/// The tight shadow stroke hugging the line
pub(super) const SHADOW_TIGHT_OPACITY: f64 = 0.08;
