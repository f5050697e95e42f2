//! SVG scene rendering for chart geometry

mod colors;
mod svg;

pub use svg::{render_chart, save_chart};

/// Presentation-only tuning for the rendered scene. None of these affect the
/// path geometry itself.
pub struct Theme {
    /// Curve stroke width
    pub line_width: f64,
    /// Horizontal offset of the layered shadow strokes
    pub shadow_offset_x: f64,
    /// Vertical offset of the layered shadow strokes
    pub shadow_offset_y: f64,
    /// Base width the widening shadow strokes grow from
    pub shadow_base_width: f64,
    /// Opacity of the area fill
    pub fill_opacity: f64,
    /// Font size of the balance label drawn on the card
    pub label_font_size: f64,
    /// Font size of the magnified label clipped to the fill region
    pub magnified_font_size: f64,
    /// Magnified label offset from the base label, horizontal
    pub magnified_offset_x: f64,
    /// Magnified label offset from the base label, vertical
    pub magnified_offset_y: f64,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            line_width: 1.0,
            shadow_offset_x: -2.0,
            shadow_offset_y: -2.0,
            shadow_base_width: 10.0,
            fill_opacity: 0.4,
            label_font_size: 54.0,
            magnified_font_size: 58.0,
            magnified_offset_x: -14.0,
            magnified_offset_y: 28.0,
        }
    }
}
