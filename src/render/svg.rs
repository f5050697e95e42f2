//! Standalone SVG document assembly

use std::fmt::Write;

use super::Theme;
use super::colors::{
    COLOR_BG_BOTTOM, COLOR_BG_TOP, COLOR_BG_TOP_OPACITY, COLOR_FILL, COLOR_LABEL,
    COLOR_LABEL_MAGNIFIED, COLOR_LINE, COLOR_MARKER, COLOR_MARKER_RING, SHADOW_LAYERS,
    SHADOW_TIGHT_OPACITY,
};
use crate::geometry::{Layout, build_area_path, build_smooth_path, marker_anchor};

/// Corner radius of the card background
const CARD_RADIUS: f64 = 26.0;

/// Marker dot radius and ring width
const MARKER_RADIUS: f64 = 10.0;
const MARKER_RING_WIDTH: f64 = 3.0;

/// Render a complete standalone SVG document for the given samples.
///
/// The scene layers, bottom to top: gradient card background, translucent
/// area fill, soft shadow strokes, the curve itself, the balance label with
/// its magnified copy clipped to the fill region, and the last-sample marker.
/// `label` is optional; when absent no text is drawn.
pub fn render_chart(
    samples: &[f64],
    layout: &Layout,
    theme: &Theme,
    label: Option<&str>,
) -> Result<String, String> {
    if samples.is_empty() {
        return Err("Cannot render an empty sample sequence".to_string());
    }

    let w = layout.surface_width;
    let h = layout.surface_height;
    let curve = build_smooth_path(samples, layout);
    let area = build_area_path(samples, layout);
    let anchor = marker_anchor(samples, layout);

    let mut svg = String::new();
    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" \
         viewBox=\"0 0 {w} {h}\">\n"
    );

    // Defs: background gradient and the fill-region clip for the magnified label
    svg.push_str("  <defs>\n");
    let _ = write!(
        svg,
        "    <linearGradient id=\"bgGrad\" x1=\"0\" y1=\"0\" x2=\"0\" y2=\"0.7\">\n\
         \x20     <stop offset=\"0\" stop-color=\"{COLOR_BG_TOP}\" stop-opacity=\"{COLOR_BG_TOP_OPACITY}\"/>\n\
         \x20     <stop offset=\"1\" stop-color=\"{COLOR_BG_BOTTOM}\" stop-opacity=\"1\"/>\n\
         \x20   </linearGradient>\n"
    );
    let _ = write!(
        svg,
        "    <clipPath id=\"graphClip\"><path d=\"{area}\"/></clipPath>\n"
    );
    svg.push_str("  </defs>\n");

    let _ = write!(
        svg,
        "  <rect x=\"0\" y=\"0\" width=\"{w}\" height=\"{h}\" rx=\"{CARD_RADIUS}\" \
         fill=\"url(#bgGrad)\"/>\n"
    );

    // Base label under the curve layers
    let label_x = w * 0.18;
    let label_y = h * 0.43 - 26.0 + theme.label_font_size;
    if let Some(text) = label {
        let _ = write!(
            svg,
            "  <text x=\"{label_x}\" y=\"{label_y}\" font-size=\"{}\" \
             font-weight=\"600\" fill=\"{COLOR_LABEL}\">{}</text>\n",
            theme.label_font_size,
            escape_text(text)
        );
    }

    let _ = write!(
        svg,
        "  <path d=\"{area}\" fill=\"{COLOR_FILL}\" fill-opacity=\"{}\"/>\n",
        theme.fill_opacity
    );

    // Layered soft shadow between the fill and the line
    for (extra, opacity) in SHADOW_LAYERS {
        let width = theme.line_width + theme.shadow_base_width + extra;
        write_shadow_stroke(&mut svg, &curve, width, opacity, theme);
    }
    write_shadow_stroke(
        &mut svg,
        &curve,
        theme.line_width + 1.0,
        SHADOW_TIGHT_OPACITY,
        theme,
    );

    let _ = write!(
        svg,
        "  <path d=\"{curve}\" stroke=\"{COLOR_LINE}\" stroke-width=\"{}\" fill=\"none\" \
         stroke-linecap=\"round\"/>\n",
        theme.line_width
    );

    // Magnified label, visible only inside the fill region
    if let Some(text) = label {
        let _ = write!(
            svg,
            "  <g clip-path=\"url(#graphClip)\">\n\
             \x20   <text x=\"{}\" y=\"{}\" font-size=\"{}\" font-weight=\"700\" \
             fill=\"{COLOR_LABEL_MAGNIFIED}\">{}</text>\n\
             \x20 </g>\n",
            label_x + theme.magnified_offset_x,
            label_y + theme.magnified_offset_y,
            theme.magnified_font_size,
            escape_text(text)
        );
    }

    let _ = write!(
        svg,
        "  <circle cx=\"{}\" cy=\"{}\" r=\"{MARKER_RADIUS}\" fill=\"{COLOR_MARKER}\" \
         stroke=\"{COLOR_MARKER_RING}\" stroke-width=\"{MARKER_RING_WIDTH}\"/>\n",
        anchor.x, anchor.y
    );

    svg.push_str("</svg>\n");
    Ok(svg)
}

/// Render and write the document to a file
pub fn save_chart(
    samples: &[f64],
    layout: &Layout,
    theme: &Theme,
    label: Option<&str>,
    output_path: &str,
) -> Result<(), String> {
    let doc = render_chart(samples, layout, theme, label)?;
    std::fs::write(output_path, doc).map_err(|e| format!("Failed to save chart: {}", e))
}

fn write_shadow_stroke(svg: &mut String, curve: &str, width: f64, opacity: f64, theme: &Theme) {
    let _ = write!(
        svg,
        "  <path d=\"{curve}\" stroke=\"rgba(0,0,0,{opacity})\" stroke-width=\"{width}\" \
         fill=\"none\" stroke-linecap=\"round\" transform=\"translate({} {})\"/>\n",
        theme.shadow_offset_x, theme.shadow_offset_y
    );
}

/// Minimal XML escaping for label text
fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_rejects_empty_input() {
        let layout = Layout::default();
        let result = render_chart(&[], &layout, &Theme::default(), None);
        assert!(result.is_err());
    }

    #[test]
    fn test_render_document_structure() {
        let layout = Layout::default();
        let samples = [40.0, 26.0, 22.0, 72.0, 82.0, 80.0, 88.0];
        let doc = render_chart(&samples, &layout, &Theme::default(), Some("$ 11,950")).unwrap();

        assert!(doc.starts_with("<svg "));
        assert!(doc.ends_with("</svg>\n"));
        assert!(doc.contains("url(#bgGrad)"));
        assert!(doc.contains("clip-path=\"url(#graphClip)\""));
        assert!(doc.contains("$ 11,950"));
        // Marker anchor from the reference layout
        assert!(doc.contains("cx=\"360\""));
    }

    #[test]
    fn test_render_without_label_has_no_text() {
        let layout = Layout::default();
        let doc = render_chart(&[10.0, 80.0], &layout, &Theme::default(), None).unwrap();
        assert!(!doc.contains("<text"));
    }

    #[test]
    fn test_render_escapes_label() {
        let layout = Layout::default();
        let doc = render_chart(
            &[10.0, 80.0],
            &layout,
            &Theme::default(),
            Some("<1k & rising"),
        )
        .unwrap();
        assert!(doc.contains("&lt;1k &amp; rising"));
        assert!(!doc.contains("<1k"));
    }
}
