//! Colours and line styles for each plotted role.

use egui::Color32;
use egui_plot::LineStyle;
use tracing::info;
use trajview_core::Style;

/// Number of colours in a series palette
pub const SERIES_COLORS: usize = 4;

/// Series colours used by older releases and still found in saved settings.
pub const LEGACY_SERIES: [[u8; 3]; SERIES_COLORS] =
    [[0, 0, 255], [0, 128, 0], [255, 0, 0], [0, 191, 191]];

/// Default series colours.
pub const MODERN_SERIES: [[u8; 3]; SERIES_COLORS] = [
    [0, 114, 189],
    [217, 83, 25],
    [237, 177, 32],
    [126, 47, 142],
];

/// Fixed colours for the static content.
pub mod colors {
    use egui::Color32;

    /// Reference path (gray)
    pub const REFERENCE: Color32 = Color32::from_rgb(140, 140, 140);

    /// Start marker (lime green)
    pub const START: Color32 = Color32::from_rgb(50, 205, 50);

    /// End marker (crimson)
    pub const END: Color32 = Color32::from_rgb(220, 20, 60);
}

/// Maps plotted roles to colours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    series: [Color32; SERIES_COLORS],
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_rgb(MODERN_SERIES)
    }
}

impl Palette {
    /// Build a palette from configured series colours.
    ///
    /// The legacy default palette is replaced by the modern one.
    pub fn from_rgb(series: [[u8; 3]; SERIES_COLORS]) -> Self {
        let series = if series == LEGACY_SERIES {
            info!("legacy series palette found, using the modern palette");
            MODERN_SERIES
        } else {
            series
        };
        Self {
            series: series.map(|[r, g, b]| Color32::from_rgb(r, g, b)),
        }
    }

    pub fn color(&self, style: Style) -> Color32 {
        match style {
            Style::ReferencePath => colors::REFERENCE,
            Style::StartMarker => colors::START,
            Style::EndMarker => colors::END,
            Style::VehiclePath | Style::VehicleBody => self.series[0],
            Style::CurrentPosition => self.series[1],
            Style::Gps1 => self.series[2],
            Style::Gps2 => self.series[3],
        }
    }

    /// Semi-transparent fill for filled shapes.
    pub fn fill(&self, style: Style) -> Color32 {
        self.color(style).gamma_multiply(0.35)
    }
}

/// Line width for series drawn as lines.
pub fn line_width(style: Style) -> f32 {
    match style {
        Style::ReferencePath => 1.5,
        Style::Gps1 | Style::Gps2 => 1.0,
        _ => 2.0,
    }
}

/// Line style for series drawn as lines.
pub fn line_style(style: Style) -> LineStyle {
    match style {
        Style::ReferencePath => LineStyle::Dashed { length: 10.0 },
        Style::Gps1 | Style::Gps2 => LineStyle::Dotted { spacing: 6.0 },
        _ => LineStyle::Solid,
    }
}

/// Whether a role is drawn as isolated markers instead of a line.
pub fn is_marker(style: Style) -> bool {
    matches!(
        style,
        Style::CurrentPosition | Style::StartMarker | Style::EndMarker
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_palette_replaced() {
        let palette = Palette::from_rgb(LEGACY_SERIES);
        assert_eq!(palette, Palette::default());
        assert_eq!(palette.color(Style::VehiclePath), Color32::from_rgb(0, 114, 189));
    }

    #[test]
    fn test_custom_palette_kept() {
        let custom = [[1, 2, 3], [4, 5, 6], [7, 8, 9], [10, 11, 12]];
        let palette = Palette::from_rgb(custom);
        assert_eq!(palette.color(Style::Gps2), Color32::from_rgb(10, 11, 12));
        assert_eq!(palette.color(Style::CurrentPosition), Color32::from_rgb(4, 5, 6));
    }

    #[test]
    fn test_static_roles_use_fixed_colors() {
        let palette = Palette::default();
        assert_eq!(palette.color(Style::ReferencePath), colors::REFERENCE);
        assert_eq!(palette.color(Style::StartMarker), colors::START);
        assert!(is_marker(Style::EndMarker));
        assert!(!is_marker(Style::VehiclePath));
    }
}
