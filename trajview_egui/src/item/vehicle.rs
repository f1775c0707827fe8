use egui::{Color32, Stroke};
use egui_plot::{PlotPoints, PlotUi, Polygon};
use trajview_core::Point2D;

use crate::data::TrajectoryPlot;

/// Outline width of the vehicle silhouette [px]
const OUTLINE_WIDTH: f32 = 1.5;

/// Draw the vehicle silhouette as a filled triangle.
///
/// vertices: `(left, right, front)` as produced by the core geometry.
/// Nothing is drawn for fewer than 3 vertices.
pub fn draw_vehicle(
    plot_ui: &mut PlotUi<'_>,
    name: &str,
    vertices: &[Point2D],
    color: Color32,
    fill: Color32,
) {
    if vertices.len() < 3 {
        return;
    }
    let points = PlotPoints::new(vertices.xy());
    let triangle = Polygon::new(name, points)
        .fill_color(fill)
        .stroke(Stroke::new(OUTLINE_WIDTH, color));
    plot_ui.polygon(triangle);
}
