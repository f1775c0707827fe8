use egui_plot::PlotBounds;
use trajview_core::{Point2D, ViewBounds};

/// Allows extracting plottable `[x, y]` pairs from trajectory data.
///
/// Absent entries (`None`) are skipped, never plotted as the origin.
pub trait TrajectoryPlot {
    /// Append the plottable pairs to `out`.
    fn extend_xy(&self, out: &mut Vec<[f64; 2]>);

    fn xy(&self) -> Vec<[f64; 2]> {
        let mut out = Vec::new();
        self.extend_xy(&mut out);
        out
    }
}

impl TrajectoryPlot for [Point2D] {
    fn extend_xy(&self, out: &mut Vec<[f64; 2]>) {
        out.extend(self.iter().map(|p| [p.x, p.y]));
    }
}

impl TrajectoryPlot for [Option<Point2D>] {
    fn extend_xy(&self, out: &mut Vec<[f64; 2]>) {
        out.extend(self.iter().flatten().map(|p| [p.x, p.y]));
    }
}

/// Convert core view bounds into plot bounds.
pub fn plot_bounds(bounds: &ViewBounds) -> PlotBounds {
    PlotBounds::from_min_max([bounds.x_min, bounds.y_min], [bounds.x_max, bounds.y_max])
}
