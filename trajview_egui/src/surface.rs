//! Retained-mode [`PlotSurface`] drawn with [`egui_plot`].
//!
//! egui redraws everything every frame, so the surface keeps the latest
//! contents of every shape and series and replays them into two plots on
//! each call to [`EguiSurface::show`].

use std::time::Duration;

use egui::Ui;
use egui_plot::{Corner, Legend, Line, MarkerShape, Plot, PlotPoints, PlotUi, Points};
use trajview_core::{PlotSurface, Point2D, SeriesHandle, ShapeHandle, Style, ViewBounds, ViewId};

use crate::data::{plot_bounds, TrajectoryPlot};
use crate::item::draw_vehicle;
use crate::palette::{self, Palette};

/// Default minimum time between two repaint requests
pub const DEFAULT_REPAINT_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Clone)]
struct ShapeEntry {
    view: ViewId,
    vertices: Vec<Point2D>,
    style: Style,
}

#[derive(Debug, Clone)]
struct SeriesEntry {
    view: ViewId,
    points: Vec<[f64; 2]>,
    style: Style,
}

/// Axis limits of one view and whether they still need to be applied.
#[derive(Debug, Clone, Copy, Default)]
struct ViewState {
    bounds: Option<ViewBounds>,
    pending: bool,
}

#[derive(Debug, Clone)]
pub struct EguiSurface {
    palette: Palette,
    shapes: Vec<ShapeEntry>,
    series: Vec<SeriesEntry>,
    zoomed: ViewState,
    full_map: ViewState,
    /// Set by `request_render`, cleared by `take_render_request`
    render_requested: bool,
    min_repaint_interval: Duration,
}

impl Default for EguiSurface {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}

impl EguiSurface {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            shapes: Vec::new(),
            series: Vec::new(),
            zoomed: ViewState::default(),
            full_map: ViewState::default(),
            render_requested: false,
            min_repaint_interval: DEFAULT_REPAINT_INTERVAL,
        }
    }

    /// Drop every shape and series. Handles issued before are invalid after.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.series.clear();
        self.zoomed = ViewState::default();
        self.full_map = ViewState::default();
        self.render_requested = false;
    }

    /// Consume a pending render request.
    ///
    /// Any number of requests since the last call collapse into one.
    pub fn take_render_request(&mut self) -> bool {
        std::mem::take(&mut self.render_requested)
    }

    pub fn min_repaint_interval(&self) -> Duration {
        self.min_repaint_interval
    }

    /// Last bounds set for `view`.
    pub fn view_bounds(&self, view: ViewId) -> Option<ViewBounds> {
        self.view_state(view).bounds
    }

    /// Current points of a series.
    pub fn series_points(&self, handle: SeriesHandle) -> Option<&[[f64; 2]]> {
        self.series.get(handle.0).map(|s| s.points.as_slice())
    }

    /// Current vertices of a shape.
    pub fn shape_vertices(&self, handle: ShapeHandle) -> Option<&[Point2D]> {
        self.shapes.get(handle.0).map(|s| s.vertices.as_slice())
    }

    /// Draw both views side by side.
    pub fn show(&mut self, ui: &mut Ui) {
        ui.columns(2, |columns| {
            self.show_view(&mut columns[0], ViewId::Zoomed);
            self.show_view(&mut columns[1], ViewId::FullMap);
        });
    }

    fn show_view(&mut self, ui: &mut Ui, view: ViewId) {
        let (id, title) = match view {
            ViewId::Zoomed => ("zoomed_view", "Vehicle"),
            ViewId::FullMap => ("full_map_view", "Full Map"),
        };
        let state = self.view_state_mut(view);
        let bounds = if state.pending { state.bounds } else { None };
        state.pending = false;

        ui.label(title);
        Plot::new(id)
            .legend(Legend::default().position(Corner::RightTop))
            .data_aspect(1.0)
            .show(ui, |plot_ui| {
                if let Some(bounds) = bounds {
                    plot_ui.set_plot_bounds(plot_bounds(&bounds));
                }
                self.draw(plot_ui, view);
            });
    }

    fn draw(&self, plot_ui: &mut PlotUi<'_>, view: ViewId) {
        for series in self.series.iter().filter(|s| s.view == view) {
            if series.points.is_empty() {
                continue;
            }
            let style = series.style;
            let color = self.palette.color(style);
            let points = PlotPoints::new(series.points.clone());
            if palette::is_marker(style) {
                let shape = match style {
                    Style::StartMarker => MarkerShape::Square,
                    Style::EndMarker => MarkerShape::Diamond,
                    _ => MarkerShape::Circle,
                };
                plot_ui.points(
                    Points::new(style.label(), points)
                        .shape(shape)
                        .radius(5.0)
                        .filled(true)
                        .color(color),
                );
            } else {
                plot_ui.line(
                    Line::new(style.label(), points)
                        .color(color)
                        .width(palette::line_width(style))
                        .style(palette::line_style(style)),
                );
            }
        }

        for shape in self.shapes.iter().filter(|s| s.view == view) {
            draw_vehicle(
                plot_ui,
                shape.style.label(),
                &shape.vertices,
                self.palette.color(shape.style),
                self.palette.fill(shape.style),
            );
        }
    }

    fn view_state(&self, view: ViewId) -> &ViewState {
        match view {
            ViewId::Zoomed => &self.zoomed,
            ViewId::FullMap => &self.full_map,
        }
    }

    fn view_state_mut(&mut self, view: ViewId) -> &mut ViewState {
        match view {
            ViewId::Zoomed => &mut self.zoomed,
            ViewId::FullMap => &mut self.full_map,
        }
    }
}

impl PlotSurface for EguiSurface {
    fn create_filled_shape(
        &mut self,
        view: ViewId,
        vertices: &[Point2D],
        style: Style,
    ) -> ShapeHandle {
        self.shapes.push(ShapeEntry {
            view,
            vertices: vertices.to_vec(),
            style,
        });
        ShapeHandle(self.shapes.len() - 1)
    }

    fn set_shape_vertices(&mut self, handle: ShapeHandle, vertices: &[Point2D]) {
        if let Some(shape) = self.shapes.get_mut(handle.0) {
            shape.vertices.clear();
            shape.vertices.extend_from_slice(vertices);
        }
    }

    fn create_series(&mut self, view: ViewId, points: &[Point2D], style: Style) -> SeriesHandle {
        self.series.push(SeriesEntry {
            view,
            points: points.xy(),
            style,
        });
        SeriesHandle(self.series.len() - 1)
    }

    fn set_series_data(&mut self, handle: SeriesHandle, points: &[Option<Point2D>]) {
        if let Some(series) = self.series.get_mut(handle.0) {
            series.points.clear();
            points.extend_xy(&mut series.points);
        }
    }

    fn append_series_point(&mut self, handle: SeriesHandle, point: Point2D) {
        if let Some(series) = self.series.get_mut(handle.0) {
            series.points.push([point.x, point.y]);
        }
    }

    fn set_view_bounds(&mut self, view: ViewId, bounds: ViewBounds) {
        let state = self.view_state_mut(view);
        state.bounds = Some(bounds);
        state.pending = true;
    }

    fn request_render(&mut self) {
        self.render_requested = true;
    }
}
