//! Rendering seam between the viewer core and a plotting backend.
//!
//! The core never draws anything itself. It creates shapes and series on a
//! [`PlotSurface`] and keeps the returned handles as opaque tokens, mutating
//! them as samples arrive. How a [`Style`] turns into colours and markers is
//! left entirely to the backend.

use crate::types::Point2D;
use crate::view::ViewBounds;

/// The two plot views driven by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewId {
    /// Window of fixed size following the vehicle
    Zoomed,
    /// Whole reference path plus margin
    FullMap,
}

/// Role of a shape or series, mapped to a visual style by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    ReferencePath,
    VehiclePath,
    CurrentPosition,
    StartMarker,
    EndMarker,
    VehicleBody,
    Gps1,
    Gps2,
}

impl Style {
    /// Legend label for the role.
    pub fn label(&self) -> &'static str {
        match self {
            Style::ReferencePath => "Reference Path",
            Style::VehiclePath => "Vehicle Path",
            Style::CurrentPosition => "Position",
            Style::StartMarker => "Start",
            Style::EndMarker => "End",
            Style::VehicleBody => "Vehicle",
            Style::Gps1 => "GPS 1",
            Style::Gps2 => "GPS 2",
        }
    }
}

/// Opaque token for a filled shape created on a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeHandle(pub usize);

/// Opaque token for a point series created on a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeriesHandle(pub usize);

/// Minimal set of mutations a plotting backend must support.
///
/// Series data may contain absent entries (`None`), coming from ring buffer
/// slots that were never written. Backends must skip them, never plot them
/// as the origin.
pub trait PlotSurface {
    /// Create a filled polygon in `view`.
    fn create_filled_shape(&mut self, view: ViewId, vertices: &[Point2D], style: Style)
        -> ShapeHandle;

    /// Replace the vertices of an existing shape.
    fn set_shape_vertices(&mut self, handle: ShapeHandle, vertices: &[Point2D]);

    /// Create a point series in `view`.
    fn create_series(&mut self, view: ViewId, points: &[Point2D], style: Style) -> SeriesHandle;

    /// Replace the full contents of a series.
    fn set_series_data(&mut self, handle: SeriesHandle, points: &[Option<Point2D>]);

    /// Append a single point to a series.
    fn append_series_point(&mut self, handle: SeriesHandle, point: Point2D);

    /// Set the visible axis limits of `view`.
    fn set_view_bounds(&mut self, view: ViewId, bounds: ViewBounds);

    /// Signal that a frame's data is complete. Backends may coalesce or
    /// rate-limit the actual repaint.
    fn request_render(&mut self);
}
