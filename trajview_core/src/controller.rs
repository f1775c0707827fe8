//! Keeps the zoomed and full-map views in step with the trajectory state.
//!
//! # Lifecycle
//! A controller starts uninitialized. [`DualViewController::setup`] draws the
//! static content (reference path, start/end markers) and creates every
//! dynamic shape and series, after which [`DualViewController::tick`] may be
//! called once per incoming sample. Each tick issues its surface mutations in
//! a fixed order so geometry and position are consistent within a frame:
//!
//! 1. vehicle silhouette vertices
//! 2. zoomed window recentered on the vehicle
//! 3. zoomed path from the vehicle window
//! 4. full-map path, one point appended
//! 5. current position marker
//! 6. both GPS series (GPS mode only)
//!
//! followed by a render request.

use tracing::{info, trace};

use crate::config::ViewerConfig;
use crate::error::{Result, ViewerError};
use crate::geometry::{silhouette, VehicleDimensions};
use crate::state::TrajectoryState;
use crate::surface::{PlotSurface, SeriesHandle, ShapeHandle, Style, ViewId};
use crate::types::{Point2D, Pose, Sample};
use crate::view::{ViewBounds, ViewWindow};

/// Handles of the dynamic content created during setup.
#[derive(Debug, Clone, Copy)]
struct ViewHandles {
    body: ShapeHandle,
    zoomed_path: SeriesHandle,
    map_path: SeriesHandle,
    zoomed_position: SeriesHandle,
    map_position: SeriesHandle,
    gps: Option<(SeriesHandle, SeriesHandle)>,
}

/// Everything that only exists once the views are set up.
#[derive(Debug, Clone)]
struct Session {
    handles: ViewHandles,
    reference_path: Vec<Point2D>,
    zoomed: ViewWindow,
    full_map: ViewBounds,
}

/// Projects [`TrajectoryState`] onto a zoomed and a full-map plot view.
///
/// The surface is borrowed per call; the controller only stores the handles
/// the surface returned, so the same surface must be passed to every call of
/// a session.
#[derive(Debug, Clone)]
pub struct DualViewController {
    config: ViewerConfig,
    dims: VehicleDimensions,
    state: TrajectoryState,
    session: Option<Session>,
    /// Reused storage for window snapshots
    scratch: Vec<Option<Point2D>>,
}

impl DualViewController {
    /// Validate `config` and allocate the history windows.
    pub fn new(config: ViewerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            dims: VehicleDimensions::from_config(&config)?,
            state: TrajectoryState::new(&config)?,
            session: None,
            scratch: Vec::with_capacity(config.buffer_size),
            config,
        })
    }

    /// Draw the static content and create the dynamic series on `surface`.
    ///
    /// Calling it again starts a new session; the caller is expected to hand
    /// over a cleared surface.
    pub fn setup<S: PlotSurface>(
        &mut self,
        surface: &mut S,
        reference_path: &[Point2D],
        start: Point2D,
        heading: f64,
    ) -> Result<()> {
        let full_map = ViewBounds::enclosing(reference_path)
            .ok_or(ViewerError::DegeneratePath {
                points: reference_path.len(),
            })?
            .expanded(self.config.map_margin);
        let zoomed = ViewWindow::centered(start, self.config.zoom_half_extent);

        self.state.initialize(start, heading);

        surface.create_series(ViewId::Zoomed, reference_path, Style::ReferencePath);
        surface.create_series(ViewId::FullMap, reference_path, Style::ReferencePath);
        // enclosing() guarantees at least 2 points
        let first = reference_path[0];
        let last = reference_path[reference_path.len() - 1];
        surface.create_series(ViewId::FullMap, &[first], Style::StartMarker);
        surface.create_series(ViewId::FullMap, &[last], Style::EndMarker);

        let body = silhouette(&Pose::new(start, heading), &self.dims);
        let handles = ViewHandles {
            body: surface.create_filled_shape(ViewId::Zoomed, &body.vertices(), Style::VehicleBody),
            zoomed_path: surface.create_series(ViewId::Zoomed, &[], Style::VehiclePath),
            map_path: surface.create_series(ViewId::FullMap, &[], Style::VehiclePath),
            zoomed_position: surface.create_series(ViewId::Zoomed, &[], Style::CurrentPosition),
            map_position: surface.create_series(ViewId::FullMap, &[], Style::CurrentPosition),
            gps: self.config.use_gps.then(|| {
                (
                    surface.create_series(ViewId::Zoomed, &[], Style::Gps1),
                    surface.create_series(ViewId::Zoomed, &[], Style::Gps2),
                )
            }),
        };

        surface.set_view_bounds(ViewId::Zoomed, zoomed.bounds());
        surface.set_view_bounds(ViewId::FullMap, full_map);
        surface.request_render();

        info!(
            path_points = reference_path.len(),
            x_min = full_map.x_min,
            x_max = full_map.x_max,
            y_min = full_map.y_min,
            y_max = full_map.y_max,
            use_gps = self.config.use_gps,
            buffer_size = self.config.buffer_size,
            "dual view set up"
        );

        self.session = Some(Session {
            handles,
            reference_path: reference_path.to_vec(),
            zoomed,
            full_map,
        });
        Ok(())
    }

    /// Record `sample` and push the resulting frame to both views.
    ///
    /// On error nothing is recorded and no surface call is made.
    pub fn tick<S: PlotSurface>(&mut self, surface: &mut S, sample: &Sample) -> Result<()> {
        let session = self.session.as_mut().ok_or(ViewerError::NotSetup)?;
        self.state.record_sample(sample)?;

        let handles = session.handles;
        let position = sample.position;

        let body = silhouette(self.state.pose(), &self.dims);
        surface.set_shape_vertices(handles.body, &body.vertices());

        session.zoomed.recenter(position);
        surface.set_view_bounds(ViewId::Zoomed, session.zoomed.bounds());

        self.state.vehicle_window().snapshot_into(&mut self.scratch);
        surface.set_series_data(handles.zoomed_path, &self.scratch);

        surface.append_series_point(handles.map_path, position);

        surface.set_series_data(handles.zoomed_position, &[Some(position)]);
        surface.set_series_data(handles.map_position, &[Some(position)]);

        if let (Some((gps1, gps2)), Some(windows)) = (handles.gps, self.state.gps_windows()) {
            windows.gps1.snapshot_into(&mut self.scratch);
            surface.set_series_data(gps1, &self.scratch);
            windows.gps2.snapshot_into(&mut self.scratch);
            surface.set_series_data(gps2, &self.scratch);
        }

        surface.request_render();
        trace!(
            x = position.x,
            y = position.y,
            heading = sample.heading,
            samples = self.state.sample_count(),
            "tick"
        );
        Ok(())
    }

    /// Drop the session and return to the uninitialized state.
    pub fn reset(&mut self) {
        self.session = None;
        self.state.clear();
    }

    pub fn is_ready(&self) -> bool {
        self.session.is_some()
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn dimensions(&self) -> &VehicleDimensions {
        &self.dims
    }

    pub fn state(&self) -> &TrajectoryState {
        &self.state
    }

    /// Reference path given at setup.
    pub fn reference_path(&self) -> Option<&[Point2D]> {
        self.session.as_ref().map(|s| s.reference_path.as_slice())
    }

    /// Current zoomed window.
    pub fn zoomed_window(&self) -> Option<ViewWindow> {
        self.session.as_ref().map(|s| s.zoomed)
    }

    /// Fixed full-map bounds computed at setup.
    pub fn full_map_bounds(&self) -> Option<ViewBounds> {
        self.session.as_ref().map(|s| s.full_map)
    }
}
