//! Live trajectory viewing core.
//!
//! Owns the position histories of a ground vehicle and keeps a zoomed and a
//! full-map plot view consistent with them, sample by sample. Drawing is
//! delegated to any backend implementing [`surface::PlotSurface`].

pub mod config;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod ring_buffer;
pub mod state;
pub mod surface;
pub mod types;
pub mod view;

pub mod prelude {
    pub use crate::config::ViewerConfig;
    pub use crate::controller::DualViewController;
    pub use crate::error::{Result, ViewerError};
    pub use crate::geometry::{silhouette, VehicleDimensions, VehicleSilhouette};
    pub use crate::ring_buffer::RingBuffer;
    pub use crate::state::{GpsWindows, TrajectoryState};
    pub use crate::surface::{PlotSurface, SeriesHandle, ShapeHandle, Style, ViewId};
    pub use crate::types::{GpsFix, Point2D, Pose, Sample};
    pub use crate::view::{ViewBounds, ViewWindow};
    pub use nalgebra;
}

pub use prelude::*;
