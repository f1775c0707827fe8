//! Vehicle silhouette geometry.
//!
//! The vehicle is drawn as a triangle whose base spans the front track at the
//! reference point and whose apex sits one wheel base ahead along the heading.

use nalgebra::{Rotation2, Vector2};

use crate::config::{positive, ViewerConfig};
use crate::error::Result;
use crate::types::{Point2D, Pose};

/// Body dimensions, fixed for a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleDimensions {
    /// Length L from reference point to the front vertex [m]
    wheel_base: f64,
    /// Width W across the base of the silhouette [m]
    front_track: f64,
}

impl VehicleDimensions {
    /// Both dimensions must be finite and strictly positive.
    pub fn new(wheel_base: f64, front_track: f64) -> Result<Self> {
        positive("wheel_base", wheel_base)?;
        positive("front_track", front_track)?;
        Ok(Self {
            wheel_base,
            front_track,
        })
    }

    pub fn from_config(config: &ViewerConfig) -> Result<Self> {
        Self::new(config.wheel_base, config.front_track)
    }

    pub fn wheel_base(&self) -> f64 {
        self.wheel_base
    }

    pub fn front_track(&self) -> f64 {
        self.front_track
    }
}

/// Triangle outline of the vehicle for one pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleSilhouette {
    pub left: Point2D,
    pub right: Point2D,
    pub front: Point2D,
}

impl VehicleSilhouette {
    /// Vertices in face order `(left, right, front)`.
    pub fn vertices(&self) -> [Point2D; 3] {
        [self.left, self.right, self.front]
    }
}

/// Compute the silhouette of a vehicle at `pose`.
pub fn silhouette(pose: &Pose, dims: &VehicleDimensions) -> VehicleSilhouette {
    let rot = Rotation2::new(pose.heading);
    let origin = pose.position();
    let half_track = dims.front_track / 2.0;

    VehicleSilhouette {
        left: origin + rot * Vector2::new(0.0, half_track),
        right: origin + rot * Vector2::new(0.0, -half_track),
        front: origin + rot * Vector2::new(dims.wheel_base, 0.0),
    }
}
