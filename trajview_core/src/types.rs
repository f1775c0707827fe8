//! Value types flowing through the viewer: points, poses and per-tick samples.

use nalgebra::Point2;

/// Planar coordinate in the fixed world frame (east, north).
pub type Point2D = Point2<f64>;

/// Vehicle pose in the world frame.
///
/// `heading` is in radians and is taken as given; it is never wrapped here.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    /// East position [m]
    pub x: f64,
    /// North position [m]
    pub y: f64,
    /// Heading angle [rad]
    pub heading: f64,
}

impl Pose {
    pub fn new(position: Point2D, heading: f64) -> Self {
        Self {
            x: position.x,
            y: position.y,
            heading,
        }
    }

    /// Position part of the pose.
    pub fn position(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }
}

/// Fixes from the two GPS receivers for a single instant.
///
/// Both fixes are already converted into the world frame by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpsFix {
    /// First receiver, drives the GPS1 window
    pub primary: Point2D,
    /// Second receiver, drives the GPS2 window
    pub secondary: Point2D,
}

impl GpsFix {
    pub fn new(primary: Point2D, secondary: Point2D) -> Self {
        Self { primary, secondary }
    }
}

/// One incoming measurement of the vehicle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub position: Point2D,
    pub heading: f64,
    pub gps: Option<GpsFix>,
}

impl Sample {
    /// Sample without GPS data.
    pub fn new(position: Point2D, heading: f64) -> Self {
        Self {
            position,
            heading,
            gps: None,
        }
    }

    /// Attach the dual GPS fix to this sample.
    pub fn with_gps(mut self, gps: GpsFix) -> Self {
        self.gps = Some(gps);
        self
    }

    pub fn pose(&self) -> Pose {
        Pose::new(self.position, self.heading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pose_position_roundtrip() {
        let pose = Pose::new(Point2D::new(3.0, -4.0), 1.5);
        assert_eq!(pose.position(), Point2D::new(3.0, -4.0));
        assert_eq!(pose.heading, 1.5);
    }

    #[test]
    fn test_sample_with_gps() {
        let fix = GpsFix::new(Point2D::new(1.0, 0.0), Point2D::new(-1.0, 0.0));
        let sample = Sample::new(Point2D::origin(), 0.0).with_gps(fix);
        assert_eq!(sample.gps, Some(fix));
        assert_eq!(sample.pose(), Pose::default());
    }
}
