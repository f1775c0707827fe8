//! Trajectory state shared by the zoomed and full-map views.

use tracing::debug;

use crate::config::ViewerConfig;
use crate::error::{Result, ViewerError};
use crate::ring_buffer::RingBuffer;
use crate::types::{Point2D, Pose, Sample};

/// Recent history of both GPS receivers.
#[derive(Debug, Clone)]
pub struct GpsWindows {
    pub gps1: RingBuffer<Point2D>,
    pub gps2: RingBuffer<Point2D>,
}

impl GpsWindows {
    fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            gps1: RingBuffer::new(capacity)?,
            gps2: RingBuffer::new(capacity)?,
        })
    }

    fn reset(&mut self) {
        self.gps1.reset();
        self.gps2.reset();
    }
}

/// Current pose plus the full and windowed position histories.
///
/// The full path and every window are mutated together, so a reader always
/// sees all of them at the same instant.
#[derive(Debug, Clone)]
pub struct TrajectoryState {
    pose: Pose,
    /// Every recorded position since initialization
    full_path: Vec<Point2D>,
    /// Recent positions for the zoomed view
    vehicle_window: RingBuffer<Point2D>,
    /// Present only in GPS mode
    gps_windows: Option<GpsWindows>,
    initialized: bool,
    /// Samples recorded since initialization
    sample_count: usize,
}

impl TrajectoryState {
    /// Create an uninitialized state with absent windows sized for `config`.
    pub fn new(config: &ViewerConfig) -> Result<Self> {
        let gps_windows = if config.use_gps {
            Some(GpsWindows::new(config.buffer_size)?)
        } else {
            None
        };
        Ok(Self {
            pose: Pose::default(),
            full_path: Vec::new(),
            vehicle_window: RingBuffer::new(config.buffer_size)?,
            gps_windows,
            initialized: false,
            sample_count: 0,
        })
    }

    /// Start a new run at `start` with all windows absent.
    pub fn initialize(&mut self, start: Point2D, heading: f64) {
        self.pose = Pose::new(start, heading);
        self.full_path.clear();
        self.full_path.push(start);
        self.vehicle_window.reset();
        if let Some(gps) = self.gps_windows.as_mut() {
            gps.reset();
        }
        self.sample_count = 0;
        self.initialized = true;
        debug!(x = start.x, y = start.y, heading, "trajectory state initialized");
    }

    /// Record one sample into the pose, the full path and every window.
    ///
    /// All checks run before any mutation, so a failed call leaves the state
    /// untouched.
    pub fn record_sample(&mut self, sample: &Sample) -> Result<()> {
        if !self.initialized {
            return Err(ViewerError::NotInitialized);
        }
        let gps = match (self.gps_windows.as_mut(), sample.gps) {
            (Some(windows), Some(fix)) => Some((windows, fix)),
            (Some(_), None) => return Err(ViewerError::MissingGpsData),
            (None, _) => None,
        };

        self.pose = sample.pose();
        self.full_path.push(sample.position);
        self.vehicle_window.push(sample.position);
        if let Some((windows, fix)) = gps {
            windows.gps1.push(fix.primary);
            windows.gps2.push(fix.secondary);
        }
        self.sample_count += 1;
        Ok(())
    }

    /// Back to the uninitialized state, keeping the allocated windows.
    pub fn clear(&mut self) {
        self.pose = Pose::default();
        self.full_path.clear();
        self.vehicle_window.reset();
        if let Some(gps) = self.gps_windows.as_mut() {
            gps.reset();
        }
        self.sample_count = 0;
        self.initialized = false;
    }

    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    pub fn full_path(&self) -> &[Point2D] {
        &self.full_path
    }

    pub fn vehicle_window(&self) -> &RingBuffer<Point2D> {
        &self.vehicle_window
    }

    pub fn gps_windows(&self) -> Option<&GpsWindows> {
        self.gps_windows.as_ref()
    }

    pub fn uses_gps(&self) -> bool {
        self.gps_windows.is_some()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GpsFix;

    fn config(buffer_size: usize, use_gps: bool) -> ViewerConfig {
        ViewerConfig {
            buffer_size,
            use_gps,
            ..Default::default()
        }
    }

    fn fix(x: f64, y: f64) -> GpsFix {
        GpsFix::new(Point2D::new(x, y + 0.5), Point2D::new(x, y - 0.5))
    }

    #[test]
    fn test_record_before_initialize() {
        let mut state = TrajectoryState::new(&config(3, false)).unwrap();
        let err = state
            .record_sample(&Sample::new(Point2D::new(1.0, 1.0), 0.0))
            .unwrap_err();
        assert_eq!(err, ViewerError::NotInitialized);
        assert!(state.full_path().is_empty());
    }

    #[test]
    fn test_zero_buffer_rejected() {
        let err = TrajectoryState::new(&config(0, true)).unwrap_err();
        assert_eq!(err, ViewerError::InvalidCapacity { capacity: 0 });
    }

    #[test]
    fn test_initialize_resets() {
        let mut state = TrajectoryState::new(&config(3, false)).unwrap();
        state.initialize(Point2D::new(1.0, 2.0), 0.5);
        state
            .record_sample(&Sample::new(Point2D::new(2.0, 2.0), 0.0))
            .unwrap();

        state.initialize(Point2D::new(-1.0, 0.0), 0.1);
        assert_eq!(state.full_path(), &[Point2D::new(-1.0, 0.0)]);
        assert!(state.vehicle_window().is_empty());
        assert_eq!(state.vehicle_window().len(), 3);
        assert_eq!(state.pose().heading, 0.1);
        assert_eq!(state.sample_count(), 0);
    }

    #[test]
    fn test_full_path_and_window_advance_together() {
        let mut state = TrajectoryState::new(&config(2, false)).unwrap();
        state.initialize(Point2D::origin(), 0.0);

        for i in 1..=3 {
            let p = Point2D::new(i as f64, 0.0);
            state.record_sample(&Sample::new(p, 0.2 * i as f64)).unwrap();
        }

        assert_eq!(state.full_path().len(), 4);
        assert_eq!(state.full_path().last(), Some(&Point2D::new(3.0, 0.0)));
        assert_eq!(
            state.vehicle_window().snapshot(),
            vec![Some(Point2D::new(2.0, 0.0)), Some(Point2D::new(3.0, 0.0))]
        );
        assert_eq!(state.pose().position(), Point2D::new(3.0, 0.0));
        assert!((state.pose().heading - 0.6).abs() < 1e-12);
        assert_eq!(state.sample_count(), 3);
    }

    #[test]
    fn test_gps_windows_filled() {
        let mut state = TrajectoryState::new(&config(3, true)).unwrap();
        state.initialize(Point2D::origin(), 0.0);
        state
            .record_sample(&Sample::new(Point2D::new(1.0, 0.0), 0.0).with_gps(fix(1.0, 0.0)))
            .unwrap();

        let gps = state.gps_windows().unwrap();
        assert_eq!(gps.gps1.latest(), Some(&Point2D::new(1.0, 0.5)));
        assert_eq!(gps.gps2.latest(), Some(&Point2D::new(1.0, -0.5)));
        assert_eq!(gps.gps1.filled(), 1);
    }

    #[test]
    fn test_missing_gps_leaves_state_unchanged() {
        let mut state = TrajectoryState::new(&config(3, true)).unwrap();
        state.initialize(Point2D::origin(), 0.0);
        state
            .record_sample(&Sample::new(Point2D::new(1.0, 0.0), 0.3).with_gps(fix(1.0, 0.0)))
            .unwrap();

        let err = state
            .record_sample(&Sample::new(Point2D::new(2.0, 0.0), 0.7))
            .unwrap_err();
        assert_eq!(err, ViewerError::MissingGpsData);

        assert_eq!(state.pose().position(), Point2D::new(1.0, 0.0));
        assert_eq!(state.pose().heading, 0.3);
        assert_eq!(state.full_path().len(), 2);
        assert_eq!(state.vehicle_window().filled(), 1);
        assert_eq!(state.gps_windows().unwrap().gps1.filled(), 1);
        assert_eq!(state.sample_count(), 1);
    }

    #[test]
    fn test_gps_ignored_when_disabled() {
        let mut state = TrajectoryState::new(&config(3, false)).unwrap();
        state.initialize(Point2D::origin(), 0.0);
        state
            .record_sample(&Sample::new(Point2D::new(1.0, 0.0), 0.0).with_gps(fix(1.0, 0.0)))
            .unwrap();

        assert!(!state.uses_gps());
        assert!(state.gps_windows().is_none());
        assert_eq!(state.full_path().len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut state = TrajectoryState::new(&config(3, true)).unwrap();
        state.initialize(Point2D::origin(), 0.0);
        state.clear();
        assert!(!state.is_initialized());
        assert!(state.full_path().is_empty());
        assert_eq!(
            state.record_sample(&Sample::new(Point2D::origin(), 0.0)),
            Err(ViewerError::NotInitialized)
        );
    }
}
