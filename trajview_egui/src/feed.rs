//! Synthetic sample source driving the viewer without live hardware.
//!
//! A vehicle drives around a closed oval course with a slowly wandering
//! cross-track error. Two GPS antennas sit on either side of the body and
//! report its position with Gaussian noise.

use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::SeedableRng;
use trajview_core::nalgebra::{Rotation2, Vector2};
use trajview_core::{GpsFix, Point2D, Sample};

use crate::noise::{gaussian_noise, rand_noise};

/// Parameters of the synthetic drive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedConfig {
    /// Forward speed along the course [m/s]
    pub speed: f64,
    /// Time between samples [s]
    pub dt: f64,
    /// GPS position noise standard deviation [m]
    pub gps_noise: f64,
    /// Lateral distance of each antenna from the vehicle center [m]
    pub antenna_offset: f64,
    /// Largest cross-track error [m]
    pub max_cross_track: f64,
    /// Seed for the noise generator
    pub seed: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            speed: 8.0,
            dt: 0.05,
            gps_noise: 0.4,
            antenna_offset: 0.5,
            max_cross_track: 1.5,
            seed: 42,
        }
    }
}

pub struct DemoFeed {
    /// Closed course, last point equals the first
    course: Vec<Point2D>,
    /// Distance along the course at each course point
    station: Vec<f64>,
    travelled: f64,
    cross_track: f64,
    config: FeedConfig,
    rng: StdRng,
}

impl DemoFeed {
    /// Oval course of two half circles of `radius` joined by `straight` long sides.
    pub fn oval(radius: f64, straight: f64, points_per_arc: usize, config: FeedConfig) -> Self {
        let half = straight / 2.0;
        let n = points_per_arc.max(2);
        let mut course = vec![Point2D::new(-half, -radius), Point2D::new(half, -radius)];
        for i in 1..=n {
            let a = -PI / 2.0 + PI * i as f64 / n as f64;
            course.push(Point2D::new(half + radius * a.cos(), radius * a.sin()));
        }
        course.push(Point2D::new(-half, radius));
        for i in 1..=n {
            let a = PI / 2.0 + PI * i as f64 / n as f64;
            course.push(Point2D::new(-half + radius * a.cos(), radius * a.sin()));
        }
        // Close the loop exactly
        let first = course[0];
        if let Some(last) = course.last_mut() {
            *last = first;
        }
        Self::from_course(course, config)
    }

    /// Drive along an arbitrary polyline. Needs at least 2 points.
    pub fn from_course(course: Vec<Point2D>, config: FeedConfig) -> Self {
        let mut station = Vec::with_capacity(course.len());
        let mut total = 0.0;
        station.push(0.0);
        for pair in course.windows(2) {
            total += (pair[1] - pair[0]).norm();
            station.push(total);
        }
        Self {
            course,
            station,
            travelled: 0.0,
            cross_track: 0.0,
            rng: StdRng::seed_from_u64(config.seed),
            config,
        }
    }

    pub fn course(&self) -> &[Point2D] {
        &self.course
    }

    pub fn length(&self) -> f64 {
        self.station.last().copied().unwrap_or(0.0)
    }

    /// Position and heading at the start of the course.
    pub fn start(&self) -> (Point2D, f64) {
        self.on_course(0.0)
    }

    /// Rewind to the start with a fresh noise sequence.
    pub fn reset(&mut self) {
        self.travelled = 0.0;
        self.cross_track = 0.0;
        self.rng = StdRng::seed_from_u64(self.config.seed);
    }

    /// Advance one time step and report the new vehicle sample.
    pub fn next_sample(&mut self) -> Sample {
        self.travelled += self.config.speed * self.config.dt;
        let step = 0.1 * self.config.max_cross_track * rand_noise(&mut self.rng);
        self.cross_track = (self.cross_track + step)
            .clamp(-self.config.max_cross_track, self.config.max_cross_track);

        let (on_course, heading) = self.on_course(self.travelled);
        let rot = Rotation2::new(heading);
        let position = on_course + rot * Vector2::new(0.0, self.cross_track);

        let offset = rot * Vector2::new(0.0, self.config.antenna_offset);
        let primary = position + offset + self.gps_error();
        let secondary = position - offset + self.gps_error();

        Sample::new(position, heading).with_gps(GpsFix::new(primary, secondary))
    }

    fn gps_error(&mut self) -> Vector2<f64> {
        let std_dev = self.config.gps_noise;
        Vector2::new(
            gaussian_noise(&mut self.rng, std_dev),
            gaussian_noise(&mut self.rng, std_dev),
        )
    }

    /// Point and tangent heading at distance `s` along the closed course.
    fn on_course(&self, s: f64) -> (Point2D, f64) {
        let length = self.length();
        if self.course.len() < 2 || length <= 0.0 {
            let p = self.course.first().copied().unwrap_or_else(Point2D::origin);
            return (p, 0.0);
        }
        let s = s.rem_euclid(length);
        let seg = self
            .station
            .partition_point(|&st| st <= s)
            .clamp(1, self.course.len() - 1);
        let (a, b) = (self.course[seg - 1], self.course[seg]);
        let seg_len = self.station[seg] - self.station[seg - 1];
        let t = if seg_len > 0.0 {
            (s - self.station[seg - 1]) / seg_len
        } else {
            0.0
        };
        let d = b - a;
        (a + d * t, d.y.atan2(d.x))
    }
}

impl Default for DemoFeed {
    fn default() -> Self {
        Self::oval(40.0, 120.0, 24, FeedConfig::default())
    }
}
