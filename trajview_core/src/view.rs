//! Axis-aligned view windows for the zoomed and full-map plots.

use crate::types::Point2D;

/// Axis limits of a plot view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewBounds {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Bounding box of `points`.
    ///
    /// Returns None for fewer than 2 points, where no extent is defined.
    pub fn enclosing<'a>(points: impl IntoIterator<Item = &'a Point2D>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut count = 1;
        let mut bounds = Self::new(first.x, first.x, first.y, first.y);
        for p in points {
            bounds.x_min = bounds.x_min.min(p.x);
            bounds.x_max = bounds.x_max.max(p.x);
            bounds.y_min = bounds.y_min.min(p.y);
            bounds.y_max = bounds.y_max.max(p.y);
            count += 1;
        }
        (count >= 2).then_some(bounds)
    }

    /// Grow the bounds by `margin` on every side.
    pub fn expanded(&self, margin: f64) -> Self {
        Self::new(
            self.x_min - margin,
            self.x_max + margin,
            self.y_min - margin,
            self.y_max + margin,
        )
    }

    pub fn contains(&self, point: &Point2D) -> bool {
        (self.x_min..=self.x_max).contains(&point.x) && (self.y_min..=self.y_max).contains(&point.y)
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

/// Square window of fixed half extent that follows the vehicle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewWindow {
    pub center_x: f64,
    pub center_y: f64,
    pub half_extent: f64,
}

impl ViewWindow {
    pub fn centered(center: Point2D, half_extent: f64) -> Self {
        Self {
            center_x: center.x,
            center_y: center.y,
            half_extent,
        }
    }

    /// Move the window center, keeping its size.
    pub fn recenter(&mut self, center: Point2D) {
        self.center_x = center.x;
        self.center_y = center.y;
    }

    pub fn center(&self) -> Point2D {
        Point2D::new(self.center_x, self.center_y)
    }

    pub fn bounds(&self) -> ViewBounds {
        ViewBounds::new(
            self.center_x - self.half_extent,
            self.center_x + self.half_extent,
            self.center_y - self.half_extent,
            self.center_y + self.half_extent,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enclosing_requires_two_points() {
        assert_eq!(ViewBounds::enclosing(&[] as &[Point2D]), None);
        assert_eq!(ViewBounds::enclosing(&[Point2D::new(1.0, 1.0)]), None);
    }

    #[test]
    fn test_enclosing_and_margin() {
        let path = [
            Point2D::new(0.0, 0.0),
            Point2D::new(100.0, -20.0),
            Point2D::new(40.0, 30.0),
        ];
        let bounds = ViewBounds::enclosing(&path).unwrap();
        assert_eq!(bounds, ViewBounds::new(0.0, 100.0, -20.0, 30.0));

        let map = bounds.expanded(50.0);
        assert_eq!(map, ViewBounds::new(-50.0, 150.0, -70.0, 80.0));
        assert_eq!(map.width(), 200.0);
        assert!(path.iter().all(|p| map.contains(p)));
    }

    #[test]
    fn test_window_recenter() {
        let mut window = ViewWindow::centered(Point2D::origin(), 15.0);
        assert_eq!(window.bounds(), ViewBounds::new(-15.0, 15.0, -15.0, 15.0));

        window.recenter(Point2D::new(10.0, 0.0));
        assert_eq!(window.bounds(), ViewBounds::new(-5.0, 25.0, -15.0, 15.0));
        assert_eq!(window.half_extent, 15.0);
    }
}
