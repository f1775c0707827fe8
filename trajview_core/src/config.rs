//! Session configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewerError};

/// Default ring buffer capacity for the windowed views
pub const DEFAULT_BUFFER_SIZE: usize = 300;
/// Default vehicle width W [m]
pub const DEFAULT_FRONT_TRACK: f64 = 1.3;
/// Default vehicle length L [m]
pub const DEFAULT_WHEEL_BASE: f64 = 2.2;
/// Half side of the zoomed view window [m]
pub const DEFAULT_ZOOM_HALF_EXTENT: f64 = 15.0;
/// Margin added around the reference path for the full-map view [m]
pub const DEFAULT_MAP_MARGIN: f64 = 50.0;

/// Parameters fixed for the lifetime of a viewing session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Track and draw the two GPS receivers
    pub use_gps: bool,
    /// Vehicle width W [m]
    pub front_track: f64,
    /// Vehicle length L [m]
    pub wheel_base: f64,
    /// Number of recent samples shown in the zoomed view
    pub buffer_size: usize,
    /// Half side of the zoomed window [m]
    pub zoom_half_extent: f64,
    /// Margin around the reference path in the full-map view [m]
    pub map_margin: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            use_gps: false,
            front_track: DEFAULT_FRONT_TRACK,
            wheel_base: DEFAULT_WHEEL_BASE,
            buffer_size: DEFAULT_BUFFER_SIZE,
            zoom_half_extent: DEFAULT_ZOOM_HALF_EXTENT,
            map_margin: DEFAULT_MAP_MARGIN,
        }
    }
}

impl ViewerConfig {
    /// Default configuration with GPS tracking switched on.
    pub fn with_gps() -> Self {
        Self {
            use_gps: true,
            ..Default::default()
        }
    }

    /// Check every parameter, reporting the first offending one.
    pub fn validate(&self) -> Result<()> {
        if self.buffer_size == 0 {
            return Err(ViewerError::InvalidCapacity { capacity: 0 });
        }
        positive("front_track", self.front_track)?;
        positive("wheel_base", self.wheel_base)?;
        positive("zoom_half_extent", self.zoom_half_extent)?;
        if !(self.map_margin.is_finite() && self.map_margin >= 0.0) {
            return Err(ViewerError::InvalidConfiguration {
                field: "map_margin",
                value: self.map_margin,
            });
        }
        Ok(())
    }
}

pub(crate) fn positive(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ViewerError::InvalidConfiguration { field, value })
    }
}
