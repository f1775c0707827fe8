//! Errors reported by the viewer core.
//!
//! Every variant is a usage error: nothing here is transient, so callers are
//! expected to fix the call sequence or input instead of retrying.

/// Errors returned by buffer, state and controller operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ViewerError {
    /// Ring buffer requested with no slots
    #[error("ring buffer capacity must be at least 1 (got {capacity})")]
    InvalidCapacity { capacity: usize },

    /// A sample was recorded before the state was initialized
    #[error("trajectory state used before initialize")]
    NotInitialized,

    /// A tick was issued before the views were set up
    #[error("dual view controller ticked before setup")]
    NotSetup,

    /// GPS mode is on but the sample carries no GPS fix
    #[error("GPS mode is enabled but the sample has no GPS fix")]
    MissingGpsData,

    /// Reference path too short to span a bounding box
    #[error("reference path needs at least 2 points (got {points})")]
    DegeneratePath { points: usize },

    /// Geometry or view parameter outside its valid range
    #[error("invalid configuration: {field} = {value}")]
    InvalidConfiguration { field: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, ViewerError>;
