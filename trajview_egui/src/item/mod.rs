//! Plot items drawn from core geometry.

mod vehicle;

pub use vehicle::draw_vehicle;
