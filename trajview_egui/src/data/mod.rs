//! Conversions from core trajectory data into [`egui_plot`] types.

mod adapter;

pub use adapter::*;
