#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod data;
pub mod feed;
pub mod item;
pub mod noise;
pub mod palette;
pub mod surface;

pub use app::{App, Settings};

pub mod prelude {
    pub use crate::data::{plot_bounds, TrajectoryPlot};
    pub use crate::feed::{DemoFeed, FeedConfig};
    pub use crate::item::draw_vehicle;
    pub use crate::noise::{gaussian_noise, rand_noise};
    pub use crate::palette::Palette;
    pub use crate::surface::EguiSurface;
}
