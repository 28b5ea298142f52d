//! Formats that score each hole independently and sum a per-hole value.

pub mod dots;
pub mod points;
pub mod scoring;
pub mod stroke_play;

pub use dots::{Dots, DotsConfig, DotsResult};
pub use points::{Points, PointsConfig, PointsResult};
pub use stroke_play::{StrokePlay, StrokePlayConfig, StrokePlayResult};
