//! Snake: a three-putt penalty passed around the group, plus an opt-in putt
//! estimator for rounds entered without putt counts.

pub mod estimator;
pub mod snake;

pub use estimator::{EstimatedPutts, PuttEstimator};
pub use snake::{Snake, SnakeConfig, SnakeResult, SnakeSettlement, SnakeVariant};
