//! Formats where sides change during the round: Wolf, Vegas, and Sixes.

pub mod rotation;
pub mod sixes;
pub mod team;
pub mod vegas;
pub mod wolf;

pub use rotation::{SegmentPairing, SixesSchedule};
pub use sixes::{Sixes, SixesConfig, SixesResult};
pub use vegas::{DoubleDigitRule, Vegas, VegasConfig, VegasResult};
pub use wolf::{Wolf, WolfChoice, WolfConfig, WolfDecision, WolfResult};
