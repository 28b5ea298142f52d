//! Hole-by-hole comparison formats: match play, Nassau, and skins.

pub mod match_play;
pub mod nassau;
pub mod skins;

pub use match_play::{MatchOutcome, MatchPlay, MatchPlayConfig, MatchPlayResult, MatchState};
pub use nassau::{Nassau, NassauConfig, NassauResult};
pub use skins::{Skins, SkinsConfig, SkinsResult};
