use serde::{Deserialize, Serialize};

/// Unique identifier for a player in a round.
pub type PlayerId = u64;

/// A golfer taking part in a round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub display_name: String,
    /// Playing handicap. Negative values are plus handicaps.
    #[serde(default)]
    pub handicap: f64,
}

impl Player {
    pub fn new(id: PlayerId, display_name: impl Into<String>, handicap: f64) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            handicap,
        }
    }

    /// Whole strokes the handicap is worth for allocation.
    pub fn handicap_strokes(&self) -> i32 {
        self.handicap.round() as i32
    }
}
