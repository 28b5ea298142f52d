use serde::{Deserialize, Serialize};

/// Direction of a missed fairway or green.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissDirection {
    Left,
    Right,
    Short,
    Long,
}

/// One player's result on one hole.
///
/// `strokes` is at least 1 once recorded. `putts` is expected to be no more
/// than `strokes` but this is not enforced; engines tolerate inconsistent
/// values. `putts` is `None` when the count was never entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleScore {
    pub strokes: u8,
    #[serde(default)]
    pub putts: Option<u8>,
    #[serde(default)]
    pub fairway_hit: bool,
    #[serde(default)]
    pub fairway_miss: Option<MissDirection>,
    #[serde(default)]
    pub green_in_regulation: bool,
    #[serde(default)]
    pub green_miss: Option<MissDirection>,
    #[serde(default)]
    pub chips: u8,
    #[serde(default)]
    pub sand_traps: u8,
    #[serde(default)]
    pub penalties: u8,
}

impl HoleScore {
    /// A score with only the stroke count filled in.
    pub fn strokes(strokes: u8) -> Self {
        Self {
            strokes,
            putts: None,
            fairway_hit: false,
            fairway_miss: None,
            green_in_regulation: false,
            green_miss: None,
            chips: 0,
            sand_traps: 0,
            penalties: 0,
        }
    }

    pub fn with_putts(mut self, putts: u8) -> Self {
        self.putts = Some(putts);
        self
    }

    pub fn with_fairway(mut self, hit: bool) -> Self {
        self.fairway_hit = hit;
        self
    }

    pub fn with_green(mut self, hit: bool) -> Self {
        self.green_in_regulation = hit;
        self
    }

    /// Strokes relative to par (negative = under par).
    pub fn relative_to_par(&self, par: u8) -> i32 {
        self.strokes as i32 - par as i32
    }
}
