use serde::{Deserialize, Serialize};

use fairway_core::score::HoleScore;

/// Stableford points for a hole played `relative_to_par` strokes from par.
///
/// Scoring rules:
/// - Albatross or better: 8
/// - Eagle: 5
/// - Birdie: 3
/// - Par: 2
/// - Bogey: 1
/// - Double bogey or worse: 0
pub fn stableford_points(relative_to_par: i32) -> i32 {
    match relative_to_par {
        i32::MIN..=-3 => 8,
        -2 => 5,
        -1 => 3,
        0 => 2,
        1 => 1,
        _ => 0,
    }
}

/// Points awarded per Dots event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DotValues {
    pub fairway_hit: i32,
    pub green_in_regulation: i32,
    pub one_putt: i32,
    pub birdie: i32,
    pub eagle: i32,
    pub double_bogey: i32,
}

impl Default for DotValues {
    fn default() -> Self {
        Self {
            fairway_hit: 1,
            green_in_regulation: 1,
            one_putt: 1,
            birdie: 2,
            eagle: 5,
            double_bogey: -1,
        }
    }
}

/// Which Dots events fired on one hole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DotEvents {
    pub fairway_hit: bool,
    pub green_in_regulation: bool,
    pub one_putt: bool,
    pub birdie: bool,
    /// Eagle or better. Excludes `birdie`.
    pub eagle: bool,
    /// Double bogey or worse.
    pub double_bogey: bool,
}

impl DotEvents {
    /// Detect the events on a hole. Scoring events follow from strokes and
    /// par, so birdie and eagle never fire together.
    pub fn detect(score: &HoleScore, par: u8) -> Self {
        let relative = score.relative_to_par(par);
        Self {
            fairway_hit: score.fairway_hit,
            green_in_regulation: score.green_in_regulation,
            one_putt: score.putts == Some(1),
            birdie: relative == -1,
            eagle: relative <= -2,
            double_bogey: relative >= 2,
        }
    }

    pub fn total(&self, values: &DotValues) -> i32 {
        let mut dots = 0;
        if self.fairway_hit {
            dots += values.fairway_hit;
        }
        if self.green_in_regulation {
            dots += values.green_in_regulation;
        }
        if self.one_putt {
            dots += values.one_putt;
        }
        if self.birdie {
            dots += values.birdie;
        }
        if self.eagle {
            dots += values.eagle;
        }
        if self.double_bogey {
            dots += values.double_bogey;
        }
        dots
    }
}
