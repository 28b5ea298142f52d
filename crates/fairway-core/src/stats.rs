use serde::{Deserialize, Serialize};

use crate::player::PlayerId;
use crate::round::Round;

/// Per-player performance summary over the holes scored so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundStats {
    pub player_id: PlayerId,
    pub holes_played: u8,
    pub strokes: u32,
    /// Sum of entered putts; holes without a putt count are skipped.
    pub putts: u32,
    pub holes_with_putts: u8,
    pub fairways_hit: u8,
    pub greens_in_regulation: u8,
    pub one_putts: u8,
    pub three_putts: u8,
    pub penalties: u32,
    pub sand_traps: u32,
    pub chips: u32,
    pub distribution: ScoringDistribution,
}

/// Count of holes by score relative to par.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringDistribution {
    pub eagles_or_better: u8,
    pub birdies: u8,
    pub pars: u8,
    pub bogeys: u8,
    pub double_bogeys_or_worse: u8,
}

impl ScoringDistribution {
    fn record(&mut self, relative_to_par: i32) {
        match relative_to_par {
            i32::MIN..=-2 => self.eagles_or_better += 1,
            -1 => self.birdies += 1,
            0 => self.pars += 1,
            1 => self.bogeys += 1,
            _ => self.double_bogeys_or_worse += 1,
        }
    }
}

impl RoundStats {
    /// Average putts per hole with an entered putt count.
    pub fn putts_per_hole(&self) -> Option<f64> {
        (self.holes_with_putts > 0).then(|| self.putts as f64 / self.holes_with_putts as f64)
    }
}

/// Aggregate statistics for every player in round order.
pub fn round_stats(round: &Round) -> Vec<RoundStats> {
    round
        .players()
        .iter()
        .map(|player| {
            let mut stats = RoundStats {
                player_id: player.id,
                ..RoundStats::default()
            };
            for hole in round.course.holes() {
                let Some(score) = round.score(player.id, hole.number) else {
                    continue;
                };
                stats.holes_played += 1;
                stats.strokes += score.strokes as u32;
                if let Some(putts) = score.putts {
                    stats.putts += putts as u32;
                    stats.holes_with_putts += 1;
                    match putts {
                        1 => stats.one_putts += 1,
                        p if p >= 3 => stats.three_putts += 1,
                        _ => {},
                    }
                }
                stats.fairways_hit += u8::from(score.fairway_hit);
                stats.greens_in_regulation += u8::from(score.green_in_regulation);
                stats.penalties += score.penalties as u32;
                stats.sand_traps += score.sand_traps as u32;
                stats.chips += score.chips as u32;
                stats.distribution.record(score.relative_to_par(hole.par));
            }
            stats
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::Course;
    use crate::mode::GameMode;
    use crate::player::Player;
    use crate::score::HoleScore;

    #[test]
    fn aggregates_scored_holes_only() {
        let course = Course::from_pars("Test", [4; 18]).unwrap();
        let mut round = Round::new(course, vec![Player::new(1, "Ann", 0.0)], GameMode::StrokePlay);
        round
            .record_score(1, 1, HoleScore::strokes(3).with_putts(1).with_fairway(true).with_green(true))
            .unwrap();
        round
            .record_score(1, 2, HoleScore::strokes(6).with_putts(3))
            .unwrap();
        round.record_score(1, 3, HoleScore::strokes(4)).unwrap();

        let stats = &round_stats(&round)[0];
        assert_eq!(stats.holes_played, 3);
        assert_eq!(stats.strokes, 13);
        assert_eq!(stats.putts, 4);
        assert_eq!(stats.holes_with_putts, 2);
        assert_eq!(stats.one_putts, 1);
        assert_eq!(stats.three_putts, 1);
        assert_eq!(stats.fairways_hit, 1);
        assert_eq!(stats.greens_in_regulation, 1);
        assert_eq!(stats.distribution.birdies, 1);
        assert_eq!(stats.distribution.pars, 1);
        assert_eq!(stats.distribution.double_bogeys_or_worse, 1);
        assert_eq!(stats.putts_per_hole(), Some(2.0));
    }

    #[test]
    fn no_putts_means_no_average() {
        let stats = RoundStats::default();
        assert_eq!(stats.putts_per_hole(), None);
    }
}
