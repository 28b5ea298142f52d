use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use fairway_core::player::PlayerId;
use fairway_core::round::Round;

/// Synthesized putt counts keyed by `(player, hole)`.
///
/// Only holes with a stroke count and no recorded putts appear here. Real
/// putt data is never overwritten.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimatedPutts {
    putts: BTreeMap<(PlayerId, u8), u8>,
}

impl EstimatedPutts {
    pub fn get(&self, player: PlayerId, hole: u8) -> Option<u8> {
        self.putts.get(&(player, hole)).copied()
    }

    /// Number of holes filled in.
    pub fn filled(&self) -> usize {
        self.putts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.putts.is_empty()
    }
}

/// Weighted putt outcomes `(putts, weight)` for a score relative to par.
fn putt_weights(relative_to_par: i32) -> &'static [(u8, u32)] {
    match relative_to_par {
        i32::MIN..=-2 => &[(0, 30), (1, 70)],
        -1 => &[(1, 65), (2, 35)],
        0 => &[(1, 20), (2, 70), (3, 10)],
        1 => &[(1, 10), (2, 65), (3, 25)],
        _ => &[(2, 55), (3, 35), (4, 10)],
    }
}

/// Guesses putt counts from strokes relative to par.
///
/// Approximate by nature. Callers opt in explicitly and should label any
/// result built from these numbers as estimated.
pub struct PuttEstimator {
    rng: StdRng,
}

impl PuttEstimator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw one putt count, capped at `strokes`.
    pub fn estimate(&mut self, strokes: u8, par: u8) -> u8 {
        let weights = putt_weights(strokes as i32 - par as i32);
        let total: u32 = weights.iter().map(|&(_, w)| w).sum();
        let mut roll = self.rng.random_range(0..total);
        let mut putts = weights[weights.len() - 1].0;
        for &(candidate, weight) in weights {
            if roll < weight {
                putts = candidate;
                break;
            }
            roll -= weight;
        }
        putts.min(strokes)
    }

    /// Estimate every scored hole that has no putt count. Holes are visited
    /// in player order, then hole order, so a given seed is reproducible.
    pub fn fill_missing(&mut self, round: &Round) -> EstimatedPutts {
        let mut estimated = EstimatedPutts::default();
        for player in round.players() {
            for hole in round.course.holes() {
                let Some(score) = round.score(player.id, hole.number) else {
                    continue;
                };
                if score.putts.is_some() {
                    continue;
                }
                let putts = self.estimate(score.strokes, hole.par);
                estimated.putts.insert((player.id, hole.number), putts);
            }
        }
        tracing::debug!(filled = estimated.filled(), "Estimated missing putt counts");
        estimated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairway_core::score::HoleScore;
    use fairway_core::test_helpers::RoundBuilder;

    #[test]
    fn same_seed_same_estimates() {
        let round = RoundBuilder::new(3)
            .all_holes(1, 4)
            .all_holes(2, 5)
            .all_holes(3, 6)
            .build();
        let a = PuttEstimator::new(7).fill_missing(&round);
        let b = PuttEstimator::new(7).fill_missing(&round);
        assert_eq!(a, b);
        assert_eq!(a.filled(), 54);
    }

    #[test]
    fn recorded_putts_are_left_alone() {
        let round = RoundBuilder::new(1)
            .hole(1, 1, HoleScore::strokes(4).with_putts(3))
            .hole(1, 2, HoleScore::strokes(4))
            .build();
        let estimated = PuttEstimator::new(1).fill_missing(&round);
        assert_eq!(estimated.get(1, 1), None);
        assert!(estimated.get(1, 2).is_some());
        assert_eq!(estimated.filled(), 1);
    }

    #[test]
    fn unscored_holes_are_not_estimated() {
        let round = RoundBuilder::new(2).strokes(1, &[4]).build();
        let estimated = PuttEstimator::new(3).fill_missing(&round);
        assert_eq!(estimated.filled(), 1);
        assert_eq!(estimated.get(2, 1), None);
    }

    #[test]
    fn estimate_within_weight_table() {
        let mut estimator = PuttEstimator::new(42);
        for _ in 0..200 {
            let putts = estimator.estimate(3, 4);
            assert!(putts <= 2, "birdie drew {putts} putts");
            let putts = estimator.estimate(1, 3);
            assert!(putts <= 1, "ace drew {putts} putts");
            let putts = estimator.estimate(7, 4);
            assert!((2..=4).contains(&putts));
        }
    }
}
