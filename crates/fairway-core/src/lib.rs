pub mod allocation;
pub mod course;
pub mod error;
pub mod format;
pub mod mode;
pub mod player;
pub mod registry;
pub mod round;
pub mod score;
pub mod stats;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use std::fmt::Debug;

    use crate::course::Course;
    use crate::format::{ScoringFormat, Standings};
    use crate::mode::GameMode;
    use crate::player::{Player, PlayerId};
    use crate::round::Round;
    use crate::score::HoleScore;

    /// Pars for a standard par-72 layout.
    pub const PAR_72: [u8; 18] = [4, 4, 3, 5, 4, 4, 3, 4, 5, 4, 4, 3, 5, 4, 4, 3, 4, 5];

    pub fn par_72_course() -> Course {
        Course::from_pars("Test Links", PAR_72).expect("PAR_72 is a valid layout")
    }

    /// A course where every hole is a par 4.
    pub fn flat_par_4_course() -> Course {
        Course::from_pars("Par Fours", [4; 18]).expect("all par 4 is a valid layout")
    }

    /// Create `n` scratch players with sequential IDs starting at 1.
    pub fn make_players(n: usize) -> Vec<Player> {
        (0..n)
            .map(|i| Player::new(i as PlayerId + 1, format!("Player{}", i + 1), 0.0))
            .collect()
    }

    /// Fluent builder for rounds with scores already entered.
    pub struct RoundBuilder {
        round: Round,
    }

    impl RoundBuilder {
        /// `n` scratch players on a flat par-4 course.
        pub fn new(n: usize) -> Self {
            Self::on_course(flat_par_4_course(), n)
        }

        pub fn on_course(course: Course, n: usize) -> Self {
            Self {
                round: Round::new(course, make_players(n), GameMode::StrokePlay),
            }
        }

        pub fn mode(mut self, mode: GameMode) -> Self {
            self.round.game_mode = mode;
            self
        }

        pub fn side_modes(mut self, modes: impl IntoIterator<Item = GameMode>) -> Self {
            self.round.side_modes.extend(modes);
            self
        }

        /// Enter gross strokes for `player` starting at hole 1.
        pub fn strokes(mut self, player: PlayerId, strokes: &[u8]) -> Self {
            for (i, &s) in strokes.iter().enumerate() {
                self.round
                    .record_score(player, i as u8 + 1, HoleScore::strokes(s))
                    .expect("builder scores must be valid");
            }
            self
        }

        /// Enter the same gross score for `player` on every hole.
        pub fn all_holes(self, player: PlayerId, strokes: u8) -> Self {
            self.strokes(player, &[strokes; 18])
        }

        /// Replace one hole's score outright.
        pub fn hole(mut self, player: PlayerId, hole: u8, score: HoleScore) -> Self {
            self.round
                .record_score(player, hole, score)
                .expect("builder scores must be valid");
            self
        }

        /// Set the putt count on an already-entered hole, entering a par
        /// score first if needed.
        pub fn putts(mut self, player: PlayerId, hole: u8, putts: u8) -> Self {
            let mut score = self
                .round
                .score(player, hole)
                .cloned()
                .unwrap_or_else(|| HoleScore::strokes(4));
            score.putts = Some(putts);
            self.hole(player, hole, score)
        }

        pub fn handicap(mut self, player: PlayerId, handicap: f64) -> Self {
            self.round
                .set_handicap(player, handicap)
                .expect("builder player must exist");
            self
        }

        pub fn build(self) -> Round {
            self.round
        }
    }

    // ================================================================
    // Scoring Format Contract Tests
    // ================================================================
    // Every ScoringFormat implementation must pass these. Format crates
    // call them from their own #[cfg(test)] modules.

    /// Computing twice on identical input yields identical output.
    pub fn contract_idempotent<F>(format: &F, round: &Round)
    where
        F: ScoringFormat,
        F::Output: PartialEq + Debug,
    {
        let first = format.compute(round).expect("compute must succeed");
        let second = format.compute(round).expect("compute must succeed");
        assert_eq!(first, second, "compute must be deterministic");
    }

    /// A round with no scores entered still produces a result with a
    /// leaderboard row for every player.
    pub fn contract_empty_round_is_total<F: ScoringFormat>(format: &F, player_count: usize) {
        let round = RoundBuilder::new(player_count).build();
        let output = format
            .compute(&round)
            .expect("compute on an empty round must succeed");
        assert_eq!(
            output.leaderboard().entries.len(),
            player_count,
            "leaderboard must list every player"
        );
    }

    /// Too few players is a validation error, not a panic or empty result.
    pub fn contract_rejects_too_few_players<F: ScoringFormat>(format: &F) {
        let min = format.metadata().min_players as usize;
        if min <= 1 {
            return;
        }
        let round = RoundBuilder::new(min - 1).build();
        assert!(
            format.compute(&round).is_err(),
            "{} must reject {} players",
            format.metadata().name,
            min - 1
        );
    }
}
