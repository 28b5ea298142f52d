use serde::{Deserialize, Serialize};

use fairway_core::error::ScoringError;
use fairway_core::format::{FormatMetadata, Leaderboard, ScoreOrder, ScoringFormat, Standings};
use fairway_core::mode::GameMode;
use fairway_core::player::PlayerId;
use fairway_core::round::Round;

/// What happens to the digit order when someone makes double figures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DoubleDigitRule {
    /// Any score of 10 or more puts the higher score first for both teams.
    #[default]
    Flip,
    /// Always lower score first.
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VegasConfig {
    pub net: bool,
    /// Two teams of two. Defaults to the first two players against the last
    /// two.
    pub teams: Option<[[PlayerId; 2]; 2]>,
    pub double_digit_rule: DoubleDigitRule,
}

impl Default for VegasConfig {
    fn default() -> Self {
        Self {
            net: false,
            teams: None,
            double_digit_rule: DoubleDigitRule::Flip,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VegasHole {
    pub hole: u8,
    pub numbers: [u32; 2],
    pub flipped: bool,
    /// Index into `VegasResult::teams`, `None` on a tie.
    pub winner: Option<usize>,
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VegasResult {
    pub teams: [[PlayerId; 2]; 2],
    pub holes: Vec<VegasHole>,
    pub points: [u32; 2],
}

impl VegasResult {
    /// Points won minus points conceded for the team holding `player`.
    pub fn margin_for(&self, player: PlayerId) -> Option<i64> {
        let team = self.teams.iter().position(|t| t.contains(&player))?;
        Some(self.points[team] as i64 - self.points[1 - team] as i64)
    }
}

impl Standings for VegasResult {
    fn leaderboard(&self) -> Leaderboard {
        Leaderboard::ranked(
            ScoreOrder::HighWins,
            self.teams
                .iter()
                .flatten()
                .map(|&p| (p, self.margin_for(p).unwrap_or_default())),
        )
    }
}

/// Join two scores into one number, e.g. 4 and 5 into 45, 4 and 10 into
/// 410.
pub fn concat_scores(first: u32, second: u32) -> u32 {
    let mut shift = 10;
    while second >= shift {
        shift *= 10;
    }
    first * shift + second
}

/// A team's number on a hole. Lower score first unless `flip`.
pub fn team_number(a: u32, b: u32, flip: bool) -> u32 {
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    if flip {
        concat_scores(high, low)
    } else {
        concat_scores(low, high)
    }
}

/// Vegas: each team's two scores read as one number, lowest number wins the
/// difference.
#[derive(Debug, Clone, Default)]
pub struct Vegas {
    pub config: VegasConfig,
}

impl Vegas {
    pub fn new(config: VegasConfig) -> Self {
        Self { config }
    }

    fn resolve_teams(&self, round: &Round) -> Result<[[PlayerId; 2]; 2], ScoringError> {
        let players = round.player_ids();
        let teams = match self.config.teams {
            Some(teams) => teams,
            None => [[players[0], players[1]], [players[2], players[3]]],
        };
        let flat: Vec<PlayerId> = teams.iter().flatten().copied().collect();
        if let Some(&unknown) = flat.iter().find(|p| !players.contains(p)) {
            return Err(ScoringError::UnknownPlayer(unknown));
        }
        for (i, p) in flat.iter().enumerate() {
            if flat[i + 1..].contains(p) {
                return Err(ScoringError::InvalidTeams(format!(
                    "player {p} appears on more than one team slot"
                )));
            }
        }
        Ok(teams)
    }
}

impl ScoringFormat for Vegas {
    type Output = VegasResult;

    fn metadata(&self) -> FormatMetadata {
        FormatMetadata {
            mode: GameMode::Vegas,
            name: "Vegas".to_string(),
            description: "Two-player teams combine their scores into one number; low number wins the difference."
                .to_string(),
            min_players: 4,
            max_players: 4,
        }
    }

    fn compute(&self, round: &Round) -> Result<VegasResult, ScoringError> {
        self.metadata().check_player_count(round)?;
        let teams = self.resolve_teams(round)?;
        let mut holes = Vec::new();
        let mut points = [0u32; 2];

        for hole in round.course.holes() {
            let scores: Option<Vec<u32>> = teams
                .iter()
                .flatten()
                .map(|&p| {
                    round
                        .scoring_strokes(p, hole.number, self.config.net)
                        .map(|s| s.max(1) as u32)
                })
                .collect();
            let Some(scores) = scores else {
                continue;
            };

            let flipped = self.config.double_digit_rule == DoubleDigitRule::Flip
                && scores.iter().any(|&s| s >= 10);
            let numbers = [
                team_number(scores[0], scores[1], flipped),
                team_number(scores[2], scores[3], flipped),
            ];
            let (winner, hole_points) = match numbers[0].cmp(&numbers[1]) {
                std::cmp::Ordering::Less => (Some(0), numbers[1] - numbers[0]),
                std::cmp::Ordering::Greater => (Some(1), numbers[0] - numbers[1]),
                std::cmp::Ordering::Equal => (None, 0),
            };
            if let Some(team) = winner {
                points[team] = points[team].saturating_add(hole_points);
            }
            holes.push(VegasHole {
                hole: hole.number,
                numbers,
                flipped,
                winner,
                points: hole_points,
            });
        }

        Ok(VegasResult {
            teams,
            holes,
            points,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairway_core::test_helpers::{
        RoundBuilder, contract_empty_round_is_total, contract_idempotent,
        contract_rejects_too_few_players,
    };

    #[test]
    fn concat_handles_double_digits() {
        assert_eq!(concat_scores(4, 5), 45);
        assert_eq!(concat_scores(4, 10), 410);
        assert_eq!(concat_scores(10, 4), 104);
    }

    #[test]
    fn team_number_lower_first() {
        assert_eq!(team_number(5, 4, false), 45);
        assert_eq!(team_number(4, 5, true), 54);
    }

    #[test]
    fn lower_number_wins_difference() {
        let round = RoundBuilder::new(4)
            .strokes(1, &[4])
            .strokes(2, &[5])
            .strokes(3, &[5])
            .strokes(4, &[6])
            .build();
        let result = Vegas::default().compute(&round).unwrap();
        assert_eq!(result.holes[0].numbers, [45, 56]);
        assert_eq!(result.holes[0].winner, Some(0));
        assert_eq!(result.points, [11, 0]);
        assert_eq!(result.margin_for(3), Some(-11));
        assert_eq!(result.winners(), vec![1, 2]);
    }

    #[test]
    fn double_digit_flips_both_teams() {
        let round = RoundBuilder::new(4)
            .strokes(1, &[4])
            .strokes(2, &[10])
            .strokes(3, &[5])
            .strokes(4, &[6])
            .build();
        let result = Vegas::default().compute(&round).unwrap();
        let hole = &result.holes[0];
        assert!(hole.flipped);
        assert_eq!(hole.numbers, [104, 65]);
        assert_eq!(hole.winner, Some(1));
        assert_eq!(hole.points, 39);
    }

    #[test]
    fn no_flip_rule_keeps_order() {
        let round = RoundBuilder::new(4)
            .strokes(1, &[4])
            .strokes(2, &[10])
            .strokes(3, &[5])
            .strokes(4, &[6])
            .build();
        let result = Vegas::new(VegasConfig {
            double_digit_rule: DoubleDigitRule::None,
            ..VegasConfig::default()
        })
        .compute(&round)
        .unwrap();
        assert_eq!(result.holes[0].numbers, [410, 56]);
        assert_eq!(result.holes[0].winner, Some(1));
    }

    #[test]
    fn net_scores_below_one_count_as_one() {
        // 54 strokes: three on every hole, so player 1's gross 2 nets -1.
        let round = RoundBuilder::new(4)
            .strokes(1, &[2])
            .strokes(2, &[4])
            .strokes(3, &[5])
            .strokes(4, &[6])
            .handicap(1, 54.0)
            .build();
        let result = Vegas::new(VegasConfig {
            net: true,
            ..VegasConfig::default()
        })
        .compute(&round)
        .unwrap();
        assert_eq!(result.holes[0].numbers, [14, 56]);
        assert!(!result.holes[0].flipped);
        assert_eq!(result.points, [42, 0]);
    }

    #[test]
    fn configured_teams_used() {
        let round = RoundBuilder::new(4)
            .strokes(1, &[4])
            .strokes(2, &[5])
            .strokes(3, &[5])
            .strokes(4, &[6])
            .build();
        let result = Vegas::new(VegasConfig {
            teams: Some([[1, 4], [2, 3]]),
            ..VegasConfig::default()
        })
        .compute(&round)
        .unwrap();
        assert_eq!(result.holes[0].numbers, [46, 55]);
        assert_eq!(result.points, [9, 0]);
    }

    #[test]
    fn requires_exactly_four_players() {
        let round = RoundBuilder::new(5).build();
        assert!(matches!(
            Vegas::default().compute(&round),
            Err(ScoringError::PlayerCount { expected: 4, actual: 5, .. })
        ));
    }

    #[test]
    fn repeated_team_member_rejected() {
        let round = RoundBuilder::new(4).build();
        let result = Vegas::new(VegasConfig {
            teams: Some([[1, 2], [2, 3]]),
            ..VegasConfig::default()
        })
        .compute(&round);
        assert!(matches!(result, Err(ScoringError::InvalidTeams(_))));
    }

    #[test]
    fn contracts() {
        let format = Vegas::default();
        contract_empty_round_is_total(&format, 4);
        contract_rejects_too_few_players(&format);
        let round = RoundBuilder::new(4)
            .all_holes(1, 4)
            .all_holes(2, 5)
            .all_holes(3, 3)
            .strokes(4, &[6, 7])
            .build();
        contract_idempotent(&format, &round);
    }
}
