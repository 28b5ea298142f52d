use serde::{Deserialize, Serialize};

use fairway_core::error::ScoringError;
use fairway_core::format::{FormatMetadata, Leaderboard, ScoreOrder, ScoringFormat, Standings};
use fairway_core::mode::GameMode;
use fairway_core::player::PlayerId;
use fairway_core::round::Round;

/// Skins options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkinsConfig {
    /// Value of the skin on each hole.
    pub skin_value: u32,
    pub net: bool,
}

impl Default for SkinsConfig {
    fn default() -> Self {
        Self {
            skin_value: 1,
            net: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkinOutcome {
    /// `holes` counts this hole plus every carried hole it collected.
    Won {
        player: PlayerId,
        value: u32,
        holes: u8,
    },
    /// Tied for low; `carry` is the value now riding on the next hole.
    Carried { carry: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinHole {
    pub hole: u8,
    pub outcome: SkinOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinTotal {
    pub player_id: PlayerId,
    pub skins: u8,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinsResult {
    pub holes: Vec<SkinHole>,
    pub totals: Vec<SkinTotal>,
    /// Carry left unclaimed after the last contested hole. Reported, never
    /// awarded.
    pub pushed: u32,
}

impl Standings for SkinsResult {
    fn leaderboard(&self) -> Leaderboard {
        Leaderboard::ranked(
            ScoreOrder::HighWins,
            self.totals.iter().map(|t| (t.player_id, t.value as i64)),
        )
    }
}

/// Skins: the outright low score on a hole wins its skin; ties carry the
/// value forward.
#[derive(Debug, Clone, Default)]
pub struct Skins {
    pub config: SkinsConfig,
}

impl Skins {
    pub fn new(config: SkinsConfig) -> Self {
        Self { config }
    }
}

impl ScoringFormat for Skins {
    type Output = SkinsResult;

    fn metadata(&self) -> FormatMetadata {
        FormatMetadata {
            mode: GameMode::Skins,
            name: "Skins".to_string(),
            description: "Outright low score wins the hole. Ties carry the skin forward."
                .to_string(),
            min_players: 2,
            max_players: u8::MAX,
        }
    }

    /// Only holes every player has scored are contested; a partial hole
    /// leaves the carry untouched.
    fn compute(&self, round: &Round) -> Result<SkinsResult, ScoringError> {
        self.metadata().check_player_count(round)?;

        let mut totals: Vec<SkinTotal> = round
            .players()
            .iter()
            .map(|p| SkinTotal {
                player_id: p.id,
                skins: 0,
                value: 0,
            })
            .collect();
        let mut holes = Vec::new();
        let mut carry = 0u32;
        let mut carried_holes = 0u8;

        for hole in round.course.holes() {
            if !round.hole_complete(hole.number) {
                continue;
            }
            let scores: Vec<(PlayerId, i32)> = round
                .players()
                .iter()
                .filter_map(|p| Some((p.id, round.scoring_strokes(p.id, hole.number, self.config.net)?)))
                .collect();
            let Some(low) = scores.iter().map(|&(_, s)| s).min() else {
                continue;
            };
            let mut low_scorers = scores.iter().filter(|&&(_, s)| s == low);
            let pot = carry.saturating_add(self.config.skin_value);

            let outcome = match (low_scorers.next(), low_scorers.next()) {
                (Some(&(player, _)), None) => {
                    if let Some(total) = totals.iter_mut().find(|t| t.player_id == player) {
                        total.skins += carried_holes + 1;
                        total.value = total.value.saturating_add(pot);
                    }
                    let outcome = SkinOutcome::Won {
                        player,
                        value: pot,
                        holes: carried_holes + 1,
                    };
                    carry = 0;
                    carried_holes = 0;
                    outcome
                },
                _ => {
                    carry = pot;
                    carried_holes += 1;
                    SkinOutcome::Carried { carry }
                },
            };
            holes.push(SkinHole {
                hole: hole.number,
                outcome,
            });
        }

        if carry > 0 {
            tracing::debug!(carry, holes = carried_holes, "Skins carry pushed");
        }

        Ok(SkinsResult {
            holes,
            totals,
            pushed: carry,
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
    fn three_ties_carry_to_hole_four() {
        let round = RoundBuilder::new(3)
            .strokes(1, &[4, 4, 4, 3])
            .strokes(2, &[4, 4, 4, 4])
            .strokes(3, &[4, 4, 4, 5])
            .build();
        let result = Skins::new(SkinsConfig {
            skin_value: 10,
            net: false,
        })
        .compute(&round)
        .unwrap();

        assert_eq!(result.holes[2].outcome, SkinOutcome::Carried { carry: 30 });
        assert_eq!(
            result.holes[3].outcome,
            SkinOutcome::Won {
                player: 1,
                value: 40,
                holes: 4
            }
        );
        assert_eq!(result.totals[0].value, 40);
        assert_eq!(result.totals[0].skins, 4);
        assert_eq!(result.pushed, 0);
    }

    #[test]
    fn unresolved_carry_is_pushed_not_awarded() {
        let mut p1 = vec![4; 18];
        p1[0] = 3;
        let round = RoundBuilder::new(2).strokes(1, &p1).all_holes(2, 4).build();
        let result = Skins::default().compute(&round).unwrap();
        assert_eq!(result.totals[0].value, 1);
        assert_eq!(result.totals[1].value, 0);
        assert_eq!(result.pushed, 17);
    }

    #[test]
    fn large_carry_saturates() {
        let round = RoundBuilder::new(2)
            .strokes(1, &[4, 4, 3, 3])
            .strokes(2, &[4, 4, 4, 4])
            .build();
        let result = Skins::new(SkinsConfig {
            skin_value: u32::MAX / 2,
            net: false,
        })
        .compute(&round)
        .unwrap();
        assert_eq!(result.holes[1].outcome, SkinOutcome::Carried { carry: u32::MAX - 1 });
        assert_eq!(
            result.holes[2].outcome,
            SkinOutcome::Won {
                player: 1,
                value: u32::MAX,
                holes: 3
            }
        );
        assert_eq!(result.totals[0].value, u32::MAX);
    }

    #[test]
    fn tie_for_low_among_three_carries() {
        let round = RoundBuilder::new(3)
            .strokes(1, &[3])
            .strokes(2, &[3])
            .strokes(3, &[5])
            .build();
        let result = Skins::default().compute(&round).unwrap();
        assert_eq!(result.holes[0].outcome, SkinOutcome::Carried { carry: 1 });
        assert_eq!(result.pushed, 1);
    }

    #[test]
    fn incomplete_hole_is_not_contested() {
        let round = RoundBuilder::new(2)
            .strokes(1, &[3, 3])
            .strokes(2, &[4])
            .build();
        let result = Skins::default().compute(&round).unwrap();
        assert_eq!(result.holes.len(), 1);
        assert_eq!(result.winners(), vec![1]);
    }

    #[test]
    fn contracts() {
        let format = Skins::default();
        contract_empty_round_is_total(&format, 3);
        contract_rejects_too_few_players(&format);
        let round = RoundBuilder::new(3)
            .strokes(1, &[4, 3, 5])
            .strokes(2, &[4, 4, 4])
            .strokes(3, &[4, 5, 5])
            .build();
        contract_idempotent(&format, &round);
    }
}
