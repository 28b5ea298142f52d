use serde::{Deserialize, Serialize};

use fairway_core::error::ScoringError;
use fairway_core::format::{FormatMetadata, Leaderboard, ScoreOrder, ScoringFormat, Standings};
use fairway_core::mode::GameMode;
use fairway_core::player::PlayerId;
use fairway_core::round::Round;

use crate::scoring::{DotEvents, DotValues};

/// Dots options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DotsConfig {
    pub values: DotValues,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleDots {
    pub hole: u8,
    pub events: DotEvents,
    pub dots: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerDots {
    pub player_id: PlayerId,
    pub total: i32,
    pub holes: Vec<HoleDots>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DotsResult {
    pub players: Vec<PlayerDots>,
}

impl Standings for DotsResult {
    fn leaderboard(&self) -> Leaderboard {
        Leaderboard::ranked(
            ScoreOrder::HighWins,
            self.players.iter().map(|p| (p.player_id, p.total as i64)),
        )
    }
}

/// Dots: additive bonus and penalty events per hole. Highest total wins.
#[derive(Debug, Clone, Default)]
pub struct Dots {
    pub config: DotsConfig,
}

impl Dots {
    pub fn new(config: DotsConfig) -> Self {
        Self { config }
    }
}

impl ScoringFormat for Dots {
    type Output = DotsResult;

    fn metadata(&self) -> FormatMetadata {
        FormatMetadata {
            mode: GameMode::Dots,
            name: "Dots".to_string(),
            description: "Earn dots for fairways, greens, one-putts, and birdies; lose one for a double."
                .to_string(),
            min_players: 1,
            max_players: u8::MAX,
        }
    }

    fn compute(&self, round: &Round) -> Result<DotsResult, ScoringError> {
        let values = &self.config.values;
        let players = round
            .players()
            .iter()
            .map(|player| {
                let holes: Vec<HoleDots> = round
                    .course
                    .holes()
                    .iter()
                    .filter_map(|hole| {
                        let score = round.score(player.id, hole.number)?;
                        let events = DotEvents::detect(score, hole.par);
                        let dots = events.total(values);
                        Some(HoleDots {
                            hole: hole.number,
                            events,
                            dots,
                        })
                    })
                    .collect();
                PlayerDots {
                    player_id: player.id,
                    total: holes.iter().map(|h| h.dots).sum(),
                    holes,
                }
            })
            .collect();
        Ok(DotsResult { players })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairway_core::score::HoleScore;
    use fairway_core::test_helpers::{
        RoundBuilder, contract_empty_round_is_total, contract_idempotent,
    };

    #[test]
    fn sums_events_across_holes() {
        let round = RoundBuilder::new(2)
            .hole(1, 1, HoleScore::strokes(3).with_putts(1).with_green(true))
            .hole(1, 2, HoleScore::strokes(6).with_putts(3))
            .hole(2, 1, HoleScore::strokes(4).with_putts(2).with_fairway(true).with_green(true))
            .build();
        let result = Dots::default().compute(&round).unwrap();
        // Hole 1: green +1, one-putt +1, birdie +2 = 4; hole 2: double -1
        assert_eq!(result.players[0].total, 3);
        assert_eq!(result.players[0].holes.len(), 2);
        assert_eq!(result.players[1].total, 2);
        assert_eq!(result.winners(), vec![1]);
    }

    #[test]
    fn custom_values_apply() {
        let config = DotsConfig {
            values: DotValues {
                birdie: 10,
                ..DotValues::default()
            },
        };
        let round = RoundBuilder::new(1).strokes(1, &[3]).build();
        let result = Dots::new(config).compute(&round).unwrap();
        assert_eq!(result.players[0].total, 10);
    }

    #[test]
    fn contracts() {
        let format = Dots::default();
        contract_empty_round_is_total(&format, 2);
        let round = RoundBuilder::new(2).strokes(1, &[3, 4, 6]).build();
        contract_idempotent(&format, &round);
    }
}
