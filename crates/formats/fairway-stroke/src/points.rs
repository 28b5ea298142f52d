use serde::{Deserialize, Serialize};

use fairway_core::error::ScoringError;
use fairway_core::format::{FormatMetadata, Leaderboard, ScoreOrder, ScoringFormat, Standings};
use fairway_core::mode::GameMode;
use fairway_core::player::PlayerId;
use fairway_core::round::Round;

use crate::scoring::stableford_points;

/// Stableford options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointsConfig {
    /// Key the points table on net strokes instead of gross.
    pub net: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolePoints {
    pub hole: u8,
    pub points: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPoints {
    pub player_id: PlayerId,
    pub total: i32,
    pub holes: Vec<HolePoints>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsResult {
    pub players: Vec<PlayerPoints>,
}

impl Standings for PointsResult {
    fn leaderboard(&self) -> Leaderboard {
        Leaderboard::ranked(
            ScoreOrder::HighWins,
            self.players.iter().map(|p| (p.player_id, p.total as i64)),
        )
    }
}

/// Stableford: fixed points per hole by score relative to par. Highest
/// total wins.
#[derive(Debug, Clone, Default)]
pub struct Points {
    pub config: PointsConfig,
}

impl Points {
    pub fn new(config: PointsConfig) -> Self {
        Self { config }
    }
}

impl ScoringFormat for Points {
    type Output = PointsResult;

    fn metadata(&self) -> FormatMetadata {
        FormatMetadata {
            mode: GameMode::Points,
            name: "Points".to_string(),
            description: "Stableford scoring: points for each hole by score relative to par."
                .to_string(),
            min_players: 1,
            max_players: u8::MAX,
        }
    }

    fn compute(&self, round: &Round) -> Result<PointsResult, ScoringError> {
        let players = round
            .players()
            .iter()
            .map(|player| {
                let holes: Vec<HolePoints> = round
                    .course
                    .holes()
                    .iter()
                    .filter_map(|hole| {
                        let strokes = round.scoring_strokes(player.id, hole.number, self.config.net)?;
                        Some(HolePoints {
                            hole: hole.number,
                            points: stableford_points(strokes - hole.par as i32),
                        })
                    })
                    .collect();
                PlayerPoints {
                    player_id: player.id,
                    total: holes.iter().map(|h| h.points).sum(),
                    holes,
                }
            })
            .collect();
        Ok(PointsResult { players })
    }
}
