use serde::{Deserialize, Serialize};

use fairway_core::error::ScoringError;
use fairway_core::format::{FormatMetadata, Leaderboard, ScoreOrder, ScoringFormat, Standings};
use fairway_core::mode::GameMode;
use fairway_core::player::PlayerId;
use fairway_core::round::Round;

use crate::team::best_ball;

/// What the wolf chose on the tee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WolfChoice {
    Partner(PlayerId),
    Lone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WolfDecision {
    pub hole: u8,
    pub choice: WolfChoice,
}

/// Wolf options. Decisions are made on the course and passed in here;
/// this format never picks partners itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WolfConfig {
    pub net: bool,
    pub decisions: Vec<WolfDecision>,
    /// Points to each player on the winning side.
    pub win_points: i32,
    /// Points to each player on the losing side.
    pub loss_points: i32,
    /// Applied to both when the wolf goes alone.
    pub lone_multiplier: i32,
}

impl Default for WolfConfig {
    fn default() -> Self {
        Self {
            net: false,
            decisions: Vec::new(),
            win_points: 2,
            loss_points: -1,
            lone_multiplier: 2,
        }
    }
}

impl WolfConfig {
    pub fn decision(&self, hole: u8) -> Option<WolfChoice> {
        self.decisions
            .iter()
            .rev()
            .find(|d| d.hole == hole)
            .map(|d| d.choice)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WolfHoleWinner {
    Wolf,
    Field,
    Tie,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WolfHole {
    pub hole: u8,
    pub wolf: PlayerId,
    pub choice: WolfChoice,
    pub wolf_side: Vec<PlayerId>,
    pub field_side: Vec<PlayerId>,
    pub wolf_score: i32,
    pub field_score: i32,
    pub winner: WolfHoleWinner,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WolfTotal {
    pub player_id: PlayerId,
    pub points: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WolfResult {
    pub holes: Vec<WolfHole>,
    pub totals: Vec<WolfTotal>,
}

impl Standings for WolfResult {
    fn leaderboard(&self) -> Leaderboard {
        Leaderboard::ranked(
            ScoreOrder::HighWins,
            self.totals.iter().map(|t| (t.player_id, t.points as i64)),
        )
    }
}

/// Wolf: the tee rotates hole by hole; the wolf partners up or goes alone
/// against the rest, best ball against best ball.
#[derive(Debug, Clone, Default)]
pub struct Wolf {
    pub config: WolfConfig,
}

impl Wolf {
    pub fn new(config: WolfConfig) -> Self {
        Self { config }
    }

    /// The wolf on `hole`, rotating through players in round order.
    pub fn wolf_for_hole(players: &[PlayerId], hole: u8) -> Option<PlayerId> {
        if players.is_empty() {
            return None;
        }
        let index = (hole.saturating_sub(1) as usize) % players.len();
        Some(players[index])
    }

    fn validate(&self, players: &[PlayerId]) -> Result<(), ScoringError> {
        for decision in &self.config.decisions {
            let WolfChoice::Partner(partner) = decision.choice else {
                continue;
            };
            if !players.contains(&partner) {
                return Err(ScoringError::UnknownPlayer(partner));
            }
            if Self::wolf_for_hole(players, decision.hole) == Some(partner) {
                return Err(ScoringError::InvalidDecision {
                    hole: decision.hole,
                    reason: format!("player {partner} is the wolf and cannot partner themselves"),
                });
            }
        }
        Ok(())
    }
}

impl ScoringFormat for Wolf {
    type Output = WolfResult;

    fn metadata(&self) -> FormatMetadata {
        FormatMetadata {
            mode: GameMode::Wolf,
            name: "Wolf".to_string(),
            description: "Rotating wolf picks a partner or goes it alone for double stakes."
                .to_string(),
            min_players: 3,
            max_players: 8,
        }
    }

    /// Holes without a decision or without every player's score are skipped.
    fn compute(&self, round: &Round) -> Result<WolfResult, ScoringError> {
        self.metadata().check_player_count(round)?;
        let players = round.player_ids();
        self.validate(&players)?;

        let mut totals: Vec<WolfTotal> = players
            .iter()
            .map(|&player_id| WolfTotal {
                player_id,
                points: 0,
            })
            .collect();
        let mut holes = Vec::new();

        for hole in round.course.holes() {
            let (Some(wolf), Some(choice)) = (
                Self::wolf_for_hole(&players, hole.number),
                self.config.decision(hole.number),
            ) else {
                continue;
            };
            if !round.hole_complete(hole.number) {
                continue;
            }

            let wolf_side: Vec<PlayerId> = match choice {
                WolfChoice::Partner(partner) => vec![wolf, partner],
                WolfChoice::Lone => vec![wolf],
            };
            let field_side: Vec<PlayerId> = players
                .iter()
                .copied()
                .filter(|p| !wolf_side.contains(p))
                .collect();
            let (Some(wolf_score), Some(field_score)) = (
                best_ball(round, &wolf_side, hole.number, self.config.net),
                best_ball(round, &field_side, hole.number, self.config.net),
            ) else {
                continue;
            };

            let winner = match wolf_score.cmp(&field_score) {
                std::cmp::Ordering::Less => WolfHoleWinner::Wolf,
                std::cmp::Ordering::Greater => WolfHoleWinner::Field,
                std::cmp::Ordering::Equal => WolfHoleWinner::Tie,
            };
            let multiplier = match choice {
                WolfChoice::Lone => self.config.lone_multiplier,
                WolfChoice::Partner(_) => 1,
            };
            let (winners, losers): (&[PlayerId], &[PlayerId]) = match winner {
                WolfHoleWinner::Wolf => (&wolf_side, &field_side),
                WolfHoleWinner::Field => (&field_side, &wolf_side),
                WolfHoleWinner::Tie => (&[], &[]),
            };
            for total in totals.iter_mut() {
                if winners.contains(&total.player_id) {
                    total.points += self.config.win_points * multiplier;
                } else if losers.contains(&total.player_id) {
                    total.points += self.config.loss_points * multiplier;
                }
            }

            holes.push(WolfHole {
                hole: hole.number,
                wolf,
                choice,
                wolf_side,
                field_side,
                wolf_score,
                field_score,
                winner,
            });
        }

        Ok(WolfResult { holes, totals })
    }
}
