use serde::{Deserialize, Serialize};

use crate::error::ScoringError;
use crate::mode::GameMode;
use crate::player::PlayerId;
use crate::round::Round;

/// Core trait every Fairway scoring format implements.
///
/// A format holds its own configuration and maps a round to a
/// format-specific result. Implementations are pure: no I/O, no hidden
/// state, identical output for identical input.
pub trait ScoringFormat {
    type Output: Standings;

    /// Format metadata for catalogs and player-count validation.
    fn metadata(&self) -> FormatMetadata;

    /// Score the round. Missing hole scores contribute nothing; only
    /// malformed input (player count, config referencing unknown players)
    /// is an error.
    fn compute(&self, round: &Round) -> Result<Self::Output, ScoringError>;
}

/// Anything that can be flattened into a ranked leaderboard.
pub trait Standings {
    fn leaderboard(&self) -> Leaderboard;

    /// Players currently in first place. An all-way tie lists everyone.
    fn winners(&self) -> Vec<PlayerId> {
        self.leaderboard().leaders()
    }
}

/// Format metadata shown when choosing formats for a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatMetadata {
    pub mode: GameMode,
    pub name: String,
    pub description: String,
    pub min_players: u8,
    pub max_players: u8,
}

impl FormatMetadata {
    /// Fail with a validation error when the round's player count is outside
    /// this format's range.
    pub fn check_player_count(&self, round: &Round) -> Result<(), ScoringError> {
        let actual = round.players().len();
        if actual < self.min_players as usize {
            return Err(ScoringError::NotEnoughPlayers {
                mode: self.mode,
                required: self.min_players as usize,
                actual,
            });
        }
        if actual > self.max_players as usize {
            if self.min_players == self.max_players {
                return Err(ScoringError::PlayerCount {
                    mode: self.mode,
                    expected: self.max_players as usize,
                    actual,
                });
            }
            return Err(ScoringError::TooManyPlayers {
                mode: self.mode,
                max: self.max_players as usize,
                actual,
            });
        }
        Ok(())
    }
}

/// Whether a lower or higher value ranks first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreOrder {
    LowWins,
    HighWins,
}

/// One row of a leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player_id: PlayerId,
    pub value: i64,
    /// 1-based; tied players share a position and the next one is skipped.
    pub position: u8,
}

/// Players ordered by a single scalar value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    pub order: ScoreOrder,
    pub entries: Vec<Standing>,
}

impl Leaderboard {
    /// Rank `(player, value)` pairs. Ties keep their input order and share a
    /// position; no tiebreak is applied.
    pub fn ranked(order: ScoreOrder, values: impl IntoIterator<Item = (PlayerId, i64)>) -> Self {
        let mut rows: Vec<(PlayerId, i64)> = values.into_iter().collect();
        match order {
            ScoreOrder::LowWins => rows.sort_by_key(|&(_, v)| v),
            ScoreOrder::HighWins => rows.sort_by_key(|&(_, v)| std::cmp::Reverse(v)),
        }
        let mut entries: Vec<Standing> = Vec::with_capacity(rows.len());
        for (i, (player_id, value)) in rows.into_iter().enumerate() {
            let position = match entries.last() {
                Some(prev) if prev.value == value => prev.position,
                _ => (i + 1) as u8,
            };
            entries.push(Standing {
                player_id,
                value,
                position,
            });
        }
        Self { order, entries }
    }

    pub fn leaders(&self) -> Vec<PlayerId> {
        self.entries
            .iter()
            .filter(|s| s.position == 1)
            .map(|s| s.player_id)
            .collect()
    }

    pub fn value_of(&self, player: PlayerId) -> Option<i64> {
        self.entries
            .iter()
            .find(|s| s.player_id == player)
            .map(|s| s.value)
    }
}
