use serde::{Deserialize, Serialize};

use fairway_core::error::ScoringError;
use fairway_core::mode::GameMode;
use fairway_core::player::PlayerId;

/// Holes per Sixes segment.
pub const SEGMENT_LENGTH: u8 = 6;

/// Number of segments in an 18-hole round.
pub const SEGMENT_COUNT: u8 = 3;

/// Who partners whom over one six-hole segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentPairing {
    /// 0-based.
    pub segment: u8,
    pub first_hole: u8,
    pub last_hole: u8,
    pub teams: [Vec<PlayerId>; 2],
}

impl SegmentPairing {
    pub fn holes(&self) -> std::ops::RangeInclusive<u8> {
        self.first_hole..=self.last_hole
    }

    pub fn team_of(&self, player: PlayerId) -> Option<usize> {
        self.teams.iter().position(|t| t.contains(&player))
    }
}

/// The three segment pairings for a round, fixed before any hole is played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SixesSchedule {
    pub segments: Vec<SegmentPairing>,
}

impl SixesSchedule {
    /// Three players: every pair gets one segment against the third.
    /// Four or more: the first player stays put while the rest rotate one
    /// seat per segment, and seats alternate between the two teams.
    pub fn build(players: &[PlayerId]) -> Result<Self, ScoringError> {
        if players.len() < 3 {
            return Err(ScoringError::NotEnoughPlayers {
                mode: GameMode::Sixes,
                required: 3,
                actual: players.len(),
            });
        }

        let segments = (0..SEGMENT_COUNT)
            .map(|segment| {
                let teams = if players.len() == 3 {
                    let solo = 2 - segment as usize;
                    let pair: Vec<PlayerId> = players
                        .iter()
                        .enumerate()
                        .filter(|&(i, _)| i != solo)
                        .map(|(_, &p)| p)
                        .collect();
                    [pair, vec![players[solo]]]
                } else {
                    let mut seats = players[1..].to_vec();
                    let shift = segment as usize % seats.len();
                    seats.rotate_left(shift);
                    seats.insert(0, players[0]);
                    let mut teams = [Vec::new(), Vec::new()];
                    for (i, p) in seats.into_iter().enumerate() {
                        teams[i % 2].push(p);
                    }
                    teams
                };
                let first_hole = segment * SEGMENT_LENGTH + 1;
                SegmentPairing {
                    segment,
                    first_hole,
                    last_hole: first_hole + SEGMENT_LENGTH - 1,
                    teams,
                }
            })
            .collect();

        Ok(Self { segments })
    }

    pub fn segment_for_hole(&self, hole: u8) -> Option<&SegmentPairing> {
        self.segments.iter().find(|s| s.holes().contains(&hole))
    }
}
