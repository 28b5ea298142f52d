use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::allocation;
use crate::course::{Course, HOLE_COUNT};
use crate::error::RoundError;
use crate::mode::GameMode;
use crate::player::{Player, PlayerId};
use crate::score::HoleScore;

/// Lifecycle of a round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundStatus {
    #[default]
    Active,
    Completed,
    Cancelled,
}

/// A round in progress or finished: who is playing, where, under which
/// formats, and every hole score entered so far.
///
/// Engines read rounds at any point in the lifecycle and never assume all 18
/// holes are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRound")]
pub struct Round {
    pub id: Uuid,
    pub course: Course,
    players: Vec<Player>,
    pub game_mode: GameMode,
    /// Formats scored alongside the primary one.
    #[serde(default)]
    pub side_modes: Vec<GameMode>,
    #[serde(default)]
    scores: BTreeMap<PlayerId, BTreeMap<u8, HoleScore>>,
    #[serde(default)]
    status: RoundStatus,
}

/// Round as read from the wire, before its scores are checked against the
/// players and course.
#[derive(Deserialize)]
struct RawRound {
    id: Uuid,
    course: Course,
    players: Vec<Player>,
    game_mode: GameMode,
    #[serde(default)]
    side_modes: Vec<GameMode>,
    #[serde(default)]
    scores: BTreeMap<PlayerId, BTreeMap<u8, HoleScore>>,
    #[serde(default)]
    status: RoundStatus,
}

impl TryFrom<RawRound> for Round {
    type Error = RoundError;

    fn try_from(raw: RawRound) -> Result<Self, Self::Error> {
        let mut round = Self::new(raw.course, raw.players, raw.game_mode).with_modes(raw.side_modes);
        round.id = raw.id;
        for (player, holes) in raw.scores {
            for (hole, score) in holes {
                round.record_score(player, hole, score)?;
            }
        }
        round.status = raw.status;
        Ok(round)
    }
}

impl Round {
    /// Start a round. Players keep the order given; repeated ids are dropped.
    pub fn new(course: Course, players: Vec<Player>, game_mode: GameMode) -> Self {
        let mut unique: Vec<Player> = Vec::with_capacity(players.len());
        for player in players {
            if unique.iter().any(|p| p.id == player.id) {
                tracing::warn!(player_id = player.id, "Dropped duplicate player from round");
                continue;
            }
            unique.push(player);
        }
        Self {
            id: Uuid::new_v4(),
            course,
            players: unique,
            game_mode,
            side_modes: Vec::new(),
            scores: BTreeMap::new(),
            status: RoundStatus::Active,
        }
    }

    pub fn with_modes(mut self, modes: impl IntoIterator<Item = GameMode>) -> Self {
        self.side_modes.extend(modes);
        self
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_ids(&self) -> Vec<PlayerId> {
        self.players.iter().map(|p| p.id).collect()
    }

    /// Update a player's playing handicap.
    pub fn set_handicap(&mut self, player: PlayerId, handicap: f64) -> Result<(), RoundError> {
        let entry = self
            .players
            .iter_mut()
            .find(|p| p.id == player)
            .ok_or(RoundError::UnknownPlayer(player))?;
        entry.handicap = handicap;
        Ok(())
    }

    /// Primary mode first, then side modes in order, without repeats.
    pub fn modes(&self) -> Vec<GameMode> {
        let mut modes = vec![self.game_mode];
        for &mode in &self.side_modes {
            if !modes.contains(&mode) {
                modes.push(mode);
            }
        }
        modes
    }

    /// Insert or replace a player's score on a hole. Returns the score it
    /// replaced, if any.
    pub fn record_score(
        &mut self,
        player: PlayerId,
        hole: u8,
        score: HoleScore,
    ) -> Result<Option<HoleScore>, RoundError> {
        if self.status != RoundStatus::Active {
            return Err(RoundError::NotActive(self.status));
        }
        if self.player(player).is_none() {
            return Err(RoundError::UnknownPlayer(player));
        }
        if self.course.hole(hole).is_none() {
            return Err(RoundError::UnknownHole(hole));
        }
        if score.strokes == 0 {
            return Err(RoundError::ZeroStrokes);
        }
        Ok(self.scores.entry(player).or_default().insert(hole, score))
    }

    pub fn score(&self, player: PlayerId, hole: u8) -> Option<&HoleScore> {
        self.scores.get(&player).and_then(|holes| holes.get(&hole))
    }

    /// Gross strokes, or `None` when the hole has not been scored.
    pub fn strokes(&self, player: PlayerId, hole: u8) -> Option<u8> {
        self.score(player, hole)
            .map(|s| s.strokes)
            .filter(|&s| s > 0)
    }

    /// Gross minus the handicap strokes the player receives on this hole.
    pub fn net_strokes(&self, player: PlayerId, hole: u8) -> Option<i32> {
        let gross = self.strokes(player, hole)?;
        let handicap = self.player(player)?.handicap_strokes();
        let index = self.course.hole(hole)?.allocation_index();
        Some(allocation::net_strokes(gross, handicap, index))
    }

    /// Gross or net strokes depending on `net`.
    pub fn scoring_strokes(&self, player: PlayerId, hole: u8, net: bool) -> Option<i32> {
        if net {
            self.net_strokes(player, hole)
        } else {
            self.strokes(player, hole).map(i32::from)
        }
    }

    /// Whether every player in the round has a score on `hole`.
    pub fn hole_complete(&self, hole: u8) -> bool {
        !self.players.is_empty() && self.players.iter().all(|p| self.strokes(p.id, hole).is_some())
    }

    pub fn complete(&mut self) -> Result<(), RoundError> {
        self.transition(RoundStatus::Completed)
    }

    pub fn cancel(&mut self) -> Result<(), RoundError> {
        self.transition(RoundStatus::Cancelled)
    }

    fn transition(&mut self, to: RoundStatus) -> Result<(), RoundError> {
        if self.status != RoundStatus::Active {
            return Err(RoundError::Transition {
                from: self.status,
                to,
            });
        }
        self.status = to;
        Ok(())
    }

    /// Running card for each player in round order.
    pub fn scorecards(&self) -> Vec<Scorecard> {
        self.players
            .iter()
            .map(|player| {
                let mut card = Scorecard {
                    player_id: player.id,
                    scores: vec![None; HOLE_COUNT as usize],
                    total: 0,
                    net_total: 0,
                    holes_played: 0,
                };
                for hole in self.course.holes() {
                    if let Some(gross) = self.strokes(player.id, hole.number) {
                        card.scores[hole.number as usize - 1] = Some(gross);
                        card.total += gross as u32;
                        card.net_total += allocation::net_strokes(
                            gross,
                            player.handicap_strokes(),
                            hole.allocation_index(),
                        );
                        card.holes_played += 1;
                    }
                }
                card
            })
            .collect()
    }
}

/// Derived per-player running totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scorecard {
    pub player_id: PlayerId,
    /// Gross strokes by hole (index 0 = hole 1).
    pub scores: Vec<Option<u8>>,
    pub total: u32,
    pub net_total: i32,
    pub holes_played: u8,
}
