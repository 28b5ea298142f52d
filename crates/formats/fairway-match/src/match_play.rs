use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use fairway_core::error::ScoringError;
use fairway_core::format::{FormatMetadata, Leaderboard, ScoreOrder, ScoringFormat, Standings};
use fairway_core::mode::GameMode;
use fairway_core::player::PlayerId;
use fairway_core::round::Round;

/// Match play options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchPlayConfig {
    /// Compare net strokes instead of gross.
    pub net: bool,
    /// The two players in the match. Defaults to the first two in the round.
    pub sides: Option<[PlayerId; 2]>,
}

/// Result of a single hole in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoleResult {
    Won(PlayerId),
    Halved,
}

/// One scored hole and the running tally after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchHole {
    pub hole: u8,
    pub result: HoleResult,
    /// Holes up for the first side after this hole (negative = second side leads).
    pub up: i32,
}

/// Where a match stands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchState {
    NotStarted,
    /// `leader` is `None` while all square.
    InProgress {
        leader: Option<PlayerId>,
        up: u8,
        thru: u8,
    },
    /// `to_play` is 0 when the match went the distance.
    Won {
        winner: PlayerId,
        loser: PlayerId,
        up: u8,
        to_play: u8,
    },
    Halved,
}

impl MatchState {
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Won { .. } | Self::Halved)
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            Self::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }
}

impl fmt::Display for MatchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => f.write_str("Not started"),
            Self::InProgress {
                leader: None, thru, ..
            } => write!(f, "All square thru {thru}"),
            Self::InProgress {
                up, thru, ..
            } => write!(f, "{up} up thru {thru}"),
            Self::Won {
                up, to_play: 0, ..
            } => write!(f, "{up} up"),
            Self::Won { up, to_play, .. } => write!(f, "{up} & {to_play}"),
            Self::Halved => f.write_str("All square"),
        }
    }
}

/// A match over a range of holes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub sides: [PlayerId; 2],
    pub first_hole: u8,
    pub last_hole: u8,
    pub holes: Vec<MatchHole>,
    pub state: MatchState,
    /// Short form of `state`, e.g. "3 & 2".
    pub summary: String,
}

impl MatchOutcome {
    /// Current holes up for `player`, negative when trailing.
    pub fn up_for(&self, player: PlayerId) -> i32 {
        let up = self.holes.last().map_or(0, |h| h.up);
        if player == self.sides[0] { up } else { -up }
    }
}

/// Play a match between `sides` over `range`, in hole order.
///
/// A hole missing either score is skipped. The match closes as soon as the
/// lead exceeds the holes left in the range; later holes are ignored even
/// when scored.
pub fn play_match(
    round: &Round,
    sides: [PlayerId; 2],
    range: RangeInclusive<u8>,
    net: bool,
) -> MatchOutcome {
    let [a, b] = sides;
    let last_hole = *range.end();
    let mut holes: Vec<MatchHole> = Vec::new();
    let mut up = 0i32;
    let mut state = None;

    for hole in round.course.holes().iter().filter(|h| range.contains(&h.number)) {
        let (Some(score_a), Some(score_b)) = (
            round.scoring_strokes(a, hole.number, net),
            round.scoring_strokes(b, hole.number, net),
        ) else {
            continue;
        };
        let result = match score_a.cmp(&score_b) {
            std::cmp::Ordering::Less => {
                up += 1;
                HoleResult::Won(a)
            },
            std::cmp::Ordering::Greater => {
                up -= 1;
                HoleResult::Won(b)
            },
            std::cmp::Ordering::Equal => HoleResult::Halved,
        };
        holes.push(MatchHole {
            hole: hole.number,
            result,
            up,
        });

        let remaining = last_hole.saturating_sub(hole.number);
        if up.unsigned_abs() > remaining as u32 {
            let (winner, loser) = if up > 0 { (a, b) } else { (b, a) };
            tracing::debug!(winner, hole = hole.number, remaining, "Match closed out");
            state = Some(MatchState::Won {
                winner,
                loser,
                up: up.unsigned_abs() as u8,
                to_play: remaining,
            });
            break;
        }
    }

    let range_len = round
        .course
        .holes()
        .iter()
        .filter(|h| range.contains(&h.number))
        .count();
    let state = state.unwrap_or_else(|| match holes.last() {
        None => MatchState::NotStarted,
        Some(_) if holes.len() == range_len && up == 0 => MatchState::Halved,
        Some(last) => MatchState::InProgress {
            leader: match up {
                0 => None,
                u if u > 0 => Some(a),
                _ => Some(b),
            },
            up: up.unsigned_abs() as u8,
            thru: last.hole,
        },
    });

    MatchOutcome {
        sides,
        first_hole: *range.start(),
        last_hole,
        summary: state.to_string(),
        holes,
        state,
    }
}

/// Resolve the two match sides from config, defaulting to the first two
/// players in the round.
pub fn resolve_sides(
    round: &Round,
    configured: Option<[PlayerId; 2]>,
    mode: GameMode,
) -> Result<[PlayerId; 2], ScoringError> {
    if let Some(sides) = configured {
        for id in sides {
            if round.player(id).is_none() {
                return Err(ScoringError::UnknownPlayer(id));
            }
        }
        if sides[0] == sides[1] {
            return Err(ScoringError::InvalidTeams(format!(
                "player {} cannot play against themselves",
                sides[0]
            )));
        }
        return Ok(sides);
    }
    match round.players() {
        [a, b, ..] => Ok([a.id, b.id]),
        players => Err(ScoringError::NotEnoughPlayers {
            mode,
            required: 2,
            actual: players.len(),
        }),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPlayResult {
    pub outcome: MatchOutcome,
}

impl Standings for MatchPlayResult {
    fn leaderboard(&self) -> Leaderboard {
        Leaderboard::ranked(
            ScoreOrder::HighWins,
            self.outcome
                .sides
                .iter()
                .map(|&p| (p, self.outcome.up_for(p) as i64)),
        )
    }
}

/// Head-to-head match over 18 holes.
#[derive(Debug, Clone, Default)]
pub struct MatchPlay {
    pub config: MatchPlayConfig,
}

impl MatchPlay {
    pub fn new(config: MatchPlayConfig) -> Self {
        Self { config }
    }
}

impl ScoringFormat for MatchPlay {
    type Output = MatchPlayResult;

    fn metadata(&self) -> FormatMetadata {
        FormatMetadata {
            mode: GameMode::MatchPlay,
            name: "Match Play".to_string(),
            description: "Win holes, not strokes. The match ends once a lead cannot be caught."
                .to_string(),
            min_players: 2,
            max_players: u8::MAX,
        }
    }

    fn compute(&self, round: &Round) -> Result<MatchPlayResult, ScoringError> {
        let sides = resolve_sides(round, self.config.sides, GameMode::MatchPlay)?;
        Ok(MatchPlayResult {
            outcome: play_match(round, sides, 1..=18, self.config.net),
        })
    }
}
