use serde::{Deserialize, Serialize};

use fairway_core::error::ScoringError;
use fairway_core::format::{FormatMetadata, Leaderboard, ScoreOrder, ScoringFormat, Standings};
use fairway_core::mode::GameMode;
use fairway_core::player::PlayerId;
use fairway_core::round::Round;

use crate::rotation::{SEGMENT_LENGTH, SegmentPairing, SixesSchedule};
use crate::team::best_ball;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SixesConfig {
    pub net: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentStatus {
    Pending,
    /// `leader` indexes the pairing's teams; `None` when level.
    InProgress { leader: Option<usize> },
    Won { team: usize },
    Halved,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentResult {
    pub pairing: SegmentPairing,
    /// Best-ball totals over the holes compared so far.
    pub totals: [i32; 2],
    pub holes_compared: u8,
    pub status: SegmentStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SixesPlayer {
    pub player_id: PlayerId,
    pub points: u8,
    pub gross: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SixesResult {
    pub segments: Vec<SegmentResult>,
    pub players: Vec<SixesPlayer>,
}

impl Standings for SixesResult {
    fn leaderboard(&self) -> Leaderboard {
        Leaderboard::ranked(
            ScoreOrder::HighWins,
            self.players.iter().map(|p| (p.player_id, p.points as i64)),
        )
    }
}

/// Sixes: partners change every six holes; the lower best-ball total over
/// a segment earns each player on that team a point.
#[derive(Debug, Clone, Default)]
pub struct Sixes {
    pub config: SixesConfig,
}

impl Sixes {
    pub fn new(config: SixesConfig) -> Self {
        Self { config }
    }

    fn play_segment(&self, round: &Round, pairing: SegmentPairing) -> SegmentResult {
        let mut totals = [0i32; 2];
        let mut holes_compared = 0u8;
        for hole in pairing.holes() {
            if !round.hole_complete(hole) {
                continue;
            }
            let (Some(a), Some(b)) = (
                best_ball(round, &pairing.teams[0], hole, self.config.net),
                best_ball(round, &pairing.teams[1], hole, self.config.net),
            ) else {
                continue;
            };
            totals[0] += a;
            totals[1] += b;
            holes_compared += 1;
        }

        let leader = match totals[0].cmp(&totals[1]) {
            std::cmp::Ordering::Less => Some(0),
            std::cmp::Ordering::Greater => Some(1),
            std::cmp::Ordering::Equal => None,
        };
        let status = match (holes_compared, leader) {
            (0, _) => SegmentStatus::Pending,
            (n, _) if n < SEGMENT_LENGTH => SegmentStatus::InProgress { leader },
            (_, Some(team)) => SegmentStatus::Won { team },
            (_, None) => SegmentStatus::Halved,
        };
        if holes_compared == SEGMENT_LENGTH {
            tracing::debug!(
                segment = pairing.segment,
                totals = ?totals,
                status = ?status,
                "Sixes segment settled"
            );
        }

        SegmentResult {
            pairing,
            totals,
            holes_compared,
            status,
        }
    }
}

impl ScoringFormat for Sixes {
    type Output = SixesResult;

    fn metadata(&self) -> FormatMetadata {
        FormatMetadata {
            mode: GameMode::Sixes,
            name: "Sixes".to_string(),
            description: "Partners rotate every six holes; the better best ball wins each segment."
                .to_string(),
            min_players: 3,
            max_players: 8,
        }
    }

    fn compute(&self, round: &Round) -> Result<SixesResult, ScoringError> {
        self.metadata().check_player_count(round)?;
        let schedule = SixesSchedule::build(&round.player_ids())?;

        let segments: Vec<SegmentResult> = schedule
            .segments
            .into_iter()
            .map(|pairing| self.play_segment(round, pairing))
            .collect();

        let players = round
            .players()
            .iter()
            .map(|player| {
                let points = segments
                    .iter()
                    .filter(|s| match s.status {
                        SegmentStatus::Won { team } => s.pairing.teams[team].contains(&player.id),
                        _ => false,
                    })
                    .count() as u8;
                let gross = round
                    .course
                    .holes()
                    .iter()
                    .filter_map(|h| round.strokes(player.id, h.number))
                    .map(u32::from)
                    .sum();
                SixesPlayer {
                    player_id: player.id,
                    points,
                    gross,
                }
            })
            .collect();

        Ok(SixesResult { segments, players })
    }
}
