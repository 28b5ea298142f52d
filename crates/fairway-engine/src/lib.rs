//! Runs every format a round asks for and merges the results.
//!
//! A format that rejects the round is reported alongside a stroke-play
//! substitute; the other formats are unaffected.

pub mod config;
pub mod dispatch;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fairway_core::format::{Leaderboard, Standings};
use fairway_core::mode::GameMode;
use fairway_core::player::PlayerId;
use fairway_core::registry::FormatEntry;
use fairway_core::round::{Round, Scorecard};
use fairway_core::stats::{RoundStats, round_stats};
use fairway_stroke::{StrokePlay, StrokePlayResult};

pub use config::{ConfigError, EngineConfig};
pub use dispatch::{FormatEngine, FormatOutcome};

/// What one mode produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ModeReport {
    Computed { outcome: FormatOutcome },
    /// The mode failed; `substitute` is the stroke-play result shown in its
    /// place.
    Fallback {
        error: String,
        substitute: StrokePlayResult,
    },
}

impl ModeReport {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    pub fn outcome(&self) -> Option<&FormatOutcome> {
        match self {
            Self::Computed { outcome } => Some(outcome),
            Self::Fallback { .. } => None,
        }
    }
}

impl Standings for ModeReport {
    fn leaderboard(&self) -> Leaderboard {
        match self {
            Self::Computed { outcome } => outcome.leaderboard(),
            Self::Fallback { substitute, .. } => substitute.leaderboard(),
        }
    }
}

/// Everything computed for a round in one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundResults {
    pub round_id: Uuid,
    pub primary: GameMode,
    pub reports: BTreeMap<GameMode, ModeReport>,
    /// Winners under the primary mode.
    pub headline_winners: Vec<PlayerId>,
    pub scorecards: Vec<Scorecard>,
    pub stats: Vec<RoundStats>,
}

impl RoundResults {
    pub fn report(&self, mode: GameMode) -> Option<&ModeReport> {
        self.reports.get(&mode)
    }
}

/// Compute every mode in `round.modes()` using `config`.
pub fn aggregate(round: &Round, config: &EngineConfig) -> RoundResults {
    let fallback = StrokePlay::new(config.stroke_play.clone());
    let mut reports = BTreeMap::new();

    for mode in round.modes() {
        let computed =
            FormatEngine::for_mode(mode, config).and_then(|engine| engine.compute(round));
        let report = match computed {
            Ok(outcome) => ModeReport::Computed { outcome },
            Err(e) => {
                tracing::warn!(
                    round_id = %round.id,
                    mode = %mode,
                    error = %e,
                    "Format failed, substituting stroke play"
                );
                ModeReport::Fallback {
                    error: e.to_string(),
                    substitute: fallback.score(round),
                }
            },
        };
        reports.insert(mode, report);
    }

    let headline_winners = reports
        .get(&round.game_mode)
        .map(|report| report.winners())
        .unwrap_or_default();

    RoundResults {
        round_id: round.id,
        primary: round.game_mode,
        reports,
        headline_winners,
        scorecards: round.scorecards(),
        stats: round_stats(round),
    }
}

/// Every format compiled into this build.
pub fn catalog() -> Vec<FormatEntry> {
    let config = EngineConfig::default();
    GameMode::ALL
        .into_iter()
        .filter_map(|mode| FormatEngine::for_mode(mode, &config).ok())
        .map(|engine| FormatEntry {
            mode: engine.mode(),
            metadata: engine.metadata(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairway_core::test_helpers::RoundBuilder;

    #[test]
    fn catalog_always_has_stroke_formats() {
        let modes: Vec<GameMode> = catalog().into_iter().map(|e| e.mode).collect();
        assert!(modes.contains(&GameMode::StrokePlay));
        assert!(modes.contains(&GameMode::Points));
        assert!(modes.contains(&GameMode::Dots));
    }

    #[cfg(all(feature = "match-formats", feature = "team-formats", feature = "snake"))]
    #[test]
    fn catalog_lists_every_mode_with_all_features() {
        assert_eq!(catalog().len(), GameMode::ALL.len());
    }

    #[test]
    fn primary_mode_sets_headline() {
        let round = RoundBuilder::new(2)
            .mode(GameMode::Points)
            .all_holes(1, 5)
            .all_holes(2, 3)
            .build();
        let results = aggregate(&round, &EngineConfig::default());
        assert_eq!(results.primary, GameMode::Points);
        assert_eq!(results.headline_winners, vec![2]);
        assert_eq!(results.reports.len(), 1);
        assert_eq!(results.stats.len(), 2);
    }
}
