use serde::{Deserialize, Serialize};

use fairway_core::error::ScoringError;
use fairway_core::format::{FormatMetadata, Leaderboard, ScoringFormat, Standings};
use fairway_core::mode::GameMode;
use fairway_core::round::Round;
use fairway_stroke::{Dots, DotsResult, Points, PointsResult, StrokePlay, StrokePlayResult};

#[cfg(feature = "match-formats")]
use fairway_match::{MatchPlay, MatchPlayResult, Nassau, NassauResult, Skins, SkinsResult};
#[cfg(feature = "snake")]
use fairway_snake::{Snake, SnakeResult};
#[cfg(feature = "team-formats")]
use fairway_teams::{Sixes, SixesResult, Vegas, VegasResult, Wolf, WolfResult};

use crate::config::EngineConfig;

/// One configured scoring format, ready to run against a round.
#[derive(Debug, Clone)]
pub enum FormatEngine {
    StrokePlay(StrokePlay),
    Points(Points),
    Dots(Dots),
    #[cfg(feature = "match-formats")]
    MatchPlay(MatchPlay),
    #[cfg(feature = "match-formats")]
    Nassau(Nassau),
    #[cfg(feature = "match-formats")]
    Skins(Skins),
    #[cfg(feature = "team-formats")]
    Wolf(Wolf),
    #[cfg(feature = "team-formats")]
    Vegas(Vegas),
    #[cfg(feature = "team-formats")]
    Sixes(Sixes),
    #[cfg(feature = "snake")]
    Snake(Snake),
}

impl FormatEngine {
    /// Build the engine for `mode` from its section of `config`.
    pub fn for_mode(mode: GameMode, config: &EngineConfig) -> Result<Self, ScoringError> {
        let engine = match mode {
            GameMode::StrokePlay => Self::StrokePlay(StrokePlay::new(config.stroke_play.clone())),
            GameMode::Points => Self::Points(Points::new(config.points.clone())),
            GameMode::Dots => Self::Dots(Dots::new(config.dots.clone())),
            #[cfg(feature = "match-formats")]
            GameMode::MatchPlay => Self::MatchPlay(MatchPlay::new(config.match_play.clone())),
            #[cfg(feature = "match-formats")]
            GameMode::Nassau => Self::Nassau(Nassau::new(config.nassau.clone())),
            #[cfg(feature = "match-formats")]
            GameMode::Skins => Self::Skins(Skins::new(config.skins.clone())),
            #[cfg(feature = "team-formats")]
            GameMode::Wolf => Self::Wolf(Wolf::new(config.wolf.clone())),
            #[cfg(feature = "team-formats")]
            GameMode::Vegas => Self::Vegas(Vegas::new(config.vegas.clone())),
            #[cfg(feature = "team-formats")]
            GameMode::Sixes => Self::Sixes(Sixes::new(config.sixes.clone())),
            #[cfg(feature = "snake")]
            GameMode::Snake => Self::Snake(Snake::new(config.snake.clone())),
            #[allow(unreachable_patterns)]
            other => return Err(ScoringError::UnsupportedMode(other)),
        };
        Ok(engine)
    }

    pub fn metadata(&self) -> FormatMetadata {
        match self {
            Self::StrokePlay(f) => f.metadata(),
            Self::Points(f) => f.metadata(),
            Self::Dots(f) => f.metadata(),
            #[cfg(feature = "match-formats")]
            Self::MatchPlay(f) => f.metadata(),
            #[cfg(feature = "match-formats")]
            Self::Nassau(f) => f.metadata(),
            #[cfg(feature = "match-formats")]
            Self::Skins(f) => f.metadata(),
            #[cfg(feature = "team-formats")]
            Self::Wolf(f) => f.metadata(),
            #[cfg(feature = "team-formats")]
            Self::Vegas(f) => f.metadata(),
            #[cfg(feature = "team-formats")]
            Self::Sixes(f) => f.metadata(),
            #[cfg(feature = "snake")]
            Self::Snake(f) => f.metadata(),
        }
    }

    pub fn mode(&self) -> GameMode {
        self.metadata().mode
    }

    pub fn compute(&self, round: &Round) -> Result<FormatOutcome, ScoringError> {
        Ok(match self {
            Self::StrokePlay(f) => FormatOutcome::StrokePlay(f.compute(round)?),
            Self::Points(f) => FormatOutcome::Points(f.compute(round)?),
            Self::Dots(f) => FormatOutcome::Dots(f.compute(round)?),
            #[cfg(feature = "match-formats")]
            Self::MatchPlay(f) => FormatOutcome::MatchPlay(f.compute(round)?),
            #[cfg(feature = "match-formats")]
            Self::Nassau(f) => FormatOutcome::Nassau(f.compute(round)?),
            #[cfg(feature = "match-formats")]
            Self::Skins(f) => FormatOutcome::Skins(f.compute(round)?),
            #[cfg(feature = "team-formats")]
            Self::Wolf(f) => FormatOutcome::Wolf(f.compute(round)?),
            #[cfg(feature = "team-formats")]
            Self::Vegas(f) => FormatOutcome::Vegas(f.compute(round)?),
            #[cfg(feature = "team-formats")]
            Self::Sixes(f) => FormatOutcome::Sixes(f.compute(round)?),
            // Estimation only runs when the snake config carries a seed.
            #[cfg(feature = "snake")]
            Self::Snake(f) => FormatOutcome::Snake(f.play_with_estimates(round)?),
        })
    }
}

/// A computed result from any format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "format", content = "result", rename_all = "snake_case")]
pub enum FormatOutcome {
    StrokePlay(StrokePlayResult),
    Points(PointsResult),
    Dots(DotsResult),
    #[cfg(feature = "match-formats")]
    MatchPlay(MatchPlayResult),
    #[cfg(feature = "match-formats")]
    Nassau(NassauResult),
    #[cfg(feature = "match-formats")]
    Skins(SkinsResult),
    #[cfg(feature = "team-formats")]
    Wolf(WolfResult),
    #[cfg(feature = "team-formats")]
    Vegas(VegasResult),
    #[cfg(feature = "team-formats")]
    Sixes(SixesResult),
    #[cfg(feature = "snake")]
    Snake(SnakeResult),
}

impl Standings for FormatOutcome {
    fn leaderboard(&self) -> Leaderboard {
        match self {
            Self::StrokePlay(r) => r.leaderboard(),
            Self::Points(r) => r.leaderboard(),
            Self::Dots(r) => r.leaderboard(),
            #[cfg(feature = "match-formats")]
            Self::MatchPlay(r) => r.leaderboard(),
            #[cfg(feature = "match-formats")]
            Self::Nassau(r) => r.leaderboard(),
            #[cfg(feature = "match-formats")]
            Self::Skins(r) => r.leaderboard(),
            #[cfg(feature = "team-formats")]
            Self::Wolf(r) => r.leaderboard(),
            #[cfg(feature = "team-formats")]
            Self::Vegas(r) => r.leaderboard(),
            #[cfg(feature = "team-formats")]
            Self::Sixes(r) => r.leaderboard(),
            #[cfg(feature = "snake")]
            Self::Snake(r) => r.leaderboard(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairway_core::test_helpers::RoundBuilder;

    #[test]
    fn every_mode_has_an_engine_with_matching_metadata() {
        let config = EngineConfig::default();
        for mode in GameMode::ALL {
            match FormatEngine::for_mode(mode, &config) {
                Ok(engine) => assert_eq!(engine.mode(), mode),
                Err(e) => assert_eq!(e, ScoringError::UnsupportedMode(mode)),
            }
        }
    }

    #[test]
    fn stroke_play_outcome_ranks_low() {
        let round = RoundBuilder::new(2).all_holes(1, 4).all_holes(2, 5).build();
        let engine = FormatEngine::for_mode(GameMode::StrokePlay, &EngineConfig::default()).unwrap();
        let outcome = engine.compute(&round).unwrap();
        assert_eq!(outcome.winners(), vec![1]);
        assert!(matches!(outcome, FormatOutcome::StrokePlay(_)));
    }

    #[cfg(feature = "team-formats")]
    #[test]
    fn validation_errors_pass_through() {
        let round = RoundBuilder::new(2).build();
        let engine = FormatEngine::for_mode(GameMode::Sixes, &EngineConfig::default()).unwrap();
        assert!(matches!(
            engine.compute(&round),
            Err(ScoringError::NotEnoughPlayers { .. })
        ));
    }

    #[test]
    fn outcome_serializes_with_format_tag() {
        let round = RoundBuilder::new(1).strokes(1, &[4, 5]).build();
        let outcome = FormatEngine::for_mode(GameMode::Points, &EngineConfig::default())
            .unwrap()
            .compute(&round)
            .unwrap();
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["format"], "points");
        assert!(json["result"]["players"].is_array());
    }
}
