use serde::{Deserialize, Serialize};

use fairway_core::error::ScoringError;
use fairway_core::format::{FormatMetadata, Leaderboard, ScoreOrder, ScoringFormat, Standings};
use fairway_core::mode::GameMode;
use fairway_core::player::PlayerId;
use fairway_core::round::Round;

/// Stroke play options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokePlayConfig {
    /// Rank by net strokes instead of gross.
    pub net: bool,
}

/// One player's accumulated strokes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrokeTotal {
    pub player_id: PlayerId,
    pub gross: i64,
    pub net: i64,
    /// Gross strokes relative to par over the holes played.
    pub to_par: i64,
    pub holes_played: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrokePlayResult {
    pub net: bool,
    pub totals: Vec<StrokeTotal>,
}

impl Standings for StrokePlayResult {
    fn leaderboard(&self) -> Leaderboard {
        Leaderboard::ranked(
            ScoreOrder::LowWins,
            self.totals
                .iter()
                .map(|t| (t.player_id, if self.net { t.net } else { t.gross })),
        )
    }
}

/// Lowest total strokes wins. Ties stand as ties.
#[derive(Debug, Clone, Default)]
pub struct StrokePlay {
    pub config: StrokePlayConfig,
}

impl StrokePlay {
    pub fn new(config: StrokePlayConfig) -> Self {
        Self { config }
    }

    /// Score without player-count validation. Never fails, which is what
    /// lets other formats fall back to it.
    pub fn score(&self, round: &Round) -> StrokePlayResult {
        let totals = round
            .players()
            .iter()
            .map(|player| {
                let mut total = StrokeTotal {
                    player_id: player.id,
                    gross: 0,
                    net: 0,
                    to_par: 0,
                    holes_played: 0,
                };
                for hole in round.course.holes() {
                    let (Some(gross), Some(net)) = (
                        round.strokes(player.id, hole.number),
                        round.net_strokes(player.id, hole.number),
                    ) else {
                        continue;
                    };
                    total.gross += gross as i64;
                    total.net += net as i64;
                    total.to_par += gross as i64 - hole.par as i64;
                    total.holes_played += 1;
                }
                total
            })
            .collect();
        StrokePlayResult {
            net: self.config.net,
            totals,
        }
    }
}

impl ScoringFormat for StrokePlay {
    type Output = StrokePlayResult;

    fn metadata(&self) -> FormatMetadata {
        FormatMetadata {
            mode: GameMode::StrokePlay,
            name: "Stroke Play".to_string(),
            description: "Count every stroke. Lowest total wins.".to_string(),
            min_players: 1,
            max_players: u8::MAX,
        }
    }

    fn compute(&self, round: &Round) -> Result<StrokePlayResult, ScoringError> {
        Ok(self.score(round))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairway_core::test_helpers::{
        RoundBuilder, contract_empty_round_is_total, contract_idempotent, par_72_course,
    };

    #[test]
    fn gross_totals_lowest_wins() {
        let round = RoundBuilder::new(3)
            .all_holes(1, 5)
            .all_holes(2, 4)
            .all_holes(3, 6)
            .build();
        let result = StrokePlay::default().score(&round);
        assert_eq!(result.totals[1].gross, 72);
        assert_eq!(result.totals[1].to_par, 0);
        assert_eq!(result.winners(), vec![2]);
    }

    #[test]
    fn ties_are_not_broken() {
        let round = RoundBuilder::new(2).all_holes(1, 4).all_holes(2, 4).build();
        let result = StrokePlay::default().score(&round);
        assert_eq!(result.winners(), vec![1, 2]);
    }

    #[test]
    fn net_scoring_uses_handicap_allocation() {
        let round = RoundBuilder::new(2)
            .all_holes(1, 4)
            .all_holes(2, 5)
            .handicap(2, 18.0)
            .build();
        let gross = StrokePlay::default().score(&round);
        assert_eq!(gross.winners(), vec![1]);

        let net = StrokePlay::new(StrokePlayConfig { net: true }).score(&round);
        assert_eq!(net.totals[1].net, 72);
        assert_eq!(net.winners(), vec![1, 2]);
    }

    #[test]
    fn partial_round_counts_only_played_holes() {
        let round = RoundBuilder::on_course(par_72_course(), 2)
            .strokes(1, &[4, 4, 3])
            .strokes(2, &[5, 5])
            .build();
        let result = StrokePlay::default().score(&round);
        assert_eq!(result.totals[0].holes_played, 3);
        assert_eq!(result.totals[0].gross, 11);
        assert_eq!(result.totals[1].gross, 10);
        assert_eq!(result.totals[1].to_par, 2);
    }

    #[test]
    fn config_parses_from_toml() {
        let cfg: StrokePlayConfig = toml::from_str("net = true").unwrap();
        assert!(cfg.net);
        let cfg: StrokePlayConfig = toml::from_str("").unwrap();
        assert!(!cfg.net);
    }

    #[test]
    fn contracts() {
        let format = StrokePlay::default();
        contract_empty_round_is_total(&format, 4);
        let round = RoundBuilder::new(3).all_holes(1, 4).strokes(2, &[3, 5]).build();
        contract_idempotent(&format, &round);
    }
}
