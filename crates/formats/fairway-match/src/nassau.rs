use serde::{Deserialize, Serialize};

use fairway_core::error::ScoringError;
use fairway_core::format::{FormatMetadata, Leaderboard, ScoreOrder, ScoringFormat, Standings};
use fairway_core::mode::GameMode;
use fairway_core::player::PlayerId;
use fairway_core::round::Round;

use crate::match_play::{MatchOutcome, play_match, resolve_sides};

/// Nassau options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NassauConfig {
    pub net: bool,
    pub sides: Option<[PlayerId; 2]>,
    /// Units riding on each of the three bets.
    pub stake: u32,
}

impl Default for NassauConfig {
    fn default() -> Self {
        Self {
            net: false,
            sides: None,
            stake: 1,
        }
    }
}

/// Three independent matches: front nine, back nine, and the full 18.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NassauResult {
    pub front: MatchOutcome,
    pub back: MatchOutcome,
    pub overall: MatchOutcome,
    /// Net units per side over the bets settled so far.
    pub units: [(PlayerId, i64); 2],
}

impl NassauResult {
    pub fn bets(&self) -> [&MatchOutcome; 3] {
        [&self.front, &self.back, &self.overall]
    }
}

impl Standings for NassauResult {
    fn leaderboard(&self) -> Leaderboard {
        Leaderboard::ranked(ScoreOrder::HighWins, self.units)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Nassau {
    pub config: NassauConfig,
}

impl Nassau {
    pub fn new(config: NassauConfig) -> Self {
        Self { config }
    }
}

impl ScoringFormat for Nassau {
    type Output = NassauResult;

    fn metadata(&self) -> FormatMetadata {
        FormatMetadata {
            mode: GameMode::Nassau,
            name: "Nassau".to_string(),
            description: "Three match-play bets: front nine, back nine, and overall.".to_string(),
            min_players: 2,
            max_players: u8::MAX,
        }
    }

    fn compute(&self, round: &Round) -> Result<NassauResult, ScoringError> {
        let sides = resolve_sides(round, self.config.sides, GameMode::Nassau)?;
        let net = self.config.net;
        let front = play_match(round, sides, 1..=9, net);
        let back = play_match(round, sides, 10..=18, net);
        let overall = play_match(round, sides, 1..=18, net);

        let stake = self.config.stake as i64;
        let mut units = [(sides[0], 0i64), (sides[1], 0i64)];
        for bet in [&front, &back, &overall] {
            if let Some(winner) = bet.state.winner() {
                for (player, total) in units.iter_mut() {
                    *total += if *player == winner { stake } else { -stake };
                }
            }
        }

        Ok(NassauResult {
            front,
            back,
            overall,
            units,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::match_play::MatchState;
    use fairway_core::test_helpers::{
        RoundBuilder, contract_empty_round_is_total, contract_idempotent,
        contract_rejects_too_few_players,
    };

    #[test]
    fn three_bets_settle_independently() {
        // Player 1 takes the front by two, player 2 takes the back by one.
        let mut p1 = vec![4; 18];
        p1[0] = 3;
        p1[1] = 3;
        p1[17] = 5;
        let round = RoundBuilder::new(2).strokes(1, &p1).all_holes(2, 4).build();
        let result = Nassau::default().compute(&round).unwrap();

        assert_eq!(result.front.state.winner(), Some(1));
        assert_eq!(result.front.summary, "2 up");
        assert_eq!(result.back.state.winner(), Some(2));
        assert_eq!(result.overall.state.winner(), Some(1));
        assert_eq!(result.units, [(1, 1), (2, -1)]);
        assert_eq!(result.winners(), vec![1]);
    }

    #[test]
    fn front_nine_can_close_early() {
        let mut p1 = vec![4; 18];
        for hole in p1.iter_mut().take(5) {
            *hole = 3;
        }
        let round = RoundBuilder::new(2).strokes(1, &p1).all_holes(2, 4).build();
        let result = Nassau::default().compute(&round).unwrap();
        assert_eq!(
            result.front.state,
            MatchState::Won {
                winner: 1,
                loser: 2,
                up: 5,
                to_play: 4
            }
        );
        assert_eq!(result.back.state, MatchState::Halved);
    }

    #[test]
    fn stake_scales_units() {
        let round = RoundBuilder::new(2).all_holes(1, 3).all_holes(2, 4).build();
        let result = Nassau::new(NassauConfig {
            stake: 5,
            ..NassauConfig::default()
        })
        .compute(&round)
        .unwrap();
        assert_eq!(result.units, [(1, 15), (2, -15)]);
    }

    #[test]
    fn front_only_round_leaves_back_not_started() {
        let round = RoundBuilder::new(2).strokes(1, &[4; 9]).strokes(2, &[4; 9]).build();
        let result = Nassau::default().compute(&round).unwrap();
        assert_eq!(result.front.state, MatchState::Halved);
        assert_eq!(result.back.state, MatchState::NotStarted);
        assert!(!result.overall.state.is_final());
    }

    #[test]
    fn contracts() {
        let format = Nassau::default();
        contract_empty_round_is_total(&format, 2);
        contract_rejects_too_few_players(&format);
        let round = RoundBuilder::new(2).all_holes(1, 4).strokes(2, &[3, 5, 4]).build();
        contract_idempotent(&format, &round);
    }
}
