use serde::{Deserialize, Serialize};

use fairway_core::error::ScoringError;
use fairway_core::format::{FormatMetadata, Leaderboard, ScoreOrder, ScoringFormat, Standings};
use fairway_core::mode::GameMode;
use fairway_core::player::PlayerId;
use fairway_core::round::Round;

use crate::estimator::{EstimatedPutts, PuttEstimator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnakeVariant {
    #[default]
    Fixed,
    /// Amount grows by `progressive_multiplier` each time the snake changes
    /// hands.
    Progressive,
}

/// Snake options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeConfig {
    /// Base penalty paid by the final holder.
    pub penalty_amount: u32,
    /// Putts on a hole at or above this hand over the snake.
    pub three_putt_threshold: u8,
    pub variant: SnakeVariant,
    pub progressive_multiplier: f64,
    /// Split the penalty among the other players; `false` pays a pot.
    pub distribute_to_group: bool,
    /// Seed for estimating putts on holes entered without them. Estimation
    /// is off unless this is set.
    pub estimate_missing_putts_seed: Option<u64>,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            penalty_amount: 10,
            three_putt_threshold: 3,
            variant: SnakeVariant::Fixed,
            progressive_multiplier: 1.1,
            distribute_to_group: true,
            estimate_missing_putts_seed: None,
        }
    }
}

impl SnakeConfig {
    /// Penalty owed after `passes` handoffs.
    pub fn amount_after(&self, passes: u32) -> u32 {
        match self.variant {
            SnakeVariant::Fixed => self.penalty_amount,
            SnakeVariant::Progressive => {
                let grown =
                    self.penalty_amount as f64 * self.progressive_multiplier.powi(passes as i32);
                grown.round().max(0.0) as u32
            },
        }
    }
}

/// Who holds the snake and how often it has changed hands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnakeState {
    pub holder: Option<PlayerId>,
    pub passes: u32,
}

/// A hole where someone reached the putt threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Possession {
    pub hole: u8,
    /// Everyone over the threshold, in player order.
    pub three_putters: Vec<PlayerId>,
    pub from: Option<PlayerId>,
    pub to: PlayerId,
    pub state: SnakeState,
}

impl SnakeState {
    /// Apply one hole. The last qualifying player in player order takes the
    /// snake; the transition is returned when anyone qualified.
    pub fn advance(self, hole: u8, three_putters: &[PlayerId]) -> (Self, Option<Possession>) {
        let Some(&taker) = three_putters.last() else {
            return (self, None);
        };
        let passes = match self.holder {
            Some(current) if current != taker => self.passes + 1,
            _ => self.passes,
        };
        let next = Self {
            holder: Some(taker),
            passes,
        };
        let possession = Possession {
            hole,
            three_putters: three_putters.to_vec(),
            from: self.holder,
            to: taker,
            state: next,
        };
        (next, Some(possession))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum SnakeSettlement {
    /// Each other player receives `share`; `remainder` is dropped.
    Split {
        payer: PlayerId,
        amount: u32,
        share: u32,
        recipients: Vec<PlayerId>,
        remainder: u32,
    },
    Pot { payer: PlayerId, amount: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnakeResult {
    pub history: Vec<Possession>,
    pub state: SnakeState,
    pub amount: u32,
    /// `None` when nobody reached the threshold.
    pub settlement: Option<SnakeSettlement>,
    /// Net units per player, in round order.
    pub balances: Vec<(PlayerId, i64)>,
    /// Some putt counts behind this result were synthesized.
    pub putts_estimated: bool,
}

impl SnakeResult {
    pub fn holder(&self) -> Option<PlayerId> {
        self.state.holder
    }
}

impl Standings for SnakeResult {
    fn leaderboard(&self) -> Leaderboard {
        Leaderboard::ranked(ScoreOrder::HighWins, self.balances.iter().copied())
    }
}

/// Snake: a three-putt takes the snake, and whoever holds it after the last
/// hole pays.
#[derive(Debug, Clone, Default)]
pub struct Snake {
    pub config: SnakeConfig,
}

impl Snake {
    pub fn new(config: SnakeConfig) -> Self {
        Self { config }
    }

    /// Score using recorded putts, falling back to `estimated` where a hole
    /// has none.
    pub fn play(
        &self,
        round: &Round,
        estimated: Option<&EstimatedPutts>,
    ) -> Result<SnakeResult, ScoringError> {
        self.metadata().check_player_count(round)?;

        let mut state = SnakeState::default();
        let mut history = Vec::new();
        for hole in round.course.holes() {
            let three_putters: Vec<PlayerId> = round
                .players()
                .iter()
                .filter(|p| {
                    let putts = round
                        .score(p.id, hole.number)
                        .and_then(|s| s.putts)
                        .or_else(|| estimated.and_then(|e| e.get(p.id, hole.number)));
                    putts.is_some_and(|n| n >= self.config.three_putt_threshold)
                })
                .map(|p| p.id)
                .collect();
            let (next, possession) = state.advance(hole.number, &three_putters);
            state = next;
            if let Some(possession) = possession {
                tracing::debug!(
                    hole = possession.hole,
                    from = ?possession.from,
                    to = possession.to,
                    passes = state.passes,
                    "Snake changed hands"
                );
                history.push(possession);
            }
        }

        let amount = self.config.amount_after(state.passes);
        let mut balances: Vec<(PlayerId, i64)> =
            round.players().iter().map(|p| (p.id, 0)).collect();
        let settlement = state.holder.map(|payer| {
            if self.config.distribute_to_group {
                let recipients: Vec<PlayerId> = round
                    .player_ids()
                    .into_iter()
                    .filter(|&p| p != payer)
                    .collect();
                let count = recipients.len() as u32;
                let share = amount.checked_div(count).unwrap_or(0);
                let remainder = amount - share * count;
                for (player, balance) in balances.iter_mut() {
                    if *player == payer {
                        *balance -= (share * count) as i64;
                    } else {
                        *balance += share as i64;
                    }
                }
                SnakeSettlement::Split {
                    payer,
                    amount,
                    share,
                    recipients,
                    remainder,
                }
            } else {
                for (player, balance) in balances.iter_mut() {
                    if *player == payer {
                        *balance -= amount as i64;
                    }
                }
                SnakeSettlement::Pot { payer, amount }
            }
        });

        Ok(SnakeResult {
            history,
            state,
            amount,
            settlement,
            balances,
            putts_estimated: estimated.is_some(),
        })
    }

    /// Score with missing putts estimated when the config carries a seed.
    pub fn play_with_estimates(&self, round: &Round) -> Result<SnakeResult, ScoringError> {
        match self.config.estimate_missing_putts_seed {
            Some(seed) => {
                let estimated = PuttEstimator::new(seed).fill_missing(round);
                self.play(round, Some(&estimated))
            },
            None => self.play(round, None),
        }
    }
}

impl ScoringFormat for Snake {
    type Output = SnakeResult;

    fn metadata(&self) -> FormatMetadata {
        FormatMetadata {
            mode: GameMode::Snake,
            name: "Snake".to_string(),
            description: "Three-putt and you hold the snake. Last holder pays the group."
                .to_string(),
            min_players: 2,
            max_players: u8::MAX,
        }
    }

    fn compute(&self, round: &Round) -> Result<SnakeResult, ScoringError> {
        self.play(round, None)
    }
}
