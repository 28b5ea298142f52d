use serde::{Deserialize, Serialize};

use crate::differential::RoundDifferential;

/// Only the most recent rounds count toward the index.
pub const MAX_ROUNDS: usize = 20;
/// Multiplier applied to the averaged best differentials.
pub const SOFT_CAP: f64 = 0.96;

/// How many of the available differentials were averaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionMethod {
    #[serde(rename = "insufficient")]
    Insufficient,
    #[serde(rename = "best-2-of-5")]
    Best2Of5,
    #[serde(rename = "best-3-of-10")]
    Best3Of10,
    #[serde(rename = "best-8-of-20")]
    Best8Of20,
}

impl SelectionMethod {
    /// Fixed thresholds, no interpolation between tiers.
    pub fn for_rounds(rounds: usize) -> Self {
        match rounds {
            0..=4 => Self::Insufficient,
            5..=9 => Self::Best2Of5,
            10..=19 => Self::Best3Of10,
            _ => Self::Best8Of20,
        }
    }

    /// Number of lowest differentials averaged.
    pub fn best_n(self) -> usize {
        match self {
            Self::Insufficient => 0,
            Self::Best2Of5 => 2,
            Self::Best3Of10 => 3,
            Self::Best8Of20 => 8,
        }
    }

    /// Rounds required to enter the next tier, if there is one.
    fn next_tier_threshold(self) -> Option<usize> {
        match self {
            Self::Insufficient => Some(5),
            Self::Best2Of5 => Some(10),
            Self::Best3Of10 => Some(20),
            Self::Best8Of20 => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Insufficient => "insufficient",
            Self::Best2Of5 => "best-2-of-5",
            Self::Best3Of10 => "best-3-of-10",
            Self::Best8Of20 => "best-8-of-20",
        }
    }
}

/// Outcome of a handicap index query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandicapResult {
    /// `None` with fewer than five rounds.
    pub index: Option<f64>,
    /// Differentials considered (at most the 20 most recent), in input order.
    pub differentials: Vec<f64>,
    /// Differentials averaged, lowest first.
    pub used: Vec<f64>,
    pub method: SelectionMethod,
    /// Rounds still needed to reach the next selection tier (0 at the top tier).
    pub rounds_needed: usize,
}

/// Compute a handicap index from differentials ordered most recent first.
///
/// Sorts ascending, averages the best N for the tier, multiplies by 0.96, and
/// rounds to one decimal.
pub fn calculate_handicap_index(differentials: &[f64]) -> HandicapResult {
    let considered: Vec<f64> = differentials
        .iter()
        .copied()
        .filter(|d| d.is_finite())
        .take(MAX_ROUNDS)
        .collect();
    let method = SelectionMethod::for_rounds(considered.len());
    let rounds_needed = method
        .next_tier_threshold()
        .map_or(0, |t| t.saturating_sub(considered.len()));

    let mut sorted = considered.clone();
    sorted.sort_by(f64::total_cmp);
    let used: Vec<f64> = sorted.into_iter().take(method.best_n()).collect();

    let index = (!used.is_empty()).then(|| {
        let average = used.iter().sum::<f64>() / used.len() as f64;
        round_to_tenth(average * SOFT_CAP)
    });

    tracing::debug!(
        rounds = considered.len(),
        method = method.label(),
        ?index,
        "Calculated handicap index"
    );

    HandicapResult {
        index,
        differentials: considered,
        used,
        method,
        rounds_needed,
    }
}

/// Compute an index directly from round records.
pub fn index_from_rounds(rounds: &[RoundDifferential]) -> HandicapResult {
    let differentials: Vec<f64> = rounds.iter().map(|r| r.differential).collect();
    calculate_handicap_index(&differentials)
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::differential::calculate_differential;

    #[test]
    fn five_rounds_averages_best_two_with_soft_cap() {
        let diffs: Vec<f64> = [70, 71, 72, 73, 74]
            .iter()
            .map(|&g| calculate_differential(g, 72.0, 113))
            .collect();
        let result = calculate_handicap_index(&diffs);
        assert_eq!(result.method, SelectionMethod::Best2Of5);
        assert_eq!(result.used, vec![-2.0, -1.0]);
        // (-2 + -1) / 2 = -1.5, * 0.96 = -1.44
        assert_eq!(result.index, Some(-1.4));
        assert_eq!(result.rounds_needed, 5);
    }

    #[test]
    fn method_boundaries() {
        let method = |n: usize| calculate_handicap_index(&vec![10.0; n]).method;
        assert_eq!(method(4), SelectionMethod::Insufficient);
        assert_eq!(method(5), SelectionMethod::Best2Of5);
        assert_eq!(method(9), SelectionMethod::Best2Of5);
        assert_eq!(method(10), SelectionMethod::Best3Of10);
        assert_eq!(method(19), SelectionMethod::Best3Of10);
        assert_eq!(method(20), SelectionMethod::Best8Of20);
    }

    #[test]
    fn insufficient_reports_rounds_to_minimum() {
        let result = calculate_handicap_index(&[12.0, 14.0, 9.5]);
        assert_eq!(result.index, None);
        assert!(result.used.is_empty());
        assert_eq!(result.rounds_needed, 2);
        assert_eq!(calculate_handicap_index(&[]).rounds_needed, 5);
    }

    #[test]
    fn only_twenty_most_recent_rounds_count() {
        // Most recent first: twenty 20.0s, then an old 0.0 that must be ignored.
        let mut diffs = vec![20.0; 20];
        diffs.push(0.0);
        let result = calculate_handicap_index(&diffs);
        assert_eq!(result.differentials.len(), 20);
        assert_eq!(result.index, Some(19.2));
        assert_eq!(result.rounds_needed, 0);
    }

    #[test]
    fn best_eight_of_twenty() {
        let diffs: Vec<f64> = (1..=20).map(f64::from).collect();
        let result = calculate_handicap_index(&diffs);
        assert_eq!(result.used, (1..=8).map(f64::from).collect::<Vec<_>>());
        // mean 4.5 * 0.96 = 4.32
        assert_eq!(result.index, Some(4.3));
    }

    #[test]
    fn index_from_round_records() {
        let rounds: Vec<RoundDifferential> = [85, 88, 90, 84, 92]
            .iter()
            .map(|&g| RoundDifferential::new(g, 72.0, 113))
            .collect();
        let result = index_from_rounds(&rounds);
        // best two: 12, 13 -> 12.5 * 0.96 = 12.0
        assert_eq!(result.index, Some(12.0));
    }

    #[test]
    fn method_serializes_as_label() {
        let json = serde_json::to_string(&SelectionMethod::Best3Of10).unwrap();
        assert_eq!(json, "\"best-3-of-10\"");
    }
}
