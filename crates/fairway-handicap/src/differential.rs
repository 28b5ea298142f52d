use serde::{Deserialize, Serialize};

/// Slope rating of a course of standard difficulty.
pub const STANDARD_SLOPE: f64 = 113.0;

/// Normalize a gross score to a handicap differential:
/// `(gross - rating) * 113 / slope`.
///
/// Returns 0.0 when `rating` or `slope` is not positive; callers wanting a
/// hard failure must validate first.
pub fn calculate_differential(gross: i32, course_rating: f64, slope: u32) -> f64 {
    if course_rating <= 0.0 || slope == 0 {
        return 0.0;
    }
    (gross as f64 - course_rating) * STANDARD_SLOPE / slope as f64
}

/// One historical round reduced to its differential.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundDifferential {
    pub gross: i32,
    pub course_rating: f64,
    pub slope: u32,
    pub differential: f64,
}

impl RoundDifferential {
    pub fn new(gross: i32, course_rating: f64, slope: u32) -> Self {
        Self {
            gross,
            course_rating,
            slope,
            differential: calculate_differential(gross, course_rating, slope),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn standard_slope_is_gross_minus_rating() {
        assert_eq!(calculate_differential(80, 72.0, 113), 8.0);
        assert_eq!(calculate_differential(70, 72.0, 113), -2.0);
    }

    #[test]
    fn steeper_slope_shrinks_differential() {
        let d = calculate_differential(90, 72.0, 135);
        assert!((d - 18.0 * 113.0 / 135.0).abs() < 1e-9);
    }

    #[test]
    fn invalid_rating_or_slope_returns_zero() {
        assert_eq!(calculate_differential(90, 0.0, 113), 0.0);
        assert_eq!(calculate_differential(90, -71.5, 113), 0.0);
        assert_eq!(calculate_differential(90, 72.0, 0), 0.0);
    }

    #[test]
    fn round_differential_carries_inputs() {
        let rd = RoundDifferential::new(85, 71.2, 128);
        assert_eq!(rd.gross, 85);
        assert!((rd.differential - calculate_differential(85, 71.2, 128)).abs() < f64::EPSILON);
    }

    proptest! {
        #[test]
        fn differential_increases_with_gross(
            gross in 50i32..150,
            rating in 60.0f64..80.0,
            slope in 55u32..=155,
        ) {
            let lower = calculate_differential(gross, rating, slope);
            let higher = calculate_differential(gross + 1, rating, slope);
            prop_assert!(higher > lower);
        }

        #[test]
        fn differential_decreases_with_slope_when_over_rating(
            over in 1i32..60,
            rating in 60.0f64..80.0,
            slope in 55u32..155,
        ) {
            let gross = rating.ceil() as i32 + over;
            let gentle = calculate_differential(gross, rating, slope);
            let steep = calculate_differential(gross, rating, slope + 1);
            prop_assert!(steep < gentle);
        }
    }
}
