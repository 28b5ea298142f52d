use crate::differential::STANDARD_SLOPE;

/// Strokes a player with `index` receives on a specific set of tees:
/// `index * slope / 113 + (rating - par)`, rounded to a whole stroke.
pub fn course_handicap(index: f64, slope: u32, course_rating: f64, par: u32) -> i32 {
    let strokes = index * slope as f64 / STANDARD_SLOPE + (course_rating - par as f64);
    strokes.round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_tees_match_index() {
        assert_eq!(course_handicap(12.4, 113, 72.0, 72), 12);
    }

    #[test]
    fn slope_and_rating_adjust() {
        // 10.0 * 130 / 113 = 11.50, + (73.1 - 72) = 12.60
        assert_eq!(course_handicap(10.0, 130, 73.1, 72), 13);
    }

    #[test]
    fn plus_index_stays_negative() {
        assert_eq!(course_handicap(-2.0, 113, 71.0, 72), -3);
    }
}
