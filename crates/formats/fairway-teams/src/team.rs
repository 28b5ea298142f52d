use fairway_core::player::PlayerId;
use fairway_core::round::Round;

/// Lowest score among `members` on `hole`. Members without a score are
/// skipped; `None` when nobody on the side has scored.
pub fn best_ball(round: &Round, members: &[PlayerId], hole: u8, net: bool) -> Option<i32> {
    members
        .iter()
        .filter_map(|&id| round.scoring_strokes(id, hole, net))
        .min()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairway_core::test_helpers::RoundBuilder;

    #[test]
    fn best_ball_takes_lowest_scored() {
        let round = RoundBuilder::new(3)
            .strokes(1, &[5])
            .strokes(2, &[3])
            .build();
        assert_eq!(best_ball(&round, &[1, 2], 1, false), Some(3));
        assert_eq!(best_ball(&round, &[1, 3], 1, false), Some(5));
        assert_eq!(best_ball(&round, &[3], 1, false), None);
    }
}
