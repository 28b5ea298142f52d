#![allow(dead_code)]

use fairway_core::mode::GameMode;
use fairway_core::round::Round;
use fairway_core::score::HoleScore;
use fairway_core::test_helpers::{PAR_72, RoundBuilder, par_72_course};

/// Strokes over par on every hole for players 1 through 4.
pub const OVER_PAR: [u8; 4] = [0, 1, 1, 2];

/// Four players over a full par-72 card. Player 1 shoots level par, players
/// 2 and 3 bogey every hole, player 4 doubles every hole and three-putts the
/// 17th.
pub fn foursome(primary: GameMode, side_modes: &[GameMode]) -> Round {
    let mut builder = RoundBuilder::on_course(par_72_course(), 4)
        .mode(primary)
        .side_modes(side_modes.iter().copied());
    for (i, over) in OVER_PAR.iter().enumerate() {
        let card: Vec<u8> = PAR_72.iter().map(|par| par + over).collect();
        builder = builder.strokes(i as u64 + 1, &card);
    }
    builder
        .hole(4, 17, HoleScore::strokes(PAR_72[16] + 2).with_putts(3))
        .build()
}

/// `n` players on a flat par-4 course with no scores entered.
pub fn empty_round(n: usize, primary: GameMode) -> Round {
    RoundBuilder::new(n).mode(primary).build()
}
