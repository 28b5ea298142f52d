use thiserror::Error;

use crate::mode::GameMode;
use crate::player::PlayerId;
use crate::round::RoundStatus;

/// Course layout validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CourseError {
    #[error("course must have 18 holes, got {0}")]
    HoleCount(usize),
    #[error("hole number {0} is outside 1-18")]
    HoleNumber(u8),
    #[error("hole {0} appears more than once")]
    DuplicateHole(u8),
    #[error("hole {hole} has par {par}, expected 3-5")]
    Par { hole: u8, par: u8 },
    #[error("hole {hole} has stroke index {index}, expected 1-18")]
    StrokeIndex { hole: u8, index: u8 },
}

/// Score entry and lifecycle failures on a [`crate::round::Round`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("round is {0:?}, scores can only be entered while active")]
    NotActive(RoundStatus),
    #[error("player {0} is not in this round")]
    UnknownPlayer(PlayerId),
    #[error("hole {0} is not on this course")]
    UnknownHole(u8),
    #[error("a hole score needs at least one stroke")]
    ZeroStrokes,
    #[error("cannot move round from {from:?} to {to:?}")]
    Transition { from: RoundStatus, to: RoundStatus },
}

/// Input-validation failures raised by a scoring format before any result
/// is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("{mode} needs {required} players, round has {actual}")]
    NotEnoughPlayers {
        mode: GameMode,
        required: usize,
        actual: usize,
    },
    #[error("{mode} needs exactly {expected} players, round has {actual}")]
    PlayerCount {
        mode: GameMode,
        expected: usize,
        actual: usize,
    },
    #[error("{mode} allows at most {max} players, round has {actual}")]
    TooManyPlayers {
        mode: GameMode,
        max: usize,
        actual: usize,
    },
    #[error("player {0} is referenced by the format config but not in the round")]
    UnknownPlayer(PlayerId),
    #[error("invalid teams: {0}")]
    InvalidTeams(String),
    #[error("invalid decision on hole {hole}: {reason}")]
    InvalidDecision { hole: u8, reason: String },
    #[error("{0} is not available in this build")]
    UnsupportedMode(GameMode),
}
