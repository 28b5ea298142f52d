//! Handicap maths: per-round differentials, the progressive best-N index,
//! and conversion of an index into course strokes.

pub mod course_handicap;
pub mod differential;
pub mod index;

pub use course_handicap::course_handicap;
pub use differential::{RoundDifferential, calculate_differential};
pub use index::{HandicapResult, SelectionMethod, calculate_handicap_index, index_from_rounds};
