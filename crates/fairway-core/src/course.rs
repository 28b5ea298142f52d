use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::CourseError;

/// Number of holes on a regulation course.
pub const HOLE_COUNT: u8 = 18;

/// A single hole: par, length, and an optional difficulty rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hole {
    pub number: u8,
    pub par: u8,
    pub yardage: u32,
    /// Handicap stroke index (1 = hardest). Falls back to the hole number when absent.
    #[serde(default)]
    pub stroke_index: Option<u8>,
}

impl Hole {
    pub const fn new(number: u8, par: u8, yardage: u32) -> Self {
        Self {
            number,
            par,
            yardage,
            stroke_index: None,
        }
    }

    /// Stroke index used for handicap allocation.
    pub fn allocation_index(&self) -> u8 {
        self.stroke_index.unwrap_or(self.number)
    }
}

/// Static par/yardage layout for an 18-hole course. Holes are kept in
/// ascending hole-number order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCourse")]
pub struct Course {
    pub name: String,
    holes: Vec<Hole>,
}

/// Unvalidated course as it appears on the wire.
#[derive(Deserialize)]
struct RawCourse {
    name: String,
    holes: Vec<Hole>,
}

impl TryFrom<RawCourse> for Course {
    type Error = CourseError;

    fn try_from(raw: RawCourse) -> Result<Self, Self::Error> {
        Self::new(raw.name, raw.holes)
    }
}

impl Course {
    /// Build a course, validating hole count, numbering, and par range.
    pub fn new(name: impl Into<String>, mut holes: Vec<Hole>) -> Result<Self, CourseError> {
        if holes.len() != HOLE_COUNT as usize {
            return Err(CourseError::HoleCount(holes.len()));
        }
        let mut seen = BTreeSet::new();
        for hole in &holes {
            if !(1..=HOLE_COUNT).contains(&hole.number) {
                return Err(CourseError::HoleNumber(hole.number));
            }
            if !seen.insert(hole.number) {
                return Err(CourseError::DuplicateHole(hole.number));
            }
            if !(3..=5).contains(&hole.par) {
                return Err(CourseError::Par {
                    hole: hole.number,
                    par: hole.par,
                });
            }
            if let Some(index) = hole.stroke_index
                && !(1..=HOLE_COUNT).contains(&index)
            {
                return Err(CourseError::StrokeIndex {
                    hole: hole.number,
                    index,
                });
            }
        }
        holes.sort_by_key(|h| h.number);
        Ok(Self {
            name: name.into(),
            holes,
        })
    }

    /// Build a course from 18 pars, assigning hole numbers in order and a
    /// nominal yardage.
    pub fn from_pars(name: impl Into<String>, pars: [u8; 18]) -> Result<Self, CourseError> {
        let holes = pars
            .iter()
            .enumerate()
            .map(|(i, &par)| Hole::new(i as u8 + 1, par, nominal_yardage(par)))
            .collect();
        Self::new(name, holes)
    }

    pub fn holes(&self) -> &[Hole] {
        &self.holes
    }

    pub fn hole(&self, number: u8) -> Option<&Hole> {
        self.holes.iter().find(|h| h.number == number)
    }

    /// Par for a hole, or `None` when the hole is not on this course.
    pub fn par(&self, number: u8) -> Option<u8> {
        self.hole(number).map(|h| h.par)
    }

    pub fn total_par(&self) -> u32 {
        self.holes.iter().map(|h| h.par as u32).sum()
    }

    pub fn total_yardage(&self) -> u32 {
        self.holes.iter().map(|h| h.yardage).sum()
    }
}

fn nominal_yardage(par: u8) -> u32 {
    match par {
        3 => 165,
        4 => 390,
        _ => 520,
    }
}
