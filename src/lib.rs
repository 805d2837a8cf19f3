//! This crate searches for conflict-free course timetables.
//! Each course becomes a constraint-satisfaction variable over a five-day
//! grid of half-hour marks, and a backtracking search finds the first
//! assignment that satisfies every meeting-day and meeting-time rule.

pub mod constraint;

mod course;
mod error;
mod extract;
mod grid;
mod parse;
mod schedule;

use std::ops;

pub use constraint::Constraint;
pub use course::Course;
pub use error::Error;
pub use extract::{extract, ScheduledCourse};
pub use grid::{Day, Minutes, Placement, Slot};
pub use schedule::Schedule;

/// A course variable token.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct VarToken(usize);

/// A feasible timetable: one placement per course id, in variable order.
///
/// The first consistent assignment found by the search, never a partial one.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Solution {
    assignments: Vec<(String, Placement)>,
}

impl Solution {
    /// Iterate over (course id, placement) pairs in variable order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Placement)> + '_ {
        self.assignments
            .iter()
            .map(|(id, placement)| (id.as_str(), *placement))
    }

    /// Look up the placement chosen for a course id.
    pub fn get(&self, id: &str) -> Option<Placement> {
        self.assignments
            .iter()
            .find(|(course, _)| course.as_str() == id)
            .map(|(_, placement)| *placement)
    }

    /// The number of scheduled courses.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

impl ops::Index<VarToken> for Solution {
    type Output = Placement;

    fn index(&self, var: VarToken) -> &Placement {
        let VarToken(idx) = var;
        &self.assignments[idx].1
    }
}
