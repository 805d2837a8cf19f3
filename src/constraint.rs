//! Constraint records and their evaluation.

use std::collections::BTreeSet;
use std::iter;

use crate::{Day, Minutes, Placement, VarToken};

/// A restriction on one or two course variables.
///
/// Constraints are plain records holding their bounds at construction time;
/// evaluation is a single dispatch over the kind.
#[derive(Clone, Debug)]
pub enum Constraint {
    /// The assigned slot's clock value must fall inside `[start, end]`.
    ///
    /// Only the slot is compared against the window. The assignment need
    /// not equal the declared meeting start; any mark inside the window is
    /// acceptable.
    Window {
        var: VarToken,
        start: Minutes,
        end: Minutes,
    },

    /// The assigned day must belong to the given set.
    Day { var: VarToken, days: BTreeSet<Day> },

    /// Two courses must not share an identical (day, slot) pair.
    Distinct { a: VarToken, b: VarToken },
}

impl Constraint {
    /// The variables this constraint touches.
    pub fn vars(&self) -> impl Iterator<Item = VarToken> {
        let (first, second) = match self {
            Constraint::Window { var, .. } | Constraint::Day { var, .. } => (*var, None),
            Constraint::Distinct { a, b } => (*a, Some(*b)),
        };

        iter::once(first).chain(second)
    }

    /// The variable restricted by a unary constraint, if this is one.
    pub fn unary_var(&self) -> Option<VarToken> {
        match self {
            Constraint::Window { var, .. } | Constraint::Day { var, .. } => Some(*var),
            Constraint::Distinct { .. } => None,
        }
    }

    /// Evaluate the constraint against a partial assignment.
    ///
    /// `lookup` reports the placement bound to a variable, or `None` while
    /// it is unbound. A constraint touching an unbound variable is trivially
    /// satisfied.
    pub fn is_satisfied<F>(&self, lookup: F) -> bool
    where
        F: Fn(VarToken) -> Option<Placement>,
    {
        match self {
            Constraint::Window { var, start, end } => lookup(*var).map_or(true, |placement| {
                let clock = placement.slot.minutes();
                *start <= clock && clock <= *end
            }),

            Constraint::Day { var, days } => {
                lookup(*var).map_or(true, |placement| days.contains(&placement.day))
            }

            Constraint::Distinct { a, b } => match (lookup(*a), lookup(*b)) {
                (Some(pa), Some(pb)) => pa != pb,
                _ => true,
            },
        }
    }
}
