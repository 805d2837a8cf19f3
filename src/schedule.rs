//! The timetable model and the backtracking search.

use bit_set::BitSet;
use std::cell::Cell;
use std::collections::BTreeSet;

use crate::constraint::Constraint;
use crate::course::Course;
use crate::parse;
use crate::{Day, Placement, Solution, VarToken};

/// The constraint graph for one scheduling request.
///
/// Built fresh from the selected courses on every invocation and discarded
/// after the search returns; the search borrows it immutably, so separate
/// requests never share mutable state.
pub struct Schedule {
    // Courses that survived the TBA filter, in input order.
    courses: Vec<Course>,

    // The initial candidates of each variable, as packed (day, slot) indices.
    domains: Vec<BitSet>,

    // The unary and binary constraint records.
    constraints: Vec<Constraint>,

    // The list of constraints that each variable touches.
    wake: Vec<BitSet>,

    // The number of guesses taken by the last search.
    num_guesses: Cell<u64>,

    // Abort the search once this many guesses have been taken.
    max_guesses: Option<u64>,
}

/// Intermediate search state: the pruned domains and the assignment stack.
struct ScheduleSearch<'a> {
    schedule: &'a Schedule,

    // Per-variable domains after unary pruning.
    domains: Vec<BitSet>,

    // The partial assignment, indexed by variable position.
    bound: Vec<Option<Placement>>,
}

/*--------------------------------------------------------------*/

impl Schedule {
    /// Build the model for the given course selection.
    ///
    /// Courses with a "TBA" meeting time are left out entirely. Each
    /// remaining course becomes one variable over the full day x slot grid,
    /// restricted by its parsed meeting windows and its derived day set;
    /// every pair of courses must differ in day or slot.
    ///
    /// # Examples
    ///
    /// ```
    /// let course = schedule_solver::Course {
    ///     id: "cs101".into(),
    ///     course_dept: "CS".into(),
    ///     course_code: "101".into(),
    ///     course_title: "Intro to Programming".into(),
    ///     meeting_days: vec!["MWF".into()],
    ///     meeting_times: vec!["9:00a-9:50a".into()],
    /// };
    ///
    /// let sys = schedule_solver::Schedule::new(std::slice::from_ref(&course));
    /// assert_eq!(sys.num_vars(), 1);
    /// ```
    pub fn new(selection: &[Course]) -> Self {
        let courses: Vec<Course> = selection
            .iter()
            .filter(|course| !course.has_tba_time())
            .cloned()
            .collect();

        let mut constraints = Vec::new();

        for (idx, course) in courses.iter().enumerate() {
            let var = VarToken(idx);

            for time in &course.meeting_times {
                if let Some((start, end)) = parse::decode_window(time) {
                    constraints.push(Constraint::Window { var, start, end });
                }
            }

            // A "TBA" day token, or a code with no recognisable letters,
            // leaves the course unconstrained on day.
            if !course.meeting_days.iter().any(|token| token == "TBA") {
                let days: BTreeSet<Day> = course
                    .meeting_days
                    .iter()
                    .flat_map(|token| parse::decode_days(token))
                    .collect();

                if !days.is_empty() {
                    constraints.push(Constraint::Day { var, days });
                }
            }
        }

        for a in 0..courses.len() {
            for b in (a + 1)..courses.len() {
                constraints.push(Constraint::Distinct {
                    a: VarToken(a),
                    b: VarToken(b),
                });
            }
        }

        let domains = vec![full_domain(); courses.len()];
        let wake = init_wake(&constraints, courses.len());

        Schedule {
            courses,
            domains,
            constraints,
            wake,
            num_guesses: Cell::new(0),
            max_guesses: None,
        }
    }

    /// The courses in the model, in variable order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// The number of course variables in the model.
    pub fn num_vars(&self) -> usize {
        self.courses.len()
    }

    /// The variable tokens, in creation order.
    pub fn vars(&self) -> Vec<VarToken> {
        (0..self.courses.len()).map(VarToken).collect()
    }

    /// The constraint records of the model.
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Limit the number of guesses the search may take. A search that
    /// exceeds the limit gives up and reports no solution, so a pathological
    /// selection cannot block the caller indefinitely.
    pub fn set_max_guesses(&mut self, limit: u64) {
        self.max_guesses = Some(limit);
    }

    /// Find the first feasible timetable, or `None` when no assignment
    /// satisfies every constraint.
    ///
    /// The search is chronological backtracking: variables in course input
    /// order, values day-major through the grid, with each variable's domain
    /// shrunk by its unary constraints before the search starts. Identical
    /// input yields an identical result.
    ///
    /// # Examples
    ///
    /// ```
    /// let sys = schedule_solver::Schedule::new(&[]);
    /// assert!(sys.solve_any().is_none());
    /// ```
    pub fn solve_any(&self) -> Option<Solution> {
        self.num_guesses.set(0);
        if self.courses.is_empty() {
            return None;
        }

        let mut search = ScheduleSearch::new(self)?;
        if !search.solve(0) {
            return None;
        }

        let assignments = self
            .courses
            .iter()
            .zip(&search.bound)
            .map(|(course, placement)| (course.id.clone(), placement.expect("bound")))
            .collect();

        Some(Solution { assignments })
    }

    /// Get the number of guesses taken by the last search.
    pub fn num_guesses(&self) -> u64 {
        self.num_guesses.get()
    }
}

/*--------------------------------------------------------------*/

impl<'a> ScheduleSearch<'a> {
    /// Allocate a new searcher, applying every unary constraint eagerly to
    /// shrink the domains. Returns `None` when a domain empties, which
    /// already rules out any solution.
    fn new(schedule: &'a Schedule) -> Option<Self> {
        let mut domains = schedule.domains.clone();

        for constraint in &schedule.constraints {
            if let Some(VarToken(idx)) = constraint.unary_var() {
                let drop: Vec<usize> = domains[idx]
                    .iter()
                    .filter(|&raw| {
                        let placement = Placement::from_index(raw);
                        !constraint.is_satisfied(|_| Some(placement))
                    })
                    .collect();

                for raw in drop {
                    domains[idx].remove(raw);
                }

                if domains[idx].is_empty() {
                    return None;
                }
            }
        }

        Some(ScheduleSearch {
            schedule,
            domains,
            bound: vec![None; schedule.num_vars()],
        })
    }

    /// Bind variables in creation order, depth first. On domain exhaustion
    /// the caller's loop advances the previous variable.
    fn solve(&mut self, idx: usize) -> bool {
        if idx == self.schedule.num_vars() {
            return true;
        }

        let candidates: Vec<usize> = self.domains[idx].iter().collect();
        for raw in candidates {
            let num_guesses = self.schedule.num_guesses.get() + 1;
            self.schedule.num_guesses.set(num_guesses);
            if let Some(limit) = self.schedule.max_guesses {
                if num_guesses > limit {
                    // Budget exhausted: unwind to the deterministic failure.
                    return false;
                }
            }

            let placement = Placement::from_index(raw);
            if !self.consistent(idx, placement) {
                continue;
            }

            self.bound[idx] = Some(placement);
            if self.solve(idx + 1) {
                return true;
            }
            self.bound[idx] = None;
        }

        false
    }

    /// Check a candidate against every constraint between this variable and
    /// the already-bound ones. The unary constraints hold by construction
    /// after pruning, and constraints towards unbound variables are
    /// trivially satisfied.
    fn consistent(&self, idx: usize, placement: Placement) -> bool {
        let lookup = |var: VarToken| {
            let VarToken(i) = var;
            if i == idx {
                Some(placement)
            } else {
                self.bound[i]
            }
        };

        self.schedule.wake[idx]
            .iter()
            .all(|cidx| self.schedule.constraints[cidx].is_satisfied(lookup))
    }
}

/*--------------------------------------------------------------*/

// The full 5 x 27 grid of packed (day, slot) indices.
fn full_domain() -> BitSet {
    let mut domain = BitSet::with_capacity(Placement::COUNT);
    for raw in 0..Placement::COUNT {
        domain.insert(raw);
    }
    domain
}

// Determine which variables touch which constraints.
fn init_wake(constraints: &[Constraint], num_vars: usize) -> Vec<BitSet> {
    let mut wake = vec![BitSet::new(); num_vars];
    for (cidx, constraint) in constraints.iter().enumerate() {
        for VarToken(idx) in constraint.vars() {
            wake[idx].insert(cidx);
        }
    }

    wake
}

#[cfg(test)]
mod tests {
    use crate::Schedule;

    #[test]
    fn test_no_courses() {
        let sys = Schedule::new(&[]);
        assert!(sys.solve_any().is_none());
        assert_eq!(sys.num_guesses(), 0);
    }
}
