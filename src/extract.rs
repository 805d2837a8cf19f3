//! Joining a solved assignment back to course metadata for display.

use serde::Serialize;

use crate::{Course, Day, Error, Slot, Solution};

/// A display-ready schedule entry.
#[derive(Clone, Debug, Serialize)]
pub struct ScheduledCourse {
    pub course_dept: String,
    pub course_code: String,
    pub course_title: String,
    pub day: Day,
    pub time: Slot,
}

/// Join each scheduled course id back to its catalog record.
///
/// Entries follow the assignment's variable order. An id with no matching
/// record is reported as [`Error::UnknownCourse`].
pub fn extract(catalog: &[Course], solution: &Solution) -> Result<Vec<ScheduledCourse>, Error> {
    solution
        .iter()
        .map(|(id, placement)| {
            let course = catalog
                .iter()
                .find(|course| course.id == id)
                .ok_or_else(|| Error::UnknownCourse(id.to_owned()))?;

            Ok(ScheduledCourse {
                course_dept: course.course_dept.clone(),
                course_code: course.course_code.clone(),
                course_title: course.course_title.clone(),
                day: placement.day,
                time: placement.slot,
            })
        })
        .collect()
}
