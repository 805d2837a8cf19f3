//! Raw course records, as loaded from the catalog.

use serde::{Deserialize, Serialize};

/// A course as it appears in the catalog. Immutable once loaded.
///
/// `meeting_days` holds day-code tokens such as "MWF" or "TTH";
/// `meeting_times` holds "start-end" clock ranges or the literal "TBA".
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Course {
    pub id: String,
    pub course_dept: String,
    pub course_code: String,
    pub course_title: String,
    pub meeting_days: Vec<String>,
    pub meeting_times: Vec<String>,
}

impl Course {
    /// A course with a "TBA" meeting time cannot be placed on the grid and
    /// is excluded from the model entirely.
    pub fn has_tba_time(&self) -> bool {
        self.meeting_times.iter().any(|time| time == "TBA")
    }
}

#[cfg(test)]
mod tests {
    use super::Course;

    #[test]
    fn catalog_record_deserializes() {
        let raw = r#"{
            "id": "12345",
            "course_dept": "CS",
            "course_code": "101",
            "course_title": "Intro to Programming",
            "meeting_days": ["MWF"],
            "meeting_times": ["9:00a-9:50a", "TBA"]
        }"#;

        let course: Course = serde_json::from_str(raw).expect("catalog record");
        assert_eq!(course.id, "12345");
        assert_eq!(course.meeting_days, ["MWF"]);
        assert!(course.has_tba_time());
    }
}
