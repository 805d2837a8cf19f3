use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// An assignment referenced a course id with no catalog record. The
    /// model and the extractor disagree about the course set, which is a
    /// broken invariant rather than an expected runtime condition.
    #[error("no course record for scheduled id `{0}`")]
    UnknownCourse(String),
}
