// 🚨 Registry Errors - one variant per validation rule
//
// Every failure is an expected, recoverable, user-facing outcome.
// Checks run in a fixed order per operation and the first failing
// check is returned; violations are never aggregated. The view layer
// turns these values into messages; the engine does no presentation.

use thiserror::Error;

// ============================================================================
// REGISTRY ERROR
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A required name was blank after trimming
    #[error("name is required")]
    EmptyName,

    /// Case-insensitive name collision within the relevant scope
    /// (all subjects, all courses, or batches of one course)
    #[error("'{name}' already exists")]
    DuplicateName { name: String },

    /// Courses must bundle at least two subjects
    #[error("select at least 2 subjects (got {found})")]
    InsufficientSubjects { found: usize },

    /// A subject id did not resolve
    #[error("unknown subject: {id}")]
    UnknownSubject { id: String },

    /// Subject is still referenced by a course
    #[error("cannot delete: used in {course}")]
    ReferencedByCourse { course: String },

    /// Course is still referenced by a batch
    #[error("cannot delete: has batch {batch}")]
    ReferencedByBatch { batch: String },

    /// Course or batch is still referenced by a student
    #[error("cannot delete: has student {student}")]
    ReferencedByStudent { student: String },

    /// A required input was blank
    #[error("{field} is required")]
    MissingField { field: &'static str },

    /// A timestamp string did not parse as ISO-8601
    #[error("{field} is not a valid timestamp: '{value}'")]
    InvalidTimestamp { field: &'static str, value: String },

    /// start_time must be strictly before end_time
    #[error("start time must be before end time")]
    InvalidInterval,

    /// A course id did not resolve
    #[error("unknown course: {id}")]
    UnknownCourse { id: String },

    /// A batch id did not resolve
    #[error("unknown batch: {id}")]
    UnknownBatch { id: String },

    /// The selected batch does not belong to the selected course
    #[error("batch does not belong to selected course")]
    BatchCourseMismatch,

    /// Same name, course and batch already enrolled
    #[error("student already enrolled in this batch")]
    DuplicateEnrollment,

    /// Another batch under the same student name overlaps in time
    #[error("time conflict with batch {batch}")]
    TimeConflict { batch: String },
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_context() {
        let err = RegistryError::ReferencedByCourse { course: "Web Dev".to_string() };
        assert_eq!(err.to_string(), "cannot delete: used in Web Dev");

        let err = RegistryError::MissingField { field: "start_time" };
        assert_eq!(err.to_string(), "start_time is required");

        let err = RegistryError::TimeConflict { batch: "Morning".to_string() };
        assert_eq!(err.to_string(), "time conflict with batch Morning");
    }
}
