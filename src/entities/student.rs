// 🎓 Student Entity - an enrollment record
//
// A student links a typed name to one course and one batch:
// - The referenced batch must belong to the referenced course
// - Scheduling identity is the name string, compared case-insensitively
//   (two enrollments under the same name share one timetable)
// - No downstream references: deletion is unconditional

use serde::{Deserialize, Serialize};

// ============================================================================
// STUDENT ENTITY
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    /// Stable identity (UUID) - never changes, never reused
    pub id: String,

    /// Enrolled name (trimmed, non-empty)
    pub name: String,

    /// Course of the enrollment
    pub course_id: String,

    /// Batch of the enrollment (must belong to course_id)
    pub batch_id: String,
}

impl Student {
    /// Create a new enrollment with a fresh UUID
    pub fn new(name: &str, course_id: &str, batch_id: &str) -> Self {
        Student {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            course_id: course_id.to_string(),
            batch_id: batch_id.to_string(),
        }
    }

    /// Case-insensitive name comparison (duplicate and conflict checks)
    pub fn name_matches(&self, other: &str) -> bool {
        self.name.to_lowercase() == other.to_lowercase()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_creation() {
        let student = Student::new("Alice", "course-1", "batch-1");

        assert!(!student.id.is_empty());
        assert_eq!(student.name, "Alice");
        assert_eq!(student.course_id, "course-1");
        assert_eq!(student.batch_id, "batch-1");
    }

    #[test]
    fn test_name_matches_is_case_insensitive() {
        let student = Student::new("Alice", "course-1", "batch-1");

        assert!(student.name_matches("alice"));
        assert!(student.name_matches("ALICE"));
        assert!(!student.name_matches("Bob"));
    }
}
