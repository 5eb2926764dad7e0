// 📚 Course Entity - a named bundle of subjects
//
// A course references at least two subjects by id:
// - subject_ids keeps the order the caller supplied (display order only,
//   membership is a set)
// - Name is unique case-insensitively among courses
// - Referenced by Batch.course_id and Student.course_id

use serde::{Deserialize, Serialize};

// ============================================================================
// COURSE ENTITY
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Stable identity (UUID) - never changes, never reused
    pub id: String,

    /// Display name (trimmed, non-empty)
    pub name: String,

    /// Subject ids in the order provided (always >= 2)
    pub subject_ids: Vec<String>,
}

impl Course {
    /// Create a new course with a fresh UUID
    pub fn new(name: &str, subject_ids: Vec<String>) -> Self {
        Course {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            subject_ids,
        }
    }

    /// Case-insensitive name comparison (uniqueness checks)
    pub fn name_matches(&self, other: &str) -> bool {
        self.name.to_lowercase() == other.to_lowercase()
    }

    /// Does this course reference the given subject?
    pub fn references_subject(&self, subject_id: &str) -> bool {
        self.subject_ids.iter().any(|id| id == subject_id)
    }
}

// ============================================================================
// TESTS
// ============================================================================
