// 📖 Subject Entity - a named unit of curriculum content
//
// Smallest building block of the catalog:
// - Stable identity (UUID) assigned by the Registry, never reused
// - Name is a value, unique case-insensitively among subjects
// - Referenced by Course.subject_ids

use serde::{Deserialize, Serialize};

// ============================================================================
// SUBJECT ENTITY
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    /// Stable identity (UUID) - never changes, never reused
    pub id: String,

    /// Display name (trimmed, non-empty)
    pub name: String,
}

impl Subject {
    /// Create a new subject with a fresh UUID
    pub fn new(name: &str) -> Self {
        Subject {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
        }
    }

    /// Case-insensitive name comparison (uniqueness checks)
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
    fn test_subject_creation() {
        let subject = Subject::new("Mathematics");

        assert!(!subject.id.is_empty());
        assert_eq!(subject.name, "Mathematics");
    }

    #[test]
    fn test_subject_ids_are_unique() {
        let a = Subject::new("HTML");
        let b = Subject::new("HTML");

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_name_matches_is_case_insensitive() {
        let subject = Subject::new("Mathematics");

        assert!(subject.name_matches("Mathematics"));
        assert!(subject.name_matches("mathematics"));
        assert!(subject.name_matches("MATHEMATICS"));
        assert!(!subject.name_matches("Physics"));
    }
}
