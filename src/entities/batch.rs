// ⏰ Batch Entity - a scheduled time window for a course
//
// A batch is where scheduling lives:
// - References exactly one course
// - start_time < end_time, compared as parsed timestamps
// - Name is unique case-insensitively among batches of the SAME course
// - Overlap between two batches uses the half-open rule [start, end):
//   touching windows (A ends exactly when B starts) do NOT overlap

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ============================================================================
// TIMESTAMP PARSING
// ============================================================================

/// Parse an ISO-8601 local timestamp, with or without seconds.
///
/// The view layer hands over `datetime-local` style strings
/// ("2024-01-01T09:00"); full "2024-01-01T09:00:00" is accepted too.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
        .ok()
}

// ============================================================================
// BATCH ENTITY
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Batch {
    /// Stable identity (UUID) - never changes, never reused
    pub id: String,

    /// Display name (trimmed, non-empty, unique within its course)
    pub name: String,

    /// Course this batch delivers
    pub course_id: String,

    /// Window start (inclusive)
    pub start_time: NaiveDateTime,

    /// Window end (exclusive)
    pub end_time: NaiveDateTime,
}

impl Batch {
    /// Create a new batch with a fresh UUID
    pub fn new(name: &str, course_id: &str, start_time: NaiveDateTime, end_time: NaiveDateTime) -> Self {
        Batch {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            course_id: course_id.to_string(),
            start_time,
            end_time,
        }
    }

    /// Case-insensitive name comparison (uniqueness within a course)
    pub fn name_matches(&self, other: &str) -> bool {
        self.name.to_lowercase() == other.to_lowercase()
    }

    /// Half-open interval overlap: [start, end) windows that merely touch
    /// are NOT in conflict.
    pub fn overlaps(&self, other: &Batch) -> bool {
        self.start_time < other.end_time && self.end_time > other.start_time
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(value: &str) -> NaiveDateTime {
        parse_timestamp(value).unwrap()
    }

    fn batch(start: &str, end: &str) -> Batch {
        Batch::new("Morning", "course-1", ts(start), ts(end))
    }

    #[test]
    fn test_parse_timestamp_without_seconds() {
        let parsed = parse_timestamp("2024-01-01T09:00");
        assert!(parsed.is_some());
    }

    #[test]
    fn test_parse_timestamp_with_seconds() {
        let parsed = parse_timestamp("2024-01-01T09:00:30");
        assert!(parsed.is_some());
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert!(parse_timestamp("not a timestamp").is_none());
        assert!(parse_timestamp("2024-01-01").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn test_batch_creation() {
        let batch = batch("2024-01-01T09:00", "2024-01-01T11:00");

        assert!(!batch.id.is_empty());
        assert_eq!(batch.name, "Morning");
        assert_eq!(batch.course_id, "course-1");
        assert!(batch.start_time < batch.end_time);
    }

    #[test]
    fn test_overlap_partial() {
        let a = batch("2024-01-01T09:00", "2024-01-01T11:00");
        let b = batch("2024-01-01T10:00", "2024-01-01T12:00");

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_overlap_containment() {
        let outer = batch("2024-01-01T08:00", "2024-01-01T12:00");
        let inner = batch("2024-01-01T09:00", "2024-01-01T10:00");

        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_touching_windows_do_not_overlap() {
        let a = batch("2024-01-01T09:00", "2024-01-01T11:00");
        let b = batch("2024-01-01T11:00", "2024-01-01T13:00");

        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_disjoint_windows_do_not_overlap() {
        let a = batch("2024-01-01T09:00", "2024-01-01T10:00");
        let b = batch("2024-01-02T09:00", "2024-01-02T10:00");

        assert!(!a.overlaps(&b));
    }
}
