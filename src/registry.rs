// 🗂️ Registry - the consistency engine
//
// One in-memory store of the four entity collections plus every
// validation/mutation operation over them. All cross-entity rules
// (referential integrity, uniqueness, scheduling conflicts, cascade
// protection) are checked here, before anything is committed.
//
// Each mutation validates against the current state and commits within
// the same call, so no partial entity is ever visible. The Registry is
// a plain value owned by the call site; embedders running concurrently
// must guard it with a single lock per mutating call.

use serde::Serialize;

use crate::entities::{parse_timestamp, Batch, Course, Student, Subject};
use crate::error::RegistryError;

// ============================================================================
// DASHBOARD COUNTS
// ============================================================================

/// Per-entity totals (dashboard view)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegistryCounts {
    pub subjects: usize,
    pub courses: usize,
    pub batches: usize,
    pub students: usize,
}

// ============================================================================
// REGISTRY
// ============================================================================

#[derive(Debug, Default, Serialize)]
pub struct Registry {
    subjects: Vec<Subject>,
    courses: Vec<Course>,
    batches: Vec<Batch>,
    students: Vec<Student>,
}

impl Registry {
    /// Create an empty registry (entities are only ever added through
    /// the add operations, never pre-populated)
    pub fn new() -> Self {
        Registry::default()
    }

    // ========================================================================
    // SUBJECT OPERATIONS
    // ========================================================================

    /// Add a subject. Name is trimmed and must be non-empty and unique
    /// among subjects, case-insensitively.
    pub fn add_subject(&mut self, name: &str) -> Result<Subject, RegistryError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }

        if self.subjects.iter().any(|s| s.name_matches(name)) {
            return Err(RegistryError::DuplicateName { name: name.to_string() });
        }

        let subject = Subject::new(name);
        self.subjects.push(subject.clone());
        Ok(subject)
    }

    /// Delete a subject. Blocked while any course references it; the
    /// first referencing course's name is reported. Deleting an id that
    /// is not present is a no-op success.
    pub fn delete_subject(&mut self, id: &str) -> Result<(), RegistryError> {
        if let Some(course) = self.courses.iter().find(|c| c.references_subject(id)) {
            return Err(RegistryError::ReferencedByCourse { course: course.name.clone() });
        }

        self.subjects.retain(|s| s.id != id);
        Ok(())
    }

    // ========================================================================
    // COURSE OPERATIONS
    // ========================================================================

    /// Add a course bundling at least two subjects. Subject order is
    /// preserved as given (display order only).
    pub fn add_course(&mut self, name: &str, subject_ids: Vec<String>) -> Result<Course, RegistryError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }

        if subject_ids.len() < 2 {
            return Err(RegistryError::InsufficientSubjects { found: subject_ids.len() });
        }

        if self.courses.iter().any(|c| c.name_matches(name)) {
            return Err(RegistryError::DuplicateName { name: name.to_string() });
        }

        // Defensive: the view layer only offers existing subjects, but
        // an id that doesn't resolve must never be stored
        for id in &subject_ids {
            if !self.subjects.iter().any(|s| &s.id == id) {
                return Err(RegistryError::UnknownSubject { id: id.clone() });
            }
        }

        let course = Course::new(name, subject_ids);
        self.courses.push(course.clone());
        Ok(course)
    }

    /// Delete a course. Blocked while any batch, then any student,
    /// references it. Deleting an absent id is a no-op success.
    pub fn delete_course(&mut self, id: &str) -> Result<(), RegistryError> {
        if let Some(batch) = self.batches.iter().find(|b| b.course_id == id) {
            return Err(RegistryError::ReferencedByBatch { batch: batch.name.clone() });
        }

        if let Some(student) = self.students.iter().find(|s| s.course_id == id) {
            return Err(RegistryError::ReferencedByStudent { student: student.name.clone() });
        }

        self.courses.retain(|c| c.id != id);
        Ok(())
    }

    // ========================================================================
    // BATCH OPERATIONS
    // ========================================================================

    /// Add a batch for a course. Timestamps arrive as ISO-8601 strings;
    /// the window must be non-empty (start strictly before end) and the
    /// name unique within the course, case-insensitively.
    pub fn add_batch(
        &mut self,
        name: &str,
        course_id: &str,
        start_time: &str,
        end_time: &str,
    ) -> Result<Batch, RegistryError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RegistryError::MissingField { field: "name" });
        }
        if course_id.is_empty() {
            return Err(RegistryError::MissingField { field: "course_id" });
        }
        if start_time.is_empty() {
            return Err(RegistryError::MissingField { field: "start_time" });
        }
        if end_time.is_empty() {
            return Err(RegistryError::MissingField { field: "end_time" });
        }

        let start = parse_timestamp(start_time).ok_or_else(|| RegistryError::InvalidTimestamp {
            field: "start_time",
            value: start_time.to_string(),
        })?;
        let end = parse_timestamp(end_time).ok_or_else(|| RegistryError::InvalidTimestamp {
            field: "end_time",
            value: end_time.to_string(),
        })?;

        if start >= end {
            return Err(RegistryError::InvalidInterval);
        }

        // Defensive: the view layer restricts selection to existing courses
        if !self.courses.iter().any(|c| c.id == course_id) {
            return Err(RegistryError::UnknownCourse { id: course_id.to_string() });
        }

        if self
            .batches
            .iter()
            .any(|b| b.course_id == course_id && b.name_matches(name))
        {
            return Err(RegistryError::DuplicateName { name: name.to_string() });
        }

        let batch = Batch::new(name, course_id, start, end);
        self.batches.push(batch.clone());
        Ok(batch)
    }

    /// Delete a batch. Blocked while any student references it.
    /// Deleting an absent id is a no-op success.
    pub fn delete_batch(&mut self, id: &str) -> Result<(), RegistryError> {
        if let Some(student) = self.students.iter().find(|s| s.batch_id == id) {
            return Err(RegistryError::ReferencedByStudent { student: student.name.clone() });
        }

        self.batches.retain(|b| b.id != id);
        Ok(())
    }

    /// All batches of one course, in insertion order
    pub fn batches_for_course(&self, course_id: &str) -> Vec<&Batch> {
        self.batches.iter().filter(|b| b.course_id == course_id).collect()
    }

    // ========================================================================
    // STUDENT OPERATIONS
    // ========================================================================

    /// Enroll a student into a batch of a course.
    ///
    /// Scheduling identity is the typed name: every existing enrollment
    /// under the same name (case-insensitive, across ALL courses) is
    /// resolved to its batch, and any half-open interval overlap with
    /// the candidate batch rejects the enrollment.
    pub fn add_student(
        &mut self,
        name: &str,
        course_id: &str,
        batch_id: &str,
    ) -> Result<Student, RegistryError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RegistryError::MissingField { field: "name" });
        }
        if course_id.is_empty() {
            return Err(RegistryError::MissingField { field: "course_id" });
        }
        if batch_id.is_empty() {
            return Err(RegistryError::MissingField { field: "batch_id" });
        }

        let candidate = self
            .batches
            .iter()
            .find(|b| b.id == batch_id)
            .ok_or_else(|| RegistryError::UnknownBatch { id: batch_id.to_string() })?;

        if candidate.course_id != course_id {
            return Err(RegistryError::BatchCourseMismatch);
        }

        if self
            .students
            .iter()
            .any(|s| s.name_matches(name) && s.course_id == course_id && s.batch_id == batch_id)
        {
            return Err(RegistryError::DuplicateEnrollment);
        }

        // Conflict detection across every enrollment under this name.
        // Batch deletion is cascade-guarded, so every batch_id resolves.
        for existing in self.students.iter().filter(|s| s.name_matches(name)) {
            if let Some(held) = self.batches.iter().find(|b| b.id == existing.batch_id) {
                if held.overlaps(candidate) {
                    return Err(RegistryError::TimeConflict { batch: held.name.clone() });
                }
            }
        }

        let student = Student::new(name, course_id, batch_id);
        self.students.push(student.clone());
        Ok(student)
    }

    /// Delete a student. Nothing references students, so removal is
    /// unconditional.
    pub fn delete_student(&mut self, id: &str) -> Result<(), RegistryError> {
        self.students.retain(|s| s.id != id);
        Ok(())
    }

    // ========================================================================
    // QUERY OPERATIONS
    // ========================================================================

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn batches(&self) -> &[Batch] {
        &self.batches
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn subject(&self, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    pub fn batch(&self, id: &str) -> Option<&Batch> {
        self.batches.iter().find(|b| b.id == id)
    }

    pub fn student(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    /// Per-entity totals (dashboard view)
    pub fn counts(&self) -> RegistryCounts {
        RegistryCounts {
            subjects: self.subjects.len(),
            courses: self.courses.len(),
            batches: self.batches.len(),
            students: self.students.len(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
