// Pending Subject Selection
//
// Transient multi-select state used while building the next add_course
// call. This is view-layer-local state owned by the caller: the
// Registry never sees it and it carries no integrity rules of its own.
// Order of selection is kept, since course subject lists preserve the
// order they were supplied in.

// ============================================================================
// SUBJECT SELECTION
// ============================================================================

#[derive(Debug, Default, Clone)]
pub struct SubjectSelection {
    ids: Vec<String>,
}

impl SubjectSelection {
    pub fn new() -> Self {
        SubjectSelection::default()
    }

    /// Flip membership: select the id if absent, deselect it if present
    pub fn toggle(&mut self, subject_id: &str) {
        if let Some(pos) = self.ids.iter().position(|id| id == subject_id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(subject_id.to_string());
        }
    }

    pub fn contains(&self, subject_id: &str) -> bool {
        self.ids.iter().any(|id| id == subject_id)
    }

    /// Selected ids in selection order (feeds add_course)
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Reset after a successful add_course
    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

// ============================================================================
// TESTS
// ============================================================================
