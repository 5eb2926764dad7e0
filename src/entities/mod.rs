// Entity Models
//
// Each entity has:
// - Stable identity (UUID) generated by the Registry on creation
// - Plain value attributes (names, references, time windows)
// - Small self-contained helpers (case-insensitive matching, overlap)
//
// All cross-entity rules live in crate::registry; nothing here reaches
// outside its own record.

pub mod subject;
pub mod course;
pub mod batch;
pub mod student;

pub use subject::Subject;
pub use course::Course;
pub use batch::{Batch, parse_timestamp};
pub use student::Student;
