//! Record types shown by the console's listing pages.
//!
//! These are the concrete rows the record pages own. The data table itself only
//! sees them through [`crate::Row`].

mod lecturer;
mod seed;
mod student;

pub use lecturer::{Lecturer, LecturerField, LecturerTitle, department_filter};
pub use seed::{DEPARTMENT_LABELS, seed_lecturers, seed_students};
pub use student::{EnrollmentStatus, Student, StudentField, status_filter};
