//! Lecturer records listed on the lecturers page.

use std::fmt;

use serde::{Deserialize, Serialize};
use ustr::Ustr;

use super::seed::DEPARTMENT_LABELS;
use crate::{CellValue, Field, FilterOption, FilterSpec, Record, Row};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LecturerTitle {
    AssistantLecturer,
    Lecturer,
    SeniorLecturer,
    Professor,
}

impl LecturerTitle {
    pub fn label(&self) -> &'static str {
        match self {
            Self::AssistantLecturer => "Assistant Lecturer",
            Self::Lecturer => "Lecturer",
            Self::SeniorLecturer => "Senior Lecturer",
            Self::Professor => "Professor",
        }
    }
}

impl fmt::Display for LecturerTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Filter props for the lecturers page: one option per department.
pub fn department_filter() -> FilterSpec {
    FilterSpec::new(
        "department",
        DEPARTMENT_LABELS
            .iter()
            .map(|(code, label)| FilterOption::new(*label, code))
            .collect(),
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lecturer {
    pub staff_id: Ustr,
    pub full_name: String,
    pub email: String,
    /// Department code, e.g. `CSC`; the filterable dimension.
    pub department: Ustr,
    pub title: LecturerTitle,
    pub courses: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LecturerField {
    StaffId,
    FullName,
    Email,
    Department,
    Title,
    Courses,
}

impl Field for LecturerField {
    type Row = Lecturer;
}

impl Row for Lecturer {
    type Key = LecturerField;

    fn value(&self, key: LecturerField) -> CellValue {
        match key {
            LecturerField::StaffId => self.staff_id.as_str().into(),
            LecturerField::FullName => self.full_name.as_str().into(),
            LecturerField::Email => self.email.as_str().into(),
            LecturerField::Department => self.department.as_str().into(),
            LecturerField::Title => self.title.label().into(),
            LecturerField::Courses => i64::from(self.courses).into(),
        }
    }
}

impl Record for Lecturer {
    fn matches_search(&self, term: &str) -> bool {
        self.full_name.to_lowercase().contains(term)
            || self.staff_id.to_lowercase().contains(term)
            || self.email.to_lowercase().contains(term)
    }

    fn facet(&self) -> Ustr {
        self.department
    }
}
