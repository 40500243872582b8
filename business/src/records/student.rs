//! Student records listed on the students page.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ustr::Ustr;

use crate::{CellValue, Field, FilterOption, FilterSpec, Record, Row};

/// Enrollment status; the filterable dimension of the students page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    Active,
    Suspended,
    Graduated,
    Withdrawn,
}

impl EnrollmentStatus {
    pub const ALL: [Self; 4] = [
        Self::Active,
        Self::Suspended,
        Self::Graduated,
        Self::Withdrawn,
    ];

    /// Filter value.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Suspended => "suspended",
            Self::Graduated => "graduated",
            Self::Withdrawn => "withdrawn",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Suspended => "Suspended",
            Self::Graduated => "Graduated",
            Self::Withdrawn => "Withdrawn",
        }
    }
}

impl fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Filter props for the students page: one option per status.
pub fn status_filter() -> FilterSpec {
    FilterSpec::new(
        "status",
        EnrollmentStatus::ALL
            .iter()
            .map(|status| FilterOption::new(status.label(), status.key()))
            .collect(),
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub matric_no: Ustr,
    pub full_name: String,
    pub email: String,
    pub programme: String,
    pub level: u16,
    pub status: EnrollmentStatus,
    pub enrolled_on: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentField {
    MatricNo,
    FullName,
    Email,
    Programme,
    Level,
    Status,
    EnrolledOn,
}

impl Field for StudentField {
    type Row = Student;
}

impl Row for Student {
    type Key = StudentField;

    fn value(&self, key: StudentField) -> CellValue {
        match key {
            StudentField::MatricNo => self.matric_no.as_str().into(),
            StudentField::FullName => self.full_name.as_str().into(),
            StudentField::Email => self.email.as_str().into(),
            StudentField::Programme => self.programme.as_str().into(),
            StudentField::Level => i64::from(self.level).into(),
            StudentField::Status => self.status.label().into(),
            StudentField::EnrolledOn => self.enrolled_on.into(),
        }
    }
}

impl Record for Student {
    fn matches_search(&self, term: &str) -> bool {
        self.full_name.to_lowercase().contains(term)
            || self.matric_no.to_lowercase().contains(term)
            || self.email.to_lowercase().contains(term)
            || self.programme.to_lowercase().contains(term)
    }

    fn facet(&self) -> Ustr {
        Ustr::from(self.status.key())
    }
}
