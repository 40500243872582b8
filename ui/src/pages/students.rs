//! Students page: enrollment records filtered by status.

use registrar_business::records::{EnrollmentStatus, Student, StudentField, status_filter};
use registrar_business::{Cell, ColumnDescriptor, Tone};

use super::PageSpec;

fn status_tone(status: EnrollmentStatus) -> Tone {
    match status {
        EnrollmentStatus::Active => Tone::Positive,
        EnrollmentStatus::Suspended => Tone::Critical,
        EnrollmentStatus::Graduated => Tone::Neutral,
        EnrollmentStatus::Withdrawn => Tone::Warning,
    }
}

pub fn columns() -> Vec<ColumnDescriptor<Student>> {
    vec![
        ColumnDescriptor::new("Matric No.", StudentField::MatricNo)
            .with_cell(|student| Cell::Monospace(student.matric_no.to_string())),
        ColumnDescriptor::new("Name", StudentField::FullName),
        ColumnDescriptor::new("Programme", StudentField::Programme),
        ColumnDescriptor::new("Level", StudentField::Level),
        ColumnDescriptor::new("Status", StudentField::Status).with_cell(|student| Cell::Badge {
            label: student.status.label().to_owned(),
            tone: status_tone(student.status),
        }),
        ColumnDescriptor::new("Enrolled", StudentField::EnrolledOn),
    ]
}

pub fn page_spec() -> PageSpec<Student> {
    PageSpec {
        id: "students",
        heading: "Student directory",
        export_stem: "students",
        columns: columns(),
        filter: status_filter(),
    }
}
