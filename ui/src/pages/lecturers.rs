//! Lecturers page: teaching staff filtered by department.

use registrar_business::records::{Lecturer, LecturerField, department_filter};
use registrar_business::{Cell, ColumnDescriptor};

use super::PageSpec;

pub fn columns() -> Vec<ColumnDescriptor<Lecturer>> {
    vec![
        ColumnDescriptor::new("Staff ID", LecturerField::StaffId)
            .with_cell(|lecturer| Cell::Monospace(lecturer.staff_id.to_string())),
        ColumnDescriptor::new("Name", LecturerField::FullName),
        ColumnDescriptor::new("Title", LecturerField::Title),
        ColumnDescriptor::new("Department", LecturerField::Department),
        ColumnDescriptor::new("Courses", LecturerField::Courses),
        ColumnDescriptor::new("Email", LecturerField::Email),
    ]
}

pub fn page_spec() -> PageSpec<Lecturer> {
    PageSpec {
        id: "lecturers",
        heading: "Lecturer directory",
        export_stem: "lecturers",
        columns: columns(),
        filter: department_filter(),
    }
}
