//! Deterministic demo records for the in-memory sources.

use chrono::{Days, NaiveDate};
use ustr::Ustr;

use super::{EnrollmentStatus, Lecturer, LecturerTitle, Student};

const GIVEN_NAMES: [&str; 12] = [
    "Ada", "Grace", "Alan", "Katherine", "Edsger", "Barbara", "Donald", "Frances", "John",
    "Radia", "Ken", "Margaret",
];

const FAMILY_NAMES: [&str; 10] = [
    "Lovelace", "Hopper", "Turing", "Johnson", "Dijkstra", "Liskov", "Knuth", "Allen",
    "Backus", "Perlman",
];

const PROGRAMMES: [&str; 5] = [
    "Computer Science",
    "Mathematics",
    "Physics",
    "Economics",
    "Linguistics",
];

const DEPARTMENTS: [&str; 4] = ["CSC", "MTH", "PHY", "ECO"];

/// Department codes with their display labels, for the lecturers filter.
pub const DEPARTMENT_LABELS: [(&str, &str); 4] = [
    ("CSC", "Computer Science"),
    ("MTH", "Mathematics"),
    ("PHY", "Physics"),
    ("ECO", "Economics"),
];

fn name_at(index: usize) -> (&'static str, &'static str) {
    (
        GIVEN_NAMES[index % GIVEN_NAMES.len()],
        FAMILY_NAMES[(index / GIVEN_NAMES.len() + index) % FAMILY_NAMES.len()],
    )
}

/// `count` students with stable matric numbers, statuses and dates.
pub fn seed_students(count: usize) -> Vec<Student> {
    let first_intake = NaiveDate::from_ymd_opt(2021, 9, 6).unwrap_or_default();

    (0..count)
        .map(|index| {
            let (given, family) = name_at(index);
            let status = match index % 10 {
                0..=5 => EnrollmentStatus::Active,
                6 => EnrollmentStatus::Suspended,
                7 | 8 => EnrollmentStatus::Graduated,
                _ => EnrollmentStatus::Withdrawn,
            };
            let level = 100 * (1 + (index % 4) as u16);
            let enrolled_on = first_intake
                .checked_add_days(Days::new((index as u64 % 4) * 365 + (index as u64 % 7)))
                .unwrap_or(first_intake);

            Student {
                matric_no: Ustr::from(format!("STU-{:04}", index + 1).as_str()),
                full_name: format!("{given} {family}"),
                email: format!(
                    "{}.{}{}@students.example.edu",
                    given.to_lowercase(),
                    family.to_lowercase(),
                    index + 1
                ),
                programme: PROGRAMMES[index % PROGRAMMES.len()].to_owned(),
                level,
                status,
                enrolled_on,
            }
        })
        .collect()
}

/// `count` lecturers spread across [`DEPARTMENT_LABELS`].
pub fn seed_lecturers(count: usize) -> Vec<Lecturer> {
    (0..count)
        .map(|index| {
            let (given, family) = name_at(index * 7 + 3);
            let title = match index % 6 {
                0 => LecturerTitle::Professor,
                1 | 2 => LecturerTitle::SeniorLecturer,
                3 | 4 => LecturerTitle::Lecturer,
                _ => LecturerTitle::AssistantLecturer,
            };

            Lecturer {
                staff_id: Ustr::from(format!("STF-{:03}", index + 1).as_str()),
                full_name: format!("{given} {family}"),
                email: format!("{}.{}@example.edu", given.to_lowercase(), family.to_lowercase()),
                department: Ustr::from(DEPARTMENTS[index % DEPARTMENTS.len()]),
                title,
                courses: 1 + (index % 4) as u16,
            }
        })
        .collect()
}
