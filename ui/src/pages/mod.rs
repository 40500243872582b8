pub mod lecturers;
mod record_page;
mod signed_out;
pub mod students;

pub use record_page::{ExportStatus, PageSpec, RecordPage};
pub use signed_out::signed_out_page;
