pub mod data_table;
mod nav;
mod session_bar;

pub use data_table::{DataTable, DataTableResponse, TableProps};
pub use nav::nav_panel;
pub use session_bar::{SessionAction, session_bar};
