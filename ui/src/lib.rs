//! egui front end of the registrar console.
//!
//! The reusable piece is [`widgets::DataTable`]; everything else is the
//! chrome and the record pages that own its data.

pub mod app;
pub mod pages;
#[cfg(not(target_arch = "wasm32"))]
pub mod sources;
pub mod state;
pub mod widgets;

pub use app::RegistrarApp;
