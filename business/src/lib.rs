//! UI-free core of the registrar console.
//!
//! Everything the data table and its owning pages decide lives here: the
//! column model, pagination arithmetic, search and filter controllers, the
//! display-state precedence, listing state with stale-response protection,
//! record sources, session identity, export and configuration. The `ui`
//! crate only draws what these types say and feeds user actions back in.

mod column;
mod config;
mod display;
mod error;
mod export;
mod filter;
mod intent;
mod listing;
mod pagination;
pub mod records;
mod route;
mod search;
mod sequence;
mod session;
mod source;

pub use column::{Cell, CellRenderer, CellValue, ColumnDescriptor, Field, Grid, Row, Tone, render_grid};
pub use config::ConsoleConfig;
pub use display::DisplayState;
pub use error::{ConfigError, ExportError, FetchError, TableError};
pub use export::JsonExporter;
pub use filter::{ALL_LABEL, FilterController, FilterOption, FilterSelection, FilterSpec};
pub use intent::TableIntent;
pub use listing::{Completion, ListRequest, Listing, ListingStatus};
pub use pagination::{
    DEFAULT_PAGE_SIZE, DEFAULT_WINDOW_SIZE, PageRange, PaginationState, compute_window,
};
pub use route::Route;
pub use search::{SearchController, SearchPhase};
pub use sequence::{RequestSequence, RequestToken};
pub use session::{ConfiguredSession, Role, Session, SessionProvider};
pub use source::{InMemorySource, ListQuery, OnFetched, Page, Record, RecordSource};
