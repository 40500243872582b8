//! Intents emitted by the data table to its owning page.

use crate::FilterSelection;

/// The closed set of events a table can emit.
///
/// Each user action produces at most one intent; nothing is emitted
/// spontaneously.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableIntent {
    /// Requested page, already clamped into `[1, total_pages]`.
    PageChanged(u32),
    /// Submitted search term.
    SearchCommitted(String),
    /// Newly picked filter value; `FilterSelection::All` clears the filter.
    FilterChanged(FilterSelection),
    /// The export control was activated.
    ExportRequested,
}
