//! Record sources: where owning pages get their rows from.
//!
//! A source answers a [`ListQuery`] through a completion callback, in the same
//! shape as an HTTP fetch. The in-memory implementation answers synchronously.

use std::fmt::Debug;
use std::sync::Arc;

use ustr::Ustr;

use crate::{FetchError, FilterSelection, PaginationState, Row};

/// A row type that a record source can search and filter.
pub trait Record: Row + Clone + Send + Sync + 'static {
    /// Case-insensitive match against an already lowercased, non-empty term.
    fn matches_search(&self, term: &str) -> bool;

    /// Value of the single filterable dimension.
    fn facet(&self) -> Ustr;
}

/// One page request issued by an owning page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub page_size: u32,
    pub search: String,
    pub filter: FilterSelection,
}

impl ListQuery {
    pub fn first_page(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size,
            search: String::new(),
            filter: FilterSelection::All,
        }
    }
}

/// Rows of one page plus the total number of matching records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub rows: Vec<T>,
    pub total_items: u64,
}

/// Completion callback for a fetch.
pub type OnFetched<T> = Box<dyn FnOnce(Result<Page<T>, FetchError>) + Send + 'static>;

/// Answers list queries, possibly asynchronously.
pub trait RecordSource<T>: Send + Sync + Debug {
    fn fetch(&self, query: ListQuery, on_done: OnFetched<T>);
}

/// Record source over an in-memory directory.
#[derive(Debug, Clone)]
pub struct InMemorySource<T> {
    records: Arc<Vec<T>>,
}

impl<T: Record> InMemorySource<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records: Arc::new(records),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Runs the query synchronously.
    pub fn query(&self, query: &ListQuery) -> Result<Page<T>, FetchError> {
        // Validates page and page size the same way the table does.
        PaginationState::new(query.page, query.page_size, 0)?;

        let term = query.search.trim().to_lowercase();
        let matching: Vec<&T> = self
            .records
            .iter()
            .filter(|record| query.filter.matches(record.facet()))
            .filter(|record| term.is_empty() || record.matches_search(&term))
            .collect();

        let total_items = matching.len() as u64;
        let offset = (query.page as usize - 1).saturating_mul(query.page_size as usize);
        let rows = matching
            .into_iter()
            .skip(offset)
            .take(query.page_size as usize)
            .cloned()
            .collect();

        Ok(Page { rows, total_items })
    }
}

impl<T: Record + Debug> RecordSource<T> for InMemorySource<T> {
    fn fetch(&self, query: ListQuery, on_done: OnFetched<T>) {
        log::debug!("in-memory fetch: {query:?}");
        on_done(self.query(&query));
    }
}
