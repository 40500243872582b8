//! Listing state for record pages.
//!
//! This lives in `registrar_business` so page UI code stays "dumb":
//! - the page renders the data table from [`Listing`] props
//! - intents coming back from the table go through [`Listing::apply`]
//! - the returned [`ListRequest`] is handed to a record source
//! - completions come back through [`Listing::complete`], which drops stale ones

use crate::{
    FetchError, FilterSelection, ListQuery, Page, PaginationState, RequestSequence, RequestToken,
    TableError, TableIntent,
};

/// A query stamped with the token its completion must carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub token: RequestToken,
    pub query: ListQuery,
}

/// Status of the most recently issued fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListingStatus {
    /// Nothing requested yet.
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// Outcome of [`Listing::complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Superseded by a newer request and dropped.
    Stale,
    Applied,
    /// The result set shrank below the requested page; fetch the last page.
    Refetch(ListRequest),
}

impl Completion {
    /// Whether the completion belonged to the latest request.
    pub fn is_current(&self) -> bool {
        !matches!(self, Self::Stale)
    }
}

/// Authoritative state of one record page.
#[derive(Debug, Clone)]
pub struct Listing<T> {
    rows: Vec<T>,
    pagination: PaginationState,
    search: String,
    filter: FilterSelection,
    status: ListingStatus,
    sequence: RequestSequence,
}

impl<T> Listing<T> {
    pub fn new(page_size: u32) -> Result<Self, TableError> {
        Ok(Self {
            rows: Vec::new(),
            pagination: PaginationState::new(1, page_size, 0)?,
            search: String::new(),
            filter: FilterSelection::All,
            status: ListingStatus::Idle,
            sequence: RequestSequence::new(),
        })
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn total_items(&self) -> u64 {
        self.pagination.total_items()
    }

    /// The query matching the current page, search and filter.
    pub fn query(&self) -> ListQuery {
        ListQuery {
            page: self.pagination.current_page(),
            page_size: self.pagination.page_size(),
            search: self.search.clone(),
            filter: self.filter,
        }
    }

    pub fn status(&self) -> &ListingStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == ListingStatus::Loading
    }

    pub fn failure(&self) -> Option<&str> {
        match &self.status {
            ListingStatus::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn filter(&self) -> FilterSelection {
        self.filter
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Pagination props for the data table.
    pub fn pagination(&self) -> PaginationState {
        self.pagination
    }

    /// Issues a fetch for the current query (initial load or refresh).
    pub fn refresh(&mut self) -> ListRequest {
        self.issue()
    }

    /// Interprets a table intent. Returns the fetch to run, if any.
    ///
    /// Search and filter changes restart from page 1. Export does not touch
    /// the listing and is left to the page.
    pub fn apply(&mut self, intent: &TableIntent) -> Option<ListRequest> {
        match intent {
            TableIntent::PageChanged(page) => {
                if *page == self.pagination.current_page() {
                    return None;
                }
                self.pagination = self.pagination.with_current_page(*page);
            }
            TableIntent::SearchCommitted(term) => {
                self.search = term.trim().to_owned();
                self.pagination = self.pagination.with_current_page(1);
            }
            TableIntent::FilterChanged(selection) => {
                self.filter = *selection;
                self.pagination = self.pagination.with_current_page(1);
            }
            TableIntent::ExportRequested => return None,
        }

        Some(self.issue())
    }

    /// Applies a completion.
    ///
    /// A page past the end of the new total is clamped to the last page and
    /// answered with a follow-up request instead of an empty body.
    pub fn complete(
        &mut self,
        token: RequestToken,
        result: Result<Page<T>, FetchError>,
    ) -> Completion {
        if !self.sequence.is_current(token) {
            log::debug!(
                "dropping stale completion {} (latest {:?})",
                token.generation(),
                self.sequence.latest().map(|t| t.generation())
            );
            return Completion::Stale;
        }

        match result {
            Ok(page) => {
                self.rows = page.rows;
                self.pagination = self.pagination.with_total_items(page.total_items);
                let last = self.pagination.total_pages();
                if self.pagination.current_page() > last {
                    log::debug!(
                        "page {} is past the last page {last}, refetching",
                        self.pagination.current_page()
                    );
                    self.pagination = self.pagination.with_current_page(last);
                    return Completion::Refetch(self.issue());
                }
                self.status = ListingStatus::Loaded;
            }
            Err(err) => {
                log::warn!("fetch failed: {err}");
                self.rows.clear();
                self.status = ListingStatus::Failed(err.to_string());
            }
        }
        Completion::Applied
    }

    fn issue(&mut self) -> ListRequest {
        self.status = ListingStatus::Loading;
        ListRequest {
            token: self.sequence.issue(),
            query: self.query(),
        }
    }
}
