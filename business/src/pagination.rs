//! Pagination controller.
//!
//! The owning page holds the authoritative `(current_page, page_size,
//! total_items)` triple. This module derives the visible page-number window
//! from it and clamps page-change requests so they never leave the valid range.

use std::fmt;

use crate::TableError;

/// Number of page buttons shown when no other size is configured.
pub const DEFAULT_WINDOW_SIZE: u32 = 5;

/// Rows per page when no other size is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Pagination props handed down by the owning page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    current_page: u32,
    page_size: u32,
    total_items: u64,
}

impl PaginationState {
    /// Validates and builds pagination state. Pages are 1-indexed.
    pub fn new(current_page: u32, page_size: u32, total_items: u64) -> Result<Self, TableError> {
        if page_size == 0 {
            return Err(TableError::InvalidPageSize);
        }
        if current_page == 0 {
            return Err(TableError::InvalidCurrentPage(current_page));
        }

        Ok(Self {
            current_page,
            page_size,
            total_items,
        })
    }

    /// Same page size and total, different page. Page 0 becomes 1.
    pub fn with_current_page(self, current_page: u32) -> Self {
        Self {
            current_page: current_page.max(1),
            ..self
        }
    }

    pub fn with_total_items(self, total_items: u64) -> Self {
        Self {
            total_items,
            ..self
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    /// `ceil(total_items / page_size)`, never less than 1.
    pub fn total_pages(&self) -> u32 {
        let pages = self.total_items.div_ceil(u64::from(self.page_size)).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Page numbers to show as buttons.
    pub fn window(&self, window_size: u32) -> Vec<u32> {
        compute_window(self.current_page, self.total_pages(), window_size)
    }

    /// Clamps `target` into `[1, total_pages]`.
    ///
    /// The returned value is the only page number ever emitted upward.
    pub fn request_page_change(&self, target: i64) -> u32 {
        let last = i64::from(self.total_pages());
        let clamped = target.clamp(1, last);
        u32::try_from(clamped).unwrap_or(1)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// 1-indexed item range shown on the current page.
    ///
    /// A page past the end shows nothing: `0–0 of total`.
    pub fn display_range(&self) -> PageRange {
        let page_size = u64::from(self.page_size);
        let start = (u64::from(self.current_page) - 1) * page_size + 1;
        if start > self.total_items {
            return PageRange {
                total: self.total_items,
                ..PageRange::default()
            };
        }

        PageRange {
            start,
            end: (start + page_size - 1).min(self.total_items),
            total: self.total_items,
        }
    }
}

/// Item range for the "Showing a–b of n" line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageRange {
    pub start: u64,
    pub end: u64,
    pub total: u64,
}

impl fmt::Display for PageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {}–{} of {}", self.start, self.end, self.total)
    }
}

/// Computes the sliding window of page numbers around `current_page`.
///
/// The window sticks to the first pages while the cursor is near the start,
/// sticks to the last pages near the end, and is centered otherwise. Pages
/// outside `[1, total_pages]` are dropped rather than padded.
pub fn compute_window(current_page: u32, total_pages: u32, window_size: u32) -> Vec<u32> {
    let window_size = window_size.max(1);
    let total_pages = total_pages.max(1);

    if total_pages <= window_size {
        return (1..=total_pages).collect();
    }

    let half = window_size / 2;
    let start = if current_page <= half + 1 {
        1
    } else if current_page >= total_pages.saturating_sub(half) {
        total_pages - window_size + 1
    } else {
        current_page - half
    };
    let end = start.saturating_add(window_size - 1);

    (start..=end)
        .filter(|page| (1..=total_pages).contains(page))
        .collect()
}
