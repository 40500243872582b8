//! Display state selection for the data table.

/// What the table body shows. Evaluated in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState<'a, T> {
    /// A fetch is in flight.
    Loading,
    /// The owning page reported a failure.
    Failed(&'a str),
    /// Zero rows.
    Empty,
    /// Rows to render.
    Populated(&'a [T]),
}

impl<'a, T> DisplayState<'a, T> {
    /// Picks the state with priority `Loading > Failed > Empty > Populated`.
    pub fn resolve(loading: bool, failure: Option<&'a str>, data: &'a [T]) -> Self {
        if loading {
            Self::Loading
        } else if let Some(reason) = failure {
            Self::Failed(reason)
        } else if data.is_empty() {
            Self::Empty
        } else {
            Self::Populated(data)
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
