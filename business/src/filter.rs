//! Single-dimension filter controller.
//!
//! Unlike search there is no draft: picking an option emits immediately.

use std::fmt;

use serde::{Deserialize, Serialize};
use ustr::Ustr;

use crate::TableIntent;

/// Label shown for the option that clears the filter.
pub const ALL_LABEL: &str = "All";

/// Selected filter value. `All` is the empty sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FilterSelection {
    #[default]
    All,
    Value(Ustr),
}

impl FilterSelection {
    /// The wire value: `""` for `All`.
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "",
            Self::Value(value) => value.as_str(),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Whether a record with facet value `value` passes this filter.
    pub fn matches(&self, value: Ustr) -> bool {
        match self {
            Self::All => true,
            Self::Value(selected) => *selected == value,
        }
    }
}

impl From<&str> for FilterSelection {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            Self::All
        } else {
            Self::Value(Ustr::from(value))
        }
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One caller-supplied `{label, value}` option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub label: String,
    pub selection: FilterSelection,
}

impl FilterOption {
    pub fn new(label: impl Into<String>, value: &str) -> Self {
        Self {
            label: label.into(),
            selection: FilterSelection::from(value),
        }
    }

    /// The distinguished option mapping to the empty sentinel.
    pub fn all() -> Self {
        Self {
            label: ALL_LABEL.to_owned(),
            selection: FilterSelection::All,
        }
    }
}

/// Filter props: which field is filtered, its options, and the current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    pub key: Ustr,
    pub options: Vec<FilterOption>,
    pub selected: FilterSelection,
}

impl FilterSpec {
    pub fn new(key: &str, options: Vec<FilterOption>) -> Self {
        Self {
            key: Ustr::from(key),
            options,
            selected: FilterSelection::All,
        }
    }

    /// The options to display, "All" first.
    pub fn display_options(&self) -> Vec<FilterOption> {
        std::iter::once(FilterOption::all())
            .chain(
                self.options
                    .iter()
                    .filter(|option| !option.selection.is_all())
                    .cloned(),
            )
            .collect()
    }
}

/// Turns option picks into filter intents.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterController;

impl FilterController {
    /// Emits exactly one intent per selection, re-selections included.
    pub fn select(option: &FilterOption) -> TableIntent {
        log::debug!("filter changed: {:?}", option.selection.as_str());
        TableIntent::FilterChanged(option.selection)
    }
}
