//! Route state for page navigation.
//!
//! This module defines the route enum that determines which record page to display.

use serde::{Deserialize, Serialize};

/// The record page currently shown in the central panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    #[default]
    Students,
    Lecturers,
}

impl Route {
    /// Every route, in navigation order.
    pub const ALL: [Self; 2] = [Self::Students, Self::Lecturers];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Students => "Students",
            Self::Lecturers => "Lecturers",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_default_is_students() {
        assert_eq!(Route::default(), Route::Students);
    }

    #[test]
    fn test_route_titles() {
        let titles: Vec<&str> = Route::ALL.iter().map(Route::title).collect();
        assert_eq!(titles, vec!["Students", "Lecturers"]);
    }
}
