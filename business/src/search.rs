//! Search controller.
//!
//! Keystrokes only touch the local draft. The owning page sees a value only
//! when the user submits, and then exactly once per submission.

use crate::TableIntent;

/// Where the search box is in its `Idle -> Typing -> Committed` cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    /// Nothing typed since mount.
    #[default]
    Idle,
    /// The draft differs from what was last committed.
    Typing,
    /// The draft has been submitted.
    Committed,
}

/// Local draft plus last committed search term.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchController {
    draft: String,
    committed: Option<String>,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current draft; never surfaced to the owning page directly.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Mutable access for text-edit bindings.
    pub fn draft_mut(&mut self) -> &mut String {
        &mut self.draft
    }

    /// Replaces the draft. Emits nothing.
    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    /// Last value handed to the owning page, if any.
    pub fn committed(&self) -> Option<&str> {
        self.committed.as_deref()
    }

    pub fn phase(&self) -> SearchPhase {
        match self.committed.as_deref() {
            Some(committed) if committed == self.draft => SearchPhase::Committed,
            None if self.draft.is_empty() => SearchPhase::Idle,
            _ => SearchPhase::Typing,
        }
    }

    /// Commits the current draft and returns the single intent to emit.
    pub fn submit(&mut self) -> TableIntent {
        let value = self.draft.clone();
        log::debug!("search committed: {value:?}");
        self.committed = Some(value.clone());
        TableIntent::SearchCommitted(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let search = SearchController::new();
        assert_eq!(search.phase(), SearchPhase::Idle);
        assert_eq!(search.draft(), "");
        assert!(search.committed().is_none());
    }

    #[test]
    fn test_typing_does_not_commit() {
        let mut search = SearchController::new();

        search.set_draft("a");
        search.set_draft("ad");
        search.draft_mut().push('a');

        assert_eq!(search.phase(), SearchPhase::Typing);
        assert_eq!(search.draft(), "ada");
        assert!(search.committed().is_none());
    }

    #[test]
    fn test_submit_commits_draft_once() {
        let mut search = SearchController::new();
        search.set_draft("lovelace");

        let intent = search.submit();

        assert_eq!(intent, TableIntent::SearchCommitted("lovelace".into()));
        assert_eq!(search.committed(), Some("lovelace"));
        assert_eq!(search.phase(), SearchPhase::Committed);
    }

    #[test]
    fn test_editing_after_commit_returns_to_typing() {
        let mut search = SearchController::new();
        search.set_draft("turing");
        search.submit();

        search.set_draft("turin");

        assert_eq!(search.phase(), SearchPhase::Typing);
        assert_eq!(search.committed(), Some("turing"));
    }

    #[test]
    fn test_submitting_empty_draft_clears_search() {
        let mut search = SearchController::new();
        search.set_draft("x");
        search.submit();
        search.set_draft("");

        assert_eq!(search.submit(), TableIntent::SearchCommitted(String::new()));
        assert_eq!(search.phase(), SearchPhase::Committed);
    }
}
