//! Request sequencing for owning pages.
//!
//! The data table never orders fetches. Pages that refetch on every intent
//! stamp each request with a [`RequestToken`] and only apply the completion
//! carrying the most recently issued token, so a slow earlier response cannot
//! overwrite a faster later one.

/// Identifies one issued request. Higher generations were issued later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken {
    generation: u64,
}

impl RequestToken {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Monotonic issuer of request tokens.
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a token that supersedes every earlier one.
    pub fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken {
            generation: self.latest,
        }
    }

    /// Whether `token` is the latest issued.
    pub fn is_current(&self, token: RequestToken) -> bool {
        token.generation == self.latest
    }

    /// Returns the latest token, if any request was issued.
    pub fn latest(&self) -> Option<RequestToken> {
        (self.latest > 0).then_some(RequestToken {
            generation: self.latest,
        })
    }
}
