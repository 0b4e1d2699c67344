//! The [`times`](self) module contains the [`Times`] type that defines how
//! often a behavior may be consumed.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Type to keep track of the number of calls a behavior has served and how
/// many it may serve at most.
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq)]
pub struct Times {
    /// Number of calls the behavior was already consumed.
    pub count: usize,

    /// Maximum number of calls, `None` means unbounded.
    pub limit: Option<usize>,
}

impl Times {
    /// Create a new [`Times`] instance that is limited to `limit` calls.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            count: 0,
            limit: Some(limit),
        }
    }

    /// Create a new [`Times`] instance without a limit.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Increment the current call count and return the previous one.
    pub fn increment(&mut self) -> usize {
        let count = self.count;
        self.count += 1;

        count
    }

    /// Number of calls that are still required to reach the limit.
    ///
    /// Returns `None` for unbounded instances.
    #[must_use]
    pub fn remaining(&self) -> Option<usize> {
        self.limit.map(|limit| limit.saturating_sub(self.count))
    }

    /// Return `true` if no more calls are required.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.remaining().map_or(true, |remaining| remaining == 0)
    }

    /// Return `true` if the limit has been reached.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.limit.is_some_and(|limit| self.count >= limit)
    }
}

impl From<usize> for Times {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl Display for Times {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.limit {
            Some(limit) => write!(f, "{}/{}", self.count, limit),
            None => write!(f, "{}/unbounded", self.count),
        }
    }
}
