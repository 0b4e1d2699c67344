//! The [`report`](self) module contains the [`Reporter`] trait that receives
//! the verification failures of a [`Fake`](crate::Fake), together with some
//! ready to use reporters.

use std::fmt::{Arguments, Display, Formatter, Result as FmtResult};
use std::mem::take;
use std::slice::Iter;

use tracing::error;

use crate::{Args, Identity};

/// Receives formatted verification failures.
pub trait Reporter {
    /// Accept a single formatted failure message.
    fn report(&mut self, message: Arguments<'_>);
}

impl<R> Reporter for &mut R
where
    R: Reporter + ?Sized,
{
    fn report(&mut self, message: Arguments<'_>) {
        (**self).report(message);
    }
}

impl Reporter for Vec<String> {
    fn report(&mut self, message: Arguments<'_>) {
        self.push(message.to_string());
    }
}

/// Reason why a single expectation failed verification.
#[derive(Debug, Clone, PartialEq)]
pub enum Failure {
    /// The expectation was marked as never called, but it was.
    Called { name: Identity },

    /// The expectation was called less often than required.
    Count {
        name: Identity,
        wanted: usize,
        got: usize,
    },

    /// The expectation was called with unexpected arguments.
    Arguments {
        name: Identity,
        expected: Args,
        actual: Args,
        call: usize,
    },
}

impl Failure {
    /// Identity of the method the failing expectation was bound to.
    #[must_use]
    pub fn name(&self) -> &Identity {
        match self {
            Self::Called { name } | Self::Count { name, .. } | Self::Arguments { name, .. } => name,
        }
    }
}

impl Display for Failure {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = self.name().method();

        match self {
            Self::Called { .. } => write!(f, "expected {name} to not be called, it was"),
            Self::Count { wanted, got, .. } => write!(
                f,
                "expected {name} to be called {wanted} {}, was called {got} {}",
                pluralize(*wanted),
                pluralize(*got)
            ),
            Self::Arguments {
                expected,
                actual,
                call,
                ..
            } => write!(
                f,
                "expected {name} to be called with {expected}, got {actual} (call #{call})"
            ),
        }
    }
}

fn pluralize(count: usize) -> &'static str {
    if count == 1 {
        "time"
    } else {
        "times"
    }
}

/// [`Reporter`] that collects all failure messages.
#[derive(Default, Debug, Clone, Eq, PartialEq)]
pub struct Failures(Vec<String>);

impl Failures {
    /// Create a new empty [`Failures`] instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of collected messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no message was collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the message at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Iterate over the collected messages.
    pub fn iter(&self) -> Iter<'_, String> {
        self.0.iter()
    }

    /// Return the collected messages.
    #[must_use]
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl Reporter for Failures {
    fn report(&mut self, message: Arguments<'_>) {
        self.0.report(message);
    }
}

impl Display for Failures {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut first = true;

        for message in &self.0 {
            if !take(&mut first) {
                writeln!(f)?;
            }

            write!(f, "{message}")?;
        }

        Ok(())
    }
}

/// [`Reporter`] that emits every failure as `tracing` error event.
#[derive(Default, Debug)]
pub struct TracingReporter {
    count: usize,
}

impl TracingReporter {
    /// Create a new [`TracingReporter`] instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of failures that were reported so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }
}

impl Reporter for TracingReporter {
    fn report(&mut self, message: Arguments<'_>) {
        self.count += 1;

        error!(target: "fakery", "{message}");
    }
}
