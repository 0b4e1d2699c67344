//! The [`error`](self) module contains the error types of this crate.

use thiserror::Error;

/// Error raised when a scripted value is read back with the wrong type.
///
/// This is always a mistake in the test setup, so the typed getters of
/// [`Return`](crate::Return) turn it into a panic. Use
/// [`Return::try_get`](crate::Return::try_get) to inspect it instead.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ValueError {
    #[error("scripted value #{index} is {found}, but {expected} was requested")]
    KindMismatch {
        index: usize,
        expected: &'static str,
        found: &'static str,
    },
}
