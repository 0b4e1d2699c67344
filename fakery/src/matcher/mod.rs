//! The [`matcher`](self) module contains the types that are used to compare
//! the arguments a faked method was called with against the expected ones.

mod any;
mod args;

pub use any::{any, nil};
pub use args::Args;

/// A matcher is used to check if the passed argument matches a pre-defined
/// expectation. It is used to verify the arguments of an expected call.
pub trait Matcher<T> {
    /// Returns `true` if the passed `value` matches the expectations, `false`
    /// otherwise.
    fn matches(&self, value: &T) -> bool;
}
