use std::fmt::{Display, Formatter, Result as FmtResult};
use std::mem::take;
use std::slice::Iter;

use crate::{IntoValues, Value};

use super::Matcher;

/// Ordered list of arguments a faked method was called with, or was expected
/// to be called with.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Args(Vec<Value>);

impl Args {
    /// Create a new [`Args`] instance from anything that converts into a list
    /// of values.
    pub fn from_values<V: IntoValues>(values: V) -> Self {
        Self(values.into_values())
    }

    /// Number of arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no arguments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the argument at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    /// Iterate over the arguments.
    pub fn iter(&self) -> Iter<'_, Value> {
        self.0.iter()
    }

    /// Get the arguments as slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }
}

/// Position wise comparison. Lists of different length never match.
impl Matcher<Args> for Args {
    fn matches(&self, value: &Args) -> bool {
        self.len() == value.len()
            && self
                .iter()
                .zip(value.iter())
                .all(|(expected, actual)| expected.matches(actual))
    }
}

impl Display for Args {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut first = true;

        write!(f, "[")?;

        for value in &self.0 {
            if !take(&mut first) {
                write!(f, " ")?;
            }

            write!(f, "{value}")?;
        }

        write!(f, "]")
    }
}

impl<'a> IntoIterator for &'a Args {
    type Item = &'a Value;
    type IntoIter = Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
