use crate::Value;

use super::Matcher;

/// Create the wildcard marker that matches any argument at its position.
#[must_use]
pub fn any() -> Value {
    Value::Any
}

/// Create the explicitly absent value.
///
/// As expected argument it only matches an absent actual argument.
#[must_use]
pub fn nil() -> Value {
    Value::Nil
}

impl Matcher<Value> for Value {
    fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (Value::Any, _) | (Value::Nil, Value::Nil) => true,
            (expected, actual) => expected == actual,
        }
    }
}
