//! The [`identity`](self) module resolves the identity of a faked method.
//!
//! A faked method does not name itself when it dispatches to its [`Fake`](crate::Fake).
//! Instead the [`called!`](crate::called) macro places a marker function at the
//! call site and derives the name of the enclosing method from the symbol name
//! of that marker. Binding uses the symbol name of the method item itself, so
//! both sides end up with the same key.
//!
//! Trait methods are keyed by the name of the trait and the method, for example
//! `Reader::get`, so two traits with a method of the same name implemented for
//! the same fake do not share their behaviors. Inherent methods are keyed by
//! the method name only.

use std::any::type_name;
use std::borrow::Borrow;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Normalized key of a faked method.
///
/// Behaviors are queued and looked up by this key.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Identity(String);

impl Identity {
    /// Create an identity from an explicit key, like `get` or `Reader::get`.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self(name.into())
    }

    /// Get the identity of the passed method item.
    ///
    /// `FakeRepository::get_email` and `<FakeRepository as Repository>::get_email`
    /// both resolve to `Repository::get_email`. Returns `None` for closures and
    /// other items without a name.
    #[must_use]
    pub fn of<F>(_method: &F) -> Option<Self> {
        Self::from_symbol(type_name::<F>())
    }

    /// Normalize a fully qualified symbol name into an identity.
    ///
    /// The last path segment is used with its generic arguments cut off. If
    /// the segment before it names a trait (`<X as T>` or `<impl T for X>`),
    /// the trait name is prepended. Returns `None` if the last segment is
    /// generated by the compiler (like `{{closure}}`) or empty.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        qualify(&split_path(symbol))
    }

    /// Get the key of the identity.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the method name of the identity, without the trait qualifier.
    ///
    /// This is the name failure messages refer to.
    #[must_use]
    pub fn method(&self) -> &str {
        self.0.rsplit("::").next().unwrap_or_default()
    }
}

impl Display for Identity {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identity {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Identity {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for Identity {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Resolve the identity of the function that contains the passed marker
/// function item.
///
/// This is the runtime part of [`called!`](crate::called). Compiler generated
/// segments between the marker and the enclosing function (closures and async
/// blocks) are skipped. Returns `None` if the symbol name of the marker can
/// not be resolved.
pub fn resolve<F>(_call_site: F) -> Option<Identity> {
    let mut segments = split_path(type_name::<F>());

    /* the marker itself */
    segments.pop();

    while segments.last().is_some_and(|segment| is_generated(segment)) {
        segments.pop();
    }

    qualify(&segments)
}

fn qualify(segments: &[&str]) -> Option<Identity> {
    let (method, parents) = segments.split_last()?;
    if is_generated(method) {
        return None;
    }

    let method = strip_generics(method)?;
    let identity = match parents.last().copied().and_then(trait_of) {
        Some(name) => Identity::new(format!("{name}::{method}")),
        None => Identity::new(method),
    };

    Some(identity)
}

fn is_generated(segment: &str) -> bool {
    segment.starts_with("{{")
}

fn strip_generics(segment: &str) -> Option<&str> {
    let name = segment.split('<').next().unwrap_or_default().trim();

    (!name.is_empty()).then_some(name)
}

/// Name of the trait of a qualified segment, `<X as T>` or `<impl T for X>`.
fn trait_of(segment: &str) -> Option<&str> {
    let inner = segment.strip_prefix('<')?.strip_suffix('>')?;
    let path = match inner.strip_prefix("impl ") {
        Some(inner) => split_once_outside(inner, " for ")?.0,
        None => split_once_outside(inner, " as ")?.1,
    };

    split_path(path).last().copied().and_then(strip_generics)
}

/// Split at the first `pattern` that is not nested in generic arguments.
fn split_once_outside<'a>(s: &'a str, pattern: &str) -> Option<(&'a str, &'a str)> {
    let bytes = s.as_bytes();
    let mut depth = 0usize;

    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'<' => depth += 1,
            b'>' if i > 0 && bytes[i - 1] == b'-' => (),
            b'>' => depth = depth.saturating_sub(1),
            _ if depth == 0 && bytes[i..].starts_with(pattern.as_bytes()) => {
                return Some((&s[..i], &s[i + pattern.len()..]));
            }
            _ => (),
        }
    }

    None
}

/// Split a path at every `::` that is not nested in generic arguments.
fn split_path(symbol: &str) -> Vec<&str> {
    let bytes = symbol.as_bytes();
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            b'>' if i > 0 && bytes[i - 1] == b'-' => (),
            b'>' => depth = depth.saturating_sub(1),
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                segments.push(&symbol[start..i]);
                start = i + 2;
                i += 2;

                continue;
            }
            _ => (),
        }

        i += 1;
    }

    segments.push(&symbol[start..]);
    segments.retain(|segment| !segment.is_empty());

    segments
}

/// Dispatch the current call of a faked method to the passed [`Fake`](crate::Fake).
///
/// The identity of the enclosing method is resolved automatically. The
/// remaining arguments are converted into [`Value`](crate::Value)s and recorded
/// as the actual arguments of the call. Scalars may be passed by value or by
/// reference. Evaluates to a [`Return`](crate::Return).
///
/// ```
/// use fakery::{called, Fake};
///
/// struct FakeStore {
///     fake: Fake,
/// }
///
/// impl FakeStore {
///     fn get(&self, key: &str) -> String {
///         called!(self.fake, key).string(0, "default")
///     }
/// }
///
/// let store = FakeStore { fake: Fake::new() };
/// store.fake.stub(FakeStore::get).returning("value");
///
/// assert_eq!(store.get("key"), "value");
/// ```
#[macro_export]
macro_rules! called {
    ($fake:expr $(, $arg:expr )* $(,)?) => {{
        fn __fakery_call_site() {}

        static IDENTITY: $crate::Lazy<::std::option::Option<$crate::Identity>> =
            $crate::Lazy::new(|| $crate::identity::resolve(__fakery_call_site));

        $fake.invoke(
            ::std::option::Option::as_ref(&*IDENTITY),
            ::std::vec![ $( $crate::Value::from($arg) ),* ],
        )
    }};
}
