//! The [`behavior`](self) module contains the scripted behaviors that can be
//! bound to a faked method, and the [`Stub`] and [`Mock`] handles that are used
//! to configure them.

use std::cell::RefCell;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::rc::Rc;

use crate::report::Failure;
use crate::{Args, Identity, IntoValues, Matcher, Reporter, Times, Value};

/// A scripted response bound to a faked method.
///
/// A behavior serves its outputs until its [`Times`] budget is exhausted.
#[derive(Debug)]
pub struct Behavior {
    times: Times,
    outputs: Vec<Value>,
    kind: Kind,
}

/// Discriminates unverified stubs from verified expectations.
#[derive(Debug)]
pub enum Kind {
    Stub,
    Expectation(Expectation),
}

/// Verification state of an expected call.
#[derive(Default, Debug)]
pub struct Expectation {
    /// Expected arguments, `None` if arguments are not checked.
    pub expected: Option<Args>,

    /// `true` if the method must not be called at all.
    pub never: bool,

    /// Arguments of every call that was served.
    pub calls: Vec<Args>,
}

impl Behavior {
    /// Create a new stub that serves its outputs an unbounded number of times.
    #[must_use]
    pub fn stub() -> Self {
        Self {
            times: Times::unbounded(),
            outputs: Vec::new(),
            kind: Kind::Stub,
        }
    }

    /// Create a new expectation that expects exactly one call.
    #[must_use]
    pub fn expectation() -> Self {
        Self {
            times: Times::new(1),
            outputs: Vec::new(),
            kind: Kind::Expectation(Expectation::default()),
        }
    }

    /// Get the kind of this behavior.
    #[must_use]
    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    /// Get the call budget of this behavior.
    #[must_use]
    pub fn times(&self) -> &Times {
        &self.times
    }

    /// Get the scripted outputs.
    #[must_use]
    pub fn outputs(&self) -> &[Value] {
        &self.outputs
    }

    /// Replace the scripted outputs.
    pub fn set_outputs(&mut self, outputs: Vec<Value>) {
        self.outputs = outputs;
    }

    /// Limit the behavior to `count` calls.
    pub fn set_times(&mut self, count: usize) {
        self.times = Times::new(count);

        if let Kind::Expectation(ex) = &mut self.kind {
            ex.never = false;
        }
    }

    /// Forbid any call. Turns a stub into an expectation.
    pub fn set_never(&mut self) {
        self.times = Times::new(0);

        match &mut self.kind {
            Kind::Expectation(ex) => ex.never = true,
            kind @ Kind::Stub => {
                *kind = Kind::Expectation(Expectation {
                    never: true,
                    ..Expectation::default()
                });
            }
        }
    }

    /// Set the expected arguments. Has no effect on stubs.
    pub fn set_expected(&mut self, args: Args) {
        if let Kind::Expectation(ex) = &mut self.kind {
            ex.expected = Some(args);
        }
    }

    /// Consume one use of this behavior and return the scripted outputs.
    ///
    /// Expectations record the passed `args`. Arguments are not checked here,
    /// so a call is always served and judged later by [`Behavior::failure`].
    pub fn invoke(&mut self, args: Args) -> Vec<Value> {
        if let Kind::Expectation(ex) = &mut self.kind {
            ex.calls.push(args);
        }

        self.times.increment();

        self.outputs.clone()
    }

    /// Returns `true` if the call budget has been used up.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.times.is_done()
    }

    /// Number of calls this behavior has served.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.times.count
    }

    /// Arguments of every call this behavior has served. Always empty for stubs.
    #[must_use]
    pub fn calls(&self) -> &[Args] {
        match &self.kind {
            Kind::Stub => &[],
            Kind::Expectation(ex) => ex.calls.as_slice(),
        }
    }

    /// Check this behavior against the call history.
    ///
    /// Returns the first failure found, or `None` if the behavior is satisfied.
    /// Stubs are always satisfied.
    #[must_use]
    pub fn failure(&self, name: &Identity) -> Option<Failure> {
        let Kind::Expectation(ex) = &self.kind else {
            return None;
        };

        if ex.never && self.times.count > 0 {
            return Some(Failure::Called { name: name.clone() });
        }

        if let Some(wanted) = self.times.limit.filter(|_| !self.times.is_ready()) {
            return Some(Failure::Count {
                name: name.clone(),
                wanted,
                got: self.times.count,
            });
        }

        let expected = ex.expected.as_ref()?;
        ex.calls
            .iter()
            .enumerate()
            .find(|(_, actual)| !expected.matches(actual))
            .map(|(call, actual)| Failure::Arguments {
                name: name.clone(),
                expected: expected.clone(),
                actual: actual.clone(),
                call,
            })
    }

    /// Verify this behavior and send a failure (if any) to the `reporter`.
    pub fn assert<R>(&self, name: &Identity, reporter: &mut R)
    where
        R: Reporter + ?Sized,
    {
        if let Some(failure) = self.failure(name) {
            reporter.report(format_args!("{failure}"));
        }
    }
}

impl Display for Behavior {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match &self.kind {
            Kind::Stub => write!(f, "stub")?,
            Kind::Expectation(ex) if ex.never => write!(f, "expectation (never)")?,
            Kind::Expectation(_) => write!(f, "expectation")?,
        }

        write!(f, " {}", self.times)
    }
}

/* Handles */

macro_rules! impl_handle {
    ($type:ident) => {
        impl $type {
            pub(crate) fn new(behavior: Rc<RefCell<Behavior>>) -> Self {
                Self { behavior }
            }

            /// Set the values that are returned on each call, replacing any
            /// previous values.
            pub fn returning<V: IntoValues>(self, values: V) -> Self {
                self.behavior.borrow_mut().set_outputs(values.into_values());

                self
            }

            /// Limit the behavior to a single call.
            pub fn once(self) -> Self {
                self.times(1)
            }

            /// Limit the behavior to `count` calls.
            pub fn times(self, count: usize) -> Self {
                self.behavior.borrow_mut().set_times(count);

                self
            }

            /// Number of calls this behavior has served.
            #[must_use]
            pub fn call_count(&self) -> usize {
                self.behavior.borrow().call_count()
            }

            /// Returns `true` if the call budget has been used up.
            #[must_use]
            pub fn is_exhausted(&self) -> bool {
                self.behavior.borrow().is_exhausted()
            }
        }

        impl Display for $type {
            fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                Display::fmt(&*self.behavior.borrow(), f)
            }
        }
    };
}

/// Handle to configure a stub that was bound with [`Fake::stub`](crate::Fake::stub).
///
/// Stubs serve their outputs an unbounded number of times unless limited with
/// [`Stub::once`] or [`Stub::times`], and are never verified.
#[derive(Debug, Clone)]
pub struct Stub {
    behavior: Rc<RefCell<Behavior>>,
}

impl_handle!(Stub);

/// Handle to configure an expectation that was bound with [`Fake::expect`](crate::Fake::expect).
///
/// Expectations expect exactly one call unless configured otherwise, and are
/// checked by [`Fake::verify`](crate::Fake::verify).
#[derive(Debug, Clone)]
pub struct Mock {
    behavior: Rc<RefCell<Behavior>>,
}

impl_handle!(Mock);

impl Mock {
    /// Set the expected arguments. Use [`any()`](crate::any) to accept any
    /// argument at a position.
    pub fn with<V: IntoValues>(self, args: V) -> Self {
        self.behavior
            .borrow_mut()
            .set_expected(Args::from_values(args));

        self
    }

    /// Expect the method to not be called at all.
    pub fn never(self) -> Self {
        self.behavior.borrow_mut().set_never();

        self
    }

    /// Arguments of every call this expectation has served.
    #[must_use]
    pub fn calls(&self) -> Vec<Args> {
        self.behavior.borrow().calls().to_vec()
    }
}
