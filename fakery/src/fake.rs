//! The [`fake`](self) module implements the [`Fake`] type that binds scripted
//! behaviors to faked methods and dispatches calls to them.

use std::any::type_name;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;
use std::thread::panicking;

use tracing::{debug, trace};

use crate::report::Failure;
use crate::{Args, Behavior, Failures, Identity, IntoValues, Mock, Reporter, Return, Stub};

/// Registry of the behaviors bound to the methods of a fake type.
///
/// A fake type embeds a [`Fake`] and forwards every faked method to it using
/// the [`called!`](crate::called) macro. The test binds stubs and expectations
/// to those methods and verifies the expectations when it is done.
///
/// Behaviors bound to the same method are served in the order they were bound.
/// A behavior is removed from dispatch once its call budget is used up, but
/// expectations are still verified afterwards.
///
/// Cloning a [`Fake`] returns a new reference to the same registry. A [`Fake`]
/// must not be shared between threads; each test should own its own instance.
#[derive(Debug, Default, Clone)]
pub struct Fake {
    registry: Rc<RefCell<Registry>>,
}

#[derive(Debug, Default)]
struct Registry {
    bindings: Vec<Binding>,
    queues: HashMap<Identity, VecDeque<Rc<RefCell<Behavior>>>>,
    check_on_drop: bool,
}

#[derive(Debug)]
struct Binding {
    identity: Identity,
    behavior: Rc<RefCell<Behavior>>,
}

impl Fake {
    /// Create a new empty [`Fake`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty [`Fake`] that verifies its expectations when the
    /// last reference to it is dropped, see [`Fake::checkpoint`].
    #[must_use]
    pub fn checked() -> Self {
        let fake = Self::new();
        fake.registry.borrow_mut().check_on_drop = true;

        fake
    }

    /// Disable the verification on drop for this fake and all its clones.
    pub fn release(self) {
        self.registry.borrow_mut().check_on_drop = false;
    }

    /// Bind a stub to the passed `method`.
    ///
    /// The stub returns the values set with [`Stub::returning`] on every call
    /// until it is limited with [`Stub::once`] or [`Stub::times`].
    pub fn stub<M>(&self, method: M) -> Stub {
        Stub::new(self.bind(identity_of(&method), Behavior::stub()))
    }

    /// Same as [`Fake::stub`] but with an explicit identity.
    pub fn stub_as<I: Into<Identity>>(&self, identity: I) -> Stub {
        Stub::new(self.bind(identity.into(), Behavior::stub()))
    }

    /// Bind an expectation to the passed `method`.
    ///
    /// The expectation expects exactly one call unless configured otherwise.
    pub fn expect<M>(&self, method: M) -> Mock {
        Mock::new(self.bind(identity_of(&method), Behavior::expectation()))
    }

    /// Same as [`Fake::expect`] but with an explicit identity.
    pub fn expect_as<I: Into<Identity>>(&self, identity: I) -> Mock {
        Mock::new(self.bind(identity.into(), Behavior::expectation()))
    }

    /// Dispatch a call of the method with the passed `identity`.
    ///
    /// The first behavior bound to the method serves the call and is removed
    /// from dispatch if this call used up its budget. If no behavior is
    /// available, or the identity is `None`, an empty [`Return`] is returned.
    ///
    /// This is usually called through the [`called!`](crate::called) macro.
    pub fn invoke<A: IntoValues>(&self, identity: Option<&Identity>, args: A) -> Return {
        let Some(identity) = identity else {
            trace!("unresolved call site, returning defaults");

            return Return::default();
        };

        let mut registry = self.registry.borrow_mut();
        let Some(queue) = registry.queues.get_mut(identity) else {
            trace!(%identity, "nothing bound, returning defaults");

            return Return::default();
        };

        let Some(head) = queue.front() else {
            trace!(%identity, "all behaviors consumed, returning defaults");

            return Return::default();
        };

        let (outputs, exhausted) = {
            let mut behavior = head.borrow_mut();
            let outputs = behavior.invoke(Args::from_values(args));

            trace!(%identity, behavior = %behavior, "dispatched");

            (outputs, behavior.is_exhausted())
        };

        if exhausted {
            queue.pop_front();

            trace!(%identity, remaining = queue.len(), "behavior exhausted");
        }

        Return::new(outputs)
    }

    /// Same as [`Fake::invoke`] but with an explicit identity.
    pub fn invoke_as<I, A>(&self, identity: I, args: A) -> Return
    where
        I: Into<Identity>,
        A: IntoValues,
    {
        self.invoke(Some(&identity.into()), args)
    }

    /// Verify every expectation that was ever bound to this fake.
    ///
    /// Each failing expectation sends exactly one message to the `reporter`.
    /// Verification does not change any state, so calling it again yields the
    /// same messages.
    pub fn verify<R>(&self, reporter: &mut R)
    where
        R: Reporter + ?Sized,
    {
        let failures = self.registry.borrow().failures();

        for failure in failures {
            reporter.report(format_args!("{failure}"));
        }
    }

    /// Returns `true` if every expectation is satisfied.
    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        self.registry.borrow().failures().is_empty()
    }

    /// Verify every expectation and panic if any of them failed.
    ///
    /// # Panics
    /// Panics with all failure messages if an expectation is not satisfied.
    pub fn checkpoint(&self) {
        let mut failures = Failures::new();
        self.verify(&mut failures);

        if !failures.is_empty() {
            panic!("{failures}");
        }
    }

    fn bind(&self, identity: Identity, behavior: Behavior) -> Rc<RefCell<Behavior>> {
        debug!(%identity, %behavior, "bind");

        let behavior = Rc::new(RefCell::new(behavior));
        let mut registry = self.registry.borrow_mut();

        registry
            .queues
            .entry(identity.clone())
            .or_default()
            .push_back(behavior.clone());
        registry.bindings.push(Binding {
            identity,
            behavior: behavior.clone(),
        });

        behavior
    }
}

impl Registry {
    fn failures(&self) -> Vec<Failure> {
        self.bindings
            .iter()
            .filter_map(|binding| binding.behavior.borrow().failure(&binding.identity))
            .inspect(|failure| debug!(%failure, "verification failed"))
            .collect()
    }
}

impl Drop for Registry {
    fn drop(&mut self) {
        if !self.check_on_drop || panicking() {
            return;
        }

        let mut failures = Failures::new();
        for failure in self.failures() {
            failures.report(format_args!("{failure}"));
        }

        if !failures.is_empty() {
            panic!("{failures}");
        }
    }
}

/// Methods without a resolvable name are bound under their raw type name,
/// which no call site resolves to.
fn identity_of<M>(method: &M) -> Identity {
    Identity::of(method).unwrap_or_else(|| Identity::new(type_name::<M>()))
}
