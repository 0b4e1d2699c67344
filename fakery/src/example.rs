//! Contains an example of a hand-written fake type.

use crate::{called, Fake, ScriptedError};

/// Simple collaborator trait to write a fake for.
pub trait Repository {
    /// Look up the email address of the user with the passed `id`.
    fn get_email(&self, id: &str) -> String;

    /// Method without arguments and return value.
    fn exec(&self);

    /// Method with more than one return value.
    fn count(&self) -> (i64, Option<ScriptedError>);

    /// Method with more than one argument.
    fn remove(&self, id: i64, soft: bool) -> bool;

    /// Method with an optional argument.
    fn log_error(&self, err: Option<ScriptedError>);
}

/// Fake implementation of [`Repository`].
///
/// Every method forwards to the embedded [`Fake`] and falls back to its own
/// defaults for values that were not scripted.
#[derive(Default, Debug, Clone)]
pub struct FakeRepository {
    pub fake: Fake,
}

impl FakeRepository {
    /// Create a new [`FakeRepository`] instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Repository for FakeRepository {
    fn get_email(&self, id: &str) -> String {
        called!(self.fake, id).string(0, "leto@caladan.gov")
    }

    fn exec(&self) {
        called!(self.fake);
    }

    fn count(&self) -> (i64, Option<ScriptedError>) {
        let r = called!(self.fake);

        (r.i64(0, 10), r.error(1, Some(ScriptedError::new("invalid"))))
    }

    fn remove(&self, id: i64, soft: bool) -> bool {
        called!(self.fake, id, soft).bool(0, true)
    }

    fn log_error(&self, err: Option<ScriptedError>) {
        called!(self.fake, err);
    }
}
