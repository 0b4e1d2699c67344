//! `fakery` helps writing fakes for unit tests.
//!
//! A fake is a hand-written type that embeds a [`Fake`] and forwards each of
//! its methods to it using the [`called!`] macro. Tests then bind scripted
//! behaviors to those methods:
//!
//! - a [`Stub`] returns canned values, unbounded or a limited number of times,
//! - a [`Mock`] additionally expects to be called a certain number of times
//!   with certain arguments, which is checked by [`Fake::verify`].
//!
//! ```
//! use fakery::example::{FakeRepository, Repository};
//! use fakery::Failures;
//!
//! let repo = FakeRepository::new();
//! repo.fake.stub(FakeRepository::count).returning(22i64);
//! repo.fake.expect(FakeRepository::get_email).with("leto");
//!
//! assert_eq!(repo.count().0, 22);
//! assert_eq!(repo.get_email("paul"), "leto@caladan.gov");
//!
//! let mut failures = Failures::new();
//! repo.fake.verify(&mut failures);
//!
//! assert_eq!(
//!     failures.get(0),
//!     Some("expected get_email to be called with [leto], got [paul] (call #0)")
//! );
//! ```
//!
//! A [`Fake`] is single threaded. Every test should create its own instance.

pub mod behavior;
pub mod error;
pub mod example;
pub mod fake;
pub mod identity;
pub mod matcher;
pub mod report;
pub mod returns;
pub mod times;
pub mod value;

pub use once_cell::sync::Lazy;

pub use behavior::{Behavior, Mock, Stub};
pub use error::ValueError;
pub use fake::Fake;
pub use identity::Identity;
pub use matcher::{any, nil, Args, Matcher};
pub use report::{Failure, Failures, Reporter, TracingReporter};
pub use returns::Return;
pub use times::Times;
pub use value::{FromValue, IntoValues, ScriptedError, Value};
