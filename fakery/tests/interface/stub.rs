use fakery::{nil, ScriptedError};

use crate::repository::{FakeRepository, Repository};

#[test]
fn returns_the_stubbed_value_multiple_times() {
    let repo = FakeRepository::new();
    repo.fake.stub(FakeRepository::get_email).returning("invalid");

    assert_eq!(repo.get_email("leto"), "invalid");
    assert_eq!(repo.get_email("paul"), "invalid");
}

#[test]
fn returns_the_default_value_multiple_times() {
    let repo = FakeRepository::new();

    assert_eq!(repo.get_email("leto"), "leto@caladan.gov");
    assert_eq!(repo.get_email("paul"), "leto@caladan.gov");
}

#[test]
fn limited_to_a_single_invocation() {
    let repo = FakeRepository::new();
    repo.fake
        .stub(FakeRepository::get_email)
        .returning("first")
        .once();

    assert_eq!(repo.get_email("leto"), "first");
    assert_eq!(repo.get_email("paul"), "leto@caladan.gov");
}

#[test]
fn limited_to_the_specified_number_of_invocations() {
    let repo = FakeRepository::new();
    let stub = repo
        .fake
        .stub(FakeRepository::get_email)
        .returning("first")
        .times(2);

    assert_eq!(repo.get_email("leto"), "first");
    assert!(!stub.is_exhausted());
    assert_eq!(repo.get_email("jessica"), "first");
    assert!(stub.is_exhausted());
    assert_eq!(repo.get_email("paul"), "leto@caladan.gov");
    assert_eq!(stub.call_count(), 2);
}

#[test]
fn falls_through_to_the_next_stub() {
    let repo = FakeRepository::new();
    repo.fake
        .stub(FakeRepository::get_email)
        .returning("first")
        .times(2);
    repo.fake.stub(FakeRepository::get_email).returning("second");

    assert_eq!(repo.get_email("a"), "first");
    assert_eq!(repo.get_email("b"), "first");
    assert_eq!(repo.get_email("c"), "second");
    assert_eq!(repo.get_email("d"), "second");
}

#[test]
fn method_with_no_return_is_a_noop() {
    let repo = FakeRepository::new();
    repo.fake.stub(FakeRepository::exec);

    repo.exec();
    repo.exec();
}

#[test]
fn returns_all_specified_values() {
    let repo = FakeRepository::new();
    repo.fake.stub(FakeRepository::count).returning((32i64, nil()));

    assert_eq!(repo.count(), (32, None));
}

#[test]
fn returns_a_single_specified_value() {
    let repo = FakeRepository::new();
    repo.fake.stub(FakeRepository::count).returning(22i64);

    let (count, err) = repo.count();

    assert_eq!(count, 22);
    assert_eq!(err.map(|err| err.to_string()), Some("invalid".to_owned()));
}

#[test]
fn returns_a_default_on_nil() {
    let repo = FakeRepository::new();
    repo.fake
        .stub(FakeRepository::count)
        .returning((nil(), "some error"));

    assert_eq!(repo.count(), (10, Some(ScriptedError::new("some error"))));
}

#[test]
fn returning_replaces_previous_values() {
    let repo = FakeRepository::new();
    repo.fake
        .stub(FakeRepository::get_email)
        .returning("first")
        .returning("second");

    assert_eq!(repo.get_email("leto"), "second");
}

#[test]
fn stubs_are_per_method() {
    let repo = FakeRepository::new();
    repo.fake.stub(FakeRepository::remove).returning(false);

    assert!(!repo.remove(1, true));
    assert_eq!(repo.get_email("leto"), "leto@caladan.gov");
    assert_eq!(repo.count(), (10, Some(ScriptedError::new("invalid"))));
}

#[test]
fn clones_share_the_registry() {
    let repo = FakeRepository::new();
    let other = repo.clone();
    other.fake.stub(FakeRepository::get_email).returning("shared");

    assert_eq!(repo.get_email("leto"), "shared");
}

#[test]
fn stubs_are_never_verified() {
    let repo = FakeRepository::new();
    repo.fake.stub(FakeRepository::get_email).times(3);

    assert!(repo.fake.is_satisfied());
}
