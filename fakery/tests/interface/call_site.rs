use std::marker::PhantomData;

use fakery::{called, Fake, Failures, Identity};
use futures::executor::block_on;

#[derive(Default)]
struct FakeClient {
    fake: Fake,
}

impl FakeClient {
    async fn fetch(&self, url: &str) -> String {
        called!(self.fake, url).string(0, "not found")
    }

    fn fetch_sync(&self, url: &str) -> String {
        let fetch = || called!(self.fake, url).string(0, "not found");

        fetch()
    }

    fn nested(&self) -> i32 {
        called!(self.fake).i32(0, -1)
    }

    fn lookup(&self, id: &u32, strict: &bool) -> String {
        called!(self.fake, id, strict).string(0, "unknown")
    }
}

trait Reader {
    fn get(&self) -> i64;
}

trait Writer {
    fn get(&self) -> i64;
}

#[derive(Default)]
struct FakeStore {
    fake: Fake,
}

impl Reader for FakeStore {
    fn get(&self) -> i64 {
        called!(self.fake).i64(0, 0)
    }
}

impl Writer for FakeStore {
    fn get(&self) -> i64 {
        called!(self.fake).i64(0, -1)
    }
}

#[derive(Default)]
struct FakeCache<T> {
    fake: Fake,
    _marker: PhantomData<T>,
}

impl<T> FakeCache<T> {
    fn len(&self) -> usize {
        called!(self.fake).usize(0, 0)
    }
}

#[test]
fn async_method() {
    let client = FakeClient::default();
    client.fake.stub(FakeClient::fetch).returning("body");

    assert_eq!(block_on(client.fetch("/")), "body");
    assert_eq!(block_on(client.fetch("/other")), "body");
}

#[test]
fn async_method_expectation() {
    let client = FakeClient::default();
    client.fake.expect(FakeClient::fetch).with("/");

    assert_eq!(block_on(client.fetch("/")), "not found");
    assert!(client.fake.is_satisfied());
}

#[test]
fn closure_inside_method() {
    let client = FakeClient::default();
    client.fake.stub(FakeClient::fetch_sync).returning("body");

    assert_eq!(client.fetch_sync("/"), "body");
}

#[test]
fn methods_do_not_share_behaviors() {
    let client = FakeClient::default();
    client.fake.stub(FakeClient::nested).returning(7i32);

    assert_eq!(client.nested(), 7);
    assert_eq!(client.fetch_sync("/"), "not found");
}

#[test]
fn generic_type() {
    let cache = FakeCache::<String>::default();
    cache.fake.stub(FakeCache::<String>::len).returning(3usize);

    assert_eq!(cache.len(), 3);
}

#[test]
fn generic_type_with_other_arguments() {
    let cache = FakeCache::<u8>::default();
    cache.fake.stub(FakeCache::<Vec<String>>::len).returning(3usize);

    assert_eq!(cache.len(), 3);
}

#[test]
fn identity_of_method_items() {
    assert_eq!(
        Identity::of(&FakeClient::nested),
        Some(Identity::new("nested"))
    );
    assert_eq!(
        Identity::of(&FakeCache::<Vec<String>>::len),
        Some(Identity::new("len"))
    );
}

#[test]
fn instances_do_not_share_behaviors() {
    let a = FakeClient::default();
    let b = FakeClient::default();
    a.fake.stub(FakeClient::nested).returning(1i32);

    assert_eq!(a.nested(), 1);
    assert_eq!(b.nested(), -1);
}

#[test]
fn explicit_identity_matches_resolved_identity() {
    let client = FakeClient::default();
    client.fake.stub_as("nested").returning(5i32);

    assert_eq!(client.nested(), 5);
}

#[test]
fn traits_with_the_same_method_name() {
    let store = FakeStore::default();
    store.fake.stub(<FakeStore as Reader>::get).returning(7i64);
    store.fake.expect(<FakeStore as Writer>::get).returning(3i64);

    assert_eq!(Reader::get(&store), 7);
    assert_eq!(Writer::get(&store), 3);
    assert_eq!(Reader::get(&store), 7);
    assert!(store.fake.is_satisfied());
}

#[test]
fn trait_method_failures_name_the_method() {
    let store = FakeStore::default();
    store.fake.stub(<FakeStore as Reader>::get).returning(7i64);
    store.fake.expect(<FakeStore as Writer>::get);

    assert_eq!(Reader::get(&store), 7);

    let mut failures = Failures::new();
    store.fake.verify(&mut failures);

    assert_eq!(
        failures.into_inner(),
        vec!["expected get to be called 1 time, was called 0 times"]
    );
}

#[test]
fn identity_of_trait_methods() {
    assert_eq!(
        Identity::of(&<FakeStore as Reader>::get),
        Some(Identity::new("Reader::get"))
    );
    assert_eq!(
        Identity::of(&<FakeStore as Writer>::get),
        Some(Identity::new("Writer::get"))
    );

    let store = FakeStore::default();
    store.fake.stub_as("Writer::get").returning(5i64);

    assert_eq!(Writer::get(&store), 5);
    assert_eq!(Reader::get(&store), 0);
}

#[test]
fn scalar_arguments_by_reference() {
    let client = FakeClient::default();
    client
        .fake
        .expect(FakeClient::lookup)
        .with((7u32, true))
        .returning("leto");

    assert_eq!(client.lookup(&7, &true), "leto");
    assert!(client.fake.is_satisfied());
}

#[test]
fn closures_do_not_bind_the_enclosing_function() {
    let client = FakeClient::default();
    client.fake.stub(|| 1i64).returning(7i64);

    assert_eq!(
        client
            .fake
            .invoke_as("closures_do_not_bind_the_enclosing_function", ())
            .i64(0, 0),
        0
    );
}
