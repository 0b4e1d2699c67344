use std::fmt::Arguments;
use std::io::{Result as IoResult, Write};
use std::sync::{Arc, Mutex};

use fakery::{Reporter, TracingReporter};
use tracing_subscriber::EnvFilter;

use crate::repository::{FakeRepository, Repository};

#[derive(Default)]
struct CountingReporter {
    messages: Vec<String>,
}

impl Reporter for CountingReporter {
    fn report(&mut self, message: Arguments<'_>) {
        self.messages.push(format!("{}: {message}", self.messages.len()));
    }
}

#[test]
fn custom_reporter() {
    let repo = FakeRepository::new();
    repo.fake.expect(FakeRepository::exec);
    repo.fake.expect(FakeRepository::count);

    let mut reporter = CountingReporter::default();
    repo.fake.verify(&mut reporter);

    assert_eq!(
        reporter.messages,
        vec![
            "0: expected exec to be called 1 time, was called 0 times",
            "1: expected count to be called 1 time, was called 0 times",
        ]
    );
}

#[test]
fn trait_object_reporter() {
    let repo = FakeRepository::new();
    repo.fake.expect(FakeRepository::exec);

    let mut messages = Vec::<String>::new();
    let reporter: &mut dyn Reporter = &mut messages;
    repo.fake.verify(reporter);

    assert_eq!(messages.len(), 1);
}

/// Log output captured by a scoped subscriber.
#[derive(Default, Clone)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn lines(&self) -> Vec<String> {
        let buffer = self.0.lock().unwrap();

        String::from_utf8_lossy(&buffer)
            .lines()
            .map(ToOwned::to_owned)
            .collect()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> IoResult<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);

        Ok(buf.len())
    }

    fn flush(&mut self) -> IoResult<()> {
        Ok(())
    }
}

#[test]
fn tracing_reporter() {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("fakery=error"))
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .without_time()
        .finish();

    let mut reporter = TracingReporter::new();

    tracing::subscriber::with_default(subscriber, || {
        let repo = FakeRepository::new();
        repo.fake.expect(FakeRepository::get_email).with("leto");
        repo.fake.stub(FakeRepository::count).returning(1i64);

        repo.get_email("paul");
        repo.count();

        repo.fake.verify(&mut reporter);
    });

    assert_eq!(reporter.count(), 1);

    let lines = captured.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("ERROR"));
    assert!(lines[0].ends_with(
        "fakery: expected get_email to be called with [leto], got [paul] (call #0)"
    ));
}

#[test]
fn tracing_reporter_is_silent_when_satisfied() {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("fakery=trace"))
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    let mut reporter = TracingReporter::new();

    tracing::subscriber::with_default(subscriber, || {
        let repo = FakeRepository::new();
        repo.fake.expect(FakeRepository::exec);

        repo.exec();
        repo.fake.verify(&mut reporter);
    });

    assert_eq!(reporter.count(), 0);
    assert!(captured.lines().iter().all(|line| !line.contains("ERROR")));
}
