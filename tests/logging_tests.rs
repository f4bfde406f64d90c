//! The library emits `tracing` events; it never installs a subscriber itself.

#![cfg(all(feature = "control", feature = "query"))]

use std::io;
use std::sync::{Arc, Mutex};

use mettle::control::Try;
use mettle::query::SequenceExt;
use rstest::rstest;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buffer: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buffer);
        Ok(buffer.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture_logs(action: impl FnOnce()) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(LevelFilter::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    {
        let _guard = subscriber.set_default();
        action();
    }
    captured.contents()
}

#[rstest]
fn single_matching_logs_second_match() {
    let logs = capture_logs(|| {
        let _ = [1, 2].into_iter().single_matching(|_| true);
    });
    assert!(logs.contains("single_matching found a second match"));
}

#[rstest]
fn try_logs_captured_failure() {
    let logs = capture_logs(|| {
        let _ = Try::<i32>::of(|| Err(io::Error::other("disk full")));
    });
    assert!(logs.contains("captured failure"));
    assert!(logs.contains("disk full"));
}

#[rstest]
fn nothing_is_logged_on_the_happy_path() {
    let logs = capture_logs(|| {
        let _ = Try::of(|| "1".parse::<i32>());
    });
    assert!(logs.is_empty());
}
