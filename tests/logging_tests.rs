//! Tests for the `tracing` events emitted by set operations.

use std::io;
use std::sync::{Arc, Mutex};

use rstest::rstest;
use superset::set_algebra::SuperSet;
use tracing::Level;

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        let bytes = self.0.lock().map(|bytes| bytes.clone()).unwrap_or_default();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for SharedBuffer {
    fn write(&mut self, buffer: &[u8]) -> io::Result<usize> {
        if let Ok(mut bytes) = self.0.lock() {
            bytes.extend_from_slice(buffer);
        }
        Ok(buffer.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture<F: FnOnce()>(action: F) -> String {
    let buffer = SharedBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, action);
    buffer.contents()
}

#[rstest]
fn test_operations_emit_trace_events() {
    let output = capture(|| {
        let set = SuperSet::from(vec![4, 5, 6]);
        let _ = set.union(vec![1, 2, 3]);
        let _ = set.intersection(vec![4]);
    });

    assert!(output.contains("set operation"));
    assert!(output.contains("union"));
    assert!(output.contains("intersection"));
    assert!(output.contains("TRACE"));
}

#[rstest]
fn test_no_events_below_info_without_trace_level() {
    let buffer = SharedBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        let _ = SuperSet::from(vec![1]).union(vec![2]);
    });

    assert!(buffer.contents().is_empty());
}

#[cfg(feature = "dynamic")]
#[rstest]
fn test_rejected_candidate_emits_debug_event() {
    use serde_json::json;
    use superset::set_algebra::Operation;

    let output = capture(|| {
        let set = SuperSet::from(vec![4, 5, 6]);
        let _ = set.apply_value(Operation::Complement, &json!(1));
    });

    assert!(output.contains("rejected non-iterable candidate"));
    assert!(output.contains("DEBUG"));
}
