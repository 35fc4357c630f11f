// crates/logging/tests/json_format.rs
use logging::JsonFormatter;
use serde_json::{Value, json};
use std::io;
use std::sync::{Arc, Mutex};
use tracing::subscriber::with_default;
use tracing::{info, warn};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Capture {
    type Writer = Capture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn events() -> Vec<Value> {
    let out = Capture::default();
    let sub = tracing_subscriber::registry().with(
        tracing_subscriber::fmt::layer()
            .with_writer(out.clone())
            .event_format(JsonFormatter),
    );
    with_default(sub, || {
        info!(target: "pkgprune::select", selected = 2, dry_run = false, "selected 2 of 5 versions");
        warn!(target: "globber::match", identifier = "1.0.0", error = %"too slow", "treating as non-match");
        info!(target: "pkgprune::select", "done");
    });
    let text = String::from_utf8(out.0.lock().unwrap().clone()).unwrap();
    text.lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

fn without_timestamp(mut value: Value) -> Value {
    let ts = value
        .as_object_mut()
        .unwrap()
        .remove("timestamp")
        .unwrap();
    let ts = ts.as_str().unwrap();
    assert_eq!(ts.len(), "2024-01-02T03:04:05Z".len(), "{ts}");
    assert!(ts.ends_with('Z') && ts.as_bytes()[10] == b'T', "{ts}");
    value
}

#[test]
fn message_is_top_level_and_fields_keep_types() {
    let events = events();
    assert_eq!(events.len(), 3);
    assert_eq!(
        without_timestamp(events[0].clone()),
        json!({
            "level": "INFO",
            "target": "pkgprune::select",
            "message": "selected 2 of 5 versions",
            "fields": {"selected": 2, "dry_run": false},
        })
    );
    assert_eq!(
        without_timestamp(events[1].clone()),
        json!({
            "level": "WARN",
            "target": "globber::match",
            "message": "treating as non-match",
            "fields": {"identifier": "1.0.0", "error": "too slow"},
        })
    );
}

#[test]
fn event_without_fields_has_empty_object() {
    let events = events();
    assert_eq!(
        without_timestamp(events[2].clone()),
        json!({
            "level": "INFO",
            "target": "pkgprune::select",
            "message": "done",
            "fields": {},
        })
    );
}
