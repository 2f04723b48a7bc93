//! Integration tests for the fieldlog pipeline end to end.
//!
//! These tests verify that the layers work correctly together at their
//! boundaries:
//! - Logger enrichment flowing through router dispatch and formatting
//! - Filters selecting destinations for a real event stream
//! - Registration changes taking effect on a live logger
//! - Error isolation surfacing through the hook
//! - File sinks and concurrent logger clones

use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::thread;

use fieldlog::{
    Config, Destination, Fields, Filter, FormatError, Formatter, Logger, Router, Value,
    default_router, fields, json,
};

// ============================================================================
// Helpers
// ============================================================================

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn lines(&self) -> Vec<String> {
        String::from_utf8(self.0.lock().unwrap().clone())
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

struct FailingSink;

impl Write for FailingSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("sink unavailable"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// ============================================================================
// Pipeline Tests
// ============================================================================

#[test]
fn test_pipeline_delivers_enriched_records() {
    let sink = SharedBuf::default();
    let router = Arc::new(Router::new());
    router.register("all", Destination::to(sink.clone()));

    let logger = Logger::new(Config {
        name: Some("api".to_owned()),
        sort_fields: true,
        router: Some(router),
        ..Config::default()
    });

    logger.log(fields! { "msg" => "started", "port" => 8080 });
    logger.log(fields! { "msg" => "ready" });

    // No timestamp configured, so the output is fully deterministic
    assert_eq!(
        sink.lines(),
        [
            r#"{"logger":"api","msg":"started","port":8080}"#,
            r#"{"logger":"api","msg":"ready"}"#,
        ]
    );
}

#[test]
fn test_filters_route_on_nested_fields() {
    let admin = SharedBuf::default();
    let rest = SharedBuf::default();
    let router = Arc::new(Router::new());
    router.register(
        "admin",
        Destination::to(admin.clone()).filter(Filter::eq("user.id", 7)),
    );
    router.register(
        "rest",
        Destination::to(rest.clone()).filter(Filter::not(Filter::eq("user.id", 7))),
    );

    let logger = Logger::new(Config {
        router: Some(router),
        ..Config::default()
    });

    logger.log(fields! { "msg" => "a", "user" => json!({ "id": 7, "name": "root" }) });
    logger.log(fields! { "msg" => "b", "user" => json!({ "id": 12 }) });
    logger.log(fields! { "msg" => "c" });

    assert_eq!(admin.lines().len(), 1);
    assert!(admin.lines()[0].contains(r#""msg":"a""#));
    // An unresolvable path compares unequal, so "c" lands here too
    assert_eq!(rest.lines().len(), 2);
}

#[test]
fn test_custom_formatter_replaces_json() {
    struct KeyCount;

    impl Formatter for KeyCount {
        fn format(&self, fields: &Fields) -> Result<Vec<u8>, FormatError> {
            Ok(format!("keys={}", fields.len()).into_bytes())
        }
    }

    let sink = SharedBuf::default();
    let router = Arc::new(Router::new());
    router.register("counted", Destination::to(sink.clone()).formatter(KeyCount));

    let logger = Logger::new(Config {
        router: Some(router),
        ..Config::default()
    });
    logger.log(fields! { "a" => 1, "b" => 2 });

    assert_eq!(sink.lines(), ["keys=2"]);
}

// ============================================================================
// Live Reconfiguration Tests
// ============================================================================

#[test]
fn test_registration_changes_affect_live_logger() {
    let sink = SharedBuf::default();
    let router = Arc::new(Router::new());
    router.register("out", Destination::to(sink.clone()));

    let logger = Logger::new(Config {
        router: Some(Arc::clone(&router)),
        ..Config::default()
    });

    logger.log(fields! { "n" => 1 });
    router.register("out", Destination::disabled());
    logger.log(fields! { "n" => 2 });
    router.register("out", Destination::to(sink.clone()));
    logger.log(fields! { "n" => 3 });

    assert_eq!(sink.lines(), [r#"{"n":1}"#, r#"{"n":3}"#]);
}

// ============================================================================
// Error Isolation Tests
// ============================================================================

#[test]
fn test_error_hook_observes_failing_destination() {
    let healthy = SharedBuf::default();
    let failures: Arc<Mutex<Vec<(String, String)>>> = Arc::default();
    let router = Arc::new(Router::new());
    router.register("bad", Destination::to(FailingSink));
    router.register("good", Destination::to(healthy.clone()));
    let seen = Arc::clone(&failures);
    router.on_error(move |id, err| {
        seen.lock().unwrap().push((id.to_owned(), err.to_string()));
    });

    let logger = Logger::new(Config {
        router: Some(router),
        ..Config::default()
    });
    logger.log(fields! { "msg" => "hi" });

    assert_eq!(healthy.lines(), [r#"{"msg":"hi"}"#]);
    let failures = failures.lock().unwrap();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].0, "bad");
    assert!(failures[0].1.contains("sink unavailable"));
}

// ============================================================================
// File and Concurrency Tests
// ============================================================================

#[test]
fn test_file_destination_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.log");
    let file = std::fs::File::create(&path).unwrap();

    let router = Arc::new(Router::new());
    router.register("file", Destination::to(file));

    let logger = Logger::new(Config {
        name: Some("filetest".to_owned()),
        router: Some(router),
        ..Config::default()
    });
    logger.log(fields! { "msg" => "persisted" });

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "{\"msg\":\"persisted\",\"logger\":\"filetest\"}\n");
}

#[test]
fn test_concurrent_logger_clones_share_destinations() {
    let sink = SharedBuf::default();
    let router = Arc::new(Router::new());
    router.register("out", Destination::to(sink.clone()));

    let logger = Logger::new(Config {
        name: Some("worker".to_owned()),
        router: Some(router),
        ..Config::default()
    });

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let logger = logger.clone();
            thread::spawn(move || {
                for i in 0..25 {
                    logger.log(fields! { "worker" => worker, "i" => i });
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let lines = sink.lines();
    assert_eq!(lines.len(), 100);
    for line in &lines {
        let event: Value = serde_json::from_str(line).unwrap();
        assert_eq!(event["logger"], "worker");
    }
}

// ============================================================================
// Default Router Tests
// ============================================================================

#[test]
fn test_default_router_serves_unconfigured_loggers() {
    // The only test that touches the process-wide default router
    let sink = SharedBuf::default();
    default_router().register("capture", Destination::to(sink.clone()));

    let logger = Logger::new(Config::default());
    assert!(Arc::ptr_eq(logger.router(), &default_router()));

    logger.log(fields! { "msg" => "via default" });
    assert_eq!(sink.lines(), [r#"{"msg":"via default"}"#]);

    assert!(default_router().remove("capture"));
}
