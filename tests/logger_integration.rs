//! Integration tests for the console logger.
//!
//! These tests drive the public API through a `MemorySink` and check the
//! emitted lines and counters end to end.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::thread;

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::{json, Value};

use console_logger::config::LoggerConfig;
use console_logger::format::ErrorValue;
use console_logger::{
    AccessRecord, ConsoleLogger, LogRecord, Logger, LoggerExt, MemorySink, Payload, Severity,
    Stream,
};

/// Logger plus the sink it writes to.
struct Harness {
    logger: ConsoleLogger,
    sink: Arc<MemorySink>,
}

impl Harness {
    fn new(config: LoggerConfig) -> Self {
        let sink = Arc::new(MemorySink::new());
        let logger =
            ConsoleLogger::with_sink(&config, sink.clone()).expect("Failed to create logger");
        Self { logger, sink }
    }

    fn at_level(level: &str) -> Self {
        Self::new(LoggerConfig {
            timezone: false,
            ..LoggerConfig::with_level(level)
        })
    }

    fn all_lines(&self) -> Vec<String> {
        self.sink.lines().into_iter().map(|(_, line)| line).collect()
    }
}

fn fixed_ts() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 15)
        .unwrap()
        .and_hms_milli_opt(10, 30, 45, 123)
        .unwrap()
}

fn ping_record() -> AccessRecord {
    AccessRecord {
        method: "GET".to_string(),
        status: 0,
        duration_ms: 250,
        bytes_read: 10,
        bytes_written: 20,
        user: None,
        client_ip: Some("1.2.3.4".to_string()),
        remote_ip: None,
        user_agent: Some(r#"Mozilla "X""#.to_string()),
        url: "/ping".to_string(),
    }
}

#[test]
fn test_threshold_matrix() {
    let generic = [
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
    ];
    let thresholds = [
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Access,
        Severity::Action,
        Severity::None,
    ];

    for threshold in thresholds {
        let h = Harness::at_level(threshold.name());

        for severity in generic {
            h.logger
                .write(LogRecord::new(severity, None, Payload::from("msg")));
        }
        h.logger.access(&ping_record());
        h.logger.action("u1", "save", None);

        let expected = generic
            .iter()
            .chain([Severity::Access, Severity::Action].iter())
            .filter(|s| threshold != Severity::None && s.rank() >= threshold.rank())
            .count();
        assert_eq!(h.sink.len(), expected, "threshold {threshold}");
    }
}

#[test]
fn test_section_counters() {
    let h = Harness::at_level("debug");
    for _ in 0..3 {
        h.logger.swarn("X", "x happened");
    }
    for _ in 0..5 {
        h.logger.swarn("Y", "y happened");
    }

    let snapshot = h.logger.stat_snapshot();
    let expected: BTreeMap<String, u64> =
        [("X".to_string(), 3), ("Y".to_string(), 5)].into_iter().collect();
    assert_eq!(snapshot.sections(Severity::Warn), Some(&expected));
    assert_eq!(snapshot.count(Severity::Warn), 8);
}

#[test]
fn test_section_counters_case_normalized() {
    let h = Harness::at_level("debug");
    h.logger.sinfo("cache", "miss");
    h.logger.sinfo("Cache", "miss");

    let snapshot = h.logger.stat_snapshot();
    assert_eq!(
        snapshot.sections(Severity::Info).unwrap().get("CACHE"),
        Some(&2)
    );
    // Sections render as given.
    assert!(h.all_lines()[1].contains("[Cache] miss"));
}

#[test]
fn test_stat_disabled() {
    let h = Harness::new(LoggerConfig {
        stat: false,
        ..LoggerConfig::with_level("debug")
    });
    for _ in 0..100 {
        h.logger.swarn("X", "noise");
    }

    let snapshot = h.logger.stat_snapshot();
    assert!(snapshot.sections.iter().all(|m| m.is_empty()));
    assert!(snapshot.counts.iter().all(|c| *c == 0));
    assert_eq!(h.sink.len(), 100);
}

#[test]
fn test_zero_argument_calls_write_nothing() {
    let h = Harness::at_level("debug");
    h.logger.debug(Vec::<Value>::new());
    h.logger.info(Vec::<Value>::new());
    h.logger.warn(Payload::Empty);
    h.logger.error(Payload::from_args(vec![]));
    h.logger.sinfo("db", Vec::<Value>::new());

    assert!(h.sink.is_empty());
    assert_eq!(h.logger.stat_snapshot().count(Severity::Info), 0);
}

#[test]
fn test_formatting_is_deterministic() {
    let h = Harness::new(LoggerConfig {
        cluster: 3,
        ..LoggerConfig::with_level("debug")
    });
    let record = LogRecord::new(
        Severity::Warn,
        Some("db"),
        Payload::from_args(vec![json!("slow query %s took %dms"), json!("q1"), json!(40)]),
    )
    .at(fixed_ts());

    h.logger.write(record.clone());
    h.logger.write(record);

    let lines = h.all_lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], lines[1]);
    assert!(lines[0].starts_with("[W_3][2024-01-15 10:30:45.123 GMT"));
    assert!(lines[0].ends_with("][WARN  ][db] slow query q1 took 40ms"));
}

#[test]
fn test_unsectioned_lines_render_all() {
    let h = Harness::new(LoggerConfig {
        cluster: -1,
        timezone: false,
        ..LoggerConfig::with_level("info")
    });
    h.logger
        .write(LogRecord::new(Severity::Info, None, Payload::from(json!(42))).at(fixed_ts()));

    assert_eq!(
        h.all_lines(),
        vec!["[MASTER][2024-01-15 10:30:45.123][INFO  ][all] 42"]
    );
}

#[test]
fn test_error_value_rendering() {
    let h = Harness::at_level("error");
    h.logger.error(ErrorValue::new(
        "disk full",
        Some("    at write_block\n    at flush".to_string()),
    ));

    let lines = h.sink.lines_on(Stream::Stderr);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("[all] disk full\n    at write_block\n    at flush"));
}

#[test]
fn test_access_line() {
    let h = Harness::at_level("access");
    h.logger.access(&ping_record());

    let lines = h.sink.lines_on(Stream::Stdout);
    assert_eq!(lines.len(), 1);
    let line = &lines[0];
    for field in ["[200]", "[GET]", "[250ms]", "[10]", "[20]", "[-]", "[1.2.3.4]", "/ping"] {
        assert!(line.contains(field), "missing {field} in {line}");
    }
    assert!(line.contains(r#""Mozilla \"X\"""#));
    assert!(line.contains(
        r#"[ACCESS] [200] [GET] [250ms] [10] [20] [-] [1.2.3.4] [-] "Mozilla \"X\"" /ping"#
    ));
    assert_eq!(h.logger.stat_snapshot().count(Severity::Access), 1);
}

#[test]
fn test_access_suppressed_at_none() {
    let h = Harness::at_level("none");
    h.logger.access(&ping_record());
    assert!(h.sink.is_empty());
}

#[test]
fn test_access_boundaries() {
    let h = Harness::at_level("debug");
    for (status, duration) in [(999, 1999), (1000, 2000), (0, 2500)] {
        h.logger.access(&AccessRecord {
            status,
            duration_ms: duration,
            ..AccessRecord::new("GET", "/")
        });
    }

    let lines = h.all_lines();
    assert!(lines[0].contains("[999] [GET] [1999ms]"));
    assert!(lines[1].contains("[200] [GET] [2s]"));
    assert!(lines[2].contains("[200] [GET] [2s]"));
}

#[test]
fn test_action_requires_user_id() {
    for level in ["debug", "action"] {
        let h = Harness::at_level(level);
        h.logger.action("", "delete", Some(&json!({"id": 1})));
        assert!(h.sink.is_empty(), "level {level}");
    }
}

#[test]
fn test_action_line() {
    let h = Harness::at_level("action");
    h.logger
        .action("42", "update_profile", Some(&json!({"name": "bob", "token": "t"})));

    let lines = h.all_lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with(r#"[ACTION] [42] [update_profile] {"name":"bob","token":"[REDACTED]"}"#));
}

#[test]
fn test_action_params_with_lookalike_keys_unchanged() {
    let h = Harness::at_level("action");
    h.logger.action(
        "u1",
        "publish",
        Some(&json!({"author": "bob", "oauth_provider": "google", "keyword": "rust"})),
    );

    let lines = h.all_lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with(
        r#"[ACTION] [u1] [publish] {"author":"bob","keyword":"rust","oauth_provider":"google"}"#
    ));
}

#[test]
fn test_action_suppressed_at_none() {
    let h = Harness::at_level("none");
    h.logger.action("42", "update_profile", None);
    assert!(h.sink.is_empty());
}

#[test]
fn test_concurrent_callers_produce_whole_lines() {
    let h = Arc::new(Harness::at_level("debug"));
    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let h = Arc::clone(&h);
            thread::spawn(move || {
                for i in 0..250 {
                    h.logger.sinfo(
                        "load",
                        Payload::from_args(vec![json!("worker %d line %d"), json!(worker), json!(i)]),
                    );
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("worker panicked");
    }

    let lines = h.all_lines();
    assert_eq!(lines.len(), 1000);
    assert!(lines.iter().all(|l| l.contains("[INFO  ][load] worker ")));
    assert_eq!(
        h.logger
            .stat_snapshot()
            .sections(Severity::Info)
            .unwrap()
            .get("LOAD"),
        Some(&1000)
    );
}

#[tokio::test]
async fn test_lifecycle_and_status() {
    let h = Harness::new(LoggerConfig {
        cluster: 0,
        ..LoggerConfig::with_level("warn")
    });
    h.logger.init().await.expect("init failed");
    assert!(h.logger.is_ready());

    h.logger.warn("w");
    h.logger.info("ignored");

    let status = h.logger.status();
    assert_eq!(status.level, "WARN");
    assert_eq!(status.cluster.as_deref(), Some("W_0"));
    assert_eq!(status.stat.count(Severity::Warn), 1);
    assert_eq!(status.stat.count(Severity::Info), 0);

    h.logger.close().await.expect("close failed");
    assert!(!h.logger.is_ready());
}

#[tokio::test]
async fn test_backend_behind_trait_object() {
    let sink = Arc::new(MemorySink::new());
    let config = LoggerConfig {
        timezone: false,
        ..LoggerConfig::with_level("info")
    };
    let logger: Arc<dyn Logger> =
        Arc::new(ConsoleLogger::with_sink(&config, sink.clone()).expect("Failed to create logger"));

    logger.init().await.expect("init failed");
    logger.sinfo("boot", "started");
    logger.debug("hidden");
    logger.action("u1", "login", None);
    logger.close().await.expect("close failed");

    assert_eq!(logger.level(), "INFO");
    assert_eq!(sink.len(), 2);
    assert!(sink.lines()[0].1.ends_with("[INFO  ][boot] started"));
    assert_eq!(logger.status().stat.count(Severity::Info), 1);
}
