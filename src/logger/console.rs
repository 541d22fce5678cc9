//! Console-backed logger.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};

use crate::config::LoggerConfig;
use crate::error::LoggerResult;
use crate::format::{display, Formatter, DEFAULT_SECTION};
use crate::level::{LevelGate, Severity};
use crate::sink::{ConsoleSink, LineSink, Stream};
use crate::stats::{StatCollector, StatSnapshot};

use super::params::ParamScrubber;
use super::traits::{LifecycleFuture, LogRecord, Logger};
use super::AccessRecord;

const STATE_PENDING: u8 = 0;
const STATE_READY: u8 = 1;
const STATE_CLOSED: u8 = 2;

/// Lifecycle state of a logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleState {
    Pending,
    Ready,
    Closed,
}

/// Health view of a logger.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoggerStatus {
    pub level: &'static str,
    pub cluster: Option<String>,
    pub state: LifecycleState,
    pub stat: StatSnapshot,
}

/// Leveled logger writing to the standard streams.
///
/// Every call runs gate, count, format, write in that order. The cluster
/// tag, threshold and stream routing are fixed at construction.
pub struct ConsoleLogger {
    gate: LevelGate,
    formatter: Formatter,
    stats: Option<StatCollector>,
    scrubber: ParamScrubber,
    split_streams: bool,
    sink: Arc<dyn LineSink>,
    state: AtomicU8,
}

impl ConsoleLogger {
    /// Create a logger writing to stdout/stderr.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::UnknownLevel`](crate::error::LoggerError::UnknownLevel)
    /// if `config.level` is not a severity name.
    pub fn new(config: &LoggerConfig) -> LoggerResult<Self> {
        Self::with_sink(config, Arc::new(ConsoleSink::new()))
    }

    /// Create a logger writing to a custom sink.
    pub fn with_sink(config: &LoggerConfig, sink: Arc<dyn LineSink>) -> LoggerResult<Self> {
        let gate = LevelGate::from_name(&config.level)?;

        debug!(
            level = %gate.threshold(),
            cluster = config.cluster,
            stat = config.stat,
            "Console logger created"
        );

        Ok(Self {
            gate,
            formatter: Formatter::new(config),
            stats: config.stat.then(StatCollector::new),
            scrubber: ParamScrubber::from_config(config),
            split_streams: config.split_streams,
            sink,
            state: AtomicU8::new(STATE_PENDING),
        })
    }

    pub fn threshold(&self) -> Severity {
        self.gate.threshold()
    }

    pub fn state(&self) -> LifecycleState {
        match self.state.load(Ordering::Acquire) {
            STATE_READY => LifecycleState::Ready,
            STATE_CLOSED => LifecycleState::Closed,
            _ => LifecycleState::Pending,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.state() == LifecycleState::Ready
    }

    /// Counters only; all zero when counting is disabled.
    pub fn stat_snapshot(&self) -> StatSnapshot {
        self.stats
            .as_ref()
            .map(StatCollector::snapshot)
            .unwrap_or_else(StatSnapshot::empty)
    }

    fn record(&self, severity: Severity, section: Option<&str>) {
        if let Some(stats) = &self.stats {
            stats.record(severity, section);
        }
    }

    fn stream_for(&self, severity: Severity) -> Stream {
        if self.split_streams && severity.is_error_class() {
            Stream::Stderr
        } else {
            Stream::Stdout
        }
    }
}

impl Logger for ConsoleLogger {
    fn init(&self) -> LifecycleFuture<'_> {
        Box::pin(async move {
            self.state.store(STATE_READY, Ordering::Release);
            debug!(level = self.gate.threshold().name(), "Console logger ready");
            Ok(())
        })
    }

    fn close(&self) -> LifecycleFuture<'_> {
        Box::pin(async move {
            self.state.store(STATE_CLOSED, Ordering::Release);
            debug!("Console logger closed");
            Ok(())
        })
    }

    fn level(&self) -> &'static str {
        self.gate.threshold().name()
    }

    fn status(&self) -> LoggerStatus {
        LoggerStatus {
            level: self.level(),
            cluster: self.formatter.cluster_tag().map(str::to_string),
            state: self.state(),
            stat: self.stat_snapshot(),
        }
    }

    fn write(&self, record: LogRecord<'_>) {
        let severity = record.severity;
        if !severity.is_sectioned() {
            trace!(severity = %severity, "Pseudo-level record ignored on the generic path");
            return;
        }
        if !self.gate.allows(severity) || record.payload.is_empty() {
            return;
        }

        let section = record.section.unwrap_or(DEFAULT_SECTION);
        self.record(severity, Some(section));

        let line = self
            .formatter
            .format(severity, Some(section), &record.payload, record.timestamp);
        if let Some(line) = line {
            self.sink.write_line(self.stream_for(severity), &line);
        }
    }

    fn access(&self, record: &AccessRecord) {
        if !self.gate.allows(Severity::Access) {
            return;
        }
        self.record(Severity::Access, None);

        let mut line = self.formatter.prefix(Severity::Access, None);
        line.push(' ');
        line.push_str(&record.render_fields());
        self.sink.write_line(Stream::Stdout, &line);
    }

    fn action(&self, user_id: &str, action: &str, params: Option<&Value>) {
        if user_id.is_empty() || !self.gate.allows(Severity::Action) {
            return;
        }
        self.record(Severity::Action, None);

        let mut line = self.formatter.prefix(Severity::Action, None);
        line.push_str(" [");
        line.push_str(user_id);
        line.push_str("] [");
        line.push_str(action);
        line.push(']');
        if let Some(params) = params.filter(|p| !p.is_null()) {
            let scrubbed = self.scrubber.scrub(params);
            line.push(' ');
            line.push_str(&serde_json::to_string(&scrubbed).unwrap_or_else(|_| display(&scrubbed)));
        }
        self.sink.write_line(Stream::Stdout, &line);
    }
}
