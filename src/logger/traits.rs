//! Logger capability.
//!
//! Hosts depend on this trait rather than on a concrete backend.

use std::future::Future;
use std::pin::Pin;

use chrono::NaiveDateTime;
use serde_json::Value;

use crate::error::LoggerResult;
use crate::format::Payload;
use crate::level::Severity;

use super::{AccessRecord, LoggerStatus};

/// One generic log call.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord<'a> {
    pub severity: Severity,
    /// `None` for the unsectioned methods.
    pub section: Option<&'a str>,
    pub payload: Payload,
    /// Overrides the wall clock when set.
    pub timestamp: Option<NaiveDateTime>,
}

impl<'a> LogRecord<'a> {
    pub fn new(severity: Severity, section: Option<&'a str>, payload: Payload) -> Self {
        Self {
            severity,
            section,
            payload,
            timestamp: None,
        }
    }

    pub fn at(mut self, timestamp: NaiveDateTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// Boxed future returned by lifecycle calls.
pub type LifecycleFuture<'a> = Pin<Box<dyn Future<Output = LoggerResult<()>> + Send + 'a>>;

/// A leveled logger with access and action lines.
///
/// Object safe, so hosts can hold an `Arc<dyn Logger>` and swap backends.
/// Emission methods never fail and never block on anything but the
/// underlying write.
pub trait Logger: Send + Sync {
    /// Signal readiness. Awaitable so backends holding resources fit the
    /// same contract.
    fn init(&self) -> LifecycleFuture<'_>;

    /// Release resources.
    fn close(&self) -> LifecycleFuture<'_>;

    /// Active threshold name.
    fn level(&self) -> &'static str;

    /// Counters and identity for health reporting.
    fn status(&self) -> LoggerStatus;

    fn write(&self, record: LogRecord<'_>);

    fn access(&self, record: &AccessRecord);

    /// Audit line for a user action. An empty `user_id` writes nothing.
    fn action(&self, user_id: &str, action: &str, params: Option<&Value>);
}

/// Leveled shorthands over [`Logger::write`].
///
/// Implemented for every logger, trait objects included.
pub trait LoggerExt: Logger {
    fn debug(&self, payload: impl Into<Payload>) {
        self.write(LogRecord::new(Severity::Debug, None, payload.into()));
    }

    fn info(&self, payload: impl Into<Payload>) {
        self.write(LogRecord::new(Severity::Info, None, payload.into()));
    }

    fn warn(&self, payload: impl Into<Payload>) {
        self.write(LogRecord::new(Severity::Warn, None, payload.into()));
    }

    fn error(&self, payload: impl Into<Payload>) {
        self.write(LogRecord::new(Severity::Error, None, payload.into()));
    }

    fn sdebug(&self, section: &str, payload: impl Into<Payload>) {
        self.write(LogRecord::new(Severity::Debug, Some(section), payload.into()));
    }

    fn sinfo(&self, section: &str, payload: impl Into<Payload>) {
        self.write(LogRecord::new(Severity::Info, Some(section), payload.into()));
    }

    fn swarn(&self, section: &str, payload: impl Into<Payload>) {
        self.write(LogRecord::new(Severity::Warn, Some(section), payload.into()));
    }

    fn serror(&self, section: &str, payload: impl Into<Payload>) {
        self.write(LogRecord::new(Severity::Error, Some(section), payload.into()));
    }
}

impl<L: Logger + ?Sized> LoggerExt for L {}
