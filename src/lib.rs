//! Console Logger Library
//!
//! Leveled console logging with timestamps, cluster role tags, access and
//! action lines, and optional per-section usage counters.
//!
//! ```no_run
//! use console_logger::{ConsoleLogger, LoggerConfig, LoggerExt};
//!
//! let logger = ConsoleLogger::new(&LoggerConfig::with_level("info")).unwrap();
//! logger.sinfo("db", "connected");
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod level;
pub mod logger;
pub mod sink;
pub mod stats;

pub use config::{LoggerConfig, Settings};
pub use error::{LoggerError, LoggerResult};
pub use format::Payload;
pub use level::Severity;
pub use logger::{AccessRecord, ConsoleLogger, LogRecord, Logger, LoggerExt, LoggerStatus};
pub use sink::{ConsoleSink, LineSink, MemorySink, Stream};
