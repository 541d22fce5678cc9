//! Severity levels.

use std::fmt;
use std::str::FromStr;

use crate::error::LoggerError;

/// Ranked log importance level.
///
/// `Access` and `Action` are pseudo-levels used only by their dedicated
/// methods. `None` is a threshold sentinel that suppresses everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
    Access = 4,
    Action = 5,
    None = 6,
}

impl Severity {
    /// Every severity that can be attached to a record, in rank order.
    pub const RECORDED: [Severity; 6] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Access,
        Severity::Action,
    ];

    /// Numeric rank; higher is more important.
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Upper-case level name.
    pub const fn name(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Access => "ACCESS",
            Severity::Action => "ACTION",
            Severity::None => "NONE",
        }
    }

    /// Six character wide display tag.
    pub const fn tag(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG ",
            Severity::Info => "INFO  ",
            Severity::Warn => "WARN  ",
            Severity::Error => "ERROR ",
            Severity::Access => "ACCESS",
            Severity::Action => "ACTION",
            Severity::None => "NONE  ",
        }
    }

    /// Whether records of this severity keep per-section counters.
    pub const fn is_sectioned(self) -> bool {
        matches!(
            self,
            Severity::Debug | Severity::Info | Severity::Warn | Severity::Error
        )
    }

    /// Whether lines of this severity belong on the error stream.
    pub const fn is_error_class(self) -> bool {
        matches!(self, Severity::Error)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(Severity::Debug),
            "INFO" => Ok(Severity::Info),
            "WARN" | "WARNING" => Ok(Severity::Warn),
            "ERROR" => Ok(Severity::Error),
            "ACCESS" => Ok(Severity::Access),
            "ACTION" => Ok(Severity::Action),
            "NONE" => Ok(Severity::None),
            _ => Err(LoggerError::UnknownLevel {
                name: s.to_string(),
            }),
        }
    }
}
