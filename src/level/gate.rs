//! Threshold check applied before any formatting work.

use super::Severity;

/// Decides whether a record of a given severity is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelGate {
    threshold: Severity,
}

impl LevelGate {
    pub fn new(threshold: Severity) -> Self {
        Self { threshold }
    }

    /// Parse a level name; unknown names are rejected.
    pub fn from_name(name: &str) -> crate::error::LoggerResult<Self> {
        Ok(Self::new(name.parse()?))
    }

    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    /// `candidate >= threshold`, with `None` suppressing every severity,
    /// pseudo-levels included.
    pub fn allows(&self, candidate: Severity) -> bool {
        if self.threshold == Severity::None || candidate == Severity::None {
            return false;
        }
        candidate.rank() >= self.threshold.rank()
    }
}
