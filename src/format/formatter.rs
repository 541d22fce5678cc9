//! Line composition.

use chrono::NaiveDateTime;

use crate::config::LoggerConfig;
use crate::level::Severity;

use super::payload::Payload;
use super::timestamp;

/// Section rendered for calls made without an explicit section.
pub const DEFAULT_SECTION: &str = "all";

/// Renders `[cluster?][timestamp][severity][section?] payload` lines.
///
/// The cluster tag and offset suffix are fixed at construction.
#[derive(Debug, Clone)]
pub struct Formatter {
    cluster_tag: Option<String>,
    offset_suffix: Option<&'static str>,
}

impl Formatter {
    pub fn new(config: &LoggerConfig) -> Self {
        Self {
            cluster_tag: timestamp::cluster_tag(config.cluster),
            offset_suffix: config.timezone.then(timestamp::local_offset_suffix),
        }
    }

    /// Rendered cluster tag without brackets.
    pub fn cluster_tag(&self) -> Option<&str> {
        self.cluster_tag.as_deref()
    }

    /// `[cluster?][timestamp][severity]`, shared by every line shape.
    pub fn prefix(&self, severity: Severity, ts: Option<NaiveDateTime>) -> String {
        let mut line = String::with_capacity(64);
        if let Some(tag) = &self.cluster_tag {
            line.push('[');
            line.push_str(tag);
            line.push(']');
        }
        line.push('[');
        timestamp::write_timestamp(
            &mut line,
            &ts.unwrap_or_else(timestamp::now),
            self.offset_suffix,
        );
        line.push_str("][");
        line.push_str(severity.tag());
        line.push(']');
        line
    }

    /// Compose a full line. Returns `None` for an empty payload.
    pub fn format(
        &self,
        severity: Severity,
        section: Option<&str>,
        payload: &Payload,
        ts: Option<NaiveDateTime>,
    ) -> Option<String> {
        let body = payload.render()?;
        let mut line = self.prefix(severity, ts);
        if let Some(section) = section {
            line.push('[');
            line.push_str(section);
            line.push(']');
        }
        line.push(' ');
        line.push_str(&body);
        Some(line)
    }
}
