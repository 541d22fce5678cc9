//! Access records.

use std::fmt::Write;

use serde::Serialize;

/// One completed request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AccessRecord {
    pub method: String,
    /// Raw status code; 0 and values >= 1000 display as 200.
    pub status: u32,
    pub duration_ms: u64,
    pub bytes_read: u64,
    pub bytes_written: u64,
    pub user: Option<String>,
    pub client_ip: Option<String>,
    pub remote_ip: Option<String>,
    pub user_agent: Option<String>,
    pub url: String,
}

impl AccessRecord {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn display_status(&self) -> u32 {
        if self.status == 0 || self.status >= 1000 {
            200
        } else {
            self.status
        }
    }

    /// `<n>ms` below two seconds, whole seconds from there on.
    pub fn display_duration(&self) -> String {
        if self.duration_ms < 2000 {
            format!("{}ms", self.duration_ms)
        } else {
            format!("{}s", self.duration_ms / 1000)
        }
    }

    /// Fields after the line prefix:
    /// `[status] [method] [duration] [read] [written] [user] [client] [remote] "agent" url`.
    pub fn render_fields(&self) -> String {
        let mut out = String::with_capacity(96 + self.url.len());
        // Writing into a String cannot fail.
        let _ = write!(
            out,
            "[{}] [{}] [{}] [{}] [{}] [{}] [{}] [{}] {} {}",
            self.display_status(),
            self.method,
            self.display_duration(),
            self.bytes_read,
            self.bytes_written,
            or_dash(&self.user),
            or_dash(&self.client_ip),
            or_dash(&self.remote_ip),
            quote_agent(self.user_agent.as_deref()),
            self.url,
        );
        out
    }
}

fn or_dash(value: &Option<String>) -> &str {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v,
        _ => "-",
    }
}

fn quote_agent(agent: Option<&str>) -> String {
    match agent {
        Some(agent) if !agent.is_empty() => format!("\"{}\"", agent.replace('"', "\\\"")),
        _ => "-".to_string(),
    }
}
