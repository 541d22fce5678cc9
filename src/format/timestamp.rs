//! Timestamp and cluster tag rendering.

use std::fmt::Write;
use std::sync::OnceLock;

use chrono::{Local, NaiveDateTime, Offset};

use crate::config::CLUSTER_MASTER;

static LOCAL_OFFSET: OnceLock<String> = OnceLock::new();

/// `GMT+HHMM` suffix for the local UTC offset, computed once per process.
pub fn local_offset_suffix() -> &'static str {
    LOCAL_OFFSET.get_or_init(|| {
        let seconds = Local::now().offset().fix().local_minus_utc();
        offset_suffix(seconds)
    })
}

/// Render a UTC offset in seconds as `GMT+HHMM` / `GMT-HHMM`.
pub fn offset_suffix(seconds_east: i32) -> String {
    let sign = if seconds_east < 0 { '-' } else { '+' };
    let minutes = seconds_east.unsigned_abs() / 60;
    format!("GMT{}{:02}{:02}", sign, minutes / 60, minutes % 60)
}

/// Current local wall-clock time.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Append `YYYY-MM-DD HH:MM:SS.mmm` (and the offset suffix if given).
pub fn write_timestamp(buf: &mut String, ts: &NaiveDateTime, suffix: Option<&str>) {
    // Writing into a String cannot fail.
    let _ = write!(buf, "{}", ts.format("%Y-%m-%d %H:%M:%S%.3f"));
    if let Some(suffix) = suffix {
        buf.push(' ');
        buf.push_str(suffix);
    }
}

/// Cluster tag for a process role, `None` when tagging is disabled.
pub fn cluster_tag(role: i32) -> Option<String> {
    match role {
        CLUSTER_MASTER => Some("MASTER".to_string()),
        n if n >= 0 => Some(format!("W_{}", n)),
        _ => None,
    }
}
