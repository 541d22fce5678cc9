//! Per-level and per-section call counters.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use serde::Serialize;

use crate::level::Severity;

const SLOTS: usize = Severity::RECORDED.len();

/// Additive usage counters.
///
/// Scalar counts are atomics; section maps sit behind one mutex per
/// severity. Counters never decrease. Drop the collector to reset.
#[derive(Debug, Default)]
pub struct StatCollector {
    counts: [AtomicU64; SLOTS],
    sections: [Mutex<HashMap<String, u64>>; SLOTS],
}

/// Read-only copy of the counters, indexed by severity rank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatSnapshot {
    pub counts: Vec<u64>,
    pub sections: Vec<BTreeMap<String, u64>>,
}

impl StatCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one call. The section is upper-cased and only kept for
    /// sectioned severities.
    pub fn record(&self, severity: Severity, section: Option<&str>) {
        let Some(slot) = slot(severity) else {
            return;
        };
        self.counts[slot].fetch_add(1, Ordering::Relaxed);

        if let Some(section) = section.filter(|_| severity.is_sectioned()) {
            let mut map = self.sections[slot]
                .lock()
                .unwrap_or_else(|e| e.into_inner());
            *map.entry(section.to_uppercase()).or_insert(0) += 1;
        }
    }

    /// Scalar count for one severity.
    pub fn count(&self, severity: Severity) -> u64 {
        slot(severity)
            .map(|s| self.counts[s].load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    pub fn snapshot(&self) -> StatSnapshot {
        StatSnapshot {
            counts: self
                .counts
                .iter()
                .map(|c| c.load(Ordering::Relaxed))
                .collect(),
            sections: self
                .sections
                .iter()
                .map(|m| {
                    m.lock()
                        .unwrap_or_else(|e| e.into_inner())
                        .iter()
                        .map(|(k, v)| (k.clone(), *v))
                        .collect()
                })
                .collect(),
        }
    }
}

impl StatSnapshot {
    /// All-zero snapshot returned when counting is disabled.
    pub fn empty() -> Self {
        Self {
            counts: vec![0; SLOTS],
            sections: vec![BTreeMap::new(); SLOTS],
        }
    }

    pub fn count(&self, severity: Severity) -> u64 {
        slot(severity)
            .and_then(|s| self.counts.get(s).copied())
            .unwrap_or(0)
    }

    /// Section counters for one severity.
    pub fn sections(&self, severity: Severity) -> Option<&BTreeMap<String, u64>> {
        slot(severity).and_then(|s| self.sections.get(s))
    }
}

fn slot(severity: Severity) -> Option<usize> {
    let rank = severity.rank() as usize;
    (rank < SLOTS).then_some(rank)
}
