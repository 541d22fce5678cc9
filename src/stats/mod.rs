//! Usage statistics.
//!
//! Counts emitted records per severity and, for the generic levels, per
//! section. Snapshots are serializable for external health reporting.

mod collector;

pub use collector::{StatCollector, StatSnapshot};
