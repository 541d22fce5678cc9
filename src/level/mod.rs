//! Severity levels and the threshold gate.

mod gate;
mod severity;

pub use gate::LevelGate;
pub use severity::Severity;
