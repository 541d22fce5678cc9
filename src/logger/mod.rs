//! Logger capability and the console backend.
//!
//! ## Line shapes
//!
//! - generic: `[cluster?][timestamp][LEVEL ][section] message`
//! - access: `[cluster?][timestamp][ACCESS] [200] [GET] [250ms] [10] [20] [user] [client] [remote] "agent" /url`
//! - action: `[cluster?][timestamp][ACTION] [user] [action] {"param":"value"}`
//!
//! Records are emitted iff their severity ranks at or above the configured
//! threshold. A `NONE` threshold suppresses all three shapes.

mod access;
mod console;
mod params;
mod traits;

pub use access::AccessRecord;
pub use console::{ConsoleLogger, LifecycleState, LoggerStatus};
pub use params::ParamScrubber;
pub use traits::{LifecycleFuture, LogRecord, Logger, LoggerExt};
