//! Line formatting.
//!
//! Turns a severity, an optional section and a [`Payload`] into one
//! text line:
//!
//! ```text
//! [W_0][2024-01-15 10:30:45.123 GMT+0800][INFO  ][all] hello world
//! ```

mod formatter;
mod payload;
mod template;
mod timestamp;

pub use formatter::{Formatter, DEFAULT_SECTION};
pub use payload::{display, ErrorValue, Payload};
pub use template::expand;
pub use timestamp::{cluster_tag, local_offset_suffix, offset_suffix};
