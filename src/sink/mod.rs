//! Output sinks for composed lines.

mod writer;

pub use writer::{ConsoleSink, LineSink, MemorySink, Stream};
