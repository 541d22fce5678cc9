//! Error types for the console logger.
//!
//! Provides a unified error handling system using thiserror.

mod types;

pub use types::*;
