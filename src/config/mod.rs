//! Configuration module for the console logger.
//!
//! Holds the logger construction record and the TOML settings file loader.

mod settings;

pub use settings::*;
