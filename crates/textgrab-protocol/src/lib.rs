//! Shared types for textgrab.
//!
//! This crate defines the JSON record the CLI prints and the option types
//! used to configure a recognition engine.

mod options;
mod output;

pub use options::*;
pub use output::*;
