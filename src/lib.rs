//! pandoc-bridge - typed wrapper around the pandoc executable
//!
//! This library crate exposes the configuration layer used by the binary and
//! re-exports the pandoc facade for integration testing.

pub mod config;

pub use pandoc_bridge_exec::{
    check_tool, Bound, Error, ErrorKind, ExecutionMode, Pandoc, PandocConfig, Pending,
    RawStream, StderrPolicy,
};
