//! Observability subsystem.
//!
//! Diagnostics go through `tracing` to stderr. Stdout carries request
//! records only.

pub mod logging;

pub use logging::init_logging;
