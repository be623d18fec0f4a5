//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Init logging → Bind (fatal on failure) → Serve
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Stop accepting → Exit 0
//! ```
//!
//! There is no drain phase: open connections end with the process.

pub mod signals;

pub use signals::shutdown_signal;
