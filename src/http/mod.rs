//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum/hyper, one task per connection)
//!     → fallback handler (every method, every path)
//!     → dump (record, accumulate body, write to sink)
//!     → empty 200 response
//! ```

pub mod server;

pub use server::DumpServer;
