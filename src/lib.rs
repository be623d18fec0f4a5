//! HTTP request dump server.
//!
//! Listens on port 8000, prints each request's method, target, headers and
//! body to stdout, and answers with an empty response. Meant for seeing
//! exactly what an HTTP client sends.

pub mod config;
pub mod dump;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::DumpConfig;
pub use dump::{DumpSink, StdoutSink};
pub use error::{DumpError, Result};
pub use http::DumpServer;
