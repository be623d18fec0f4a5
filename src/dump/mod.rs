//! Request transcription.
//!
//! # Data Flow
//! ```text
//! request parts (method, target, headers)
//!     → record.rs (IncomingRequest)
//! body chunks
//!     → record.rs (BodyAccumulator, arrival order)
//! end of body
//!     → IncomingRequest::render
//!     → sink.rs (one write per record)
//! ```

pub mod record;
pub mod sink;

pub use record::{canonical_header_name, decode_lossy, BodyAccumulator, IncomingRequest};
pub use sink::{DumpSink, StdoutSink, WriterSink};
