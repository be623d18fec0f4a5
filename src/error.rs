//! Error types for the dump server.

use std::net::SocketAddr;

/// Everything that can go wrong while running the dump server.
#[derive(Debug, thiserror::Error)]
pub enum DumpError {
    /// The listening socket could not be bound. Fatal at startup.
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The accept/serve loop failed.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),

    /// The transport failed while a request body was still streaming in.
    /// Only the affected request is abandoned.
    #[error("failed to read request body: {0}")]
    Body(#[from] axum::Error),
}

pub type Result<T> = std::result::Result<T, DumpError>;
