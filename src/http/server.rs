//! HTTP server setup.
//!
//! # Responsibilities
//! - Bind the listening socket
//! - Route every request to the dump handler
//! - Stream each body into a [`BodyAccumulator`] and write the record on end-of-body
//! - Answer with an empty default response

use std::future::{Future, IntoFuture};
use std::sync::Arc;

use axum::{
    body::Body,
    extract::{DefaultBodyLimit, Request, State},
    Router,
};
use futures_util::StreamExt;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::DumpConfig;
use crate::dump::{BodyAccumulator, DumpSink, IncomingRequest};
use crate::error::{DumpError, Result};

/// Application state injected into the handler.
#[derive(Clone)]
pub struct AppState {
    pub sink: Arc<dyn DumpSink>,
}

/// HTTP server that prints every request it receives.
pub struct DumpServer {
    router: Router,
}

impl DumpServer {
    /// Create a server writing records to `sink`.
    pub fn new(sink: Arc<dyn DumpSink>) -> Self {
        let router = Self::build_router(AppState { sink });
        Self { router }
    }

    /// Bind the listening socket described by `config`.
    pub async fn bind(config: &DumpConfig) -> Result<TcpListener> {
        let address = config.bind_address;
        let listener = TcpListener::bind(address)
            .await
            .map_err(|source| DumpError::Bind { address, source })?;

        tracing::info!(address = %address, "Listener bound");
        Ok(listener)
    }

    fn build_router(state: AppState) -> Router {
        Router::new()
            .fallback(dump_request)
            .with_state(state)
            .layer(DefaultBodyLimit::disable())
            .layer(TraceLayer::new_for_http())
    }

    /// The router, for driving the server without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serve connections from `listener` until `shutdown` resolves.
    ///
    /// In-flight connections are not drained; they end with the process.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send,
    {
        let addr = listener.local_addr().map_err(DumpError::Serve)?;
        tracing::info!(address = %addr, "HTTP server starting");

        let serve = axum::serve(listener, self.router).into_future();
        tokio::select! {
            result = serve => result.map_err(DumpError::Serve)?,
            _ = shutdown => tracing::info!("Stopped accepting connections"),
        }

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Dump handler. Returns `()`, which axum turns into an empty `200 OK`.
async fn dump_request(State(state): State<AppState>, request: Request) {
    let (parts, body) = request.into_parts();
    let incoming = IncomingRequest::from_parts(&parts);

    tracing::debug!(
        method = %incoming.method,
        target = %incoming.target,
        headers = incoming.headers.len(),
        "Headers received"
    );

    let body = match accumulate_body(body).await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(
                method = %incoming.method,
                target = %incoming.target,
                error = %e,
                "Request aborted before end of body"
            );
            return;
        }
    };

    let record = incoming.with_body(body).render();
    if let Err(e) = state.sink.write_record(&record) {
        tracing::error!(error = %e, "Failed to write request record");
    }
}

/// Read the body stream to its end, keeping chunks in arrival order.
async fn accumulate_body(body: Body) -> Result<Vec<u8>> {
    let mut stream = body.into_data_stream();
    let mut accumulator = BodyAccumulator::new();

    while let Some(chunk) = stream.next().await {
        accumulator.push(chunk?);
    }

    tracing::trace!(
        bytes = accumulator.len(),
        chunks = accumulator.chunk_count(),
        "Body complete"
    );
    Ok(accumulator.finish())
}
