//! The per-request record and its body accumulator.

use std::fmt;

use axum::body::Bytes;
use axum::http::request::Parts;

/// Label printed on the line before the decoded body.
pub const BODY_LABEL: &str = "Body:";

/// One HTTP request as received, scoped to a single exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingRequest {
    /// Method token, e.g. `GET`.
    pub method: String,
    /// Request target exactly as it appeared on the request line.
    pub target: String,
    /// Header pairs in received order per name, duplicates kept.
    /// Names are lowercase as delivered by the HTTP layer.
    pub headers: Vec<(String, String)>,
    /// Body bytes, empty until the stream has ended.
    pub body: Vec<u8>,
}

impl IncomingRequest {
    /// Capture method, target and headers from the request head.
    pub fn from_parts(parts: &Parts) -> Self {
        let headers = parts
            .headers
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();

        Self {
            method: parts.method.to_string(),
            target: parts.uri.to_string(),
            headers,
            body: Vec::new(),
        }
    }

    /// Attach the finished body.
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Body decoded as UTF-8, invalid sequences replaced.
    pub fn body_text(&self) -> String {
        decode_lossy(&self.body)
    }

    /// The full console record: method, target, headers, `Body:`, body.
    /// Every line, including the last, ends with `\n`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for IncomingRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.method)?;
        writeln!(f, "{}", self.target)?;
        for (name, value) in &self.headers {
            writeln!(f, "{}: {}", canonical_header_name(name), value)?;
        }
        writeln!(f, "{BODY_LABEL}")?;
        writeln!(f, "{}", self.body_text())
    }
}

/// Ordered body chunks for the active request.
#[derive(Debug, Default)]
pub struct BodyAccumulator {
    chunks: Vec<Bytes>,
    len: usize,
}

impl BodyAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk after everything received so far.
    pub fn push(&mut self, chunk: Bytes) {
        if chunk.is_empty() {
            return;
        }
        self.len += chunk.len();
        self.chunks.push(chunk);
    }

    /// Total bytes received.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Concatenate the chunks in arrival order.
    pub fn finish(self) -> Vec<u8> {
        let mut body = Vec::with_capacity(self.len);
        for chunk in &self.chunks {
            body.extend_from_slice(chunk);
        }
        body
    }
}

/// Decode bytes as UTF-8, substituting U+FFFD for invalid sequences.
pub fn decode_lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// `content-type` → `Content-Type`.
pub fn canonical_header_name(name: &str) -> String {
    name.split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => {
                    first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}
