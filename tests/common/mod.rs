//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use dump_server::dump::WriterSink;
use dump_server::{DumpConfig, DumpServer};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// A dump server on an ephemeral loopback port, recording into memory.
pub struct TestServer {
    pub addr: SocketAddr,
    pub sink: Arc<WriterSink<Vec<u8>>>,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<dump_server::Result<()>>,
}

impl TestServer {
    pub async fn start() -> Self {
        let config = DumpConfig {
            bind_address: "127.0.0.1:0".parse().unwrap(),
        };
        let listener = DumpServer::bind(&config).await.unwrap();
        let addr = listener.local_addr().unwrap();

        let sink = Arc::new(WriterSink::new(Vec::new()));
        let server = DumpServer::new(sink.clone());
        let (tx, rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            server
                .run(listener, async {
                    let _ = rx.await;
                })
                .await
        });

        Self {
            addr,
            sink,
            shutdown: Some(tx),
            handle,
        }
    }

    pub fn output(&self) -> String {
        self.sink.contents()
    }

    /// Stop the server and wait for `run` to return.
    pub async fn stop(mut self) -> dump_server::Result<()> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle.await.unwrap()
    }
}

/// Write `parts` one at a time with a pause in between, so each lands as its
/// own segment, then read the response until the server closes.
#[allow(dead_code)]
pub async fn send_raw(addr: SocketAddr, parts: &[&[u8]]) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    for part in parts {
        stream.write_all(part).await.unwrap();
        stream.flush().await.unwrap();
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    read_response(&mut stream).await
}

#[allow(dead_code)]
pub async fn read_response(stream: &mut TcpStream) -> String {
    let mut response = Vec::new();
    tokio::time::timeout(Duration::from_secs(5), stream.read_to_end(&mut response))
        .await
        .expect("response timed out")
        .unwrap();
    String::from_utf8_lossy(&response).into_owned()
}

/// Poll until the sink holds `records` `Body:` labels or the deadline passes.
#[allow(dead_code)]
pub async fn wait_for_records(server: &TestServer, records: usize) -> String {
    for _ in 0..100 {
        let out = server.output();
        if out.matches("Body:\n").count() >= records {
            return out;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    server.output()
}
