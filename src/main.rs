use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use dump_server::{lifecycle, observability, DumpConfig, DumpServer, StdoutSink};

/// Print every HTTP request received on port 8000.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {}

#[tokio::main]
async fn main() -> ExitCode {
    let _cli = Cli::parse();
    observability::init_logging();

    let config = DumpConfig::default();
    let listener = match DumpServer::bind(&config).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, "Startup failed");
            eprintln!("dump-server: {e}");
            return ExitCode::FAILURE;
        }
    };

    let server = DumpServer::new(Arc::new(StdoutSink));
    if let Err(e) = server.run(listener, lifecycle::shutdown_signal()).await {
        tracing::error!(error = %e, "Server failed");
        eprintln!("dump-server: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
