//! filedrop entry point.
//!
//! Parses the two positional arguments, initializes tracing, resolves the
//! outbound-facing local IP, and runs the connection server. Exit status is
//! 0 on idle-timeout shutdown or termination signal, non-zero on any fatal
//! error.

use std::num::NonZeroU16;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use filedrop::config::ServerConfig;
use filedrop::error::ServerError;
use filedrop::lifecycle::signals;
use filedrop::net::probe;
use filedrop::server::FileReceiver;

#[derive(Parser)]
#[command(name = "filedrop")]
#[command(about = "Receives files over plain TCP into a numbered drop directory", long_about = None)]
struct Cli {
    /// TCP port to listen on (1-65535).
    port: NonZeroU16,

    /// Directory numbered files are written into.
    dir: PathBuf,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "filedrop=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("filedrop v0.1.0 starting");

    if let Err(e) = run(cli).await {
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), ServerError> {
    signals::spawn_signal_watcher();

    let server_ip = probe::local_ip().await?;
    tracing::info!(server_ip = %server_ip, "Resolved outbound-facing address");

    let config = ServerConfig::new(cli.port, cli.dir);
    tracing::info!(
        port = config.port.get(),
        file_dir = %config.file_dir.display(),
        max_file_size = config.limits.max_file_size,
        "Configuration loaded"
    );

    let server = FileReceiver::new(config).await?;
    server.run().await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
