use std::path::Path;

use tokio::net::TcpListener;

use user_directory::config::{load_config, DirectoryConfig};
use user_directory::http::HttpServer;
use user_directory::lifecycle::Shutdown;
use user_directory::observability::{logging, metrics};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Config comes first so the default log filter can come from it.
    let config = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => DirectoryConfig::default(),
    };

    logging::init(&config.observability.log_filter);

    tracing::info!("user-directory v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        shutdown_grace_secs = config.timeouts.shutdown_grace_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    // Bind before wiring shutdown: a bind failure is fatal and reported
    // immediately, not something to wait for a signal over.
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Listening for connections");

    let shutdown = Shutdown::new();
    shutdown.trigger_on_termination();
    let drain = shutdown.subscribe();

    let server = HttpServer::new(config);
    server.run(listener, drain).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
