//! Shared utilities for integration testing.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use user_directory::config::DirectoryConfig;
use user_directory::http::HttpServer;
use user_directory::lifecycle::Shutdown;

/// Spawn a directory server with a fresh store on an ephemeral port.
///
/// Returns the bound address and the live shutdown coordinator. Dropping the
/// coordinator counts as a shutdown request, so tests must hold on to it.
pub async fn spawn_server() -> (SocketAddr, Shutdown) {
    let config = DirectoryConfig::default();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let drain = shutdown.subscribe();
    let server = HttpServer::new(config);
    tokio::spawn(async move {
        let _ = server.run(listener, drain).await;
    });

    (addr, shutdown)
}

/// A client that talks straight to the spawned server.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
